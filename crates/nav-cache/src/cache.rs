//! Tick-stamped two-tier matrix cache.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use nav_core::{RegionId, Tick};
use nav_spatial::{CostMatrix, WorldView, COST_ROAD};

use crate::build::{add_agents, structure_matrix};

#[derive(Clone, Debug)]
struct Entry {
    built:  Tick,
    matrix: Arc<CostMatrix>,
}

/// Owns the structural and combined matrices for every region seen so far.
///
/// The cache is a plain field of its owner; there is no shared or global
/// instance.
#[derive(Clone, Debug)]
pub struct CostMatrixCache {
    road_cost:  u8,
    structural: FxHashMap<RegionId, Entry>,
    combined:   FxHashMap<RegionId, Entry>,
}

impl Default for CostMatrixCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CostMatrixCache {
    pub fn new() -> Self {
        Self::with_road_cost(COST_ROAD)
    }

    /// A cache whose structural matrices price roads at `road_cost`.
    pub fn with_road_cost(road_cost: u8) -> Self {
        Self {
            road_cost,
            structural: FxHashMap::default(),
            combined:   FxHashMap::default(),
        }
    }

    pub fn road_cost(&self) -> u8 {
        self.road_cost
    }

    /// Structure-only matrix for `region`.
    ///
    /// Built on first request.  Afterwards it is rebuilt only when `fresh` is
    /// set and the stored entry is from an earlier tick, so several fresh
    /// requests within one tick share one build.
    pub fn structural<W: WorldView + ?Sized>(&mut self, world: &W, region: RegionId, fresh: bool) -> Arc<CostMatrix> {
        let now = world.tick();
        if let Some(entry) = self.structural.get(&region) {
            if !fresh || entry.built == now {
                return Arc::clone(&entry.matrix);
            }
        }
        let matrix = Arc::new(structure_matrix(world, region, self.road_cost));
        debug!(%region, tick = %now, fresh, overridden = matrix.overridden(), "built structural matrix");
        self.structural.insert(region, Entry { built: now, matrix: Arc::clone(&matrix) });
        matrix
    }

    /// Structures plus observed agents, rebuilt once per tick from a fresh
    /// structural matrix.
    pub fn combined<W: WorldView + ?Sized>(&mut self, world: &W, region: RegionId) -> Arc<CostMatrix> {
        let now = world.tick();
        if let Some(entry) = self.combined.get(&region) {
            if entry.built == now {
                return Arc::clone(&entry.matrix);
            }
        }
        let mut matrix = (*self.structural(world, region, true)).clone();
        add_agents(&mut matrix, world, region);
        let matrix = Arc::new(matrix);
        debug!(%region, tick = %now, "built combined matrix");
        self.combined.insert(region, Entry { built: now, matrix: Arc::clone(&matrix) });
        matrix
    }

    /// Drop both tiers for `region`.
    pub fn invalidate(&mut self, region: RegionId) {
        self.structural.remove(&region);
        self.combined.remove(&region);
    }

    pub fn clear(&mut self) {
        self.structural.clear();
        self.combined.clear();
    }

    /// Number of cached matrices across both tiers.
    pub fn len(&self) -> usize {
        self.structural.len() + self.combined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
