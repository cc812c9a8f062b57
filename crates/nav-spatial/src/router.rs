//! Region-level routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The coarse route planner calls routing via the [`RegionRouter`] trait, so
//! hosts with their own region-adjacency planner plug it in directly.  The
//! default [`DijkstraRegionRouter`] walks the four-connected region lattice
//! inside a rectangular bound.
//!
//! # Cost units
//!
//! Callback costs are `f64` region weights; non-finite or negative weights
//! mark a region as impassable.  Internally they are accumulated as integer
//! thousandths to keep the heap ordering total.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use nav_core::RegionId;

use crate::SpatialError;

// ── RegionRouter trait ────────────────────────────────────────────────────────

/// Pluggable region-adjacency planner.
pub trait RegionRouter {
    /// Regions to traverse from `from` to `to`, excluding `from` and ending
    /// with `to`.  `cost` is asked for the weight of entering each region.
    ///
    /// `from == to` is an empty route rather than an error.
    fn find_route(
        &self,
        from: RegionId,
        to:   RegionId,
        cost: &mut dyn FnMut(RegionId) -> f64,
    ) -> Result<Vec<RegionId>, SpatialError>;
}

// ── DijkstraRegionRouter ──────────────────────────────────────────────────────

/// Dijkstra over the region lattice, restricted to the inclusive rectangle
/// `min..=max`.
#[derive(Copy, Clone, Debug)]
pub struct DijkstraRegionRouter {
    pub min: RegionId,
    pub max: RegionId,
}

impl DijkstraRegionRouter {
    pub fn within(min: RegionId, max: RegionId) -> Self {
        Self { min, max }
    }

    #[inline]
    fn contains(&self, region: RegionId) -> bool {
        (self.min.x..=self.max.x).contains(&region.x) && (self.min.y..=self.max.y).contains(&region.y)
    }
}

impl RegionRouter for DijkstraRegionRouter {
    fn find_route(
        &self,
        from: RegionId,
        to:   RegionId,
        cost: &mut dyn FnMut(RegionId) -> f64,
    ) -> Result<Vec<RegionId>, SpatialError> {
        for region in [from, to] {
            if !self.contains(region) {
                return Err(SpatialError::OutOfBounds(region));
            }
        }
        if from == to {
            return Ok(vec![]);
        }

        // Each region's weight is asked for at most once.
        let mut weights: FxHashMap<RegionId, Option<u64>> = FxHashMap::default();
        let mut weight_of = |region: RegionId| -> Option<u64> {
            *weights.entry(region).or_insert_with(|| {
                let w = cost(region);
                (w.is_finite() && w >= 0.0).then(|| (w * 1000.0).round() as u64)
            })
        };

        let mut dist: FxHashMap<RegionId, u64> = FxHashMap::default();
        let mut prev: FxHashMap<RegionId, RegionId> = FxHashMap::default();
        dist.insert(from, 0);

        let mut heap: BinaryHeap<Reverse<(u64, RegionId)>> = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((d, region))) = heap.pop() {
            if region == to {
                let mut route = vec![to];
                let mut cur = to;
                while let Some(&p) = prev.get(&cur) {
                    if p == from {
                        break;
                    }
                    route.push(p);
                    cur = p;
                }
                route.reverse();
                return Ok(route);
            }
            if d > dist.get(&region).copied().unwrap_or(u64::MAX) {
                continue;
            }

            for next in region.neighbors() {
                if !self.contains(next) {
                    continue;
                }
                let Some(w) = weight_of(next) else {
                    continue;
                };
                let nd = d.saturating_add(w);
                if nd < dist.get(&next).copied().unwrap_or(u64::MAX) {
                    dist.insert(next, nd);
                    prev.insert(next, region);
                    heap.push(Reverse((nd, next)));
                }
            }
        }

        Err(SpatialError::NoRoute { from, to })
    }
}
