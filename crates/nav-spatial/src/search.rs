//! Fine-grained grid search trait and reference Dijkstra implementation.
//!
//! # Contract
//!
//! [`GridSearch::search`] finds a tile path from `origin` to any tile within
//! `goal.range` of `goal.pos`.  Per-region costs come from the caller through
//! a callback that is invoked at most once per region per search.  When the
//! operation budget runs out or the goal is unreachable the search returns
//! its best partial path with `incomplete = true`; this is a soft failure,
//! never an error.
//!
//! # Cost units
//!
//! A step costs the value in the region's [`CostMatrix`] for the entered
//! tile, or the terrain cost from [`SearchParams`] when the matrix holds `0`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use nav_core::{Direction, RegionId, WorldPos};

use crate::matrix::{CostMatrix, COST_IMPASSABLE};

/// Region budget used when the caller does not set one.
pub const DEFAULT_MAX_REGIONS: u32 = 16;

// ── Request / response types ──────────────────────────────────────────────────

/// Target of a search: any tile within `range` of `pos`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchGoal {
    pub pos:   WorldPos,
    pub range: u32,
}

/// Search budget and terrain weights.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Node expansions allowed before giving up.
    pub max_ops:     u32,
    /// Distinct regions the search may open.
    pub max_regions: u32,
    pub plain_cost:  u8,
    pub swamp_cost:  u8,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_ops:     2_000,
            max_regions: DEFAULT_MAX_REGIONS,
            plain_cost:  1,
            swamp_cost:  5,
        }
    }
}

/// What the caller's region callback decided for one region.
#[derive(Clone, Debug)]
pub enum RegionCost {
    /// The search must not enter this region.
    Blocked,
    /// Terrain costs only.
    Terrain,
    /// Terrain costs overridden by a cost matrix.
    Matrix(Arc<CostMatrix>),
}

/// Result of a grid search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Tiles to walk, excluding `origin`.
    pub path:       Vec<WorldPos>,
    /// Node expansions performed.
    pub ops:        u32,
    /// Total cost of `path`.
    pub cost:       u32,
    /// `true` when the goal was not reached; `path` then leads to the closest
    /// tile found.
    pub incomplete: bool,
}

// ── GridSearch trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path oracle.
pub trait GridSearch {
    fn search(
        &self,
        origin:      WorldPos,
        goal:        &SearchGoal,
        params:      &SearchParams,
        region_cost: &mut dyn FnMut(RegionId) -> RegionCost,
    ) -> SearchResult;
}

// ── Terrain ───────────────────────────────────────────────────────────────────

/// Natural terrain of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Plain,
    Swamp,
    Wall,
}

/// Terrain lookup used by [`DijkstraGridSearch`].
pub trait TerrainSource {
    fn terrain(&self, pos: WorldPos) -> Terrain;
}

impl<F: Fn(WorldPos) -> Terrain> TerrainSource for F {
    fn terrain(&self, pos: WorldPos) -> Terrain {
        self(pos)
    }
}

// ── DijkstraGridSearch ────────────────────────────────────────────────────────

/// Uniform-cost search over world-space tiles.
///
/// Tiles are keyed by their global coordinates so paths cross region
/// boundaries naturally.  Diagonal steps between regions are not allowed:
/// regions connect only through straight moves across a shared edge.
pub struct DijkstraGridSearch<T: TerrainSource> {
    pub terrain: T,
}

impl<T: TerrainSource> DijkstraGridSearch<T> {
    pub fn new(terrain: T) -> Self {
        Self { terrain }
    }
}

type Key = (i32, i32);

/// Regions opened during one search, with their resolved costs.
struct RegionTable<'a> {
    resolved:    FxHashMap<RegionId, RegionCost>,
    max_regions: u32,
    callback:    &'a mut dyn FnMut(RegionId) -> RegionCost,
}

impl RegionTable<'_> {
    fn lookup(&mut self, region: RegionId) -> &RegionCost {
        if !self.resolved.contains_key(&region) {
            let cost = if self.resolved.len() as u32 >= self.max_regions {
                RegionCost::Blocked
            } else {
                (self.callback)(region)
            };
            self.resolved.insert(region, cost);
        }
        &self.resolved[&region]
    }
}

impl<T: TerrainSource> DijkstraGridSearch<T> {
    /// Cost of stepping onto `pos`, or `None` if impassable.
    fn step_cost(&self, pos: WorldPos, regions: &mut RegionTable<'_>, params: &SearchParams) -> Option<u32> {
        let matrix_cost = match regions.lookup(pos.region) {
            RegionCost::Blocked => return None,
            RegionCost::Terrain => 0,
            RegionCost::Matrix(m) => m.get(pos.coord),
        };
        if matrix_cost == COST_IMPASSABLE {
            return None;
        }
        if matrix_cost > 0 {
            return Some(matrix_cost as u32);
        }
        match self.terrain.terrain(pos) {
            Terrain::Wall => None,
            Terrain::Swamp => Some(params.swamp_cost as u32),
            Terrain::Plain => Some(params.plain_cost as u32),
        }
    }
}

impl<T: TerrainSource> GridSearch for DijkstraGridSearch<T> {
    fn search(
        &self,
        origin:      WorldPos,
        goal:        &SearchGoal,
        params:      &SearchParams,
        region_cost: &mut dyn FnMut(RegionId) -> RegionCost,
    ) -> SearchResult {
        let mut regions = RegionTable {
            resolved:    FxHashMap::default(),
            max_regions: params.max_regions.max(1),
            callback:    region_cost,
        };
        // The origin region is always opened first.
        regions.lookup(origin.region);

        let start = origin.global();
        let target = goal.pos.global();
        let range_of = |k: Key| k.0.abs_diff(target.0).max(k.1.abs_diff(target.1));

        let mut dist: FxHashMap<Key, u32> = FxHashMap::default();
        let mut prev: FxHashMap<Key, Key> = FxHashMap::default();
        dist.insert(start, 0);

        // Min-heap on (cost, key); the key gives deterministic tie-breaking.
        let mut heap: BinaryHeap<Reverse<(u32, Key)>> = BinaryHeap::new();
        heap.push(Reverse((0, start)));

        let mut ops = 0u32;
        let mut best = (range_of(start), 0u32, start);
        let mut reached = None;

        while let Some(Reverse((cost, key))) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist.get(&key).copied().unwrap_or(u32::MAX) {
                continue;
            }

            let range = range_of(key);
            if range <= goal.range {
                reached = Some((key, cost));
                break;
            }
            if (range, cost) < (best.0, best.1) {
                best = (range, cost, key);
            }

            if ops >= params.max_ops {
                break;
            }
            ops += 1;

            let here = WorldPos::from_global(key.0, key.1);
            for dir in Direction::ALL {
                let (dx, dy) = dir.offset();
                let next_key = (key.0 + dx, key.1 + dy);
                let next = WorldPos::from_global(next_key.0, next_key.1);
                if next.region != here.region && dx != 0 && dy != 0 {
                    continue;
                }
                let Some(step) = self.step_cost(next, &mut regions, params) else {
                    continue;
                };
                let new_cost = cost.saturating_add(step);
                if new_cost < dist.get(&next_key).copied().unwrap_or(u32::MAX) {
                    dist.insert(next_key, new_cost);
                    prev.insert(next_key, key);
                    heap.push(Reverse((new_cost, next_key)));
                }
            }
        }

        let (end, cost, incomplete) = match reached {
            Some((key, cost)) => (key, cost, false),
            None => (best.2, best.1, true),
        };

        SearchResult { path: reconstruct(&prev, start, end), ops, cost, incomplete }
    }
}

fn reconstruct(prev: &FxHashMap<Key, Key>, start: Key, end: Key) -> Vec<WorldPos> {
    let mut path = Vec::new();
    let mut cur = end;
    while cur != start {
        path.push(WorldPos::from_global(cur.0, cur.1));
        match prev.get(&cur) {
            Some(&p) => cur = p,
            None => break,
        }
    }
    path.reverse();
    path
}
