//! In-memory reference world: [`GridWorld`] implements [`WorldView`] and
//! [`TerrainMap`] implements [`TerrainSource`].
//!
//! Both are plain data holders used by tests and the demo binary.  Regions
//! with no terrain rows are open plains.

use rustc_hash::{FxHashMap, FxHashSet};

use nav_core::{Coord, RegionId, Tick, WorldPos, REGION_SIZE};

use crate::search::{Terrain, TerrainSource};
use crate::world::{ConstructionSite, Controller, Structure, WorldView};

// ── TerrainMap ────────────────────────────────────────────────────────────────

/// Per-region terrain grids.
#[derive(Clone, Debug, Default)]
pub struct TerrainMap {
    regions: FxHashMap<RegionId, Box<[Terrain]>>,
}

impl TerrainMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: WorldPos, terrain: Terrain) {
        let cells = self
            .regions
            .entry(pos.region)
            .or_insert_with(|| vec![Terrain::Plain; REGION_SIZE as usize * REGION_SIZE as usize].into_boxed_slice());
        cells[pos.coord.index()] = terrain;
    }

    /// Load a region from text rows: `#` wall, `~` swamp, anything else
    /// plain.  Missing rows and columns stay plain.
    pub fn load_rows(&mut self, region: RegionId, rows: &[&str]) {
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let Some(coord) = Coord::try_new(x as i32, y as i32) else {
                    continue;
                };
                let terrain = match ch {
                    '#' => Terrain::Wall,
                    '~' => Terrain::Swamp,
                    _ => Terrain::Plain,
                };
                self.set(WorldPos::at(region, coord), terrain);
            }
        }
    }
}

impl TerrainSource for TerrainMap {
    fn terrain(&self, pos: WorldPos) -> Terrain {
        self.regions
            .get(&pos.region)
            .map_or(Terrain::Plain, |cells| cells[pos.coord.index()])
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// A mutable world snapshot.
///
/// `tick` and `cost_meter` are advanced by the owner; nothing here moves on
/// its own.
#[derive(Clone, Debug, Default)]
pub struct GridWorld {
    pub tick:       Tick,
    pub cost_meter: f64,
    observed:       FxHashSet<RegionId>,
    structures:     FxHashMap<RegionId, Vec<Structure>>,
    sites:          FxHashMap<RegionId, Vec<ConstructionSite>>,
    agents:         FxHashMap<RegionId, Vec<Coord>>,
    controllers:    FxHashMap<RegionId, Controller>,
    avoided:        FxHashSet<RegionId>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `region` as observed.
    pub fn observe(&mut self, region: RegionId) {
        self.observed.insert(region);
    }

    pub fn unobserve(&mut self, region: RegionId) {
        self.observed.remove(&region);
    }

    pub fn add_structure(&mut self, region: RegionId, structure: Structure) {
        self.structures.entry(region).or_default().push(structure);
    }

    pub fn add_site(&mut self, region: RegionId, site: ConstructionSite) {
        self.sites.entry(region).or_default().push(site);
    }

    pub fn set_controller(&mut self, region: RegionId, controller: Controller) {
        self.controllers.insert(region, controller);
    }

    /// Replace all agent positions with `positions`.
    pub fn set_agents<I: IntoIterator<Item = WorldPos>>(&mut self, positions: I) {
        self.agents.clear();
        for pos in positions {
            self.agents.entry(pos.region).or_default().push(pos.coord);
        }
    }

    /// Move to the next tick.
    pub fn advance(&mut self) {
        self.tick = self.tick + 1;
    }
}

impl WorldView for GridWorld {
    fn tick(&self) -> Tick {
        self.tick
    }

    fn cost_used(&self) -> f64 {
        self.cost_meter
    }

    fn is_observed(&self, region: RegionId) -> bool {
        self.observed.contains(&region)
    }

    fn structures(&self, region: RegionId) -> Vec<Structure> {
        if !self.is_observed(region) {
            return Vec::new();
        }
        self.structures.get(&region).cloned().unwrap_or_default()
    }

    fn construction_sites(&self, region: RegionId) -> Vec<ConstructionSite> {
        if !self.is_observed(region) {
            return Vec::new();
        }
        self.sites.get(&region).cloned().unwrap_or_default()
    }

    fn agent_coords(&self, region: RegionId) -> Vec<Coord> {
        if !self.is_observed(region) {
            return Vec::new();
        }
        self.agents.get(&region).cloned().unwrap_or_default()
    }

    fn controller(&self, region: RegionId) -> Option<Controller> {
        self.controllers.get(&region).copied()
    }

    fn is_avoided(&self, region: RegionId) -> bool {
        self.avoided.contains(&region)
    }

    fn set_avoided(&mut self, region: RegionId, avoid: bool) {
        if avoid {
            self.avoided.insert(region);
        } else {
            self.avoided.remove(&region);
        }
    }
}
