//! The query surface the host simulation exposes to navigation.

use nav_core::{Coord, RegionId, Tick};

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Kind of a placed structure or construction site.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum StructureKind {
    /// Preferred terrain; cheaper than plain ground.
    Road,
    /// Semi-obstructed but walkable.
    Container,
    /// Walkable for its owner, or for everyone when public.
    Rampart,
    Wall,
    Spawn,
    Extension,
    Tower,
    Storage,
    Link,
    Controller,
    /// Anything else the host knows about; always impassable.
    Other,
}

impl StructureKind {
    /// Construction sites of these kinds never block movement.
    #[inline]
    pub fn is_walkable_site(self) -> bool {
        matches!(self, StructureKind::Container | StructureKind::Road | StructureKind::Rampart)
    }
}

/// A static or semi-static obstacle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub coord: Coord,
    pub kind:  StructureKind,
    /// Owned by the navigating side.
    pub mine:   bool,
    /// Open to everyone regardless of owner (ramparts only).
    pub public: bool,
}

impl Structure {
    /// A neutral structure of the given kind.
    pub fn new(kind: StructureKind, coord: Coord) -> Self {
        Self { coord, kind, mine: false, public: false }
    }
}

/// A structure under construction by the navigating side.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionSite {
    pub coord: Coord,
    pub kind:  StructureKind,
}

/// Ownership signal of a region's controller.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controller {
    /// Someone owns the controller.
    pub owned: bool,
    /// The owner is the navigating side.
    pub mine:  bool,
}

impl Controller {
    /// Owned by somebody other than the navigating side.
    #[inline]
    pub fn is_foreign(self) -> bool {
        self.owned && !self.mine
    }
}

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Read access to world state plus the small amount of region metadata
/// (the "avoid" flag) that navigation maintains.
///
/// Enumeration methods only return data for regions the host currently
/// observes; for unobserved regions they return empty collections.
pub trait WorldView {
    /// Current simulation tick.
    fn tick(&self) -> Tick;

    /// Monotonic meter of computation spent so far (e.g. CPU milliseconds).
    /// Navigation samples it around path searches.
    fn cost_used(&self) -> f64;

    /// Whether the host has live observation of `region` this tick.
    fn is_observed(&self, region: RegionId) -> bool;

    /// Structures in `region`.
    fn structures(&self, region: RegionId) -> Vec<Structure>;

    /// Own construction sites in `region`.
    fn construction_sites(&self, region: RegionId) -> Vec<ConstructionSite>;

    /// Tiles occupied by agents in `region`.
    fn agent_coords(&self, region: RegionId) -> Vec<Coord>;

    /// Controller ownership signal, if the region has a controller.
    fn controller(&self, region: RegionId) -> Option<Controller>;

    /// Whether `region` is flagged to be avoided.
    fn is_avoided(&self, region: RegionId) -> bool;

    /// Set or clear the avoid flag for `region`.
    fn set_avoided(&mut self, region: RegionId, avoid: bool);

    /// Linear region distance.  Defaults to lattice Chebyshev distance.
    fn linear_distance(&self, a: RegionId, b: RegionId) -> u32 {
        a.linear_distance(b)
    }
}
