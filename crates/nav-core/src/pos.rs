//! In-region coordinates and absolute world positions.
//!
//! Every region is a `REGION_SIZE × REGION_SIZE` tile grid.  Tiles on the
//! outermost ring (`x` or `y` equal to `0` or `MAX_COORD`) are region edges.
//! Regions sit side by side in world space, so a step off an edge lands on
//! the facing edge tile of the neighbouring region.

use std::fmt;

use crate::{Direction, RegionId};

/// Tiles per region side.
pub const REGION_SIZE: u8 = 50;

/// Largest valid in-region coordinate.
pub const MAX_COORD: u8 = REGION_SIZE - 1;

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A tile coordinate inside a single region, `0..=MAX_COORD` on both axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Construct a coordinate.  Debug builds assert the bounds.
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x <= MAX_COORD && y <= MAX_COORD, "({x}, {y}) out of bounds");
        Self { x, y }
    }

    /// Checked construction from signed components; `None` outside the grid.
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        let max = MAX_COORD as i32;
        if (0..=max).contains(&x) && (0..=max).contains(&y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    /// `true` for tiles on the region boundary.
    #[inline]
    pub fn is_edge(self) -> bool {
        self.x == 0 || self.y == 0 || self.x == MAX_COORD || self.y == MAX_COORD
    }

    /// Row-major index into a `REGION_SIZE²` grid.
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * REGION_SIZE as usize + self.x as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── WorldPos ──────────────────────────────────────────────────────────────────

/// An absolute position: a region plus a tile inside it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub region: RegionId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub coord: Coord,
}

impl WorldPos {
    #[inline]
    pub fn new(region: RegionId, x: u8, y: u8) -> Self {
        Self { region, coord: Coord::new(x, y) }
    }

    #[inline]
    pub fn at(region: RegionId, coord: Coord) -> Self {
        Self { region, coord }
    }

    /// Continuous world-space coordinates (`region * REGION_SIZE + coord`).
    #[inline]
    pub fn global(self) -> (i32, i32) {
        let size = REGION_SIZE as i32;
        (
            self.region.x * size + self.coord.x as i32,
            self.region.y * size + self.coord.y as i32,
        )
    }

    /// Inverse of [`global`][Self::global].
    pub fn from_global(gx: i32, gy: i32) -> Self {
        let size = REGION_SIZE as i32;
        let region = RegionId::new(gx.div_euclid(size), gy.div_euclid(size));
        let coord = Coord { x: gx.rem_euclid(size) as u8, y: gy.rem_euclid(size) as u8 };
        Self { region, coord }
    }

    /// Chebyshev tile distance in world space.  Positions in regions that are
    /// not lattice neighbours are treated as infinitely far apart
    /// (`u32::MAX`).
    #[inline]
    pub fn range_to(self, other: WorldPos) -> u32 {
        if self.region.linear_distance(other.region) > 1 {
            return u32::MAX;
        }
        let (ax, ay) = self.global();
        let (bx, by) = other.global();
        ax.abs_diff(bx).max(ay.abs_diff(by))
    }

    /// `true` when `other` is at most one tile away, across a region edge
    /// included.
    #[inline]
    pub fn is_near_to(self, other: WorldPos) -> bool {
        self.range_to(other) <= 1
    }

    /// Compass direction from `self` toward `other`, computed in world space.
    /// `None` when both positions coincide.
    pub fn direction_to(self, other: WorldPos) -> Option<Direction> {
        let (ax, ay) = self.global();
        let (bx, by) = other.global();
        Direction::toward(bx - ax, by - ay)
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {},{}]", self.region, self.coord.x, self.coord.y)
    }
}

// ── HasPos ────────────────────────────────────────────────────────────────────

/// Anything that exposes a world position can be used as a navigation goal.
pub trait HasPos {
    fn pos(&self) -> WorldPos;
}

impl HasPos for WorldPos {
    #[inline]
    fn pos(&self) -> WorldPos {
        *self
    }
}
