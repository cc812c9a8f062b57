//! Per-region traversal-cost grid.
//!
//! A cell value of `0` means "use the terrain default"; any other value
//! replaces the terrain cost for that tile, with [`COST_IMPASSABLE`] marking
//! a tile the search must never enter.

use std::fmt;

use nav_core::{Coord, REGION_SIZE};

/// Cost marking a tile as impassable.
pub const COST_IMPASSABLE: u8 = 0xff;

/// Default cost for preferred terrain (roads).
pub const COST_ROAD: u8 = 1;

/// Cost for semi-obstructed tiles (containers).
pub const COST_CONTAINER: u8 = 5;

const CELLS: usize = REGION_SIZE as usize * REGION_SIZE as usize;

/// A `REGION_SIZE × REGION_SIZE` byte grid, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix {
    bits: Box<[u8]>,
}

impl CostMatrix {
    /// An all-zero matrix (terrain costs everywhere).
    pub fn new() -> Self {
        Self { bits: vec![0; CELLS].into_boxed_slice() }
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> u8 {
        self.bits[coord.index()]
    }

    #[inline]
    pub fn set(&mut self, coord: Coord, cost: u8) {
        self.bits[coord.index()] = cost;
    }

    /// `true` if the tile is marked [`COST_IMPASSABLE`].
    #[inline]
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.get(coord) == COST_IMPASSABLE
    }

    /// Number of tiles carrying a non-default cost.
    pub fn overridden(&self) -> usize {
        self.bits.iter().filter(|&&b| b != 0).count()
    }

    /// Raw row-major cell values.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl Default for CostMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocked = self.bits.iter().filter(|&&b| b == COST_IMPASSABLE).count();
        f.debug_struct("CostMatrix")
            .field("overridden", &self.overridden())
            .field("blocked", &blocked)
            .finish()
    }
}
