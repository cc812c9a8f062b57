//! Region identifiers.
//!
//! # Naming
//!
//! Regions tile the world on an integer lattice.  Each lattice cell has a
//! canonical name built from two labelled axes:
//!
//! ```text
//!   lattice x:  … -2  -1 |  0   1 …        lattice y:  … -2  -1 |  0   1 …
//!   label:      … W1  W0 | E0  E1 …        label:      … N1  N0 | S0  S1 …
//! ```
//!
//! so `W0N0` is the cell at lattice `(-1, -1)` and `E0S0` is `(0, 0)`.
//! Classification rules (highway lattice, hazard band) operate on the label
//! numbers, not on the signed lattice coordinates.

use std::fmt;
use std::str::FromStr;

use crate::NavError;

/// A region on the world lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct RegionId {
    /// Lattice column; negative values are the `W` half.
    pub x: i32,
    /// Lattice row; negative values are the `N` half.
    pub y: i32,
}

impl RegionId {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parse a `W5N3`-style name.
    pub fn parse(name: &str) -> Result<Self, NavError> {
        let invalid = || NavError::InvalidRegionName(name.to_owned());
        let bytes = name.as_bytes();

        let (west, rest) = match bytes.first() {
            Some(b'W') => (true, &name[1..]),
            Some(b'E') => (false, &name[1..]),
            _ => return Err(invalid()),
        };
        let split = rest.find(['N', 'S']).ok_or_else(invalid)?;
        let (x_label, y_part) = rest.split_at(split);
        let north = y_part.starts_with('N');
        let y_label = &y_part[1..];

        let parse_label = |s: &str| -> Result<i32, NavError> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            s.parse::<i32>().map_err(|_| invalid())
        };
        let lx = parse_label(x_label)?;
        let ly = parse_label(y_label)?;

        Ok(Self {
            x: if west { -lx - 1 } else { lx },
            y: if north { -ly - 1 } else { ly },
        })
    }

    /// Label number on the horizontal axis (`5` for `W5N3`).
    #[inline]
    pub fn label_x(self) -> u32 {
        if self.x < 0 { (-self.x - 1) as u32 } else { self.x as u32 }
    }

    /// Label number on the vertical axis (`3` for `W5N3`).
    #[inline]
    pub fn label_y(self) -> u32 {
        if self.y < 0 { (-self.y - 1) as u32 } else { self.y as u32 }
    }

    /// Chebyshev distance between two regions on the lattice.
    #[inline]
    pub fn linear_distance(self, other: RegionId) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Regions on the highway lattice: either label number divisible by 10.
    #[inline]
    pub fn is_highway(self) -> bool {
        self.label_x() % 10 == 0 || self.label_y() % 10 == 0
    }

    /// Regions in the hazard band: both label residues in `4..=6`, excluding
    /// the band's centre (`5`, `5`).
    pub fn is_hazard(self) -> bool {
        let fx = self.label_x() % 10;
        let fy = self.label_y() % 10;
        !(fx == 5 && fy == 5) && (4..=6).contains(&fx) && (4..=6).contains(&fy)
    }

    /// The four regions sharing an edge with `self`, in top/right/bottom/left
    /// order.
    pub fn neighbors(self) -> [RegionId; 4] {
        [
            RegionId::new(self.x, self.y - 1),
            RegionId::new(self.x + 1, self.y),
            RegionId::new(self.x, self.y + 1),
            RegionId::new(self.x - 1, self.y),
        ]
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = if self.x < 0 { 'W' } else { 'E' };
        let v = if self.y < 0 { 'N' } else { 'S' };
        write!(f, "{h}{}{v}{}", self.label_x(), self.label_y())
    }
}

impl FromStr for RegionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionId::parse(s)
    }
}

impl From<RegionId> for String {
    fn from(region: RegionId) -> String {
        region.to_string()
    }
}

impl TryFrom<String> for RegionId {
    type Error = NavError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        RegionId::parse(&name)
    }
}
