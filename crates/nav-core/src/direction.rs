//! Eight-way step directions.
//!
//! Codes run clockwise from north, `1..=8`.  The absence of a direction is
//! expressed as `Option<Direction>::None` rather than a ninth variant.

use std::fmt;

use crate::NavError;

/// A single-tile step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Top         = 1,
    TopRight    = 2,
    Right       = 3,
    BottomRight = 4,
    Bottom      = 5,
    BottomLeft  = 6,
    Left        = 7,
    TopLeft     = 8,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Numeric code `1..=8`.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric code.
    #[inline]
    pub fn from_code(code: u8) -> Result<Direction, NavError> {
        match code {
            1..=8 => Ok(Self::ALL[code as usize - 1]),
            _ => Err(NavError::InvalidDirection(code)),
        }
    }

    /// Decode an ASCII digit as stored in encoded paths.
    #[inline]
    pub fn from_digit(c: char) -> Option<Direction> {
        c.to_digit(10).and_then(|d| Self::from_code(d as u8).ok())
    }

    /// ASCII digit for this direction.
    #[inline]
    pub fn to_digit(self) -> char {
        (b'0' + self.code()) as char
    }

    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.code() as usize + 3) % 8]
    }

    /// `(dx, dy)` of one step; `y` grows downward.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        const DX: [i32; 8] = [0, 1, 1, 1, 0, -1, -1, -1];
        const DY: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];
        let i = self.code() as usize - 1;
        (DX[i], DY[i])
    }

    /// Best single-step direction along the vector `(dx, dy)`.
    ///
    /// Axis-aligned when one component dominates the other by more than a
    /// factor of two, diagonal otherwise.  `None` for the zero vector.
    pub fn toward(dx: i32, dy: i32) -> Option<Direction> {
        let (adx, ady) = (dx.abs(), dy.abs());
        if adx > ady * 2 {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else if ady > adx * 2 {
            Some(if dy > 0 { Direction::Bottom } else { Direction::Top })
        } else if dx == 0 && dy == 0 {
            None
        } else {
            Some(match (dx > 0, dy > 0) {
                (true, true) => Direction::BottomRight,
                (true, false) => Direction::TopRight,
                (false, true) => Direction::BottomLeft,
                (false, false) => Direction::TopLeft,
            })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
