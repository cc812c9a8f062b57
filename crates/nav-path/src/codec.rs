//! Direction-string encoding of tile paths.

use std::fmt;
use std::str::FromStr;

use nav_core::{Coord, Direction, WorldPos};

use crate::PathError;

// ── EncodedPath ───────────────────────────────────────────────────────────────

/// A path as a string of direction digits.
///
/// Only valid digits are ever stored; construction from untrusted text goes
/// through [`EncodedPath::parse`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct EncodedPath(String);

impl EncodedPath {
    /// The empty path.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Validate and wrap a digit string.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if let Some((index, ch)) = s.chars().enumerate().find(|&(_, c)| Direction::from_digit(c).is_none()) {
            return Err(PathError::InvalidCode { index, ch });
        }
        Ok(Self(s.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The next step, without consuming it.
    #[inline]
    pub fn first(&self) -> Option<Direction> {
        self.0.chars().next().and_then(Direction::from_digit)
    }

    /// Drop and return the next step.
    pub fn advance(&mut self) -> Option<Direction> {
        let dir = self.first()?;
        self.0.remove(0);
        Some(dir)
    }

    /// Append a step at the end.
    #[inline]
    pub fn push(&mut self, dir: Direction) {
        self.0.push(dir.to_digit());
    }

    /// Insert a step before all others.
    #[inline]
    pub fn prepend(&mut self, dir: Direction) {
        self.0.insert(0, dir.to_digit());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Steps in order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.chars().filter_map(Direction::from_digit)
    }

    /// Positions visited when walking the path from `start`, excluding
    /// `start`.  Stops at the first step that would leave the region grid.
    pub fn walk(&self, start: WorldPos) -> Vec<WorldPos> {
        let mut out = Vec::with_capacity(self.len());
        let mut cur = start;
        for dir in self.directions() {
            match position_at_direction(cur, dir) {
                Some(next) => {
                    out.push(next);
                    cur = next;
                }
                None => break,
            }
        }
        out
    }

    /// Position after `n` steps from `start`; `None` if the path is shorter
    /// or a step leaves the grid.  `n == 0` is `start`.
    pub fn nth_pos(&self, start: WorldPos, n: usize) -> Option<WorldPos> {
        if n > self.len() {
            return None;
        }
        self.directions()
            .take(n)
            .try_fold(start, position_at_direction)
    }
}

impl fmt::Display for EncodedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EncodedPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EncodedPath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EncodedPath> for String {
    fn from(path: EncodedPath) -> Self {
        path.0
    }
}

impl FromIterator<Direction> for EncodedPath {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().map(Direction::to_digit).collect())
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Encode a tile sequence as directions relative to `start`.
///
/// A position in a different region from its predecessor contributes no
/// digit but still becomes the predecessor of the next position.
pub fn encode<I>(start: WorldPos, positions: I) -> EncodedPath
where
    I: IntoIterator<Item = WorldPos>,
{
    let mut path = EncodedPath::new();
    let mut prev = start;
    for pos in positions {
        if pos.region == prev.region {
            if let Some(dir) = prev.direction_to(pos) {
                path.push(dir);
            }
        }
        prev = pos;
    }
    path
}

/// The tile one step from `pos` in `dir`, or `None` outside `0..=49`.
pub fn position_at_direction(pos: WorldPos, dir: Direction) -> Option<WorldPos> {
    let (dx, dy) = dir.offset();
    Coord::try_new(pos.coord.x as i32 + dx, pos.coord.y as i32 + dy).map(|coord| WorldPos::at(pos.region, coord))
}
