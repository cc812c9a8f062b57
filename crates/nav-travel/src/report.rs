use nav_core::{Direction, WorldPos};
use nav_path::EncodedPath;
use nav_spatial::SearchResult;

use crate::NavigationState;

/// What a successful travel call did this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Step {
    /// Within range; no step needed.
    Arrived,
    /// One move command was issued.
    Moved(Direction),
    /// Dry run: the move that would have been issued.
    Planned(Direction),
}

impl Step {
    /// The direction moved or planned, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Step::Arrived => None,
            Step::Moved(dir) | Step::Planned(dir) => Some(dir),
        }
    }
}

/// Output capture for a single call.  Fields the call did not reach stay
/// `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelReport {
    pub next_dir: Option<Direction>,
    pub next_pos: Option<WorldPos>,
    /// Path remaining after this tick's consumption.
    pub path:     Option<EncodedPath>,
    /// State as persisted.
    pub state:    Option<NavigationState>,
    /// Raw search result when this call repathed.
    pub search:   Option<SearchResult>,
}
