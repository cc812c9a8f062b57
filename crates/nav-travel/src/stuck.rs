//! Progress detection and the manual backstep escape.

use nav_core::{Coord, WorldPos};
use nav_path::EncodedPath;

use crate::{AgentHandle, MoveError};

/// `true` when moving from `last` to `current` does not count as progress:
/// the agent stayed put, or it went from one edge tile to another (bouncing
/// across a region boundary).  Never stuck on the first observation.
pub fn is_stuck(last: Option<Coord>, current: Coord) -> bool {
    match last {
        None => false,
        Some(last) => last == current || (last.is_edge() && current.is_edge()),
    }
}

/// Step toward `toward` and keep `path` consistent with the new position.
///
/// With no fatigue the agent moves immediately and the opposite direction is
/// prepended, so the next tick steps back onto the route.  A fatigued agent
/// does not move; both the step and its reversal are prepended instead.
/// An empty `path` means there is nothing to stay consistent with, and the
/// call does nothing.
pub fn backstep(agent: &mut dyn AgentHandle, path: &mut EncodedPath, toward: WorldPos) -> Result<bool, MoveError> {
    if path.is_empty() {
        return Ok(false);
    }
    let Some(dir) = agent.pos().direction_to(toward) else {
        return Ok(false);
    };
    let op = dir.opposite();

    if agent.fatigue() == 0 {
        agent.move_dir(dir)?;
        path.prepend(op);
    } else {
        path.prepend(op);
        path.prepend(dir);
    }
    Ok(true)
}
