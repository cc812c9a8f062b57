//! The controllable-agent surface navigation drives.

use thiserror::Error;

use nav_core::{AgentId, Direction, WorldPos};

/// Why the host refused a move command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MoveError {
    #[error("agent is not controllable")]
    NotControllable,

    #[error("agent is fatigued")]
    Tired,

    #[error("agent cannot move")]
    Immobile,

    #[error("{0}")]
    Rejected(String),
}

/// A single agent as seen by navigation for the duration of one call.
pub trait AgentHandle {
    fn id(&self) -> AgentId;

    /// Display name, used in diagnostics only.
    fn name(&self) -> &str;

    fn pos(&self) -> WorldPos;

    fn is_spawning(&self) -> bool;

    /// Remaining fatigue; any positive value prevents moving this tick.
    fn fatigue(&self) -> u32;

    /// Ticks the agent has existed.
    fn age(&self) -> u32;

    /// Issue one step.  The host applies it at the end of the tick.
    fn move_dir(&mut self, dir: Direction) -> Result<(), MoveError>;
}
