use thiserror::Error;

use crate::MoveError;

/// Outcome codes of a travel call that did not produce a step.
///
/// None of these are fatal: the persisted state is left consistent and the
/// caller simply tries again next tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    #[error("agent is still spawning")]
    Busy,

    #[error("no goal given")]
    InvalidGoal,

    #[error("agent is fatigued")]
    Tired,

    #[error("no path to the goal")]
    NoPath,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

pub type TravelResult<T> = Result<T, TravelError>;
