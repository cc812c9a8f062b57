//! `nav-path`: compact path encoding.
//!
//! A path is stored as a string of direction digits (`'1'..='8'`) relative to
//! an implicit start position.  The agent consumes one digit per tick.
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`codec`] | `EncodedPath`, `encode`, `position_at_direction`          |
//! | [`error`] | `PathError`, `PathResult<T>`                              |
//!
//! # Region transitions
//!
//! [`encode`] skips the step that crosses into another region: the host moves
//! an agent standing on an edge tile across the boundary itself, so the next
//! stored digit starts from the first tile on the far side.

pub mod codec;
pub mod error;

#[cfg(test)]
mod tests;

pub use codec::{encode, position_at_direction, EncodedPath};
pub use error::{PathError, PathResult};
pub use nav_core::Direction;
