//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one variant
//! where they surface core parsing failures.

use thiserror::Error;

/// Errors produced while parsing or validating core types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("invalid region name {0:?}")]
    InvalidRegionName(String),

    #[error("invalid direction code {0}")]
    InvalidDirection(u8),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
