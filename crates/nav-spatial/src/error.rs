//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::RegionId;

/// Errors produced by `nav-spatial`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpatialError {
    #[error("no region route from {from} to {to}")]
    NoRoute { from: RegionId, to: RegionId },

    #[error("region {0} is outside the routable world")]
    OutOfBounds(RegionId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
