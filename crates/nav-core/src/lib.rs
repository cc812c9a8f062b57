//! `nav-core`: foundational types for the navigation workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `rand` and `thiserror` (plus optional
//! `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`region`]      | `RegionId`: lattice coordinate ⇄ `W5N3`-style name   |
//! | [`pos`]         | `Coord`, `WorldPos`, `HasPos`, grid bounds            |
//! | [`direction`]   | `Direction`: 8-way compass step codes 1–8            |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `NavRng`: injected, seedable randomness              |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `nav-travel` for persisted navigation state.   |

pub mod direction;
pub mod error;
pub mod ids;
pub mod pos;
pub mod region;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{NavError, NavResult};
pub use ids::AgentId;
pub use pos::{Coord, HasPos, WorldPos, MAX_COORD, REGION_SIZE};
pub use region::RegionId;
pub use rng::NavRng;
pub use time::Tick;
