//! `nav-spatial`: the world as the navigation layer sees it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`matrix`] | `CostMatrix`: 50×50 byte traversal-cost grid                   |
//! | [`world`]  | `WorldView` trait, `Structure`, `ConstructionSite`, `Controller` |
//! | [`search`] | `GridSearch` trait, `RegionCost`, `SearchResult`, `DijkstraGridSearch` |
//! | [`router`] | `RegionRouter` trait, `DijkstraRegionRouter`                    |
//! | [`grid`]   | `GridWorld`, `TerrainMap`: in-memory reference world           |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                              |
//!
//! # Pluggability
//!
//! The navigation core only talks to the host simulation through
//! [`WorldView`], [`GridSearch`] and [`RegionRouter`].  The Dijkstra
//! implementations here are small reference searches used by tests and demos;
//! hosts with their own path-finding engine implement the traits directly.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.      |

pub mod error;
pub mod grid;
pub mod matrix;
pub mod router;
pub mod search;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{GridWorld, TerrainMap};
pub use matrix::{CostMatrix, COST_CONTAINER, COST_IMPASSABLE, COST_ROAD};
pub use router::{DijkstraRegionRouter, RegionRouter};
pub use search::{
    DijkstraGridSearch, GridSearch, RegionCost, SearchGoal, SearchParams, SearchResult, Terrain,
    TerrainSource, DEFAULT_MAX_REGIONS,
};
pub use world::{ConstructionSite, Controller, Structure, StructureKind, WorldView};
