//! `nav-cache`: per-region cost matrices, built from observed obstacles and
//! reused across searches.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`cache`]   | `CostMatrixCache`: structural and combined tiers              |
//! | [`build`]   | `structure_matrix`, `add_agents`, `with_obstacles`             |
//!
//! # Tiers
//!
//! | Tier       | Contents                           | Lifetime                         |
//! |------------|------------------------------------|----------------------------------|
//! | structural | structures + construction sites    | until a fresh build is requested in a later tick |
//! | combined   | structural + agent positions       | one tick                         |
//!
//! Entries are handed out as `Arc<CostMatrix>`; two requests served from the
//! same entry return the same allocation.

pub mod build;
pub mod cache;


pub use build::{add_agents, structure_matrix, with_obstacles};
pub use cache::CostMatrixCache;
