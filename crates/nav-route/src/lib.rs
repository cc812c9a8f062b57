//! `nav-route`: picks the set of regions a long fine-grained search may
//! enter.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`planner`]  | `RoutePlanner`, `RouteOptions`                        |
//! | [`allowed`]  | `AllowedRegions`: the planner's output set           |
//!
//! Region weights are computed here; the graph search itself is delegated to
//! a [`RegionRouter`][nav_spatial::RegionRouter].

pub mod allowed;
pub mod planner;


pub use allowed::AllowedRegions;
pub use planner::{RouteOptions, RoutePlanner, LONG_ROUTE_DISTANCE};
