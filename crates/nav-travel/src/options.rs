//! Per-call option bag for [`Traveler::travel_to`][crate::Traveler::travel_to].

use nav_core::{RegionId, WorldPos};
use nav_route::{AllowedRegions, RouteOptions};
use nav_spatial::{CostMatrix, RegionCost};

use crate::TravelReport;

/// Caller hook consulted for every region the search opens.  Receives a copy
/// of the matrix navigation would use; `Some` replaces the outcome.
pub type RoomCallback<'a> = &'a dyn Fn(RegionId, CostMatrix) -> Option<RegionCost>;

/// Caller hook consulted for every region the coarse planner weighs.
pub type RouteCallback<'a> = &'a dyn Fn(RegionId) -> Option<f64>;

/// Options for one travel call.  Construct with `..Default::default()`.
///
/// `None` fields fall back to the [`TravelConfig`][crate::TravelConfig] of the
/// traveler.
pub struct TravelOptions<'a> {
    /// Stop within this many tiles.  `Some(0)` and `None` both mean "step
    /// onto an adjacent goal"; the search itself uses range 1 when `None`.
    pub range:               Option<u32>,
    /// Report the next step without moving.
    pub just_path:           bool,
    /// Price plains and swamps as if there were no roads.
    pub ignore_roads:        bool,
    /// Leave other agents out of the cost matrices.  Defaults to `true`.
    pub ignore_creeps:       bool,
    /// Use empty matrices instead of structure matrices.
    pub ignore_structures:   bool,
    pub prefer_highway:      bool,
    pub highway_bias:        Option<f64>,
    /// Enter regions flagged as avoided.
    pub allow_hostile:       bool,
    /// Do not penalise unobserved hazard regions.
    pub allow_hazard_region: bool,
    /// Extra impassable tiles.
    pub obstacles:           &'a [WorldPos],
    pub room_callback:       Option<RoomCallback<'a>>,
    pub route_callback:      Option<RouteCallback<'a>>,
    pub return_data:         Option<&'a mut TravelReport>,
    pub restrict_distance:   Option<u32>,
    /// Force (`Some(true)`) or forbid (`Some(false)`) coarse planning.
    pub use_find_route:      Option<bool>,
    pub max_ops:             Option<u32>,
    /// Intercept a moving goal: search range 0.
    pub moving_target:       bool,
    /// Rebuild structure matrices built in an earlier tick.
    pub fresh_matrix:        bool,
    /// Plains and swamps cost the same.
    pub off_road:            bool,
    pub stuck_value:         Option<u32>,
    pub max_regions:         Option<u32>,
    /// Probability of discarding a still-valid path.
    pub repath:              f64,
    /// Pre-computed allowed regions; skips coarse planning.
    pub route:               Option<&'a AllowedRegions>,
    /// Retry an incomplete short-range search once with coarse planning.
    pub ensure_path:         bool,
}

impl Default for TravelOptions<'_> {
    fn default() -> Self {
        Self {
            range:               None,
            just_path:           false,
            ignore_roads:        false,
            ignore_creeps:       true,
            ignore_structures:   false,
            prefer_highway:      false,
            highway_bias:        None,
            allow_hostile:       false,
            allow_hazard_region: false,
            obstacles:           &[],
            room_callback:       None,
            route_callback:      None,
            return_data:         None,
            restrict_distance:   None,
            use_find_route:      None,
            max_ops:             None,
            moving_target:       false,
            fresh_matrix:        false,
            off_road:            false,
            stuck_value:         None,
            max_regions:         None,
            repath:              0.0,
            route:               None,
            ensure_path:         false,
        }
    }
}

impl<'a> TravelOptions<'a> {
    /// Range handed to the grid search.
    pub fn search_range(&self) -> u32 {
        if self.moving_target { 0 } else { self.range.unwrap_or(1) }
    }

    /// `(plain, swamp)` terrain costs.
    pub fn terrain_costs(&self) -> (u8, u8) {
        if self.off_road {
            (1, 1)
        } else if self.ignore_roads {
            (1, 5)
        } else {
            (2, 10)
        }
    }

    /// The subset relevant to coarse planning.
    pub fn route_options(&self) -> RouteOptions<'a> {
        RouteOptions {
            restrict_distance:   self.restrict_distance,
            allow_hostile:       self.allow_hostile,
            prefer_highway:      self.prefer_highway,
            highway_bias:        self.highway_bias,
            allow_hazard_region: self.allow_hazard_region,
            route_callback:      self.route_callback,
        }
    }

    /// Write into the caller's report, if one was supplied.
    pub(crate) fn report(&mut self, fill: impl FnOnce(&mut TravelReport)) {
        if let Some(report) = self.return_data.as_deref_mut() {
            fill(report);
        }
    }
}
