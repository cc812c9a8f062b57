//! Region weighting and route planning.
//!
//! # Weights
//!
//! For each region the router asks about, the first matching rule wins:
//!
//! | Rule                                                         | Weight              |
//! |--------------------------------------------------------------|---------------------|
//! | caller's `route_callback` returns `Some(w)`                  | `w`                 |
//! | farther from the origin than `restrict_distance`             | ∞                   |
//! | avoided (not origin/destination) unless `allow_hostile`      | ∞                   |
//! | `prefer_highway` and the region is a highway                 | 1                   |
//! | unobserved hazard region unless `allow_hazard_region`        | penalty × bias      |
//! | otherwise                                                    | bias                |
//!
//! `bias` is 1, or the highway bias when `prefer_highway` is set, so that
//! highways become relatively cheaper.

use tracing::{debug, warn};

use nav_core::RegionId;
use nav_spatial::{RegionRouter, WorldView};

use crate::AllowedRegions;

/// Linear distance at or beyond which [`RoutePlanner::route_distance`] skips
/// planning and reports the linear distance.
pub const LONG_ROUTE_DISTANCE: u32 = 32;

/// Per-call planner options.
#[derive(Clone, Copy, Default)]
pub struct RouteOptions<'a> {
    /// Maximum linear distance from the origin; defaults to the origin to
    /// destination distance plus the planner's slack.  `Some(0)` counts as
    /// unset.
    pub restrict_distance:   Option<u32>,
    pub allow_hostile:       bool,
    pub prefer_highway:      bool,
    /// Overrides the planner's highway bias when positive.
    pub highway_bias:        Option<f64>,
    pub allow_hazard_region: bool,
    /// Consulted first for every region; `Some(weight)` overrides all rules.
    pub route_callback:      Option<&'a dyn Fn(RegionId) -> Option<f64>>,
}

impl std::fmt::Debug for RouteOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteOptions")
            .field("restrict_distance", &self.restrict_distance)
            .field("allow_hostile", &self.allow_hostile)
            .field("prefer_highway", &self.prefer_highway)
            .field("highway_bias", &self.highway_bias)
            .field("allow_hazard_region", &self.allow_hazard_region)
            .field("route_callback", &self.route_callback.is_some())
            .finish()
    }
}

/// Coarse planner.  Holds only tuning constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoutePlanner {
    /// Bias applied to non-highway regions under `prefer_highway`.
    pub highway_bias:   f64,
    /// Multiplier for unobserved hazard regions.
    pub hazard_penalty: f64,
    /// Added to the origin-destination distance to get the default
    /// restriction radius.
    pub restrict_slack: u32,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self {
            highway_bias:   2.5,
            hazard_penalty: 10.0,
            restrict_slack: 10,
        }
    }
}

impl RoutePlanner {
    /// Weight of entering `region`.
    pub fn region_weight<W: WorldView + ?Sized>(
        &self,
        world:   &W,
        origin:  RegionId,
        dest:    RegionId,
        region:  RegionId,
        options: &RouteOptions<'_>,
    ) -> f64 {
        if let Some(w) = options.route_callback.and_then(|cb| cb(region)) {
            return w;
        }

        let restrict = options
            .restrict_distance
            .filter(|&d| d > 0)
            .unwrap_or_else(|| world.linear_distance(origin, dest) + self.restrict_slack);
        if world.linear_distance(origin, region) > restrict {
            return f64::INFINITY;
        }

        if !options.allow_hostile && region != origin && region != dest && world.is_avoided(region) {
            return f64::INFINITY;
        }

        let bias = if options.prefer_highway {
            if region.is_highway() {
                return 1.0;
            }
            options.highway_bias.filter(|&b| b > 0.0).unwrap_or(self.highway_bias)
        } else {
            1.0
        };

        if !options.allow_hazard_region && !world.is_observed(region) && region.is_hazard() {
            return self.hazard_penalty * bias;
        }
        bias
    }

    /// Plan a route and return the regions it may use, including `origin`
    /// and `dest`.  `None` when the router finds no route.
    pub fn plan<W, R>(
        &self,
        world:   &W,
        router:  &R,
        origin:  RegionId,
        dest:    RegionId,
        options: &RouteOptions<'_>,
    ) -> Option<AllowedRegions>
    where
        W: WorldView + ?Sized,
        R: RegionRouter + ?Sized,
    {
        let mut cost = |region: RegionId| self.region_weight(world, origin, dest, region, options);
        match router.find_route(origin, dest, &mut cost) {
            Ok(route) => {
                let allowed: AllowedRegions = [origin, dest].into_iter().chain(route).collect();
                debug!(%origin, %dest, regions = allowed.len(), "planned region route");
                Some(allowed)
            }
            Err(err) => {
                warn!(%origin, %dest, %err, "couldn't plan region route");
                None
            }
        }
    }

    /// Number of regions a planned route touches, or the linear distance
    /// when that is already [`LONG_ROUTE_DISTANCE`] or more.
    pub fn route_distance<W, R>(&self, world: &W, router: &R, origin: RegionId, dest: RegionId) -> Option<u32>
    where
        W: WorldView + ?Sized,
        R: RegionRouter + ?Sized,
    {
        let linear = world.linear_distance(origin, dest);
        if linear >= LONG_ROUTE_DISTANCE {
            return Some(linear);
        }
        self.plan(world, router, origin, dest, &RouteOptions::default())
            .map(|allowed| allowed.len() as u32)
    }
}
