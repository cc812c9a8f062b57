//! Tuning constants for a [`Traveler`][crate::Traveler].

use serde::{Deserialize, Serialize};

use crate::NavigationState;

/// Defaults applied when a call's [`TravelOptions`][crate::TravelOptions]
/// leaves a setting unset, plus the self-diagnostic thresholds.
///
/// Every field has a default, so a partial JSON/TOML document deserialises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelConfig {
    /// Grid-search node budget.
    pub max_ops: u32,

    /// Stuck ticks before escalation is considered.
    pub stuck_value: u32,

    /// Probability that a stuck agent escalates on a given tick.
    pub escalation_chance: f64,

    /// Cost per lifetime tick above which an agent is reported as heavy.
    pub report_max_cost_per_tick: f64,

    /// Repaths per travel call above which an agent is reported as heavy.
    pub report_max_repath_ratio: f64,

    /// Agents younger than this are never reported.
    pub report_min_age: u32,

    /// Linear region distance above which coarse planning runs by default.
    pub find_route_distance: u32,

    /// Linear region distance at or below which an incomplete search is
    /// retried once with coarse planning forced on (`ensure_path` only).
    pub ensure_path_retry_distance: u32,

    pub highway_bias: f64,
    pub hazard_penalty: f64,
    pub restrict_slack: u32,

    /// Road cost stamped into structural matrices.
    pub road_cost: u8,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            max_ops:                    20_000,
            stuck_value:                2,
            escalation_chance:          0.5,
            report_max_cost_per_tick:   0.25,
            report_max_repath_ratio:    0.2,
            report_min_age:             20,
            find_route_distance:        2,
            ensure_path_retry_distance: 2,
            highway_bias:               2.5,
            hazard_penalty:             10.0,
            restrict_slack:             10,
            road_cost:                  1,
        }
    }
}

impl TravelConfig {
    /// Whether an agent of `age` ticks with `state` is spending abnormally on
    /// navigation.
    pub fn is_heavy(&self, state: &NavigationState, age: u32) -> bool {
        if age <= self.report_min_age {
            return false;
        }
        let cost_per_tick = state.cumulative_cost as f64 / age as f64;
        let repath_ratio = state.repath_count as f64 / state.travel_invocations.max(1) as f64;
        cost_per_tick > self.report_max_cost_per_tick || repath_ratio > self.report_max_repath_ratio
    }
}
