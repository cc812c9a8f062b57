//! Persisted per-agent navigation state and its migration from the legacy
//! loosely typed shape.
//!
//! # Schema versions
//!
//! | Shape                | Recognised by                      | Loaded via          |
//! |----------------------|------------------------------------|---------------------|
//! | [`NavigationState`]  | has a `version` field              | used as is          |
//! | [`LegacyTravelData`] | anything else (`state?`, `path?`)  | [`migrate`]         |
//!
//! Migration is a pure function applied at load time; stored values are
//! never patched in place.  The next save writes the current shape.

use serde::{Deserialize, Serialize};

use nav_core::{Coord, RegionId, WorldPos};
use nav_path::EncodedPath;

/// Schema version written by this crate.
pub const STATE_VERSION: u32 = 1;

// ── Current shape ─────────────────────────────────────────────────────────────

/// Everything navigation remembers about one agent between ticks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub version:            u32,
    /// Goal the cached path leads to.
    pub destination:        WorldPos,
    pub path:               EncodedPath,
    /// Consecutive ticks without qualifying progress.
    pub stuck_count:        u32,
    /// Agent coordinate at the end of the previous call.
    pub last_coord:         Option<Coord>,
    /// Search cost spent on this agent, in the world's cost-meter units.
    pub cumulative_cost:    u64,
    pub repath_count:       u32,
    pub travel_invocations: u32,
}

impl NavigationState {
    /// A state that has never travelled.
    pub fn new(destination: WorldPos) -> Self {
        Self {
            version:            STATE_VERSION,
            destination,
            path:               EncodedPath::new(),
            stuck_count:        0,
            last_coord:         None,
            cumulative_cost:    0,
            repath_count:       0,
            travel_invocations: 0,
        }
    }
}

// ── Legacy shape ──────────────────────────────────────────────────────────────

/// The older untyped record: `{ state?: {...}, path?: "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyTravelData {
    #[serde(default)]
    pub state: Option<LegacyTravelState>,
    #[serde(default)]
    pub path:  Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTravelState {
    pub prev_x:        i32,
    pub prev_y:        i32,
    #[serde(default)]
    pub stuck:         u32,
    #[serde(default)]
    pub cpu:           f64,
    #[serde(default)]
    pub num_repaths:   Option<u32>,
    #[serde(default)]
    pub num_travel_to: Option<u32>,
    pub dest_x:        i32,
    pub dest_y:        i32,
    pub room_name:     String,
}

/// What a [`StateStore`][crate::StateStore] may hand back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredState {
    Current(NavigationState),
    Legacy(LegacyTravelData),
}

impl From<NavigationState> for StoredState {
    fn from(state: NavigationState) -> Self {
        StoredState::Current(state)
    }
}

impl StoredState {
    /// The cached path without running a full migration.
    pub fn path(&self) -> EncodedPath {
        match self {
            StoredState::Current(state) => state.path.clone(),
            StoredState::Legacy(legacy) => legacy_path(legacy),
        }
    }

    /// Replace the cached path, keeping the record's shape and every other
    /// field.
    pub fn with_path(self, path: EncodedPath) -> Self {
        match self {
            StoredState::Current(state) => StoredState::Current(NavigationState { path, ..state }),
            StoredState::Legacy(legacy) => {
                StoredState::Legacy(LegacyTravelData { path: Some(path.as_str().to_owned()), ..legacy })
            }
        }
    }
}

fn legacy_path(legacy: &LegacyTravelData) -> EncodedPath {
    legacy
        .path
        .as_deref()
        .and_then(|p| EncodedPath::parse(p).ok())
        .unwrap_or_default()
}

// ── Migration ─────────────────────────────────────────────────────────────────

/// Bring any stored shape up to the current [`NavigationState`].
///
/// Missing counters default to zero.  A legacy record without a state block,
/// or with a destination that no longer parses, starts over with
/// `fallback_destination`; an unreadable path is dropped.
pub fn migrate(stored: StoredState, fallback_destination: WorldPos) -> NavigationState {
    match stored {
        StoredState::Current(mut state) => {
            state.version = STATE_VERSION;
            state
        }
        StoredState::Legacy(legacy) => {
            let path = legacy_path(&legacy);
            let Some(old) = legacy.state else {
                return NavigationState { path, ..NavigationState::new(fallback_destination) };
            };

            let destination = RegionId::parse(&old.room_name)
                .ok()
                .zip(Coord::try_new(old.dest_x, old.dest_y))
                .map(|(region, coord)| WorldPos::at(region, coord));

            let (destination, path) = match destination {
                Some(dest) => (dest, path),
                None => (fallback_destination, EncodedPath::new()),
            };

            NavigationState {
                version:            STATE_VERSION,
                destination,
                path,
                stuck_count:        old.stuck,
                last_coord:         Coord::try_new(old.prev_x, old.prev_y),
                cumulative_cost:    old.cpu.max(0.0).round() as u64,
                repath_count:       old.num_repaths.unwrap_or(0),
                travel_invocations: old.num_travel_to.unwrap_or(0),
            }
        }
    }
}
