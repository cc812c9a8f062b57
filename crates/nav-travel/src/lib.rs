//! `nav-travel`: the per-agent travel state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`traveler`]  | `Traveler<S, R, M>`: `travel_to`, `find_travel_path`, inspection |
//! | [`builder`]   | `TravelerBuilder`: fluent construction with defaults            |
//! | [`options`]   | `TravelOptions`: per-call option bag                            |
//! | [`config`]    | `TravelConfig`: tuning constants and diagnostic thresholds      |
//! | [`state`]     | `NavigationState`, `StoredState`, legacy shape, `migrate`        |
//! | [`store`]     | `StateStore` trait, `MemoryStateStore`                           |
//! | [`stuck`]     | `is_stuck`, `backstep`                                           |
//! | [`agent`]     | `AgentHandle` trait, `MoveError`                                 |
//! | [`report`]    | `Step`, `TravelReport`                                           |
//! | [`visual`]    | `Visualizer` trait, `NoopVisualizer`                             |
//! | [`error`]     | `TravelError`, `TravelResult<T>`                                 |
//!
//! # Per-call flow
//!
//! ```text
//! travel_to(world, agent, goal, options)
//!   ├─ precondition checks         → Busy / InvalidGoal / Tired
//!   ├─ proximity short-circuit     → Arrived / one direct step
//!   ├─ load + migrate state
//!   ├─ stuck detection, retarget, opportunistic repath, escalation
//!   ├─ repath if no cached path    → RoutePlanner → CostMatrixCache → GridSearch
//!   ├─ consume one code, persist
//!   └─ one move (or dry-run report) → Moved / Planned / NoPath
//! ```
//!
//! Everything that changes between ticks lives in the world, the agent, or
//! the [`StateStore`]; the [`Traveler`] itself only carries caches, tuning and
//! the injected random source.

pub mod agent;
pub mod builder;
pub mod config;
pub mod error;
pub mod options;
pub mod report;
pub mod state;
pub mod store;
pub mod stuck;
pub mod traveler;
pub mod visual;


pub use agent::{AgentHandle, MoveError};
pub use builder::TravelerBuilder;
pub use config::TravelConfig;
pub use error::{TravelError, TravelResult};
pub use options::TravelOptions;
pub use report::{Step, TravelReport};
pub use state::{migrate, LegacyTravelData, LegacyTravelState, NavigationState, StoredState, STATE_VERSION};
pub use store::{MemoryStateStore, StateStore};
pub use traveler::{update_region_status, Traveler};
pub use visual::{Color, NoopVisualizer, Visualizer};
