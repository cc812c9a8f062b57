//! Fluent builder for constructing a [`Traveler`].

use nav_cache::CostMatrixCache;
use nav_core::NavRng;
use nav_route::RoutePlanner;
use nav_spatial::{GridSearch, RegionRouter};

use crate::{MemoryStateStore, NoopVisualizer, StateStore, TravelConfig, Traveler, Visualizer};

/// Fluent builder for [`Traveler<S, R, M>`].
///
/// # Required inputs
///
/// - `S: GridSearch`: the path oracle (e.g. [`nav_spatial::DijkstraGridSearch`])
/// - `R: RegionRouter`: the region planner (e.g. [`nav_spatial::DijkstraRegionRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                              |
/// |------------------|--------------------------------------|
/// | `.config(c)`     | `TravelConfig::default()`            |
/// | `.seed(s)`       | entropy-seeded `NavRng`              |
/// | `.store(m)`      | `MemoryStateStore::new()`            |
/// | `.visualizer(v)` | `NoopVisualizer`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut traveler = TravelerBuilder::new(DijkstraGridSearch::new(terrain), router)
///     .seed(42)
///     .build();
/// traveler.travel_to(&mut world, &mut agent, Some(&goal), TravelOptions::default())?;
/// ```
pub struct TravelerBuilder<S: GridSearch, R: RegionRouter, M: StateStore = MemoryStateStore> {
    search: S,
    router: R,
    store:  M,
    config: TravelConfig,
    seed:   Option<u64>,
    visual: Option<Box<dyn Visualizer>>,
}

impl<S: GridSearch, R: RegionRouter> TravelerBuilder<S, R, MemoryStateStore> {
    /// Create a builder backed by an in-memory state store.
    pub fn new(search: S, router: R) -> Self {
        Self {
            search,
            router,
            store:  MemoryStateStore::new(),
            config: TravelConfig::default(),
            seed:   None,
            visual: None,
        }
    }
}

impl<S: GridSearch, R: RegionRouter, M: StateStore> TravelerBuilder<S, R, M> {
    /// Replace the state store.
    pub fn store<M2: StateStore>(self, store: M2) -> TravelerBuilder<S, R, M2> {
        TravelerBuilder {
            search: self.search,
            router: self.router,
            store,
            config: self.config,
            seed:   self.seed,
            visual: self.visual,
        }
    }

    pub fn config(mut self, config: TravelConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the random source for reproducible repath and escalation
    /// decisions.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn visualizer<V: Visualizer + 'static>(mut self, visual: V) -> Self {
        self.visual = Some(Box::new(visual));
        self
    }

    /// Derive the cache and planner from the config and return the
    /// [`Traveler`].
    pub fn build(self) -> Traveler<S, R, M> {
        let planner = RoutePlanner {
            highway_bias:   self.config.highway_bias,
            hazard_penalty: self.config.hazard_penalty,
            restrict_slack: self.config.restrict_slack,
        };
        Traveler {
            search:  self.search,
            router:  self.router,
            store:   self.store,
            cache:   CostMatrixCache::with_road_cost(self.config.road_cost),
            planner,
            rng:     self.seed.map_or_else(NavRng::from_entropy, NavRng::new),
            visual:  self.visual.unwrap_or_else(|| Box::new(NoopVisualizer)),
            config:  self.config,
        }
    }
}
