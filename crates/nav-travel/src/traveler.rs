//! The travel orchestrator.

use std::sync::Arc;

use tracing::{debug, info, warn};

use nav_cache::{add_agents, with_obstacles, CostMatrixCache};
use nav_core::{AgentId, Direction, HasPos, NavRng, RegionId, WorldPos};
use nav_path::{position_at_direction, EncodedPath};
use nav_route::{AllowedRegions, RoutePlanner};
use nav_spatial::{
    CostMatrix, GridSearch, RegionCost, RegionRouter, SearchGoal, SearchParams, SearchResult,
    WorldView, DEFAULT_MAX_REGIONS,
};

use crate::{
    migrate, stuck, AgentHandle, Color, NavigationState, StateStore, Step, TravelConfig,
    TravelError, TravelOptions, Visualizer,
};

/// Refresh the avoid flag of `region` from its controller: avoided when
/// someone else owns it, cleared when it is ours or unowned.  Regions without
/// a controller are left alone.
pub fn update_region_status<W: WorldView + ?Sized>(world: &mut W, region: RegionId) {
    if let Some(controller) = world.controller(region) {
        world.set_avoided(region, controller.is_foreign());
    }
}

/// Drives agents toward goals one step per tick.
///
/// # Type parameters
///
/// - `S: GridSearch`: the fine-grained path oracle
/// - `R: RegionRouter`: the region-adjacency planner used for long trips
/// - `M: StateStore`: where per-agent [`NavigationState`] lives
///
/// The matrix cache and random source are owned here, so independent
/// travelers never share state.
pub struct Traveler<S: GridSearch, R: RegionRouter, M: StateStore> {
    pub search:  S,
    pub router:  R,
    pub store:   M,
    pub cache:   CostMatrixCache,
    pub planner: RoutePlanner,
    pub config:  TravelConfig,
    pub rng:     NavRng,
    pub visual:  Box<dyn Visualizer>,
}

impl<S: GridSearch, R: RegionRouter, M: StateStore> Traveler<S, R, M> {
    // ── travel_to ─────────────────────────────────────────────────────────────

    /// Advance `agent` one step toward `goal`.
    ///
    /// Call at most once per agent per tick.  Returns the step taken (or
    /// planned, under `just_path`), or a [`TravelError`] describing why no
    /// step was taken.  Errors never leave the persisted state inconsistent.
    pub fn travel_to<W: WorldView + ?Sized>(
        &mut self,
        world:       &mut W,
        agent:       &mut dyn AgentHandle,
        goal:        Option<&dyn HasPos>,
        mut options: TravelOptions<'_>,
    ) -> Result<Step, TravelError> {
        let here = agent.pos();
        update_region_status(world, here.region);

        if agent.is_spawning() {
            return Err(TravelError::Busy);
        }
        let Some(goal) = goal else {
            return Err(TravelError::InvalidGoal);
        };
        if agent.fatigue() > 0 {
            self.visual.circle(here, Color::Aqua, 0.3);
            return Err(TravelError::Tired);
        }
        let destination = goal.pos();

        // ── Proximity ─────────────────────────────────────────────────────
        let range = options.range.unwrap_or(0);
        let distance = here.range_to(destination);
        if range > 0 && distance <= range {
            return Ok(Step::Arrived);
        }
        if distance <= 1 {
            if distance == 1 && range == 0 {
                if let Some(dir) = here.direction_to(destination) {
                    options.report(|r| {
                        r.next_dir = Some(dir);
                        r.next_pos = Some(destination);
                        r.path = Some(std::iter::once(dir).collect());
                    });
                    return Self::issue(agent, dir, options.just_path);
                }
            }
            return Ok(Step::Arrived);
        }

        // ── Load state ────────────────────────────────────────────────────
        let id = agent.id();
        let mut state = self
            .store
            .get(id)
            .map_or_else(|| NavigationState::new(destination), |stored| migrate(stored, destination));
        state.travel_invocations += 1;

        if stuck::is_stuck(state.last_coord, here.coord) {
            state.stuck_count += 1;
            self.visual.circle(here, Color::Magenta, state.stuck_count as f32 * 0.2);
        } else {
            state.stuck_count = 0;
        }

        // ── Keep, extend or discard the cached path ───────────────────────
        if state.destination != destination {
            if state.destination.is_near_to(destination) {
                if !state.path.is_empty() {
                    if let Some(dir) = state.destination.direction_to(destination) {
                        state.path.push(dir);
                    }
                }
                state.destination = destination;
            } else {
                state.path.clear();
            }
        }

        if options.repath > 0.0 && self.rng.chance(options.repath) {
            debug!(agent = agent.name(), "opportunistic repath");
            state.path.clear();
        }

        let stuck_value = options.stuck_value.filter(|&v| v > 0).unwrap_or(self.config.stuck_value);
        if state.stuck_count >= stuck_value && self.rng.chance(self.config.escalation_chance) {
            debug!(agent = agent.name(), stuck = state.stuck_count, "stuck, repathing around agents");
            options.ignore_creeps = false;
            options.fresh_matrix = true;
            state.path.clear();
        }

        // ── Repath ────────────────────────────────────────────────────────
        let new_path = state.path.is_empty();
        if new_path {
            state.destination = destination;

            let before = world.cost_used();
            let result = self.find_travel_path(&*world, here, destination, &options);
            let spent = (world.cost_used() - before).max(0.0);
            state.cumulative_cost = (state.cumulative_cost as f64 + spent).round() as u64;
            state.repath_count += 1;

            let age = agent.age();
            if self.config.is_heavy(&state, age) {
                let cost_per_tick = state.cumulative_cost as f64 / age as f64;
                warn!(
                    agent = agent.name(),
                    cost = state.cumulative_cost,
                    age,
                    cost_per_tick,
                    repaths = state.repath_count,
                    calls = state.travel_invocations,
                    from = %here,
                    to = %destination,
                    "heavy navigation cost"
                );
            }

            let color = if result.incomplete {
                info!(agent = agent.name(), from = %here, to = %destination, ops = result.ops, "incomplete path");
                Color::Red
            } else {
                Color::Orange
            };
            state.path = self.draw_and_encode(here, &result.path, color);
            options.report(|r| r.search = Some(result));
            state.stuck_count = 0;
        }

        // ── Consume and persist ───────────────────────────────────────────
        if !new_path && state.stuck_count == 0 {
            state.path.advance();
        }
        state.last_coord = Some(here.coord);
        state.destination = destination;

        let next = state.path.first();
        options.report(|r| {
            r.next_dir = next;
            r.next_pos = next.and_then(|dir| position_at_direction(here, dir));
            r.state = Some(state.clone());
            r.path = Some(state.path.clone());
        });
        self.store.set(id, state);

        match next {
            Some(dir) => Self::issue(agent, dir, options.just_path),
            None => Err(TravelError::NoPath),
        }
    }

    fn issue(agent: &mut dyn AgentHandle, dir: Direction, just_path: bool) -> Result<Step, TravelError> {
        if just_path {
            return Ok(Step::Planned(dir));
        }
        agent.move_dir(dir)?;
        Ok(Step::Moved(dir))
    }

    fn draw_and_encode(&mut self, start: WorldPos, path: &[WorldPos], color: Color) -> EncodedPath {
        self.visual.circle(start, color, 1.0);
        let mut prev = start;
        for &pos in path {
            if pos.region == prev.region {
                self.visual.line(prev, pos, color);
            }
            prev = pos;
        }
        nav_path::encode(start, path.iter().copied())
    }

    // ── find_travel_path ──────────────────────────────────────────────────────

    /// Run one fine-grained search from `origin` to `destination` under
    /// `options`, planning a region route first when the trip is long.
    ///
    /// An incomplete result is returned, not treated as an error.
    pub fn find_travel_path<W: WorldView + ?Sized>(
        &mut self,
        world:       &W,
        origin:      WorldPos,
        destination: WorldPos,
        options:     &TravelOptions<'_>,
    ) -> SearchResult {
        let result = self.search_once(world, origin, destination, options, options.use_find_route);

        let region_distance = world.linear_distance(origin.region, destination.region);
        if result.incomplete
            && options.ensure_path
            && options.use_find_route.is_none()
            && region_distance <= self.config.ensure_path_retry_distance
        {
            info!(from = %origin, to = %destination, "path failed without route planning, retrying with it");
            let retry = self.search_once(world, origin, destination, options, Some(true));
            info!(from = %origin, to = %destination, complete = !retry.incomplete, "route-planned retry finished");
            return retry;
        }
        result
    }

    fn search_once<W: WorldView + ?Sized>(
        &mut self,
        world:          &W,
        origin:         WorldPos,
        destination:    WorldPos,
        options:        &TravelOptions<'_>,
        use_find_route: Option<bool>,
    ) -> SearchResult {
        let region_distance = world.linear_distance(origin.region, destination.region);
        let origin_region = origin.region;
        let dest_region = destination.region;

        let planned: Option<AllowedRegions>;
        let allowed: Option<&AllowedRegions> = match options.route {
            Some(route) => Some(route),
            None if use_find_route.unwrap_or(region_distance > self.config.find_route_distance) => {
                planned = self.planner.plan(world, &self.router, origin_region, dest_region, &options.route_options());
                planned.as_ref()
            }
            None => None,
        };

        let cache = &mut self.cache;
        let mut region_cost = |region: RegionId| -> RegionCost {
            match allowed {
                Some(allowed) if !allowed.contains(region) => return RegionCost::Blocked,
                None if !options.allow_hostile
                    && region != origin_region
                    && region != dest_region
                    && world.is_avoided(region) =>
                {
                    return RegionCost::Blocked;
                }
                _ => {}
            }
            if !world.is_observed(region) {
                return RegionCost::Terrain;
            }

            let mut matrix: Arc<CostMatrix> = if options.ignore_structures {
                let mut m = CostMatrix::new();
                if !options.ignore_creeps {
                    add_agents(&mut m, world, region);
                }
                Arc::new(m)
            } else if options.ignore_creeps || region != origin_region {
                cache.structural(world, region, options.fresh_matrix)
            } else {
                cache.combined(world, region)
            };

            if !options.obstacles.is_empty() {
                matrix = Arc::new(with_obstacles(&matrix, region, options.obstacles));
            }
            if let Some(callback) = options.room_callback {
                if let Some(outcome) = callback(region, (*matrix).clone()) {
                    return outcome;
                }
            }
            RegionCost::Matrix(matrix)
        };

        let (plain_cost, swamp_cost) = options.terrain_costs();
        let params = SearchParams {
            max_ops:     options.max_ops.unwrap_or(self.config.max_ops),
            max_regions: options.max_regions.unwrap_or(DEFAULT_MAX_REGIONS),
            plain_cost,
            swamp_cost,
        };
        let goal = SearchGoal { pos: destination, range: options.search_range() };
        self.search.search(origin, &goal, &params, &mut region_cost)
    }

    // ── Inspection and manual control ─────────────────────────────────────────

    /// Length of the cached path for `agent`; 0 if none.
    pub fn path_length(&self, agent: AgentId) -> usize {
        self.store.get(agent).map_or(0, |stored| stored.path().len())
    }

    /// Positions the cached path walks through starting at `from`, stopping
    /// at the first step that leaves the region grid.
    pub fn path(&self, agent: AgentId, from: WorldPos) -> Vec<WorldPos> {
        self.store.get(agent).map_or_else(Vec::new, |stored| stored.path().walk(from))
    }

    /// Position `nth` steps along the cached path from `from`.
    pub fn next_pos(&self, agent: AgentId, from: WorldPos, nth: usize) -> Option<WorldPos> {
        let stored = self.store.get(agent)?;
        stored.path().nth_pos(from, nth)
    }

    /// Step toward `toward` without losing the cached path.  See
    /// [`stuck::backstep`].  No-op when the agent has no cached path.
    ///
    /// Only the path is rewritten; the stored record keeps its shape and
    /// destination.
    pub fn backstep(&mut self, agent: &mut dyn AgentHandle, toward: WorldPos) -> Result<(), TravelError> {
        let id = agent.id();
        let Some(stored) = self.store.get(id) else {
            return Ok(());
        };
        let mut path = stored.path();
        if stuck::backstep(agent, &mut path, toward)? {
            self.store.insert(id, stored.with_path(path));
        }
        Ok(())
    }

    /// Regions a planned route between `from` and `to` touches.
    pub fn route_distance<W: WorldView + ?Sized>(&self, world: &W, from: RegionId, to: RegionId) -> Option<u32> {
        self.planner.route_distance(world, &self.router, from, to)
    }
}
