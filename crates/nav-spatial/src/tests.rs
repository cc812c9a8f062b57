//! Unit tests for nav-spatial.
//!
//! All tests use hand-built terrain closures so they run without a host world.

#[cfg(test)]
mod helpers {
    use nav_core::{RegionId, WorldPos};

    use crate::{RegionCost, Terrain};

    pub fn r0() -> RegionId {
        RegionId::new(0, 0)
    }

    pub fn r1() -> RegionId {
        RegionId::new(1, 0)
    }

    /// Open plains everywhere.
    pub fn open(_: WorldPos) -> Terrain {
        Terrain::Plain
    }

    /// Terrain costs inside region (0, 0); everything else blocked.
    pub fn only_r0(region: RegionId) -> RegionCost {
        if region == r0() { RegionCost::Terrain } else { RegionCost::Blocked }
    }

    /// A vertical wall at x = 20 in region (0, 0), with a single gap at y = 40.
    pub fn walled(pos: WorldPos) -> Terrain {
        if pos.region == r0() && pos.coord.x == 20 && pos.coord.y != 40 {
            Terrain::Wall
        } else {
            Terrain::Plain
        }
    }
}

// ── CostMatrix ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod matrix {
    use nav_core::Coord;

    use crate::{CostMatrix, COST_IMPASSABLE};

    #[test]
    fn new_is_all_default() {
        let m = CostMatrix::new();
        assert_eq!(m.overridden(), 0);
        assert_eq!(m.as_bytes().len(), 2_500);
    }

    #[test]
    fn set_and_get() {
        let mut m = CostMatrix::new();
        m.set(Coord::new(3, 4), COST_IMPASSABLE);
        m.set(Coord::new(49, 49), 2);
        assert!(m.is_blocked(Coord::new(3, 4)));
        assert!(!m.is_blocked(Coord::new(4, 3)));
        assert_eq!(m.get(Coord::new(49, 49)), 2);
        assert_eq!(m.overridden(), 2);
    }

    #[test]
    fn clones_are_independent() {
        let mut a = CostMatrix::new();
        let b = a.clone();
        a.set(Coord::new(1, 1), 9);
        assert_eq!(b.get(Coord::new(1, 1)), 0);
        assert_ne!(a, b);
    }
}

// ── DijkstraGridSearch ────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_search {
    use std::sync::Arc;

    use nav_core::{Coord, RegionId, WorldPos};

    use super::helpers::*;
    use crate::{
        CostMatrix, DijkstraGridSearch, GridSearch, RegionCost, SearchGoal, SearchParams,
        COST_IMPASSABLE,
    };

    fn goal(pos: WorldPos, range: u32) -> SearchGoal {
        SearchGoal { pos, range }
    }

    fn params() -> SearchParams {
        SearchParams { max_ops: 20_000, ..SearchParams::default() }
    }

    #[test]
    fn straight_line_on_open_ground() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 10, 10);
        let to = WorldPos::new(r0(), 15, 10);
        let res = search.search(from, &goal(to, 0), &params(), &mut |_| RegionCost::Terrain);
        assert!(!res.incomplete);
        assert_eq!(res.path.len(), 5);
        assert_eq!(res.path.last(), Some(&to));
        assert_eq!(res.cost, 5);
    }

    #[test]
    fn range_stops_short() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 10, 10);
        let to = WorldPos::new(r0(), 15, 10);
        let res = search.search(from, &goal(to, 1), &params(), &mut |_| RegionCost::Terrain);
        assert_eq!(res.path.len(), 4);
        assert_eq!(res.path.last().unwrap().range_to(to), 1);
    }

    #[test]
    fn origin_in_range_is_empty_path() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 10, 10);
        let res = search.search(from, &goal(from, 0), &params(), &mut |_| RegionCost::Terrain);
        assert!(res.path.is_empty());
        assert!(!res.incomplete);
    }

    #[test]
    fn wall_forces_detour_through_gap() {
        let search = DijkstraGridSearch::new(walled);
        let from = WorldPos::new(r0(), 18, 10);
        let to = WorldPos::new(r0(), 22, 10);
        let res = search.search(from, &goal(to, 0), &params(), &mut only_r0);
        assert!(!res.incomplete);
        assert!(res.path.iter().any(|p| p.coord == Coord::new(20, 40)));
    }

    #[test]
    fn matrix_block_is_respected() {
        let search = DijkstraGridSearch::new(open);
        let mut m = CostMatrix::new();
        for y in 0..50 {
            if y != 5 {
                m.set(Coord::new(12, y), COST_IMPASSABLE);
            }
        }
        let m = Arc::new(m);
        let from = WorldPos::new(r0(), 10, 30);
        let to = WorldPos::new(r0(), 14, 30);
        let res = search.search(from, &goal(to, 0), &params(), &mut |region| {
            if region == r0() { RegionCost::Matrix(m.clone()) } else { RegionCost::Blocked }
        });
        assert!(!res.incomplete);
        assert!(res.path.iter().any(|p| p.coord == Coord::new(12, 5)));
    }

    #[test]
    fn matrix_cost_overrides_terrain() {
        let search = DijkstraGridSearch::new(open);
        let mut m = CostMatrix::new();
        // A cheap road one row below the straight line.
        for x in 10..=20 {
            m.set(Coord::new(x, 11), 1);
        }
        let m = Arc::new(m);
        let p = SearchParams { plain_cost: 2, ..params() };
        let from = WorldPos::new(r0(), 10, 10);
        let to = WorldPos::new(r0(), 20, 10);
        let res = search.search(from, &goal(to, 0), &p, &mut |_| RegionCost::Matrix(m.clone()));
        assert!(!res.incomplete);
        assert!(res.cost < 20, "road should be cheaper than plains, got {}", res.cost);
    }

    #[test]
    fn crosses_into_neighbouring_region() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 47, 25);
        let to = WorldPos::new(r1(), 2, 25);
        let res = search.search(from, &goal(to, 0), &params(), &mut |_| RegionCost::Terrain);
        assert!(!res.incomplete);
        assert_eq!(res.path.len(), 5);
        // The border is crossed with a straight step.
        let cross = res.path.windows(2).find(|w| w[0].region != w[1].region).unwrap();
        assert_eq!(cross[0].coord.y, cross[1].coord.y);
    }

    #[test]
    fn blocked_region_is_never_entered() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 47, 25);
        let to = WorldPos::new(r1(), 2, 25);
        let res = search.search(from, &goal(to, 0), &params(), &mut |region| {
            if region == r1() { RegionCost::Blocked } else { RegionCost::Terrain }
        });
        assert!(res.incomplete);
        assert!(res.path.iter().all(|p| p.region == r0()));
    }

    #[test]
    fn region_callback_called_once_per_region() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 47, 25);
        let to = WorldPos::new(r1(), 2, 25);
        let mut calls: Vec<RegionId> = Vec::new();
        search.search(from, &goal(to, 0), &params(), &mut |region| {
            calls.push(region);
            RegionCost::Terrain
        });
        let mut dedup = calls.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), calls.len());
        assert_eq!(calls[0], r0());
    }

    #[test]
    fn op_budget_yields_partial_path() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 5, 5);
        let to = WorldPos::new(r0(), 45, 45);
        let p = SearchParams { max_ops: 50, ..params() };
        let res = search.search(from, &goal(to, 0), &p, &mut |_| RegionCost::Terrain);
        assert!(res.incomplete);
        assert!(res.ops <= 50);
        assert!(!res.path.is_empty());
        let end = *res.path.last().unwrap();
        assert!(end.range_to(to) < from.range_to(to));
    }

    #[test]
    fn region_budget_blocks_extra_regions() {
        let search = DijkstraGridSearch::new(open);
        let from = WorldPos::new(r0(), 47, 25);
        let to = WorldPos::new(r1(), 2, 25);
        let p = SearchParams { max_regions: 1, ..params() };
        let res = search.search(from, &goal(to, 0), &p, &mut |_| RegionCost::Terrain);
        assert!(res.incomplete);
    }
}

// ── DijkstraRegionRouter ──────────────────────────────────────────────────────

#[cfg(test)]
mod region_router {
    use nav_core::RegionId;

    use crate::{DijkstraRegionRouter, RegionRouter, SpatialError};

    fn router() -> DijkstraRegionRouter {
        DijkstraRegionRouter::within(RegionId::new(0, 0), RegionId::new(5, 5))
    }

    #[test]
    fn same_region_is_empty_route() {
        let r = RegionId::new(2, 2);
        assert_eq!(router().find_route(r, r, &mut |_| 1.0), Ok(vec![]));
    }

    #[test]
    fn straight_route_excludes_origin() {
        let from = RegionId::new(0, 0);
        let to = RegionId::new(3, 0);
        let route = router().find_route(from, to, &mut |_| 1.0).unwrap();
        assert_eq!(route, vec![RegionId::new(1, 0), RegionId::new(2, 0), to]);
    }

    #[test]
    fn infinite_cost_forces_detour() {
        let from = RegionId::new(0, 0);
        let to = RegionId::new(2, 0);
        let wall = RegionId::new(1, 0);
        let route = router()
            .find_route(from, to, &mut |r| if r == wall { f64::INFINITY } else { 1.0 })
            .unwrap();
        assert!(!route.contains(&wall));
        assert_eq!(route.last(), Some(&to));
        assert_eq!(route.len(), 4);
    }

    #[test]
    fn cheaper_regions_preferred() {
        let from = RegionId::new(0, 0);
        let to = RegionId::new(2, 0);
        // Direct middle region is expensive; the detour via row 1 is cheap.
        let route = router()
            .find_route(from, to, &mut |r| if r == RegionId::new(1, 0) { 10.0 } else { 1.0 })
            .unwrap();
        assert!(!route.contains(&RegionId::new(1, 0)));
    }

    #[test]
    fn unreachable_is_no_route() {
        let from = RegionId::new(0, 0);
        let to = RegionId::new(5, 5);
        let err = router().find_route(from, to, &mut |r| if r == to { f64::INFINITY } else { 1.0 });
        assert_eq!(err, Err(SpatialError::NoRoute { from, to }));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let outside = RegionId::new(9, 9);
        let err = router().find_route(RegionId::new(0, 0), outside, &mut |_| 1.0);
        assert_eq!(err, Err(SpatialError::OutOfBounds(outside)));
    }
}

// ── GridWorld / TerrainMap ────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use nav_core::{Coord, RegionId, WorldPos};

    use crate::{
        Controller, GridWorld, Structure, StructureKind, Terrain, TerrainMap, TerrainSource,
        WorldView,
    };

    #[test]
    fn terrain_rows_load() {
        let r = RegionId::new(0, 0);
        let mut map = TerrainMap::new();
        map.load_rows(r, &["..#", ".~."]);
        assert_eq!(map.terrain(WorldPos::new(r, 2, 0)), Terrain::Wall);
        assert_eq!(map.terrain(WorldPos::new(r, 1, 1)), Terrain::Swamp);
        assert_eq!(map.terrain(WorldPos::new(r, 0, 0)), Terrain::Plain);
        assert_eq!(map.terrain(WorldPos::new(RegionId::new(4, 4), 2, 0)), Terrain::Plain);
    }

    #[test]
    fn unobserved_regions_enumerate_nothing() {
        let r = RegionId::new(0, 0);
        let mut world = GridWorld::new();
        world.add_structure(r, Structure::new(StructureKind::Wall, Coord::new(5, 5)));
        world.set_agents([WorldPos::new(r, 1, 1)]);
        assert!(world.structures(r).is_empty());
        assert!(world.agent_coords(r).is_empty());

        world.observe(r);
        assert_eq!(world.structures(r).len(), 1);
        assert_eq!(world.agent_coords(r), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn avoid_flag_toggles() {
        let r = RegionId::new(3, 1);
        let mut world = GridWorld::new();
        world.set_controller(r, Controller { owned: true, mine: false });
        assert!(world.controller(r).unwrap().is_foreign());
        world.set_avoided(r, true);
        assert!(world.is_avoided(r));
        world.set_avoided(r, false);
        assert!(!world.is_avoided(r));
    }

    #[test]
    fn advance_moves_tick() {
        let mut world = GridWorld::new();
        let t0 = world.tick();
        world.advance();
        assert_eq!(world.tick().since(t0), 1);
    }
}
