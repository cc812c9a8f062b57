//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod region {
    use crate::{NavError, RegionId};

    #[test]
    fn parse_and_display_roundtrip() {
        for name in ["W0N0", "E0S0", "W5N3", "E12S40", "W10S0"] {
            let region = RegionId::parse(name).unwrap();
            assert_eq!(region.to_string(), name);
        }
    }

    #[test]
    fn lattice_halves_meet_at_zero() {
        assert_eq!(RegionId::parse("E0S0").unwrap(), RegionId::new(0, 0));
        assert_eq!(RegionId::parse("W0N0").unwrap(), RegionId::new(-1, -1));
        assert_eq!(RegionId::parse("W5N3").unwrap(), RegionId::new(-6, -4));
    }

    #[test]
    fn malformed_names_rejected() {
        for bad in ["", "X1N1", "W1", "WN1", "W1N", "W1X1", "W-1N1"] {
            assert!(
                matches!(RegionId::parse(bad), Err(NavError::InvalidRegionName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn linear_distance_crosses_axis() {
        let a = RegionId::parse("W1N1").unwrap();
        let b = RegionId::parse("E1N1").unwrap();
        assert_eq!(a.linear_distance(b), 3);
        assert_eq!(b.linear_distance(a), 3);
        assert_eq!(a.linear_distance(a), 0);
    }

    #[test]
    fn highway_classification() {
        assert!(RegionId::parse("W10N3").unwrap().is_highway());
        assert!(RegionId::parse("E3S20").unwrap().is_highway());
        assert!(RegionId::parse("W0N0").unwrap().is_highway());
        assert!(!RegionId::parse("W11N3").unwrap().is_highway());
    }

    #[test]
    fn hazard_band_excludes_centre() {
        assert!(RegionId::parse("W4N4").unwrap().is_hazard());
        assert!(RegionId::parse("E16S14").unwrap().is_hazard());
        assert!(!RegionId::parse("W5N5").unwrap().is_hazard());
        assert!(!RegionId::parse("W3N5").unwrap().is_hazard());
        assert!(!RegionId::parse("W7N5").unwrap().is_hazard());
    }
}

#[cfg(test)]
mod pos {
    use crate::{Coord, Direction, RegionId, WorldPos};

    fn r() -> RegionId {
        RegionId::new(2, 3)
    }

    #[test]
    fn range_is_chebyshev_within_region() {
        let a = WorldPos::new(r(), 10, 10);
        assert_eq!(a.range_to(WorldPos::new(r(), 13, 11)), 3);
        assert_eq!(a.range_to(a), 0);
        assert!(a.is_near_to(WorldPos::new(r(), 11, 9)));
    }

    #[test]
    fn range_across_an_edge_is_measured_in_world_space() {
        let a = WorldPos::new(r(), 49, 10);
        let b = WorldPos::new(RegionId::new(3, 3), 0, 11);
        assert_eq!(a.range_to(b), 1);
        assert_eq!(b.range_to(a), 1);
        assert!(a.is_near_to(b));
        assert_eq!(a.range_to(WorldPos::new(RegionId::new(3, 4), 10, 0)), 40);
    }

    #[test]
    fn range_to_distant_regions_is_infinite() {
        let a = WorldPos::new(r(), 49, 10);
        let b = WorldPos::new(RegionId::new(4, 3), 0, 10);
        assert_eq!(a.range_to(b), u32::MAX);
        assert!(!a.is_near_to(b));
    }

    #[test]
    fn global_roundtrip() {
        let p = WorldPos::new(RegionId::new(-2, 1), 7, 42);
        let (gx, gy) = p.global();
        assert_eq!(WorldPos::from_global(gx, gy), p);
    }

    #[test]
    fn direction_across_region_border() {
        let a = WorldPos::new(r(), 49, 10);
        let b = WorldPos::new(RegionId::new(3, 3), 0, 10);
        assert_eq!(a.direction_to(b), Some(Direction::Right));
    }

    #[test]
    fn edges() {
        assert!(Coord::new(0, 20).is_edge());
        assert!(Coord::new(20, 49).is_edge());
        assert!(!Coord::new(1, 48).is_edge());
        assert_eq!(Coord::try_new(50, 0), None);
        assert_eq!(Coord::try_new(-1, 0), None);
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, NavError};

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.offset();
            assert_eq!(d.opposite().offset(), (-dx, -dy));
        }
    }

    #[test]
    fn codes_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.code()), Ok(d));
            assert_eq!(Direction::from_digit(d.to_digit()), Some(d));
        }
        assert_eq!(Direction::from_code(0), Err(NavError::InvalidDirection(0)));
        assert_eq!(Direction::from_digit('9'), None);
    }

    #[test]
    fn toward_prefers_dominant_axis() {
        assert_eq!(Direction::toward(5, 1), Some(Direction::Right));
        assert_eq!(Direction::toward(-1, -5), Some(Direction::Top));
        assert_eq!(Direction::toward(3, 2), Some(Direction::BottomRight));
        assert_eq!(Direction::toward(-2, 2), Some(Direction::BottomLeft));
        assert_eq!(Direction::toward(0, 0), None);
    }

    #[test]
    fn toward_matches_unit_offsets() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert_eq!(Direction::toward(dx, dy), Some(d));
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::NavRng;

    #[test]
    fn same_seed_same_draws() {
        let mut a = NavRng::new(9);
        let mut b = NavRng::new(9);
        let xs: Vec<bool> = (0..32).map(|_| a.chance(0.5)).collect();
        let ys: Vec<bool> = (0..32).map(|_| b.chance(0.5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn chance_clamps() {
        let mut rng = NavRng::new(1);
        assert!(rng.chance(2.0));
        assert!(!rng.chance(-1.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shapes {
    use crate::{RegionId, WorldPos};

    #[test]
    fn region_serialises_as_name() {
        let json = serde_json::to_string(&RegionId::new(-6, -4)).unwrap();
        assert_eq!(json, "\"W5N3\"");
    }

    #[test]
    fn world_pos_is_flat() {
        let pos = WorldPos::new(RegionId::new(0, 0), 3, 4);
        let json = serde_json::to_value(pos).unwrap();
        assert_eq!(json, serde_json::json!({ "region": "E0S0", "x": 3, "y": 4 }));
    }
}
