//! Unit tests for nav-path.

#[cfg(test)]
mod encoded_path {
    use nav_core::Direction;

    use crate::{EncodedPath, PathError};

    #[test]
    fn parse_accepts_digits_one_to_eight() {
        let p = EncodedPath::parse("12345678").unwrap();
        assert_eq!(p.len(), 8);
        assert_eq!(p.first(), Some(Direction::Top));
        assert_eq!(p.directions().last(), Some(Direction::TopLeft));
    }

    #[test]
    fn parse_rejects_zero_and_nine() {
        assert_eq!(
            EncodedPath::parse("3309"),
            Err(PathError::InvalidCode { index: 2, ch: '0' })
        );
        assert_eq!(
            "9".parse::<EncodedPath>(),
            Err(PathError::InvalidCode { index: 0, ch: '9' })
        );
    }

    #[test]
    fn advance_consumes_front() {
        let mut p = EncodedPath::parse("357").unwrap();
        assert_eq!(p.advance(), Some(Direction::Right));
        assert_eq!(p.as_str(), "57");
        p.advance();
        p.advance();
        assert!(p.is_empty());
        assert_eq!(p.advance(), None);
        assert_eq!(p.first(), None);
    }

    #[test]
    fn push_and_prepend() {
        let mut p = EncodedPath::new();
        p.push(Direction::Right);
        p.prepend(Direction::Left);
        p.prepend(Direction::Right);
        assert_eq!(p.to_string(), "373");
    }

    #[test]
    fn collect_from_directions() {
        let p: EncodedPath = [Direction::Bottom, Direction::BottomLeft].into_iter().collect();
        assert_eq!(p.as_str(), "56");
    }
}

#[cfg(test)]
mod codec {
    use nav_core::{Direction, RegionId, WorldPos};

    use crate::{encode, position_at_direction, EncodedPath};

    fn r0() -> RegionId {
        RegionId::new(0, 0)
    }

    #[test]
    fn position_at_direction_offsets() {
        let p = WorldPos::new(r0(), 10, 10);
        assert_eq!(position_at_direction(p, Direction::Top), Some(WorldPos::new(r0(), 10, 9)));
        assert_eq!(position_at_direction(p, Direction::BottomLeft), Some(WorldPos::new(r0(), 9, 11)));
        assert_eq!(position_at_direction(p, Direction::TopRight), Some(WorldPos::new(r0(), 11, 9)));
    }

    #[test]
    fn position_at_direction_rejects_out_of_grid() {
        assert_eq!(position_at_direction(WorldPos::new(r0(), 0, 5), Direction::Left), None);
        assert_eq!(position_at_direction(WorldPos::new(r0(), 49, 49), Direction::BottomRight), None);
        assert_eq!(position_at_direction(WorldPos::new(r0(), 5, 0), Direction::TopLeft), None);
    }

    #[test]
    fn every_direction_round_trips_through_encode() {
        let start = WorldPos::new(r0(), 25, 25);
        for dir in Direction::ALL {
            let next = position_at_direction(start, dir).unwrap();
            assert_eq!(encode(start, [next]).first(), Some(dir));
            assert_eq!(next.direction_to(start), Some(dir.opposite()));
        }
    }

    #[test]
    fn encode_then_walk_reproduces_positions() {
        let start = WorldPos::new(r0(), 10, 10);
        let positions = vec![
            WorldPos::new(r0(), 11, 10),
            WorldPos::new(r0(), 12, 11),
            WorldPos::new(r0(), 12, 12),
            WorldPos::new(r0(), 11, 13),
        ];
        let path = encode(start, positions.clone());
        assert_eq!(path.as_str(), "3456");
        assert_eq!(path.walk(start), positions);
    }

    #[test]
    fn encode_skips_region_crossing_step() {
        let r1 = RegionId::new(1, 0);
        let start = WorldPos::new(r0(), 48, 25);
        let positions = [
            WorldPos::new(r0(), 49, 25),
            WorldPos::new(r1, 0, 25),
            WorldPos::new(r1, 1, 25),
            WorldPos::new(r1, 2, 26),
        ];
        assert_eq!(encode(start, positions).as_str(), "334");
    }

    #[test]
    fn encode_of_nothing_is_empty() {
        assert!(encode(WorldPos::new(r0(), 1, 1), []).is_empty());
    }

    #[test]
    fn walk_stops_at_grid_edge() {
        let path = EncodedPath::parse("333").unwrap();
        let walked = path.walk(WorldPos::new(r0(), 48, 0));
        assert_eq!(walked, vec![WorldPos::new(r0(), 49, 0)]);
    }

    #[test]
    fn nth_pos() {
        let start = WorldPos::new(r0(), 10, 10);
        let path = EncodedPath::parse("335").unwrap();
        assert_eq!(path.nth_pos(start, 0), Some(start));
        assert_eq!(path.nth_pos(start, 2), Some(WorldPos::new(r0(), 12, 10)));
        assert_eq!(path.nth_pos(start, 3), Some(WorldPos::new(r0(), 12, 11)));
        assert_eq!(path.nth_pos(start, 4), None);
        assert_eq!(path.nth_pos(WorldPos::new(r0(), 49, 10), 1), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_shape {
    use crate::EncodedPath;

    #[test]
    fn serialises_as_plain_string() {
        let p = EncodedPath::parse("1357").unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"1357\"");
        let back: EncodedPath = serde_json::from_str("\"1357\"").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn invalid_digits_fail_to_deserialise() {
        assert!(serde_json::from_str::<EncodedPath>("\"130\"").is_err());
    }
}
