//! Matrix builders.

use nav_core::{Coord, RegionId, WorldPos};
use nav_spatial::{CostMatrix, StructureKind, WorldView, COST_CONTAINER, COST_IMPASSABLE};

/// Cost matrix for the static obstacles of `region`.
///
/// Roads cost `road_cost`, containers [`COST_CONTAINER`].  Ramparts block
/// unless owned or public; every other structure blocks.  Own construction
/// sites block unless they will become a road, container or rampart.
/// Blocking structures are stamped last so they win over a road on the same
/// tile.
pub fn structure_matrix<W: WorldView + ?Sized>(world: &W, region: RegionId, road_cost: u8) -> CostMatrix {
    let mut matrix = CostMatrix::new();
    let mut impassable: Vec<Coord> = Vec::new();

    for s in world.structures(region) {
        match s.kind {
            StructureKind::Rampart => {
                if !s.mine && !s.public {
                    impassable.push(s.coord);
                }
            }
            StructureKind::Road => matrix.set(s.coord, road_cost),
            StructureKind::Container => matrix.set(s.coord, COST_CONTAINER),
            _ => impassable.push(s.coord),
        }
    }

    for site in world.construction_sites(region) {
        if !site.kind.is_walkable_site() {
            matrix.set(site.coord, COST_IMPASSABLE);
        }
    }

    for coord in impassable {
        matrix.set(coord, COST_IMPASSABLE);
    }
    matrix
}

/// Mark every observed agent in `region` impassable.
pub fn add_agents<W: WorldView + ?Sized>(matrix: &mut CostMatrix, world: &W, region: RegionId) {
    for coord in world.agent_coords(region) {
        matrix.set(coord, COST_IMPASSABLE);
    }
}

/// An uncached copy of `matrix` with each of `obstacles` that lies in
/// `region` marked impassable.
pub fn with_obstacles(matrix: &CostMatrix, region: RegionId, obstacles: &[WorldPos]) -> CostMatrix {
    let mut out = matrix.clone();
    for pos in obstacles.iter().filter(|p| p.region == region) {
        out.set(pos.coord, COST_IMPASSABLE);
    }
    out
}
