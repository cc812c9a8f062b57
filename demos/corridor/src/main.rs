//! Corridor demo.
//!
//! Four walkers cross three regions joined by a walled corridor.  The middle
//! region is swamp with a road down the centre, and a parked agent sits on
//! the road, so walkers bunch up, get stuck and escalate around it.
//!
//! Writes `trajectories.csv` (one row per walker per tick) and `states.json`
//! (final navigation state per walker) to the directory given as the first
//! argument, `out/` by default.
//!
//! ```text
//! RUST_LOG=nav_travel=debug cargo run -p corridor -- out
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::{AgentId, Coord, Direction, RegionId, WorldPos};
use nav_spatial::{
    DijkstraGridSearch, DijkstraRegionRouter, GridWorld, Structure, StructureKind, Terrain, TerrainMap,
    TerrainSource,
};
use nav_travel::{AgentHandle, MoveError, Step, TravelOptions, TravelerBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_TICKS: u64      = 400;
const SEED:      u64      = 42;
const WEST:      RegionId = RegionId::new(1, 1);
const MID:       RegionId = RegionId::new(2, 1); // swamp, road along y = 25
const EAST:      RegionId = RegionId::new(3, 1);

// ── Walker ────────────────────────────────────────────────────────────────────

struct Walker {
    id:      AgentId,
    name:    String,
    pos:     WorldPos,
    goal:    WorldPos,
    fatigue: u32,
    age:     u32,
    pending: Option<Direction>,
}

impl Walker {
    fn new(id: u32, pos: WorldPos, goal: WorldPos) -> Self {
        Self {
            id: AgentId(id),
            name: format!("walker{id}"),
            pos,
            goal,
            fatigue: 0,
            age: 0,
            pending: None,
        }
    }

    /// Tile the pending move would land on.
    fn target(&self) -> Option<WorldPos> {
        let dir = self.pending?;
        let (gx, gy) = self.pos.global();
        let (dx, dy) = dir.offset();
        Some(WorldPos::from_global(gx + dx, gy + dy))
    }
}

impl AgentHandle for Walker {
    fn id(&self) -> AgentId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn pos(&self) -> WorldPos {
        self.pos
    }
    fn is_spawning(&self) -> bool {
        false
    }
    fn fatigue(&self) -> u32 {
        self.fatigue
    }
    fn age(&self) -> u32 {
        self.age
    }
    fn move_dir(&mut self, dir: Direction) -> Result<(), MoveError> {
        self.pending = Some(dir);
        Ok(())
    }
}

// ── World setup ───────────────────────────────────────────────────────────────

/// Rows 20..=30 open, everything else wall.  The middle region is swamp
/// between x 5 and 44.
fn region_rows(swampy: bool) -> Vec<String> {
    (0..50)
        .map(|y| {
            (0..50)
                .map(|x| {
                    if !(20..=30).contains(&y) {
                        '#'
                    } else if swampy && (5..45).contains(&x) {
                        '~'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

fn build_terrain() -> TerrainMap {
    let mut terrain = TerrainMap::new();
    for region in [WEST, MID, EAST] {
        let rows = region_rows(region == MID);
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        terrain.load_rows(region, &rows);
    }
    terrain
}

fn build_world() -> GridWorld {
    let mut world = GridWorld::new();
    for region in [WEST, MID, EAST] {
        world.observe(region);
    }
    for x in 0..50 {
        world.add_structure(MID, Structure::new(StructureKind::Road, Coord::new(x, 25)));
    }
    world
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out = std::env::args().nth(1).map_or_else(|| PathBuf::from("out"), PathBuf::from);
    fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    let terrain = build_terrain();
    let mut world = build_world();
    let router = DijkstraRegionRouter::within(RegionId::new(0, 0), RegionId::new(4, 2));
    let mut traveler = TravelerBuilder::new(DijkstraGridSearch::new(terrain.clone()), router)
        .seed(SEED)
        .build();

    let parked = WorldPos::new(MID, 25, 25);
    let mut walkers = vec![
        Walker::new(1, WorldPos::new(WEST, 5, 25), WorldPos::new(EAST, 44, 25)),
        Walker::new(2, WorldPos::new(WEST, 5, 22), WorldPos::new(EAST, 44, 28)),
        Walker::new(3, WorldPos::new(EAST, 44, 24), WorldPos::new(WEST, 5, 26)),
        Walker::new(4, WorldPos::new(WEST, 30, 30), WorldPos::new(MID, 25, 21)),
    ];

    let mut trace = Writer::from_path(out.join("trajectories.csv"))?;
    trace.write_record(["tick", "agent", "region", "x", "y", "outcome", "path_len"])?;

    for tick in 0..MAX_TICKS {
        world.set_agents(walkers.iter().map(|w| w.pos).chain([parked]));

        let mut arrived = 0;
        for walker in &mut walkers {
            let goal = walker.goal;
            let options = TravelOptions { ensure_path: true, ..TravelOptions::default() };
            let outcome = match traveler.travel_to(&mut world, walker, Some(&goal), options) {
                Ok(Step::Arrived) => {
                    arrived += 1;
                    "arrived".to_owned()
                }
                Ok(step) => format!("{step:?}"),
                Err(err) => err.to_string(),
            };
            trace.write_record(&[
                tick.to_string(),
                walker.name.clone(),
                walker.pos.region.to_string(),
                walker.pos.coord.x.to_string(),
                walker.pos.coord.y.to_string(),
                outcome,
                traveler.path_length(walker.id).to_string(),
            ])?;
        }
        if arrived == walkers.len() {
            info!(tick, "all walkers arrived");
            break;
        }

        // Moves resolve in order; a walker trying to enter a wall or an
        // occupied tile stays put.
        for i in 0..walkers.len() {
            walkers[i].fatigue = walkers[i].fatigue.saturating_sub(1);
            walkers[i].age += 1;
            let Some(target) = walkers[i].target() else {
                continue;
            };
            walkers[i].pending = None;
            let blocked = target == parked
                || terrain.terrain(target) == Terrain::Wall
                || walkers.iter().any(|w| w.pos == target);
            if !blocked {
                walkers[i].pos = target;
                if terrain.terrain(target) == Terrain::Swamp {
                    walkers[i].fatigue = 1;
                }
            }
        }
        world.advance();
    }
    trace.flush()?;

    let mut states = BTreeMap::new();
    for walker in &walkers {
        if let Some(state) = traveler.store.current(walker.id) {
            info!(
                agent = %walker.name,
                at = %walker.pos,
                repaths = state.repath_count,
                calls = state.travel_invocations,
                "final state"
            );
            states.insert(walker.name.clone(), state.clone());
        }
    }
    let file = File::create(out.join("states.json"))?;
    serde_json::to_writer_pretty(file, &states)?;

    info!(dir = %out.display(), "wrote trajectories.csv and states.json");
    Ok(())
}
