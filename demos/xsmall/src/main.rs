//! xsmall — smallest example for the gridsim discrete-event simulator.
//!
//! A handful of sniffer AMRs wander a 60×60 grid toward fixed goal points,
//! re-planning a short random leg toward their goal every time they go idle
//! (a fresh placement, a finished leg, or a collision). Ported from the
//! reference `SnifferAMR` goal-seeking demo: pick a heading normally
//! distributed around the bearing to the goal, walk a random distance up to
//! 5 units along it, repeat until within tolerance.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gs_core::{shape::rectangle, EntityId, EntityRng, RouteDelta, Shape};
use gs_entity::EntityBuilder;
use gs_grid::{Grid, GridConfig};
use gs_output::{collect_entity_histories, CsvWriter, GridCsvObserver, OutputWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE:     u32 = 60;
const MAX_TIME:       f64 = 100_000.0; // effectively unbounded for this demo's leg count
const SEED:           u64 = 42;
const TOLERANCE:      f64 = 1.0;
const SPEED:          f64 = 1.0; // time units per distance unit
const MAX_LEG_LENGTH:  f64 = 5.0;
const MAX_ITERATIONS: usize = 2_000;

/// One AMR's fixed destination.
struct Goal {
    x: f64,
    y: f64,
}

impl Goal {
    /// Pick the next random leg toward this goal from `(x, y)`, or `None` if
    /// already within [`TOLERANCE`].
    fn next_leg(&self, x: f64, y: f64, rng: &mut EntityRng) -> Option<RouteDelta> {
        let distance_from_goal = ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt();
        if distance_from_goal < TOLERANCE {
            return None;
        }

        let goal_angle = (self.y - y).atan2(self.x - x);
        let heading = rng.normal(goal_angle, std::f64::consts::FRAC_PI_2);
        let distance = rng.gen_range(0.0..distance_from_goal.min(MAX_LEG_LENGTH));

        Some(RouteDelta::new(distance * heading.cos(), distance * heading.sin(), distance * SPEED))
    }
}

fn amr_shape() -> Shape {
    Shape::new(rectangle(1.0, 1.0, 2)).expect("unit square is a valid shape")
}

fn main() -> Result<()> {
    println!("=== xsmall — gridsim sniffer AMR demo ===");
    println!("Grid: {GRID_SIZE}x{GRID_SIZE}  |  Seed: {SEED}");
    println!();

    std::fs::create_dir_all("output/xsmall")?;
    let writer = CsvWriter::new(Path::new("output/xsmall"))?;
    let mut grid: Grid<GridCsvObserver<CsvWriter>> = GridConfig::new("xsmall")
        .x_size(GRID_SIZE)
        .y_size(GRID_SIZE)
        .max_time(MAX_TIME)
        .add_exterior_walls(true)
        .build_with_observer(GridCsvObserver::new(writer));

    let amrs: Vec<(EntityId, Goal)> = vec![
        (grid.add_entity(EntityBuilder::new("AMR1").shape(amr_shape()).position(25.0, 30.0), None)?, Goal { x: 35.0, y: 30.0 }),
        (grid.add_entity(EntityBuilder::new("AMR2").shape(amr_shape()).position(30.0, 25.0), None)?, Goal { x: 30.0, y: 35.0 }),
        (grid.add_entity(EntityBuilder::new("AMR3").shape(amr_shape()).position(10.0, 10.0), None)?, Goal { x: 50.0, y: 50.0 }),
        (grid.add_entity(EntityBuilder::new("AMR4").shape(amr_shape()).position(50.0, 10.0), None)?, Goal { x: 10.0, y: 50.0 }),
    ];
    println!("Placed {} AMRs", amrs.len());

    let mut rngs: Vec<EntityRng> = amrs.iter().map(|(id, _)| EntityRng::new(SEED, *id)).collect();

    let t0 = Instant::now();
    let mut iterations = 0;
    loop {
        // Re-plan a fresh random leg for every AMR that's currently idle
        // (just placed, finished its last leg, or stopped by a collision)
        // and hasn't yet reached its goal.
        let current_time = grid.current_time();
        for ((id, goal), rng) in amrs.iter().zip(rngs.iter_mut()) {
            let Some(entity) = grid.entity(*id) else { continue };
            if entity.in_route(current_time) {
                continue;
            }
            if let Some(delta) = goal.next_leg(entity.x, entity.y, rng) {
                grid.add_route(*id, vec![delta], Some(current_time), false)?;
            }
        }

        // Every AMR that reached its goal stops scheduling events, so the
        // queue drains to empty once all of them have arrived.
        if grid.resolve_next_state()? == 0 {
            break;
        }
        iterations += 1;
        if iterations >= MAX_ITERATIONS {
            println!("(stopped after {MAX_ITERATIONS} iterations; some AMRs may not have reached their goal)");
            break;
        }
    }
    let elapsed = t0.elapsed();

    let history_rows = collect_entity_histories(&grid);
    let obs = grid.observer_mut();
    obs.writer_mut().write_history(&history_rows)?;
    obs.writer_mut().finish()?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s ({iterations} iterations)", elapsed.as_secs_f64());
    println!("  entity_history.csv : {} rows", history_rows.len());
    println!();

    println!("{:<8} {:<10} {:<10}", "AMR", "x", "y");
    println!("{}", "-".repeat(28));
    for (id, _) in &amrs {
        let entity = grid.entity(*id).expect("AMR still registered");
        println!("{:<8} {:<10.2} {:<10.2}", entity.name, entity.x, entity.y);
    }

    Ok(())
}
