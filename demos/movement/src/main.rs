//! Movement demo — a small driver loop over the micro ECS.
//!
//! The library has no world and no scheduler; this binary plays that role.
//! It builds a `Vec<Entity>`, then on every tick runs the move, boundary,
//! and report systems over it in that order. Odd-numbered entities get no
//! `Velocity`, so only the even ones move.

mod systems;

use anyhow::{Result, ensure};
use clap::Parser;
use micro_component::Entity;
use micro_math::{Position, Velocity};
use micro_system::System;
use tracing::info;
use tracing_subscriber::EnvFilter;

use systems::{BoundarySystem, MoveSystem, ReportSystem};

#[derive(Parser)]
#[command(name = "movement", about = "Moves entities with Position and Velocity")]
struct Args {
    /// Number of entities to create
    #[arg(short, long, default_value_t = 8)]
    entities: usize,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 3)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0)]
    dt: f32,

    /// Distance from the origin past which entities stop
    #[arg(short, long, default_value_t = 10.0)]
    radius: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("movement=info".parse()?))
        .init();

    let args = Args::parse();
    ensure!(args.dt > 0.0, "--dt must be positive, got {}", args.dt);
    ensure!(args.radius > 0.0, "--radius must be positive, got {}", args.radius);

    let mut entities = spawn(args.entities);
    info!(
        entities = entities.len(),
        ticks = args.ticks,
        dt = args.dt,
        "movement demo starting"
    );

    let mut mover = MoveSystem::new(args.dt);
    let mut boundary = BoundarySystem::new(args.radius);
    let mut report = ReportSystem::new();

    for tick in 1..=args.ticks {
        let moved = mover.process_all(&mut entities);
        let checked = boundary.process_all(&mut entities);
        report.begin(tick);
        report.process_all(&mut entities);
        info!(tick, moved, checked, "tick complete");
    }

    let still_moving = entities.iter().filter(|e| e.contains::<Velocity>()).count();
    info!(still_moving, "movement demo finished");
    Ok(())
}

/// Builds `count` entities spread along the x axis. Even ones also move.
fn spawn(count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let mut entity = Entity::new();
            entity.emplace(Position::new(i as f32, 0.0));
            if i % 2 == 0 {
                entity.emplace(Velocity::new(1.0, 0.5));
            }
            entity
        })
        .collect()
}
