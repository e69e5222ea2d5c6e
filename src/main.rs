//! Headless towing simulation.
//!
//! Spawns a cart and a driver on the flat sandbox floor, hitches them and
//! drives the driver along +X, logging the cart each tick.
use anyhow::{Context, Result};
use cartwright::prelude::*;
use cartwright::{init_logging, Interaction};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Simulate a cart towed in a straight line
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in cart preset (`supply_cart` or `plow`)
    #[arg(short, long, default_value = "supply_cart", conflicts_with = "profile_file")]
    profile: String,
    /// JSON cart profile overriding the preset
    #[arg(long)]
    profile_file: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 100)]
    ticks: u32,
    /// Driver speed in blocks per tick
    #[arg(short, long, default_value_t = 0.1)]
    speed: f64,
    /// Seed for particle placement
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const DRIVER: EntityId = EntityId(1);

fn load_profile(args: &Args) -> Result<CartProfile> {
    match &args.profile_file {
        Some(path) => CartProfile::load(path)
            .with_context(|| format!("loading cart profile from {}", path.display())),
        None => CartProfile::preset(&args.profile)
            .with_context(|| format!("selecting cart preset {}", args.profile)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let profile = load_profile(&args)?;
    let mut world = FlatWorld::new(0.0);
    world.place_entity(DRIVER, DVec3::ZERO);
    let mut cart = TowedVehicleController::spawn_at_host(profile, &world, args.seed)
        .context("spawning cart")?;

    if cart.interact(DRIVER, &mut world) != Interaction::Success {
        anyhow::bail!("driver could not hitch the cart");
    }

    for tick in 0..args.ticks {
        world.shift_entity(DRIVER, DVec3::new(args.speed, 0.0, 0.0));
        cart.tick(&mut world);
        let Some(state) = cart.state() else {
            break;
        };
        let gap = world
            .entity_position(DRIVER)
            .map_or(0.0, |driver| driver.distance(state.position));
        debug!(
            "tick {tick}: x={:.3} gap={gap:.3} wheel={:.3} balance={:.3}",
            state.position.x,
            state.wheel_angle,
            cart.balance()
        );
    }

    if let Some(state) = cart.state() {
        info!(
            "{} finished at {:?} with velocity {:?}; {} particle bursts, {} sounds",
            cart.profile().name,
            state.position,
            state.velocity,
            world.particles.len(),
            world.sounds.len()
        );
    }
    Ok(())
}
