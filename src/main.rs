//! Bonbon main entry point.
//!
//! A 2D match-three playground written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **image** + worker threads for asset decoding
//!
//! # Startup
//!
//! 1. Read `config.ini` (window size, asset root)
//! 2. Create the ECS world and clock
//! 3. Load the asset batch and spawn the opening scene
//! 4. Run a fixed-step simulation loop
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use bonbon::components::mapposition::MapPosition;
use bonbon::components::sprite::Sprite;
use bonbon::game;
use bonbon::resources::gameconfig::GameConfig;
use bonbon::resources::worldtime::WorldTime;
use bonbon::systems::time::update_world_time;
use bonbon::systems::tween::tween_mapposition_system;

/// Bonbon, a candy playground
#[derive(Parser)]
#[command(version, about = "Sweets falling from the sky!")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Asset root directory, overriding the configured one.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Number of simulation frames to run before exiting.
    #[arg(long, default_value_t = 300)]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(dir) = cli.assets {
        config.assets_dir = dir;
    }

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(config.clone());

    // Asset loading is the one await point of the program; block on it here
    // and start the loop with everything resolved.
    if let Err(e) = pollster::block_on(game::initialize(&mut world, &config)) {
        error!("Game initialization failed: {e}");
        std::process::exit(1);
    }

    let mut update = Schedule::default();
    update.add_systems(tween_mapposition_system);
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    // Headless fixed-step simulation at the configured frame rate.
    let dt = 1.0 / config.target_fps.max(1) as f32;
    for frame in 0..cli.frames {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();

        if frame % config.target_fps.max(1) == 0 {
            log_candy_position(&mut world);
        }
    }
    info!("simulation finished after {} frame(s)", cli.frames);
}

fn log_candy_position(world: &mut World) {
    let mut query = world.query::<(&MapPosition, &Sprite)>();
    for (position, sprite) in query.iter(world) {
        info!(
            "candy {}x{} at ({:.1}, {:.1})",
            sprite.texture.width(),
            sprite.texture.height(),
            position.pos.x,
            position.pos.y
        );
    }
}
