//! High-level game setup.
//!
//! Responsible only for initialization steps: loading the asset batch and
//! spawning the initial scene. Everything here goes through the
//! [`AssetRegistry`], which stays in the world afterwards so later scenes
//! can resolve textures too.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tween::{Easing, LoopMode, TweenPosition};
use crate::resources::assets::{AssetError, AssetRegistry, FsLoader, Texture};
use crate::resources::gameconfig::GameConfig;

// Registry keys are plain strings; the constants below are the single place
// where the known names live.

/// Atlas holding the common game sprites.
pub const ATLAS_COMMON: &str = "common";
/// Blue candy frame inside [`ATLAS_COMMON`].
pub const CANDY_BLUE: &str = "candies/blue";

/// Peak height of the candy's idle jump, in pixels.
const CANDY_JUMP_HEIGHT: f32 = 48.0;
/// Seconds for one half of the jump (up or down).
const CANDY_JUMP_SECONDS: f32 = 0.45;

/// Load the game's assets and spawn the initial scene.
///
/// Queues the common atlas, waits for the whole batch, then configures the
/// opening scene. On a load error nothing is spawned and the registry is not
/// installed; the caller decides whether to bail out.
pub async fn initialize(world: &mut World, config: &GameConfig) -> Result<(), AssetError> {
    let mut assets = AssetRegistry::with_loader(FsLoader::new(&config.assets_dir));
    assets.add(ATLAS_COMMON, "assets.json");
    assets.load().await?;

    configure_scene(world, &assets, config);
    world.insert_resource(assets);
    Ok(())
}

/// Spawn the opening scene: one candy jumping in the middle of the screen.
///
/// A missing texture is logged and skipped; the scene comes up without it.
fn configure_scene(world: &mut World, assets: &AssetRegistry, config: &GameConfig) {
    let (width, height) = config.window_size();
    let center = Vec2::new(width as f32 * 0.5, height as f32 * 0.5);

    match assets.get_texture(CANDY_BLUE, Some(ATLAS_COMMON)) {
        Some(texture) => {
            spawn_jumping_candy(world, texture, center);
            info!("initial scene ready");
        }
        None => warn!("texture '{CANDY_BLUE}' not found in atlas '{ATLAS_COMMON}'"),
    }
}

/// Candy pivoting on its center, bouncing between `at` and a point
/// [`CANDY_JUMP_HEIGHT`] above it.
fn spawn_jumping_candy(world: &mut World, texture: Texture, at: Vec2) {
    let apex = at - Vec2::new(0.0, CANDY_JUMP_HEIGHT);
    world.spawn((
        MapPosition { pos: at },
        Sprite::centered(texture),
        TweenPosition::new(at, apex, CANDY_JUMP_SECONDS)
            .with_easing(Easing::QuadOut)
            .with_loop_mode(LoopMode::PingPong),
    ));
}
