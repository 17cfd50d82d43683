use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::assets::Texture;

/// Sprite holds the texture it draws plus its pivot.
/// The texture is a cheap handle cloned out of the asset registry.
/// The origin selects the pivot point (in pixels) relative to the texture's
/// top-left, used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub texture: Texture,
    pub origin: Vec2,
}

impl Sprite {
    /// Sprite pivoting on the texture's top-left corner.
    pub fn new(texture: Texture) -> Self {
        Sprite {
            texture,
            origin: Vec2::ZERO,
        }
    }

    /// Sprite pivoting on the texture's center.
    pub fn centered(texture: Texture) -> Self {
        let origin = Vec2::new(
            texture.width() as f32 * 0.5,
            texture.height() as f32 * 0.5,
        );
        Sprite { texture, origin }
    }
}
