//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds; scaling by
/// `time_scale` happens inside the resource.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
