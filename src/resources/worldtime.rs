use bevy_ecs::prelude::Resource;

/// Simulation clock: total elapsed seconds and the last frame's delta, both
/// already scaled by `time_scale`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Fold one frame's unscaled delta into the clock.
    pub fn advance(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.elapsed += scaled;
        self.delta = scaled;
    }
}
