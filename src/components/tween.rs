//! Tween components for animated interpolation.
//!
//! [`TweenPosition`] animates [`MapPosition`](super::mapposition::MapPosition)
//! between two points. Each tween supports multiple [`Easing`] functions and
//! [`LoopMode`] settings. See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished.
    Loop,
    /// Reverse direction when reaching either end.
    PingPong,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Animates an entity's [`MapPosition`](super::mapposition::MapPosition) between two points.
///
/// The tween interpolates `from` to `to` over `duration` seconds using the
/// specified `easing` function and `loop_mode`.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting position.
    pub from: Vec2,
    /// Ending position.
    pub to: Vec2,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Behavior when the tween ends.
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
}

impl TweenPosition {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }
    pub fn with_backwards(mut self) -> Self {
        self.time = self.duration;
        self.forward = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    // ==================== TWEEN POSITION TESTS ====================

    #[test]
    fn test_tween_position_new() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(100.0, 200.0);
        let tw = TweenPosition::new(from, to, 2.0);

        assert!(vec_approx_eq(tw.from, from));
        assert!(vec_approx_eq(tw.to, to));
        assert!(approx_eq(tw.duration, 2.0));
        assert!(matches!(tw.easing, Easing::Linear));
        assert!(matches!(tw.loop_mode, LoopMode::Once));
        assert!(tw.playing);
        assert!(approx_eq(tw.time, 0.0));
        assert!(tw.forward);
    }

    #[test]
    fn test_tween_position_with_easing() {
        let tw = TweenPosition::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0)
            .with_easing(Easing::QuadIn);

        assert!(matches!(tw.easing, Easing::QuadIn));
    }

    #[test]
    fn test_tween_position_with_loop_mode() {
        let tw = TweenPosition::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0)
            .with_loop_mode(LoopMode::PingPong);

        assert!(matches!(tw.loop_mode, LoopMode::PingPong));
    }

    #[test]
    fn test_tween_position_with_backwards() {
        let tw = TweenPosition::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 2.0).with_backwards();

        assert!(approx_eq(tw.time, 2.0)); // time set to duration
        assert!(!tw.forward);
    }

    #[test]
    fn test_tween_position_builder_chaining() {
        let tw = TweenPosition::new(Vec2::ZERO, Vec2::new(10.0, 10.0), 1.0)
            .with_easing(Easing::CubicOut)
            .with_loop_mode(LoopMode::Loop)
            .with_backwards();

        assert!(matches!(tw.easing, Easing::CubicOut));
        assert!(matches!(tw.loop_mode, LoopMode::Loop));
        assert!(!tw.forward);
    }
}
