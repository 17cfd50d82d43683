//! Tween animation system.
//!
//! [`tween_mapposition_system`] animates
//! [`MapPosition`](crate::components::mapposition::MapPosition) based on
//! [`TweenPosition`](crate::components::tween::TweenPosition) components.
//! Each tween specifies start/end values, duration, easing function, and
//! loop mode. The system reads delta time from
//! [`WorldTime`](crate::resources::worldtime::WorldTime) and interpolates
//! the position accordingly.

use crate::components::mapposition::MapPosition;
use crate::components::tween::{Easing, LoopMode, TweenPosition};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        } // TODO: sine, elastic, bounce, etc.
    }
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(
    time: &mut f32,
    duration: f32,
    forward: &mut bool,
    playing: &mut bool,
    mode: LoopMode,
    dt: f32,
) {
    let dir = if *forward { 1.0 } else { -1.0 };
    *time += dt * dir;

    let finished_forward = *forward && *time >= duration;
    let finished_backward = !*forward && *time <= 0.0;

    if finished_forward || finished_backward {
        match mode {
            LoopMode::Once => {
                *playing = false;
                *time = time.clamp(0.0, duration);
            }
            LoopMode::Loop => {
                *time = if finished_forward { 0.0 } else { duration };
            }
            LoopMode::PingPong => {
                *forward = !*forward;
                *time = time.clamp(0.0, duration);
            }
        }
    }
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut TweenPosition)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut mp, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let loop_mode = tw.loop_mode;
        let mut t = tw.time;
        let mut forward = tw.forward;
        let mut playing = tw.playing;
        advance(&mut t, duration, &mut forward, &mut playing, loop_mode, dt);
        tw.time = t;
        tw.forward = forward;
        tw.playing = playing;
        let t = ease(tw.easing, tw.time / duration);
        mp.pos = tw.from.lerp(tw.to, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_zero() {
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_all_types_at_one() {
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            assert!(
                approx_eq(ease(easing, -0.5), 0.0),
                "{:?} at t=-0.5 should clamp to 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.5), 1.0),
                "{:?} at t=1.5 should clamp to 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_quad_in() {
        // QuadIn: t^2
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25)); // 0.5^2 = 0.25
        assert!(approx_eq(ease(Easing::QuadIn, 0.25), 0.0625)); // 0.25^2 = 0.0625
    }

    #[test]
    fn test_ease_quad_out() {
        // QuadOut: t * (2 - t)
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75)); // 0.5 * 1.5 = 0.75
        assert!(approx_eq(ease(Easing::QuadOut, 0.25), 0.4375)); // 0.25 * 1.75 = 0.4375
    }

    #[test]
    fn test_ease_quad_inout_midpoint() {
        // At midpoint, both halves should give 0.5
        assert!(approx_eq(ease(Easing::QuadInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_cubic_in() {
        // CubicIn: t^3
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125)); // 0.5^3 = 0.125
    }

    #[test]
    fn test_ease_cubic_out() {
        // CubicOut: (t-1)^3 + 1
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875)); // (-0.5)^3 + 1 = 0.875
    }

    #[test]
    fn test_ease_cubic_inout_midpoint() {
        assert!(approx_eq(ease(Easing::CubicInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_monotonicity() {
        // All easing functions should be monotonically increasing
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(
                    curr >= prev - EPSILON,
                    "{:?} should be monotonic: ease({}) = {} < ease({}) = {}",
                    easing,
                    (i - 1) as f32 / 100.0,
                    prev,
                    t,
                    curr
                );
                prev = curr;
            }
        }
    }

    // ==================== ADVANCE FUNCTION TESTS ====================

    #[test]
    fn test_advance_forward_normal() {
        let mut time = 0.0;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.1);
        assert!(approx_eq(time, 0.1));
        assert!(forward);
        assert!(playing);
    }

    #[test]
    fn test_advance_backward_normal() {
        let mut time = 1.0;
        let mut forward = false;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.1);
        assert!(approx_eq(time, 0.9));
        assert!(!forward);
        assert!(playing);
    }

    #[test]
    fn test_advance_once_stops_at_end() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.2);
        assert!(approx_eq(time, 1.0)); // clamped
        assert!(!playing); // stopped
    }

    #[test]
    fn test_advance_once_stops_at_start() {
        let mut time = 0.1;
        let mut forward = false;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Once, 0.2);
        assert!(approx_eq(time, 0.0)); // clamped
        assert!(!playing); // stopped
    }

    #[test]
    fn test_advance_loop_wraps_forward() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Loop, 0.2);
        assert!(approx_eq(time, 0.0)); // wrapped
        assert!(playing);
    }

    #[test]
    fn test_advance_loop_wraps_backward() {
        let mut time = 0.1;
        let mut forward = false;
        let mut playing = true;
        advance(&mut time, 1.0, &mut forward, &mut playing, LoopMode::Loop, 0.2);
        assert!(approx_eq(time, 1.0)); // wrapped to end
        assert!(playing);
    }

    #[test]
    fn test_advance_pingpong_reverses_at_end() {
        let mut time = 0.9;
        let mut forward = true;
        let mut playing = true;
        advance(
            &mut time,
            1.0,
            &mut forward,
            &mut playing,
            LoopMode::PingPong,
            0.2,
        );
        assert!(approx_eq(time, 1.0)); // clamped to end
        assert!(!forward); // direction reversed
        assert!(playing);
    }

    #[test]
    fn test_advance_pingpong_reverses_at_start() {
        let mut time = 0.1;
        let mut forward = false;
        let mut playing = true;
        advance(
            &mut time,
            1.0,
            &mut forward,
            &mut playing,
            LoopMode::PingPong,
            0.2,
        );
        assert!(approx_eq(time, 0.0)); // clamped to start
        assert!(forward); // direction reversed
        assert!(playing);
    }
}
