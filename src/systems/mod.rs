//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation.
//!
//! Submodules overview
//! - [`time`] – update simulation time and delta
//! - [`tween`] – animate position over time

pub mod time;
pub mod tween;
