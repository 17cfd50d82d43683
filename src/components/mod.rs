//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`tween`] – animated interpolation of position

pub mod mapposition;
pub mod sprite;
pub mod tween;
