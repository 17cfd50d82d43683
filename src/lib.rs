//! Bonbon engine library.
//!
//! A small 2D match-three playground built on `bevy_ecs`. The crate exposes
//! its components, resources, and systems for use in integration tests and
//! as a reusable library; the heart of it is the asset registry in
//! [`resources::assets`].

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
