//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `assets` – asset registry, bulk loader, and texture/atlas types
//! - `gameconfig` – window and asset-root settings backed by an INI file
//! - `worldtime` – simulation time and delta
pub mod assets;
pub mod gameconfig;
pub mod worldtime;
