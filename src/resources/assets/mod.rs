//! Asset loading and resolution.
//!
//! [`AssetRegistry`] gives the game one place to declare the images and
//! atlases it needs, load them in a single batch, and resolve textures by
//! name afterwards. The registry owns the bookkeeping only; fetching and
//! decoding live behind the [`AssetLoader`] trait, with [`FsLoader`] as the
//! filesystem implementation used by the real game.
//!
//! A URL ending in `.json` is an atlas: the manifest names a backing image
//! and a set of named frames, and the loader slices one [`Texture`] per
//! frame, all sharing a single pixel allocation. Any other URL is decoded
//! as a plain image.
//!
//! ```
//! use bonbon::resources::assets::AssetRegistry;
//!
//! let mut assets = AssetRegistry::new();
//! assets.add("common", "assets.json").add("background", "bg.png");
//!
//! // Nothing is fetched until load(); lookups are safely empty meanwhile.
//! assert_eq!(assets.queued(), 2);
//! assert!(!assets.is_started());
//! assert!(assets.get_texture("candies/blue", Some("common")).is_none());
//! ```
//!
//! Lookups are stringly keyed on purpose. Games that want completion and
//! typo safety over known names keep `&'static str` constants next to their
//! game code (see [`crate::game`]) rather than threading a type parameter
//! through the registry.

mod error;
mod loader;
mod manifest;
mod registry;
mod texture;

pub use error::AssetError;
pub use loader::{AssetEntry, AssetLoader, FsLoader};
pub use manifest::{AtlasManifest, AtlasMeta, FrameEntry};
pub use registry::AssetRegistry;
pub use texture::{Frame, LoaderResource, ResourceTable, Texture};
