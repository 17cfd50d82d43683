//! Error type for the asset loading path.

use thiserror::Error;

/// Everything that can go wrong between queueing an asset and holding its
/// texture.
///
/// Lookup never produces these: a missing name degrades to `None`. Errors
/// surface only from [`AssetRegistry::load`](super::AssetRegistry::load) and
/// abort the whole batch, so nothing partial is ever installed.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("load() was already called on this registry")]
    LoadAlreadyStarted,

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },

    #[error("invalid atlas manifest '{path}': {source}")]
    Manifest {
        path: String,
        source: serde_json::Error,
    },

    #[error("frame '{name}' in atlas '{path}' falls outside the backing image")]
    FrameOutOfBounds { name: String, path: String },

    #[error("asset loader shut down before reporting batch completion")]
    LoaderShutdown,
}
