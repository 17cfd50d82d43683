//! Atlas manifest format.
//!
//! An atlas is described by a JSON file sitting next to its backing image,
//! in the shape common spritesheet packers emit:
//!
//! ```json
//! {
//!   "frames": {
//!     "candies/blue": { "frame": { "x": 0, "y": 0, "w": 32, "h": 32 } }
//!   },
//!   "meta": { "image": "assets.png" }
//! }
//! ```
//!
//! Fields beyond the ones modeled here (trim/rotation hints, packer
//! metadata) are ignored. `meta.image` is resolved relative to the manifest
//! file's directory.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::texture::Frame;

/// Parsed contents of an atlas `.json` descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// Sprite name to frame placement within the backing image.
    pub frames: FxHashMap<String, FrameEntry>,
    pub meta: AtlasMeta,
}

/// Per-sprite entry inside [`AtlasManifest::frames`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntry {
    pub frame: Frame,
}

/// Atlas-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasMeta {
    /// File name of the backing image, relative to the manifest.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_packer_output_and_ignores_extras() {
        let json = r#"{
            "frames": {
                "candies/blue": {
                    "frame": { "x": 0, "y": 0, "w": 32, "h": 32 },
                    "rotated": false,
                    "trimmed": false,
                    "sourceSize": { "w": 32, "h": 32 }
                },
                "candies/red": {
                    "frame": { "x": 32, "y": 0, "w": 32, "h": 32 }
                }
            },
            "meta": { "image": "assets.png", "scale": "1" }
        }"#;

        let manifest: AtlasManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.meta.image, "assets.png");
        assert_eq!(manifest.frames.len(), 2);
        let blue = &manifest.frames["candies/blue"];
        assert_eq!(blue.frame, Frame { x: 0, y: 0, w: 32, h: 32 });
    }

    #[test]
    fn test_rejects_manifest_without_meta() {
        let json = r#"{ "frames": {} }"#;
        assert!(serde_json::from_str::<AtlasManifest>(json).is_err());
    }
}
