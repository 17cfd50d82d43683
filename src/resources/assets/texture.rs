//! Texture handles and loaded-resource types.
//!
//! A [`Texture`] is a cheap handle: an [`Arc`]-shared decoded RGBA image plus
//! the [`Frame`] rectangle it occupies inside that image. Sub-textures sliced
//! out of one atlas all point at the same pixel allocation, so cloning and
//! passing handles around is free of pixel copies.

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Table of loaded resources keyed by the name they were queued under.
pub type ResourceTable = FxHashMap<String, LoaderResource>;

/// Rectangle selecting a region of a source image, in pixels.
///
/// Also the wire shape of the `frame` object inside an atlas manifest, which
/// is why the fields are spelled `w`/`h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Frame {
    /// Frame covering a whole image of the given size.
    pub fn full(w: u32, h: u32) -> Self {
        Frame { x: 0, y: 0, w, h }
    }

    /// Whether this frame lies entirely inside an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.w as u64 <= width as u64
            && self.y as u64 + self.h as u64 <= height as u64
    }
}

/// Handle to a region of a decoded image.
///
/// Equality is identity-based: two handles are equal when they share the same
/// source allocation and select the same frame. Repeated lookups of the same
/// name therefore compare equal without touching pixel data.
#[derive(Clone)]
pub struct Texture {
    source: Arc<RgbaImage>,
    frame: Frame,
}

impl Texture {
    /// Create a handle over `frame` within `source`.
    ///
    /// The caller is responsible for `frame` lying inside the image; the
    /// loader validates manifests before handing frames in here.
    pub fn new(source: Arc<RgbaImage>, frame: Frame) -> Self {
        Texture { source, frame }
    }

    /// Create a handle covering the whole of `image`.
    pub fn from_image(image: RgbaImage) -> Self {
        let (w, h) = image.dimensions();
        Texture {
            source: Arc::new(image),
            frame: Frame::full(w, h),
        }
    }

    /// Width of the frame in pixels.
    pub fn width(&self) -> u32 {
        self.frame.w
    }

    /// Height of the frame in pixels.
    pub fn height(&self) -> u32 {
        self.frame.h
    }

    /// The frame this handle selects within its source image.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Dimensions of the backing source image.
    pub fn source_size(&self) -> (u32, u32) {
        self.source.dimensions()
    }

    /// Whether two handles are backed by the same pixel allocation, e.g.
    /// frames sliced from the same atlas sheet.
    pub fn shares_source(&self, other: &Texture) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }

    /// Sample a pixel in frame-local coordinates as RGBA bytes.
    ///
    /// Returns `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.frame.w || y >= self.frame.h {
            return None;
        }
        Some(self.source.get_pixel(self.frame.x + x, self.frame.y + y).0)
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source) && self.frame == other.frame
    }
}

impl Eq for Texture {}

// Keep pixel buffers out of Debug output; a texture can be megabytes.
impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("frame", &self.frame)
            .field("source_size", &self.source_size())
            .finish()
    }
}

/// One loaded asset, as produced by an [`AssetLoader`](super::AssetLoader).
///
/// A plain image exposes a single texture; an atlas exposes a sub-table of
/// textures keyed by sprite name.
#[derive(Debug, Clone)]
pub enum LoaderResource {
    /// A single decoded image.
    Image(Texture),
    /// An atlas: named frames sliced out of one backing image.
    Atlas {
        textures: FxHashMap<String, Texture>,
    },
}
