//! Bulk asset loading.
//!
//! The registry never touches the filesystem itself; it hands its queue to
//! an [`AssetLoader`] and waits for one completion. [`FsLoader`] is the
//! production implementation: it fans the batch out to short-lived worker
//! threads, decodes images with the `image` crate, slices atlases according
//! to their JSON manifest, and reports the assembled table through a oneshot
//! channel exactly once.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;
use image::RgbaImage;
use log::debug;
use rustc_hash::FxHashMap;
use tokio::sync::oneshot;

use super::error::AssetError;
use super::manifest::AtlasManifest;
use super::texture::{LoaderResource, ResourceTable, Texture};

/// Upper bound on decode threads per batch.
const DEFAULT_WORKER_COUNT: usize = 4;

/// One queued asset: the name it will be looked up under and the URL it is
/// fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub url: String,
}

/// Capability to load a batch of named URLs and report one completion with a
/// table of results.
///
/// `Send + Sync + 'static` because the registry carrying the loader is
/// inserted into the ECS world as a resource.
pub trait AssetLoader: Send + Sync + 'static {
    /// Load every entry of `batch` and settle exactly once: either the full
    /// table or the first per-entry error. Entry ordering is not observable;
    /// only batch-level completion is.
    fn load_batch(
        &mut self,
        batch: Vec<AssetEntry>,
    ) -> impl Future<Output = Result<ResourceTable, AssetError>> + Send;
}

/// Filesystem-backed [`AssetLoader`].
///
/// URLs are paths relative to the loader's root directory. A URL with a
/// `.json` extension is treated as an atlas manifest (see
/// [`AtlasManifest`]); anything else is decoded as a plain image.
pub struct FsLoader {
    root: PathBuf,
    workers: usize,
}

impl FsLoader {
    /// Loader rooted at `root`, with the default worker cap.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_workers(root, DEFAULT_WORKER_COUNT)
    }

    /// Loader rooted at `root` using at most `workers` decode threads per
    /// batch. A cap of zero is bumped to one.
    pub fn with_workers(root: impl Into<PathBuf>, workers: usize) -> Self {
        FsLoader {
            root: root.into(),
            workers: workers.max(1),
        }
    }
}

impl Default for FsLoader {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetLoader for FsLoader {
    fn load_batch(
        &mut self,
        batch: Vec<AssetEntry>,
    ) -> impl Future<Output = Result<ResourceTable, AssetError>> + Send {
        let workers = self.workers.min(batch.len());
        let root = self.root.clone();
        let (done_tx, done_rx) = oneshot::channel();

        let (job_tx, job_rx) = unbounded::<AssetEntry>();
        let (result_tx, result_rx) = unbounded::<(String, Result<LoaderResource, AssetError>)>();

        for entry in batch {
            // Both ends are still alive here; the send cannot fail.
            let _ = job_tx.send(entry);
        }
        drop(job_tx);

        for worker_id in 0..workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            let root = root.clone();
            thread::Builder::new()
                .name(format!("asset-load-{worker_id}"))
                .spawn(move || {
                    while let Ok(entry) = jobs.recv() {
                        let loaded = load_entry(&root, &entry);
                        match &loaded {
                            Ok(_) => debug!("loaded '{}' from '{}'", entry.name, entry.url),
                            Err(e) => debug!("failed to load '{}': {e}", entry.name),
                        }
                        if results.send((entry.name, loaded)).is_err() {
                            // Collector is gone; nobody wants the rest.
                            break;
                        }
                    }
                })
                .expect("failed to spawn asset worker thread");
        }
        drop(job_rx);
        drop(result_tx);

        // The collector drains every per-entry result (there is no way to
        // cancel in-flight decodes) and settles the oneshot exactly once.
        thread::Builder::new()
            .name("asset-collect".into())
            .spawn(move || {
                let mut table = ResourceTable::default();
                let mut first_err: Option<AssetError> = None;
                while let Ok((name, loaded)) = result_rx.recv() {
                    match loaded {
                        Ok(resource) => {
                            table.insert(name, resource);
                        }
                        Err(e) => {
                            if first_err.is_none() {
                                first_err = Some(e);
                            }
                        }
                    }
                }
                let outcome = match first_err {
                    Some(e) => Err(e),
                    None => Ok(table),
                };
                let _ = done_tx.send(outcome);
            })
            .expect("failed to spawn asset collector thread");

        async move { done_rx.await.unwrap_or(Err(AssetError::LoaderShutdown)) }
    }
}

/// Load a single entry, dispatching on the URL's extension.
fn load_entry(root: &Path, entry: &AssetEntry) -> Result<LoaderResource, AssetError> {
    let path = root.join(&entry.url);
    if is_manifest(&path) {
        load_atlas(&path)
    } else {
        let image = open_rgba(&path)?;
        Ok(LoaderResource::Image(Texture::from_image(image)))
    }
}

fn is_manifest(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn open_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    let decoded = image::open(path).map_err(|source| AssetError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}

/// Read a manifest, decode its backing image and slice out every frame.
///
/// All frames share one pixel allocation. Any frame falling outside the
/// backing image fails the entry.
fn load_atlas(path: &Path) -> Result<LoaderResource, AssetError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let manifest: AtlasManifest =
        serde_json::from_str(&text).map_err(|source| AssetError::Manifest {
            path: path.display().to_string(),
            source,
        })?;

    // meta.image is relative to the manifest's own directory.
    let image_path = match path.parent() {
        Some(dir) => dir.join(&manifest.meta.image),
        None => PathBuf::from(&manifest.meta.image),
    };
    let sheet = Arc::new(open_rgba(&image_path)?);
    let (sheet_w, sheet_h) = sheet.dimensions();

    let mut textures = FxHashMap::default();
    for (name, entry) in manifest.frames {
        if !entry.frame.fits_within(sheet_w, sheet_h) {
            return Err(AssetError::FrameOutOfBounds {
                name,
                path: path.display().to_string(),
            });
        }
        textures.insert(name, Texture::new(sheet.clone(), entry.frame));
    }
    debug!(
        "sliced atlas '{}' into {} frame(s)",
        path.display(),
        textures.len()
    );
    Ok(LoaderResource::Atlas { textures })
}
