//! The asset registry resource: queue names, load once, look textures up.

use std::mem;

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};

use super::error::AssetError;
use super::loader::{AssetEntry, AssetLoader, FsLoader};
use super::texture::{LoaderResource, ResourceTable, Texture};

/// Queue of named asset URLs with one-shot bulk loading and texture lookup.
///
/// The life cycle is strictly add-then-load-then-get:
///
/// 1. [`add`](Self::add) queues `(name, url)` pairs. Nothing is fetched yet.
/// 2. [`load`](Self::load) hands the whole queue to the loader and suspends
///    until every entry settled. It consumes the queue and works exactly
///    once per registry.
/// 3. [`get_texture`](Self::get_texture) resolves names against the
///    installed table. It never panics; any miss, including calls before
///    the load finished, is `None`.
///
/// The loader is injected, so tests can drive the registry with a fake that
/// never touches the filesystem.
#[derive(Resource)]
pub struct AssetRegistry<L: AssetLoader = FsLoader> {
    loader: L,
    pending: Vec<AssetEntry>,
    resources: Option<ResourceTable>,
    started: bool,
    loaded: bool,
}

impl AssetRegistry<FsLoader> {
    /// Registry over a filesystem loader rooted at `./assets`.
    pub fn new() -> Self {
        Self::with_loader(FsLoader::default())
    }
}

impl Default for AssetRegistry<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: AssetLoader> AssetRegistry<L> {
    /// Registry over a caller-supplied loader.
    pub fn with_loader(loader: L) -> Self {
        AssetRegistry {
            loader,
            pending: Vec::new(),
            resources: None,
            started: false,
            loaded: false,
        }
    }

    /// Queue an asset under `name`, fetched from `url` when [`load`](Self::load)
    /// runs. Returns `&mut Self` so registrations chain.
    ///
    /// Re-adding a name before the load replaces its URL in place. Adding
    /// after the load has started is ignored with a warning; the batch was
    /// already sealed.
    pub fn add(&mut self, name: impl Into<String>, url: impl Into<String>) -> &mut Self {
        let name = name.into();
        let url = url.into();
        if self.started {
            warn!("asset '{name}' queued after load was started; ignoring");
            return self;
        }
        if let Some(entry) = self.pending.iter_mut().find(|e| e.name == name) {
            debug!(
                "asset '{name}' queued twice; replacing '{}' with '{url}'",
                entry.url
            );
            entry.url = url;
        } else {
            self.pending.push(AssetEntry { name, url });
        }
        self
    }

    /// Number of entries waiting for the load.
    pub fn queued(&self) -> usize {
        self.pending.len()
    }

    /// Whether [`load`](Self::load) has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the loaded table is installed and lookups can succeed.
    /// Implies [`is_started`](Self::is_started).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load everything queued so far and install the resulting table.
    ///
    /// The started flag flips before the first suspension, so a second call
    /// fails with [`AssetError::LoadAlreadyStarted`] without reaching the
    /// loader, even while the first is still in flight. On a loader error
    /// nothing is installed: the first failure is returned and every lookup
    /// keeps answering `None`.
    pub async fn load(&mut self) -> Result<(), AssetError> {
        if self.started {
            return Err(AssetError::LoadAlreadyStarted);
        }
        self.started = true;
        let batch = mem::take(&mut self.pending);
        info!("loading {} queued asset(s)", batch.len());
        let table = self.loader.load_batch(batch).await?;
        info!("asset load complete: {} resource(s)", table.len());
        self.resources = Some(table);
        self.loaded = true;
        Ok(())
    }

    /// Resolve a texture by name.
    ///
    /// With `atlas_name` the lookup goes through that atlas's sub-table;
    /// without it, `texture_name` must name a plain image at the top level.
    /// Every miss is plain `None`: unknown names, a name of the wrong kind,
    /// or a registry that has not finished loading.
    pub fn get_texture(&self, texture_name: &str, atlas_name: Option<&str>) -> Option<Texture> {
        let table = self.resources.as_ref()?;
        match atlas_name {
            Some(atlas) => match table.get(atlas)? {
                LoaderResource::Atlas { textures } => textures.get(texture_name).cloned(),
                LoaderResource::Image(_) => None,
            },
            None => match table.get(texture_name)? {
                LoaderResource::Image(texture) => Some(texture.clone()),
                LoaderResource::Atlas { .. } => None,
            },
        }
    }
}
