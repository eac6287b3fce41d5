//! Asset sources - where templates come from.
//!
//! The storage medium behind an asset name is the host's concern: a
//! bundle on disk, an archive, a download cache. The core only needs
//! the `AssetSource` seam. `MemorySource` ships in-crate as the
//! registry-backed implementation used by tests and by hosts that
//! preload their models.

use std::sync::Arc;

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::template::{AssetName, MeshData, Template};
use crate::core::error::LoadError;

/// Asynchronous lookup of a named asset.
///
/// `load` must not block the caller; resolution happens on the
/// runtime. Each call performs fresh work - the core adds no caching
/// layer on top.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Load the asset registered under `name`.
    async fn load(&self, name: &AssetName) -> Result<Template, LoadError>;
}

/// In-memory asset source.
///
/// Meshes are registered up front; `load` resolves immediately with a
/// template sharing the registered payload.
///
/// ## Example
///
/// ```
/// use memory_grid::assets::{AssetName, Bounds, MemorySource, MeshData};
///
/// let mut source = MemorySource::new();
/// source.register("01", MeshData::new(vec![0xAB], Bounds::unit()));
///
/// assert!(source.contains(&AssetName::new("01")));
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    meshes: FxHashMap<AssetName, Arc<MeshData>>,
}

impl MemorySource {
    /// Create a new empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh under a name.
    ///
    /// Panics if the name is already registered.
    pub fn register(&mut self, name: impl Into<AssetName>, mesh: MeshData) {
        let name = name.into();
        if self.meshes.contains_key(&name) {
            panic!("asset {name:?} already registered");
        }
        self.meshes.insert(name, Arc::new(mesh));
    }

    /// Check whether a name is registered.
    #[must_use]
    pub fn contains(&self, name: &AssetName) -> bool {
        self.meshes.contains_key(name)
    }

    /// Number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Check if the source is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[async_trait]
impl AssetSource for MemorySource {
    async fn load(&self, name: &AssetName) -> Result<Template, LoadError> {
        match self.meshes.get(name) {
            Some(mesh) => Ok(Template::new(name.clone(), Arc::clone(mesh))),
            None => Err(LoadError::NotFound { name: name.clone() }),
        }
    }
}
