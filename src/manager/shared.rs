use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    foundation::error::{RasterError, RasterResult},
    manager::image_manager::{ImageManager, ManagerOpts},
    model::ImageGrid,
};

/// Cloneable handle for concurrent callers.
///
/// Each call holds the lock across its whole read-transform-store sequence, so two
/// transforms racing on the same result name cannot interleave.
#[derive(Clone, Debug)]
pub struct SharedImageManager {
    inner: Arc<Mutex<ImageManager>>,
}

impl SharedImageManager {
    pub fn new(opts: ManagerOpts) -> Self {
        Self::from_manager(ImageManager::new(opts))
    }

    pub fn from_manager(manager: ImageManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    fn lock(&self) -> RasterResult<MutexGuard<'_, ImageManager>> {
        self.inner
            .lock()
            .map_err(|_| RasterError::Other(anyhow::anyhow!("image manager lock poisoned")))
    }

    pub fn load(&self, path: &Path, name: &str) -> RasterResult<()> {
        self.lock()?.load(path, name)
    }

    pub fn save(&self, name: &str, path: &Path) -> RasterResult<()> {
        self.lock()?.save(name, path)
    }

    pub fn transform(&self, op: &str, args: &[&str], source: &str, result: &str) -> RasterResult<()> {
        self.lock()?.transform(op, args, source, result)
    }

    /// Clone of the image stored under `name`.
    pub fn snapshot(&self, name: &str) -> RasterResult<ImageGrid> {
        self.lock()?.get(name).cloned()
    }

    pub fn insert(&self, name: &str, grid: ImageGrid) -> RasterResult<()> {
        self.lock()?.insert(name, grid);
        Ok(())
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with<T>(&self, f: impl FnOnce(&mut ImageManager) -> T) -> RasterResult<T> {
        Ok(f(&mut *self.lock()?))
    }
}
