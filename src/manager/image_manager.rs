use std::path::Path;

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    codec::{self, ImageFormat},
    foundation::error::RasterResult,
    manager::{
        registry::{Operation, OperationRegistry},
        store::ImageStore,
    },
    model::ImageGrid,
    ops::Histogram,
};

/// Construction options for [`ImageManager`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManagerOpts {
    /// Seed for the mosaic random source; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

/// Orchestration boundary: owns the named image store, the operation registry,
/// and the random source used by mosaic.
#[derive(Debug)]
pub struct ImageManager {
    store: ImageStore,
    registry: OperationRegistry,
    rng: StdRng,
}

impl Default for ImageManager {
    fn default() -> Self {
        Self::new(ManagerOpts::default())
    }
}

impl ImageManager {
    pub fn new(opts: ManagerOpts) -> Self {
        let rng = match opts.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store: ImageStore::new(),
            registry: OperationRegistry::new(),
            rng,
        }
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn get(&self, name: &str) -> RasterResult<&ImageGrid> {
        self.store.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.store.names()
    }

    /// Store `grid` under `name`, replacing any existing image.
    pub fn insert(&mut self, name: &str, grid: ImageGrid) {
        if self.store.insert(name, grid).is_some() {
            tracing::debug!(name, "replaced stored image");
        }
    }

    /// Read and decode the file at `path` (format by extension) into `name`.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, path: &Path, name: &str) -> RasterResult<()> {
        let format = codec::format_for_load(path)?;
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        self.load_bytes(&bytes, format, name)?;
        tracing::info!(path = %path.display(), name, "loaded image");
        Ok(())
    }

    /// Decode already-read bytes into `name`.
    pub fn load_bytes(&mut self, bytes: &[u8], format: ImageFormat, name: &str) -> RasterResult<()> {
        let grid = codec::decode(bytes, format)?;
        tracing::debug!(
            name,
            %format,
            width = grid.width(),
            height = grid.height(),
            "decoded image"
        );
        self.insert(name, grid);
        Ok(())
    }

    /// Encode `name` (format by extension of `path`) and write it out.
    #[tracing::instrument(skip(self))]
    pub fn save(&self, name: &str, path: &Path) -> RasterResult<()> {
        let format = codec::format_for_save(path)?;
        let bytes = self.encode(name, format)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
        tracing::info!(path = %path.display(), name, "saved image");
        Ok(())
    }

    pub fn encode(&self, name: &str, format: ImageFormat) -> RasterResult<Vec<u8>> {
        codec::encode(self.store.get(name)?, format)
    }

    /// Run the registry operation `op` with `args` on `source`, storing the result as `result`.
    ///
    /// `result` may equal `source`; the stored image is replaced.
    #[tracing::instrument(skip(self))]
    pub fn transform(
        &mut self,
        op: &str,
        args: &[&str],
        source: &str,
        result: &str,
    ) -> RasterResult<()> {
        let operation = self.registry.build(op, args)?;
        self.apply(&operation, source, result)
    }

    /// Run an already-built operation on `source`, storing the result as `result`.
    pub fn apply(&mut self, operation: &Operation, source: &str, result: &str) -> RasterResult<()> {
        let out = operation.apply(self.store.get(source)?, &mut self.rng)?;
        tracing::debug!(?operation, source, result, "operation applied");
        self.insert(result, out);
        Ok(())
    }

    pub fn histogram(&self, name: &str) -> RasterResult<Histogram> {
        Ok(Histogram::of(self.store.get(name)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/manager/image_manager.rs"]
mod tests;
