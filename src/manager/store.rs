use std::collections::HashMap;

use crate::{
    foundation::error::{RasterError, RasterResult},
    model::ImageGrid,
};

/// Name -> image map. Inserting under an existing name replaces it.
#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, ImageGrid>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> RasterResult<&ImageGrid> {
        self.images
            .get(name)
            .ok_or_else(|| RasterError::image_not_found(name))
    }

    /// Store `grid` under `name`, returning the image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, grid: ImageGrid) -> Option<ImageGrid> {
        self.images.insert(name.into(), grid)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Stored names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.images.keys().cloned().collect();
        names.sort();
        names
    }
}
