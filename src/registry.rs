// src/registry.rs

//! The named-image registry.
//!
//! A plain label-to-image map. The transformation engine never sees names;
//! only the command layer talks to the registry, and only through `put`,
//! `get` and `exists`. A failed command never reaches `put`, so failures
//! leave prior bindings intact.

use std::collections::HashMap;

use crate::image::Image;
use crate::utils::error::{RasterError, Result};

/// Holds every image the user has loaded or produced, keyed by label.
#[derive(Default, Debug)]
pub struct Registry {
    images: HashMap<String, Image>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Binds `name` to `image`, replacing any previous binding.
    pub fn put(&mut self, name: &str, image: Image) {
        self.images.insert(name.to_string(), image);
    }

    /// Looks up an image by name.
    pub fn get(&self, name: &str) -> Result<&Image> {
        self.images
            .get(name)
            .ok_or_else(|| RasterError::NotFound(name.to_string()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
