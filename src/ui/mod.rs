//! Views over the page state
//!
//! Every view reads from `state::page::Page` and emits `PageEvent`s; the
//! only thing kept here is the decoded image cache.

pub mod entry;
pub mod lightbox;
pub mod nav;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;

use crate::site::metadata::resolve;
use crate::site::resize::Thumbnail;
use crate::state::data::EntryId;

/// Decoded images keyed by site-relative source, plus filmstrip thumbnails
#[derive(Debug, Default)]
pub struct ImageStore {
    root: Option<PathBuf>,
    loaded: HashMap<String, Handle>,
    thumbnails: HashMap<(EntryId, usize), Handle>,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn insert(&mut self, src: String, handle: Handle) {
        self.loaded.insert(src, handle);
    }

    pub fn insert_thumbnail(&mut self, entry: EntryId, index: usize, thumb: Thumbnail) {
        let handle = Handle::from_rgba(thumb.width, thumb.height, thumb.pixels);
        self.thumbnails.insert((entry, index), handle);
    }

    pub fn is_loaded(&self, src: &str) -> bool {
        self.loaded.contains_key(src)
    }

    /// Loaded handle for `src`, or one that decodes straight from disk
    pub fn handle_for(&self, src: &str) -> Handle {
        if let Some(handle) = self.loaded.get(src) {
            return handle.clone();
        }
        match &self.root {
            Some(root) => Handle::from_path(resolve(root, src)),
            None => Handle::from_path(src),
        }
    }

    pub fn thumbnail(&self, entry: EntryId, index: usize) -> Option<Handle> {
        self.thumbnails.get(&(entry, index)).cloned()
    }
}
