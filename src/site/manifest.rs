//! Portfolio data embedded by the site build
//!
//! Two sources, tried in order:
//! - `portfolio.json` at the site root, one object per entry
//! - otherwise every subdirectory of `portfolio/` becomes an entry made of
//!   the images inside it
//!
//! An entry's `images` may be an inline array or a JSON string holding one
//! (the serialized-attribute form). A malformed list only costs that entry
//! its carousel images.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{Result, SiteError};
use super::metadata::{filename_description, image_description};
use crate::state::data::{EntryMarkup, ImageDescriptor, SurfaceKind};

pub const MANIFEST_FILE: &str = "portfolio.json";
pub const PORTFOLIO_DIR: &str = "portfolio";
/// Optional body text file inside a discovered entry directory
pub const BODY_FILE: &str = "about.txt";

/// Image formats the viewer can decode
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

fn default_true() -> bool {
    true
}

fn default_surfaces() -> Vec<SurfaceKind> {
    vec![SurfaceKind::Mobile, SurfaceKind::Desktop]
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default = "default_true")]
    divider: bool,
    #[serde(default = "default_true")]
    filmstrip: bool,
    /// Pre-rendered cropped image every surface ships with
    #[serde(default)]
    cover: Option<ImageDescriptor>,
    #[serde(default = "default_surfaces")]
    surfaces: Vec<SurfaceKind>,
    #[serde(default)]
    images: serde_json::Value,
}

impl ManifestEntry {
    fn into_markup(self) -> EntryMarkup {
        let images = parse_image_list(&self.images, &self.title);
        let surfaces = self
            .surfaces
            .into_iter()
            .map(|kind| (kind, self.cover.clone()))
            .collect();

        EntryMarkup {
            title: self.title,
            body: self.body,
            divider: self.divider,
            filmstrip: self.filmstrip,
            surfaces,
            images,
        }
    }
}

/// Parse an entry's embedded image list, degrading to no images on error
pub fn parse_image_list(value: &serde_json::Value, entry: &str) -> Vec<ImageDescriptor> {
    let parsed = match value {
        serde_json::Value::Null => return Vec::new(),
        serde_json::Value::String(serialized) => {
            serde_json::from_str::<Vec<ImageDescriptor>>(serialized)
        }
        other => serde_json::from_value::<Vec<ImageDescriptor>>(other.clone()),
    };

    match parsed {
        Ok(images) => images.into_iter().filter(|i| !i.src.is_empty()).collect(),
        Err(e) => {
            warn!("Malformed image list for entry '{}': {}", entry, e);
            Vec::new()
        }
    }
}

/// Parse a whole `portfolio.json` document
pub fn parse_manifest(json: &str) -> Result<Vec<EntryMarkup>> {
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(json).map_err(|source| SiteError::Json {
            context: MANIFEST_FILE.to_string(),
            source,
        })?;
    Ok(entries.into_iter().map(ManifestEntry::into_markup).collect())
}

/// Read `portfolio.json`, if the site has one
pub fn load_manifest(site_root: &Path) -> Result<Option<Vec<EntryMarkup>>> {
    let path = site_root.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).map_err(|source| SiteError::Io {
        path: path.clone(),
        source,
    })?;
    parse_manifest(&json).map(Some)
}

/// Build entries from the `portfolio/` directory tree
pub fn discover_entries(site_root: &Path) -> Result<Vec<EntryMarkup>> {
    let portfolio = site_root.join(PORTFOLIO_DIR);
    if !portfolio.is_dir() {
        return Err(SiteError::NoPortfolio(site_root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for dir in WalkDir::new(&portfolio)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
    {
        let images = discover_images(site_root, dir.path());
        debug!("Discovered {} images in {}", images.len(), dir.path().display());

        let body_path = dir.path().join(BODY_FILE);
        let body = fs::read_to_string(&body_path).ok();

        let cover = images.first().cloned();
        entries.push(EntryMarkup {
            title: filename_description(&dir.file_name().to_string_lossy()),
            body,
            divider: true,
            filmstrip: true,
            surfaces: default_surfaces()
                .into_iter()
                .map(|kind| (kind, cover.clone()))
                .collect(),
            images,
        });
    }

    Ok(entries)
}

fn discover_images(site_root: &Path, dir: &Path) -> Vec<ImageDescriptor> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    IMAGE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .filter_map(|e| {
            let relative = e.path().strip_prefix(site_root).ok()?;
            let src = format!(
                "/{}",
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            );
            let alt = image_description(site_root, &src);
            Some(ImageDescriptor::new(src, alt))
        })
        .collect()
}

/// Manifest entries if present, directory discovery otherwise
pub fn load_entries(site_root: &Path) -> Result<Vec<EntryMarkup>> {
    match load_manifest(site_root)? {
        Some(entries) => Ok(entries),
        None => discover_entries(site_root),
    }
}
