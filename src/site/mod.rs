//! Site import
//!
//! This module handles:
//! - Reading the portfolio data a site build embeds (manifest.rs)
//! - Image descriptions from embedded metadata (metadata.rs)
//! - Alpha-safe resizing for thumbnails (resize.rs)

pub mod error;
pub mod manifest;
pub mod metadata;
pub mod resize;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tokio::task;
use tracing::{info, warn};

use crate::state::data::{EntryMarkup, ImageDescriptor};
use error::Result;
use resize::Thumbnail;

/// A loaded site
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub entries: Vec<EntryMarkup>,
    pub loaded_at: DateTime<Utc>,
}

/// Load a site's portfolio entries off the UI thread.
///
/// Discovery may call out to `exiftool` once per image, so it runs on the
/// blocking pool.
pub async fn load_site(root: PathBuf) -> Result<Site> {
    let scan_root = root.clone();
    let entries = task::spawn_blocking(move || manifest::load_entries(&scan_root)).await??;

    info!(
        "📁 Loaded {} portfolio entries from {}",
        entries.len(),
        root.display()
    );

    Ok(Site {
        root,
        entries,
        loaded_at: Utc::now(),
    })
}

/// Build filmstrip thumbnails for `images`, skipping any that fail to load
pub async fn build_thumbnails(
    root: PathBuf,
    images: Vec<ImageDescriptor>,
    width: u32,
) -> Result<Vec<(usize, Thumbnail)>> {
    let thumbnails = task::spawn_blocking(move || {
        images
            .iter()
            .enumerate()
            .filter_map(|(i, image)| {
                let path = metadata::resolve(&root, &image.src);
                match resize::thumbnail(&path, width) {
                    Ok(thumb) => Some((i, thumb)),
                    Err(e) => {
                        warn!("Skipping thumbnail for {}: {}", image.src, e);
                        None
                    }
                }
            })
            .collect()
    })
    .await?;

    Ok(thumbnails)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;

    #[tokio::test]
    async fn test_load_site_without_portfolio() {
        let site = tempfile::tempdir().unwrap();
        let result = load_site(site.path().to_path_buf()).await;
        assert!(matches!(result, Err(error::SiteError::NoPortfolio(_))));
    }

    #[tokio::test]
    async fn test_load_site_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(manifest::MANIFEST_FILE),
            r#"[{"title": "One", "images": [{"src": "/a.jpg"}]}]"#,
        )
        .unwrap();

        let site = load_site(dir.path().to_path_buf()).await.unwrap();
        assert_eq!(site.entries.len(), 1);
        assert_eq!(site.root, dir.path());
    }

    #[tokio::test]
    async fn test_thumbnails_skip_missing_images() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(200, 100, Rgba([255, 0, 0, 255]))
            .save(dir.path().join("ok.png"))
            .unwrap();

        let images = vec![
            ImageDescriptor::new("/missing.png", ""),
            ImageDescriptor::new("/ok.png", ""),
        ];
        let thumbs = build_thumbnails(dir.path().to_path_buf(), images, 50)
            .await
            .unwrap();

        assert_eq!(thumbs.len(), 1);
        assert_eq!(thumbs[0].0, 1);
        assert_eq!((thumbs[0].1.width, thumbs[0].1.height), (50, 25));
    }
}
