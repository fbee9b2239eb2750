//! Alpha-safe resizing
//!
//! Resampling premultiplied pixels and converting back corrupts colour in
//! semi-transparent areas: low alpha values leave almost no precision for
//! the colour channels. Here every RGBA channel is resampled on its own,
//! straight (non-premultiplied), with a Lanczos3 kernel.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageBuffer, Rgba, RgbaImage};

use super::error::{Result, SiteError};

/// Kernel used for every resize
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Decoded, resized RGBA pixels ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Target dimensions for scaling `width`x`height` by `scale`, never below 1px
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let scaled = |v: u32| ((v as f64 * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Resize by `scale` without premultiplying alpha
pub fn resize_straight_alpha(img: &DynamicImage, scale: f64) -> DynamicImage {
    let (width, height) = scaled_dimensions(img.width(), img.height(), scale);

    if !img.color().has_alpha() {
        return img.resize_exact(width, height, RESIZE_FILTER);
    }

    let rgba = img.to_rgba8();
    let channels: Vec<GrayImage> = (0..4)
        .map(|c| {
            let plane = GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                image::Luma([rgba.get_pixel(x, y).0[c]])
            });
            imageops::resize(&plane, width, height, RESIZE_FILTER)
        })
        .collect();

    let resized: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([
            channels[0].get_pixel(x, y).0[0],
            channels[1].get_pixel(x, y).0[0],
            channels[2].get_pixel(x, y).0[0],
            channels[3].get_pixel(x, y).0[0],
        ])
    });

    DynamicImage::ImageRgba8(resized)
}

/// Resize to `target_width`, keeping the aspect ratio
pub fn resize_to_width(img: &DynamicImage, target_width: u32) -> DynamicImage {
    let scale = target_width as f64 / img.width().max(1) as f64;
    resize_straight_alpha(img, scale)
}

/// Load `path` and produce a thumbnail `width` pixels wide
pub fn thumbnail(path: &Path, width: u32) -> Result<Thumbnail> {
    let img = image::open(path).map_err(|source| SiteError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let resized = resize_to_width(&img, width).to_rgba8();
    Ok(Thumbnail {
        width: resized.width(),
        height: resized.height(),
        pixels: resized.into_raw(),
    })
}
