//! Command-line arguments and viewer configuration

use std::path::PathBuf;

use clap::Parser;

use crate::state::gesture::SWIPE_THRESHOLD;
use crate::state::viewport::DESKTOP_BREAKPOINT;

/// Width of generated filmstrip thumbnails
pub const THUMBNAIL_WIDTH: u32 = 160;
/// Initial window size
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 860.0;

#[derive(Parser, Debug)]
#[command(name = "portfolio-viewer")]
#[command(author, version, about = "Preview a static-site portfolio with its carousels and lightbox")]
pub struct Cli {
    /// Site source directory (with portfolio.json or a portfolio/ folder)
    #[arg(value_name = "SITE_DIR")]
    pub site: Option<PathBuf>,

    /// Viewport width from which the desktop layout applies
    #[arg(long, default_value_t = DESKTOP_BREAKPOINT)]
    pub breakpoint: f32,

    /// Minimum horizontal travel for a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Width of filmstrip thumbnails
    #[arg(long, default_value_t = THUMBNAIL_WIDTH)]
    pub thumbnail_width: u32,

    /// Print the description of one site image and exit
    #[arg(long, value_name = "IMAGE")]
    pub describe: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub site: Option<PathBuf>,
    pub breakpoint: f32,
    pub swipe_threshold: f32,
    pub thumbnail_width: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            site: None,
            breakpoint: DESKTOP_BREAKPOINT,
            swipe_threshold: SWIPE_THRESHOLD,
            thumbnail_width: THUMBNAIL_WIDTH,
        }
    }
}

impl From<&Cli> for ViewerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            site: cli.site.clone(),
            breakpoint: cli.breakpoint,
            swipe_threshold: cli.swipe_threshold,
            thumbnail_width: cli.thumbnail_width.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let cli = Cli::parse_from(["portfolio-viewer"]);
        assert_eq!(ViewerConfig::from(&cli), ViewerConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "portfolio-viewer",
            "./site",
            "--breakpoint",
            "768",
            "--thumbnail-width",
            "0",
        ]);
        let config = ViewerConfig::from(&cli);
        assert_eq!(config.site, Some(PathBuf::from("./site")));
        assert_eq!(config.breakpoint, 768.0);
        assert_eq!(config.thumbnail_width, 1);
    }

    #[test]
    fn test_describe_flag() {
        let cli = Cli::parse_from(["portfolio-viewer", "--describe", "/img/a-b.jpg"]);
        assert_eq!(cli.describe.as_deref(), Some("/img/a-b.jpg"));
        assert_eq!(cli.site, None);
    }
}
