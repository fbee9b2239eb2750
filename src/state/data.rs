//! Shared data structures for portfolio state
//!
//! These types describe what a site build embeds for each portfolio
//! entry. They flow from the site import layer into the state machines
//! and from there into the UI.

use serde::{Deserialize, Serialize};

/// Position of a portfolio entry on the page (its arena index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// One image of a portfolio entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageDescriptor {
    /// Site-relative (or absolute) source URL
    pub src: String,
    /// Responsive source set, e.g. `"a-400.jpg 400w, a-800.jpg 800w"`
    #[serde(default)]
    pub srcset: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
}

/// A single `srcset` candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcsetCandidate<'a> {
    pub url: &'a str,
    /// Width descriptor in pixels (`400w`), if present
    pub width: Option<u32>,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            srcset: String::new(),
            alt: alt.into(),
        }
    }

    pub fn with_srcset(mut self, srcset: impl Into<String>) -> Self {
        self.srcset = srcset.into();
        self
    }

    /// Parse the `srcset` attribute into its candidates
    pub fn srcset_candidates(&self) -> Vec<SrcsetCandidate<'_>> {
        self.srcset
            .split(',')
            .filter_map(|candidate| {
                let mut parts = candidate.split_whitespace();
                let url = parts.next()?;
                let width = parts
                    .next()
                    .and_then(|descriptor| descriptor.strip_suffix('w'))
                    .and_then(|w| w.parse().ok());
                Some(SrcsetCandidate { url, width })
            })
            .collect()
    }

    /// Pick the source best suited to a surface `target_width` pixels wide.
    ///
    /// The smallest width-described candidate that still covers the target
    /// wins. If none is wide enough the widest one is used, and without any
    /// width descriptors the plain `src` is returned.
    pub fn best_source(&self, target_width: u32) -> &str {
        let candidates: Vec<(u32, &str)> = self
            .srcset_candidates()
            .into_iter()
            .filter_map(|c| c.width.map(|w| (w, c.url)))
            .collect();

        let covering = candidates
            .iter()
            .filter(|(w, _)| *w >= target_width)
            .min_by_key(|(w, _)| *w);

        match covering.or_else(|| candidates.iter().max_by_key(|(w, _)| *w)) {
            Some(&(_, url)) => url,
            None => &self.src,
        }
    }
}

/// How an image fills its display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Cropped to fill the surface
    Cover,
    /// Scaled to fit without cropping
    Contain,
}

/// Which breakpoint layout a display surface belongs to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Mobile,
    Desktop,
}

/// Everything the page embeds for one portfolio entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryMarkup {
    pub title: String,
    /// Expandable body text; `None` when the entry has no content region
    pub body: Option<String>,
    /// Whether a divider element accompanies the content
    pub divider: bool,
    /// Whether the desktop layout carries a filmstrip
    pub filmstrip: bool,
    /// Display surfaces with the pre-rendered (cropped) image each one ships with
    pub surfaces: Vec<(SurfaceKind, Option<ImageDescriptor>)>,
    /// Carousel images
    pub images: Vec<ImageDescriptor>,
}
