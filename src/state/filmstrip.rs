//! Filmstrip scroll controls
//!
//! The desktop filmstrip scrolls horizontally; its prev/next buttons dim
//! and stop accepting clicks at either end of the strip.

/// Space between two thumbnails
pub const FILMSTRIP_GAP: f32 = 8.0;
/// Thumbnail width when none is configured
pub const DEFAULT_THUMB_WIDTH: f32 = 100.0;

const DIMMED_OPACITY: f32 = 0.3;
const NORMAL_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavButton {
    pub opacity: f32,
    pub enabled: bool,
}

impl NavButton {
    fn at_limit(limit: bool) -> Self {
        if limit {
            Self {
                opacity: DIMMED_OPACITY,
                enabled: false,
            }
        } else {
            Self {
                opacity: NORMAL_OPACITY,
                enabled: true,
            }
        }
    }
}

/// Horizontal space the entry takes around the strip: its padding, the
/// two nav buttons and the row spacing between them
pub const FILMSTRIP_CHROME: f32 = 160.0;

/// Scroll window width for a viewport `viewport_width` wide
pub fn visible_width(viewport_width: f32) -> f32 {
    (viewport_width - FILMSTRIP_CHROME).max(0.0)
}

/// Laid-out width of `count` thumbnails separated by the strip gap
pub fn content_width(count: usize, thumb_width: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * thumb_width + (count - 1) as f32 * FILMSTRIP_GAP
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Back,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilmstripScroll {
    offset: f32,
    visible: f32,
    content: f32,
    thumb_width: Option<f32>,
    measured: bool,
}

impl FilmstripScroll {
    pub fn new(thumb_width: Option<f32>) -> Self {
        Self {
            thumb_width,
            ..Self::default()
        }
    }

    pub fn thumb_width(&self) -> f32 {
        self.thumb_width.unwrap_or(DEFAULT_THUMB_WIDTH)
    }

    /// Width of the strip's scroll window
    pub fn visible(&self) -> f32 {
        self.visible
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Lay the strip out for `count` thumbnails in a viewport
    /// `viewport_width` wide, keeping the offset within the new extents
    pub fn fit(&mut self, count: usize, viewport_width: f32) {
        self.visible = visible_width(viewport_width);
        self.content = content_width(count, self.thumb_width());
        self.offset = self
            .offset
            .clamp(0.0, (self.content - self.visible).max(0.0));
        self.measured = true;
    }

    /// Record the offset the strip reports after scrolling
    pub fn scrolled(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    pub fn at_start(&self) -> bool {
        self.offset <= 0.0
    }

    pub fn at_end(&self) -> bool {
        // Unmeasured strips are assumed to overflow
        self.measured && self.offset + self.visible >= self.content - 1.0
    }

    pub fn prev_button(&self) -> NavButton {
        NavButton::at_limit(self.at_start())
    }

    pub fn next_button(&self) -> NavButton {
        NavButton::at_limit(self.at_end())
    }

    /// Horizontal distance one nav click scrolls
    pub fn scroll_delta(&self, direction: ScrollDirection) -> f32 {
        let step = self.thumb_width.unwrap_or(DEFAULT_THUMB_WIDTH) + FILMSTRIP_GAP;
        match direction {
            ScrollDirection::Back => -step,
            ScrollDirection::Forward => step,
        }
    }
}
