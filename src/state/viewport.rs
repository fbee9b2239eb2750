//! Viewport classification
//!
//! Desktop vs mobile is decided from the live window width every time it
//! is asked. Nothing caches the answer: a resize between two events can
//! flip it.

/// Width (in logical pixels) from which the desktop layout applies
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    breakpoint: f32,
}

impl Viewport {
    pub fn new(width: f32, breakpoint: f32) -> Self {
        Self { width, breakpoint }
    }

    /// Viewport with the default 1024 px breakpoint
    pub fn with_width(width: f32) -> Self {
        Self::new(width, DESKTOP_BREAKPOINT)
    }

    pub fn resize(&mut self, width: f32) {
        self.width = width;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_desktop(&self) -> bool {
        self.width >= self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert!(!Viewport::with_width(1023.0).is_desktop());
        assert!(Viewport::with_width(1024.0).is_desktop());
        assert!(Viewport::with_width(1920.0).is_desktop());
    }

    #[test]
    fn test_reclassifies_after_resize() {
        let mut viewport = Viewport::with_width(1280.0);
        assert!(viewport.is_desktop());

        viewport.resize(390.0);
        assert!(!viewport.is_desktop());

        viewport.resize(1100.0);
        assert!(viewport.is_desktop());
    }

    #[test]
    fn test_custom_breakpoint() {
        let viewport = Viewport::new(900.0, 768.0);
        assert!(viewport.is_desktop());
    }
}
