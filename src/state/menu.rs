//! Mobile navigation drawer

use super::viewport::Viewport;

pub const OPEN_LABEL: &str = "Open navigation menu";
pub const CLOSE_LABEL: &str = "Close navigation menu";

/// Slide-up navigation drawer used below the desktop breakpoint.
/// Always starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, viewport: &Viewport) {
        if self.open {
            self.close();
        } else {
            self.open(viewport);
        }
    }

    /// The drawer does not exist on desktop
    pub fn open(&mut self, viewport: &Viewport) {
        if viewport.is_desktop() {
            return;
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn escape(&mut self) {
        if self.open {
            self.close();
        }
    }

    /// Growing into the desktop layout closes the drawer
    pub fn resized(&mut self, viewport: &Viewport) {
        if viewport.is_desktop() {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// State of the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open {
            CLOSE_LABEL
        } else {
            OPEN_LABEL
        }
    }
}
