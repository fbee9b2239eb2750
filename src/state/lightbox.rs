//! Shared lightbox overlay
//!
//! One instance per page, created lazily on the first open and reused by
//! every entry afterwards. Each `open` replaces the whole session: the
//! image list, the index and the entry that should follow navigation.

use super::data::{EntryId, ImageDescriptor};

/// Parts of the overlay that react to clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    CloseButton,
    /// The content container itself, not one of its children
    Content,
    Image,
    Prev,
    Next,
    Dot(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Index change to forward to the entry that opened the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub origin: EntryId,
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    created: bool,
    active: bool,
    images: Vec<ImageDescriptor>,
    index: usize,
    origin: Option<EntryId>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session. Opening with no images does nothing.
    pub fn open(
        &mut self,
        images: Vec<ImageDescriptor>,
        start: usize,
        origin: Option<EntryId>,
    ) -> Option<IndexChange> {
        if images.is_empty() {
            return None;
        }

        self.created = true;
        self.images = images;
        self.origin = origin;
        self.index = if start < self.images.len() { start } else { 0 };
        self.active = true;

        self.show_image(self.index)
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn show_image(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.images.len() {
            return None;
        }
        self.index = index;
        self.origin.map(|origin| IndexChange { origin, index })
    }

    pub fn next(&mut self) -> Option<IndexChange> {
        let count = self.images.len();
        if count == 0 {
            return None;
        }
        self.show_image((self.index + 1) % count)
    }

    pub fn prev(&mut self) -> Option<IndexChange> {
        let count = self.images.len();
        if count == 0 {
            return None;
        }
        self.show_image((self.index + count - 1) % count)
    }

    pub fn click(&mut self, target: LightboxTarget) -> Option<IndexChange> {
        if !self.active {
            return None;
        }
        match target {
            LightboxTarget::Backdrop | LightboxTarget::CloseButton | LightboxTarget::Content => {
                self.close();
                None
            }
            LightboxTarget::Image => None,
            LightboxTarget::Prev => self.prev(),
            LightboxTarget::Next => self.next(),
            LightboxTarget::Dot(index) => self.show_image(index),
        }
    }

    /// Keys are only handled while the overlay is open
    pub fn key(&mut self, key: NavKey) -> Option<IndexChange> {
        if !self.active {
            return None;
        }
        match key {
            NavKey::Escape => {
                self.close();
                None
            }
            NavKey::ArrowLeft => self.prev(),
            NavKey::ArrowRight => self.next(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the overlay has been built at all yet
    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn origin(&self) -> Option<EntryId> {
        self.origin
    }

    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.index)
    }

    /// Prev/next are shown only for multi-image sessions
    pub fn controls_visible(&self) -> bool {
        self.images.len() > 1
    }

    /// Active flag per dot; no dots at all below two images
    pub fn dot_states(&self) -> Vec<bool> {
        if self.images.len() < 2 {
            return Vec::new();
        }
        (0..self.images.len()).map(|i| i == self.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(count: usize) -> Vec<ImageDescriptor> {
        (0..count)
            .map(|i| ImageDescriptor::new(format!("/img/{}.jpg", i), ""))
            .collect()
    }

    #[test]
    fn test_lazy_creation() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.is_created());
        lightbox.open(images(2), 0, None);
        assert!(lightbox.is_created());
        lightbox.close();
        assert!(lightbox.is_created());
        assert!(!lightbox.is_active());
    }

    #[test]
    fn test_controls_by_image_count() {
        let mut lightbox = Lightbox::new();

        lightbox.open(images(1), 0, None);
        assert!(!lightbox.controls_visible());
        assert!(lightbox.dot_states().is_empty());

        lightbox.open(images(3), 1, None);
        assert!(lightbox.controls_visible());
        assert_eq!(lightbox.dot_states(), vec![false, true, false]);
    }

    #[test]
    fn test_open_empty_is_noop() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.open(Vec::new(), 0, Some(EntryId(0))), None);
        assert!(!lightbox.is_active());
        assert!(!lightbox.is_created());
    }

    #[test]
    fn test_open_reports_start_to_origin() {
        let mut lightbox = Lightbox::new();
        let change = lightbox.open(images(3), 2, Some(EntryId(4)));
        assert_eq!(
            change,
            Some(IndexChange {
                origin: EntryId(4),
                index: 2
            })
        );
    }

    #[test]
    fn test_navigation_notifies_origin() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(3), 2, Some(EntryId(1)));

        let change = lightbox.next();
        assert_eq!(lightbox.index(), 0);
        assert_eq!(change.map(|c| c.index), Some(0));

        let change = lightbox.prev();
        assert_eq!(change.map(|c| c.index), Some(2));
    }

    #[test]
    fn test_without_origin_nothing_is_reported() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(2), 0, None);
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_show_image_bounds() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(2), 1, Some(EntryId(0)));
        assert_eq!(lightbox.show_image(2), None);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_dismissal_targets() {
        for target in [
            LightboxTarget::Backdrop,
            LightboxTarget::CloseButton,
            LightboxTarget::Content,
        ] {
            let mut lightbox = Lightbox::new();
            lightbox.open(images(2), 0, None);
            lightbox.click(target);
            assert!(!lightbox.is_active(), "{:?} should close", target);
        }

        let mut lightbox = Lightbox::new();
        lightbox.open(images(2), 0, None);
        lightbox.click(LightboxTarget::Image);
        assert!(lightbox.is_active());
    }

    #[test]
    fn test_keys_inert_while_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(3), 0, Some(EntryId(0)));
        lightbox.close();

        assert_eq!(lightbox.key(NavKey::ArrowRight), None);
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_keys_while_open() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(3), 0, None);

        lightbox.key(NavKey::ArrowLeft);
        assert_eq!(lightbox.index(), 2);
        lightbox.key(NavKey::ArrowRight);
        assert_eq!(lightbox.index(), 0);
        lightbox.key(NavKey::Escape);
        assert!(!lightbox.is_active());
    }

    #[test]
    fn test_reopen_overwrites_session() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(3), 2, Some(EntryId(0)));
        lightbox.open(images(2), 1, Some(EntryId(5)));

        assert_eq!(lightbox.images().len(), 2);
        assert_eq!(lightbox.origin(), Some(EntryId(5)));
        assert_eq!(lightbox.current(), Some(&images(2)[1]));
    }
}
