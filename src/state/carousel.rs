//! Inline carousel for one portfolio entry
//!
//! `{index, expanded}` is the single source of truth. Display surfaces,
//! indicator dots, filmstrip highlight, fit mode and the expand panel are
//! all derived from it when the UI asks.

use super::data::{EntryMarkup, FitMode, ImageDescriptor, SurfaceKind};
use super::filmstrip::FilmstripScroll;
use super::panel::ExpandPanel;
use super::swap::{SwapState, SwapToken};
use super::viewport::Viewport;

/// What the display surfaces of an entry render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    /// The pre-rendered (cropped) image each surface shipped with
    Original,
    /// A carousel image
    Image(usize),
}

/// A place on the page where the entry's active image is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySurface {
    pub kind: SurfaceKind,
    original: Option<ImageDescriptor>,
}

impl DisplaySurface {
    pub fn new(kind: SurfaceKind, original: Option<ImageDescriptor>) -> Self {
        Self { kind, original }
    }

    pub fn original(&self) -> Option<&ImageDescriptor> {
        self.original.as_ref()
    }
}

/// Request to load the sources for a newly shown carousel image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSwap {
    pub token: SwapToken,
    pub index: usize,
}

/// Arguments for opening the lightbox from an entry
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxRequest {
    pub images: Vec<ImageDescriptor>,
    pub start: usize,
    /// Whether lightbox navigation should drive this entry's carousel
    pub follow: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Ignored,
    Toggled(Option<ImageSwap>),
    OpenLightbox(LightboxRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone)]
pub struct PortfolioEntry {
    title: String,
    body: Option<String>,
    images: Vec<ImageDescriptor>,
    surfaces: Vec<DisplaySurface>,
    index: usize,
    expanded: bool,
    shown: Shown,
    panel: ExpandPanel,
    swap: SwapState<Shown>,
    filmstrip: Option<FilmstripScroll>,
}

impl PortfolioEntry {
    pub fn from_markup(markup: EntryMarkup, thumb_width: Option<f32>) -> Self {
        let surfaces = markup
            .surfaces
            .into_iter()
            .map(|(kind, original)| DisplaySurface::new(kind, original))
            .collect();

        // Surfaces start out on whatever the page shipped with
        let mut swap = SwapState::default();
        swap.replace(Shown::Original);

        let filmstrip = (markup.filmstrip && markup.images.len() > 1)
            .then(|| FilmstripScroll::new(thumb_width));

        Self {
            title: markup.title,
            panel: ExpandPanel::new(markup.body.is_some(), markup.divider),
            body: markup.body,
            images: markup.images,
            surfaces,
            index: 0,
            expanded: false,
            shown: Shown::Original,
            swap,
            filmstrip,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn surfaces(&self) -> &[DisplaySurface] {
        &self.surfaces
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn panel(&self) -> &ExpandPanel {
        &self.panel
    }

    pub fn filmstrip(&self) -> Option<&FilmstripScroll> {
        self.filmstrip.as_ref()
    }

    pub fn filmstrip_mut(&mut self) -> Option<&mut FilmstripScroll> {
        self.filmstrip.as_mut()
    }

    /// Entries without any display surface get no behaviour at all
    pub fn is_inert(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Indicator dots exist only for multi-image carousels
    pub fn has_indicators(&self) -> bool {
        !self.is_inert() && self.images.len() > 1
    }

    pub fn indicators_visible(&self) -> bool {
        self.has_indicators() && self.expanded
    }

    /// Active flag per indicator dot (empty when there are no dots)
    pub fn indicator_states(&self) -> Vec<bool> {
        if !self.has_indicators() {
            return Vec::new();
        }
        (0..self.images.len()).map(|i| i == self.index).collect()
    }

    pub fn fit_mode(&self, viewport: &Viewport) -> FitMode {
        if viewport.is_desktop() || self.expanded {
            FitMode::Contain
        } else {
            FitMode::Cover
        }
    }

    /// Surface matching the current breakpoint
    pub fn active_surface(&self, viewport: &Viewport) -> Option<usize> {
        let wanted = if viewport.is_desktop() {
            SurfaceKind::Desktop
        } else {
            SurfaceKind::Mobile
        };
        self.surfaces
            .iter()
            .position(|s| s.kind == wanted)
            .or_else(|| (!self.surfaces.is_empty()).then_some(0))
    }

    /// What the state says the surfaces show
    pub fn shown(&self) -> Shown {
        self.shown
    }

    /// What is actually on screen while a swap may still be loading
    pub fn displayed(&self) -> Shown {
        self.swap.settled().unwrap_or(self.shown)
    }

    pub fn is_swapping(&self) -> bool {
        self.swap.is_pending()
    }

    pub fn surface_source(&self, surface: usize) -> Option<&ImageDescriptor> {
        self.source_for(surface, self.shown)
    }

    pub fn displayed_source(&self, surface: usize) -> Option<&ImageDescriptor> {
        self.source_for(surface, self.displayed())
    }

    pub fn source_for(&self, surface: usize, shown: Shown) -> Option<&ImageDescriptor> {
        let surface = self.surfaces.get(surface)?;
        match shown {
            Shown::Original => surface.original().or_else(|| self.images.first()),
            Shown::Image(index) => self.images.get(index),
        }
    }

    /// Show carousel image `index` on every surface.
    ///
    /// Out-of-range indices are ignored. The returned swap must be settled
    /// once the host has loaded the new source.
    pub fn show_image(&mut self, index: usize) -> Option<ImageSwap> {
        if self.is_inert() || index >= self.images.len() {
            return None;
        }

        self.index = index;
        self.shown = Shown::Image(index);
        let token = self.swap.begin(self.shown);

        Some(ImageSwap { token, index })
    }

    pub fn next(&mut self) -> Option<ImageSwap> {
        let count = self.images.len();
        if count == 0 {
            return None;
        }
        self.show_image((self.index + 1) % count)
    }

    pub fn prev(&mut self) -> Option<ImageSwap> {
        let count = self.images.len();
        if count == 0 {
            return None;
        }
        self.show_image((self.index + count - 1) % count)
    }

    pub fn toggle_expand(&mut self) -> Option<ImageSwap> {
        if self.is_inert() {
            return None;
        }

        self.expanded = !self.expanded;
        self.panel.apply(self.expanded);

        if self.expanded {
            // Swap the cropped original for the uncropped carousel image
            self.show_image(self.index)
        } else {
            self.shown = Shown::Original;
            self.swap.replace(Shown::Original);
            self.index = 0;
            None
        }
    }

    /// Click on a display surface (not on its controls)
    pub fn click(&mut self, viewport: &Viewport) -> ClickOutcome {
        if self.is_inert() {
            return ClickOutcome::Ignored;
        }

        if !viewport.is_desktop() {
            return ClickOutcome::Toggled(self.toggle_expand());
        }

        if self.images.len() > 1 {
            return ClickOutcome::OpenLightbox(LightboxRequest {
                images: self.images.clone(),
                start: self.index,
                follow: true,
            });
        }

        // Single image: open whatever the surface is rendering right now
        let single = self
            .active_surface(viewport)
            .and_then(|surface| self.displayed_source(surface))
            .cloned();

        match single {
            Some(image) => ClickOutcome::OpenLightbox(LightboxRequest {
                images: vec![image],
                start: 0,
                follow: false,
            }),
            None => ClickOutcome::Ignored,
        }
    }

    /// Filmstrip thumbnails navigate on desktop only
    pub fn select_thumbnail(&mut self, index: usize, viewport: &Viewport) -> Option<ImageSwap> {
        if self.filmstrip.is_none() || !viewport.is_desktop() {
            return None;
        }
        self.show_image(index)
    }

    /// Swipes navigate only while expanded
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<ImageSwap> {
        if !self.expanded || self.images.len() < 2 {
            return None;
        }
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }

    pub fn settle_swap(&mut self, token: SwapToken) -> bool {
        self.swap.settle(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::panel::{ContentHeight, DividerPosition, READ_LESS, READ_MORE};

    fn image(n: usize) -> ImageDescriptor {
        ImageDescriptor::new(format!("/img/{}.jpg", n), format!("Image {}", n))
    }

    fn cover(kind: &str) -> ImageDescriptor {
        ImageDescriptor::new(format!("/img/cover-{}.jpg", kind), "Cover")
    }

    fn entry(count: usize) -> PortfolioEntry {
        PortfolioEntry::from_markup(
            EntryMarkup {
                title: "Entry".to_string(),
                body: Some("Body".to_string()),
                divider: true,
                filmstrip: true,
                surfaces: vec![
                    (SurfaceKind::Mobile, Some(cover("mobile"))),
                    (SurfaceKind::Desktop, Some(cover("desktop"))),
                ],
                images: (0..count).map(image).collect(),
            },
            None,
        )
    }

    fn desktop() -> Viewport {
        Viewport::with_width(1440.0)
    }

    fn mobile() -> Viewport {
        Viewport::with_width(390.0)
    }

    #[test]
    fn test_initial_state_shows_originals() {
        let entry = entry(3);
        assert_eq!(entry.index(), 0);
        assert!(!entry.is_expanded());
        assert_eq!(entry.surface_source(0), Some(&cover("mobile")));
        assert_eq!(entry.surface_source(1), Some(&cover("desktop")));
        assert!(!entry.is_swapping());
    }

    #[test]
    fn test_show_image_updates_every_surface() {
        let mut entry = entry(4);
        for i in 0..4 {
            assert!(entry.show_image(i).is_some());
            assert_eq!(entry.index(), i);
            for surface in 0..entry.surfaces().len() {
                assert_eq!(entry.surface_source(surface), Some(&image(i)));
            }
            let dots = entry.indicator_states();
            assert_eq!(dots.iter().filter(|active| **active).count(), 1);
            assert!(dots[i]);
        }
    }

    #[test]
    fn test_show_image_out_of_range_is_ignored() {
        let mut entry = entry(3);
        entry.show_image(1);
        let before = entry.clone();

        assert_eq!(entry.show_image(5), None);
        assert_eq!(entry.index(), 1);
        assert_eq!(entry.shown(), before.shown());
        assert_eq!(entry.is_swapping(), before.is_swapping());
    }

    #[test]
    fn test_next_wraps() {
        let mut entry = entry(3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            entry.next();
            seen.push(entry.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for count in 1..6 {
            for start in 0..count {
                let mut entry = entry(count);
                entry.show_image(start);
                entry.next();
                entry.prev();
                assert_eq!(entry.index(), start, "count {} start {}", count, start);
            }
        }
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut entry = entry(3);
        entry.prev();
        assert_eq!(entry.index(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_flags() {
        let viewport = mobile();
        let mut entry = entry(3);
        let before = (
            entry.fit_mode(&viewport),
            entry.panel().clone(),
            entry.indicators_visible(),
            entry.surface_source(0).cloned(),
        );

        entry.toggle_expand();
        assert_eq!(entry.fit_mode(&viewport), FitMode::Contain);
        assert!(entry.indicators_visible());
        assert_eq!(entry.panel().content_height(), Some(ContentHeight::Natural));
        assert_eq!(entry.panel().divider_position(), Some(DividerPosition::AfterContent));
        assert_eq!(entry.panel().label(), READ_LESS);

        entry.toggle_expand();
        let after = (
            entry.fit_mode(&viewport),
            entry.panel().clone(),
            entry.indicators_visible(),
            entry.surface_source(0).cloned(),
        );
        assert_eq!(before, after);
        assert_eq!(entry.panel().label(), READ_MORE);
    }

    #[test]
    fn test_expand_shows_carousel_image_and_collapse_resets() {
        let mut entry = entry(3);
        entry.toggle_expand();
        assert_eq!(entry.surface_source(0), Some(&image(0)));

        entry.next();
        entry.next();
        assert_eq!(entry.index(), 2);

        assert_eq!(entry.toggle_expand(), None);
        assert_eq!(entry.index(), 0);
        assert_eq!(entry.surface_source(0), Some(&cover("mobile")));
        // Collapse is immediate; nothing is left loading
        assert!(!entry.is_swapping());
        assert_eq!(entry.displayed(), Shown::Original);
    }

    #[test]
    fn test_collapse_without_original_falls_back_to_first_image() {
        let mut entry = PortfolioEntry::from_markup(
            EntryMarkup {
                title: "Bare".to_string(),
                surfaces: vec![(SurfaceKind::Mobile, None)],
                images: (0..2).map(image).collect(),
                ..EntryMarkup::default()
            },
            None,
        );
        entry.toggle_expand();
        entry.next();
        entry.toggle_expand();
        assert_eq!(entry.surface_source(0), Some(&image(0)));
    }

    #[test]
    fn test_desktop_click_opens_lightbox_at_current_index() {
        let mut entry = entry(3);
        entry.show_image(2);

        match entry.click(&desktop()) {
            ClickOutcome::OpenLightbox(request) => {
                assert_eq!(request.images.len(), 3);
                assert_eq!(request.start, 2);
                assert!(request.follow);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(!entry.is_expanded());
    }

    #[test]
    fn test_mobile_click_toggles() {
        let mut entry = entry(3);
        assert!(matches!(entry.click(&mobile()), ClickOutcome::Toggled(Some(_))));
        assert!(entry.is_expanded());
        assert!(matches!(entry.click(&mobile()), ClickOutcome::Toggled(None)));
        assert!(!entry.is_expanded());
    }

    #[test]
    fn test_click_follows_live_viewport() {
        let mut entry = entry(3);
        let mut viewport = desktop();
        assert!(matches!(entry.click(&viewport), ClickOutcome::OpenLightbox(_)));

        viewport.resize(600.0);
        assert!(matches!(entry.click(&viewport), ClickOutcome::Toggled(_)));
    }

    #[test]
    fn test_single_image_entry() {
        let mut single = PortfolioEntry::from_markup(
            EntryMarkup {
                title: "Single".to_string(),
                surfaces: vec![(SurfaceKind::Mobile, None), (SurfaceKind::Desktop, None)],
                images: vec![image(7)],
                filmstrip: true,
                ..EntryMarkup::default()
            },
            None,
        );
        assert!(!single.has_indicators());
        assert!(single.filmstrip().is_none());

        match single.click(&desktop()) {
            ClickOutcome::OpenLightbox(request) => {
                assert_eq!(request.images, vec![image(7)]);
                assert_eq!(request.start, 0);
                assert!(!request.follow);
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        single.click(&mobile());
        assert!(single.is_expanded());
        assert!(single.indicator_states().is_empty());
        assert!(!single.indicators_visible());
    }

    #[test]
    fn test_zero_images_still_toggles() {
        let mut entry = PortfolioEntry::from_markup(
            EntryMarkup {
                title: "Text only".to_string(),
                body: Some("Body".to_string()),
                surfaces: vec![(SurfaceKind::Mobile, Some(cover("mobile")))],
                ..EntryMarkup::default()
            },
            None,
        );
        assert_eq!(entry.next(), None);
        assert_eq!(entry.toggle_expand(), None);
        assert!(entry.is_expanded());
        assert_eq!(entry.surface_source(0), Some(&cover("mobile")));
    }

    #[test]
    fn test_entry_without_surfaces_is_inert() {
        let mut entry = PortfolioEntry::from_markup(
            EntryMarkup {
                title: "Inert".to_string(),
                images: (0..3).map(image).collect(),
                ..EntryMarkup::default()
            },
            None,
        );
        assert!(entry.is_inert());
        assert_eq!(entry.show_image(1), None);
        assert_eq!(entry.toggle_expand(), None);
        assert!(!entry.is_expanded());
        assert_eq!(entry.click(&desktop()), ClickOutcome::Ignored);
    }

    #[test]
    fn test_fit_mode() {
        let mut entry = entry(2);
        assert_eq!(entry.fit_mode(&mobile()), FitMode::Cover);
        assert_eq!(entry.fit_mode(&desktop()), FitMode::Contain);
        entry.toggle_expand();
        assert_eq!(entry.fit_mode(&mobile()), FitMode::Contain);
    }

    #[test]
    fn test_active_surface_by_breakpoint() {
        let entry = entry(2);
        assert_eq!(entry.active_surface(&mobile()), Some(0));
        assert_eq!(entry.active_surface(&desktop()), Some(1));

        let mobile_only = PortfolioEntry::from_markup(
            EntryMarkup {
                surfaces: vec![(SurfaceKind::Mobile, None)],
                ..EntryMarkup::default()
            },
            None,
        );
        assert_eq!(mobile_only.active_surface(&desktop()), Some(0));
    }

    #[test]
    fn test_thumbnails_only_on_desktop() {
        let mut entry = entry(3);
        assert_eq!(entry.select_thumbnail(2, &mobile()), None);
        assert!(entry.select_thumbnail(2, &desktop()).is_some());
        assert_eq!(entry.index(), 2);
    }

    #[test]
    fn test_swipe_requires_expansion() {
        let mut entry = entry(3);
        assert_eq!(entry.swipe(SwipeDirection::Next), None);

        entry.toggle_expand();
        entry.swipe(SwipeDirection::Next);
        assert_eq!(entry.index(), 1);
        entry.swipe(SwipeDirection::Prev);
        entry.swipe(SwipeDirection::Prev);
        assert_eq!(entry.index(), 2);
    }

    #[test]
    fn test_displayed_lags_until_settled() {
        let mut entry = entry(3);
        let first = entry.show_image(1).unwrap();
        let second = entry.show_image(2).unwrap();

        assert_eq!(entry.displayed(), Shown::Original);
        assert!(entry.settle_swap(second.token));
        assert!(!entry.settle_swap(first.token));
        assert_eq!(entry.displayed(), Shown::Image(2));
        assert_eq!(entry.displayed_source(1), Some(&image(2)));
    }
}
