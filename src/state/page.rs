//! The page: every portfolio entry plus the shared overlays
//!
//! Entries live in an arena indexed by their position on the page. The
//! lightbox and the mobile drawer are single shared resources owned here.
//! UI events come in as `PageEvent`s; work the host must do afterwards
//! (loading images, scrolling a filmstrip) goes out as `Effect`s.

use tracing::debug;

use super::carousel::{ClickOutcome, ImageSwap, PortfolioEntry, Shown};
use super::data::{EntryId, EntryMarkup};
use super::filmstrip::ScrollDirection;
use super::gesture::{Gesture, GestureTracker};
use super::lightbox::{IndexChange, Lightbox, LightboxTarget, NavKey};
use super::menu::MobileMenu;
use super::swap::SwapToken;
use super::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer position over a display surface
    PointerMoved(f32),
    SurfacePressed(EntryId),
    SurfaceReleased(EntryId),
    DotClicked(EntryId, usize),
    ThumbnailClicked(EntryId, usize),
    ToggleClicked(EntryId),
    /// Horizontal offset a filmstrip reports after scrolling
    FilmstripScrolled(EntryId, f32),
    FilmstripNav(EntryId, ScrollDirection),
    Lightbox(LightboxTarget),
    Key(NavKey),
    MenuToggle,
    MenuClose,
    Resized(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load `sources` then call [`Page::settle`] with the token
    Swap {
        entry: EntryId,
        token: SwapToken,
        sources: Vec<String>,
    },
    ScrollFilmstrip { entry: EntryId, delta: f32 },
}

#[derive(Debug, Clone)]
pub struct Page {
    viewport: Viewport,
    entries: Vec<PortfolioEntry>,
    lightbox: Lightbox,
    menu: MobileMenu,
    gestures: GestureTracker,
    swipe_threshold: f32,
}

impl Page {
    pub fn new(entries: Vec<PortfolioEntry>, viewport: Viewport, swipe_threshold: f32) -> Self {
        let mut page = Self {
            viewport,
            entries,
            lightbox: Lightbox::new(),
            menu: MobileMenu::new(),
            gestures: GestureTracker::new(),
            swipe_threshold,
        };
        page.fit_filmstrips();
        page
    }

    pub fn from_markup(
        markup: Vec<EntryMarkup>,
        viewport: Viewport,
        swipe_threshold: f32,
        thumb_width: Option<f32>,
    ) -> Self {
        let entries = markup
            .into_iter()
            .map(|m| PortfolioEntry::from_markup(m, thumb_width))
            .collect();
        Self::new(entries, viewport, swipe_threshold)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&PortfolioEntry> {
        self.entries.get(id.0)
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Page scrolling is suspended while an overlay is up
    pub fn scroll_locked(&self) -> bool {
        self.lightbox.is_active() || self.menu.is_open()
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            PageEvent::PointerMoved(x) => self.gestures.pointer_moved(x),
            PageEvent::SurfacePressed(id) => self.gestures.press(id),
            PageEvent::SurfaceReleased(id) => {
                match self.gestures.release(id, self.swipe_threshold) {
                    Some(Gesture::Click) => self.click(id, &mut effects),
                    Some(Gesture::Swipe(direction)) => {
                        let swap = self.entries.get_mut(id.0).and_then(|e| e.swipe(direction));
                        self.push_swap(id, swap, &mut effects);
                    }
                    None => {}
                }
            }
            PageEvent::DotClicked(id, index) => {
                let swap = self.entries.get_mut(id.0).and_then(|e| e.show_image(index));
                self.push_swap(id, swap, &mut effects);
            }
            PageEvent::ThumbnailClicked(id, index) => {
                let viewport = self.viewport;
                let swap = self
                    .entries
                    .get_mut(id.0)
                    .and_then(|e| e.select_thumbnail(index, &viewport));
                self.push_swap(id, swap, &mut effects);
            }
            PageEvent::ToggleClicked(id) => {
                let swap = self.entries.get_mut(id.0).and_then(|e| e.toggle_expand());
                self.push_swap(id, swap, &mut effects);
            }
            PageEvent::FilmstripScrolled(entry, offset) => {
                if let Some(strip) = self.entries.get_mut(entry.0).and_then(|e| e.filmstrip_mut()) {
                    strip.scrolled(offset);
                }
            }
            PageEvent::FilmstripNav(entry, direction) => {
                if let Some(strip) = self.entry(entry).and_then(|e| e.filmstrip()) {
                    effects.push(Effect::ScrollFilmstrip {
                        entry,
                        delta: strip.scroll_delta(direction),
                    });
                }
            }
            PageEvent::Lightbox(target) => {
                let change = self.lightbox.click(target);
                self.follow(change, &mut effects);
            }
            PageEvent::Key(key) => {
                let change = self.lightbox.key(key);
                self.follow(change, &mut effects);
                if key == NavKey::Escape {
                    self.menu.escape();
                }
            }
            PageEvent::MenuToggle => self.menu.toggle(&self.viewport),
            PageEvent::MenuClose => self.menu.close(),
            PageEvent::Resized(width) => {
                self.viewport.resize(width);
                self.menu.resized(&self.viewport);
                self.fit_filmstrips();
            }
        }

        effects
    }

    /// Re-lay every filmstrip out for the current viewport width
    fn fit_filmstrips(&mut self) {
        let width = self.viewport.width();
        for entry in &mut self.entries {
            let count = entry.images().len();
            if let Some(strip) = entry.filmstrip_mut() {
                strip.fit(count, width);
            }
        }
    }

    /// Report a finished image load. Returns `false` for stale swaps.
    pub fn settle(&mut self, id: EntryId, token: SwapToken) -> bool {
        self.entries
            .get_mut(id.0)
            .map(|entry| entry.settle_swap(token))
            .unwrap_or(false)
    }

    fn click(&mut self, id: EntryId, effects: &mut Vec<Effect>) {
        let viewport = self.viewport;
        let Some(entry) = self.entries.get_mut(id.0) else {
            return;
        };

        match entry.click(&viewport) {
            ClickOutcome::Ignored => {}
            ClickOutcome::Toggled(swap) => self.push_swap(id, swap, effects),
            ClickOutcome::OpenLightbox(request) => {
                debug!(entry = id.0, images = request.images.len(), "opening lightbox");
                let origin = request.follow.then_some(id);
                let change = self.lightbox.open(request.images, request.start, origin);
                self.follow(change, effects);
            }
        }
    }

    /// Keep the originating entry in step with lightbox navigation
    fn follow(&mut self, change: Option<IndexChange>, effects: &mut Vec<Effect>) {
        let Some(IndexChange { origin, index }) = change else {
            return;
        };
        let swap = self.entries.get_mut(origin.0).and_then(|e| e.show_image(index));
        self.push_swap(origin, swap, effects);
    }

    fn push_swap(&self, id: EntryId, swap: Option<ImageSwap>, effects: &mut Vec<Effect>) {
        let (Some(swap), Some(entry)) = (swap, self.entry(id)) else {
            return;
        };

        let width = self.viewport.width().max(0.0) as u32;
        let mut sources: Vec<String> = Vec::new();
        for surface in 0..entry.surfaces().len() {
            if let Some(image) = entry.source_for(surface, Shown::Image(swap.index)) {
                let source = image.best_source(width).to_string();
                if !sources.contains(&source) {
                    sources.push(source);
                }
            }
        }

        effects.push(Effect::Swap {
            entry: id,
            token: swap.token,
            sources,
        });
    }
}
