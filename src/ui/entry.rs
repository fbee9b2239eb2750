//! One portfolio entry: display surface, dots, filmstrip and read-more panel

use iced::widget::{
    button, column, container, horizontal_rule, image, mouse_area, row, scrollable, text, Column,
    Row,
};
use iced::{Border, Color, ContentFit, Element, Length, Theme};

use super::ImageStore;
use crate::state::carousel::PortfolioEntry;
use crate::state::data::{EntryId, FitMode};
use crate::state::filmstrip::{NavButton, ScrollDirection, FILMSTRIP_GAP};
use crate::state::page::PageEvent;
use crate::state::panel::{ContentHeight, DividerPosition};
use crate::state::viewport::Viewport;

const DESKTOP_SURFACE_HEIGHT: f32 = 480.0;
const MOBILE_SURFACE_HEIGHT: f32 = 320.0;
const FILMSTRIP_HEIGHT: f32 = 90.0;
const THUMB_FRAME: f32 = 2.0;

/// Scrollable id of an entry's filmstrip
pub fn filmstrip_id(id: EntryId) -> scrollable::Id {
    scrollable::Id::new(format!("filmstrip-{}", id.0))
}

fn content_fit(mode: FitMode) -> ContentFit {
    match mode {
        FitMode::Cover => ContentFit::Cover,
        FitMode::Contain => ContentFit::Contain,
    }
}

pub fn view<'a>(
    id: EntryId,
    entry: &'a PortfolioEntry,
    viewport: &Viewport,
    store: &ImageStore,
) -> Element<'a, PageEvent> {
    let mut heading = row![text(entry.title()).size(28)]
        .spacing(12)
        .align_y(iced::Alignment::Center);
    if entry.is_swapping() {
        heading = heading.push(text("loading…").size(12));
    }
    let mut layout: Column<'a, PageEvent> = column![heading].spacing(12);

    if let Some(surface) = surface(id, entry, viewport, store) {
        layout = layout.push(surface);
    }

    let dots = entry.indicators_visible().then(|| indicators(id, entry));
    if let Some(dots) = dots {
        layout = layout.push(dots);
    }

    if viewport.is_desktop() && entry.filmstrip().is_some() {
        layout = layout.push(filmstrip(id, entry, store));
    }

    layout = layout.push(panel(id, entry));

    container(layout).padding(24).width(Length::Fill).into()
}

/// The image for the current breakpoint, tracking press/release/move for
/// click and swipe recognition
fn surface<'a>(
    id: EntryId,
    entry: &'a PortfolioEntry,
    viewport: &Viewport,
    store: &ImageStore,
) -> Option<Element<'a, PageEvent>> {
    let surface = entry.active_surface(viewport)?;
    let source = entry.displayed_source(surface)?;
    let width = viewport.width().max(0.0) as u32;
    let handle = store.handle_for(source.best_source(width));

    let height = if viewport.is_desktop() {
        DESKTOP_SURFACE_HEIGHT
    } else {
        MOBILE_SURFACE_HEIGHT
    };

    let picture = image(handle)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .content_fit(content_fit(entry.fit_mode(viewport)));

    Some(
        mouse_area(picture)
            .on_press(PageEvent::SurfacePressed(id))
            .on_release(PageEvent::SurfaceReleased(id))
            .on_move(|point| PageEvent::PointerMoved(point.x))
            .into(),
    )
}

fn indicators<'a>(id: EntryId, entry: &PortfolioEntry) -> Element<'a, PageEvent> {
    let dots = entry
        .indicator_states()
        .into_iter()
        .enumerate()
        .map(|(i, active)| {
            button(text(if active { "●" } else { "○" }))
                .on_press(PageEvent::DotClicked(id, i))
                .style(button::text)
                .into()
        });

    Row::with_children(dots).spacing(4).into()
}

fn nav_button<'a>(label: &'a str, state: NavButton, message: PageEvent) -> Element<'a, PageEvent> {
    let opacity = state.opacity;
    button(text(label).size(24))
        .on_press_maybe(state.enabled.then_some(message))
        .style(move |theme: &Theme, status| {
            let base = button::secondary(theme, status);
            button::Style {
                text_color: Color {
                    a: opacity,
                    ..base.text_color
                },
                ..base
            }
        })
        .into()
}

fn filmstrip<'a>(
    id: EntryId,
    entry: &'a PortfolioEntry,
    store: &ImageStore,
) -> Element<'a, PageEvent> {
    let Some(strip) = entry.filmstrip() else {
        return column![].into();
    };
    // The frame's padding counts towards the thumbnail width
    let image_width = (strip.thumb_width() - 2.0 * THUMB_FRAME).max(1.0);

    let thumbs = entry.images().iter().enumerate().map(|(i, source)| {
        let handle = store
            .thumbnail(id, i)
            .unwrap_or_else(|| store.handle_for(&source.src));
        let active = i == entry.index();

        let framed = container(
            image(handle)
                .width(Length::Fixed(image_width))
                .height(Length::Fixed(FILMSTRIP_HEIGHT))
                .content_fit(ContentFit::Cover),
        )
        .padding(THUMB_FRAME)
        .style(move |theme: &Theme| {
            if active {
                container::Style {
                    border: Border {
                        color: theme.extended_palette().primary.strong.color,
                        width: 2.0,
                        radius: 2.0.into(),
                    },
                    ..container::Style::default()
                }
            } else {
                container::Style::default()
            }
        });

        button(framed)
            .on_press(PageEvent::ThumbnailClicked(id, i))
            .padding(0)
            .style(button::text)
            .into()
    });

    let strip_view = scrollable(Row::with_children(thumbs).spacing(FILMSTRIP_GAP))
        .id(filmstrip_id(id))
        .direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
        .on_scroll(move |viewport| PageEvent::FilmstripScrolled(id, viewport.absolute_offset().x))
        .width(Length::Fixed(strip.visible()));

    row![
        nav_button(
            "‹",
            strip.prev_button(),
            PageEvent::FilmstripNav(id, ScrollDirection::Back)
        ),
        strip_view,
        nav_button(
            "›",
            strip.next_button(),
            PageEvent::FilmstripNav(id, ScrollDirection::Forward)
        ),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center)
    .into()
}

/// Toggle label, divider and body, ordered by the panel state
fn panel<'a>(id: EntryId, entry: &'a PortfolioEntry) -> Element<'a, PageEvent> {
    let state = entry.panel();
    let mut layout: Column<'a, PageEvent> = column![].spacing(8);

    if !entry.is_inert() {
        layout = layout.push(
            button(text(state.label()))
                .on_press(PageEvent::ToggleClicked(id))
                .style(button::text),
        );
    }

    let body = match (state.content_height(), entry.body()) {
        (Some(ContentHeight::Natural), Some(body)) => Some(text(body)),
        _ => None,
    };

    match state.divider_position() {
        Some(DividerPosition::BeforeContent) => {
            layout = layout.push(horizontal_rule(1));
            if let Some(body) = body {
                layout = layout.push(body);
            }
        }
        Some(DividerPosition::AfterContent) => {
            if let Some(body) = body {
                layout = layout.push(body);
            }
            layout = layout.push(horizontal_rule(1));
        }
        None => {
            if let Some(body) = body {
                layout = layout.push(body);
            }
        }
    }

    layout.into()
}
