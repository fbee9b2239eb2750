//! Full-screen lightbox overlay

use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, stack, text, Row,
};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};

use super::ImageStore;
use crate::state::lightbox::{Lightbox, LightboxTarget};
use crate::state::page::PageEvent;
use crate::state::viewport::Viewport;

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.9,
};

fn click(target: LightboxTarget) -> PageEvent {
    PageEvent::Lightbox(target)
}

/// Nothing is rendered until the first open, nor while closed
pub fn view<'a>(
    lightbox: &'a Lightbox,
    viewport: &Viewport,
    store: &ImageStore,
) -> Option<Element<'a, PageEvent>> {
    if !lightbox.is_created() || !lightbox.is_active() {
        return None;
    }
    let current = lightbox.current()?;

    let width = viewport.width().max(0.0) as u32;
    let picture = mouse_area(
        image(store.handle_for(current.best_source(width)))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .on_press(click(LightboxTarget::Image));

    let close = button(text("✕").size(24))
        .on_press(click(LightboxTarget::CloseButton))
        .style(button::text);

    let stage: Element<'a, PageEvent> = if lightbox.controls_visible() {
        row![
            button(text("‹").size(40))
                .on_press(click(LightboxTarget::Prev))
                .style(button::text),
            picture,
            button(text("›").size(40))
                .on_press(click(LightboxTarget::Next))
                .style(button::text),
        ]
        .align_y(Alignment::Center)
        .into()
    } else {
        picture.into()
    };

    let dots = Row::with_children(lightbox.dot_states().into_iter().enumerate().map(
        |(i, active)| {
            button(text(if active { "●" } else { "○" }))
                .on_press(click(LightboxTarget::Dot(i)))
                .style(button::text)
                .into()
        },
    ))
    .spacing(6);

    let caption = text(current.alt.as_str()).size(14);

    // Presses anywhere inside the children stop here; only the container's
    // own padding reaches the dismiss handler
    let children = opaque(
        column![
            container(close).align_right(Length::Fill),
            stage,
            caption,
            dots
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    );

    let content = mouse_area(
        container(children)
            .padding(16)
            .max_width(viewport.width() * 0.9),
    )
    .on_press(click(LightboxTarget::Content));

    let backdrop = mouse_area(
        container(column![])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(BACKDROP)),
                ..container::Style::default()
            }),
    )
    .on_press(click(LightboxTarget::Backdrop));

    Some(stack![backdrop, container(content).center(Length::Fill)].into())
}
