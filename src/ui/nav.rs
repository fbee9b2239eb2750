//! Site header and the mobile navigation drawer

use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Background, Element, Length, Theme};

use crate::state::page::{Page, PageEvent};

/// Header bar. On mobile it carries the drawer toggle, on desktop the
/// entry titles are listed inline.
pub fn header<'a>(page: &'a Page, title: &'a str) -> Element<'a, PageEvent> {
    let mut bar = row![text(title).size(22).width(Length::Fill)]
        .spacing(16)
        .align_y(Alignment::Center);

    if page.viewport().is_desktop() {
        for entry in page.entries() {
            bar = bar.push(text(entry.title()).size(14));
        }
    } else {
        let icon = if page.menu().aria_expanded() { "✕" } else { "☰" };
        bar = bar.push(
            button(text(icon).size(22))
                .on_press(PageEvent::MenuToggle)
                .style(button::text),
        );
        bar = bar.push(text(page.menu().aria_label()).size(10));
    }

    container(bar).padding([12, 24]).width(Length::Fill).into()
}

/// Slide-up drawer, only while open
pub fn drawer<'a>(page: &'a Page) -> Option<Element<'a, PageEvent>> {
    if !page.menu().is_open() {
        return None;
    }

    let links = page
        .entries()
        .iter()
        .map(|entry| text(entry.title()).size(20).into());

    let sheet = column![
        button(text("Close"))
            .on_press(PageEvent::MenuClose)
            .style(button::text),
        Column::with_children(links).spacing(12),
    ]
    .spacing(16)
    .padding(24);

    Some(
        container(
            container(sheet)
                .width(Length::Fill)
                .style(|theme: &Theme| container::Style {
                    background: Some(Background::Color(
                        theme.extended_palette().background.weak.color,
                    )),
                    ..container::Style::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_bottom(Length::Fill)
        .into(),
    )
}
