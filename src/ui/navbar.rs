// SPDX-License-Identifier: MPL-2.0
//! Site header with the main navigation.
//!
//! Links come from the shared header fragment when it loaded. Each link is
//! mapped to a screen by the page it points at; links to pages the client
//! does not render are shown without an action. When the fragment is missing
//! the built-in screen list is used instead.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::site::NavLink;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Links from the header fragment, `None` if it failed to load.
    pub links: Option<&'a [NavLink]>,
    pub current: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Navigate(screen) if screen == current => Event::None,
        Message::Navigate(screen) => Event::Navigate(screen),
    }
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub target: Option<Screen>,
    pub active: bool,
}

/// Builds the entries to render, preferring the fragment's links.
pub fn entries(ctx: &ViewContext<'_>) -> Vec<Entry> {
    match ctx.links {
        Some(links) if !links.is_empty() => links
            .iter()
            .map(|link| Entry {
                label: link.label.clone(),
                target: Screen::from_page(&link.page),
                active: link.active,
            })
            .collect(),
        _ => Screen::ALL
            .into_iter()
            .map(|screen| Entry {
                label: ctx.i18n.tr(screen.label_key()),
                target: Some(screen),
                active: screen == ctx.current,
            })
            .collect(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("site-name"))
        .size(typography::TITLE_MD)
        .width(Length::Fill);

    let links = entries(&ctx).into_iter().map(|entry| -> Element<'a, Message> {
        button(Text::new(entry.label).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::nav_link(entry.active))
            .on_press_maybe(entry.target.map(Message::Navigate))
            .into()
    });

    let bar = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(brand)
        .push(Row::with_children(links).spacing(spacing::XS));

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::header)
        .into()
}
