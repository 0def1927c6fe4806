// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen is framed by the site header and footer. Toasts are layered
//! on top of the whole window.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::site::Partials;
use crate::ui::forms::{contact, program, volunteer};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{footer, gallery, home, notifications};
use iced::{
    widget::{Column, Container, Scrollable, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub partials: &'a Partials,
    pub gallery: &'a gallery::State,
    pub contact: &'a contact::State,
    pub volunteer: &'a volunteer::State,
    pub program: &'a program::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        links: ctx.partials.header.as_deref(),
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => Scrollable::new(home::view(ctx.i18n, Message::SwitchScreen)).into(),
        Screen::Gallery => gallery::view(gallery::ViewContext { i18n: ctx.i18n }, ctx.gallery)
            .map(Message::Gallery),
        Screen::Contact => {
            Scrollable::new(contact::view(ctx.i18n, ctx.contact).map(Message::Contact)).into()
        }
        Screen::Volunteer => {
            Scrollable::new(volunteer::view(ctx.i18n, ctx.volunteer).map(Message::Volunteer))
                .into()
        }
        Screen::Programs => {
            Scrollable::new(program::view(ctx.i18n, ctx.program).map(Message::Program)).into()
        }
    };

    let column = Column::new()
        .push(header)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(ctx.partials.footer.as_deref()));

    let page = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(page)
            .push(ctx.notifications.view(ctx.i18n).map(Message::Notification))
            .into()
    } else {
        page.into()
    }
}
