// SPDX-License-Identifier: MPL-2.0
//! Landing screen with shortcuts to the other pages.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

const SHORTCUTS: [Screen; 4] = [
    Screen::Programs,
    Screen::Gallery,
    Screen::Volunteer,
    Screen::Contact,
];

pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    on_navigate: impl Fn(Screen) -> Message,
) -> Element<'a, Message> {
    let shortcuts = SHORTCUTS.into_iter().map(|screen| -> Element<'a, Message> {
        button(Text::new(i18n.tr(screen.label_key())))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(on_navigate(screen))
            .into()
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::FORM_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("home-intro"))
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center),
        )
        .push(Row::with_children(shortcuts).spacing(spacing::SM).wrap());

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}
