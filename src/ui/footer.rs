// SPDX-License-Identifier: MPL-2.0
//! Site footer built from the shared footer fragment.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the fragment's text lines. A footer that failed to load renders
/// as an empty bar.
pub fn view<'a, Message: 'a>(lines: Option<&'a [String]>) -> Element<'a, Message> {
    let lines = lines.unwrap_or_default().iter().map(|line| -> Element<'a, Message> {
        Text::new(line.as_str())
            .size(typography::BODY_SM)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .into()
    });

    Container::new(Column::with_children(lines).spacing(spacing::XXS))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::footer)
        .into()
}
