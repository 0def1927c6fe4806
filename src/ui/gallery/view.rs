// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: the thumbnail grid and, when open, the lightbox layer.

use super::{Message, Phase, Preview, State, Tile, VisibleArea};
use crate::gallery::{GridModel, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, mouse_area, tooltip, Column, Container, Image, Row, Scrollable, Stack, Svg, Text,
};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let body: Element<'a, Message> = match (state.phase(), state.grid()) {
        (Phase::Idle | Phase::Discovering, _) => centered_text(ctx.i18n.tr("gallery-loading")),
        (Phase::Ready, GridModel::Placeholder { message_key }) => {
            centered_text(ctx.i18n.tr(message_key))
        }
        (Phase::Ready, GridModel::Thumbnails(thumbs)) => grid(ctx.i18n, state, thumbs),
    };

    let refresh = button(Text::new(ctx.i18n.tr("gallery-refresh")))
        .padding(spacing::XS)
        .style(styles::button::primary)
        .on_press_maybe((state.phase() != Phase::Discovering).then_some(Message::Refresh));

    let page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(
                    Text::new(ctx.i18n.tr("gallery-title"))
                        .size(typography::TITLE_LG)
                        .width(Length::Fill),
                )
                .push(refresh),
        )
        .push(body);

    let page = Scrollable::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::Scrolled(VisibleArea::from_viewport(&viewport))
        });

    if state.session().is_open() {
        Stack::new().push(page).push(lightbox(ctx.i18n, state)).into()
    } else {
        page.into()
    }
}

fn centered_text<'a>(content: String) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::placeholder_tile)
        .into()
}

fn grid<'a>(i18n: &'a I18n, state: &'a State, thumbs: &'a [Thumbnail]) -> Element<'a, Message> {
    let tiles = thumbs.iter().map(|thumb| -> Element<'a, Message> {
        let label = i18n.tr_with_args(
            "gallery-open-image",
            &[("number", FluentValue::from(thumb.label_number() as i64))],
        );
        let tile = button(preview_tile(state.tile(thumb.index), thumb))
            .padding(spacing::XXS)
            .style(styles::button::thumbnail)
            .on_press(Message::ThumbnailPressed(thumb.index));

        tooltip(tile, Text::new(label), tooltip::Position::Bottom)
            .gap(4)
            .into()
    });

    Row::with_children(tiles)
        .spacing(spacing::SM)
        .wrap()
        .vertical_spacing(spacing::SM)
        .into()
}

fn preview_tile<'a>(tile: Option<&'a Tile>, thumb: &'a Thumbnail) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::THUMBNAIL);
    match tile {
        Some(Tile::Loaded(preview)) => preview_widget(preview, size, ContentFit::Cover),
        Some(Tile::Failed) | None => Container::new(
            Text::new(thumb.name.as_str())
                .size(typography::CAPTION)
                .align_x(Horizontal::Center),
        )
        .width(size)
        .height(size)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder_tile)
        .into(),
    }
}

fn preview_widget<'a>(preview: &Preview, size: Length, fit: ContentFit) -> Element<'a, Message> {
    match preview {
        Preview::Raster(handle) => Image::new(handle.clone())
            .width(size)
            .height(size)
            .content_fit(fit)
            .into(),
        Preview::Vector(handle) => Svg::new(handle.clone())
            .width(size)
            .height(size)
            .content_fit(fit)
            .into(),
    }
}

fn lightbox<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let caption = state
        .session()
        .current()
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let image: Element<'a, Message> = match state.lightbox_image() {
        Some(preview) => {
            mouse_area(preview_widget(preview, Length::Fill, ContentFit::Contain))
                .on_press(Message::ImagePressed)
                .into()
        }
        None => Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY_LG)
            .into(),
    };

    let control = |label: &'static str, message: Message| {
        button(
            Text::new(label)
                .size(typography::TITLE_MD)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .height(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .style(styles::button::lightbox_control)
        .on_press(message)
    };

    let top = Row::new()
        .push(
            Text::new(caption)
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(control("✕", Message::Close));

    let middle = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(control("◀", Message::Previous))
        .push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(control("▶", Message::Next));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(top)
        .push(middle);

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed)
    .into()
}
