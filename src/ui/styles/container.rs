// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::forms::Tone;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page surface behind forms and the gallery.
///
/// Derived from the active theme background with a slight opacity so it
/// stays readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Site header bar holding the navigation.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_600)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_100),
        ..Default::default()
    }
}

/// Status line under a form, colored by tone.
pub fn status(tone: Tone) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = match tone {
            Tone::Pending => palette::INFO_500,
            Tone::Ok => palette::SUCCESS_500,
            Tone::Err => palette::ERROR_500,
        };
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..accent })),
            text_color: Some(accent),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Thumbnail tile while the image is loading or failed to load.
pub fn placeholder_tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the lightbox image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Toast notification with a colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: Some(palette.background.weak.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}
