// Copyright (C) Pavel Grebnev 2023-2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_model::RgbColor;
use crate::config;
use iced::theme::{self, Theme};
use iced::widget::{container, text_input};
use iced::{Border, Color, Shadow, Vector};

pub const SWATCH_SIZE: f32 = 128.0;

pub fn to_iced_color(color: RgbColor) -> Color {
    let [r, g, b] = color.to_normalized();
    Color::from_rgb(r, g, b)
}

pub fn swatch(theme: &Theme, color: Color) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: (SWATCH_SIZE / 2.0).into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

pub fn notification_success(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(palette.success.strong.text),
        background: Some(palette.success.strong.color.into()),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn notification_failure(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(palette.danger.base.text),
        background: Some(palette.danger.base.color.into()),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn get_custom_theme(custom_config: config::CustomTheme) -> Theme {
    Theme::custom(
        "custom".to_string(),
        theme::Palette {
            background: to_iced_color(custom_config.background),
            text: to_iced_color(custom_config.text),
            primary: to_iced_color(custom_config.primary),
            success: to_iced_color(custom_config.success),
            danger: to_iced_color(custom_config.danger),
        },
    )
}

// the hex field has no on_input handler, which iced renders as disabled
pub(crate) fn read_only_text_input_style(
    theme: &Theme,
    status: text_input::Status,
) -> text_input::Style {
    match status {
        text_input::Status::Disabled => text_input::default(theme, text_input::Status::Active),
        _ => text_input::default(theme, status),
    }
}
