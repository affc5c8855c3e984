// Copyright (C) Pavel Grebnev 2023-2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use iced::alignment::Alignment;
use iced::theme::Theme;
use iced::widget::{
    button, column, container, mouse_area, slider, text, text_input, Column, Space,
};
use iced::{keyboard, time, Element, Length, Subscription, Task};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::app_arguments::AppArguments;
use crate::color_model::{MAX_HUE, MAX_LIGHTNESS, MAX_SATURATION};
use crate::color_picker::{Clipboard, ClipboardError, ColorPicker};
use crate::config::AppConfig;
use crate::notifications::{Notification, NotificationBanner, NotificationKind, Notifier};
use crate::style;

const NOTIFICATION_CHECK_INTERVAL: Duration = Duration::from_millis(250);
const CONTENT_MAX_WIDTH: f32 = 320.0;

pub struct MainWindow {
    picker: ColorPicker,
    notifications: NotificationBanner,
    theme: Theme,
    custom_title: Option<String>,
}

#[derive(Debug, Clone)]
pub enum WindowMessage {
    HueChanged(u16),
    SaturationChanged(u8),
    LightnessChanged(u8),
    CopyToClipboard,
    DismissNotification,
    Tick(Instant),
}

// iced queues the write as a task, so from our side it can't fail
struct ClipboardTasks {
    tasks: Vec<Task<WindowMessage>>,
}

impl Clipboard for ClipboardTasks {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.tasks.push(iced::clipboard::write(text.to_string()));
        Ok(())
    }
}

impl MainWindow {
    pub fn new(app_arguments: AppArguments, app_config: AppConfig) -> (Self, Task<WindowMessage>) {
        let mut main_window = MainWindow {
            picker: ColorPicker::new(app_arguments.initial_color),
            notifications: NotificationBanner::new(app_config.notification_lifetime()),
            theme: get_theme(&app_config),
            custom_title: app_arguments.custom_title,
        };

        if let Some(error) = app_config.config_read_error {
            main_window.notifications.notify(Notification::failure(error));
        }

        (main_window, Task::none())
    }

    pub fn title(&self) -> String {
        match &self.custom_title {
            Some(title) => title.clone(),
            None => format!("hsl picker - {}", self.picker.hex()),
        }
    }

    pub fn update(&mut self, message: WindowMessage) -> Task<WindowMessage> {
        match message {
            WindowMessage::HueChanged(hue) => self.picker.set_hue(hue),
            WindowMessage::SaturationChanged(saturation) => self.picker.set_saturation(saturation),
            WindowMessage::LightnessChanged(lightness) => self.picker.set_lightness(lightness),
            WindowMessage::CopyToClipboard => {
                let mut clipboard = ClipboardTasks { tasks: Vec::new() };
                // failures are already shown in the notification banner
                let _ = self
                    .picker
                    .copy_to_clipboard(&mut clipboard, &mut self.notifications);
                return Task::batch(clipboard.tasks);
            }
            WindowMessage::DismissNotification => self.notifications.dismiss(),
            WindowMessage::Tick(now) => {
                if self.notifications.expire(now) {
                    debug!("notification expired");
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<WindowMessage> {
        let hsl = self.picker.hsl();
        let swatch_color = style::to_iced_color(self.picker.rgb());

        let swatch = container(Space::new(style::SWATCH_SIZE, style::SWATCH_SIZE))
            .style(move |theme| style::swatch(theme, swatch_color));

        let mut content = column![
            text("HSL Color Picker").size(28),
            swatch,
            slider_field(
                "Hue (0-360):",
                slider(0..=MAX_HUE, hsl.hue, WindowMessage::HueChanged).into(),
                hsl.hue.into(),
            ),
            slider_field(
                "Saturation (0-100):",
                slider(0..=MAX_SATURATION, hsl.saturation, WindowMessage::SaturationChanged)
                    .into(),
                hsl.saturation.into(),
            ),
            slider_field(
                "Lightness (0-100):",
                slider(0..=MAX_LIGHTNESS, hsl.lightness, WindowMessage::LightnessChanged).into(),
                hsl.lightness.into(),
            ),
            column![
                text("Hex Color:"),
                text_input("", self.picker.hex()).style(style::read_only_text_input_style),
            ]
            .spacing(5),
            button("Copy to Clipboard").on_press(WindowMessage::CopyToClipboard),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .max_width(CONTENT_MAX_WIDTH);

        if let Some(notification) = self.notifications.current() {
            content = content.push(view_notification(notification));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<WindowMessage> {
        let copy_shortcut = keyboard::on_key_press(|key, modifiers| match key.as_ref() {
            keyboard::Key::Character("c") if modifiers.command() => {
                Some(WindowMessage::CopyToClipboard)
            }
            _ => None,
        });

        if self.notifications.is_visible() {
            Subscription::batch([
                copy_shortcut,
                time::every(NOTIFICATION_CHECK_INTERVAL).map(WindowMessage::Tick),
            ])
        } else {
            copy_shortcut
        }
    }
}

fn slider_field<'a>(
    label: &'a str,
    slider: Element<'a, WindowMessage>,
    value: u32,
) -> Column<'a, WindowMessage> {
    column![text(label), slider, text(format!("Value: {}", value))]
        .spacing(5)
        .width(Length::Fill)
}

fn view_notification(notification: &Notification) -> Element<WindowMessage> {
    let banner = container(text(notification.message.as_str()))
        .padding(10)
        .width(Length::Fill)
        .style(match notification.kind {
            NotificationKind::Success => style::notification_success,
            NotificationKind::Failure => style::notification_failure,
        });

    mouse_area(banner)
        .on_press(WindowMessage::DismissNotification)
        .into()
}

fn get_theme(app_config: &AppConfig) -> Theme {
    if let Some(custom_theme) = app_config.custom_theme {
        style::get_custom_theme(custom_theme)
    } else {
        Theme::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_model::{to_hex, HslColor};

    fn new_window() -> MainWindow {
        MainWindow::new(AppArguments::default(), AppConfig::default()).0
    }

    #[test]
    fn test_slider_messages_update_hex_and_title() {
        let mut window = new_window();
        assert_eq!(window.title(), "hsl picker - #ff0000");

        let _ = window.update(WindowMessage::HueChanged(200));
        let _ = window.update(WindowMessage::SaturationChanged(80));
        let _ = window.update(WindowMessage::LightnessChanged(40));

        assert_eq!(window.picker.hsl(), HslColor::new(200, 80, 40));
        assert_eq!(window.picker.hex(), to_hex(200, 80, 40));
        assert_eq!(window.title(), format!("hsl picker - {}", to_hex(200, 80, 40)));
    }

    #[test]
    fn test_copy_shows_notification_until_dismissed() {
        let mut window = new_window();

        let _ = window.update(WindowMessage::CopyToClipboard);
        assert_eq!(
            window.notifications.current(),
            Some(&Notification::success(
                "Copied the color code #ff0000 to clipboard!"
            ))
        );

        let _ = window.update(WindowMessage::DismissNotification);
        assert!(!window.notifications.is_visible());
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut window = new_window();
        let _ = window.update(WindowMessage::CopyToClipboard);

        let _ = window.update(WindowMessage::Tick(Instant::now()));
        assert!(window.notifications.is_visible());

        let _ = window.update(WindowMessage::Tick(Instant::now() + Duration::from_secs(10)));
        assert!(!window.notifications.is_visible());
    }

    #[test]
    fn test_initial_state_comes_from_arguments_and_config() {
        let app_arguments = AppArguments {
            custom_title: Some("Picker".to_string()),
            initial_color: HslColor::new(240, 100, 50),
            ..AppArguments::default()
        };
        let app_config = AppConfig {
            config_read_error: Some("config file is broken".to_string()),
            ..AppConfig::default()
        };

        let (window, _) = MainWindow::new(app_arguments, app_config);

        assert_eq!(window.title(), "Picker");
        assert_eq!(window.picker.hex(), "#0000ff");
        assert_eq!(
            window.notifications.current(),
            Some(&Notification::failure("config file is broken"))
        );
    }
}
