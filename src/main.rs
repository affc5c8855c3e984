// Copyright (C) Pavel Grebnev 2023-2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

#![windows_subsystem = "windows"]

mod app_arguments;
mod color_model;
mod color_picker;
mod config;
mod main_window;
mod notifications;
mod style;

use iced::window;
use iced::Size;
use tracing_subscriber::EnvFilter;

use app_arguments::EarlyExit;
use main_window::MainWindow;

const DEFAULT_LOG_FILTER: &str = "hsl_picker=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn main() -> iced::Result {
    init_logging();

    let app_arguments = app_arguments::get_app_arguments();
    match &app_arguments.early_exit {
        Some(EarlyExit::Help(text)) | Some(EarlyExit::Version(text)) => {
            println!("{}", text);
            return Ok(());
        }
        Some(EarlyExit::Error(text)) => {
            eprintln!("{}", text);
            std::process::exit(1);
        }
        None => {}
    }

    let app_config = config::read_config(config::get_config_path(
        app_arguments.custom_config_path.as_deref(),
    ));

    let settings = window::Settings {
        size: Size::new(400.0, 720.0),
        position: window::Position::Centered,
        level: if app_config.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        ..window::Settings::default()
    };

    iced::application(MainWindow::title, MainWindow::update, MainWindow::view)
        .theme(MainWindow::theme)
        .subscription(MainWindow::subscription)
        .window(settings)
        .run_with(move || MainWindow::new(app_arguments, app_config))
}
