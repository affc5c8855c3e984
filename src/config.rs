// Copyright (C) Pavel Grebnev 2023-2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::color_model::RgbColor;

const DEFAULT_CONFIG_NAME: &str = "hsl_picker_config.json";
const DEFAULT_NOTIFICATION_SECONDS: u64 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' can't be read: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config file '{}' can't be written: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config file '{}' is not valid: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("config can't be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub always_on_top: bool,
    // 0 keeps notifications on screen until clicked
    pub notification_seconds: u64,
    pub custom_theme: Option<CustomTheme>,
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(skip)]
    pub config_read_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomTheme {
    pub background: RgbColor,
    pub text: RgbColor,
    pub primary: RgbColor,
    pub success: RgbColor,
    pub danger: RgbColor,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            always_on_top: false,
            notification_seconds: DEFAULT_NOTIFICATION_SECONDS,
            custom_theme: None,
            config_path: PathBuf::new(),
            config_read_error: None,
        }
    }
}

impl Default for CustomTheme {
    fn default() -> Self {
        CustomTheme {
            background: RgbColor::new(0x40, 0x42, 0x4a),
            text: RgbColor::new(0xff, 0xff, 0xff),
            primary: RgbColor::new(0x73, 0x87, 0xda),
            success: RgbColor::new(0x4f, 0x80, 0x2b),
            danger: RgbColor::new(0xb3, 0x4d, 0x4d),
        }
    }
}

impl AppConfig {
    pub fn notification_lifetime(&self) -> Option<Duration> {
        if self.notification_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.notification_seconds))
        }
    }
}

pub fn get_config_path(custom_config_path: Option<&str>) -> PathBuf {
    if let Some(config_path) = custom_config_path {
        PathBuf::from(config_path)
    } else {
        std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or(Path::new(""))
            .join(DEFAULT_CONFIG_NAME)
    }
}

pub fn parse_config(data: &str, config_path: &Path) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig =
        serde_json::from_str(data).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
    config.config_path = config_path.to_path_buf();
    Ok(config)
}

pub fn save_config_to_file(config: &AppConfig) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    std::fs::write(&config.config_path, data).map_err(|source| ConfigError::Write {
        path: config.config_path.clone(),
        source,
    })
}

fn load_config(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let data = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    parse_config(&data, config_path)
}

/// Never fails: problems are logged and kept in `config_read_error` so the window can show them.
pub fn read_config(config_path: PathBuf) -> AppConfig {
    let default_config = AppConfig {
        config_path,
        ..AppConfig::default()
    };

    // if config file doesn't exist, create it
    if !default_config.config_path.exists() {
        info!(path = %default_config.config_path.display(), "writing default config");
        if let Err(err) = save_config_to_file(&default_config) {
            // running without a config file is fine, the defaults are already in place
            warn!(error = %err, "can't write default config");
        }
        return default_config;
    }

    match load_config(&default_config.config_path) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "using default config");
            AppConfig {
                config_read_error: Some(err.to_string()),
                ..default_config
            }
        }
    }
}
