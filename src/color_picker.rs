// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::color_model::{HslColor, RgbColor};
use crate::notifications::{Notification, Notifier};

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard access was denied: {0}")]
    Denied(String),
}

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Holds the picked color and keeps its hex code in sync with it.
///
/// Range checks are the job of whoever produces the values (sliders, argument parsing),
/// the setters take the values as they are.
pub struct ColorPicker {
    hsl: HslColor,
    hex: String,
}

impl Default for ColorPicker {
    fn default() -> Self {
        ColorPicker::new(HslColor::default())
    }
}

impl ColorPicker {
    pub fn new(initial_color: HslColor) -> Self {
        Self {
            hsl: initial_color,
            hex: initial_color.to_hex(),
        }
    }

    pub fn hsl(&self) -> HslColor {
        self.hsl
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> RgbColor {
        self.hsl.to_rgb()
    }

    pub fn set_hue(&mut self, hue: u16) {
        self.set_hsl(self.hsl.with_hue(hue));
    }

    pub fn set_saturation(&mut self, saturation: u8) {
        self.set_hsl(self.hsl.with_saturation(saturation));
    }

    pub fn set_lightness(&mut self, lightness: u8) {
        self.set_hsl(self.hsl.with_lightness(lightness));
    }

    fn set_hsl(&mut self, hsl: HslColor) {
        self.hsl = hsl;
        self.hex = hsl.to_hex();
        debug!(
            hue = hsl.hue,
            saturation = hsl.saturation,
            lightness = hsl.lightness,
            hex = %self.hex,
            "color changed"
        );
    }

    /// Writes the current hex code to the clipboard and reports the outcome to the notifier.
    /// A failed write is not retried.
    pub fn copy_to_clipboard(
        &self,
        clipboard: &mut impl Clipboard,
        notifier: &mut impl Notifier,
    ) -> Result<(), ClipboardError> {
        match clipboard.write(&self.hex) {
            Ok(()) => {
                info!(hex = %self.hex, "copied color code to clipboard");
                notifier.notify(Notification::success(format!(
                    "Copied the color code {} to clipboard!",
                    self.hex
                )));
                Ok(())
            }
            Err(err) => {
                warn!(hex = %self.hex, error = %err, "failed to copy color code");
                notifier.notify(Notification::failure(format!(
                    "Could not copy the color code {}: {}",
                    self.hex, err
                )));
                Err(err)
            }
        }
    }
}
