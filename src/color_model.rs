// Copyright (C) Pavel Grebnev 2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_HUE: u16 = 360;
pub const MAX_SATURATION: u8 = 100;
pub const MAX_LIGHTNESS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("'{0}' is not a color in #rrggbb format")]
    InvalidHex(String),
    #[error("{component} value {value} is out of range 0-{max}")]
    OutOfRange {
        component: &'static str,
        value: u32,
        max: u32,
    },
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for HslColor {
    fn default() -> Self {
        HslColor::new(0, 100, 50)
    }
}

impl HslColor {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Builds a color from unchecked input, rejecting any component outside its range.
    pub fn try_new(hue: u32, saturation: u32, lightness: u32) -> Result<Self, ColorError> {
        let hue = check_component("hue", hue, MAX_HUE.into())?;
        let saturation = check_component("saturation", saturation, MAX_SATURATION.into())?;
        let lightness = check_component("lightness", lightness, MAX_LIGHTNESS.into())?;

        // the checks above keep every value within its target type
        Ok(Self::new(hue as u16, saturation as u8, lightness as u8))
    }

    pub fn with_hue(self, hue: u16) -> Self {
        Self { hue, ..self }
    }

    pub fn with_saturation(self, saturation: u8) -> Self {
        Self { saturation, ..self }
    }

    pub fn with_lightness(self, lightness: u8) -> Self {
        Self { lightness, ..self }
    }

    pub fn to_rgb(&self) -> RgbColor {
        hsl_to_rgb(*self)
    }

    pub fn to_hex(&self) -> String {
        to_hex(self.hue, self.saturation, self.lightness)
    }
}

fn check_component(component: &'static str, value: u32, max: u32) -> Result<u32, ColorError> {
    if value > max {
        return Err(ColorError::OutOfRange {
            component,
            value,
            max,
        });
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn to_normalized(&self) -> [f32; 3] {
        [self.red, self.green, self.blue].map(|channel| f32::from(channel) / 255.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

/// Parses `#rrggbb`, digits in either case.
pub fn parse_hex(hex: &str) -> Result<RgbColor, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());

    let digits = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(invalid)?;

    let channel =
        |range: Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());

    Ok(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Chroma,
    Secondary,
    Zero,
}

impl Channel {
    fn value(self, chroma: f64, secondary: f64) -> f64 {
        match self {
            Channel::Chroma => chroma,
            Channel::Secondary => secondary,
            Channel::Zero => 0.0,
        }
    }
}

// 60 degree wide slices of the hue circle, each lower bound inclusive and upper bound exclusive
struct Sector {
    lower: f64,
    upper: f64,
    permutation: [Channel; 3],
}

impl Sector {
    fn contains(&self, hue: f64) -> bool {
        self.lower <= hue && hue < self.upper
    }
}

const SECTORS: [Sector; 6] = {
    use Channel::{Chroma as C, Secondary as X, Zero as O};
    [
        Sector {
            lower: 0.0,
            upper: 60.0,
            permutation: [C, X, O],
        },
        Sector {
            lower: 60.0,
            upper: 120.0,
            permutation: [X, C, O],
        },
        Sector {
            lower: 120.0,
            upper: 180.0,
            permutation: [O, C, X],
        },
        Sector {
            lower: 180.0,
            upper: 240.0,
            permutation: [O, X, C],
        },
        Sector {
            lower: 240.0,
            upper: 300.0,
            permutation: [X, O, C],
        },
        Sector {
            lower: 300.0,
            upper: 360.0,
            permutation: [C, O, X],
        },
    ]
};

pub fn to_hex(hue: u16, saturation: u8, lightness: u8) -> String {
    hsl_to_rgb(HslColor::new(hue, saturation, lightness)).to_hex()
}

pub fn hsl_to_rgb(color: HslColor) -> RgbColor {
    let hue = f64::from(color.hue);
    let saturation = f64::from(color.saturation) / 100.0;
    let lightness = f64::from(color.lightness) / 100.0;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let offset = lightness - chroma / 2.0;

    // a hue of 360 matches no sector, only the offset is left (no wraparound to red)
    let pre_offset = SECTORS
        .iter()
        .find(|sector| sector.contains(hue))
        .map(|sector| {
            sector
                .permutation
                .map(|channel| channel.value(chroma, secondary))
        })
        .unwrap_or([0.0; 3]);

    let [red, green, blue] = pre_offset.map(|channel| to_channel_byte(channel + offset));
    RgbColor::new(red, green, blue)
}

fn to_channel_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_hex_color_code(code: &str) -> bool {
        code.len() == 7
            && code.starts_with('#')
            && code[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_black_and_white_do_not_depend_on_hue() {
        assert_eq!(to_hex(0, 0, 0), "#000000");
        assert_eq!(to_hex(0, 0, 100), "#ffffff");
        assert_eq!(to_hex(200, 100, 0), "#000000");
        assert_eq!(to_hex(200, 100, 100), "#ffffff");
    }

    #[test]
    fn test_primary_colors() {
        assert_eq!(to_hex(0, 100, 50), "#ff0000");
        assert_eq!(to_hex(120, 100, 50), "#00ff00");
        assert_eq!(to_hex(240, 100, 50), "#0000ff");
    }

    #[test]
    fn test_every_sector_uses_its_own_permutation() {
        assert_eq!(to_hex(30, 100, 50), "#ff8000");
        assert_eq!(to_hex(60, 100, 50), "#ffff00");
        assert_eq!(to_hex(90, 100, 50), "#80ff00");
        assert_eq!(to_hex(180, 100, 50), "#00ffff");
        assert_eq!(to_hex(210, 100, 50), "#0080ff");
        assert_eq!(to_hex(270, 100, 50), "#8000ff");
        assert_eq!(to_hex(300, 100, 50), "#ff00ff");
        assert_eq!(to_hex(330, 100, 50), "#ff0080");
    }

    #[test]
    fn test_hue_of_360_falls_through_all_sectors() {
        assert_eq!(to_hex(360, 100, 50), "#000000");
        assert_eq!(to_hex(360, 50, 50), "#404040");
        assert_eq!(to_hex(360, 0, 100), "#ffffff");
    }

    #[test]
    fn test_grey_is_rounded_half_up() {
        assert_eq!(to_hex(0, 0, 50), "#808080");
    }

    #[test]
    fn test_mixed_color() {
        assert_eq!(to_hex(200, 80, 40), "#1481b8");
        assert_eq!(
            hsl_to_rgb(HslColor::new(200, 80, 40)),
            RgbColor::new(0x14, 0x81, 0xb8)
        );
    }

    #[test]
    fn test_default_color_is_red() {
        assert_eq!(HslColor::default(), HslColor::new(0, 100, 50));
        assert_eq!(HslColor::default().to_hex(), "#ff0000");
    }

    #[test]
    fn test_with_functions_replace_only_one_component() {
        let color = HslColor::new(10, 20, 30);
        assert_eq!(color.with_hue(40), HslColor::new(40, 20, 30));
        assert_eq!(color.with_saturation(40), HslColor::new(10, 40, 30));
        assert_eq!(color.with_lightness(40), HslColor::new(10, 20, 40));
    }

    #[test]
    fn test_try_new_accepts_range_bounds() {
        assert_eq!(HslColor::try_new(0, 0, 0), Ok(HslColor::new(0, 0, 0)));
        assert_eq!(
            HslColor::try_new(360, 100, 100),
            Ok(HslColor::new(360, 100, 100))
        );
    }

    #[test]
    fn test_try_new_rejects_out_of_range_components() {
        assert_eq!(
            HslColor::try_new(361, 0, 0),
            Err(ColorError::OutOfRange {
                component: "hue",
                value: 361,
                max: 360
            })
        );
        assert_eq!(
            HslColor::try_new(0, 101, 0),
            Err(ColorError::OutOfRange {
                component: "saturation",
                value: 101,
                max: 100
            })
        );
        assert_eq!(
            HslColor::try_new(0, 0, 70000),
            Err(ColorError::OutOfRange {
                component: "lightness",
                value: 70000,
                max: 100
            })
        );
    }

    #[test]
    fn test_parse_hex_accepts_both_cases() {
        assert_eq!(parse_hex("#1481b8"), Ok(RgbColor::new(0x14, 0x81, 0xb8)));
        assert_eq!(parse_hex("#1481B8"), Ok(RgbColor::new(0x14, 0x81, 0xb8)));
        assert_eq!("#000000".parse::<RgbColor>(), Ok(RgbColor::new(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        for input in ["", "#", "1481b8", "#1481b", "#1481b8a", "#14 1b8", "#gg0000", "#+10000", "#ï0000"] {
            assert_eq!(
                parse_hex(input),
                Err(ColorError::InvalidHex(input.to_string())),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_rgb_color_is_serialized_as_hex_string() {
        let color = RgbColor::new(0x40, 0x88, 0xda);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#4088da\"");
        assert_eq!(
            serde_json::from_str::<RgbColor>("\"#4088DA\"").unwrap(),
            color
        );
        assert!(serde_json::from_str::<RgbColor>("\"blue\"").is_err());
    }

    #[test]
    fn test_normalized_channels() {
        assert_eq!(RgbColor::new(0, 255, 51).to_normalized(), [0.0, 1.0, 0.2]);
    }

    proptest! {
        #[test]
        fn hex_code_is_always_well_formed(
            hue in 0u16..MAX_HUE,
            saturation in 0u8..=MAX_SATURATION,
            lightness in 0u8..=MAX_LIGHTNESS,
        ) {
            let code = to_hex(hue, saturation, lightness);
            prop_assert!(is_hex_color_code(&code), "bad code {}", code);
        }

        #[test]
        fn conversion_is_repeatable(
            hue in 0u16..=MAX_HUE,
            saturation in 0u8..=MAX_SATURATION,
            lightness in 0u8..=MAX_LIGHTNESS,
        ) {
            prop_assert_eq!(
                to_hex(hue, saturation, lightness),
                to_hex(hue, saturation, lightness)
            );
        }

        #[test]
        fn channels_grow_with_lightness_up_to_the_midpoint(
            hue in 0u16..MAX_HUE,
            saturation in 0u8..=MAX_SATURATION,
        ) {
            let mut previous = hsl_to_rgb(HslColor::new(hue, saturation, 0));
            for lightness in 1..=50 {
                let current = hsl_to_rgb(HslColor::new(hue, saturation, lightness));
                prop_assert!(current.red >= previous.red, "red at lightness {}", lightness);
                prop_assert!(current.green >= previous.green, "green at lightness {}", lightness);
                prop_assert!(current.blue >= previous.blue, "blue at lightness {}", lightness);
                previous = current;
            }
        }

        #[test]
        fn hex_code_matches_rgb_channels(
            hue in 0u16..=MAX_HUE,
            saturation in 0u8..=MAX_SATURATION,
            lightness in 0u8..=MAX_LIGHTNESS,
        ) {
            let color = HslColor::new(hue, saturation, lightness);
            prop_assert_eq!(parse_hex(&color.to_hex()), Ok(color.to_rgb()));
        }
    }
}
