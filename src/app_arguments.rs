// Copyright (C) Pavel Grebnev 2023-2025
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_model::HslColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EarlyExit {
    Help(String),
    Version(String),
    Error(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppArguments {
    pub custom_config_path: Option<String>,
    pub custom_title: Option<String>,
    pub initial_color: HslColor,
    pub early_exit: Option<EarlyExit>,
}

struct ArgumentDefinition {
    name: &'static str,
    syntax: &'static str,
    description: &'static str,
    number_of_args: usize,
}

const SUPPORTED_ARGS: &[ArgumentDefinition] = &[
    ArgumentDefinition {
        name: "--help",
        syntax: "--help",
        description: "Show this help",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--version",
        syntax: "--version",
        description: "Show the application version",
        number_of_args: 0,
    },
    ArgumentDefinition {
        name: "--config-path",
        syntax: "--config-path <path>",
        description: "Set custom path to the config file",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--title",
        syntax: "--title <title>",
        description: "Set custom window title",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--hue",
        syntax: "--hue <0-360>",
        description: "Set the initial hue",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--saturation",
        syntax: "--saturation <0-100>",
        description: "Set the initial saturation",
        number_of_args: 1,
    },
    ArgumentDefinition {
        name: "--lightness",
        syntax: "--lightness <0-100>",
        description: "Set the initial lightness",
        number_of_args: 1,
    },
];

pub fn get_app_arguments() -> AppArguments {
    let args: Vec<String> = std::env::args().collect();
    parse_app_arguments(&args)
}

fn with_early_exit(early_exit: EarlyExit) -> AppArguments {
    AppArguments {
        early_exit: Some(early_exit),
        ..AppArguments::default()
    }
}

fn get_help_text() -> String {
    let max_syntax_len = SUPPORTED_ARGS
        .iter()
        .map(|arg| arg.syntax.len())
        .max()
        .unwrap_or_default();

    let mut help_text = "Supported arguments:\n".to_string();
    for arg in SUPPORTED_ARGS {
        help_text.push_str(&format!(
            "{:width$} {}\n",
            arg.syntax,
            arg.description,
            width = max_syntax_len
        ));
    }
    help_text.push('\n');
    help_text.push_str("Example: hsl-picker --hue 200 --saturation 80 --lightness 40");
    help_text
}

fn parse_number(arg: &str, value: &str) -> Result<u32, EarlyExit> {
    value.parse::<u32>().map_err(|_| {
        EarlyExit::Error(format!(
            "'{}' is not a valid number for {}\nUse --help to see the list of supported arguments",
            value, arg
        ))
    })
}

/// `args` includes the executable name at index 0, as returned by `std::env::args`.
pub fn parse_app_arguments(args: &[String]) -> AppArguments {
    let mut custom_config_path = None;
    let mut custom_title = None;
    let default_color = HslColor::default();
    let mut hue = u32::from(default_color.hue);
    let mut saturation = u32::from(default_color.saturation);
    let mut lightness = u32::from(default_color.lightness);

    let mut i: usize = 1;
    while i < args.len() {
        let arg = &args[i];

        let found_arg = if arg.starts_with("--") {
            SUPPORTED_ARGS
                .iter()
                .find(|supported_arg| supported_arg.name == arg)
        } else {
            None
        };

        let Some(found_arg) = found_arg else {
            return with_early_exit(EarlyExit::Error(format!(
                "Unknown argument: {}\nUse --help to see the list of supported arguments",
                arg
            )));
        };

        if found_arg.number_of_args > 0 && i + found_arg.number_of_args >= args.len() {
            return with_early_exit(EarlyExit::Error(format!(
                "Not enough arguments for {}\nUse --help to see the list of supported arguments",
                arg
            )));
        }

        let value = args.get(i + 1).map(String::as_str).unwrap_or_default();
        let parsed = match found_arg.name {
            "--help" => return with_early_exit(EarlyExit::Help(get_help_text())),
            "--version" => {
                return with_early_exit(EarlyExit::Version(
                    env!("CARGO_PKG_VERSION").to_string(),
                ))
            }
            "--config-path" => {
                custom_config_path = Some(value.to_string());
                Ok(())
            }
            "--title" => {
                custom_title = Some(value.to_string());
                Ok(())
            }
            "--hue" => parse_number(arg, value).map(|number| hue = number),
            "--saturation" => parse_number(arg, value).map(|number| saturation = number),
            "--lightness" => parse_number(arg, value).map(|number| lightness = number),
            _ => Ok(()),
        };

        if let Err(early_exit) = parsed {
            return with_early_exit(early_exit);
        }

        i += 1 + found_arg.number_of_args;
    }

    let initial_color = match HslColor::try_new(hue, saturation, lightness) {
        Ok(color) => color,
        Err(err) => {
            return with_early_exit(EarlyExit::Error(format!(
                "Invalid initial color: {}\nUse --help to see the list of supported arguments",
                err
            )))
        }
    };

    AppArguments {
        custom_config_path,
        custom_title,
        initial_color,
        early_exit: None,
    }
}
