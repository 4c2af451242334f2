// SPDX-License-Identifier: MIT
//
// Command-line settings.
//
//   blockprint [--order|-o MODE] [--layout|-l MODE] [--width|-w COLS]
//              [--height|-H ROWS] [TEXT...]
//
// Flags take their value either as the next argument or after `=`.
// Everything that is not a flag is joined with single spaces into the
// initial text; `--` ends flag parsing.

use blockprint_core::{DisplayMode, OrderMode};
use blockprint_term::terminal::{self, Size};
use thiserror::Error;

pub const USAGE: &str = "\
usage: blockprint [OPTIONS] [TEXT...]

Prints TEXT as a row of colored blocks, then reads one line at a time
from stdin and updates the blocks with the smallest possible edit.

options:
  -o, --order <direct|reverse|random>   character order (default: direct)
  -l, --layout <row|column>             block layout (default: row)
  -w, --width <COLS>                    frame width (default: terminal width or 80)
  -H, --height <ROWS>                   frame height (default: terminal height or 24)
  -h, --help                            show this message

stdin commands:
  <text>                                display <text>
  :set order=<mode> layout=<mode>       change modes (o= and l= also work)
  :set | :set all                       show current settings
  :set order? | :set layout?            show one setting
  :clear                                display nothing
  :q | :quit                            exit";

/// Problems with the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("option `{0}` needs a value")]
    MissingValue(String),

    #[error("option `{flag}`: `{value}` is not a positive number")]
    InvalidNumber { flag: String, value: String },

    #[error(transparent)]
    InvalidMode(#[from] blockprint_core::Error),
}

/// Resolved command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub order: OrderMode,
    pub layout: Option<DisplayMode>,
    pub width: Option<u16>,
    pub height: Option<u16>,
    /// Initial text, if any words were given.
    pub text: Option<String>,
    /// `--help` was requested; nothing else matters.
    pub help: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: OrderMode::Direct,
            layout: None,
            width: None,
            height: None,
            text: None,
            help: false,
        }
    }
}

impl Settings {
    /// Parse arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] for unknown flags, missing or malformed
    /// values, and unrecognized mode names.
    pub fn from_args<I>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Self::default();
        let mut words: Vec<String> = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--" {
                words.extend(args.by_ref());
                break;
            }
            if !arg.starts_with('-') || arg == "-" {
                words.push(arg);
                continue;
            }

            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            if matches!(flag.as_str(), "-h" | "--help") {
                settings.help = true;
                continue;
            }

            let Some(key) = Flag::lookup(&flag) else {
                return Err(SettingsError::UnknownFlag(flag));
            };
            let value = inline
                .or_else(|| args.next())
                .ok_or_else(|| SettingsError::MissingValue(flag.clone()))?;

            match key {
                Flag::Order => settings.order = value.parse()?,
                Flag::Layout => settings.layout = Some(value.parse()?),
                Flag::Width => settings.width = Some(parse_dimension(&flag, &value)?),
                Flag::Height => settings.height = Some(parse_dimension(&flag, &value)?),
            }
        }

        if !words.is_empty() {
            settings.text = Some(words.join(" "));
        }
        Ok(settings)
    }

    /// Frame size: explicit flags first, then the terminal, then 80×24.
    #[must_use]
    pub fn frame_size(&self) -> Size {
        self.frame_size_with(terminal::get_size())
    }

    fn frame_size_with(&self, detected: Option<Size>) -> Size {
        let base = detected.unwrap_or(Size::FALLBACK);
        Size {
            cols: self.width.unwrap_or(base.cols),
            rows: self.height.unwrap_or(base.rows),
        }
    }
}

#[derive(Clone, Copy)]
enum Flag {
    Order,
    Layout,
    Width,
    Height,
}

impl Flag {
    fn lookup(flag: &str) -> Option<Self> {
        match flag {
            "-o" | "--order" => Some(Self::Order),
            "-l" | "--layout" => Some(Self::Layout),
            "-w" | "--width" => Some(Self::Width),
            "-H" | "--height" => Some(Self::Height),
            _ => None,
        }
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<u16, SettingsError> {
    value
        .parse::<u16>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| SettingsError::InvalidNumber {
            flag: flag.to_string(),
            value: value.to_string(),
        })
}
