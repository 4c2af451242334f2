// SPDX-License-Identifier: MIT
//
// Stdin line parsing.
//
// A line that starts with `:` is a command; anything else is new text for
// the display. `::` escapes a literal leading colon.

use blockprint_core::{DisplayMode, OrderMode};

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display this text.
    Text(String),
    /// `:set ...`
    Set(Vec<SetDirective>),
    /// `:clear`, display nothing.
    Clear,
    /// `:q` / `:quit`
    Quit,
    /// Anything else after `:`.
    Unknown(String),
}

/// One argument of `:set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `name=value`
    Assign(String, String),
    /// `name?` or a bare `name`
    Query(String),
    /// `:set` with no arguments, or `:set all`
    ShowAll,
}

/// A `:set` name resolved to the setting it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingName {
    Order,
    Layout,
}

impl SettingName {
    /// Accept the full name or its one-letter abbreviation.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "order" | "o" => Some(Self::Order),
            "layout" | "l" => Some(Self::Layout),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Layout => "layout",
        }
    }
}

/// A validated `:set` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Order(OrderMode),
    Layout(DisplayMode),
}

impl Assignment {
    /// Resolve `name=value`, or describe why it cannot be.
    ///
    /// # Errors
    ///
    /// Returns a message for an unknown setting name or mode.
    pub fn resolve(name: &str, value: &str) -> Result<Self, String> {
        match SettingName::lookup(name) {
            Some(SettingName::Order) => value.parse().map(Self::Order).map_err(|e| e.to_string()),
            Some(SettingName::Layout) => value.parse().map(Self::Layout).map_err(|e| e.to_string()),
            None => Err(format!("unknown setting `{name}`")),
        }
    }
}

/// Parse one line of input. The trailing newline must already be gone.
#[must_use]
pub fn parse_line(line: &str) -> Command {
    if let Some(literal) = line.strip_prefix("::") {
        return Command::Text(format!(":{literal}"));
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Text(line.to_string());
    };

    let rest = rest.trim();
    let (cmd, arg) = rest
        .find(char::is_whitespace)
        .map_or((rest, ""), |pos| (&rest[..pos], rest[pos..].trim_start()));

    match cmd {
        "set" | "se" => Command::Set(parse_set(arg)),
        "clear" => Command::Clear,
        "q" | "quit" => Command::Quit,
        _ => Command::Unknown(rest.to_string()),
    }
}

/// Parse the arguments of `:set`.
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowAll];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }
    let name = arg.strip_suffix('?').unwrap_or(arg);
    SetDirective::Query(name.to_string())
}
