// SPDX-License-Identifier: MIT
//
// Order and display modes — the two enumerated settings a display reacts to.
//
// Both arrive as text from the outside world (command-line flags, `:set`
// directives) and are parsed exactly once at the boundary. An unknown name
// is a configuration error and fails immediately; past the parser the rest
// of the engine only ever sees a valid enum.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ─── OrderMode ───────────────────────────────────────────────────────────────

/// The permutation applied to normalized text before it is diffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderMode {
    /// Characters in input order.
    Direct,
    /// Characters in reverse input order.
    Reverse,
    /// A fresh uniformly random permutation on every run.
    Random,
}

impl OrderMode {
    /// All modes, in the order a settings menu lists them.
    pub const ALL: [Self; 3] = [Self::Direct, Self::Reverse, Self::Random];

    /// The canonical lowercase name (`"direct"`, `"reverse"`, `"random"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Reverse => "reverse",
            Self::Random => "random",
        }
    }
}

impl FromStr for OrderMode {
    type Err = Error;

    /// Parse a mode name. Surrounding whitespace is ignored, case is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOrderMode`] for anything but the three names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "direct" => Ok(Self::Direct),
            "reverse" => Ok(Self::Reverse),
            "random" => Ok(Self::Random),
            other => Err(Error::UnknownOrderMode(other.to_string())),
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── DisplayMode ─────────────────────────────────────────────────────────────

/// How blocks are laid out. Cosmetic only: never changes sequence data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Blocks flow left to right.
    #[default]
    Row,
    /// Blocks stack top to bottom.
    Column,
}

impl DisplayMode {
    /// The canonical lowercase name (`"row"`, `"column"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    /// Whether this is the column layout.
    #[inline]
    #[must_use]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column)
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    /// # Errors
    ///
    /// Returns [`Error::UnknownDisplayMode`] for anything but `row`/`column`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "row" => Ok(Self::Row),
            "column" => Ok(Self::Column),
            other => Err(Error::UnknownDisplayMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_names_parse() {
        for mode in OrderMode::ALL {
            assert_eq!(mode.name().parse::<OrderMode>(), Ok(mode));
        }
    }

    #[test]
    fn order_parse_trims() {
        assert_eq!(" reverse\n".parse::<OrderMode>(), Ok(OrderMode::Reverse));
    }

    #[test]
    fn order_parse_is_case_sensitive() {
        assert_eq!(
            "Random".parse::<OrderMode>(),
            Err(Error::UnknownOrderMode("Random".into()))
        );
    }

    #[test]
    fn order_unknown_fails_fast() {
        assert!(matches!(
            "sideways".parse::<OrderMode>(),
            Err(Error::UnknownOrderMode(name)) if name == "sideways"
        ));
    }

    #[test]
    fn order_display_matches_name() {
        assert_eq!(OrderMode::Random.to_string(), "random");
    }

    #[test]
    fn display_mode_parse() {
        assert_eq!("row".parse::<DisplayMode>(), Ok(DisplayMode::Row));
        assert_eq!("column".parse::<DisplayMode>(), Ok(DisplayMode::Column));
        assert_eq!(
            "grid".parse::<DisplayMode>(),
            Err(Error::UnknownDisplayMode("grid".into()))
        );
    }

    #[test]
    fn display_mode_default_is_row() {
        assert_eq!(DisplayMode::default(), DisplayMode::Row);
        assert!(!DisplayMode::Row.is_column());
        assert!(DisplayMode::Column.is_column());
    }
}
