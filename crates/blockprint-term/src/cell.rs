// SPDX-License-Identifier: MIT
//
// Cell — one character position on screen.
//
// Blocks are painted into a grid of these; the renderer diffs grids cell by
// cell. A cell is small and `Copy` so whole rows compare with one slice
// equality.
//
// Wide glyphs (CJK, most emoji) take two columns. The first cell holds the
// glyph; the second is a continuation cell (`ch == '\0'`) that carries only
// colors, so block backgrounds fill correctly underneath.

use std::fmt;

use blockprint_core::BlockColor;

// ─── Attributes ──────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// SGR text attributes. Combine with `|`:
    ///
    /// ```
    /// use blockprint_term::cell::Attr;
    ///
    /// let style = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1.
        const BOLD      = 1 << 0;
        /// SGR 2.
        const DIM       = 1 << 1;
        /// SGR 4.
        const UNDERLINE = 1 << 2;
        /// SGR 7.
        const INVERSE   = 1 << 3;
    }
}

// ─── CellColor ───────────────────────────────────────────────────────────────

/// A resolved terminal color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// 24-bit true color.
    Rgb(u8, u8, u8),
    /// Whatever the terminal's own theme says.
    #[default]
    Default,
}

impl CellColor {
    /// Pure black.
    pub const BLACK: Self = Self::Rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::Rgb(255, 255, 255);

    /// Whether this is the terminal default.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<BlockColor> for CellColor {
    fn from(color: BlockColor) -> Self {
        let (r, g, b) = color.rgb();
        Self::Rgb(r, g, b)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Default => write!(f, "default"),
        }
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph. `'\0'` marks the second column of a wide glyph.
    pub ch: char,
    /// Glyph color.
    pub fg: CellColor,
    /// Background color.
    pub bg: CellColor,
    /// SGR attributes.
    pub attrs: Attr,
}

const CONTINUATION: char = '\0';

impl Cell {
    /// A space with default colors and no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: CellColor::Default,
        bg: CellColor::Default,
        attrs: Attr::empty(),
    };

    /// A glyph with default styling.
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self { ch, ..Self::EMPTY }
    }

    /// A fully styled glyph.
    #[inline]
    #[must_use]
    pub const fn styled(ch: char, fg: CellColor, bg: CellColor, attrs: Attr) -> Self {
        Self { ch, fg, bg, attrs }
    }

    /// The trailing half of a wide glyph, sharing its colors.
    #[inline]
    #[must_use]
    pub const fn continuation(fg: CellColor, bg: CellColor, attrs: Attr) -> Self {
        Self {
            ch: CONTINUATION,
            fg,
            bg,
            attrs,
        }
    }

    /// Whether this is the trailing half of a wide glyph.
    #[inline]
    #[must_use]
    pub const fn is_continuation(self) -> bool {
        self.ch == CONTINUATION
    }

    /// The glyph, or `None` for a continuation cell.
    #[inline]
    #[must_use]
    pub const fn character(self) -> Option<char> {
        if self.is_continuation() {
            None
        } else {
            Some(self.ch)
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_continuation() {
            return write!(f, "Cell(continuation, bg={:?})", self.bg);
        }
        write!(f, "Cell({:?}", self.ch)?;
        if !self.fg.is_default() {
            write!(f, ", fg={:?}", self.fg)?;
        }
        if !self.bg.is_default() {
            write!(f, ", bg={:?}", self.bg)?;
        }
        if !self.attrs.is_empty() {
            write!(f, ", {:?}", self.attrs)?;
        }
        write!(f, ")")
    }
}
