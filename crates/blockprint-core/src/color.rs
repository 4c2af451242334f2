// SPDX-License-Identifier: MIT
//
// Per-character colors: a stable 24-bit color for each character value.
//
// Every block gets its background from its character alone, so the same
// letter looks the same wherever it appears and however often it moves.
// The derivation is a 31-multiplier rolling hash over the UTF-16 code units
// of the character followed by a fixed suffix, truncated to 24 bits:
//
//   h = 0
//   for each code unit c:  h = c + ((h << 5) - h)      (i32, wrapping)
//   color = h & 0x00FF_FFFF
//
// The arithmetic must wrap exactly like a 32-bit signed integer; the low 24
// bits are what the user sees. The suffix spreads single characters across
// the color space (a bare 'A' would hash to 0x41, nearly black).
//
// Astral characters (emoji, rare CJK) contribute both surrogate halves.

use std::fmt;

/// Appended to the character before hashing.
const HASH_SUFFIX: &str = "hashpadding";

/// Mask selecting the low 24 bits.
const RGB_MASK: u32 = 0x00FF_FFFF;

/// A block background color: 24 bits, `0xRRGGBB`.
///
/// Displays as six uppercase hex digits with no `#`:
///
/// ```
/// use blockprint_core::color::{color_of, BlockColor};
///
/// assert_eq!(color_of('A').to_string(), "FFCC62");
/// assert_eq!(BlockColor::new(0x0000AB).to_string(), "0000AB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockColor(u32);

impl BlockColor {
    /// Wrap a raw value. Bits above the low 24 are discarded.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & RGB_MASK)
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Split into 8-bit red, green, blue channels.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // each channel is masked to 8 bits
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// WCAG 2.1 relative luminance in `[0.0, 1.0]`.
    ///
    /// Used by renderers to decide between a dark or light glyph on top of
    /// the block.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let (r, g, b) = self.rgb();
        let r = srgb_to_linear(r);
        let g = srgb_to_linear(g);
        let b = srgb_to_linear(b);
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// Whether dark text reads better than light text on this color.
    ///
    /// Compares the contrast ratio against black and against white and
    /// picks the larger.
    #[must_use]
    pub fn prefers_dark_text(self) -> bool {
        let l = self.luminance();
        let against_black = (l + 0.05) / 0.05;
        let against_white = 1.05 / (l + 0.05);
        against_black >= against_white
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// The color for one character value.
///
/// Same character, same color, every call.
#[must_use]
pub fn color_of(ch: char) -> BlockColor {
    let mut buf = [0u16; 2];
    let units = ch
        .encode_utf16(&mut buf)
        .iter()
        .copied()
        .chain(HASH_SUFFIX.encode_utf16());
    BlockColor::new(as_bits(string_hash(units)))
}

/// Reinterpret the signed hash as its two's-complement bit pattern.
#[inline]
#[allow(clippy::cast_sign_loss)]
const fn as_bits(h: i32) -> u32 {
    h as u32
}

/// The 31-multiplier rolling hash with 32-bit signed wraparound.
fn string_hash(units: impl Iterator<Item = u16>) -> i32 {
    units.fold(0i32, |h, c| {
        i32::from(c).wrapping_add(h.wrapping_shl(5).wrapping_sub(h))
    })
}

#[inline]
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Hash ────────────────────────────────────────────────────────

    #[test]
    fn known_colors() {
        let cases = [
            ('A', "FFCC62"),
            ('H', "DB51FB"),
            ('E', "C661DE"),
            ('L', "A1E777"),
            ('O', "B6D794"),
            ('P', "687CF3"),
            ('Z', "58F2A9"),
            ('0', "33D113"),
            ('a', "347842"),
        ];
        for (ch, hex) in cases {
            assert_eq!(color_of(ch).to_string(), hex, "color of {ch:?}");
        }
    }

    #[test]
    fn wide_and_astral_chars() {
        assert_eq!(color_of('中').to_string(), "81D2F6");
        // Two UTF-16 code units; the leading zero is kept.
        assert_eq!(color_of('🔥').to_string(), "0A1DBB");
    }

    #[test]
    fn hash_wraps_like_i32() {
        // Long enough to overflow many times over.
        let h = string_hash("zzzzzzzzzzzzzzzzzzzz".encode_utf16());
        let mut expected: u32 = 0;
        for c in "zzzzzzzzzzzzzzzzzzzz".encode_utf16() {
            expected = expected.wrapping_mul(31).wrapping_add(u32::from(c));
        }
        assert_eq!(as_bits(h), expected);
    }

    #[test]
    fn empty_hash_is_zero() {
        assert_eq!(string_hash(std::iter::empty()), 0);
    }

    #[test]
    fn same_char_same_color() {
        for ch in ['Q', 'é', '中', '🔥', '!'] {
            assert_eq!(color_of(ch), color_of(ch));
        }
    }

    #[test]
    fn always_six_uppercase_hex_digits() {
        for ch in (' '..='~').chain(['é', 'Ω', '中', '🔥']) {
            let s = color_of(ch).to_string();
            assert_eq!(s.len(), 6, "{ch:?} -> {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
                "{ch:?} -> {s}"
            );
        }
    }

    // ── BlockColor ──────────────────────────────────────────────────

    #[test]
    fn new_masks_high_bits() {
        assert_eq!(BlockColor::new(0xFF12_3456).value(), 0x12_3456);
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(BlockColor::new(0).to_string(), "000000");
        assert_eq!(BlockColor::new(0xF).to_string(), "00000F");
    }

    #[test]
    fn rgb_channels() {
        assert_eq!(BlockColor::new(0xFFCC62).rgb(), (0xFF, 0xCC, 0x62));
    }

    #[test]
    fn luminance_extremes() {
        assert!(BlockColor::new(0x000000).luminance().abs() < 1e-9);
        assert!((BlockColor::new(0xFFFFFF).luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn text_contrast_choice() {
        assert!(BlockColor::new(0xFFFFFF).prefers_dark_text());
        assert!(BlockColor::new(0xFFCC62).prefers_dark_text());
        assert!(!BlockColor::new(0x000000).prefers_dark_text());
        assert!(!BlockColor::new(0x1A1A80).prefers_dark_text());
    }
}
