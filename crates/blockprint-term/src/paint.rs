// SPDX-License-Identifier: MIT
//
// Block layout — paints a BlockList into a FrameBuffer.
//
// Each block is a one-row tile: a padding column, the glyph, a padding
// column, all on the block's color. The glyph is bold, black on light
// colors and white on dark ones. A wide glyph makes a four-column tile.
//
//   row      ░H░ ░E░ ░L░ ░L░      column   ░H░
//            ░O░                           ░E░
//                                          ░L░
//
// Row layout leaves one blank column between tiles and wraps at the frame
// width. Anything past the bottom edge is clipped and counted.

use blockprint_core::DisplayMode;
use unicode_width::UnicodeWidthChar;

use crate::blocks::{Block, BlockList};
use crate::buffer::FrameBuffer;
use crate::cell::{Attr, Cell, CellColor};

/// Blank columns between tiles in row layout.
const GAP: u16 = 1;

/// Shown for glyphs with no printable width of their own.
const PLACEHOLDER: char = '\u{FFFD}';

/// What one [`paint`] call managed to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    /// Tiles drawn.
    pub painted: usize,
    /// Tiles that did not fit the frame.
    pub clipped: usize,
    /// Rows holding at least one tile.
    pub rows_used: u16,
}

/// Clear `frame` and lay `blocks` out in it.
pub fn paint(blocks: &BlockList, layout: DisplayMode, frame: &mut FrameBuffer) -> PaintStats {
    frame.clear();
    let mut stats = PaintStats::default();

    let (mut x, mut y) = (0u16, 0u16);
    for block in blocks {
        let tile = Tile::of(block);

        if layout == DisplayMode::Row && x > 0 && x.saturating_add(tile.width) > frame.width() {
            x = 0;
            y = y.saturating_add(1);
        }

        if y >= frame.height() || tile.width > frame.width() {
            stats.clipped += 1;
        } else {
            tile.draw(frame, x, y);
            stats.painted += 1;
            stats.rows_used = y + 1;
        }

        match layout {
            DisplayMode::Row => x = x.saturating_add(tile.width + GAP),
            DisplayMode::Column => y = y.saturating_add(1),
        }
    }

    if stats.clipped > 0 {
        log::warn!(
            "{} of {} blocks do not fit a {}x{} frame",
            stats.clipped,
            blocks.len(),
            frame.width(),
            frame.height()
        );
    }
    stats
}

struct Tile {
    glyph: char,
    glyph_width: u16,
    width: u16,
    fg: CellColor,
    bg: CellColor,
}

impl Tile {
    fn of(block: &Block) -> Self {
        let (glyph, glyph_width) = match block.symbol.width() {
            Some(2) => (block.symbol, 2),
            Some(1) => (block.symbol, 1),
            _ => (PLACEHOLDER, 1),
        };
        let fg = if block.color.prefers_dark_text() {
            CellColor::BLACK
        } else {
            CellColor::WHITE
        };
        Self {
            glyph,
            glyph_width,
            width: glyph_width + 2,
            fg,
            bg: CellColor::from(block.color),
        }
    }

    fn draw(&self, frame: &mut FrameBuffer, x: u16, y: u16) {
        let pad = Cell::styled(' ', self.fg, self.bg, Attr::BOLD);
        frame.set(x, y, pad);
        frame.set(x + 1, y, Cell::styled(self.glyph, self.fg, self.bg, Attr::BOLD));
        if self.glyph_width == 2 {
            frame.set(x + 2, y, Cell::continuation(self.fg, self.bg, Attr::BOLD));
        }
        frame.set(x + 1 + self.glyph_width, y, pad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockprint_core::{Sequence, color_of, diff};
    use pretty_assertions::assert_eq;

    fn blocks_of(text: &str) -> BlockList {
        let mut list = BlockList::new();
        list.apply(&diff(&Sequence::from(text), &Sequence::new()).unwrap())
            .unwrap();
        list
    }

    fn glyphs(frame: &FrameBuffer) -> Vec<String> {
        (0..frame.height())
            .map(|y| {
                frame
                    .row(y)
                    .unwrap()
                    .iter()
                    .filter_map(|c| c.character())
                    .collect()
            })
            .collect()
    }

    // ── Row layout ──────────────────────────────────────────────────

    #[test]
    fn row_layout_spaces_tiles() {
        let mut frame = FrameBuffer::new(12, 1);
        let stats = paint(&blocks_of("HI"), DisplayMode::Row, &mut frame);

        assert_eq!(glyphs(&frame), vec![" H   I      "]);
        assert_eq!(stats.painted, 2);
        assert_eq!(stats.rows_used, 1);

        let gap = frame.get(3, 0).unwrap();
        assert!(gap.bg.is_default());
        assert_eq!(frame.get(4, 0).unwrap().bg, CellColor::from(color_of('I')));
    }

    #[test]
    fn row_layout_wraps_at_width() {
        // Two tiles plus a gap need 7 columns; the third wraps.
        let mut frame = FrameBuffer::new(8, 2);
        let stats = paint(&blocks_of("ABC"), DisplayMode::Row, &mut frame);

        assert_eq!(glyphs(&frame), vec![" A   B  ", " C      "]);
        assert_eq!(stats.rows_used, 2);
        assert_eq!(stats.clipped, 0);
    }

    #[test]
    fn overflow_is_clipped() {
        let mut frame = FrameBuffer::new(4, 1);
        let stats = paint(&blocks_of("XYZ"), DisplayMode::Row, &mut frame);

        assert_eq!(stats.painted, 1);
        assert_eq!(stats.clipped, 2);
        assert_eq!(glyphs(&frame), vec![" X  "]);
    }

    // ── Column layout ───────────────────────────────────────────────

    #[test]
    fn column_layout_stacks_tiles() {
        let mut frame = FrameBuffer::new(5, 4);
        let stats = paint(&blocks_of("HEY"), DisplayMode::Column, &mut frame);

        assert_eq!(glyphs(&frame), vec![" H   ", " E   ", " Y   ", "     "]);
        assert_eq!(stats.rows_used, 3);
    }

    #[test]
    fn column_layout_clips_below_the_frame() {
        let mut frame = FrameBuffer::new(3, 2);
        let stats = paint(&blocks_of("ABC"), DisplayMode::Column, &mut frame);
        assert_eq!(stats.painted, 2);
        assert_eq!(stats.clipped, 1);
    }

    // ── Tiles ───────────────────────────────────────────────────────

    #[test]
    fn tile_text_contrasts_with_background() {
        let mut frame = FrameBuffer::new(8, 1);
        // A is light (FFCC62), 🔥 is dark (0A1DBB).
        paint(&blocks_of("A🔥"), DisplayMode::Row, &mut frame);

        let light = frame.get(1, 0).unwrap();
        assert_eq!(light.fg, CellColor::BLACK);
        assert_eq!(light.attrs, Attr::BOLD);

        let dark = frame.get(5, 0).unwrap();
        assert_eq!(dark.character(), Some('🔥'));
        assert_eq!(dark.fg, CellColor::WHITE);
    }

    #[test]
    fn wide_glyph_gets_four_columns() {
        let mut frame = FrameBuffer::new(10, 1);
        paint(&blocks_of("中A"), DisplayMode::Row, &mut frame);

        let bg = CellColor::from(color_of('中'));
        assert!((0..4).all(|x| frame.get(x, 0).unwrap().bg == bg));
        assert!(frame.get(2, 0).unwrap().is_continuation());
        assert!(frame.get(4, 0).unwrap().bg.is_default());
        assert_eq!(frame.get(6, 0).unwrap().character(), Some('A'));
    }

    #[test]
    fn repaint_clears_old_tiles() {
        let mut frame = FrameBuffer::new(8, 1);
        paint(&blocks_of("AB"), DisplayMode::Row, &mut frame);
        paint(&BlockList::new(), DisplayMode::Row, &mut frame);
        assert_eq!(frame, FrameBuffer::new(8, 1));
    }
}
