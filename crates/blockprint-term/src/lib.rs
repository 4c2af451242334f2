// SPDX-License-Identifier: MIT
//
// blockprint-term — draws blockprint's block row in a plain terminal.
//
// The core crate decides *what* changes; this crate keeps the blocks and
// puts them on screen:
//
//   Patch ─▶ BlockList::apply ─▶ paint ─▶ FrameBuffer ─▶ DiffRenderer ─▶ stdout
//
// Every frame is diffed against the last one, so a one-character edit costs
// a few dozen bytes of output, not a full repaint. No TUI framework is
// involved: escapes are written by hand in `ansi` and buffered in `output`.

pub mod ansi;
pub mod blocks;
pub mod buffer;
pub mod cell;
pub mod output;
pub mod paint;
pub mod render;
pub mod terminal;

pub use blocks::{ApplyStats, Block, BlockList};
pub use buffer::FrameBuffer;
pub use cell::{Attr, Cell, CellColor};
pub use paint::{PaintStats, paint};
pub use render::{DiffRenderer, RenderStats};
