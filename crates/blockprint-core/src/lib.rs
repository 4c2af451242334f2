// SPDX-License-Identifier: MIT
//
// blockprint-core — the incremental-update engine behind blockprint.
//
// Text becomes a row of colored blocks, one per character. When the text
// changes, the blocks on screen are not rebuilt: the engine works out the
// smallest set of replace/add/delete steps that turns the old row into the
// new one, and hands those to whatever is drawing the blocks.
//
//   raw text ─▶ transform ─▶ Sequence ─▶ patch::diff ─▶ Patch ─▶ renderer
//                 │                          │
//          normalize + reorder        levenshtein + color
//
// Everything here is pure and synchronous. `DisplayState` holds the only
// mutable state: the sequence currently on screen and the active modes.

pub mod color;
pub mod display;
pub mod error;
pub mod levenshtein;
pub mod mode;
pub mod patch;
pub mod sequence;
pub mod transform;

pub use color::{BlockColor, color_of};
pub use display::DisplayState;
pub use error::{Error, Result};
pub use levenshtein::{EditOp, distance};
pub use mode::{DisplayMode, OrderMode};
pub use patch::{Directive, Patch, PatchStats, diff};
pub use sequence::Sequence;
pub use transform::{normalize, reorder, reorder_with};
