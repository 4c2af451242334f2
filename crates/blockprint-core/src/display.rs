// SPDX-License-Identifier: MIT
//
// DisplayState — per-instance state for one row of blocks.
//
// Three independent signals reach a display:
//
//   set_text(raw)     → normalize → reorder(order) → diff against cache
//   set_order(mode)   → same pipeline, re-run from the cached raw text
//   set_layout(mode)  → cosmetic flag only, never diffs
//
// Raw text is an input and is stored as soon as it arrives. The rendered
// sequence and the order mode change only when a pipeline run succeeds; a
// failed run returns the error and leaves them exactly as they were, so the
// renderer and the cache never drift apart.

use log::debug;

use crate::error::{Error, Result};
use crate::mode::{DisplayMode, OrderMode};
use crate::patch::{Patch, diff};
use crate::sequence::Sequence;
use crate::transform::{normalize, reorder};

/// The incremental-update state machine for one display.
///
/// ```
/// use blockprint_core::{DisplayState, OrderMode, Patch};
///
/// let mut display = DisplayState::new(Some(OrderMode::Reverse), None);
/// let patch = display.set_text("ab c").unwrap();
/// assert!(matches!(patch, Patch::AppendAll(_)));
/// assert_eq!(display.sequence().to_string(), "CBA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    text: Option<String>,
    rendered: Sequence,
    order: Option<OrderMode>,
    layout: Option<DisplayMode>,
}

impl DisplayState {
    /// A display with nothing rendered and the given initial settings.
    ///
    /// Either setting may be absent, like an element created without that
    /// attribute. Text cannot be rendered until an order mode is set.
    #[must_use]
    pub const fn new(order: Option<OrderMode>, layout: Option<DisplayMode>) -> Self {
        Self {
            text: None,
            rendered: Sequence::new(),
            order,
            layout,
        }
    }

    // ─── Signals ─────────────────────────────────────────────────────────

    /// New raw text arrived.
    ///
    /// The raw text is kept even when it cannot be rendered yet, so a later
    /// [`set_order`](Self::set_order) picks it up.
    ///
    /// # Errors
    ///
    /// [`Error::OrderModeUnset`] if no order mode has been configured;
    /// [`Error::Backtrace`] on an internal differ failure.
    pub fn set_text(&mut self, raw: &str) -> Result<Patch> {
        self.text = Some(raw.to_string());
        let order = self.order.ok_or(Error::OrderModeUnset)?;
        let (next, patch) = self.run(raw, order)?;
        self.rendered = next;
        Ok(patch)
    }

    /// The order mode changed.
    ///
    /// Returns `Ok(None)` if `mode` is already the current mode. Otherwise
    /// the cached raw text is re-derived from scratch under the new mode and
    /// diffed against what is currently rendered.
    ///
    /// # Errors
    ///
    /// [`Error::Backtrace`] on an internal differ failure; the mode is not
    /// changed in that case.
    pub fn set_order(&mut self, mode: OrderMode) -> Result<Option<Patch>> {
        if self.order == Some(mode) {
            return Ok(None);
        }
        let raw = self.text.as_deref().unwrap_or_default();
        let (next, patch) = self.run(raw, mode)?;
        self.order = Some(mode);
        self.rendered = next;
        Ok(Some(patch))
    }

    /// The layout changed. Returns whether the cosmetic flag flipped.
    pub fn set_layout(&mut self, mode: DisplayMode) -> bool {
        if self.layout == Some(mode) {
            return false;
        }
        debug!("layout {} -> {mode}", self.layout_or_default());
        self.layout = Some(mode);
        true
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The sequence currently on screen.
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.rendered
    }

    /// The last raw text received, if any.
    #[inline]
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The configured order mode.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> Option<OrderMode> {
        self.order
    }

    /// The configured layout.
    #[inline]
    #[must_use]
    pub const fn layout(&self) -> Option<DisplayMode> {
        self.layout
    }

    /// Whether blocks should be stacked in a column. An unset layout renders
    /// as a row.
    #[inline]
    #[must_use]
    pub fn column_layout(&self) -> bool {
        self.layout_or_default().is_column()
    }

    fn layout_or_default(&self) -> DisplayMode {
        self.layout.unwrap_or_default()
    }

    // ─── Pipeline ────────────────────────────────────────────────────────

    /// Run the pure pipeline without touching `self`.
    fn run(&self, raw: &str, order: OrderMode) -> Result<(Sequence, Patch)> {
        let next = reorder(normalize(raw), order);
        let patch = diff(&next, &self.rendered)?;
        let stats = patch.stats();
        debug!(
            "render {order}: {:?} -> {:?} (replace {}, add {}, delete {}, clear {})",
            self.rendered, next, stats.replaced, stats.added, stats.deleted, stats.cleared
        );
        Ok((next, patch))
    }
}
