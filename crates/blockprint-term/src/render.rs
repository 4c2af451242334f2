// SPDX-License-Identifier: MIT
//
// DiffRenderer — turns a painted FrameBuffer into terminal bytes, sending
// only the cells that changed since the last frame.
//
// A block-row edit usually moves a handful of tiles, so most rows of the
// screen are untouched between frames. Those are detected with one slice
// comparison each and skipped. Changed cells go through CellWriter, and the
// whole frame is wrapped in synchronized-output markers so the terminal
// shows it at once.
//
// The previous frame is kept and overwritten in place with copy_from();
// only the first render or a size change allocates.

use std::io::{self, Write};

use crate::ansi;
use crate::buffer::FrameBuffer;
use crate::output::{CellWriter, OutputBuffer};

// ─── RenderStats ─────────────────────────────────────────────────────────────

/// What a render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Cells that differed from the previous frame and were emitted.
    pub cells_rendered: usize,
    /// Cells that matched the previous frame.
    pub cells_skipped: usize,
    /// Bytes of output generated.
    pub bytes_written: usize,
    /// Whether the screen was cleared and redrawn from scratch.
    pub full_redraw: bool,
}

impl RenderStats {
    /// Rendered plus skipped.
    #[inline]
    #[must_use]
    pub const fn total_cells(&self) -> usize {
        self.cells_rendered + self.cells_skipped
    }
}

// ─── DiffRenderer ────────────────────────────────────────────────────────────

/// Differential renderer that emits escapes only for changed cells.
///
/// ```
/// use blockprint_term::buffer::FrameBuffer;
/// use blockprint_term::cell::Cell;
/// use blockprint_term::render::DiffRenderer;
///
/// let mut renderer = DiffRenderer::new();
/// let mut frame = FrameBuffer::new(8, 2);
/// renderer.render(&frame);
///
/// frame.set(2, 1, Cell::new('B'));
/// let stats = renderer.render(&frame);
/// assert_eq!(stats.cells_rendered, 1);
/// ```
pub struct DiffRenderer {
    output: OutputBuffer,
    writer: CellWriter,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    /// A renderer with no previous frame; the first render draws everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            writer: CellWriter::new(),
            previous: None,
        }
    }

    /// Compare `current` with the previous frame and generate the output
    /// that brings the terminal up to date.
    ///
    /// The bytes stay buffered until [`flush_to`](Self::flush_to).
    pub fn render(&mut self, current: &FrameBuffer) -> RenderStats {
        self.output.clear();
        self.writer.reset_state();

        let width = current.width();
        let height = current.height();
        let mut stats = RenderStats::default();

        if width == 0 || height == 0 {
            self.store_frame(current);
            return stats;
        }

        ansi::begin_sync(&mut self.output).ok();

        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == height);
        stats.full_redraw = previous.is_none();

        if stats.full_redraw {
            ansi::clear_screen(&mut self.output).ok();
            ansi::cursor_to(&mut self.output, 0, 0).ok();
        }

        for y in 0..height {
            let Some(row) = current.row(y) else { break };
            let prev_row = previous.and_then(|prev| prev.row(y));

            if prev_row == Some(row) {
                stats.cells_skipped += row.len();
                continue;
            }

            for (x, cell) in (0..width).zip(row) {
                let unchanged = prev_row.and_then(|p| p.get(usize::from(x))) == Some(cell);
                if unchanged {
                    stats.cells_skipped += 1;
                } else {
                    self.writer.render_cell(&mut self.output, x, y, cell);
                    stats.cells_rendered += 1;
                }
            }
        }

        // Leave the terminal's own styling clean for whatever prints next.
        ansi::reset(&mut self.output).ok();
        ansi::end_sync(&mut self.output).ok();

        stats.bytes_written = self.output.len();
        log::trace!(
            "render: {} rendered, {} skipped, {} bytes{}",
            stats.cells_rendered,
            stats.cells_skipped,
            stats.bytes_written,
            if stats.full_redraw { " (full)" } else { "" }
        );

        self.store_frame(current);
        stats
    }

    /// Bytes produced by the last render.
    #[must_use]
    pub fn output_bytes(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// Write the pending output to `w`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.output.flush_to(w)
    }

    /// Forget the previous frame so the next render clears and redraws.
    pub fn force_redraw(&mut self) {
        self.previous = None;
    }

    fn store_frame(&mut self, current: &FrameBuffer) {
        match &mut self.previous {
            Some(prev) => prev.copy_from(current),
            None => self.previous = Some(current.clone()),
        }
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
