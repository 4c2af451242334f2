// SPDX-License-Identifier: MIT
//
// FrameBuffer — the cell grid tiles are painted into.
//
// Flat `Vec<Cell>` in row-major order: a row is contiguous, so the renderer's
// left-to-right scan is linear and a whole row compares with one slice
// equality. Out-of-bounds writes are silently clipped; painting never has to
// bounds-check first.

use crate::cell::Cell;

/// A 2D grid of terminal cells.
///
/// ```
/// use blockprint_term::buffer::FrameBuffer;
/// use blockprint_term::cell::Cell;
///
/// let mut buf = FrameBuffer::new(10, 2);
/// buf.set(3, 1, Cell::new('X'));
/// assert_eq!(buf.get(3, 1).and_then(|c| c.character()), Some('X'));
/// assert!(buf.get(10, 0).is_none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// A grid of empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
        }
    }

    /// Width in columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    const fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.index(x, y)])
    }

    /// Overwrite the cell at `(x, y)`. Writes outside the grid are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// One row as a slice, or `None` past the bottom.
    #[inline]
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        (y < self.height).then(|| {
            let start = self.index(0, y);
            &self.cells[start..start + usize::from(self.width)]
        })
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Copy another buffer's content into this one, reusing the allocation
    /// when sizes match.
    pub fn copy_from(&mut self, other: &Self) {
        if self.width == other.width && self.height == other.height {
            self.cells.copy_from_slice(&other.cells);
        } else {
            self.clone_from(other);
        }
    }
}

impl std::fmt::Debug for FrameBuffer {
    /// Glyphs only, one line per row, enough to eyeball a layout in a
    /// failing test.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FrameBuffer {}x{}", self.width, self.height)?;
        for y in 0..self.height {
            let line: String = self
                .row(y)
                .unwrap_or_default()
                .iter()
                .filter_map(|c| c.character())
                .collect();
            writeln!(f, "|{line}|")?;
        }
        Ok(())
    }
}
