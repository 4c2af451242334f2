// SPDX-License-Identifier: MIT
//
// Diffing, part one: the Levenshtein matrix and its backtrace.
//
// Rows index the previous (currently rendered) sequence, columns the target
// sequence. Cell D[i][k] is the edit distance between the first `i`
// characters of previous and the first `k` characters of target:
//
//   D[0][k] = k,  D[i][0] = i
//   D[i][k] = min(D[i][k-1] + 1, D[i-1][k] + 1, D[i-1][k-1] + cost)
//
// The backtrace walks from the bottom-right cell toward (1, 1), always
// stepping to the cheapest neighbor:
//
//          k-1      k
//   i-1  [diag]  [delete]
//   i    [add ]  ( i,k )
//
// Ties go to the first neighbor in the order diagonal, add, delete. The walk
// stops at (1, 1) rather than (0, 0): the first characters are always paired
// up, replaced if they differ. The pin costs at most one operation over the
// true distance.
//
// Operations come out from the end of the sequences toward the start. That
// order is load-bearing: every operation only touches list positions at or
// after its own index, so positions below it still hold untouched previous
// characters and the previous-sequence index of the next operation is still
// correct when it is applied.

use crate::error::{Error, Result};

// ─── EditOp ──────────────────────────────────────────────────────────────────

/// One step of an edit script, in list coordinates (0-indexed).
///
/// `at` is a position in the list being edited, which starts out as the
/// previous sequence; `target` is the index of the character to place,
/// taken from the target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Overwrite element `at` with `target[target]`.
    Replace { at: usize, target: usize },
    /// Insert `target[target]` so it becomes element `at`.
    Add { at: usize, target: usize },
    /// Remove element `at`.
    Delete { at: usize },
}

impl EditOp {
    /// The list position this operation touches.
    #[inline]
    #[must_use]
    pub const fn at(self) -> usize {
        match self {
            Self::Replace { at, .. } | Self::Add { at, .. } | Self::Delete { at } => at,
        }
    }
}

// ─── Matrix ──────────────────────────────────────────────────────────────────

/// A filled Levenshtein distance matrix for one (previous, target) pair.
///
/// Flat row-major storage, `(previous.len() + 1) × (target.len() + 1)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl Matrix {
    /// Fill the matrix for turning `previous` into `target`.
    #[must_use]
    pub fn build(previous: &[char], target: &[char]) -> Self {
        let rows = previous.len() + 1;
        let cols = target.len() + 1;
        let mut cells = vec![0; rows * cols];

        for (k, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = k;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }

        for i in 1..rows {
            for k in 1..cols {
                let cost = usize::from(target[k - 1] != previous[i - 1]);
                let add = cells[i * cols + k - 1] + 1;
                let delete = cells[(i - 1) * cols + k] + 1;
                let diag = cells[(i - 1) * cols + k - 1] + cost;
                cells[i * cols + k] = add.min(delete).min(diag);
            }
        }

        Self { rows, cols, cells }
    }

    /// `D[i][k]`, or `None` outside the matrix.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, k: usize) -> Option<usize> {
        (i < self.rows && k < self.cols).then(|| self.cells[i * self.cols + k])
    }

    /// The edit distance between the full sequences (bottom-right cell).
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Number of rows (`previous.len() + 1`).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`target.len() + 1`).
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, i: usize, k: usize) -> usize {
        self.cells[i * self.cols + k]
    }

    /// Walk the matrix back to `(1, 1)` and collect the edit script.
    ///
    /// `previous` and `target` must be the sequences the matrix was built
    /// from, and both must be non-empty. Identical sequences produce an
    /// empty script.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backtrace`] if the walk runs out of neighbors before
    /// reaching `(1, 1)`, which means the inputs don't match the matrix.
    pub fn backtrace(&self, previous: &[char], target: &[char]) -> Result<Vec<EditOp>> {
        if previous.len() + 1 != self.rows
            || target.len() + 1 != self.cols
            || previous.is_empty()
            || target.is_empty()
        {
            return Err(Error::Backtrace {
                previous: previous.len(),
                target: target.len(),
            });
        }

        let mut ops = Vec::new();
        let mut i = previous.len();
        let mut k = target.len();

        while (i, k) != (1, 1) {
            match self.cheapest_step(i, k) {
                Some(Step::Diagonal) => {
                    if previous[i - 1] != target[k - 1] {
                        ops.push(EditOp::Replace { at: i - 1, target: k - 1 });
                    }
                    i -= 1;
                    k -= 1;
                }
                Some(Step::Add) => {
                    ops.push(EditOp::Add { at: i, target: k - 1 });
                    k -= 1;
                }
                Some(Step::Delete) => {
                    ops.push(EditOp::Delete { at: i - 1 });
                    i -= 1;
                }
                None => return Err(Error::Backtrace { previous: i, target: k }),
            }
        }

        if previous[0] != target[0] {
            ops.push(EditOp::Replace { at: 0, target: 0 });
        }

        Ok(ops)
    }

    /// The cheapest neighbor of `(i, k)` that keeps the walk inside
    /// `i >= 1 && k >= 1`. Ties resolve diagonal, add, delete.
    fn cheapest_step(&self, i: usize, k: usize) -> Option<Step> {
        let diagonal = (i > 1 && k > 1).then(|| (Step::Diagonal, self.at(i - 1, k - 1)));
        let add = (k > 1).then(|| (Step::Add, self.at(i, k - 1)));
        let delete = (i > 1).then(|| (Step::Delete, self.at(i - 1, k)));

        [diagonal, add, delete]
            .into_iter()
            .flatten()
            .min_by_key(|&(_, cost)| cost)
            .map(|(step, _)| step)
    }
}

impl std::fmt::Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix {}x{}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "  {row:?}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Add,
    Delete,
}

/// Levenshtein distance between two character slices.
///
/// ```
/// use blockprint_core::levenshtein::distance;
///
/// let a: Vec<char> = "KITTEN".chars().collect();
/// let b: Vec<char> = "SITTING".chars().collect();
/// assert_eq!(distance(&a, &b), 3);
/// ```
#[must_use]
pub fn distance(a: &[char], b: &[char]) -> usize {
    Matrix::build(a, b).distance()
}

/// Compute the edit script turning `previous` into `target`.
///
/// Both sequences must be non-empty; the empty cases are handled by the
/// caller without building a matrix.
///
/// # Errors
///
/// See [`Matrix::backtrace`].
pub fn edit_script(previous: &[char], target: &[char]) -> Result<Vec<EditOp>> {
    Matrix::build(previous, target).backtrace(previous, target)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Apply a script the way a renderer would: in order, against a list
    /// that starts as `previous`.
    fn apply(previous: &str, target: &str, ops: &[EditOp]) -> String {
        let target = chars(target);
        let mut list = chars(previous);
        for op in ops {
            match *op {
                EditOp::Replace { at, target: t } => list[at] = target[t],
                EditOp::Add { at, target: t } => list.insert(at, target[t]),
                EditOp::Delete { at } => {
                    list.remove(at);
                }
            }
        }
        list.into_iter().collect()
    }

    fn script(previous: &str, target: &str) -> Vec<EditOp> {
        edit_script(&chars(previous), &chars(target)).unwrap()
    }

    // ── Matrix ──────────────────────────────────────────────────────

    #[test]
    fn matrix_borders() {
        let m = Matrix::build(&chars("AB"), &chars("XYZ"));
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        for k in 0..4 {
            assert_eq!(m.get(0, k), Some(k));
        }
        for i in 0..3 {
            assert_eq!(m.get(i, 0), Some(i));
        }
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 4), None);
    }

    #[test]
    fn classic_distances() {
        let cases = [
            ("KITTEN", "SITTING", 3),
            ("FLAW", "LAWN", 2),
            ("", "ABC", 3),
            ("ABC", "", 3),
            ("SAME", "SAME", 0),
            ("A", "B", 1),
            ("GUMBO", "GAMBOL", 2),
        ];
        for (a, b, d) in cases {
            assert_eq!(distance(&chars(a), &chars(b)), d, "{a} -> {b}");
            assert_eq!(distance(&chars(b), &chars(a)), d, "{b} -> {a}");
        }
    }

    #[test]
    fn debug_prints_rows() {
        let m = Matrix::build(&chars("A"), &chars("A"));
        assert_eq!(format!("{m:?}"), "Matrix 2x2\n  [0, 1]\n  [1, 0]\n");
    }

    // ── Backtrace ───────────────────────────────────────────────────

    #[test]
    fn identical_sequences_produce_nothing() {
        assert_eq!(script("HELLO", "HELLO"), vec![]);
        assert_eq!(script("X", "X"), vec![]);
    }

    #[test]
    fn single_substitution() {
        assert_eq!(script("HELLO", "HELPO"), vec![EditOp::Replace { at: 3, target: 3 }]);
    }

    #[test]
    fn single_chars_that_differ() {
        assert_eq!(script("A", "B"), vec![EditOp::Replace { at: 0, target: 0 }]);
    }

    #[test]
    fn append_at_end() {
        assert_eq!(script("AB", "ABC"), vec![EditOp::Add { at: 2, target: 2 }]);
    }

    #[test]
    fn insert_in_middle() {
        assert_eq!(script("AC", "ABC"), vec![EditOp::Add { at: 1, target: 1 }]);
    }

    #[test]
    fn delete_at_end() {
        assert_eq!(script("ABC", "AB"), vec![EditOp::Delete { at: 2 }]);
    }

    #[test]
    fn delete_in_middle() {
        assert_eq!(script("ABC", "AC"), vec![EditOp::Delete { at: 1 }]);
    }

    #[test]
    fn first_char_is_pinned() {
        // "XAB" -> "AB" is one deletion of 'X', but the walk always pairs
        // the first characters: it drops 'A' and rewrites 'X' instead.
        let ops = script("XAB", "AB");
        assert_eq!(
            ops,
            vec![EditOp::Delete { at: 1 }, EditOp::Replace { at: 0, target: 0 }]
        );
        assert_eq!(apply("XAB", "AB", &ops), "AB");
    }

    #[test]
    fn prepend_rewrites_first_block() {
        let ops = script("BC", "ABC");
        assert_eq!(
            ops,
            vec![
                EditOp::Add { at: 1, target: 1 },
                EditOp::Replace { at: 0, target: 0 },
            ]
        );
        assert_eq!(apply("BC", "ABC", &ops), "ABC");
    }

    #[test]
    fn ops_come_out_back_to_front() {
        let ops = script("ABCDEF", "AXCDEY");
        assert_eq!(
            ops,
            vec![
                EditOp::Replace { at: 5, target: 5 },
                EditOp::Replace { at: 1, target: 1 },
            ]
        );
    }

    #[test]
    fn ties_prefer_diagonal_then_add() {
        // At (2, 2) for "AB" -> "BA": diag=1, add=1, delete=1 → diagonal.
        let ops = script("AB", "BA");
        assert_eq!(
            ops,
            vec![
                EditOp::Replace { at: 1, target: 1 },
                EditOp::Replace { at: 0, target: 0 },
            ]
        );
    }

    #[test]
    fn matching_diagonal_beats_tied_add() {
        // At (2, 3) for "AB" -> "AAB": diag=1, add=1 → step diagonally over
        // the matching 'B', then add the second 'A'.
        assert_eq!(script("AB", "AAB"), vec![EditOp::Add { at: 1, target: 1 }]);
    }

    #[test]
    fn long_tail_deletes_back_to_front() {
        assert_eq!(
            script("MISSISSIPPI", "MISSOURI"),
            vec![
                EditOp::Delete { at: 10 },
                EditOp::Delete { at: 9 },
                EditOp::Delete { at: 8 },
                EditOp::Replace { at: 6, target: 6 },
                EditOp::Replace { at: 5, target: 5 },
                EditOp::Replace { at: 4, target: 4 },
            ]
        );
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let m = Matrix::build(&chars("AB"), &chars("CD"));
        assert_eq!(
            m.backtrace(&chars("ABC"), &chars("CD")),
            Err(Error::Backtrace { previous: 3, target: 2 })
        );
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(edit_script(&[], &chars("A")).is_err());
        assert!(edit_script(&chars("A"), &[]).is_err());
    }

    #[test]
    fn round_trips() {
        let words = [
            "A", "B", "AB", "BA", "ABC", "HELLO", "HELPO", "WORLD", "KITTEN", "SITTING", "ABBA",
            "BAAB", "MISSISSIPPI", "MISSOURI", "XYZ", "AAAAAA", "中文🔥", "🔥中",
        ];
        for previous in words {
            for target in words {
                let ops = script(previous, target);
                assert_eq!(apply(previous, target, &ops), target, "{previous} -> {target}");
            }
        }
    }

    #[test]
    fn script_length_is_near_optimal() {
        let words = ["HELLO", "WORLD", "KITTEN", "SITTING", "XAB", "AB", "BC", "ABC", "ZZZZ"];
        for previous in words {
            for target in words {
                let ops = script(previous, target).len();
                let d = distance(&chars(previous), &chars(target));
                assert!(ops >= d && ops <= d + 1, "{previous} -> {target}: {ops} vs {d}");
                if previous.chars().next() == target.chars().next() {
                    assert_eq!(ops, d, "{previous} -> {target}");
                }
            }
        }
    }
}
