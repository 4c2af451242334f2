// SPDX-License-Identifier: MIT
//
// Diffing, part two: from two sequences to a renderer-ready patch.
//
// The matrix only runs when it has to. The cheap cases short-circuit first:
//
//   previous == target      → Unchanged   (nothing to do)
//   target empty            → ClearAll    (drop every block)
//   previous empty          → AppendAll   (create every block in order)
//   otherwise               → Script      (Levenshtein edit script)
//
// Script operations are resolved into directives that carry the character
// and its color, so a renderer never needs to see the target sequence.

use log::trace;

use crate::color::{BlockColor, color_of};
use crate::error::{Error, Result};
use crate::levenshtein::{self, EditOp};
use crate::sequence::Sequence;

// ─── Directive ───────────────────────────────────────────────────────────────

/// A single block mutation, ready to apply.
///
/// Indices are list positions at the moment the directive is applied;
/// earlier directives in the same script may have shifted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Restyle block `index` to show `symbol` on `color`.
    Replace {
        index: usize,
        symbol: char,
        color: BlockColor,
    },
    /// Create a block for `symbol` so that it becomes block `index`.
    Add {
        index: usize,
        symbol: char,
        color: BlockColor,
    },
    /// Remove block `index`.
    Delete { index: usize },
}

impl Directive {
    fn resolve(op: EditOp, target: &Sequence) -> Self {
        match op {
            EditOp::Replace { at, target: t } => {
                let symbol = target[t];
                Self::Replace {
                    index: at,
                    symbol,
                    color: color_of(symbol),
                }
            }
            EditOp::Add { at, target: t } => {
                let symbol = target[t];
                Self::Add {
                    index: at,
                    symbol,
                    color: color_of(symbol),
                }
            }
            EditOp::Delete { at } => Self::Delete { index: at },
        }
    }
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Everything a renderer needs to move from the previous sequence to the
/// target sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Previous and target are identical.
    Unchanged,
    /// The target is empty: remove every block.
    ClearAll,
    /// Nothing was rendered before: create one block per entry, in order.
    AppendAll(Vec<(char, BlockColor)>),
    /// Apply these directives in order.
    Script(Vec<Directive>),
}

/// Counts of what a patch does, for logging and render stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchStats {
    /// Blocks restyled in place.
    pub replaced: usize,
    /// Blocks created.
    pub added: usize,
    /// Blocks removed.
    pub deleted: usize,
    /// Whether the patch clears the whole list.
    pub cleared: bool,
}

impl PatchStats {
    /// Total block operations (a clear counts as zero).
    #[inline]
    #[must_use]
    pub const fn operations(&self) -> usize {
        self.replaced + self.added + self.deleted
    }
}

impl Patch {
    /// Whether applying this patch would change anything.
    #[inline]
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Summarize the patch.
    #[must_use]
    pub fn stats(&self) -> PatchStats {
        let mut stats = PatchStats::default();
        match self {
            Self::Unchanged => {}
            Self::ClearAll => stats.cleared = true,
            Self::AppendAll(blocks) => stats.added = blocks.len(),
            Self::Script(directives) => {
                for d in directives {
                    match d {
                        Directive::Replace { .. } => stats.replaced += 1,
                        Directive::Add { .. } => stats.added += 1,
                        Directive::Delete { .. } => stats.deleted += 1,
                    }
                }
            }
        }
        stats
    }

    /// Apply the patch to a plain list of characters.
    ///
    /// This is the reference semantics every renderer must reproduce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if a directive addresses a slot
    /// the list doesn't have. The list may be partially edited in that case.
    pub fn apply_to(&self, list: &mut Vec<char>) -> Result<()> {
        match self {
            Self::Unchanged => {}
            Self::ClearAll => list.clear(),
            Self::AppendAll(blocks) => list.extend(blocks.iter().map(|&(ch, _)| ch)),
            Self::Script(directives) => {
                for d in directives {
                    let len = list.len();
                    match *d {
                        Directive::Replace { index, symbol, .. } => {
                            let slot = list
                                .get_mut(index)
                                .ok_or(Error::IndexOutOfRange { index, len })?;
                            *slot = symbol;
                        }
                        Directive::Add { index, symbol, .. } => {
                            if index > len {
                                return Err(Error::IndexOutOfRange { index, len });
                            }
                            list.insert(index, symbol);
                        }
                        Directive::Delete { index } => {
                            if index >= len {
                                return Err(Error::IndexOutOfRange { index, len });
                            }
                            list.remove(index);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Compute the patch that turns `previous` into `target`.
///
/// ```
/// use blockprint_core::{diff, Directive, Patch, Sequence};
/// use blockprint_core::color::color_of;
///
/// let patch = diff(&Sequence::from("HELPO"), &Sequence::from("HELLO")).unwrap();
/// assert_eq!(
///     patch,
///     Patch::Script(vec![Directive::Replace { index: 3, symbol: 'P', color: color_of('P') }])
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Backtrace`] if the edit-script walk breaks its own
/// invariants. That is a bug, not a user error.
pub fn diff(target: &Sequence, previous: &Sequence) -> Result<Patch> {
    if previous == target {
        return Ok(Patch::Unchanged);
    }
    if target.is_empty() {
        return Ok(Patch::ClearAll);
    }
    if previous.is_empty() {
        return Ok(Patch::AppendAll(
            target.iter().map(|ch| (ch, color_of(ch))).collect(),
        ));
    }

    let ops = levenshtein::edit_script(previous.as_slice(), target.as_slice())?;
    let directives: Vec<Directive> = ops
        .into_iter()
        .map(|op| Directive::resolve(op, target))
        .inspect(|d| trace!("directive {d:?}"))
        .collect();

    Ok(Patch::Script(directives))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seq(s: &str) -> Sequence {
        Sequence::from(s)
    }

    fn roundtrip(previous: &str, target: &str) -> String {
        let patch = diff(&seq(target), &seq(previous)).unwrap();
        let mut list: Vec<char> = previous.chars().collect();
        patch.apply_to(&mut list).unwrap();
        list.into_iter().collect()
    }

    // ── Fast paths ──────────────────────────────────────────────────

    #[test]
    fn into_empty_appends_everything() {
        let patch = diff(&seq("HELLO"), &seq("")).unwrap();
        let expected: Vec<(char, BlockColor)> =
            "HELLO".chars().map(|c| (c, color_of(c))).collect();
        assert_eq!(patch, Patch::AppendAll(expected));
    }

    #[test]
    fn to_empty_clears() {
        assert_eq!(diff(&seq(""), &seq("HELLO")).unwrap(), Patch::ClearAll);
    }

    #[test]
    fn equal_is_unchanged() {
        assert_eq!(diff(&seq("HELLO"), &seq("HELLO")).unwrap(), Patch::Unchanged);
        assert_eq!(diff(&seq(""), &seq("")).unwrap(), Patch::Unchanged);
    }

    // ── Script ──────────────────────────────────────────────────────

    #[test]
    fn single_replace_at_differing_position() {
        let patch = diff(&seq("HELPO"), &seq("HELLO")).unwrap();
        assert_eq!(
            patch,
            Patch::Script(vec![Directive::Replace {
                index: 3,
                symbol: 'P',
                color: color_of('P'),
            }])
        );
    }

    #[test]
    fn add_and_delete_carry_symbols() {
        let patch = diff(&seq("ABXC"), &seq("ABC")).unwrap();
        assert_eq!(
            patch,
            Patch::Script(vec![Directive::Add {
                index: 2,
                symbol: 'X',
                color: color_of('X'),
            }])
        );

        let patch = diff(&seq("AC"), &seq("ABC")).unwrap();
        assert_eq!(patch, Patch::Script(vec![Directive::Delete { index: 1 }]));
    }

    #[test]
    fn round_trip_all_shapes() {
        let words = ["", "A", "B", "AB", "HELLO", "HELPO", "WORLD", "OLLEH", "中🔥", "AAAA"];
        for previous in words {
            for target in words {
                assert_eq!(roundtrip(previous, target), target, "{previous} -> {target}");
            }
        }
    }

    // ── Stats ───────────────────────────────────────────────────────

    #[test]
    fn stats_count_directives() {
        let patch = Patch::Script(vec![
            Directive::Delete { index: 4 },
            Directive::Replace {
                index: 1,
                symbol: 'Q',
                color: color_of('Q'),
            },
            Directive::Delete { index: 0 },
        ]);
        let stats = patch.stats();
        assert_eq!(stats.deleted, 2);
        assert_eq!(stats.replaced, 1);
        assert_eq!(stats.added, 0);
        assert_eq!(stats.operations(), 3);
        assert!(!stats.cleared);
    }

    #[test]
    fn stats_for_fast_paths() {
        assert_eq!(Patch::Unchanged.stats(), PatchStats::default());
        assert!(Patch::ClearAll.stats().cleared);
        assert_eq!(diff(&seq("ABC"), &seq("")).unwrap().stats().added, 3);
    }

    // ── apply_to ────────────────────────────────────────────────────

    #[test]
    fn apply_rejects_out_of_range() {
        let mut list = vec!['A'];
        let patch = Patch::Script(vec![Directive::Delete { index: 3 }]);
        assert_eq!(
            patch.apply_to(&mut list),
            Err(Error::IndexOutOfRange { index: 3, len: 1 })
        );

        let patch = Patch::Script(vec![Directive::Add {
            index: 2,
            symbol: 'Z',
            color: color_of('Z'),
        }]);
        assert_eq!(
            patch.apply_to(&mut list),
            Err(Error::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn add_at_len_appends() {
        let mut list = vec!['A'];
        Patch::Script(vec![Directive::Add {
            index: 1,
            symbol: 'B',
            color: color_of('B'),
        }])
        .apply_to(&mut list)
        .unwrap();
        assert_eq!(list, vec!['A', 'B']);
    }
}
