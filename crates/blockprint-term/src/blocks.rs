// SPDX-License-Identifier: MIT
//
// BlockList — the blocks currently on display, in order.
//
// The core engine never touches blocks; it only hands out patches. This is
// the retained side: one `Block` per rendered character, edited in place by
// each patch so only the affected tiles change on the next paint.

use blockprint_core::{BlockColor, Directive, Error, Patch, Result};

/// One colored tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// The character shown on the tile.
    pub symbol: char,
    /// The tile's background.
    pub color: BlockColor,
}

impl Block {
    #[inline]
    #[must_use]
    pub const fn new(symbol: char, color: BlockColor) -> Self {
        Self { symbol, color }
    }
}

/// What one [`BlockList::apply`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyStats {
    pub restyled: usize,
    pub created: usize,
    pub removed: usize,
}

impl ApplyStats {
    /// Whether nothing changed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.restyled == 0 && self.created == 0 && self.removed == 0
    }
}

/// Ordered blocks addressed by position.
///
/// ```
/// use blockprint_core::{diff, Sequence};
/// use blockprint_term::blocks::BlockList;
///
/// let mut blocks = BlockList::new();
/// blocks.apply(&diff(&Sequence::from("HI"), &Sequence::new()).unwrap()).unwrap();
/// blocks.apply(&diff(&Sequence::from("HE"), &Sequence::from("HI")).unwrap()).unwrap();
/// assert_eq!(blocks.symbols(), "HE");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// The displayed characters, in order.
    #[must_use]
    pub fn symbols(&self) -> String {
        self.blocks.iter().map(|b| b.symbol).collect()
    }

    /// Execute `patch` against the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if a directive addresses a block
    /// that would not exist at that point of the script. Every directive is
    /// checked before any is applied, so the list is untouched on error.
    pub fn apply(&mut self, patch: &Patch) -> Result<ApplyStats> {
        let mut stats = ApplyStats::default();
        match patch {
            Patch::Unchanged => {}
            Patch::ClearAll => {
                stats.removed = self.blocks.len();
                self.blocks.clear();
            }
            Patch::AppendAll(entries) => {
                self.blocks
                    .extend(entries.iter().map(|&(symbol, color)| Block::new(symbol, color)));
                stats.created = entries.len();
            }
            Patch::Script(directives) => {
                validate(directives, self.blocks.len())?;
                for directive in directives {
                    match *directive {
                        Directive::Replace {
                            index,
                            symbol,
                            color,
                        } => {
                            self.blocks[index] = Block::new(symbol, color);
                            stats.restyled += 1;
                        }
                        Directive::Add {
                            index,
                            symbol,
                            color,
                        } => {
                            self.blocks.insert(index, Block::new(symbol, color));
                            stats.created += 1;
                        }
                        Directive::Delete { index } => {
                            self.blocks.remove(index);
                            stats.removed += 1;
                        }
                    }
                }
            }
        }
        log::debug!(
            "blocks: +{} ~{} -{} -> {}",
            stats.created,
            stats.restyled,
            stats.removed,
            self.blocks.len()
        );
        Ok(stats)
    }
}

/// Walk the script against a length counter only.
fn validate(directives: &[Directive], mut len: usize) -> Result<()> {
    for directive in directives {
        match *directive {
            Directive::Replace { index, .. } if index >= len => {
                return Err(Error::IndexOutOfRange { index, len });
            }
            Directive::Add { index, .. } if index > len => {
                return Err(Error::IndexOutOfRange { index, len });
            }
            Directive::Delete { index } if index >= len => {
                return Err(Error::IndexOutOfRange { index, len });
            }
            Directive::Replace { .. } => {}
            Directive::Add { .. } => len += 1,
            Directive::Delete { .. } => len -= 1,
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockprint_core::{Sequence, color_of, diff};
    use pretty_assertions::assert_eq;

    fn list_of(text: &str) -> BlockList {
        let mut list = BlockList::new();
        list.apply(&diff(&Sequence::from(text), &Sequence::new()).unwrap())
            .unwrap();
        list
    }

    fn step(list: &mut BlockList, from: &str, to: &str) -> ApplyStats {
        let patch = diff(&Sequence::from(to), &Sequence::from(from)).unwrap();
        list.apply(&patch).unwrap()
    }

    // ── Fast paths ──────────────────────────────────────────────────

    #[test]
    fn append_all_creates_colored_blocks() {
        let list = list_of("HI");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&Block::new('H', color_of('H'))));
        assert_eq!(list.get(1), Some(&Block::new('I', color_of('I'))));
    }

    #[test]
    fn clear_all_empties_the_list() {
        let mut list = list_of("HELLO");
        let stats = step(&mut list, "HELLO", "");
        assert!(list.is_empty());
        assert_eq!(stats.removed, 5);
    }

    #[test]
    fn unchanged_does_nothing() {
        let mut list = list_of("SAME");
        let stats = list.apply(&Patch::Unchanged).unwrap();
        assert!(stats.is_empty());
        assert_eq!(list.symbols(), "SAME");
    }

    // ── Scripts ─────────────────────────────────────────────────────

    #[test]
    fn script_edits_in_place() {
        let mut list = list_of("HELLO");
        let stats = step(&mut list, "HELLO", "HELPO");
        assert_eq!(list.symbols(), "HELPO");
        assert_eq!(
            stats,
            ApplyStats {
                restyled: 1,
                created: 0,
                removed: 0
            }
        );
        assert_eq!(list.get(3).unwrap().color, color_of('P'));
    }

    #[test]
    fn chained_edits_track_the_text() {
        let mut list = BlockList::new();
        let texts = ["", "A", "AB", "BA", "KITTEN", "SITTING", "SIT", "", "Q"];
        for pair in texts.windows(2) {
            step(&mut list, pair[0], pair[1]);
            assert_eq!(list.symbols(), pair[1]);
            for block in &list {
                assert_eq!(block.color, color_of(block.symbol));
            }
        }
    }

    // ── Validation ──────────────────────────────────────────────────

    #[test]
    fn bad_index_leaves_list_untouched() {
        let mut list = list_of("AB");
        let patch = Patch::Script(vec![
            Directive::Delete { index: 0 },
            Directive::Replace {
                index: 1,
                symbol: 'Z',
                color: color_of('Z'),
            },
        ]);
        let err = list.apply(&patch).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(list.symbols(), "AB");
    }

    #[test]
    fn add_at_end_is_allowed() {
        let mut list = list_of("A");
        let patch = Patch::Script(vec![Directive::Add {
            index: 1,
            symbol: 'B',
            color: color_of('B'),
        }]);
        list.apply(&patch).unwrap();
        assert_eq!(list.symbols(), "AB");

        let past_end = Patch::Script(vec![Directive::Add {
            index: 5,
            symbol: 'C',
            color: color_of('C'),
        }]);
        assert_eq!(
            list.apply(&past_end),
            Err(Error::IndexOutOfRange { index: 5, len: 2 })
        );
    }
}
