// SPDX-License-Identifier: MIT
//
// Sequence — the ordered list of characters that becomes a row of blocks.
//
// One character per block, duplicates allowed, order significant. Kept as a
// plain `Vec<char>` underneath so the differ can index both sides in O(1);
// the newtype exists so "normalized and ordered" text can't be confused with
// raw user input.

use std::fmt;
use std::ops::Index;

/// An ordered sequence of Unicode scalar values, one per block.
///
/// # Examples
///
/// ```
/// use blockprint_core::Sequence;
///
/// let seq = Sequence::from("HELLO");
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq[1], 'E');
/// assert_eq!(seq.to_string(), "HELLO");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    chars: Vec<char>,
}

impl Sequence {
    /// An empty sequence (the state before anything was rendered).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Number of characters (and therefore blocks).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether there is nothing to render.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Iterate characters in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.chars.iter().copied()
    }

    /// Consume the sequence, returning the underlying vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<char> {
        self.chars
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [char] {
        &mut self.chars
    }
}

impl Index<usize> for Sequence {
    type Output = char;

    #[inline]
    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl From<Vec<char>> for Sequence {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl From<&str> for Sequence {
    /// Take the string verbatim (no normalization). Use
    /// [`normalize`](crate::transform::normalize) for user input.
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl FromIterator<char> for Sequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl PartialEq<[char]> for Sequence {
    fn eq(&self, other: &[char]) -> bool {
        self.chars.as_slice() == other
    }
}

impl PartialEq<Vec<char>> for Sequence {
    fn eq(&self, other: &Vec<char>) -> bool {
        &self.chars == other
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({:?})", self.to_string())
    }
}
