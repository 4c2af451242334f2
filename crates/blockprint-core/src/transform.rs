// SPDX-License-Identifier: MIT
//
// Text transforms: raw input text to the sequence that gets rendered.
//
// Two pure stages:
//
//   normalize:  drop whitespace, uppercase the rest
//   reorder:    direct (identity) | reverse | random (Fisher–Yates)
//
// Random order draws from the thread-local RNG so two runs over the same
// text almost never agree. `reorder_with` takes the RNG explicitly; that is
// the only way to get a reproducible shuffle, and tests use it with a
// seeded `StdRng`.

use rand::Rng;

use crate::mode::OrderMode;
use crate::sequence::Sequence;

/// Byte order mark. Counted as whitespace to match the `\s` class most
/// regex engines use, which `char::is_whitespace` leaves out.
const BOM: char = '\u{feff}';

/// Next line. `char::is_whitespace` includes it but `\s` does not, so it is
/// kept as an ordinary character.
const NEL: char = '\u{85}';

fn is_blank(ch: char) -> bool {
    ch == BOM || (ch.is_whitespace() && ch != NEL)
}

/// Strip all whitespace and uppercase what remains.
///
/// Uppercasing follows the full Unicode mapping, so a character can expand
/// into several (`ß` becomes `SS`).
///
/// ```
/// use blockprint_core::transform::normalize;
///
/// assert_eq!(normalize("he llo").to_string(), "HELLO");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Sequence {
    raw.chars()
        .filter(|&ch| !is_blank(ch))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Apply `mode` to a normalized sequence using the thread-local RNG.
#[must_use]
pub fn reorder(seq: Sequence, mode: OrderMode) -> Sequence {
    reorder_with(seq, mode, &mut rand::thread_rng())
}

/// Apply `mode` to a normalized sequence, drawing randomness from `rng`.
#[must_use]
pub fn reorder_with<R: Rng + ?Sized>(mut seq: Sequence, mode: OrderMode, rng: &mut R) -> Sequence {
    match mode {
        OrderMode::Direct => seq,
        OrderMode::Reverse => seq.iter().rev().collect(),
        OrderMode::Random => {
            shuffle(seq.as_mut_slice(), rng);
            seq
        }
    }
}

/// In-place Fisher–Yates: walk down from the last slot, swapping each with a
/// uniformly chosen slot at or below it.
fn shuffle<R: Rng + ?Sized>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}
