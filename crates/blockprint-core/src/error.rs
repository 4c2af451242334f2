// SPDX-License-Identifier: MIT
//
// Error taxonomy for the engine.
//
// Nothing in the pipeline touches I/O, so there is nothing transient to
// retry. Every variant is a contract violation: either the caller handed us
// a mode name we don't know (configuration), or the differ broke one of its
// own invariants (a bug). Either way the current run stops and cached state
// stays exactly as it was.

use thiserror::Error;

/// Everything that can go wrong in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An order mode name other than `direct`, `reverse` or `random`.
    #[error("unrecognized order mode `{0}` (expected direct, reverse or random)")]
    UnknownOrderMode(String),

    /// A layout name other than `row` or `column`.
    #[error("unrecognized display mode `{0}` (expected row or column)")]
    UnknownDisplayMode(String),

    /// Text arrived before any order mode was configured.
    #[error("unrecognized order mode: no order mode has been set")]
    OrderModeUnset,

    /// The backtrace ran out of neighbor cells before reaching the origin.
    #[error("diff error: backtrace stuck at previous={previous}, target={target}")]
    Backtrace {
        /// Row (previous-sequence position, 1-based) where the walk stopped.
        previous: usize,
        /// Column (target-sequence position, 1-based) where the walk stopped.
        target: usize,
    },

    /// A directive addressed a position the block list does not have.
    #[error("diff error: index {index} out of range for {len} blocks")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The list length at the time the directive was applied.
        len: usize,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
