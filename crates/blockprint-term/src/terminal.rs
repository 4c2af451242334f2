// SPDX-License-Identifier: MIT
//
// Terminal queries and cursor cleanup.
//
// Safety: `ioctl(TIOCGWINSZ)` and `isatty` are the POSIX way to ask about
// the terminal and have no safe std equivalent. Each unsafe block is one
// libc call on a fixed, always-open descriptor.
#![allow(unsafe_code)]

use std::io::{self, Write};

use crate::ansi;

// ─── Size ────────────────────────────────────────────────────────────────────

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Size {
    /// Used when nothing better is known.
    pub const FALLBACK: Self = Self { cols: 80, rows: 24 };
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// The size of the terminal behind stdout, or `None` if stdout is not a
/// terminal or reports a zero dimension.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    (result == 0 && ws.ws_col > 0 && ws.ws_row > 0).then_some(Size {
        cols: ws.ws_col,
        rows: ws.ws_row,
    })
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Whether stdout is a terminal.
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

// ─── CursorGuard ─────────────────────────────────────────────────────────────

/// Hides the cursor while alive; on drop, resets SGR state, shows the
/// cursor again and parks it below the painted area.
pub struct CursorGuard {
    park_row: u16,
}

impl CursorGuard {
    /// Hide the cursor on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn hide() -> io::Result<Self> {
        let mut out = io::stdout().lock();
        ansi::cursor_hide(&mut out)?;
        out.flush()?;
        Ok(Self { park_row: 0 })
    }

    /// Row the cursor is moved to when the guard drops.
    pub const fn park_at(&mut self, row: u16) {
        self.park_row = row;
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let mut out = io::stdout().lock();
        let _ = ansi::reset(&mut out);
        let _ = ansi::cursor_to(&mut out, 0, self.park_row);
        let _ = ansi::cursor_show(&mut out);
        let _ = out.flush();
    }
}
