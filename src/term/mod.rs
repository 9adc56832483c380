//! Terminal backend abstraction — the spec's "Terminal" external collaborator.
//!
//! ## Invariants
//!
//! - Raw mode is entered once at startup and restored exactly once on exit,
//!   including on a fatal signal.
//! - `read_key` blocks until a key is available, but returns `Key::Null` if
//!   interrupted by a resize so the main loop can redraw at a safe point.
//! - This module never reaches into editor state; it only decodes bytes and
//!   reports geometry.

use crate::key::Key;

pub mod crossterm_backend;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Narrow contract the modal/render layers depend on.
pub trait Terminal {
    /// Put the terminal in raw mode; called once at startup.
    fn init(&mut self) -> Result<(), String>;

    /// Restore cooked mode; called once at shutdown (including on signal).
    fn deinit(&mut self);

    /// Block for the next key, decoding escape sequences internally.
    /// Returns `Key::Null` on a timeout/resize so the caller can redraw.
    fn read_key(&mut self) -> Result<Key, String>;

    /// Report the current window size.
    fn window_size(&self) -> Result<Size, String>;

    /// Write raw bytes (escape sequences, text) to the terminal.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), String>;
}
