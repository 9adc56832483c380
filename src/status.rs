//! Transient status line: a message plus a 5-second auto-hide timer.

use std::time::Instant;

use crate::mode::Mode;

const VISIBLE_SECS: u64 = 5;

/// The bottom-of-screen message shown after a command runs. Rendering never
/// feeds back into editor behavior — this is a one-way sink.
#[derive(Debug)]
pub struct StatusLine {
    message: String,
    set_at: Option<Instant>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        StatusLine {
            message: String::new(),
            set_at: None,
        }
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.set_at = Some(Instant::now());
    }

    /// The current message if it hasn't aged out of its 5-second window.
    pub fn visible(&self) -> Option<&str> {
        let at = self.set_at?;
        if at.elapsed().as_secs() < VISIBLE_SECS {
            Some(&self.message)
        } else {
            None
        }
    }
}

/// Human-readable mode label for the status bar (identical to [`Mode::label`],
/// kept as a free function for parity with the original's `modestr`).
pub fn mode_str(mode: Mode) -> &'static str {
    mode.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_visible_immediately_after_being_set() {
        let mut status = StatusLine::new();
        assert_eq!(status.visible(), None);
        status.set("NORMAL");
        assert_eq!(status.visible(), Some("NORMAL"));
    }

    #[test]
    fn mode_str_matches_mode_label() {
        assert_eq!(mode_str(Mode::Insert), "INSERT");
    }
}
