//! Decoded key representation.
//!
//! The terminal backend decodes raw input into this abstract form so the
//! modal engine never has to think about escape sequences or VTIME timeouts.

/// A single decoded keypress or terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A single-byte printable key (ASCII or a raw byte of an incomplete
    /// multi-byte sequence).
    Byte(u8),
    /// A complete multi-byte UTF-8 codepoint delivered as one key event.
    Utf8(Vec<u8>),
    /// A control key, e.g. `Ctrl('q')` for Ctrl-Q.
    Ctrl(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Backspace,
    Enter,
    Escape,
    Tab,
    /// Terminal was resized; carries the new (rows, cols).
    Resize(u16, u16),
    /// No key available this tick (e.g. a resize-interrupted blocking read).
    Null,
}

impl Key {
    /// The single ASCII byte this key represents in NORMAL/VISUAL/CMD mode
    /// dispatch, if any. Multi-byte UTF-8 and non-textual keys have none.
    pub fn as_ascii(&self) -> Option<u8> {
        match self {
            Key::Byte(b) if b.is_ascii() => Some(*b),
            _ => None,
        }
    }

    /// The raw bytes to insert into the buffer for a printable key, if any.
    pub fn insertable_bytes(&self) -> Option<&[u8]> {
        match self {
            Key::Byte(b) if *b >= 32 && *b != 127 => Some(std::slice::from_ref(b)),
            Key::Utf8(bytes) => Some(bytes),
            Key::Tab => Some(&b"\t"[..]),
            _ => None,
        }
    }
}
