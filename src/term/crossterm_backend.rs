//! crossterm-backed terminal implementation.

use std::io::{stdout, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::key::Key;
use crate::term::{Size, Terminal};

/// Poll timeout used to distinguish "nothing typed" from "resize happened",
/// mirroring the ~100ms VTIME window `original_source/term.c` uses.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct CrosstermTerminal {
    out: BufWriter<Stdout>,
    raw_mode: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        CrosstermTerminal {
            out: BufWriter::with_capacity(8192, stdout()),
            raw_mode: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    fn init(&mut self) -> Result<(), String> {
        terminal::enable_raw_mode().map_err(|e| format!("enable raw mode: {e}"))?;
        self.raw_mode = true;
        Ok(())
    }

    fn deinit(&mut self) {
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
        }
        let _ = self.out.write_all(b"\x1b[2 q\x1b[?25h");
        let _ = self.out.flush();
    }

    fn read_key(&mut self) -> Result<Key, String> {
        let available = event::poll(POLL_TIMEOUT).map_err(|e| format!("poll: {e}"))?;
        if !available {
            return Ok(Key::Null);
        }
        match event::read().map_err(|e| format!("read: {e}"))? {
            Event::Key(ev) => {
                if ev.kind == KeyEventKind::Release {
                    return Ok(Key::Null);
                }
                Ok(translate_key(ev.code, ev.modifiers))
            }
            Event::Resize(cols, rows) => Ok(Key::Resize(rows, cols)),
            _ => Ok(Key::Null),
        }
    }

    fn window_size(&self) -> Result<Size, String> {
        let (cols, rows) = terminal::size().map_err(|e| format!("terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), String> {
        self.out.write_all(bytes).map_err(|e| format!("write: {e}"))?;
        self.out.flush().map_err(|e| format!("flush: {e}"))
    }
}

fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = code {
            return Key::Ctrl(c.to_ascii_lowercase() as u8);
        }
    }
    match code {
        KeyCode::Char(c) => {
            if c.is_ascii() {
                Key::Byte(c as u8)
            } else {
                let mut buf = [0u8; 4];
                Key::Utf8(c.encode_utf8(&mut buf).as_bytes().to_vec())
            }
        }
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => Key::Null,
    }
}
