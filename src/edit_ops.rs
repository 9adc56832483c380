//! Primitive text mutations, wiring [`ByteBuffer`], [`LineIndex`] and
//! [`UndoLog`] together along with the single yank register.

use crate::buffer::line_index::LineIndex;
use crate::buffer::ByteBuffer;
use crate::undo::UndoLog;
use crate::utf;

pub struct EditOps {
    buffer: ByteBuffer,
    pub lines: LineIndex,
    pub undo: UndoLog,
    yank_text: Vec<u8>,
    yank_linewise: bool,
    /// Bumped on every actual mutation (including undo). The editor compares
    /// this before/after a key to derive the spec's buffer-wide dirty flag
    /// without EditOps having to know about save/load lifecycle itself.
    revision: u64,
}

impl EditOps {
    pub fn new() -> Self {
        EditOps::from_bytes(Vec::new())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        EditOps {
            buffer: ByteBuffer::from_bytes(bytes),
            lines: LineIndex::new(),
            undo: UndoLog::new(),
            yank_text: Vec::new(),
            yank_linewise: false,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Both the buffer bytes and the line index at once, as disjoint
    /// borrows — lets callers pass them to a `LineIndex` method without
    /// fighting the borrow checker over `&EditOps` vs `&mut ops.lines`.
    pub fn buffer_and_lines(&mut self) -> (&[u8], &mut LineIndex) {
        (self.buffer.as_bytes(), &mut self.lines)
    }

    pub fn has_yank(&self) -> bool {
        !self.yank_text.is_empty()
    }

    pub fn yank_is_linewise(&self) -> bool {
        self.yank_linewise
    }

    pub fn begin_insert_group(&mut self) {
        self.undo.begin_insert_group();
    }

    /// Insert `bytes` at `at`, recording an (optionally coalescing) undo
    /// record. Returns the offset just past the inserted text.
    pub fn insert(&mut self, at: usize, bytes: &[u8], cursor_before: usize) -> usize {
        if bytes.is_empty() {
            return at.min(self.buffer.len());
        }
        let at = self.buffer.insert_at(at, bytes);
        self.lines.mark_dirty();
        self.undo.push_insert(at, bytes, cursor_before);
        self.revision += 1;
        at + bytes.len()
    }

    /// Delete `n` bytes at `at`, recording an undo record. Returns the
    /// bytes removed.
    pub fn delete_range(&mut self, at: usize, n: usize, cursor_before: usize) -> Vec<u8> {
        let removed = self.buffer.delete_range(at, n);
        if !removed.is_empty() {
            self.lines.mark_dirty();
            self.undo.push_delete(at, removed.clone(), cursor_before);
            self.revision += 1;
        }
        removed
    }

    /// Copy `n` bytes starting at `at` into the yank register.
    pub fn yank(&mut self, at: usize, n: usize, linewise: bool) {
        let end = (at + n).min(self.buffer.len());
        if at >= end {
            self.yank_text.clear();
        } else {
            self.yank_text = self.buffer.as_bytes()[at..end].to_vec();
        }
        self.yank_linewise = linewise;
    }

    /// Paste the yank register after `cur`. Linewise pastes insert a new
    /// line after the current one; charwise pastes insert one codepoint
    /// past `cur`, or at `cur` itself when already at the end of buffer.
    /// The cursor lands on the insertion point itself, not past the pasted
    /// text.
    pub fn paste_after(&mut self, cur: usize) -> usize {
        if self.yank_text.is_empty() {
            return cur;
        }
        let text = self.yank_text.clone();
        let at = if self.yank_linewise {
            let le = LineIndex::line_end(self.buffer.as_bytes(), cur);
            if le < self.buffer.len() { le + 1 } else { le }
        } else if cur < self.buffer.len() {
            utf::next(self.buffer.as_bytes(), cur)
        } else {
            cur
        };
        self.insert(at, &text, cur);
        at
    }

    /// Open a blank line below the one containing `cur`. Returns the
    /// cursor offset on the new line.
    pub fn open_below(&mut self, cur: usize) -> usize {
        let at = LineIndex::line_end(self.buffer.as_bytes(), cur);
        let inserted_at = self.insert(at, b"\n", cur);
        inserted_at
    }

    /// Open a blank line above the one containing `cur`. Returns the
    /// cursor offset on the new line.
    pub fn open_above(&mut self, cur: usize) -> usize {
        let at = LineIndex::line_start(self.buffer.as_bytes(), cur);
        self.insert(at, b"\n", cur);
        at
    }

    /// Delete one codepoint before `cur`. Returns the new cursor offset.
    pub fn backspace(&mut self, cur: usize) -> usize {
        if cur == 0 {
            return 0;
        }
        let prev = utf::prev(self.buffer.as_bytes(), cur);
        self.delete_range(prev, cur - prev, cur);
        prev
    }

    /// Insert a single (possibly multi-byte) run at `cur`, coalescing with
    /// the current insert group. Returns the new cursor offset.
    pub fn insert_run(&mut self, cur: usize, bytes: &[u8]) -> usize {
        self.insert(cur, bytes, cur)
    }

    /// Insert a newline at `cur`. Returns the new cursor offset.
    pub fn insert_newline(&mut self, cur: usize) -> usize {
        self.insert(cur, b"\n", cur)
    }

    pub fn undo(&mut self) -> Option<usize> {
        let restored = self.undo.undo(&mut self.buffer, &mut self.lines);
        if restored.is_some() {
            self.revision += 1;
        }
        restored
    }

    /// Replace the whole buffer (file load) and reset undo history. Does
    /// not bump `revision` — a fresh load is never "dirty".
    pub fn replace_all(&mut self, bytes: Vec<u8>) {
        self.buffer = ByteBuffer::from_bytes(bytes);
        self.lines.mark_dirty();
        self.undo.clear();
    }
}

impl Default for EditOps {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "edit_ops_tests.rs"]
mod tests;
