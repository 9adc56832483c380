//! Flat undo stack with insert coalescing.
//!
//! Unlike a full undo tree, this is a single stack: undoing pops the most
//! recent record and inverts it. Consecutive single-byte inserts that belong
//! to the same "insert group" (roughly, one unbroken run of typing) merge
//! into one record so a whole word of typing undoes in one step.

use crate::buffer::line_index::LineIndex;
use crate::buffer::ByteBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UndoKind {
    Insert,
    Delete,
}

#[derive(Debug, Clone)]
struct UndoRecord {
    kind: UndoKind,
    at: usize,
    text: Vec<u8>,
    group: u64,
    saved_cursor: usize,
}

/// Inverts and replays edits; guarded against re-entering itself while an
/// undo is being applied (applying an inverse must not itself get recorded).
#[derive(Debug, Default)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
    insert_group: u64,
    applying: bool,
}

impl UndoLog {
    pub fn new() -> Self {
        UndoLog {
            records: Vec::new(),
            insert_group: 0,
            applying: false,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Start a new coalescing group. Call on entering Insert mode, or any
    /// other time a run of inserts should not merge with a prior one.
    pub fn begin_insert_group(&mut self) {
        self.insert_group += 1;
    }

    /// Record an insertion of `bytes` at `at`. `saved_cursor` is where the
    /// cursor should land if this (possibly merged) record is undone.
    pub fn push_insert(&mut self, at: usize, bytes: &[u8], saved_cursor: usize) {
        if self.applying || bytes.is_empty() {
            return;
        }
        if let Some(top) = self.records.last_mut() {
            if top.kind == UndoKind::Insert && top.group == self.insert_group && top.at + top.text.len() == at {
                top.text.extend_from_slice(bytes);
                return;
            }
        }
        self.records.push(UndoRecord {
            kind: UndoKind::Insert,
            at,
            text: bytes.to_vec(),
            group: self.insert_group,
            saved_cursor,
        });
    }

    /// Record a deletion of `bytes` (the text that was removed) from `at`.
    /// Deletions never coalesce — each is its own record.
    pub fn push_delete(&mut self, at: usize, bytes: Vec<u8>, saved_cursor: usize) {
        if self.applying || bytes.is_empty() {
            return;
        }
        self.records.push(UndoRecord {
            kind: UndoKind::Delete,
            at,
            text: bytes,
            group: self.insert_group,
            saved_cursor,
        });
    }

    /// Pop and invert the most recent record, returning the cursor offset
    /// to restore. Returns `None` if there is nothing to undo.
    pub fn undo(&mut self, buffer: &mut ByteBuffer, line_index: &mut LineIndex) -> Option<usize> {
        let record = self.records.pop()?;
        self.applying = true;
        match record.kind {
            UndoKind::Insert => {
                buffer.delete_range(record.at, record.text.len());
            }
            UndoKind::Delete => {
                buffer.insert_at(record.at, &record.text);
            }
        }
        line_index.mark_dirty();
        self.applying = false;
        Some(record.saved_cursor.min(buffer.len()))
    }
}

#[cfg(test)]
#[path = "undo_tests.rs"]
mod tests;
