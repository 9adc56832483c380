//! NORMAL/VISUAL key dispatch: counts, pending operators, motions and text
//! objects. INSERT and CMD mode key handling live closer to their owners
//! ([`crate::edit_ops`] and [`crate::ex`] respectively) since they're
//! simple enough not to need a state machine of their own.

pub mod motion;
pub mod textobject;

use crate::edit_ops::EditOps;
use crate::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Delete,
    Yank,
    Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FindKind {
    Find,
    Till,
}

/// What the engine wants the caller (the editor's main loop) to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    EnterInsert,
    EnterVisual,
    ExitVisual,
    EnterCmd(char),
    RepeatSearch { forward: bool },
    /// Report a transient message on the status line (e.g. "find cancelled").
    Status(String),
}

#[derive(Debug)]
pub struct ModalEngine {
    count: Option<usize>,
    pending_op: Option<Operator>,
    pending_g: bool,
    pending_find: Option<FindKind>,
    pending_inner: bool,
    /// Number of text rows a `(`/`)` page jump covers; set by the editor
    /// from the terminal's window size.
    page_rows: usize,
}

impl Default for ModalEngine {
    fn default() -> Self {
        ModalEngine {
            count: None,
            pending_op: None,
            pending_g: false,
            pending_find: None,
            pending_inner: false,
            page_rows: 1,
        }
    }
}

impl ModalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the page size used by `(`/`)`. Call after every resize.
    pub fn set_page_rows(&mut self, rows: usize) {
        self.page_rows = rows.max(1);
    }

    fn take_count(&mut self) -> usize {
        self.count.take().unwrap_or(1)
    }

    fn reset_pending(&mut self) {
        self.count = None;
        self.pending_op = None;
        self.pending_g = false;
        self.pending_find = None;
        self.pending_inner = false;
    }

    fn apply_range(&self, op: Operator, ops: &mut EditOps, cur: &mut usize, start: usize, end: usize, linewise: bool) -> Action {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        match op {
            Operator::Yank => {
                ops.yank(lo, hi - lo, linewise);
                *cur = lo.min(ops.len());
                Action::None
            }
            Operator::Delete => {
                ops.yank(lo, hi - lo, linewise);
                ops.delete_range(lo, hi - lo, *cur);
                *cur = lo.min(ops.len());
                Action::None
            }
            Operator::Change => {
                ops.yank(lo, hi - lo, linewise);
                ops.delete_range(lo, hi - lo, *cur);
                *cur = lo.min(ops.len());
                ops.begin_insert_group();
                Action::EnterInsert
            }
        }
    }

    /// Whole-line operation for a repeated operator key (`dd`, `yy`, `cc`),
    /// covering `count` lines including their trailing newlines.
    fn apply_linewise_current(&self, op: Operator, ops: &mut EditOps, cur: &mut usize, count: usize) -> Action {
        let start = crate::buffer::line_index::LineIndex::line_start(ops.bytes(), *cur);
        let mut end = start;
        for _ in 0..count {
            let le = crate::buffer::line_index::LineIndex::line_end(ops.bytes(), end);
            end = if le < ops.len() { le + 1 } else { le };
        }
        self.apply_range(op, ops, cur, start, end, true)
    }

    /// `n`-counted `f`/`t`: repeatedly lands on the next occurrence of
    /// `target`, same as `original_source/edit.c`'s `motionf`/`motiont`
    /// loops — a failure at any step leaves the cursor untouched rather
    /// than applying a partial motion.
    fn apply_find(&mut self, kind: FindKind, target: u8, ops: &mut EditOps, cur: &mut usize) -> Action {
        let n = self.take_count();
        let mut scan = *cur;
        for _ in 0..n {
            match motion::motion_find_forward(ops.bytes(), scan, target) {
                Some(found) => scan = found,
                None => {
                    self.pending_op = None;
                    return Action::None;
                }
            }
        }
        let mut dest = match kind {
            FindKind::Find => scan,
            FindKind::Till => {
                let ls = crate::buffer::line_index::LineIndex::line_start(ops.bytes(), *cur);
                if scan <= ls {
                    ls
                } else {
                    crate::utf::prev(ops.bytes(), scan)
                }
            }
        };
        if let Some(op) = self.pending_op.take() {
            // Both `f` and `t` land on a character that an operator should
            // still cover, so the range extends one codepoint past it.
            dest = crate::utf::next(ops.bytes(), dest);
            return self.apply_range(op, ops, cur, *cur, dest, false);
        }
        *cur = dest;
        Action::None
    }

    /// A byte-level motion key, applied `count` times. Returns `None` if
    /// `b` isn't one of the simple repeatable motions.
    fn compute_simple_motion(&self, b: u8, ops: &mut EditOps, cur: usize, count: usize) -> Option<usize> {
        let mut pos = cur;
        match b {
            b'h' => {
                for _ in 0..count {
                    pos = motion::motion_h(ops.bytes(), pos);
                }
            }
            b'l' => {
                for _ in 0..count {
                    pos = motion::motion_l(ops.bytes(), pos);
                }
            }
            b'j' => {
                for _ in 0..count {
                    pos = motion::motion_j(ops.bytes(), &mut ops.lines, pos);
                }
            }
            b'k' => {
                for _ in 0..count {
                    pos = motion::motion_k(ops.bytes(), &mut ops.lines, pos);
                }
            }
            b'w' => {
                for _ in 0..count {
                    pos = motion::motion_word_forward(ops.bytes(), pos);
                }
            }
            b'b' => {
                for _ in 0..count {
                    pos = motion::motion_word_backward(ops.bytes(), pos);
                }
            }
            b'e' => {
                for _ in 0..count {
                    pos = motion::motion_word_end(ops.bytes(), pos);
                }
            }
            b'0' => pos = motion::motion_bol(ops.bytes(), pos),
            b'$' => pos = motion::motion_eol(ops.bytes(), pos),
            // `(`/`)` ignore `count` entirely — they always jump one page
            // (`page_rows` text rows), not `count` pages.
            b'(' => pos = motion::motion_page_up(ops.bytes(), &mut ops.lines, cur, self.page_rows),
            b')' => pos = motion::motion_page_down(ops.bytes(), &mut ops.lines, cur, self.page_rows),
            _ => return None,
        }
        Some(pos)
    }

    /// `e` and `f` land ON their target, so when an operator is pending the
    /// range must extend one codepoint further to include it.
    fn motion_is_inclusive(b: u8) -> bool {
        matches!(b, b'e' | b'$')
    }

    fn is_simple_motion_key(b: u8) -> bool {
        matches!(b, b'h' | b'l' | b'j' | b'k' | b'w' | b'b' | b'e' | b'0' | b'$' | b'(' | b')')
    }

    /// Cancel a pending `f`/`t` the way ESC or the terminal's null-key
    /// sentinel do: report "find cancelled" and reset pending state. Returns
    /// `false` (and does nothing) if no find was pending.
    pub fn cancel_pending_find(&mut self) -> bool {
        if self.pending_find.is_none() {
            return false;
        }
        self.reset_pending();
        true
    }

    pub fn handle_normal(&mut self, key: &Key, ops: &mut EditOps, cur: &mut usize, anchor: &mut usize) -> Action {
        if matches!(key, Key::Escape) {
            let had_find = self.pending_find.is_some();
            self.reset_pending();
            return if had_find { Action::Status("find cancelled".to_string()) } else { Action::None };
        }
        let b = match key.as_ascii() {
            Some(b) => b,
            None => match key {
                Key::Up => b'k',
                Key::Down => b'j',
                Key::Left => b'h',
                Key::Right => b'l',
                _ => return Action::None,
            },
        };

        if let Some(kind) = self.pending_find.take() {
            return self.apply_find(kind, b, ops, cur);
        }

        if self.pending_inner {
            self.pending_inner = false;
            let op = self.pending_op.take();
            self.count = None;
            return match textobject::find_inner_pair(ops.bytes(), *cur, b) {
                Some((start, end)) => {
                    if let Some(op) = op {
                        self.apply_range(op, ops, cur, start, end, false)
                    } else {
                        *cur = start;
                        Action::None
                    }
                }
                None => Action::Status("no inner text object".to_string()),
            };
        }

        if self.pending_g {
            self.pending_g = false;
            if b == b'g' {
                let row = self.count.take().map(|c| c.saturating_sub(1)).unwrap_or(0);
                let target = motion::motion_goto_line(ops.bytes(), &mut ops.lines, row);
                if let Some(op) = self.pending_op.take() {
                    return self.apply_range(op, ops, cur, *cur, target, false);
                }
                *cur = target;
            }
            return Action::None;
        }

        if b.is_ascii_digit() && !(b == b'0' && self.count.is_none()) {
            self.count = Some(self.count.unwrap_or(0) * 10 + (b - b'0') as usize);
            return Action::None;
        }

        if let Some(op) = self.pending_op {
            if (op == Operator::Delete && b == b'd')
                || (op == Operator::Yank && b == b'y')
                || (op == Operator::Change && b == b'c')
            {
                let n = self.take_count();
                self.pending_op = None;
                return self.apply_linewise_current(op, ops, cur, n);
            }
        }

        if Self::is_simple_motion_key(b) {
            let count = self.take_count();
            let target = self
                .compute_simple_motion(b, ops, *cur, count)
                .expect("is_simple_motion_key guarantees a motion");
            if let Some(op) = self.pending_op.take() {
                let target = if Self::motion_is_inclusive(b) {
                    crate::utf::next(ops.bytes(), target)
                } else {
                    target
                };
                return self.apply_range(op, ops, cur, *cur, target, false);
            }
            *cur = target;
            return Action::None;
        }

        match b {
            b'g' => {
                self.pending_g = true;
                Action::None
            }
            b'G' => {
                // An explicit count lands on the (count - 1)th line, 0-based.
                let row = self
                    .count
                    .take()
                    .map(|c| c.saturating_sub(1))
                    .unwrap_or_else(|| ops.lines.count(ops.bytes()) - 1);
                let target = motion::motion_goto_line(ops.bytes(), &mut ops.lines, row);
                if let Some(op) = self.pending_op.take() {
                    self.apply_range(op, ops, cur, *cur, target, false)
                } else {
                    *cur = target;
                    Action::None
                }
            }
            b'f' => {
                self.pending_find = Some(FindKind::Find);
                Action::None
            }
            b't' => {
                self.pending_find = Some(FindKind::Till);
                Action::None
            }
            b'i' if self.pending_op.is_some() => {
                self.pending_inner = true;
                Action::None
            }
            b'd' => {
                self.pending_op = Some(Operator::Delete);
                Action::None
            }
            b'y' => {
                self.pending_op = Some(Operator::Yank);
                Action::None
            }
            b'c' => {
                self.pending_op = Some(Operator::Change);
                Action::None
            }
            b'x' => {
                let n = self.take_count();
                self.pending_op = None;
                let mut end = *cur;
                for _ in 0..n {
                    if end >= ops.len() {
                        break;
                    }
                    end = crate::utf::next(ops.bytes(), end);
                }
                if end > *cur {
                    self.apply_range(Operator::Delete, ops, cur, *cur, end, false)
                } else {
                    Action::None
                }
            }
            b'u' => {
                self.reset_pending();
                if let Some(restored) = ops.undo() {
                    *cur = restored;
                }
                Action::None
            }
            b'p' => {
                self.reset_pending();
                *cur = ops.paste_after(*cur);
                Action::None
            }
            b'i' => {
                self.reset_pending();
                ops.begin_insert_group();
                Action::EnterInsert
            }
            b'a' => {
                self.reset_pending();
                if *cur < ops.len() {
                    *cur = crate::utf::next(ops.bytes(), *cur);
                }
                ops.begin_insert_group();
                Action::EnterInsert
            }
            b'A' => {
                self.reset_pending();
                *cur = motion::motion_eol(ops.bytes(), *cur);
                if *cur < ops.len() {
                    *cur = crate::utf::next(ops.bytes(), *cur);
                }
                ops.begin_insert_group();
                Action::EnterInsert
            }
            b'o' => {
                self.reset_pending();
                *cur = ops.open_below(*cur);
                ops.begin_insert_group();
                Action::EnterInsert
            }
            b'O' => {
                self.reset_pending();
                *cur = ops.open_above(*cur);
                ops.begin_insert_group();
                Action::EnterInsert
            }
            b'C' => {
                // Operator `c`, count reset to 0, motion `$` — the pending
                // count (if any) is discarded, not applied.
                self.count = None;
                let end = crate::buffer::line_index::LineIndex::line_end(ops.bytes(), *cur);
                self.apply_range(Operator::Change, ops, cur, *cur, end, false)
            }
            b'v' => {
                self.reset_pending();
                *anchor = *cur;
                Action::EnterVisual
            }
            b':' => {
                self.reset_pending();
                Action::EnterCmd(':')
            }
            b'/' => {
                self.reset_pending();
                Action::EnterCmd('/')
            }
            b'n' => {
                self.reset_pending();
                Action::RepeatSearch { forward: true }
            }
            b'N' => {
                self.reset_pending();
                Action::RepeatSearch { forward: false }
            }
            _ => {
                if let Some(op) = self.pending_op.take() {
                    let name = match op {
                        Operator::Delete => 'd',
                        Operator::Yank => 'y',
                        Operator::Change => 'c',
                    };
                    self.reset_pending();
                    Action::Status(format!("op {name} cancelled"))
                } else {
                    Action::None
                }
            }
        }
    }

    pub fn handle_visual(&mut self, key: &Key, ops: &mut EditOps, cur: &mut usize, anchor: &mut usize) -> Action {
        if matches!(key, Key::Escape) {
            self.reset_pending();
            return Action::ExitVisual;
        }
        let b = match key.as_ascii() {
            Some(b) => b,
            None => match key {
                Key::Up => b'k',
                Key::Down => b'j',
                Key::Left => b'h',
                Key::Right => b'l',
                _ => return Action::None,
            },
        };
        if b == b'v' {
            return Action::ExitVisual;
        }
        if b == b':' {
            return Action::EnterCmd(':');
        }
        if b == b'/' {
            return Action::EnterCmd('/');
        }

        if b.is_ascii_digit() && !(b == b'0' && self.count.is_none()) {
            self.count = Some(self.count.unwrap_or(0) * 10 + (b - b'0') as usize);
            return Action::None;
        }
        let count = self.take_count();
        if let Some(target) = self.compute_simple_motion(b, ops, *cur, count) {
            *cur = target;
            return Action::None;
        }

        // The visual selection's upper bound reaches one codepoint past the
        // cursor so the character under the cursor is included.
        let sel_end = crate::utf::next(ops.bytes(), (*cur).max(*anchor));
        let sel_start = (*cur).min(*anchor);

        match b {
            b'd' => {
                self.apply_range(Operator::Delete, ops, cur, sel_start, sel_end, false);
                Action::ExitVisual
            }
            b'y' => {
                self.apply_range(Operator::Yank, ops, cur, sel_start, sel_end, false);
                Action::ExitVisual
            }
            b'c' => self.apply_range(Operator::Change, ops, cur, sel_start, sel_end, false),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
