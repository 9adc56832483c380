//! Literal substring search, plain and anchor-aware.
//!
//! None of these wrap around the end (or start) of the buffer — a search
//! that falls off the edge simply reports no match, mirroring a single
//! forward/backward scan rather than a circular one.

use crate::buffer::line_index::LineIndex;
use crate::ex::pattern::Pattern;

pub fn find_next(bytes: &[u8], from: usize, pat: &[u8]) -> Option<usize> {
    if pat.is_empty() || from >= bytes.len() {
        return None;
    }
    bytes[from..].windows(pat.len()).position(|w| w == pat).map(|p| p + from)
}

pub fn find_prev(bytes: &[u8], before: usize, pat: &[u8]) -> Option<usize> {
    if pat.is_empty() {
        return None;
    }
    let limit = before.min(bytes.len());
    bytes[..limit].windows(pat.len()).rposition(|w| w == pat)
}

pub(crate) fn line_match_forward(bytes: &[u8], line_start: usize, pat: &Pattern, min_start: usize) -> Option<usize> {
    let le = LineIndex::line_end(bytes, line_start);
    let line = &bytes[line_start..le];

    if pat.text.is_empty() {
        return if (pat.anchor_start || pat.anchor_end) && line_start >= min_start {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_start && pat.anchor_end {
        return if line == pat.text.as_slice() && line_start >= min_start {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_start {
        return if line.starts_with(pat.text.as_slice()) && line_start >= min_start {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_end {
        if line.len() >= pat.text.len() && line[line.len() - pat.text.len()..] == pat.text[..] {
            let pos = le - pat.text.len();
            return if pos >= min_start { Some(pos) } else { None };
        }
        return None;
    }
    let start_off = min_start.saturating_sub(line_start).min(line.len());
    line[start_off..]
        .windows(pat.text.len())
        .position(|w| w == pat.text.as_slice())
        .map(|p| line_start + start_off + p)
}

fn line_match_backward(bytes: &[u8], line_start: usize, pat: &Pattern, before: usize) -> Option<usize> {
    let le = LineIndex::line_end(bytes, line_start);
    let line = &bytes[line_start..le];
    let limit = before.saturating_sub(line_start).min(line.len());

    if pat.text.is_empty() {
        return if (pat.anchor_start || pat.anchor_end) && line_start < before {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_start && pat.anchor_end {
        return if line == pat.text.as_slice() && line_start < before {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_start {
        return if line.starts_with(pat.text.as_slice()) && line_start < before {
            Some(line_start)
        } else {
            None
        };
    }
    if pat.anchor_end {
        if line.len() >= pat.text.len() && line[line.len() - pat.text.len()..] == pat.text[..] {
            let pos = le - pat.text.len();
            return if pos < before { Some(pos) } else { None };
        }
        return None;
    }
    line[..limit]
        .windows(pat.text.len())
        .rposition(|w| w == pat.text.as_slice())
        .map(|p| line_start + p)
}

/// Forward anchored search starting no earlier than `min_start`.
pub fn find_anchored_next(bytes: &[u8], min_start: usize, pat: &Pattern) -> Option<usize> {
    let mut line_start = LineIndex::line_start(bytes, min_start.min(bytes.len()));
    loop {
        if let Some(m) = line_match_forward(bytes, line_start, pat, min_start) {
            return Some(m);
        }
        let le = LineIndex::line_end(bytes, line_start);
        if le >= bytes.len() {
            return None;
        }
        line_start = le + 1;
    }
}

/// Backward anchored search ending strictly before `before`.
pub fn find_anchored_prev(bytes: &[u8], before: usize, pat: &Pattern) -> Option<usize> {
    let mut line_start = LineIndex::line_start(bytes, before.min(bytes.len()));
    loop {
        if let Some(m) = line_match_backward(bytes, line_start, pat, before) {
            return Some(m);
        }
        if line_start == 0 {
            return None;
        }
        line_start = LineIndex::line_start(bytes, line_start - 1);
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
