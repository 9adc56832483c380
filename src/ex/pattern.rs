//! Literal (non-regex) ex search patterns with `^`/`$` anchors.
//!
//! `^` as the first byte and `$` as the last byte are structural anchors
//! unless preceded by an odd number of backslashes, in which case they're
//! literal characters. `\^`, `\$` and `\\` always unescape to the literal
//! character.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub text: Vec<u8>,
    pub anchor_start: bool,
    pub anchor_end: bool,
}

/// Left-to-right scan mirroring the C original: `\` followed by any byte
/// (save a trailing backslash) passes that byte through literally and
/// marks it ineligible as an anchor; a leading `^` before any literal byte
/// has been emitted sets `anchor_start`, and a trailing unescaped `$` sets
/// `anchor_end` and is dropped from the literal.
pub fn parse_pattern(raw: &[u8]) -> Pattern {
    let mut out = Vec::with_capacity(raw.len());
    let mut anchor_start = false;
    let mut esc = false;
    let mut lastesc = false;
    let mut i = 0;
    while i < raw.len() {
        let c = raw[i];
        if !esc && c == b'\\' && i + 1 < raw.len() {
            esc = true;
            i += 1;
            continue;
        }
        lastesc = esc;
        esc = false;
        if out.is_empty() && !lastesc && c == b'^' {
            anchor_start = true;
            i += 1;
            continue;
        }
        out.push(c);
        i += 1;
    }

    let mut anchor_end = false;
    if !out.is_empty() && *out.last().unwrap() == b'$' && !lastesc {
        anchor_end = true;
        out.pop();
    }

    Pattern {
        text: out,
        anchor_start,
        anchor_end,
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
