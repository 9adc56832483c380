//! The `:s` engine: delimiter parsing, range determination, and the
//! per-line replace loop.

use crate::edit_ops::EditOps;
use crate::ex::pattern::{parse_pattern, Pattern};
use crate::ex::search::line_match_forward;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstituteCmd {
    pub pattern: Pattern,
    pub replacement: Vec<u8>,
    pub global: bool,
}

/// Split `rest` (everything after the delimiter byte) on that delimiter,
/// treating `\<delim>` as an escaped literal delimiter. Any other escape
/// sequence is left untouched for [`crate::ex::pattern::parse_pattern`] to
/// interpret.
fn split_delimited(rest: &[u8], delim: u8) -> Vec<Vec<u8>> {
    let mut parts = Vec::new();
    let mut cur = Vec::new();
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == b'\\' && i + 1 < rest.len() && rest[i + 1] == delim {
            cur.push(delim);
            i += 2;
            continue;
        }
        if rest[i] == delim {
            parts.push(std::mem::take(&mut cur));
            i += 1;
            continue;
        }
        cur.push(rest[i]);
        i += 1;
    }
    parts.push(cur);
    parts
}

/// Parse `s<delim>pattern<delim>replacement[<delim>flags]`. `text` must
/// start with the `s`.
pub fn parse_substitute(text: &[u8]) -> Option<SubstituteCmd> {
    if text.first() != Some(&b's') {
        return None;
    }
    let body = &text[1..];
    let delim = *body.first()?;
    if delim.is_ascii_alphanumeric() || delim == b'\\' {
        return None;
    }
    let parts = split_delimited(&body[1..], delim);
    if parts.len() < 2 {
        return None;
    }
    let pattern = parse_pattern(&parts[0]);
    let replacement = parts[1].clone();
    let global = parts.get(2).is_some_and(|f| f.contains(&b'g'));
    Some(SubstituteCmd { pattern, replacement, global })
}

/// Run the substitution over 1-based inclusive line range
/// `[start_row, end_row]`. Returns the number of replacements made and the
/// byte offset of the first match (before its replacement shifts anything
/// after it), mirroring the original C `subcmd`'s `firsthit` tracking so the
/// caller can land the cursor on it.
pub fn substitute(ops: &mut EditOps, start_row: usize, end_row: usize, cmd: &SubstituteCmd) -> (usize, Option<usize>) {
    // An anchored-but-empty pattern (e.g. `s/^//g`) never matches; a plain
    // empty pattern with no anchor already never matches in line_match_forward.
    if cmd.pattern.text.is_empty() && (cmd.pattern.anchor_start || cmd.pattern.anchor_end) {
        return (0, None);
    }

    let mut made = 0;
    let mut first_hit = None;
    let mut row = start_row;
    while row <= end_row {
        let row0 = row - 1;
        let line_start = ops.lines.offset_of_row(ops.bytes(), row0 as isize);
        let mut scan_from = line_start;
        loop {
            let Some(m) = line_match_forward(ops.bytes(), line_start, &cmd.pattern, scan_from) else {
                break;
            };
            if first_hit.is_none() {
                first_hit = Some(m);
            }
            ops.delete_range(m, cmd.pattern.text.len(), m);
            ops.insert(m, &cmd.replacement, m);
            made += 1;
            if !cmd.global {
                break;
            }
            scan_from = m + cmd.replacement.len();
        }
        row += 1;
    }
    (made, first_hit)
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
