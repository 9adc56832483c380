//! Ex address parsing: `.`, `$`, digits, `/literal/`, `+n`/`-n` suffixes,
//! and `addr1,addr2` / `%` ranges.

use crate::buffer::line_index::LineIndex;
use crate::ex::search::find_next;

/// Unescape a `/literal/` address body the way the ex address parser does:
/// `\x` passes `x` through literally for ANY `x` (not just `^`/`$`/`\`) —
/// this has no anchors, unlike [`crate::ex::pattern::parse_pattern`].
fn scan_address_literal(input: &[u8]) -> (Vec<u8>, usize) {
    let mut lit = Vec::new();
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'\\' && i + 1 < input.len() {
            lit.push(input[i + 1]);
            i += 2;
            continue;
        }
        if input[i] == b'/' {
            break;
        }
        lit.push(input[i]);
        i += 1;
    }
    (lit, i)
}

fn parse_base<'a>(input: &'a [u8], bytes: &[u8], lines: &mut LineIndex, cur_row: usize) -> Option<(usize, &'a [u8])> {
    if input.is_empty() {
        return None;
    }
    match input[0] {
        b'.' => Some((cur_row + 1, &input[1..])),
        b'$' => Some((lines.count(bytes), &input[1..])),
        b'/' => {
            let (lit, i) = scan_address_literal(&input[1..]);
            if input.get(1 + i) != Some(&b'/') {
                return None;
            }
            let rest = &input[1 + i + 1..];
            if lit.is_empty() {
                return None;
            }
            // Search starts at the beginning of the current line, wrapping
            // to the start of the buffer if nothing is found past it.
            let start = lines.offset_of_row(bytes, cur_row as isize);
            let off = find_next(bytes, start, &lit).or_else(|| if start > 0 { find_next(bytes, 0, &lit) } else { None })?;
            Some((lines.row_of_offset(bytes, off) + 1, rest))
        }
        b'0'..=b'9' => {
            let mut i = 0;
            while i < input.len() && input[i].is_ascii_digit() {
                i += 1;
            }
            let n: usize = if i > 9 {
                1_000_000
            } else {
                std::str::from_utf8(&input[..i]).ok()?.parse().ok()?
            };
            Some((n.min(1_000_000), &input[i..]))
        }
        _ => None,
    }
}

/// Parse one address (base plus any `+n`/`-n` offsets), clamped to
/// `[1, line_count]`.
pub fn parse_address<'a>(input: &'a [u8], bytes: &[u8], lines: &mut LineIndex, cur_row: usize) -> Option<(usize, &'a [u8])> {
    let (mut row, mut rest) = parse_base(input, bytes, lines, cur_row)?;
    loop {
        match rest.first() {
            Some(&b'+') | Some(&b'-') => {
                let neg = rest[0] == b'-';
                let mut i = 1;
                while i < rest.len() && rest[i].is_ascii_digit() {
                    i += 1;
                }
                let n: i64 = if i > 1 {
                    std::str::from_utf8(&rest[1..i]).ok()?.parse().ok()?
                } else {
                    1
                };
                let signed = row as i64 + if neg { -n } else { n };
                row = signed.max(1) as usize;
                rest = &rest[i..];
            }
            _ => break,
        }
    }
    let count = lines.count(bytes);
    Some((row.clamp(1, count), rest))
}

/// Parse a range: `%`, `addr`, or `addr1,addr2`. Defaults to the current
/// line when nothing parses.
pub fn parse_range<'a>(input: &'a [u8], bytes: &[u8], lines: &mut LineIndex, cur_row: usize) -> (usize, usize, &'a [u8]) {
    if input.first() == Some(&b'%') {
        return (1, lines.count(bytes), &input[1..]);
    }
    match parse_address(input, bytes, lines, cur_row) {
        Some((a, rest)) => {
            if rest.first() == Some(&b',') {
                match parse_address(&rest[1..], bytes, lines, cur_row) {
                    Some((b, rest2)) => (a.min(b), a.max(b), rest2),
                    None => (a, a, rest),
                }
            } else {
                (a, a, rest)
            }
        }
        None => (cur_row + 1, cur_row + 1, input),
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
