use super::*;

const BUF: &[u8] = b"one\ntwo\nthree\nfour\n";

#[test]
fn dot_is_current_line_one_based() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b".", BUF, &mut lines, 1), Some((2, &b""[..])));
}

#[test]
fn dollar_is_last_line() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b"$", BUF, &mut lines, 0), Some((4, &b""[..])));
}

#[test]
fn digits_parse_directly() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b"3", BUF, &mut lines, 0), Some((3, &b""[..])));
}

#[test]
fn digits_cap_at_one_million() {
    let mut lines = LineIndex::new();
    let (row, _) = parse_address(b"99999999", BUF, &mut lines, 0).unwrap();
    assert_eq!(row, 4); // clamped to line count
}

#[test]
fn plus_and_minus_offsets() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b".+2", BUF, &mut lines, 0), Some((3, &b""[..])));
    assert_eq!(parse_address(b"$-1", BUF, &mut lines, 0), Some((3, &b""[..])));
}

#[test]
fn offset_clamps_to_first_line() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b".-5", BUF, &mut lines, 0), Some((1, &b""[..])));
}

#[test]
fn search_address_finds_next_matching_line() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_address(b"/two/", BUF, &mut lines, 0), Some((2, &b""[..])));
}

#[test]
fn percent_is_whole_buffer_range() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_range(b"%", BUF, &mut lines, 0), (1, 4, &b""[..]));
}

#[test]
fn explicit_comma_range() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_range(b"2,3", BUF, &mut lines, 0), (2, 3, &b""[..]));
}

#[test]
fn empty_range_defaults_to_current_line() {
    let mut lines = LineIndex::new();
    assert_eq!(parse_range(b"", BUF, &mut lines, 1), (2, 2, &b""[..]));
}
