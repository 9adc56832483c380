use super::*;
use crate::ex::pattern::parse_pattern;

#[test]
fn find_next_plain_substring() {
    let b = b"hello world";
    assert_eq!(find_next(b, 0, b"world"), Some(6));
    assert_eq!(find_next(b, 7, b"world"), None);
}

#[test]
fn find_prev_plain_substring() {
    let b = b"hello world hello";
    assert_eq!(find_prev(b, 17, b"hello"), Some(12));
    assert_eq!(find_prev(b, 12, b"hello"), Some(0));
}

#[test]
fn find_next_empty_pattern_is_no_match() {
    assert_eq!(find_next(b"abc", 0, b""), None);
}

#[test]
fn anchored_start_only_matches_line_head() {
    let b = b"xfoo\nfoobar\n";
    let pat = parse_pattern(b"^foo");
    assert_eq!(find_anchored_next(b, 0, &pat), Some(5));
}

#[test]
fn anchored_end_only_matches_line_tail() {
    let b = b"foobar\nbarfoo\n";
    let pat = parse_pattern(b"foo$");
    assert_eq!(find_anchored_next(b, 0, &pat), Some(10));
}

#[test]
fn anchored_both_matches_whole_line() {
    let b = b"foobar\nfoo\nfoobaz\n";
    let pat = parse_pattern(b"^foo$");
    assert_eq!(find_anchored_next(b, 0, &pat), Some(7));
}

#[test]
fn anchored_search_skips_to_next_line_when_current_exhausted() {
    let b = b"aaa\nbar\n";
    let pat = parse_pattern(b"bar");
    assert_eq!(find_anchored_next(b, 0, &pat), Some(4));
}

#[test]
fn anchored_prev_finds_last_match_before_bound() {
    let b = b"foo\nfoo\nfoo\n";
    let pat = parse_pattern(b"^foo$");
    assert_eq!(find_anchored_prev(b, 10, &pat), Some(8));
    assert_eq!(find_anchored_prev(b, 4, &pat), Some(0));
}
