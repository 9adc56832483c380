use super::*;

#[test]
fn plain_pattern_has_no_anchors() {
    let p = parse_pattern(b"foo");
    assert_eq!(p.text, b"foo");
    assert!(!p.anchor_start);
    assert!(!p.anchor_end);
}

#[test]
fn caret_prefix_anchors_start() {
    let p = parse_pattern(b"^foo");
    assert_eq!(p.text, b"foo");
    assert!(p.anchor_start);
    assert!(!p.anchor_end);
}

#[test]
fn dollar_suffix_anchors_end() {
    let p = parse_pattern(b"foo$");
    assert_eq!(p.text, b"foo");
    assert!(!p.anchor_start);
    assert!(p.anchor_end);
}

#[test]
fn both_anchors() {
    let p = parse_pattern(b"^foo$");
    assert_eq!(p.text, b"foo");
    assert!(p.anchor_start);
    assert!(p.anchor_end);
}

#[test]
fn escaped_dollar_is_literal() {
    let p = parse_pattern(b"foo\\$");
    assert_eq!(p.text, b"foo$");
    assert!(!p.anchor_end);
}

#[test]
fn escaped_caret_is_literal() {
    let p = parse_pattern(b"\\^foo");
    assert_eq!(p.text, b"^foo");
    assert!(!p.anchor_start);
}

#[test]
fn escaped_backslash_before_dollar_keeps_anchor() {
    let p = parse_pattern(b"foo\\\\$");
    assert_eq!(p.text, b"foo\\");
    assert!(p.anchor_end);
}

#[test]
fn empty_pattern() {
    let p = parse_pattern(b"");
    assert!(p.text.is_empty());
    assert!(!p.anchor_start);
    assert!(!p.anchor_end);
}
