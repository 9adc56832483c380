use super::*;

#[test]
fn count_is_one_for_empty_buffer() {
    let mut idx = LineIndex::new();
    assert_eq!(idx.count(b""), 1);
}

#[test]
fn count_tracks_newlines() {
    let mut idx = LineIndex::new();
    assert_eq!(idx.count(b"a\nb\nc"), 3);
}

#[test]
fn row_of_offset_finds_containing_line() {
    let mut idx = LineIndex::new();
    let b = b"abc\ndef\nghi";
    assert_eq!(idx.row_of_offset(b, 0), 0);
    assert_eq!(idx.row_of_offset(b, 3), 0);
    assert_eq!(idx.row_of_offset(b, 4), 1);
    assert_eq!(idx.row_of_offset(b, 10), 2);
}

#[test]
fn offset_of_row_clamps_out_of_range_rows() {
    let mut idx = LineIndex::new();
    let b = b"abc\ndef";
    assert_eq!(idx.offset_of_row(b, -1), 0);
    assert_eq!(idx.offset_of_row(b, 0), 0);
    assert_eq!(idx.offset_of_row(b, 1), 4);
    assert_eq!(idx.offset_of_row(b, 50), 4);
}

#[test]
fn dirty_flag_forces_rebuild_after_mutation() {
    let mut idx = LineIndex::new();
    let mut b = b"abc".to_vec();
    assert_eq!(idx.count(&b), 1);
    b.push(b'\n');
    b.extend_from_slice(b"def");
    idx.mark_dirty();
    assert_eq!(idx.count(&b), 2);
}

#[test]
fn line_start_and_end_scan_from_offset() {
    let b = b"abc\ndef\nghi";
    assert_eq!(LineIndex::line_start(b, 5), 4);
    assert_eq!(LineIndex::line_end(b, 5), 7);
    assert_eq!(LineIndex::line_start(b, 0), 0);
    assert_eq!(LineIndex::line_end(b, 10), 11);
}

#[test]
fn col_of_offset_expands_tabs_to_next_stop() {
    let b = b"a\tb";
    assert_eq!(LineIndex::col_of_offset(b, 0), 0);
    assert_eq!(LineIndex::col_of_offset(b, 1), 1);
    assert_eq!(LineIndex::col_of_offset(b, 2), 8);
}

#[test]
fn offset_at_col_stops_without_overshooting_a_tab() {
    let b = b"a\tbc";
    assert_eq!(LineIndex::offset_at_col(b, 0, 0), 0);
    assert_eq!(LineIndex::offset_at_col(b, 0, 1), 1);
    assert_eq!(LineIndex::offset_at_col(b, 0, 5), 1);
    assert_eq!(LineIndex::offset_at_col(b, 0, 8), 2);
    assert_eq!(LineIndex::offset_at_col(b, 0, 9), 3);
}

#[test]
fn gutter_width_is_zero_when_hidden() {
    let mut idx = LineIndex::new();
    assert_eq!(idx.gutter_width(b"a\nb\nc", false), 0);
}

#[test]
fn gutter_width_counts_digits_plus_space() {
    let mut idx = LineIndex::new();
    let b = (0..120).map(|_| b'\n').collect::<Vec<u8>>();
    assert_eq!(idx.gutter_width(&b, true), 4);
}

#[test]
fn row_zero_always_starts_at_offset_zero() {
    for b in [&b""[..], b"abc", b"\n", b"\n\n\n", b"line\nline\n"] {
        let mut idx = LineIndex::new();
        assert!(idx.count(b) >= 1);
        assert_eq!(idx.offset_of_row(b, 0), 0);
    }
}

#[test]
fn every_row_after_the_first_starts_just_past_a_newline() {
    for b in [&b"abc\ndef\nghi"[..], b"\n\n\n", b"a\nb\n", b"no newlines here"] {
        let mut idx = LineIndex::new();
        let rows = idx.count(b);
        for row in 1..rows {
            let start = idx.offset_of_row(b, row as isize);
            assert_eq!(b[start - 1], b'\n', "row {row} in {b:?} must start after a newline");
        }
    }
}

#[test]
fn col_of_offset_and_offset_at_col_round_trip_on_tabless_lines() {
    let b = b"hello world";
    let ls = LineIndex::line_start(b, 0);
    for off in 0..=b.len() {
        let col = LineIndex::col_of_offset(b, off);
        assert_eq!(LineIndex::offset_at_col(b, ls, col), off);
    }
}
