use super::*;

#[test]
fn insert_at_end_appends() {
    let mut b = ByteBuffer::from_bytes(b"abc".to_vec());
    let at = b.insert_at(3, b"def");
    assert_eq!(at, 3);
    assert_eq!(b.as_bytes(), b"abcdef");
}

#[test]
fn insert_at_clamps_past_end() {
    let mut b = ByteBuffer::from_bytes(b"abc".to_vec());
    let at = b.insert_at(100, b"x");
    assert_eq!(at, 3);
    assert_eq!(b.as_bytes(), b"abcx");
}

#[test]
fn insert_in_middle_shifts_tail() {
    let mut b = ByteBuffer::from_bytes(b"ac".to_vec());
    b.insert_at(1, b"b");
    assert_eq!(b.as_bytes(), b"abc");
}

#[test]
fn delete_range_returns_removed_bytes() {
    let mut b = ByteBuffer::from_bytes(b"abcdef".to_vec());
    let removed = b.delete_range(2, 3);
    assert_eq!(removed, b"cde");
    assert_eq!(b.as_bytes(), b"abf");
}

#[test]
fn delete_range_clamps_length_past_end() {
    let mut b = ByteBuffer::from_bytes(b"abc".to_vec());
    let removed = b.delete_range(1, 100);
    assert_eq!(removed, b"bc");
    assert_eq!(b.as_bytes(), b"a");
}

#[test]
fn delete_range_past_end_is_noop() {
    let mut b = ByteBuffer::from_bytes(b"abc".to_vec());
    let removed = b.delete_range(10, 5);
    assert!(removed.is_empty());
    assert_eq!(b.as_bytes(), b"abc");
}

#[test]
fn set_len_grows_with_zero_bytes_and_shrinks() {
    let mut b = ByteBuffer::from_bytes(b"ab".to_vec());
    b.set_len(4);
    assert_eq!(b.as_bytes(), &[b'a', b'b', 0, 0]);
    b.set_len(1);
    assert_eq!(b.as_bytes(), b"a");
}
