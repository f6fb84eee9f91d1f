//! Тесты для курсора

use crate::parser::cursor::{Cursor, EOF_CHAR};
use crate::parser::Position;

#[test]
fn test_current_peek_advance() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.peek(), 'b');

    assert_eq!(cursor.advance(), 'a');
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.peek(), EOF_CHAR);

    assert_eq!(cursor.advance(), 'b');
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current(), EOF_CHAR);
    assert_eq!(cursor.advance(), EOF_CHAR);
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn test_line_and_column_tracking() {
    let mut cursor = Cursor::new("a\nbc");
    cursor.advance();
    assert_eq!(cursor.position(), Position::new(1, 2, 1));

    cursor.advance();
    assert_eq!(cursor.position(), Position::new(2, 1, 2));

    cursor.advance();
    assert_eq!(cursor.position(), Position::new(2, 2, 3));
}

#[test]
fn test_multibyte_characters() {
    let mut cursor = Cursor::new("жx");
    assert_eq!(cursor.advance(), 'ж');
    assert_eq!(cursor.offset(), 2);
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.current(), 'x');
}

#[test]
fn test_match_sequence_does_not_consume() {
    let cursor = Cursor::new("$tag$body");
    assert!(cursor.match_sequence("$tag$"));
    assert!(!cursor.match_sequence("$tags"));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_get_slice_is_clamped() {
    let cursor = Cursor::new("SELECT");
    assert_eq!(cursor.get_slice(0, 3), "SEL");
    assert_eq!(cursor.get_slice(3, 100), "ECT");
    assert_eq!(cursor.get_slice(100, 5), "");
}

#[test]
fn test_snapshot_restore() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance();
    let snapshot = cursor.snapshot();

    cursor.advance_by(3);
    assert_eq!(cursor.position().line, 2);

    cursor.restore(snapshot);
    assert_eq!(cursor.position(), Position::new(1, 2, 1));
    assert_eq!(cursor.current(), 'b');
}

#[test]
fn test_eat_while() {
    let mut cursor = Cursor::new("123abc");
    let len = cursor.eat_while(|ch| ch.is_ascii_digit());
    assert_eq!(len, 3);
    assert_eq!(cursor.rest(), "abc");
}
