use crate::SourceBuffer;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn copies_move_independently() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    let mut probe = cursor;
    probe.advance_n(2);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(probe.current(), b'c');
}

// === Peek ===

#[test]
fn peek_reads_next_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_past_last_byte_reads_padding() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn peek_from_sentinel_safe_at_cache_line_edges() {
    for len in [62, 63, 64] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        cursor.advance_n(len as u32);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.peek(), 0, "source length {len}");
    }
}

// === End of Input ===

#[test]
fn eof_at_source_end() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn embedded_nul_is_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn embedded_sub_is_eof() {
    let buf = SourceBuffer::new("a\x1Ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn line_end_detection() {
    let buf = SourceBuffer::new("a\r\nb");
    let mut cursor = buf.cursor();
    assert!(!cursor.at_line_end());
    cursor.advance();
    assert!(cursor.at_line_end());
}

// === Slicing ===

#[test]
fn slice_and_slice_from() {
    let buf = SourceBuffer::new("hello world");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.slice(6, 11), b"world");
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), b"hello");
}

#[test]
fn slice_clamps_to_source() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 5), b"");
}

#[test]
fn rest_follows_position() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.rest(), b"bc");
    cursor.advance_n(2);
    assert_eq!(cursor.rest(), b"");
}

// === Bulk Consumption ===

#[test]
fn eat_while_counts_bytes() {
    let buf = SourceBuffer::new("aaab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_while(|b| b == b'a'), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_source_end() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_while(|_| true), 3);
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_at_most_respects_limit() {
    let buf = SourceBuffer::new("77777");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_at_most(2, |b| b == b'7'), 2);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_whitespace_covers_all_intra_line_spaces() {
    let buf = SourceBuffer::new(" \t\x0B\x0Cx");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_whitespace(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_whitespace_stops_at_newline() {
    let buf = SourceBuffer::new("  \n");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_whitespace(), 2);
    assert_eq!(cursor.current(), b'\n');
}

// === UTF-8 ===

#[test]
fn utf8_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
    assert_eq!(Cursor::utf8_char_width(0xFF), 1);
}

#[test]
fn eat_utf8_char_accepts_scalar() {
    let buf = SourceBuffer::new("\u{1F600}!");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_utf8_char());
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'!');
}

#[test]
fn eat_utf8_char_rejects_truncated_sequence() {
    let buf = SourceBuffer::new(&[0xE2, 0x82][..]);
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_utf8_char());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_utf8_char_rejects_surrogate_encoding() {
    let buf = SourceBuffer::new(&[0xED, 0xA0, 0x80][..]);
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_utf8_char());
}

// === String Delimiters ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("abc\"rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_earliest() {
    let buf = SourceBuffer::new("a\\b\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_stops_at_line_breaks_and_terminators() {
    for (source, expected) in [
        ("ab\ncd\"", b'\n'),
        ("ab\rcd\"", b'\r'),
        ("ab\0cd\"", 0),
        ("ab\x1Acd\"", 0x1A),
    ] {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.skip_to_string_delim(), expected, "{source:?}");
        assert_eq!(cursor.pos(), 2, "{source:?}");
    }
}

#[test]
fn skip_to_string_delim_hits_end() {
    let buf = SourceBuffer::new("no delimiter");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert_eq!(cursor.pos(), 12);
    assert!(cursor.is_eof());
}
