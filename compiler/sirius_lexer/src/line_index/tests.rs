use pretty_assertions::assert_eq;

use super::*;

fn lc(line: u32, col: u32) -> LineCol {
    LineCol { line, col }
}

#[test]
fn empty_source_has_one_line() {
    let index = LineIndex::new(b"");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_col(0), lc(1, 1));
}

#[test]
fn lf_lines() {
    let index = LineIndex::new(b"ab\ncd\n");
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(0), lc(1, 1));
    assert_eq!(index.line_col(2), lc(1, 3));
    assert_eq!(index.line_col(3), lc(2, 1));
    assert_eq!(index.line_col(4), lc(2, 2));
    assert_eq!(index.line_col(6), lc(3, 1));
}

#[test]
fn crlf_is_one_break() {
    let index = LineIndex::new(b"a\r\nb\rc");
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(3), lc(2, 1));
    assert_eq!(index.line_col(5), lc(3, 1));
}

#[test]
fn lf_cr_is_two_breaks() {
    let index = LineIndex::new(b"a\n\rb");
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(3), lc(3, 1));
}

#[test]
fn offsets_past_the_end_clamp() {
    let index = LineIndex::new(b"ab\ncd");
    assert_eq!(index.line_col(100), lc(2, 3));
}

#[test]
fn span_bounds() {
    let index = LineIndex::new(b"one\ntwo");
    assert_eq!(
        index.span_bounds(Span::new(2, 4)),
        (lc(1, 3), lc(2, 3))
    );
}

#[test]
fn line_span_excludes_the_break() {
    let source = b"first\r\nsecond\nthird";
    let index = LineIndex::new(source);
    assert_eq!(index.line_span(1, source), Some(Span::new(0, 5)));
    assert_eq!(index.line_span(2, source), Some(Span::new(7, 6)));
    assert_eq!(index.line_span(3, source), Some(Span::new(14, 5)));
    assert_eq!(index.line_span(0, source), None);
    assert_eq!(index.line_span(4, source), None);
}

#[test]
fn line_span_of_trailing_empty_line() {
    let source = b"x\n";
    let index = LineIndex::new(source);
    assert_eq!(index.line_span(2, source), Some(Span::new(2, 0)));
}
