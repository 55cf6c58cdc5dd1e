use crate::{Cursor, Lexeme, LexemeKind, ScanResult, Span};

/// Matches at the end of the source or on an embedded `0x00`/`0x1A` byte.
///
/// The lexeme covers the terminator byte when there is one (length 1) and
/// is empty at the true end of the source. It never consumes input, so the
/// cursor stays parked on the terminator.
pub fn scan_end_of_input<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    if !cursor.is_eof() {
        return None;
    }
    let start = cursor.pos().min(cursor.source_len());
    let len = u32::from(start < cursor.source_len());
    Some(ScanResult {
        lexeme: Lexeme {
            kind: LexemeKind::EndOfInput,
            text: cursor.slice(start, start + len),
            span: Span::new(start, len),
        },
        consumed: 0,
    })
}
