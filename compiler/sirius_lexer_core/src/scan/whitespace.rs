use crate::chars::{is_newline, is_whitespace};
use crate::{Cursor, LexemeKind, ScanResult};

use super::spanning;

/// A run of intra-line whitespace, or exactly one line break.
///
/// Line breaks are never merged with each other or with the surrounding
/// run, so consumers can count lines from the stream. CRLF is one break.
pub fn scan_whitespace<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    let mut probe = *cursor;
    match cursor.current() {
        b if is_newline(b) => {
            probe.advance();
            if b == b'\r' && probe.current() == b'\n' {
                probe.advance();
            }
        }
        b if is_whitespace(b) => {
            probe.eat_whitespace();
        }
        _ => return None,
    }
    Some(spanning(cursor, &probe, LexemeKind::Whitespace))
}
