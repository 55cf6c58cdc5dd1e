use crate::{Cursor, LexemeKind, MalformedReason, ScanResult};

use super::escape::{eat_escape, EscapeSet};
use super::{malformed, with_text};

/// String literal `"..."` or unicode string literal `@"..."`.
///
/// Strings end at the first unescaped `"` on the same line. Escapes follow
/// the character literal rules; unicode strings also accept `\u`/`\U`.
/// Raw bytes are not validated here.
///
/// A bad escape does not stop the scan: the literal runs to its closing
/// quote and the whole thing becomes one Malformed lexeme carrying the first
/// escape error. A literal with no closing quote on its line is Malformed
/// (`UnterminatedString`) and stops before the line break.
pub fn scan_string<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    let (kind, open_len, set) = match (cursor.current(), cursor.peek()) {
        (b'"', _) => (LexemeKind::StringLiteral, 1, EscapeSet::Byte),
        (b'@', b'"') => (LexemeKind::UnicodeStringLiteral, 2, EscapeSet::Unicode),
        _ => return None,
    };
    let mut probe = *cursor;
    probe.advance_n(open_len);
    let body_start = probe.pos();
    let mut first_error = None;

    loop {
        match probe.skip_to_string_delim() {
            b'"' => break,
            b'\\' => {
                if let Err(reason) = eat_escape(&mut probe, set) {
                    first_error.get_or_insert(reason);
                }
            }
            _ => {
                return Some(malformed(
                    cursor,
                    &probe,
                    MalformedReason::UnterminatedString,
                ))
            }
        }
    }

    let body = probe.slice_from(body_start);
    probe.advance();
    Some(match first_error {
        Some(reason) => malformed(cursor, &probe, reason),
        None => with_text(cursor, &probe, kind, body),
    })
}
