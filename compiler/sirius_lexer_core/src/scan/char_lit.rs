use crate::chars::is_printable_ascii;
use crate::{Cursor, LexemeKind, MalformedReason, ScanResult};

use super::escape::{eat_escape, EscapeSet};
use super::{malformed, with_text};

/// Character literal `'c'` or rune literal `@'c'`.
///
/// A character literal holds one printable ASCII byte or one escape. A rune
/// literal holds one UTF-8 encoded scalar value or one escape, including
/// `\u`/`\U`. On success the lexeme text is the body between the quotes.
///
/// Errors produce a Malformed lexeme. When the literal is closed later on
/// the same line the lexeme extends through the closing quote, so scanning
/// resumes after it. Otherwise it stops before the line break.
pub fn scan_char_or_rune<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    let (kind, open_len, set) = match (cursor.current(), cursor.peek()) {
        (b'\'', _) => (LexemeKind::CharLiteral, 1, EscapeSet::Byte),
        (b'@', b'\'') => (LexemeKind::RuneLiteral, 2, EscapeSet::Unicode),
        _ => return None,
    };
    let mut probe = *cursor;
    probe.advance_n(open_len);
    let body_start = probe.pos();

    if probe.current() == b'\'' {
        probe.advance();
        return Some(malformed(cursor, &probe, MalformedReason::EmptyLiteral));
    }

    if let Err(reason) = eat_body_char(&mut probe, set) {
        return Some(recover(cursor, probe, reason));
    }

    if probe.current() != b'\'' {
        return Some(recover(cursor, probe, MalformedReason::MultiCharLiteral));
    }
    let body = probe.slice_from(body_start);
    probe.advance();
    Some(with_text(cursor, &probe, kind, body))
}

/// Consume exactly one logical character of a literal body.
fn eat_body_char(probe: &mut Cursor<'_>, set: EscapeSet) -> Result<(), MalformedReason> {
    if probe.at_line_end() {
        return Err(MalformedReason::UnterminatedChar);
    }
    let b = probe.current();
    if b == b'\\' {
        return eat_escape(probe, set);
    }
    if is_printable_ascii(b) {
        probe.advance();
        return Ok(());
    }
    if set == EscapeSet::Unicode && b >= 0x80 {
        return if probe.eat_utf8_char() {
            Ok(())
        } else {
            probe.advance();
            Err(MalformedReason::InvalidUtf8)
        };
    }
    probe.advance();
    Err(MalformedReason::NonPrintableChar)
}

/// Skip to the closing quote on the current line and report `reason` over
/// the whole literal. Without a closing quote the literal is unterminated.
#[cold]
fn recover<'a>(start: &Cursor<'a>, mut probe: Cursor<'a>, reason: MalformedReason) -> ScanResult<'a> {
    let closed = skip_to_closing_quote(&mut probe);
    let reason = if !closed && reason == MalformedReason::MultiCharLiteral {
        MalformedReason::UnterminatedChar
    } else {
        reason
    };
    malformed(start, &probe, reason)
}

/// Advance past the next unescaped `'` on this line. Returns `false` (and
/// stops before the line break) if there is none.
fn skip_to_closing_quote(probe: &mut Cursor<'_>) -> bool {
    loop {
        if probe.at_line_end() {
            return false;
        }
        let b = probe.current();
        probe.advance();
        match b {
            b'\'' => return true,
            b'\\' if !probe.at_line_end() => probe.advance(),
            _ => {}
        }
    }
}
