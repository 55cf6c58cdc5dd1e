//! Category scanners.
//!
//! Each scanner is a pure function of the cursor: it either matches one
//! complete lexeme starting at the cursor and reports how many bytes it
//! covers, or returns `None` without side effects. Scanners probe on a copy
//! of the cursor; only the [`Tokenizer`](crate::Tokenizer) advances.
//!
//! Lexical errors inside a recognized category (a bad escape, an
//! unterminated literal) are still a match: the scanner returns a
//! [`LexemeKind::Malformed`] lexeme covering the bad input.

mod char_lit;
mod eof;
mod escape;
mod ident;
mod number;
mod operator;
mod string;
mod whitespace;

pub use char_lit::scan_char_or_rune;
pub use eof::scan_end_of_input;
pub use ident::scan_identifier;
pub use number::scan_number;
pub use operator::scan_operator;
pub use string::scan_string;
pub use whitespace::scan_whitespace;

use crate::{Cursor, Lexeme, LexemeKind, MalformedReason, ScanResult, Span};

/// Lexeme spanning `start.pos()..end.pos()` whose text is the whole spelling.
fn spanning<'a>(start: &Cursor<'a>, end: &Cursor<'a>, kind: LexemeKind) -> ScanResult<'a> {
    let text = end.slice_from(start.pos());
    with_text(start, end, kind, text)
}

/// Lexeme spanning `start.pos()..end.pos()` with an explicit payload.
fn with_text<'a>(
    start: &Cursor<'a>,
    end: &Cursor<'a>,
    kind: LexemeKind,
    text: &'a [u8],
) -> ScanResult<'a> {
    let span = Span::from_range(start.pos(), end.pos());
    ScanResult {
        lexeme: Lexeme { kind, text, span },
        consumed: span.len,
    }
}

#[cold]
fn malformed<'a>(start: &Cursor<'a>, end: &Cursor<'a>, reason: MalformedReason) -> ScanResult<'a> {
    spanning(start, end, LexemeKind::Malformed(reason))
}

/// One-byte Malformed lexeme for input no scanner accepts.
#[cold]
pub fn unexpected_byte<'a>(cursor: &Cursor<'a>) -> ScanResult<'a> {
    let mut probe = *cursor;
    probe.advance();
    malformed(cursor, &probe, MalformedReason::UnexpectedByte)
}
