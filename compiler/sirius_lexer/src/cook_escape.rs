//! Escape processing for character, rune, and string literal bodies.
//!
//! The tokenizer has already checked escape syntax, so decoding here only
//! computes values. Two things can still fail: a `\u`/`\U` escape naming a
//! surrogate or a value above `U+10FFFF`, and raw bytes in a unicode string
//! that are not UTF-8.
//!
//! Numeric escapes (`\ooo`, `\xhh`) denote a byte in character and byte
//! string literals and the code point `U+0000..=U+00FF` in rune and unicode
//! string literals.

use sirius_lexer_core::chars::{is_octal_digit, is_one_to_three};

use crate::lex_error::LexErrorKind;

/// A decoded escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Escaped {
    /// Single-character, octal, or `\x` escape.
    Byte(u8),
    /// `\u` or `\U` escape, not yet range-checked.
    Scalar(u32),
}

/// Resolve a single-character escape (`\n`, `\'`, ...).
#[inline]
fn resolve_simple_escape(b: u8) -> Option<u8> {
    Some(match b {
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'\'' | b'"' | b'?' | b'\\' => b,
        _ => return None,
    })
}

/// Decode the escape at the start of `body` (which begins after the `\`).
/// Returns the value and the number of bytes it spans.
fn decode_escape(body: &[u8]) -> Result<(Escaped, usize), LexErrorKind> {
    let (&first, rest) = body.split_first().ok_or(LexErrorKind::InvalidEscape)?;
    if let Some(b) = resolve_simple_escape(first) {
        return Ok((Escaped::Byte(b), 1));
    }
    match first {
        b if b == b'0' || is_one_to_three(b) => {
            let extra = rest
                .iter()
                .take(2)
                .take_while(|&&d| is_octal_digit(d))
                .count();
            let value = body[..=extra]
                .iter()
                .fold(0u32, |acc, &d| acc * 8 + u32::from(d - b'0'));
            let byte = u8::try_from(value).map_err(|_| LexErrorKind::OctalEscapeOutOfRange)?;
            Ok((Escaped::Byte(byte), 1 + extra))
        }
        b'x' => {
            let value = hex_value(rest, 2).ok_or(LexErrorKind::InvalidHexEscape)?;
            let byte = u8::try_from(value).map_err(|_| LexErrorKind::InvalidHexEscape)?;
            Ok((Escaped::Byte(byte), 3))
        }
        b'u' => {
            let value = hex_value(rest, 4).ok_or(LexErrorKind::InvalidUnicodeEscape)?;
            Ok((Escaped::Scalar(value), 5))
        }
        b'U' => {
            let value = hex_value(rest, 8).ok_or(LexErrorKind::InvalidUnicodeEscape)?;
            Ok((Escaped::Scalar(value), 9))
        }
        _ => Err(LexErrorKind::InvalidEscape),
    }
}

/// Value of exactly `count` leading hex digits.
fn hex_value(bytes: &[u8], count: usize) -> Option<u32> {
    let digits = bytes.get(..count)?;
    digits.iter().try_fold(0u32, |acc, &d| {
        char::from(d).to_digit(16).map(|v| (acc << 4) | v)
    })
}

fn to_char(value: u32) -> Result<char, LexErrorKind> {
    char::from_u32(value).ok_or(LexErrorKind::CodepointOutOfRange { value })
}

/// A run of a literal body: raw bytes up to the next backslash, or one escape.
enum Piece<'a> {
    Raw(&'a [u8]),
    Escape(Escaped),
}

/// Split a literal body into raw runs and escapes, in order.
fn walk_body<'a>(
    body: &'a [u8],
    mut each: impl FnMut(Piece<'a>) -> Result<(), LexErrorKind>,
) -> Result<(), LexErrorKind> {
    let mut rest = body;
    while !rest.is_empty() {
        match memchr::memchr(b'\\', rest) {
            Some(0) => {
                let (escaped, len) = decode_escape(&rest[1..])?;
                each(Piece::Escape(escaped))?;
                rest = &rest[1 + len..];
            }
            Some(n) => {
                each(Piece::Raw(&rest[..n]))?;
                rest = &rest[n..];
            }
            None => {
                each(Piece::Raw(rest))?;
                rest = &[];
            }
        }
    }
    Ok(())
}

/// Character literal body to its byte value.
pub(crate) fn cook_char(body: &[u8]) -> Result<u8, LexErrorKind> {
    match body {
        [b'\\', escape @ ..] => match decode_escape(escape)? {
            (Escaped::Byte(b), len) if len == escape.len() => Ok(b),
            (Escaped::Scalar(_), _) => Err(LexErrorKind::InvalidEscape),
            _ => Err(LexErrorKind::MultiCharLiteral),
        },
        [b] => Ok(*b),
        [] => Err(LexErrorKind::EmptyLiteral),
        _ => Err(LexErrorKind::MultiCharLiteral),
    }
}

/// Rune literal body to its scalar value.
pub(crate) fn cook_rune(body: &[u8]) -> Result<char, LexErrorKind> {
    let text = cook_text(body)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(LexErrorKind::EmptyLiteral),
        (Some(_), Some(_)) => Err(LexErrorKind::MultiCharLiteral),
    }
}

/// String literal body to its bytes.
pub(crate) fn cook_bytes(body: &[u8]) -> Result<Vec<u8>, LexErrorKind> {
    let mut out = Vec::with_capacity(body.len());
    walk_body(body, |piece| {
        match piece {
            Piece::Raw(raw) => out.extend_from_slice(raw),
            Piece::Escape(Escaped::Byte(b)) => out.push(b),
            Piece::Escape(Escaped::Scalar(_)) => return Err(LexErrorKind::InvalidEscape),
        }
        Ok(())
    })?;
    Ok(out)
}

/// Unicode string (or rune) body to text.
pub(crate) fn cook_text(body: &[u8]) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(body.len());
    walk_body(body, |piece| {
        match piece {
            Piece::Raw(raw) => {
                let raw = std::str::from_utf8(raw).map_err(|_| LexErrorKind::InvalidUtf8)?;
                out.push_str(raw);
            }
            Piece::Escape(Escaped::Byte(b)) => out.push(char::from(b)),
            Piece::Escape(Escaped::Scalar(v)) => out.push(to_char(v)?),
        }
        Ok(())
    })?;
    Ok(out)
}
