//! Escape sequence validation shared by character, rune, and string
//! literals.
//!
//! | Escape              | Meaning                                     |
//! |---------------------|---------------------------------------------|
//! | `\a \b \f \n \r \t \v \' \" \? \\` | single-character escapes     |
//! | `\0`, `\0o`, `\0oo` | octal, lead digit `0`                       |
//! | `\d`, `\do`, `\doo` | octal, lead digit `1`-`3`                   |
//! | `\xhh`              | exactly two hex digits                      |
//! | `\uhhhh`            | four hex digits (rune and unicode strings)  |
//! | `\Uhhhhhhhh`        | eight hex digits (rune and unicode strings) |
//!
//! A lead digit of `4`-`9` is rejected so a three-digit octal escape never
//! exceeds `\377`.

use crate::chars::{is_digit, is_hex_digit, is_octal_digit, is_one_to_three};
use crate::{Cursor, MalformedReason};

/// Which escapes a literal accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EscapeSet {
    /// Character and byte-string literals.
    Byte,
    /// Rune and unicode-string literals: `Byte` plus `\u` and `\U`.
    Unicode,
}

/// Consume one escape sequence. The probe must sit on the backslash.
///
/// On error the probe has consumed the backslash and whatever prefix of the
/// escape was well-formed, but never a line break or end-of-input byte.
pub(super) fn eat_escape(probe: &mut Cursor<'_>, set: EscapeSet) -> Result<(), MalformedReason> {
    debug_assert_eq!(probe.current(), b'\\');
    probe.advance();
    if probe.at_line_end() {
        return Err(MalformedReason::InvalidEscape);
    }

    match probe.current() {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\'' | b'"' | b'?' | b'\\' => {
            probe.advance();
            Ok(())
        }
        b if b == b'0' || is_one_to_three(b) => {
            probe.advance();
            probe.eat_at_most(2, is_octal_digit);
            Ok(())
        }
        b if is_digit(b) => {
            probe.advance();
            Err(MalformedReason::OctalEscapeOutOfRange)
        }
        b'x' => {
            probe.advance();
            eat_hex_digits(probe, 2, MalformedReason::InvalidHexEscape)
        }
        b'u' if set == EscapeSet::Unicode => {
            probe.advance();
            eat_hex_digits(probe, 4, MalformedReason::InvalidUnicodeEscape)
        }
        b'U' if set == EscapeSet::Unicode => {
            probe.advance();
            eat_hex_digits(probe, 8, MalformedReason::InvalidUnicodeEscape)
        }
        _ => {
            probe.advance();
            Err(MalformedReason::InvalidEscape)
        }
    }
}

fn eat_hex_digits(
    probe: &mut Cursor<'_>,
    count: u32,
    reason: MalformedReason,
) -> Result<(), MalformedReason> {
    if probe.eat_at_most(count, is_hex_digit) == count {
        Ok(())
    } else {
        Err(reason)
    }
}
