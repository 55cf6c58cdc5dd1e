//! Byte classifiers.
//!
//! Each predicate looks at exactly one byte and is total over `u8`. None of
//! them accepts `0x00`, which lets [`Cursor::eat_while`](crate::Cursor::eat_while)
//! stop on the sentinel without a separate check.

/// NUL: end-of-input marker and buffer sentinel.
pub const NUL: u8 = 0x00;

/// SUB (Ctrl-Z): legacy end-of-file marker, treated like NUL.
pub const SUB: u8 = 0x1A;

#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub const fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub const fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub const fn is_nonzero_digit(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// Lead digit of an octal escape other than `0` that still fits in a byte.
#[inline]
pub const fn is_one_to_three(b: u8) -> bool {
    matches!(b, b'1'..=b'3')
}

#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// In-band end-of-input byte: NUL or SUB.
#[inline]
pub const fn is_eof_byte(b: u8) -> bool {
    b == NUL || b == SUB
}

/// Line break byte: LF or CR.
#[inline]
pub const fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

/// Intra-line whitespace: space, form feed, horizontal tab, vertical tab.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | 0x0C | b'\t' | 0x0B)
}

/// Printable ASCII (`0x20..=0x7E`), the bytes allowed raw in a character literal.
#[inline]
pub const fn is_printable_ascii(b: u8) -> bool {
    matches!(b, 0x20..=0x7E)
}

#[cfg(test)]
mod tests;
