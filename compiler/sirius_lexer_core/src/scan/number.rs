use crate::chars::{
    is_binary_digit, is_digit, is_hex_digit, is_ident_continue, is_nonzero_digit,
};
use crate::{Cursor, LexemeKind, NumericForm, ScanResult};

use super::spanning;

/// Numeric literal starting with a decimal digit.
///
/// Recognizes `0x`/`0X` hex, `0b`/`0B` binary, leading-zero octal, decimal,
/// and `digits.digits[e|E[+|-]digits]` floats. The scanner only decides the
/// form and the extent. Digit validity is checked when the value is cooked,
/// so any identifier bytes glued to the literal (`0xZZ`, `12abc`) stay in
/// the same lexeme instead of starting an identifier.
pub fn scan_number<'a>(cursor: &Cursor<'a>) -> Option<ScanResult<'a>> {
    let first = cursor.current();
    if !is_digit(first) {
        return None;
    }
    let mut probe = *cursor;

    let form = match (first, cursor.peek()) {
        (b'0', b'x' | b'X') => {
            probe.advance_n(2);
            probe.eat_while(is_hex_digit);
            NumericForm::Hexadecimal
        }
        (b'0', b'b' | b'B') => {
            probe.advance_n(2);
            probe.eat_while(is_binary_digit);
            NumericForm::Binary
        }
        _ => {
            let int_len = probe.eat_while(is_digit);
            if probe.current() == b'.' && is_digit(probe.peek()) {
                probe.advance();
                probe.eat_while(is_digit);
                eat_exponent(&mut probe);
                NumericForm::Float
            } else if is_nonzero_digit(first) || int_len == 1 {
                NumericForm::Decimal
            } else {
                NumericForm::Octal
            }
        }
    };

    probe.eat_while(is_ident_continue);
    Some(spanning(cursor, &probe, LexemeKind::NumericLiteral(form)))
}

/// `e`/`E`, then a sign only if a digit follows it, then digits.
fn eat_exponent(probe: &mut Cursor<'_>) {
    if !matches!(probe.current(), b'e' | b'E') {
        return;
    }
    probe.advance();
    if matches!(probe.current(), b'+' | b'-') && is_digit(probe.peek()) {
        probe.advance();
    }
    probe.eat_while(is_digit);
}
