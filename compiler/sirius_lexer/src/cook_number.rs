//! Numeric literal values.
//!
//! The tokenizer decides a literal's form and extent; this module validates
//! the digits against the radix and computes the value. Any identifier
//! bytes the tokenizer absorbed into the literal (`0xZZ`, `12abc`) are
//! reported here as invalid digits.

use sirius_lexer_core::NumericForm;

use crate::lex_error::LexErrorKind;
use crate::token::TokenValue;

/// Cook a numeric literal's spelling into an `Int` or `Float` value.
pub(crate) fn cook_number(text: &[u8], form: NumericForm) -> Result<TokenValue, LexErrorKind> {
    match form {
        NumericForm::Float => cook_float(text).map(TokenValue::Float),
        _ => cook_int(text, form).map(TokenValue::Int),
    }
}

fn cook_int(text: &[u8], form: NumericForm) -> Result<u64, LexErrorKind> {
    let radix = form.radix();
    let digits = text.get(form.prefix_len()..).unwrap_or_default();
    if digits.is_empty() {
        return Err(LexErrorKind::EmptyRadixDigits { radix });
    }

    let mut value: u64 = 0;
    let mut overflowed = false;
    for &b in digits {
        let digit = char::from(b)
            .to_digit(radix)
            .ok_or(LexErrorKind::InvalidDigit {
                digit: char::from(b),
                radix,
            })?;
        // Keep validating digits after an overflow so a bad digit wins.
        match value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => value = v,
            None => overflowed = true,
        }
    }

    if overflowed {
        Err(LexErrorKind::IntOverflow)
    } else {
        Ok(value)
    }
}

/// `digits . digits [e|E [+|-] digits]`, nothing after.
fn cook_float(text: &[u8]) -> Result<f64, LexErrorKind> {
    let invalid = |b: u8| LexErrorKind::InvalidDigit {
        digit: char::from(b),
        radix: 10,
    };

    let mut rest = skip_digits(text);
    // The tokenizer guarantees `digits '.' digit` for the Float form.
    rest = match rest {
        [b'.', tail @ ..] => skip_digits(tail),
        [b, ..] => return Err(invalid(*b)),
        [] => rest,
    };
    if let [b'e' | b'E', tail @ ..] = rest {
        let tail = match tail {
            [b'+' | b'-', signed @ ..] => signed,
            _ => tail,
        };
        let after = skip_digits(tail);
        if after.len() == tail.len() {
            return Err(LexErrorKind::EmptyExponent);
        }
        rest = after;
    }
    if let Some(&b) = rest.first() {
        return Err(invalid(b));
    }

    let spelled = std::str::from_utf8(text).map_err(|_| LexErrorKind::InvalidUtf8)?;
    let value: f64 = spelled.parse().map_err(|_| LexErrorKind::FloatNotFinite)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexErrorKind::FloatNotFinite)
    }
}

fn skip_digits(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    &bytes[n..]
}
