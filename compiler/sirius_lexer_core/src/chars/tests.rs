use super::*;

/// Every byte value, for exhaustive classifier checks.
fn all_bytes() -> impl Iterator<Item = u8> {
    0..=u8::MAX
}

#[test]
fn no_classifier_accepts_nul() {
    let classifiers: [fn(u8) -> bool; 11] = [
        is_hex_digit,
        is_octal_digit,
        is_binary_digit,
        is_digit,
        is_nonzero_digit,
        is_one_to_three,
        is_ident_start,
        is_ident_continue,
        is_newline,
        is_whitespace,
        is_printable_ascii,
    ];
    for classify in classifiers {
        assert!(!classify(NUL));
    }
}

#[test]
fn digit_families_nest() {
    for b in all_bytes() {
        if is_binary_digit(b) {
            assert!(is_octal_digit(b), "{b:#04x}");
        }
        if is_octal_digit(b) {
            assert!(is_digit(b), "{b:#04x}");
        }
        if is_digit(b) {
            assert!(is_hex_digit(b), "{b:#04x}");
        }
        if is_one_to_three(b) {
            assert!(is_nonzero_digit(b), "{b:#04x}");
        }
    }
}

#[test]
fn digit_counts() {
    assert_eq!(all_bytes().filter(|&b| is_hex_digit(b)).count(), 22);
    assert_eq!(all_bytes().filter(|&b| is_octal_digit(b)).count(), 8);
    assert_eq!(all_bytes().filter(|&b| is_digit(b)).count(), 10);
    assert_eq!(all_bytes().filter(|&b| is_nonzero_digit(b)).count(), 9);
    assert_eq!(all_bytes().filter(|&b| is_one_to_three(b)).count(), 3);
}

#[test]
fn identifier_classes() {
    assert!(is_ident_start(b'_'));
    assert!(is_ident_start(b'z'));
    assert!(is_ident_start(b'Q'));
    assert!(!is_ident_start(b'7'));
    assert!(is_ident_continue(b'7'));
    assert!(!is_ident_continue(b'$'));
    assert!(!is_ident_start(0xC3));
    for b in all_bytes() {
        if is_ident_start(b) {
            assert!(is_ident_continue(b), "{b:#04x}");
        }
    }
}

#[test]
fn whitespace_and_newlines_are_disjoint() {
    for b in all_bytes() {
        assert!(!(is_whitespace(b) && is_newline(b)), "{b:#04x}");
    }
    assert_eq!(all_bytes().filter(|&b| is_whitespace(b)).count(), 4);
    assert_eq!(all_bytes().filter(|&b| is_newline(b)).count(), 2);
}

#[test]
fn eof_bytes() {
    assert!(is_eof_byte(NUL));
    assert!(is_eof_byte(SUB));
    assert_eq!(all_bytes().filter(|&b| is_eof_byte(b)).count(), 2);
}

#[test]
fn printable_range() {
    assert!(is_printable_ascii(b' '));
    assert!(is_printable_ascii(b'~'));
    assert!(!is_printable_ascii(0x7F));
    assert!(!is_printable_ascii(b'\t'));
    assert_eq!(all_bytes().filter(|&b| is_printable_ascii(b)).count(), 95);
}
