//! Lexical error and warning types.
//!
//! Every error carries the span it applies to and a kind describing what
//! went wrong. Kinds come from two places: Malformed lexemes reported by the
//! tokenizer, and literal values that scanned fine but cannot be cooked
//! (an out-of-range integer, a surrogate code point).

use sirius_lexer_core::{EncodingIssue, EncodingIssueKind, MalformedReason, Span};
use thiserror::Error;

/// A lexical error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at bytes {}..{}", .span.start, .span.end())]
pub struct LexError {
    /// Where the error occurred.
    pub span: Span,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Tokenizer Errors ===
    #[error("unexpected byte 0x{byte:02X}")]
    UnexpectedByte { byte: u8 },
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("empty character literal")]
    EmptyLiteral,
    #[error("character literal contains more than one character")]
    MultiCharLiteral,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("octal escape out of range")]
    OctalEscapeOutOfRange,
    #[error("`\\x` escape needs exactly two hex digits")]
    InvalidHexEscape,
    #[error("malformed unicode escape")]
    InvalidUnicodeEscape,
    #[error("non-printable byte in character literal")]
    NonPrintableChar,
    #[error("invalid UTF-8")]
    InvalidUtf8,

    // === Numeric Errors ===
    #[error("no digits after base-{radix} prefix")]
    EmptyRadixDigits { radix: u32 },
    #[error("invalid digit `{digit}` in base-{radix} literal")]
    InvalidDigit { digit: char, radix: u32 },
    #[error("integer literal does not fit in 64 bits")]
    IntOverflow,
    #[error("missing digits in float exponent")]
    EmptyExponent,
    #[error("float literal is out of range")]
    FloatNotFinite,

    // === Escape Value Errors ===
    #[error("code point U+{value:X} is not a Unicode scalar value")]
    CodepointOutOfRange { value: u32 },
}

impl LexErrorKind {
    /// Map a tokenizer reason to an error kind. `text` is the Malformed
    /// lexeme's text, used to recover the offending byte.
    pub fn from_malformed(reason: MalformedReason, text: &[u8]) -> Self {
        match reason {
            MalformedReason::UnexpectedByte => Self::UnexpectedByte {
                byte: text.first().copied().unwrap_or(0),
            },
            MalformedReason::UnterminatedChar => Self::UnterminatedChar,
            MalformedReason::UnterminatedString => Self::UnterminatedString,
            MalformedReason::EmptyLiteral => Self::EmptyLiteral,
            MalformedReason::MultiCharLiteral => Self::MultiCharLiteral,
            MalformedReason::InvalidEscape => Self::InvalidEscape,
            MalformedReason::OctalEscapeOutOfRange => Self::OctalEscapeOutOfRange,
            MalformedReason::InvalidHexEscape => Self::InvalidHexEscape,
            MalformedReason::InvalidUnicodeEscape => Self::InvalidUnicodeEscape,
            MalformedReason::NonPrintableChar => Self::NonPrintableChar,
            MalformedReason::InvalidUtf8 => Self::InvalidUtf8,
        }
    }

    /// How to fix it, when there is a standard answer.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnterminatedChar => Some("add a closing `'` on the same line"),
            Self::UnterminatedString => Some("add a closing `\"` on the same line"),
            Self::MultiCharLiteral => Some("use a string literal for more than one character"),
            Self::InvalidEscape => Some(
                r#"valid escapes are \a \b \f \n \r \t \v \' \" \? \\, octal, \x, and \u/\U in rune or unicode string literals"#,
            ),
            Self::OctalEscapeOutOfRange => Some("octal escapes range from \\0 to \\377"),
            Self::InvalidUnicodeEscape => Some("use \\u with 4 or \\U with 8 hex digits"),
            Self::NonPrintableChar => Some("use an escape sequence for control characters"),
            _ => None,
        }
    }
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }

    /// Error for a Malformed lexeme.
    #[cold]
    pub fn malformed(span: Span, reason: MalformedReason, text: &[u8]) -> Self {
        Self::new(span, LexErrorKind::from_malformed(reason, text))
    }
}

/// A non-fatal oddity in the source encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at byte {}", .span.start)]
pub struct LexWarning {
    pub span: Span,
    pub kind: LexWarningKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexWarningKind {
    #[error("UTF-8 byte order mark")]
    Utf8Bom,
    #[error("UTF-16 byte order mark; source is probably not UTF-8")]
    Utf16Bom,
    #[error("end-of-file byte inside the source; the rest is ignored")]
    EmbeddedTerminator,
}

impl From<&EncodingIssue> for LexWarning {
    fn from(issue: &EncodingIssue) -> Self {
        let kind = match issue.kind {
            EncodingIssueKind::Utf8Bom => LexWarningKind::Utf8Bom,
            EncodingIssueKind::Utf16LeBom | EncodingIssueKind::Utf16BeBom => {
                LexWarningKind::Utf16Bom
            }
            EncodingIssueKind::EmbeddedTerminator => LexWarningKind::EmbeddedTerminator,
        };
        Self {
            span: Span::new(issue.pos, issue.len),
            kind,
        }
    }
}
