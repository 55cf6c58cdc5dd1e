//! Lexeme types produced by the category scanners.

use std::ops::Range;

use crate::chars::is_newline;
use crate::tables::{KeywordKind, OperatorKind};

/// Byte range in the source: `start` offset plus `len`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Span covering `start..end`.
    #[inline]
    pub const fn from_range(start: u32, end: u32) -> Self {
        Self {
            start,
            len: end - start,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// The span as a `usize` range, for indexing the source.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// Spelling family of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericForm {
    /// `0` or a digit run starting with `1`-`9`.
    Decimal,
    /// A digit run with a leading `0`, e.g. `017`.
    Octal,
    /// `0x`/`0X` followed by hex digits.
    Hexadecimal,
    /// `0b`/`0B` followed by binary digits.
    Binary,
    /// Digits, `.`, digits, optional exponent.
    Float,
}

impl NumericForm {
    pub const fn radix(self) -> u32 {
        match self {
            Self::Decimal | Self::Float => 10,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
            Self::Binary => 2,
        }
    }

    /// Length of the base prefix in the literal's spelling.
    pub const fn prefix_len(self) -> usize {
        match self {
            Self::Decimal | Self::Float => 0,
            Self::Octal => 1,
            Self::Hexadecimal | Self::Binary => 2,
        }
    }
}

/// Why a span of input could not be tokenized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// No scanner accepts the byte at the cursor.
    UnexpectedByte,
    /// Character or rune literal without a closing `'` on the same line.
    UnterminatedChar,
    /// String literal without a closing `"` on the same line.
    UnterminatedString,
    /// `''` or `@''`.
    EmptyLiteral,
    /// More than one character between the quotes.
    MultiCharLiteral,
    /// `\` followed by a character that starts no escape.
    InvalidEscape,
    /// Three-digit octal escape with a lead digit above `3`.
    OctalEscapeOutOfRange,
    /// `\x` not followed by exactly two hex digits.
    InvalidHexEscape,
    /// `\u`/`\U` not followed by four/eight hex digits.
    InvalidUnicodeEscape,
    /// Control or non-ASCII byte inside a character literal.
    NonPrintableChar,
    /// Ill-formed UTF-8 inside a rune literal.
    InvalidUtf8,
}

/// Lexeme category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    Malformed(MalformedReason),
    EndOfInput,
    Whitespace,
    Identifier,
    Keyword(KeywordKind),
    Operator(OperatorKind),
    RuneLiteral,
    UnicodeStringLiteral,
    CharLiteral,
    StringLiteral,
    NumericLiteral(NumericForm),
}

impl LexemeKind {
    #[inline]
    pub const fn is_malformed(self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Whitespace is the only trivia category.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Category name, without the payload.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::EndOfInput => "end of input",
            Self::Whitespace => "whitespace",
            Self::Identifier => "identifier",
            Self::Keyword(_) => "keyword",
            Self::Operator(_) => "operator",
            Self::RuneLiteral => "rune literal",
            Self::UnicodeStringLiteral => "unicode string literal",
            Self::CharLiteral => "character literal",
            Self::StringLiteral => "string literal",
            Self::NumericLiteral(_) => "numeric literal",
        }
    }
}

/// One token of input.
///
/// `span` always covers the bytes the scanner consumed. `text` is the
/// payload: the literal body between the quotes for char, rune, and string
/// literals, and the full spelling for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a [u8],
    pub span: Span,
}

impl<'a> Lexeme<'a> {
    /// `true` for the Whitespace lexeme covering a single LF, CR, or CRLF.
    pub fn is_line_break(&self) -> bool {
        self.kind == LexemeKind::Whitespace && self.text.first().is_some_and(|&b| is_newline(b))
    }
}

/// A scanner's successful match: the lexeme plus how far to advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanResult<'a> {
    pub lexeme: Lexeme<'a>,
    /// Bytes consumed. Zero only for [`LexemeKind::EndOfInput`].
    pub consumed: u32,
}
