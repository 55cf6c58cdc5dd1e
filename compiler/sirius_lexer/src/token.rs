//! Cooked tokens and the lexer's output bundle.

use sirius_lexer_core::{LexemeKind, SourceBuffer, Span};

use crate::lex_error::{LexError, LexWarning};
use crate::line_index::{LineCol, LineIndex};

/// A literal's decoded value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Non-literals, and literals whose value could not be cooked.
    None,
    Int(u64),
    Float(f64),
    /// Character literal.
    Byte(u8),
    /// Rune literal.
    Rune(char),
    /// String literal.
    Bytes(Vec<u8>),
    /// Unicode string literal.
    Text(String),
}

/// A lexeme with its value decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: LexemeKind,
    pub span: Span,
    pub value: TokenValue,
}

impl Token {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

/// Everything one lexing pass produces.
///
/// `tokens` covers the source up to the end of input and always ends with
/// an `EndOfInput` token.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
    pub warnings: Vec<LexWarning>,
    pub line_index: LineIndex,
    pub(crate) buffer: SourceBuffer,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The source this output was lexed from.
    pub fn source(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Source bytes under `span`, or an empty slice if it is out of range.
    pub fn text(&self, span: Span) -> &[u8] {
        self.source().get(span.to_range()).unwrap_or_default()
    }

    /// Tokens other than whitespace and the final `EndOfInput`, which is
    /// what a parser consumes.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|t| !t.is_trivia() && t.kind != LexemeKind::EndOfInput)
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: u32) -> LineCol {
        self.line_index.line_col(offset)
    }

    /// Line/column of a span's start and end, e.g. for an error.
    pub fn span_bounds(&self, span: Span) -> (LineCol, LineCol) {
        self.line_index.span_bounds(span)
    }

    /// Source bytes of 1-based `line`, without its line break.
    pub fn line_text(&self, line: u32) -> Option<&[u8]> {
        let span = self.line_index.line_span(line, self.source())?;
        Some(self.text(span))
    }
}
