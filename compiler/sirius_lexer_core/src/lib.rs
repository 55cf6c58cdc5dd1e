//! Standalone tokenizer for Sirius C*.
//!
//! Turns a byte buffer into a stream of [`Lexeme`]s: whitespace, identifiers,
//! keywords, operators, numeric literals, and four kinds of quoted literal.
//! The crate has no compiler dependencies, so editors and other tools can
//! use it directly.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer ──cursor()──> Cursor ──> Tokenizer ──> Lexeme stream
//!   (sentinel)                (Copy)     (scan::*)
//! ```
//!
//! Lexical errors never abort the stream. They surface as
//! [`LexemeKind::Malformed`] lexemes carrying a [`MalformedReason`], and the
//! tokenizer continues after them. Value conversion (numbers, escapes) and
//! diagnostics live in `sirius_lexer`.
//!
//! # Example
//!
//! ```
//! use sirius_lexer_core::{tokenize, LexemeKind, SourceBuffer};
//!
//! let buf = SourceBuffer::new("x >>>= 1;");
//! let kinds: Vec<_> = tokenize(&buf).iter().map(|l| l.kind.name()).collect();
//! assert_eq!(
//!     kinds,
//!     ["identifier", "whitespace", "operator", "whitespace",
//!      "numeric literal", "operator", "end of input"]
//! );
//! ```

pub mod chars;
mod cursor;
mod lexeme;
pub mod scan;
mod source_buffer;
mod tables;
mod tokenizer;

pub use cursor::Cursor;
pub use lexeme::{Lexeme, LexemeKind, MalformedReason, NumericForm, ScanResult, Span};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer, SourceError};
pub use tables::{
    lookup_keyword, match_operator, KeywordKind, OperatorKind, KEYWORDS, MAX_OPERATOR_LEN,
    OPERATORS,
};
pub use tokenizer::{tokenize, Tokenizer};
