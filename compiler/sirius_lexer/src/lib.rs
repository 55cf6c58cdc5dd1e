//! Lexer for Sirius C*.
//!
//! Runs the `sirius_lexer_core` tokenizer and cooks its lexemes into
//! [`Token`]s: numeric literals get their integer or float value, character,
//! rune, and string literals get their escapes decoded. Malformed lexemes
//! and values that fail to cook become [`LexError`]s, and encoding oddities
//! found in the buffer become [`LexWarning`]s.
//!
//! The token stream keeps whitespace, including one token per line break.
//! [`LexOutput::significant`] filters it for a parser.
//!
//! # Example
//!
//! ```
//! use sirius_lexer::{lex, TokenValue};
//!
//! let out = lex("x = 0x2A;");
//! assert!(!out.has_errors());
//! let values: Vec<_> = out.significant().map(|t| t.value.clone()).collect();
//! assert_eq!(values[2], TokenValue::Int(42));
//! ```

mod cook_escape;
mod cook_number;
mod lex_error;
mod line_index;
mod token;

use std::sync::Once;

use rayon::prelude::*;
use sirius_lexer_core::{Lexeme, LexemeKind, SourceBuffer, Tokenizer};
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind, LexWarning, LexWarningKind};
pub use line_index::{LineCol, LineIndex};
pub use sirius_lexer_core::{
    KeywordKind, MalformedReason, NumericForm, OperatorKind, SourceError, Span,
};
pub use token::{LexOutput, Token, TokenValue};

use cook_escape::{cook_bytes, cook_char, cook_rune, cook_text};
use cook_number::cook_number;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=sirius_lexer=debug` or `RUST_LOG=sirius_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Lex UTF-8 source text.
pub fn lex(source: &str) -> LexOutput {
    lex_bytes(source.as_bytes())
}

/// Lex raw source bytes.
///
/// Sources longer than `u32::MAX` bytes are truncated; use
/// [`try_lex_bytes`] to reject them.
pub fn lex_bytes(source: &[u8]) -> LexOutput {
    lex_buffer(SourceBuffer::new(source))
}

/// Lex raw source bytes, rejecting sources too large to address.
pub fn try_lex_bytes(source: &[u8]) -> Result<LexOutput, SourceError> {
    SourceBuffer::try_new(source).map(lex_buffer)
}

/// Lex independent sources in parallel. Output order matches input order.
#[tracing::instrument(level = "debug", skip_all, fields(sources = sources.len()))]
pub fn lex_batch<S>(sources: &[S]) -> Vec<LexOutput>
where
    S: AsRef<[u8]> + Sync,
{
    sources
        .par_iter()
        .map(|source| lex_bytes(source.as_ref()))
        .collect()
}

#[tracing::instrument(level = "debug", skip_all, fields(len = buffer.len()))]
fn lex_buffer(buffer: SourceBuffer) -> LexOutput {
    let warnings: Vec<LexWarning> = buffer.encoding_issues().iter().map(LexWarning::from).collect();
    let mut tokens = Vec::with_capacity(buffer.len() as usize / 4 + 1);
    let mut errors = Vec::new();

    let mut line_breaks = 0usize;
    for lexeme in Tokenizer::new(&buffer) {
        line_breaks += usize::from(lexeme.is_line_break());
        tokens.push(cook(lexeme, &mut errors));
    }

    debug!(
        tokens = tokens.len(),
        lines = line_breaks + 1,
        errors = errors.len(),
        warnings = warnings.len(),
        "lexed source"
    );

    LexOutput {
        tokens,
        errors,
        warnings,
        line_index: LineIndex::new(buffer.as_bytes()),
        buffer,
    }
}

/// Decode a lexeme's value. Failures are recorded and leave the value `None`.
fn cook(lexeme: Lexeme<'_>, errors: &mut Vec<LexError>) -> Token {
    let cooked = match lexeme.kind {
        LexemeKind::Malformed(reason) => {
            trace!(?reason, start = lexeme.span.start, "malformed lexeme");
            errors.push(LexError::malformed(lexeme.span, reason, lexeme.text));
            Ok(TokenValue::None)
        }
        LexemeKind::NumericLiteral(form) => cook_number(lexeme.text, form),
        LexemeKind::CharLiteral => cook_char(lexeme.text).map(TokenValue::Byte),
        LexemeKind::RuneLiteral => cook_rune(lexeme.text).map(TokenValue::Rune),
        LexemeKind::StringLiteral => cook_bytes(lexeme.text).map(TokenValue::Bytes),
        LexemeKind::UnicodeStringLiteral => cook_text(lexeme.text).map(TokenValue::Text),
        LexemeKind::EndOfInput
        | LexemeKind::Whitespace
        | LexemeKind::Identifier
        | LexemeKind::Keyword(_)
        | LexemeKind::Operator(_) => Ok(TokenValue::None),
    };

    let value = cooked.unwrap_or_else(|kind| {
        trace!(%kind, start = lexeme.span.start, "literal failed to cook");
        errors.push(LexError::new(lexeme.span, kind));
        TokenValue::None
    });

    Token {
        kind: lexeme.kind,
        span: lexeme.span,
        value,
    }
}
