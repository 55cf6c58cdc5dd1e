//! Tokenizer driver.
//!
//! Tries each category scanner at the cursor in a fixed order, takes the
//! first match, and advances by the bytes it consumed. Input that no scanner
//! accepts becomes a one-byte Malformed lexeme, so every byte before the end
//! of input is covered by exactly one lexeme.
//!
//! Scanner order:
//!
//! 1. end of input
//! 2. whitespace and line breaks
//! 3. identifiers and keywords
//! 4. numeric literals
//! 5. character and rune literals
//! 6. string and unicode string literals
//! 7. operators
//!
//! Rune and unicode-string literals start with `@`, which no operator
//! spells, so the literal scanners never compete with the operator table.

use std::iter::FusedIterator;

use crate::scan::{
    scan_char_or_rune, scan_end_of_input, scan_identifier, scan_number, scan_operator,
    scan_string, scan_whitespace, unexpected_byte,
};
use crate::{Cursor, Lexeme, LexemeKind, ScanResult, SourceBuffer};

type Scanner = for<'a> fn(&Cursor<'a>) -> Option<ScanResult<'a>>;

const SCANNERS: [Scanner; 7] = [
    scan_end_of_input,
    scan_whitespace,
    scan_identifier,
    scan_number,
    scan_char_or_rune,
    scan_string,
    scan_operator,
];

/// Lazy lexeme stream over one [`SourceBuffer`].
///
/// Yields lexemes in source order and ends with exactly one
/// [`LexemeKind::EndOfInput`]. To restart, build a new tokenizer.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            finished: false,
        }
    }

    /// Byte offset of the next lexeme.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Scan the next lexeme.
    ///
    /// Once the end of input is reached, every further call returns the
    /// same `EndOfInput` lexeme.
    pub fn next_lexeme(&mut self) -> Lexeme<'a> {
        let ScanResult { lexeme, consumed } = SCANNERS
            .iter()
            .find_map(|scan| scan(&self.cursor))
            .unwrap_or_else(|| unexpected_byte(&self.cursor));

        debug_assert!(
            consumed > 0 || lexeme.kind == LexemeKind::EndOfInput,
            "scanner made no progress at byte {}",
            self.cursor.pos()
        );
        debug_assert_eq!(lexeme.span.start, self.cursor.pos());

        self.cursor.advance_n(consumed);
        lexeme
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let lexeme = self.next_lexeme();
        self.finished = lexeme.kind == LexemeKind::EndOfInput;
        Some(lexeme)
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenize a whole buffer, `EndOfInput` included.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<Lexeme<'_>> {
    Tokenizer::new(buffer).collect()
}
