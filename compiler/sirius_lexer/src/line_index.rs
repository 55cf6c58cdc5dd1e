//! Byte offset to line/column conversion.
//!
//! Line breaks are LF, CR, and CRLF, the same set the tokenizer reports as
//! line-break lexemes, so line numbers agree with counting those lexemes.

use sirius_lexer_core::Span;

/// A 1-based line and byte column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Start offsets of every line in a source, for O(log n) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(source: &[u8]) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut line_starts = vec![0];
        let mut breaks = memchr::memchr2_iter(b'\n', b'\r', source);
        while let Some(i) = breaks.next() {
            let next = if source[i] == b'\r' && source.get(i + 1) == Some(&b'\n') {
                // CRLF: the LF belongs to this break.
                breaks.next();
                i + 2
            } else {
                i + 1
            };
            line_starts.push(u32::try_from(next).unwrap_or(u32::MAX));
        }
        Self { line_starts, len }
    }

    /// Number of lines. A trailing line break starts one more, empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column of `offset`. Offsets past the end clamp to the end.
    pub fn line_col(&self, offset: u32) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        LineCol {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            col: offset - start + 1,
        }
    }

    /// Line/column of a span's start and end.
    pub fn span_bounds(&self, span: Span) -> (LineCol, LineCol) {
        (self.line_col(span.start), self.line_col(span.end()))
    }

    /// Byte span of 1-based `line`, excluding its line break.
    pub fn line_span(&self, line: u32, source: &[u8]) -> Option<Span> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(&next) => {
                let brk = (next as usize).saturating_sub(2)..next as usize;
                let crlf = source.get(brk) == Some(&b"\r\n"[..]);
                next - if crlf { 2 } else { 1 }
            }
            None => self.len,
        };
        Some(Span::from_range(start, end))
    }
}

#[cfg(test)]
mod tests;
