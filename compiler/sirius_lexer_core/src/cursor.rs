//! Copyable cursor over a sentinel-terminated buffer.
//!
//! End of input is reached when the position hits the source length or when
//! the current byte is one of the in-band terminators (`0x00`, `0x1A`). The
//! padding written by [`SourceBuffer`](crate::SourceBuffer) makes `current`
//! and `peek` safe at any position a scanner can reach.
//!
//! Scanners never move the tokenizer's cursor directly. They copy it, probe
//! forward on the copy, and report how far the copy got.

use crate::chars::{is_eof_byte, is_newline, is_whitespace, NUL, SUB};

/// Returns the earliest of two optional positions.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Copyable cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source_len..]` is all zeros and at least two bytes long. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` past the source).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` at end of input.
    ///
    /// That is either the end of the source content or an embedded
    /// `0x00`/`0x1A` byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len || is_eof_byte(self.current())
    }

    /// Returns `true` at end of input or on a line break byte.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.is_eof() || is_newline(self.current())
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes from the current position to the end of the source.
    pub fn rest(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Source bytes in `start..end`.
    ///
    /// Both bounds are clamped to the source length, so a zero-length slice
    /// at or past the end is always valid.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`. Every classifier in
    /// [`chars`](crate::chars) satisfies this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while self.pos < self.source_len && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance past up to `max` bytes satisfying `pred`.
    ///
    /// Returns the number of bytes consumed.
    #[inline]
    pub fn eat_at_most(&mut self, max: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        while self.pos - start < max && self.pos < self.source_len && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Continuation bytes and bytes that can never start a sequence count as 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 1,
        }
    }

    /// Advance past one UTF-8 encoded scalar value.
    ///
    /// Returns `false` without moving if the bytes at the cursor are not a
    /// complete, well-formed UTF-8 sequence inside the source.
    pub fn eat_utf8_char(&mut self) -> bool {
        let width = Self::utf8_char_width(self.current()) as usize;
        match self.rest().get(..width) {
            Some(bytes) if std::str::from_utf8(bytes).is_ok() => {
                self.pos += width as u32;
                true
            }
            _ => false,
        }
    }

    /// Advance past intra-line whitespace (space, tab, vertical tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) -> u32 {
        self.eat_while(is_whitespace)
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or `0x00` at end of input.
    ///
    /// Interesting bytes are `"`, `\`, line breaks, and the in-band
    /// terminators `0x00`/`0x1A`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.rest();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let secondary = memchr::memchr3(b'\r', NUL, SUB, remaining);

        if let Some(off) = earliest_of(primary, secondary) {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            NUL
        }
    }
}

#[cfg(test)]
mod tests;
