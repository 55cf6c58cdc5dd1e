//! Sentinel-terminated source buffer.
//!
//! The buffer owns a copy of the source bytes followed by a `0x00` sentinel
//! and zero padding up to the next 64-byte boundary. Scanners may read a few
//! bytes past the current position without bounds checks: every such read
//! lands either in the source, on the sentinel, or in the padding.
//!
//! # Encoding Detection
//!
//! Construction also records encoding oddities the tokenizer itself does not
//! reject:
//! - a UTF-8 or UTF-16 byte order mark at offset 0
//! - the first embedded end-of-input byte (`0x00` or `0x1A`), after which
//!   nothing more is tokenized
//!
//! The integration layer (`sirius_lexer`) turns these into warnings.

use thiserror::Error;

use crate::chars::{NUL, SUB};
use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Minimum number of zero bytes after the source content.
///
/// The sentinel plus one byte, so `peek` from the sentinel position itself
/// (a probe that stopped at the end of the source) stays in bounds.
const MIN_PADDING: usize = 2;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// A `0x00` or `0x1A` byte inside the source. Tokenization ends there.
    EmbeddedTerminator,
}

/// Source rejected by [`SourceBuffer::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Offsets are `u32`, so the source must fit in `u32::MAX` bytes.
    #[error("source is {len} bytes; at most {max} bytes can be tokenized", max = u32::MAX)]
    TooLarge { len: usize },
}

impl SourceBuffer {
    /// Create a sentinel-terminated buffer from source bytes.
    ///
    /// Accepts anything byte-like, so both `SourceBuffer::new("x")` and
    /// `SourceBuffer::new(b"x")` work.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// bytes. Use [`try_new`](Self::try_new) to reject them instead.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let limit = source.len().min(u32::MAX as usize);
        Self::build(&source[..limit])
    }

    /// Create a sentinel-terminated buffer, rejecting sources whose offsets
    /// would not fit in a `u32`.
    pub fn try_new(source: impl AsRef<[u8]>) -> Result<Self, SourceError> {
        let source = source.as_ref();
        if u32::try_from(source.len()).is_err() {
            return Err(SourceError::TooLarge { len: source.len() });
        }
        Ok(Self::build(source))
    }

    fn build(source: &[u8]) -> Self {
        let source_len = source.len();

        // Round up to the next 64-byte boundary, leaving at least MIN_PADDING zeros.
        let padded_len = (source_len + MIN_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let mut encoding_issues = Vec::new();
        detect_bom(source, &mut encoding_issues);
        detect_embedded_terminator(source, &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = match source {
        [0xEF, 0xBB, 0xBF, ..] => (EncodingIssueKind::Utf8Bom, 3),
        [0xFF, 0xFE, ..] => (EncodingIssueKind::Utf16LeBom, 2),
        [0xFE, 0xFF, ..] => (EncodingIssueKind::Utf16BeBom, 2),
        _ => return,
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Record the first `0x00`/`0x1A` byte in the source.
///
/// Only the first one matters: the tokenizer reports end of input there and
/// never looks further.
fn detect_embedded_terminator(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if let Some(pos) = memchr::memchr2(NUL, SUB, source) {
        if let Ok(pos) = u32::try_from(pos) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::EmbeddedTerminator,
                pos,
                len: 1,
            });
        }
    }
}
