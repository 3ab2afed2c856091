//! Sentinel-terminated source buffer for the comment scanner.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so forward lookahead past the end reads zeros instead of failing. The
//! total buffer size is rounded up to the next 64-byte boundary, which also
//! gives the cursor room to look a few bytes past the last source byte
//! without a bounds check in the common case.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for encoding issues:
//! - UTF-8 BOM (MATLAB editors write these)
//! - Interior null bytes
//!
//! Issues are recorded as [`EncodingIssue`] values. They never stop the
//! scanner: an editor highlights whatever text it is given. A leading BOM
//! is skipped by [`SourceBuffer::cursor`], so a `%%` cell marker or `%{`
//! on the first line still classifies.

use crate::{Cursor, TokenSpan};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

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
    /// Null byte (U+0000) in source content. Looks like a line end to the
    /// comment scanner's lookaround.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`
    /// for scanning purposes; editor buffers never get near that.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len().min(u32::MAX as usize);

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&source_bytes[..source_len]);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(&source_bytes[..source_len], &mut encoding_issues);

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

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        self.cursor().slice(0, self.source_len)
    }

    /// Returns the text covered by `span`.
    ///
    /// The span must come from a scan over this buffer.
    pub fn slice(&self, span: TokenSpan) -> &str {
        self.cursor().slice(span.start, span.end)
    }

    /// Create a [`Cursor`] positioned at the first content byte.
    ///
    /// That is byte 0 unless the source starts with a BOM, which the cursor
    /// treats as lying before the start of the source.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len).with_start(self.content_start())
    }

    /// Byte offset of the first content byte, past any leading BOM.
    pub fn content_start(&self) -> u32 {
        self.encoding_issues
            .iter()
            .find(|issue| issue.kind == EncodingIssueKind::Utf8Bom)
            .map_or(0, |bom| bom.pos + bom.len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect BOM and interior null byte issues in source bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

/// Detect a UTF-8 byte order mark at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if let [0xEF, 0xBB, 0xBF, ..] = source {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memchr_iter(0, source) {
        if let Ok(p) = u32::try_from(pos) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
    }
}
