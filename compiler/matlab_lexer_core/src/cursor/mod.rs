//! Byte cursor with signed lookaround over a sentinel-terminated buffer.
//!
//! The comment scanner needs to look both ways from a candidate `%`: a
//! block-comment delimiter is only valid when nothing but whitespace
//! precedes and follows it on its line. Reads before the start of the
//! content (byte 0, or past a leading BOM) and at or after its end return
//! [`Cursor::BOUNDARY`] (`0x00`), which the line-end test treats like a
//! newline.
//!
//! The cursor is [`Copy`]. Speculative scans copy the cursor, probe with
//! the copy, and drop it; the caller's cursor only moves when a scan commits.

/// Byte cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `start <= pos <= source_len`, and `buf[source_len] == 0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// First content byte. Bytes before it (a leading BOM) read as boundary.
    start: u32,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), 3 x u32 = 12, padded => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Byte returned for reads outside the source content.
    pub const BOUNDARY: u8 = 0x00;

    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            start: 0,
            pos: 0,
            source_len,
        }
    }

    /// Move the content start (and the cursor) to `start`, clamped to the source.
    pub(crate) fn with_start(mut self, start: u32) -> Self {
        self.start = start.min(self.source_len);
        self.pos = self.start;
        self
    }

    /// Returns the byte at the current position, or [`BOUNDARY`](Self::BOUNDARY) at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte `offset` positions away from the current one.
    ///
    /// Negative offsets look behind. Positions before the start of the
    /// content or at/after its end read as [`BOUNDARY`](Self::BOUNDARY).
    #[inline]
    pub fn peek_at(&self, offset: i32) -> u8 {
        let target = i64::from(self.pos) + i64::from(offset);
        if target < i64::from(self.start) || target >= i64::from(self.source_len) {
            return Self::BOUNDARY;
        }
        usize::try_from(target)
            .ok()
            .and_then(|i| self.buf.get(i).copied())
            .unwrap_or(Self::BOUNDARY)
    }

    /// Advance the cursor by one byte. A no-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Move the cursor by `n` bytes, backwards when `n` is negative.
    ///
    /// The resulting position is clamped to `start..=source_len`.
    pub fn advance_by(&mut self, n: i32) {
        let target = (i64::from(self.pos) + i64::from(n))
            .clamp(i64::from(self.start), i64::from(self.source_len));
        self.pos = u32::try_from(target).unwrap_or(self.source_len);
    }

    /// Move the cursor to the absolute position `pos`, clamped to the source.
    pub fn advance_to(&mut self, pos: u32) {
        self.pos = pos.clamp(self.start, self.source_len);
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
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

    /// Extract a source substring as `&str`.
    ///
    /// Returns an empty string if `start..end` is out of range or does not
    /// fall on character boundaries. Scanner positions always do: every
    /// span boundary sits next to an ASCII byte or at the ends of the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns `true` for bytes that end a line during lookaround:
    /// `\n`, `\r`, and the boundary byte.
    #[inline]
    pub fn is_line_end(byte: u8) -> bool {
        matches!(byte, b'\n' | b'\r' | Self::BOUNDARY)
    }

    /// Returns `true` for horizontal whitespace bytes.
    ///
    /// Line terminators are not included; callers test them with
    /// [`is_line_end`](Self::is_line_end) first.
    #[inline]
    pub fn is_whitespace(byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | 0x0B | 0x0C)
    }

    /// Advance to the next `\n` or `\r` byte, or to EOF.
    ///
    /// Used to consume line-comment and magic bodies.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past whitespace and line terminators.
    pub fn eat_blank(&mut self) {
        while !self.is_eof() {
            let b = self.current();
            if Self::is_whitespace(b) || b == b'\n' || b == b'\r' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Returns `true` when every byte between the start of the current line
    /// and the cursor is whitespace.
    ///
    /// Scans a copy of the cursor; `self` does not move.
    pub fn preceded_by_whitespace_only(&self) -> bool {
        let mut probe = *self;
        loop {
            let before = probe.peek_at(-1);
            if Self::is_line_end(before) {
                return true;
            }
            if !Self::is_whitespace(before) {
                return false;
            }
            probe.advance_by(-1);
        }
    }

    /// Returns `true` when every byte between the cursor and the end of the
    /// current line is whitespace.
    ///
    /// Scans a copy of the cursor; `self` does not move.
    pub fn followed_by_whitespace_only(&self) -> bool {
        let mut probe = *self;
        loop {
            let b = probe.peek_at(0);
            if Self::is_line_end(b) {
                return true;
            }
            if !Self::is_whitespace(b) {
                return false;
            }
            probe.advance();
        }
    }
}
