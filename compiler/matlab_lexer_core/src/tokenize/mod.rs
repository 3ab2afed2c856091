//! Minimal host driver around [`scan_comment`].
//!
//! Real hosts run their own grammar and only call [`scan_comment`] where a
//! comment may start. [`Tokenizer`] stands in for that grammar: it skips
//! blank runs, offers every other position to the comment scanner, and on
//! decline takes everything up to the next `%` or line end as one
//! [`TokenKind::Code`] span. It knows nothing about string literals, so a
//! `%` inside quotes starts a comment here.
//!
//! One [`ScanContext`] covers the whole input given to the tokenizer.

use tracing::debug;

use crate::{scan_comment, Cursor, Scan, ScanContext, SourceBuffer, TokenKind, TokenSpan};

/// Iterator over the spans of one source buffer.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    ctx: ScanContext,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer with a fresh scan context.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_context(cursor, ScanContext::new())
    }

    /// Create a tokenizer that continues an existing scan context.
    pub fn with_context(cursor: Cursor<'a>, ctx: ScanContext) -> Self {
        Self { cursor, ctx }
    }

    /// The scan context as it stands after the spans produced so far.
    pub fn context(&self) -> ScanContext {
        self.ctx
    }

    /// Produce the next span, or `None` once only blank text remains.
    pub fn next_span(&mut self) -> Option<TokenSpan> {
        self.cursor.eat_blank();
        if self.cursor.is_eof() {
            return None;
        }
        match scan_comment(&mut self.cursor, &mut self.ctx) {
            Scan::Emitted(span) => Some(span),
            Scan::Declined => Some(self.code_run()),
        }
    }

    /// Consume code up to the next `%` or line end. Always takes at least
    /// one byte, so interior nulls cannot stall the scan.
    fn code_run(&mut self) -> TokenSpan {
        let start = self.cursor.pos();
        self.cursor.advance();
        loop {
            let b = self.cursor.current();
            if self.cursor.is_eof() || b == b'%' || Cursor::is_line_end(b) {
                break;
            }
            self.cursor.advance();
        }
        TokenSpan {
            kind: TokenKind::Code,
            start,
            end: self.cursor.pos(),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<TokenSpan> {
        self.next_span()
    }
}

/// Tokenize a complete source string into comment, magic and code spans.
pub fn tokenize(source: &str) -> Vec<TokenSpan> {
    let buf = SourceBuffer::new(source);
    let spans: Vec<TokenSpan> = Tokenizer::new(buf.cursor()).collect();
    debug!(len = buf.len(), spans = spans.len(), "tokenized source");
    spans
}

#[cfg(test)]
mod tests;
