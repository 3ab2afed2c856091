//! Token classification produced by the comment scanner.
//!
//! A [`TokenSpan`] carries no text. Hosts recover the text by slicing the
//! buffer they scanned, e.g. with [`SourceBuffer::slice`](crate::SourceBuffer::slice).

use std::ops::Range;

/// Line comment marker, exported for the host's toggle-comment command.
pub const LINE_COMMENT_TOKEN: &str = "%";

/// Classification tag of a scanned span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Ordinary source text, left to the host grammar.
    Code = 0,
    /// `% ...` through end of line.
    LineComment = 1,
    /// `%{ ... %}`, possibly nested, possibly unterminated.
    MultilineComment = 2,
    /// `%%name` cell magic at the top of a scan context.
    Magic = 3,
}

impl TokenKind {
    /// Returns `true` for both comment kinds.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::MultilineComment)
    }

    /// Highlighting style for this span.
    ///
    /// `Code` maps to [`HighlightTag::Variable`]; hosts with a full grammar
    /// refine code spans into keywords, strings and brackets themselves.
    pub fn highlight_tag(self) -> HighlightTag {
        match self {
            TokenKind::Code => HighlightTag::Variable,
            TokenKind::LineComment | TokenKind::MultilineComment => HighlightTag::Comment,
            TokenKind::Magic => HighlightTag::Monospace,
        }
    }
}

/// Editor highlighting styles used for MATLAB syntax nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightTag {
    Keyword,
    Variable,
    Comment,
    /// System commands (`!ls`).
    Meta,
    String,
    /// Cell magics render in a fixed-width face.
    Monospace,
    Paren,
    SquareBracket,
    Brace,
}

impl HighlightTag {
    /// Style name as understood by editor themes.
    pub fn as_str(self) -> &'static str {
        match self {
            HighlightTag::Keyword => "keyword",
            HighlightTag::Variable => "variableName",
            HighlightTag::Comment => "comment",
            HighlightTag::Meta => "meta",
            HighlightTag::String => "string",
            HighlightTag::Monospace => "monospace",
            HighlightTag::Paren => "paren",
            HighlightTag::SquareBracket => "squareBracket",
            HighlightTag::Brace => "brace",
        }
    }
}

/// A classified byte range of the scanned source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub kind: TokenKind,
    /// Byte offset of the first byte.
    pub start: u32,
    /// Byte offset one past the last byte.
    pub end: u32,
}

impl TokenSpan {
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte range for slicing the scanned text.
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}
