//! Comment tokenizer for MATLAB source.
//!
//! MATLAB overloads `%`: it starts line comments, nestable `%{ ... %}`
//! block comments, and `%%name` cell magics. This crate decides which one
//! (if any) starts at a given position so that a host grammar can keep
//! tokenizing everything else.
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: sentinel-terminated copy of the source text
//! - [`Cursor`]: `Copy` byte cursor with signed lookaround
//! - [`scan_comment`]: ordered [`CommentRule`]s producing a [`Scan`]
//! - [`ScanContext`]: per-stretch magic state threaded through every scan
//! - [`Tokenizer`] / [`tokenize`]: a minimal host loop producing [`TokenSpan`]s
//!
//! ```
//! use matlab_lexer_core::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("%%time\nx = 1 % note")
//!     .into_iter()
//!     .map(|span| span.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Magic, TokenKind::Code, TokenKind::LineComment]
//! );
//! ```

mod comment_scanner;
mod cursor;
mod source_buffer;
mod tag;
mod tokenize;

pub use comment_scanner::{scan_comment, CommentRule, MagicState, Scan, ScanContext, RULES};
pub use cursor::Cursor;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{HighlightTag, TokenKind, TokenSpan, LINE_COMMENT_TOKEN};
pub use tokenize::{tokenize, Tokenizer};
