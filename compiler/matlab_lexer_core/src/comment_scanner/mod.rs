//! Comment, block-comment and cell-magic classification.
//!
//! MATLAB has three comment-like constructs that all start with `%`:
//!
//! - `% text` line comments, running to end of line.
//! - `%{ ... %}` block comments. Each delimiter must stand alone on its
//!   line (only whitespace around it), and blocks nest.
//! - `%%name` cell magics. These are only recognised before any code or
//!   ordinary comment has been seen in the current [`ScanContext`].
//!
//! [`scan_comment`] is called by the host grammar wherever a comment may
//! start. It either commits exactly one [`TokenSpan`] and moves the cursor
//! to its end, or declines and leaves the cursor where it was so the host
//! can try its next token rule.
//!
//! # Rules
//!
//! Classification is an ordered list of [`CommentRule`]s. Each rule works
//! on a copy of the cursor and returns [`Scan::Declined`] or
//! [`Scan::Emitted`]; the first emitting rule wins. Rule order is
//! magic, block comment, line comment. The line-comment rule never
//! declines, so every `%` produces a span.

use tracing::trace;

use crate::{Cursor, TokenKind, TokenSpan};

/// Whether a cell magic may still appear in a scan context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MagicState {
    /// Nothing but whitespace and magics seen so far.
    #[default]
    Undetermined,
    /// Code or an ordinary comment has been seen. Permanent for the
    /// lifetime of the context.
    ConfirmedCode,
}

/// State that lives for one contiguous stretch of scanned input.
///
/// The host creates one context per stretch (a notebook cell, an editor
/// document) and threads it through every [`scan_comment`] call for that
/// stretch. A fresh context starts [`Undetermined`](MagicState::Undetermined).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanContext {
    magic: MagicState,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn magic_state(&self) -> MagicState {
        self.magic
    }

    /// Returns `true` while a `%%name` line would still classify as magic.
    #[inline]
    pub fn allows_magic(&self) -> bool {
        self.magic == MagicState::Undetermined
    }

    /// Record that code or an ordinary comment has been seen. One-way.
    #[inline]
    pub fn confirm_code(&mut self) {
        self.magic = MagicState::ConfirmedCode;
    }
}

/// Outcome of one classification attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Not this construct; the cursor has not moved.
    Declined,
    /// A span was classified. Its `end` is where the cursor lands on commit.
    Emitted(TokenSpan),
}

impl Scan {
    /// The emitted span, if any.
    pub fn span(self) -> Option<TokenSpan> {
        match self {
            Scan::Declined => None,
            Scan::Emitted(span) => Some(span),
        }
    }
}

/// One classifier in the ordered rule list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentRule {
    Magic,
    BlockComment,
    LineComment,
}

/// Rules in evaluation order.
pub const RULES: [CommentRule; 3] = [
    CommentRule::Magic,
    CommentRule::BlockComment,
    CommentRule::LineComment,
];

impl CommentRule {
    /// Try this rule at `cursor`.
    ///
    /// Never moves `cursor`. A rule only touches `ctx` when it emits, and
    /// only ever moves it towards [`ConfirmedCode`](MagicState::ConfirmedCode).
    pub fn apply(self, cursor: &Cursor<'_>, ctx: &mut ScanContext) -> Scan {
        match self {
            CommentRule::Magic => scan_magic(cursor, ctx),
            CommentRule::BlockComment => scan_block_comment(cursor, ctx),
            CommentRule::LineComment => scan_line_comment(cursor, ctx),
        }
    }
}

/// Classify the construct starting at `cursor`.
///
/// If the current byte is not `%` the scan declines. A non-blank byte that
/// declines this way is code, so it also confirms the context.
/// On [`Scan::Emitted`] the cursor is moved to the end of the span.
pub fn scan_comment(cursor: &mut Cursor<'_>, ctx: &mut ScanContext) -> Scan {
    if cursor.is_eof() {
        return Scan::Declined;
    }
    let current = cursor.current();
    if current != b'%' {
        if !Cursor::is_whitespace(current) && !Cursor::is_line_end(current) {
            ctx.confirm_code();
        }
        trace!(pos = cursor.pos(), "scan_comment -> declined");
        return Scan::Declined;
    }

    for rule in RULES {
        if let Scan::Emitted(span) = rule.apply(cursor, ctx) {
            trace!(?rule, ?span, "scan_comment -> emitted");
            cursor.advance_to(span.end);
            return Scan::Emitted(span);
        }
    }
    Scan::Declined
}

fn emit(kind: TokenKind, start: &Cursor<'_>, end: &Cursor<'_>) -> Scan {
    Scan::Emitted(TokenSpan {
        kind,
        start: start.pos(),
        end: end.pos(),
    })
}

/// `%%` followed by a letter, optionally after horizontal whitespace.
fn scan_magic(cursor: &Cursor<'_>, ctx: &ScanContext) -> Scan {
    if !ctx.allows_magic() || cursor.peek_at(0) != b'%' || cursor.peek_at(1) != b'%' {
        return Scan::Declined;
    }
    let mut probe = *cursor;
    probe.advance_by(2);
    while Cursor::is_whitespace(probe.current()) {
        probe.advance();
    }
    if !probe.current().is_ascii_alphabetic() {
        return Scan::Declined;
    }
    probe.eat_until_line_end();
    emit(TokenKind::Magic, cursor, &probe)
}

/// Nested `%{ ... %}` block. Unterminated blocks run to end of input.
fn scan_block_comment(cursor: &Cursor<'_>, ctx: &mut ScanContext) -> Scan {
    if !is_block_open(cursor) {
        return Scan::Declined;
    }
    ctx.confirm_code();

    let mut probe = *cursor;
    probe.advance_by(2);
    let mut depth: u32 = 1;
    while !probe.is_eof() {
        if is_block_close(&probe) {
            probe.advance_by(2);
            depth -= 1;
            if depth == 0 {
                break;
            }
        } else if is_block_open(&probe) {
            depth += 1;
        }
        probe.advance();
    }
    if depth > 0 {
        trace!(depth, start = cursor.pos(), "unterminated block comment");
    }
    emit(TokenKind::MultilineComment, cursor, &probe)
}

fn scan_line_comment(cursor: &Cursor<'_>, ctx: &mut ScanContext) -> Scan {
    ctx.confirm_code();
    let mut probe = *cursor;
    probe.eat_until_line_end();
    emit(TokenKind::LineComment, cursor, &probe)
}

fn is_block_open(cursor: &Cursor<'_>) -> bool {
    is_block_delimiter(cursor, b'{')
}

fn is_block_close(cursor: &Cursor<'_>) -> bool {
    is_block_delimiter(cursor, b'}')
}

/// `%` + `brace`, alone on its line apart from whitespace.
fn is_block_delimiter(cursor: &Cursor<'_>, brace: u8) -> bool {
    if cursor.peek_at(0) != b'%' || cursor.peek_at(1) != brace {
        return false;
    }
    if !cursor.preceded_by_whitespace_only() {
        return false;
    }
    let mut after = *cursor;
    after.advance_by(2);
    after.followed_by_whitespace_only()
}
