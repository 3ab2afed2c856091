//! Line patterns driving the indent heuristic.
//!
//! Each pattern is compiled once on first use and shared process-wide.
//! The block-opener rule needs "not followed by a same-line `end`", which
//! `regex` cannot express as a lookahead, so [`opens_block`] matches the
//! opener first and then checks the rest of the line separately.

use std::sync::OnceLock;

use regex::Regex;

use crate::keywords::{BLOCK_OPENERS, DEDENT_KEYWORDS};

/// Compile a pattern built from literals in this module.
#[allow(
    clippy::expect_used,
    reason = "patterns are fixed at compile time and covered by tests"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("indent pattern is valid")
}

fn block_opener() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(&format!(r"^\s*({})\b", BLOCK_OPENERS.join("|"))))
}

fn trailing_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"\bend;?$"))
}

fn first_case() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"^\s*(case)\b$"))
}

fn switch_opener() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"^\s*(switch)\b"))
}

fn bare_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"^\s*(end)\b$"))
}

fn block_comment_delimiter() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(r"^\s*%([{}])\s*$"))
}

/// Pattern for lines that should re-indent as soon as they are typed.
///
/// Matches a line holding nothing but optional leading whitespace and one
/// of `case`, `catch`, `else`, `end` or `otherwise`.
pub fn dedent_trigger_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| compile(&format!(r"^(?:\s*)({})\b$", DEDENT_KEYWORDS.join("|"))))
}

/// Returns `true` if `line` should trigger an immediate re-indent.
pub fn is_dedent_trigger(line: &str) -> bool {
    dedent_trigger_pattern().is_match(line)
}

/// Returns `true` if `line` starts with a block-opening keyword and does not
/// close the block again on the same line (`if x, y, end`).
pub fn opens_block(line: &str) -> bool {
    match block_opener().find(line) {
        Some(opener) => !trailing_end().is_match(&line[opener.end()..]),
        None => false,
    }
}

/// `case` alone on its line.
pub(crate) fn is_first_case(line: &str) -> bool {
    first_case().is_match(line)
}

/// Line starting with `switch`.
pub(crate) fn opens_switch(line: &str) -> bool {
    switch_opener().is_match(line)
}

/// `end` alone on its line.
pub(crate) fn is_bare_end(line: &str) -> bool {
    bare_end().is_match(line)
}

/// Which block-comment delimiter, if any, stands alone on `line`.
pub(crate) fn block_comment_delimiter_of(line: &str) -> Option<BlockCommentDelimiter> {
    let caps = block_comment_delimiter().captures(line)?;
    match caps.get(1).map(|m| m.as_str()) {
        Some("{") => Some(BlockCommentDelimiter::Open),
        Some("}") => Some(BlockCommentDelimiter::Close),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlockCommentDelimiter {
    Open,
    Close,
}
