//! Indentation of one line from the line before it.
//!
//! The heuristic sees exactly two lines. It knows nothing about lines
//! further back, so continuation lines (`...`) and multi-line matrix
//! literals get whatever the keyword rules give them.
//!
//! Rules, first match wins:
//!
//! 1. Bare `case` right after a `switch` line steps in one level.
//! 2. Bare `end` aligns with the opener above it, or steps out one level,
//!    never deeper than the `end` was already typed.
//! 3. Otherwise: previous indent, plus one level after a block opener,
//!    minus one level for a bare dedent keyword.

use tracing::trace;

use crate::patterns::{
    block_comment_delimiter_of, is_bare_end, is_dedent_trigger, is_first_case, opens_block,
    opens_switch, BlockCommentDelimiter,
};
use crate::IndentConfig;

/// Width of the leading whitespace of `line`, one column per character.
pub fn leading_whitespace_width(line: &str) -> u32 {
    let width = line.chars().take_while(|c| c.is_whitespace()).count();
    u32::try_from(width).unwrap_or(u32::MAX)
}

/// Column the current line should be indented to.
///
/// `indent_unit` is the number of columns per nesting level. The result is
/// never negative and never exceeds
/// `max(previous indent, current indent) + indent_unit`.
pub fn compute_indent(indent_unit: u32, current: &str, previous: &str) -> u32 {
    let previous_indent = leading_whitespace_width(previous);

    if is_first_case(current) && opens_switch(previous) {
        trace!(previous_indent, "first case of switch");
        return previous_indent.saturating_add(indent_unit);
    }

    if is_bare_end(current) {
        let current_indent = leading_whitespace_width(current);
        let indent = if opens_block(previous) {
            previous_indent.min(current_indent)
        } else if previous_indent >= indent_unit {
            (previous_indent - indent_unit).min(current_indent)
        } else {
            0
        };
        trace!(previous_indent, current_indent, indent, "closing end");
        return indent;
    }

    let mut indent = previous_indent;
    if opens_block(previous) {
        indent = indent.saturating_add(indent_unit);
    }
    if is_dedent_trigger(current) && indent >= indent_unit {
        indent -= indent_unit;
    }
    trace!(previous_indent, indent, "general rule");
    indent
}

/// Re-indent every line of `source`.
///
/// Lines are processed top to bottom; each line is indented from the
/// nearest non-blank line above it as already re-indented. Before the rules
/// run, a line is re-based onto that line's indentation, so an `end` is not
/// capped by wherever it happened to sit in the input. Trailing whitespace
/// is dropped and blank lines become empty, so a whitespace-only last line
/// without a terminator becomes the empty string after the final newline.
/// Every `\n` / `\r\n` terminator is kept, so the output has as many
/// newline-separated lines as the input. `%{ ... %}` block comments are
/// copied through untouched and, like blank lines, never serve as the
/// previous line. `% text` line comments are indented like code.
pub fn reindent(source: &str, config: &IndentConfig) -> String {
    let unit = config.indent_unit();
    let mut out = String::with_capacity(source.len());
    let mut previous = String::new();
    let mut comment_depth: u32 = 0;

    for raw in source.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw);
        let delimiter = block_comment_delimiter_of(line);

        if comment_depth > 0 || delimiter == Some(BlockCommentDelimiter::Open) {
            match delimiter {
                Some(BlockCommentDelimiter::Open) => comment_depth += 1,
                Some(BlockCommentDelimiter::Close) => comment_depth -= 1,
                None => {}
            }
            out.push_str(raw);
            continue;
        }

        let content = line.trim();
        if content.is_empty() {
            out.push_str(ending);
            continue;
        }

        let mut rebased = " ".repeat(leading_whitespace_width(&previous) as usize);
        rebased.push_str(content);
        let indent = compute_indent(unit, &rebased, &previous);
        let mut indented = " ".repeat(indent as usize);
        indented.push_str(content);
        out.push_str(&indented);
        out.push_str(ending);
        previous = indented;
    }
    out
}

/// Split a line from `split_inclusive('\n')` into text and terminator.
fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}
