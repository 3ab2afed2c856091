//! Auto-indent heuristic for MATLAB source.
//!
//! Indentation is computed from two lines at a time: the line being
//! indented and the nearest line above it. There is no parse tree, so
//! the result is a best guess that an editor applies as the user types.
//!
//! - [`compute_indent`]: column for one line given the line above it
//! - [`dedent_trigger_pattern`]: lines that should re-indent on the spot
//! - [`reindent`]: apply the heuristic to a whole document
//! - [`IndentConfig`]: indent unit, validated at construction
//!
//! ```
//! use matlab_indent::{compute_indent, is_dedent_trigger};
//!
//! assert_eq!(compute_indent(4, "", "if ready"), 4);
//! assert_eq!(compute_indent(4, "end", "for k = 1:n"), 0);
//! assert!(is_dedent_trigger("    else"));
//! ```

mod config;
mod indent;
mod keywords;
mod patterns;

pub use config::{ConfigError, IndentConfig, DEFAULT_INDENT_UNIT};
pub use indent::{compute_indent, leading_whitespace_width, reindent};
pub use keywords::{classify_keyword, KeywordClass, BLOCK_OPENERS, DEDENT_KEYWORDS};
pub use patterns::{dedent_trigger_pattern, is_dedent_trigger, opens_block};
