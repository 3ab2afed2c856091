//! MATLAB keyword vocabulary shared by highlighting and indentation.
//!
//! Two views of the same words:
//! 1. [`BLOCK_OPENERS`] / [`DEDENT_KEYWORDS`]: the word lists the indent
//!    patterns are built from.
//! 2. [`classify_keyword`]: per-token block classes for a streaming
//!    highlighter that tracks nesting keyword by keyword.
//!
//! The two views do not agree word for word: `case` and `otherwise` are
//! dedent triggers with no block class, and `elseif` has a block class but
//! is never a dedent trigger. Re-indent decisions go through
//! [`is_dedent_trigger`](crate::is_dedent_trigger), not [`KeywordClass`].

/// Keywords that open a block when they start a line.
pub const BLOCK_OPENERS: [&str; 17] = [
    "arguments",
    "case",
    "catch",
    "classdef",
    "else",
    "elseif",
    "enumeration",
    "for",
    "function",
    "if",
    "methods",
    "otherwise",
    "parfor",
    "properties",
    "switch",
    "try",
    "while",
];

/// Keywords that, alone on a line, step one level out.
pub const DEDENT_KEYWORDS: [&str; 5] = ["case", "catch", "else", "end", "otherwise"];

/// How a keyword affects indentation when highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Indents the lines after it (`if`, `for`, `function`, ...).
    BlockOpener,
    /// Closes a block (`end`).
    Dedent,
    /// Closes one branch and opens the next (`catch`, `else`, `elseif`).
    BlockOpenerAndDedent,
    /// Keyword with no block structure (`break`, `return`, ...).
    Plain,
}

impl KeywordClass {
    #[inline]
    pub fn opens_block(self) -> bool {
        matches!(
            self,
            KeywordClass::BlockOpener | KeywordClass::BlockOpenerAndDedent
        )
    }

    #[inline]
    pub fn dedents(self) -> bool {
        matches!(
            self,
            KeywordClass::Dedent | KeywordClass::BlockOpenerAndDedent
        )
    }
}

/// Classify a word as a MATLAB keyword.
///
/// Returns `None` for identifiers. Matching is case-sensitive, as in MATLAB.
pub fn classify_keyword(word: &str) -> Option<KeywordClass> {
    let class = match word {
        "arguments" | "enumeration" | "events" | "for" | "function" | "if" | "methods"
        | "parfor" | "properties" | "switch" | "try" | "while" => KeywordClass::BlockOpener,
        "catch" | "else" | "elseif" => KeywordClass::BlockOpenerAndDedent,
        "end" => KeywordClass::Dedent,
        "break" | "case" | "classdef" | "continue" | "global" | "otherwise" | "persistent"
        | "return" | "spmd" => KeywordClass::Plain,
        _ => return None,
    };
    Some(class)
}
