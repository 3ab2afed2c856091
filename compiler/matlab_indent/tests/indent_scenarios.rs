//! Editor-facing indent scenarios.
//!
//! Each case is a (previous line, current line) pair as an editor would
//! see it when the user presses enter or finishes typing a keyword.

use matlab_indent::{
    compute_indent, dedent_trigger_pattern, reindent, IndentConfig, DEFAULT_INDENT_UNIT,
};
use pretty_assertions::assert_eq;

fn indent(previous: &str, current: &str) -> u32 {
    compute_indent(DEFAULT_INDENT_UNIT, current, previous)
}

#[test]
fn new_line_after_if() {
    assert_eq!(indent("if foo", ""), 4);
}

#[test]
fn case_under_switch() {
    assert_eq!(indent("switch foo", "case bar"), 4);
}

#[test]
fn end_closing_for() {
    assert_eq!(indent("for c = 1:s", "end"), 0);
}

#[test]
fn after_one_line_if() {
    assert_eq!(indent("if foo A=1; else A=2; end;", ""), 0);
}

#[test]
fn end_after_end() {
    assert_eq!(indent("end", "end"), 0);
}

#[test]
fn new_line_after_statement() {
    assert_eq!(indent("    foo;", ""), 4);
}

#[test]
fn typing_else_triggers_reindent() {
    let pattern = dedent_trigger_pattern();
    assert!(!pattern.is_match("    els"));
    assert!(pattern.is_match("    else"));
    assert_eq!(indent("        disp(x);", "        else"), 4);
}

#[test]
fn reindent_class_definition() {
    let source = "\
classdef Point
properties
X
Y
end
methods
function d = norm(p)
d = hypot(p.X, p.Y); % euclidean
end
end
end
";
    let expected = "\
classdef Point
    properties
        X
        Y
    end
    methods
        function d = norm(p)
            d = hypot(p.X, p.Y); % euclidean
        end
    end
end
";
    assert_eq!(reindent(source, &IndentConfig::default()), expected);
}

#[test]
fn reindent_try_catch() {
    let source = "try\nrisky();\ncatch\ndisp(lasterr);\nend\n";
    let expected = "try\n    risky();\ncatch\n    disp(lasterr);\nend\n";
    assert_eq!(reindent(source, &IndentConfig::default()), expected);
}
