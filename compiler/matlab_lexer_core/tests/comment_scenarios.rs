//! End-to-end comment classification over whole MATLAB snippets.

use matlab_lexer_core::{
    scan_comment, tokenize, Scan, ScanContext, SourceBuffer, TokenKind, TokenSpan,
};
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .into_iter()
        .map(|s| (s.kind, &source[s.range()]))
        .collect()
}

#[test]
fn standalone_block_comment_is_whole_document() {
    let source = "%{\n  code\n%}";
    assert_eq!(
        tokenize(source),
        vec![TokenSpan {
            kind: TokenKind::MultilineComment,
            start: 0,
            end: 12,
        }]
    );
}

#[test]
fn block_comment_spans_opener_line_through_closer_line() {
    let source = "x = 1;\n%{\n%{\nnested\n%}\n%}\ny = 2;";
    let spans = texts(source);
    assert_eq!(
        spans,
        vec![
            (TokenKind::Code, "x = 1;"),
            (TokenKind::MultilineComment, "%{\n%{\nnested\n%}\n%}"),
            (TokenKind::Code, "y = 2;"),
        ]
    );
}

#[test]
fn opener_with_text_is_a_line_comment() {
    let source = "%{ not alone\ncode\n%}";
    assert_eq!(texts(source)[0], (TokenKind::LineComment, "%{ not alone"));
}

#[test]
fn section_marker_first_on_blank_context_is_magic() {
    assert_eq!(
        texts("%% section title"),
        vec![(TokenKind::Magic, "%% section title")]
    );
}

#[test]
fn section_marker_after_code_is_a_line_comment() {
    assert_eq!(
        texts("disp(1) %% section title"),
        vec![
            (TokenKind::Code, "disp(1) "),
            (TokenKind::LineComment, "%% section title"),
        ]
    );
}

#[test]
fn separate_contexts_do_not_leak_magic_state() {
    // Two notebook cells: code in the first must not demote a magic in the second.
    let first = SourceBuffer::new("x = 1");
    let mut first_ctx = ScanContext::new();
    let mut cursor = first.cursor();
    assert_eq!(scan_comment(&mut cursor, &mut first_ctx), Scan::Declined);
    assert!(!first_ctx.allows_magic());

    let second = SourceBuffer::new("%%file helper.m");
    let mut second_ctx = ScanContext::new();
    let mut cursor = second.cursor();
    let scan = scan_comment(&mut cursor, &mut second_ctx);
    assert_eq!(scan.span().map(|s| s.kind), Some(TokenKind::Magic));
}

#[test]
fn realistic_function_file() {
    let source = "\
%%time
function y = f(x)
    % Square the input.
    %{
    Long explanation
      %{ nested %}
    %}
    y = x.^2; % elementwise
end
";
    assert_eq!(
        texts(source),
        vec![
            (TokenKind::Magic, "%%time"),
            (TokenKind::Code, "function y = f(x)"),
            (TokenKind::LineComment, "% Square the input."),
            (
                TokenKind::MultilineComment,
                "%{\n    Long explanation\n      %{ nested %}\n    %}"
            ),
            (TokenKind::Code, "y = x.^2; "),
            (TokenKind::LineComment, "% elementwise"),
            (TokenKind::Code, "end"),
        ]
    );
}

#[test]
fn long_file_scans_linearly() {
    let unit = "for k = 1:10\n    % loop body\n    %{\n    block\n    %}\n    disp(k)\nend\n";
    let source = unit.repeat(2_000);
    let spans = tokenize(&source);
    assert_eq!(spans.len(), 2_000 * 5);
    assert_eq!(
        spans
            .iter()
            .filter(|s| s.kind == TokenKind::MultilineComment)
            .count(),
        2_000
    );
}
