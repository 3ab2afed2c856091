use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::MagicState;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|s| s.kind).collect()
}

fn texts(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .iter()
        .map(|s| (s.kind, &source[s.range()]))
        .collect()
}

#[test]
fn empty_and_blank_sources_have_no_spans() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \n\t\r\n").is_empty());
}

#[test]
fn code_and_trailing_comment() {
    assert_eq!(
        texts("x = 1 % set x\ny = 2"),
        vec![
            (TokenKind::Code, "x = 1 "),
            (TokenKind::LineComment, "% set x"),
            (TokenKind::Code, "y = 2"),
        ]
    );
}

#[test]
fn block_comment_only_document_is_one_span() {
    let source = "%{\n  code\n%}";
    assert_eq!(
        tokenize(source),
        vec![TokenSpan {
            kind: TokenKind::MultilineComment,
            start: 0,
            end: source.len() as u32,
        }]
    );
}

#[test]
fn block_opener_not_alone_falls_through() {
    assert_eq!(
        texts("%{ not alone\ncode\n%}"),
        vec![
            (TokenKind::LineComment, "%{ not alone"),
            (TokenKind::Code, "code"),
            (TokenKind::LineComment, "%}"),
        ]
    );
}

#[test]
fn magics_only_before_code() {
    assert_eq!(
        texts("%%time\n%% section title\nx = 1\n%% later section"),
        vec![
            (TokenKind::Magic, "%%time"),
            (TokenKind::Magic, "%% section title"),
            (TokenKind::Code, "x = 1"),
            (TokenKind::LineComment, "%% later section"),
        ]
    );
}

#[test]
fn indented_block_comment_between_code() {
    assert_eq!(
        kinds("if x\n    %{\n    y = 1;\n    %}\nend"),
        vec![
            TokenKind::Code,
            TokenKind::MultilineComment,
            TokenKind::Code,
        ]
    );
}

#[test]
fn context_is_exposed_after_scanning() {
    let buf = SourceBuffer::new("%%time\n");
    let mut tokenizer = Tokenizer::new(buf.cursor());
    assert_eq!(tokenizer.next_span().map(|s| s.kind), Some(TokenKind::Magic));
    assert_eq!(tokenizer.next_span(), None);
    assert_eq!(tokenizer.context().magic_state(), MagicState::Undetermined);
}

#[test]
fn with_context_continues_previous_state() {
    let buf = SourceBuffer::new("%%time");
    let mut ctx = ScanContext::new();
    ctx.confirm_code();
    let spans: Vec<_> = Tokenizer::with_context(buf.cursor(), ctx).collect();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, TokenKind::LineComment);
}

#[test]
fn leading_bom_is_not_code() {
    let source = "\u{FEFF}%%time\nx = 1";
    assert_eq!(
        texts(source),
        vec![(TokenKind::Magic, "%%time"), (TokenKind::Code, "x = 1")]
    );
}

#[test]
fn block_comment_on_first_line_after_bom() {
    let source = "\u{FEFF}%{\nbody\n%}";
    assert_eq!(
        tokenize(source),
        vec![TokenSpan {
            kind: TokenKind::MultilineComment,
            start: 3,
            end: source.len() as u32,
        }]
    );
}

#[test]
fn interior_null_does_not_stall() {
    assert_eq!(
        texts("a\0b"),
        vec![
            (TokenKind::Code, "a"),
            (TokenKind::Code, "\0b"),
        ]
    );
}

#[test]
fn unicode_text_keeps_char_boundaries() {
    assert_eq!(
        texts("s = 'héllo' % grüß"),
        vec![
            (TokenKind::Code, "s = 'héllo' "),
            (TokenKind::LineComment, "% grüß"),
        ]
    );
}

// === Properties ===

fn matlab_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("%"),
            Just("%%"),
            Just("%{"),
            Just("%}"),
            Just(" "),
            Just("\n"),
            Just("\r\n"),
            Just("x = 1;"),
            Just("end"),
            Just("é"),
            Just("section"),
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_are_ordered_non_empty_and_in_bounds(source in matlab_document()) {
        let spans = tokenize(&source);
        let mut last_end = 0;
        for s in &spans {
            prop_assert!(s.start >= last_end, "overlap at {:?}", s);
            prop_assert!(!s.is_empty(), "empty span {:?}", s);
            prop_assert!(s.end as usize <= source.len());
            prop_assert!(source.is_char_boundary(s.start as usize));
            prop_assert!(source.is_char_boundary(s.end as usize));
            last_end = s.end;
        }
    }

    #[test]
    fn gaps_between_spans_are_blank(source in matlab_document()) {
        let mut last_end = 0usize;
        for s in tokenize(&source) {
            let gap = &source[last_end..s.start as usize];
            prop_assert!(gap.bytes().all(|b| b.is_ascii_whitespace()), "gap {:?}", gap);
            last_end = s.end as usize;
        }
        prop_assert!(source[last_end..].bytes().all(|b| b.is_ascii_whitespace()));
    }

    #[test]
    fn wrapped_block_comment_is_single_span(body in "[a-z %{}\n]{0,60}") {
        // Keep the body from closing the block early: no line may be a lone `%}`.
        let body: String = body
            .lines()
            .map(|line| if line.trim() == "%}" || line.trim() == "%{" { "x" } else { line })
            .collect::<Vec<_>>()
            .join("\n");
        let source = format!("%{{\n{body}\n%}}");
        let spans = tokenize(&source);
        prop_assert_eq!(spans.len(), 1);
        prop_assert_eq!(spans[0].kind, TokenKind::MultilineComment);
        prop_assert_eq!(spans[0].end as usize, source.len());
    }
}
