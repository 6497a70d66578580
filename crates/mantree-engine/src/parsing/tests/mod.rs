//! End-to-end tests for the interpreter: whole pages in, document trees out.

use pretty_assertions::assert_eq;

use crate::models::{
    DiagnosticKind, Font, Inline, Metadata, Node, Paragraph, ParagraphStyle, Translation,
};
use crate::parsing::macros::layout::MAX_VERTICAL_SPACE;
use crate::parsing::snapshot::{invariants, outline};
use crate::parsing::state::TranslationMode;
use crate::parsing::{TranslateError, TranslateOptions, translate};

fn run_with(lines: &[&str], options: TranslateOptions) -> Translation {
    let translation = translate(lines, &options).unwrap();
    invariants(&translation, lines.len());
    translation
}

fn run(lines: &[&str]) -> Translation {
    run_with(lines, TranslateOptions::default())
}

fn style(spacing: f32, left_margin: f32, first_line_indent: f32) -> ParagraphStyle {
    ParagraphStyle {
        margin_top: spacing,
        margin_bottom: spacing,
        left_margin,
        first_line_indent,
    }
}

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

fn bold(s: &str) -> Inline {
    Inline::Styled {
        font: Font::Bold,
        text: s.to_string(),
    }
}

fn paragraph(children: Vec<Inline>) -> Node {
    Node::Paragraph(Paragraph {
        style: style(0.4, 0.0, 0.0),
        children,
    })
}

fn kinds(translation: &Translation) -> Vec<DiagnosticKind> {
    translation.diagnostics.iter().map(|d| d.kind).collect()
}

#[test]
fn title_heading_and_paragraph() {
    let translation = run(&[".TH T 1 DATE SRC MAN", ".SH NAME", "foo bar"]);

    assert_eq!(
        translation.metadata,
        Metadata {
            title: "T".to_string(),
            section: "1".to_string(),
            date: "DATE".to_string(),
            source: "SRC".to_string(),
            manual: "MAN".to_string(),
        }
    );
    assert_eq!(
        translation.nodes,
        vec![
            Node::Heading {
                level: 1,
                text: "NAME".to_string()
            },
            paragraph(vec![text("foo bar")]),
        ]
    );
    assert!(translation.diagnostics.is_empty());
}

#[test]
fn missing_title_fields_are_empty() {
    let translation = run(&[r#".TH "MY PAGE" 8"#]);
    assert_eq!(translation.metadata.title, "MY PAGE");
    assert_eq!(translation.metadata.section, "8");
    assert_eq!(translation.metadata.manual, "");
    assert!(translation.nodes.is_empty());
}

#[test]
fn realistic_page_outline() {
    let translation = run(&[
        r#".TH LS 1 2024-01-01 "GNU coreutils" "User Commands""#,
        ".SH NAME",
        r"ls \- list directory contents",
        ".SH SYNOPSIS",
        ".B ls",
        r"[\fIOPTION\fR]... [\fIFILE\fR]...",
        ".SH OPTIONS",
        ".TP",
        r".B \-a",
        "do not ignore entries starting with .",
        ".TP",
        r#".BR \-l ", " \-\-long"#,
        "use a long listing format",
        ".PP",
        "Exit status is 0 < 1.",
    ]);

    assert_eq!(translation.metadata.source, "GNU coreutils");
    insta::assert_snapshot!(outline(&translation), @r#"
heading 1 "NAME"
paragraph top=0.4 bottom=0.4 left=0 indent=0
  text "ls &#x2212; list directory contents"
heading 1 "SYNOPSIS"
paragraph top=0.4 bottom=0.4 left=0 indent=0
  bold "ls"
  text " ["
  italic "OPTION"
  text "]... ["
  italic "FILE"
  text "]..."
heading 1 "OPTIONS"
definition_list
  term
    bold "&#x2212;a"
  body top=0.4 bottom=0.4 left=3.6 indent=0
    text "do not ignore entries starting with ."
  term
    bold "&#x2212;l"
    text ", "
    bold "&#x2212;&#x2212;long"
  body top=0.4 bottom=0.4 left=3.6 indent=0
    text "use a long listing format"
paragraph top=0.4 bottom=0.4 left=0 indent=0
  text "Exit status is 0 &lt; 1."
"#);
}

#[test]
fn word_break_rule_around_styles() {
    let translation = run(&["See", ".BR ls (1),", "for details."]);
    assert_eq!(
        translation.nodes,
        vec![paragraph(vec![
            text("See "),
            bold("ls"),
            text("(1), for details."),
        ])]
    );
}

#[test]
fn no_space_before_punctuation_line() {
    let translation = run(&["alpha", ", beta"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("alpha, beta")])]);
}

#[test]
fn blank_line_closes_paragraph() {
    let translation = run(&["a", "", "b"]);
    assert_eq!(
        translation.nodes,
        vec![paragraph(vec![text("a")]), paragraph(vec![text("b")])]
    );
}

#[test]
fn line_break_request() {
    let translation = run(&["a", ".br", "b"]);
    assert_eq!(
        translation.nodes,
        vec![
            paragraph(vec![text("a")]),
            Node::LineBreak,
            paragraph(vec![text("b")]),
        ]
    );
}

#[test]
fn unknown_request_in_strict_mode_fails() {
    let options = TranslateOptions {
        strict: true,
        ..TranslateOptions::default()
    };
    let result = translate(["text", ".XX foo"], &options);
    assert!(matches!(
        result,
        Err(TranslateError::UnimplementedMacro { line: 2, ref text }) if text == ".XX foo"
    ));
}

#[test]
fn unknown_request_in_lenient_mode_is_raw_text() {
    let translation = run(&["before", ".XX foo", "after"]);
    assert_eq!(
        translation.nodes,
        vec![
            paragraph(vec![text("before")]),
            Node::RawText {
                text: ".XX foo".to_string()
            },
            paragraph(vec![text("after")]),
        ]
    );
    assert_eq!(kinds(&translation), vec![DiagnosticKind::UnknownMacro]);
    assert_eq!(translation.diagnostics[0].line, 2);
}

#[test]
fn relative_indents_stack() {
    let translation = run(&[".RS 4", "indented", ".RS 2", "deeper", ".RE", "back", ".RE", "out"]);
    let margins: Vec<f32> = translation
        .nodes
        .iter()
        .map(|node| match node {
            Node::Paragraph(p) => p.style.left_margin,
            other => panic!("unexpected node {other:?}"),
        })
        .collect();
    assert_eq!(margins, vec![2.0, 3.0, 2.0, 0.0]);
}

#[test]
fn unbalanced_indent_pop_is_reported() {
    let translation = run(&[".RS", ".RE 1", "still indented", ".RE", ".RE"]);
    assert_eq!(
        translation.nodes,
        vec![Node::Paragraph(Paragraph {
            style: style(0.4, 3.6, 0.0),
            children: vec![text("still indented")],
        })]
    );
    assert_eq!(
        kinds(&translation),
        vec![
            DiagnosticKind::StructuralInconsistency,
            DiagnosticKind::StructuralInconsistency,
        ]
    );
}

#[test]
fn title_clears_indentation() {
    let translation = run(&[".RS", ".TH X 1", "text"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("text")])]);
}

#[test]
fn no_fill_keeps_lines() {
    let translation = run(&[".nf", "a  b", "c < d", ".fi", "e"]);
    assert_eq!(
        translation.nodes,
        vec![
            paragraph(vec![
                Inline::Raw("a b".to_string()),
                Inline::Break,
                Inline::Raw("c < d".to_string()),
                Inline::Break,
            ]),
            paragraph(vec![text("e")]),
        ]
    );
}

#[test]
fn registers_interpolate_into_text() {
    let translation = run(&[".nr x 5", ".nr y abc", r"x=\nx y=\ny"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("x=5 y=")])]);
    assert_eq!(kinds(&translation), vec![DiagnosticKind::MalformedArgument]);
}

#[test]
fn fill_register_is_visible() {
    let translation = run(&[r"\n(.u", ".nf", r"\n(.u"]);
    assert_eq!(
        translation.nodes,
        vec![
            paragraph(vec![text("1")]),
            paragraph(vec![Inline::Raw("0".to_string()), Inline::Break]),
        ]
    );
}

#[test]
fn conditionals_follow_translation_mode() {
    let lines = [".if n .B narrow", ".if t .B wide"];
    let troff = run(&lines);
    assert_eq!(troff.nodes, vec![paragraph(vec![bold("wide")])]);

    let nroff = run_with(
        &lines,
        TranslateOptions {
            mode: TranslationMode::Nroff,
            ..TranslateOptions::default()
        },
    );
    assert_eq!(
        nroff.nodes,
        vec![Node::Paragraph(Paragraph {
            style: style(1.0, 0.0, 0.0),
            children: vec![bold("narrow")],
        })]
    );
}

#[test]
fn conditional_text_and_else() {
    let translation = run(&[".ie t troff text", ".el nroff text"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("troff text")])]);
    assert_eq!(kinds(&translation), vec![DiagnosticKind::UnsupportedFeature]);
}

#[test]
fn conditional_block_opening_is_dropped() {
    let translation = run(&[r".if t \{\", ".B block", r".\}"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![bold("block")])]);
}

#[test]
fn register_conditions() {
    let translation = run(&[".nr v 2", r".if \nv>1 big", ".if rv set", ".if !rw unset"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("big set unset")])]);
}

#[test]
fn mode_marker_switches_mode() {
    let translation = run(&[r#"'\" nroff"#, ".if n .B yes", ".if t .B no"]);
    assert_eq!(
        translation.nodes,
        vec![Node::Paragraph(Paragraph {
            style: style(1.0, 0.0, 0.0),
            children: vec![bold("yes")],
        })]
    );
}

#[test]
fn macro_definitions_are_stored_not_run() {
    let translation = run(&[".de XX", ".B inside", "..", ".XX", "after"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("after")])]);
    assert_eq!(kinds(&translation), vec![DiagnosticKind::UnsupportedFeature]);
    assert_eq!(translation.diagnostics[0].line, 4);
}

#[test]
fn macro_definition_with_custom_terminator() {
    let translation = run(&[".de XX END", "body", ".END", "after"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![text("after")])]);
}

#[test]
fn vertical_space_inserts_breaks() {
    let translation = run(&[".sp", "one", ".sp", "two", ".br", ".sp 2", "three"]);
    assert_eq!(
        translation.nodes,
        vec![
            paragraph(vec![text("one"), Inline::Break, text("two")]),
            Node::LineBreak,
            paragraph(vec![text("three")]),
        ]
    );

    let doubled = run(&["one", ".sp 2", "two"]);
    assert_eq!(
        doubled.nodes,
        vec![paragraph(vec![
            text("one"),
            Inline::Break,
            Inline::Break,
            text("two"),
        ])]
    );
}

#[test]
fn huge_vertical_space_is_clamped() {
    let translation = run(&["text", ".sp 20000000", "after"]);
    let Node::Paragraph(paragraph) = &translation.nodes[0] else {
        panic!("expected a paragraph: {:?}", translation.nodes);
    };
    let breaks = paragraph
        .children
        .iter()
        .filter(|fragment| **fragment == Inline::Break)
        .count();
    assert_eq!(breaks, MAX_VERTICAL_SPACE);
    assert_eq!(paragraph.children.last(), Some(&text("after")));
}

#[test]
fn paragraph_spacing() {
    let translation = run(&[".PD 0", "tight", ".PP", ".PD", "default"]);
    assert_eq!(
        translation.nodes,
        vec![
            Node::Paragraph(Paragraph {
                style: style(0.0, 0.0, 0.0),
                children: vec![text("tight")],
            }),
            paragraph(vec![text("default")]),
        ]
    );

    let malformed = run(&[".PD junk", "x"]);
    assert_eq!(malformed.nodes, vec![paragraph(vec![text("x")])]);
    assert_eq!(kinds(&malformed), vec![DiagnosticKind::MalformedArgument]);
}

#[test]
fn hanging_paragraph() {
    let translation = run(&[".HP 4", "hanging text", ".PP", "plain"]);
    assert_eq!(
        translation.nodes,
        vec![
            Node::Paragraph(Paragraph {
                style: style(0.4, 2.0, -2.0),
                children: vec![text("hanging text")],
            }),
            paragraph(vec![text("plain")]),
        ]
    );
}

#[test]
fn indented_paragraphs_share_a_list() {
    let translation = run(&[r".IP \(bu 4", "item one", r".IP \(bu 4", "item two"]);
    insta::assert_snapshot!(outline(&translation), @r#"
definition_list
  term
    text "&#x2022;"
  body top=0.4 bottom=0.4 left=2 indent=0
    text "item one"
  term
    text "&#x2022;"
  body top=0.4 bottom=0.4 left=2 indent=0
    text "item two"
"#);
}

#[test]
fn tagged_paragraph_stops_at_blank_line() {
    let translation = run(&[".TP", "term", "body", "", "after"]);
    assert_eq!(translation.nodes.len(), 2);
    assert_eq!(translation.nodes[1], paragraph(vec![text("after")]));
}

#[test]
fn heading_from_next_line() {
    let translation = run(&[".SH", "SEE ALSO", "text"]);
    assert_eq!(
        translation.nodes,
        vec![
            Node::Heading {
                level: 1,
                text: "SEE ALSO".to_string()
            },
            paragraph(vec![text("text")]),
        ]
    );
}

#[test]
fn continuation_lines_join_into_one_request() {
    let translation = run(&[r".SS SEE \", "ALSO"]);
    assert_eq!(
        translation.nodes,
        vec![Node::Heading {
            level: 2,
            text: "SEE ALSO".to_string()
        }]
    );
}

#[test]
fn comments_and_empty_requests_produce_nothing() {
    let translation = run(&[r#".\" a comment"#, ".", ".  B spaced"]);
    assert_eq!(translation.nodes, vec![paragraph(vec![bold("spaced")])]);
}

#[test]
fn style_macros_do_not_leak_fonts() {
    let translation = run(&[r".B \fIinner", "plain"]);
    assert_eq!(
        translation.nodes,
        vec![paragraph(vec![bold("inner"), text(" plain")])]
    );
}
