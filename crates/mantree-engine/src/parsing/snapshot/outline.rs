use std::fmt::Write;

use crate::models::{Inline, Node, ParagraphStyle, Translation};

/// One line per node or fragment, children indented by two spaces.
///
/// ```text
/// heading 1 "NAME"
/// paragraph top=0.4 bottom=0.4 left=0 indent=0
///   text "foo bar"
/// ```
pub fn outline(translation: &Translation) -> String {
    let mut out = String::new();
    for node in &translation.nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Heading { level, text } => line(out, 0, &format!("heading {level} {text:?}")),
        Node::Paragraph(paragraph) => {
            line(out, 0, &format!("paragraph {}", style(&paragraph.style)));
            write_fragments(out, 1, &paragraph.children);
        }
        Node::DefinitionList { entries } => {
            line(out, 0, "definition_list");
            for entry in entries {
                line(out, 1, "term");
                write_fragments(out, 2, &entry.term);
                line(out, 1, &format!("body {}", style(&entry.body.style)));
                write_fragments(out, 2, &entry.body.children);
            }
        }
        Node::LineBreak => line(out, 0, "line_break"),
        Node::RawText { text } => line(out, 0, &format!("raw_text {text:?}")),
    }
}

fn write_fragments(out: &mut String, depth: usize, fragments: &[Inline]) {
    for fragment in fragments {
        let text = match fragment {
            Inline::Text(text) => format!("text {text:?}"),
            Inline::Styled { font, text } => {
                format!("{} {text:?}", format!("{font:?}").to_lowercase())
            }
            Inline::Break => "break".to_string(),
            Inline::Raw(text) => format!("raw {text:?}"),
        };
        line(out, depth, &text);
    }
}

fn style(style: &ParagraphStyle) -> String {
    format!(
        "top={} bottom={} left={} indent={}",
        style.margin_top, style.margin_bottom, style.left_margin, style.first_line_indent
    )
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{text}", "  ".repeat(depth));
}
