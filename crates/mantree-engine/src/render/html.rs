//! # HTML Output
//!
//! A tree walk over a [`Translation`]: a metadata header, the nodes in order,
//! and a footer with the generation time. Paragraph text arrives already
//! escaped; metadata and raw text are escaped here.

use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone};

use crate::models::{Font, Inline, Node, Paragraph, ParagraphStyle, Translation};
use crate::parsing::escape::escape_output;

const PREAMBLE: &str = "<!DOCTYPE html>\n<html>\n<head>\n";
const POSTAMBLE: &str = "</body>\n</html>\n";

/// Renders a full HTML document. `charset` names the encoding the page will
/// be written in; `generated` is printed in the footer.
pub fn render_html<Tz>(
    translation: &Translation,
    charset: &str,
    generated: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from(PREAMBLE);
    let metadata = &translation.metadata;

    let _ = writeln!(out, "<meta charset=\"{}\">", escape_output(charset));
    let _ = writeln!(
        out,
        "<title>Man page for {}</title>\n</head>\n<body>",
        escape_output(&metadata.title)
    );
    let _ = writeln!(
        out,
        "Section: {} ({})<br>\nSource: {}<br>\nUpdated: {}\n<hr>",
        escape_output(&metadata.manual),
        escape_output(&metadata.section),
        escape_output(&metadata.source),
        escape_output(&metadata.date),
    );

    if translation.nodes.is_empty() {
        out.push_str("<p></p>\n");
    }
    for node in &translation.nodes {
        write_node(&mut out, node);
    }

    let _ = writeln!(
        out,
        "<hr>\n{}",
        generated.format("Time: %H:%M:%S %Z, %B %d, %Y")
    );
    out.push_str(POSTAMBLE);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Heading { level, text } => {
            let tag = if *level <= 1 { "h2" } else { "h3" };
            let _ = writeln!(out, "<{tag}>{text}</{tag}>");
        }
        Node::Paragraph(paragraph) => {
            write_paragraph(out, paragraph);
            out.push('\n');
        }
        Node::DefinitionList { entries } => {
            out.push_str("<dl>\n");
            for entry in entries {
                out.push_str("<dt>");
                write_fragments(out, &entry.term);
                out.push_str("</dt>\n<dd>");
                if !entry.body.children.is_empty() {
                    write_paragraph(out, &entry.body);
                }
                out.push_str("</dd>\n");
            }
            out.push_str("</dl>\n");
        }
        Node::LineBreak => out.push_str("<br>\n"),
        Node::RawText { text } => {
            let _ = writeln!(out, "<p>{}</p>", escape_output(text));
        }
    }
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    let _ = write!(out, "<p style=\"{}\">", style_attribute(&paragraph.style));
    write_fragments(out, &paragraph.children);
    out.push_str("</p>");
}

fn style_attribute(style: &ParagraphStyle) -> String {
    format!(
        "margin-top: {}em; margin-bottom: {}em; margin-left: {}em; text-indent: {}em",
        style.margin_top, style.margin_bottom, style.left_margin, style.first_line_indent
    )
}

fn write_fragments(out: &mut String, fragments: &[Inline]) {
    for fragment in fragments {
        match fragment {
            Inline::Text(text) => out.push_str(text),
            Inline::Styled { font, text } => {
                let (open, close) = font_tags(*font);
                let _ = write!(out, "{open}{text}{close}");
            }
            Inline::Break => out.push_str("<br>"),
            Inline::Raw(text) => out.push_str(&escape_output(text)),
        }
    }
}

fn font_tags(font: Font) -> (&'static str, &'static str) {
    match font {
        Font::Roman => ("", ""),
        Font::Bold => ("<b>", "</b>"),
        Font::Italic => ("<i>", "</i>"),
        Font::BoldItalic => ("<b><i>", "</i></b>"),
        Font::ConstantWidth => ("<code>", "</code>"),
    }
}
