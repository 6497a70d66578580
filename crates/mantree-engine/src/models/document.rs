//! # Document Tree
//!
//! The renderer-agnostic result of translating a man page. Text inside
//! [`Inline::Text`], [`Inline::Styled`] and [`Node::Heading`] has already been
//! through the output-escaping pass, so a renderer can emit it as is.
//! [`Inline::Raw`], [`Node::RawText`] and [`Metadata`] fields are left unescaped.

use serde::Serialize;

use super::diagnostic::Diagnostic;
use super::font::Font;

/// Values from the page's title request. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub section: String,
    pub date: String,
    pub source: String,
    pub manual: String,
}

/// Box geometry of a paragraph, in em.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ParagraphStyle {
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub left_margin: f32,
    pub first_line_indent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Styled { font: Font, text: String },
    Break,
    /// Preformatted text from no-fill mode.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionEntry {
    pub term: Vec<Inline>,
    pub body: Paragraph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Heading { level: u8, text: String },
    Paragraph(Paragraph),
    DefinitionList { entries: Vec<DefinitionEntry> },
    LineBreak,
    /// A line that could not be interpreted, kept verbatim.
    RawText { text: String },
}

/// Everything produced by one translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Translation {
    pub metadata: Metadata,
    pub nodes: Vec<Node>,
    pub diagnostics: Vec<Diagnostic>,
}
