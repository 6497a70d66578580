//! # Translation State
//!
//! Everything that changes while a page is interpreted: registers, the indent
//! stack, fonts, the paragraph being built and the nodes emitted so far.
//! One [`TranslationState`] lives for exactly one translation.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{
    DefinitionEntry, Diagnostic, DiagnosticKind, FontState, Inline, Metadata, Node, Paragraph,
    ParagraphStyle, Translation,
};
use crate::parsing::escape::{self, Run};
use crate::parsing::paragraph::ParagraphBuilder;
use crate::parsing::registers::{FILL_MODE, PARAGRAPH_DISTANCE, RegisterValue, Registers};

/// Which formatter the page is laid out for. Decides the `n`/`t` conditions
/// and the default spacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    Nroff,
    #[default]
    Troff,
}

/// Per-mode layout defaults, in em.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeSettings {
    pub inter_paragraph_spacing: f32,
    pub default_indent: f32,
}

impl TranslationMode {
    pub fn settings(self) -> ModeSettings {
        match self {
            Self::Troff => ModeSettings {
                inter_paragraph_spacing: 0.4,
                default_indent: 3.6,
            },
            Self::Nroff => ModeSettings {
                inter_paragraph_spacing: 1.0,
                default_indent: 3.5,
            },
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nroff" => Some(Self::Nroff),
            "troff" => Some(Self::Troff),
            _ => None,
        }
    }
}

/// Relative indents pushed by `.RS`. The effective margin is their sum.
#[derive(Debug, Clone, Default)]
pub struct IndentStack {
    indents: Vec<f32>,
}

impl IndentStack {
    pub fn push(&mut self, indent: f32) {
        self.indents.push(indent);
    }

    pub fn pop(&mut self) -> Option<f32> {
        self.indents.pop()
    }

    pub fn margin(&self) -> f32 {
        // fold from +0.0: an empty float sum is -0.0
        self.indents.iter().fold(0.0, |margin, indent| margin + indent)
    }

    pub fn depth(&self) -> usize {
        self.indents.len()
    }

    pub fn clear(&mut self) {
        self.indents.clear();
    }
}

pub struct TranslationState {
    pub metadata: Metadata,
    pub registers: Registers,
    pub indent: IndentStack,
    pub fonts: FontState,
    pub paragraph: ParagraphBuilder,
    mode: TranslationMode,
    inter_paragraph_spacing: f32,
    margin_override: Option<f32>,
    hanging_indent: Option<f32>,
    user_macros: HashMap<String, Vec<String>>,
    nodes: Vec<Node>,
    diagnostics: Vec<Diagnostic>,
    line: usize,
}

impl TranslationState {
    pub fn new(mode: TranslationMode) -> Self {
        let mut state = Self {
            metadata: Metadata::default(),
            registers: Registers::default(),
            indent: IndentStack::default(),
            fonts: FontState::default(),
            paragraph: ParagraphBuilder::default(),
            mode,
            inter_paragraph_spacing: mode.settings().inter_paragraph_spacing,
            margin_override: None,
            hanging_indent: None,
            user_macros: HashMap::new(),
            nodes: Vec::new(),
            diagnostics: Vec::new(),
            line: 0,
        };
        state.set_fill_mode(true);
        state.set_inter_paragraph_spacing(None);
        state
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    /// Switches mode, as a `'\"` marker line does. Spacing follows the new mode.
    pub fn set_mode(&mut self, mode: TranslationMode) {
        self.mode = mode;
        self.set_inter_paragraph_spacing(None);
    }

    pub fn settings(&self) -> ModeSettings {
        self.mode.settings()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn fill_mode(&self) -> bool {
        !matches!(self.registers.get(FILL_MODE), Some(RegisterValue::Number(0)))
    }

    pub fn set_fill_mode(&mut self, fill: bool) {
        self.registers
            .set(FILL_MODE, RegisterValue::Number(i64::from(fill)));
    }

    pub fn inter_paragraph_spacing(&self) -> f32 {
        self.inter_paragraph_spacing
    }

    /// Sets the spacing between paragraphs; `None` restores the mode default.
    pub fn set_inter_paragraph_spacing(&mut self, spacing: Option<f32>) {
        let spacing = spacing.unwrap_or(self.settings().inter_paragraph_spacing);
        self.inter_paragraph_spacing = spacing;
        self.registers
            .set(PARAGRAPH_DISTANCE, RegisterValue::Text(spacing.to_string()));
    }

    pub fn set_margin_override(&mut self, margin: Option<f32>) {
        self.margin_override = margin;
    }

    /// Makes the next paragraph hang: its body sits `width` right of the
    /// current margin and its first line starts back at the margin.
    pub fn set_hanging_indent(&mut self, width: f32) {
        self.hanging_indent = Some(width);
    }

    pub fn paragraph_style(&self) -> ParagraphStyle {
        let mut left_margin = self
            .margin_override
            .unwrap_or_else(|| self.indent.margin());
        let mut first_line_indent = 0.0;
        if let Some(width) = self.hanging_indent {
            left_margin += width;
            first_line_indent = -width;
        }
        ParagraphStyle {
            margin_top: self.inter_paragraph_spacing,
            margin_bottom: self.inter_paragraph_spacing,
            left_margin,
            first_line_indent,
        }
    }

    /// Expands `text` against the page's registers and running font.
    pub fn expand(&mut self, text: &str) -> Vec<Run> {
        escape::expand(text, &self.registers, &mut self.fonts)
    }

    /// Expands `text` in a scratch font state, leaving the running font alone.
    pub fn expand_detached(&self, text: &str) -> Vec<Run> {
        escape::expand(text, &self.registers, &mut FontState::default())
    }

    pub fn expand_text_detached(&self, text: &str) -> String {
        self.expand_detached(text)
            .into_iter()
            .map(|run| run.text)
            .collect()
    }

    /// Flushes the paragraph buffer into a node, if it holds anything.
    pub fn close_paragraph(&mut self) {
        let style = self.paragraph_style();
        if let Some(paragraph) = self.paragraph.flush(style) {
            self.nodes.push(Node::Paragraph(paragraph));
        }
        self.hanging_indent = None;
    }

    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Adds a definition, extending the list directly before it if there is one.
    pub fn push_definition(&mut self, term: Vec<Inline>, body: Paragraph) {
        let entry = DefinitionEntry { term, body };
        match self.nodes.last_mut() {
            Some(Node::DefinitionList { entries }) => entries.push(entry),
            _ => self.nodes.push(Node::DefinitionList {
                entries: vec![entry],
            }),
        }
    }

    pub fn define_macro(&mut self, name: &str, body: Vec<String>) {
        self.user_macros.insert(name.to_string(), body);
    }

    pub fn has_macro(&self, name: &str) -> bool {
        self.user_macros.contains_key(name)
    }

    pub fn diagnose(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            line: self.line,
            kind,
            message: message.into(),
        };
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns to the state at the top of a page.
    pub fn reset_page(&mut self) {
        self.indent.clear();
        self.fonts.reset();
        self.margin_override = None;
        self.hanging_indent = None;
        self.set_fill_mode(true);
        self.set_inter_paragraph_spacing(None);
    }

    pub fn finish(mut self) -> Translation {
        self.close_paragraph();
        Translation {
            metadata: self.metadata,
            nodes: self.nodes,
            diagnostics: self.diagnostics,
        }
    }
}
