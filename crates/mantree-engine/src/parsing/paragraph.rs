//! Accumulates inline fragments for the paragraph being built.

use crate::models::{Font, Inline, Paragraph, ParagraphStyle};
use crate::parsing::escape::{Run, escape_output};

/// Characters that attach to the preceding word without a space.
const CLOSING_PUNCTUATION: [char; 6] = [',', '.', '?', '!', ';', ':'];

#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    fragments: Vec<Inline>,
}

impl ParagraphBuilder {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn ends_with_break(&self) -> bool {
        matches!(self.fragments.last(), Some(Inline::Break))
    }

    pub fn fragments(&self) -> &[Inline] {
        &self.fragments
    }

    /// Inserts a word space before new content led by `lead` (its raw source text).
    ///
    /// No space goes at the start of the buffer, after a break, or before
    /// closing punctuation.
    pub fn word_break(&mut self, lead: &str) {
        let Some(first) = lead.chars().next() else {
            return;
        };
        if self.is_empty() || self.ends_with_break() || CLOSING_PUNCTUATION.contains(&first) {
            return;
        }
        self.push_text(" ");
    }

    /// Appends unescaped text in roman, merging with a preceding text fragment.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let escaped = escape_output(text);
        match self.fragments.last_mut() {
            Some(Inline::Text(prev)) => prev.push_str(&escaped),
            _ => self.fragments.push(Inline::Text(escaped)),
        }
    }

    /// Appends unescaped text in `font`. Roman text is plain text.
    pub fn push_styled(&mut self, font: Font, text: &str) {
        if font == Font::Roman {
            self.push_text(text);
            return;
        }
        if text.is_empty() {
            return;
        }
        let escaped = escape_output(text);
        match self.fragments.last_mut() {
            Some(Inline::Styled { font: prev, text }) if *prev == font => text.push_str(&escaped),
            _ => self.fragments.push(Inline::Styled {
                font,
                text: escaped,
            }),
        }
    }

    pub fn push_runs(&mut self, runs: Vec<Run>) {
        for run in runs {
            self.push_styled(run.font, &run.text);
        }
    }

    /// Appends preformatted text; escaping is left to the renderer.
    pub fn push_raw(&mut self, text: String) {
        self.fragments.push(Inline::Raw(text));
    }

    pub fn push_break(&mut self) {
        self.fragments.push(Inline::Break);
    }

    /// Empties the buffer, returning what it held.
    pub fn take(&mut self) -> Vec<Inline> {
        std::mem::take(&mut self.fragments)
    }

    /// Closes the buffer into a paragraph. An empty buffer yields nothing.
    pub fn flush(&mut self, style: ParagraphStyle) -> Option<Paragraph> {
        if self.is_empty() {
            return None;
        }
        Some(Paragraph {
            style,
            children: self.take(),
        })
    }
}
