//! The table of built-in requests.
//!
//! Each entry names its handler and whether it breaks the paragraph or resets
//! page state before the handler runs.

use std::collections::HashMap;

use crate::models::Font;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Title,
    Heading(u8),
    Style(Font),
    Alternating(Font, Font),
    LineBreak,
    Paragraph,
    HangingParagraph,
    TaggedParagraph,
    IndentedParagraph,
    ParagraphSpacing,
    IndentPush,
    IndentPop,
    SetRegister,
    VerticalSpace,
    Fill(bool),
    SetFont,
    If,
    IfElse,
    Else,
    Define,
    Comment,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroEntry {
    pub handler: Handler,
    pub breaks: bool,
    pub resets: bool,
}

impl MacroEntry {
    const fn inline(handler: Handler) -> Self {
        Self {
            handler,
            breaks: false,
            resets: false,
        }
    }

    const fn breaking(handler: Handler) -> Self {
        Self {
            handler,
            breaks: true,
            resets: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MacroTable {
    entries: HashMap<&'static str, MacroEntry>,
}

impl MacroTable {
    pub fn get(&self, name: &str) -> Option<MacroEntry> {
        self.entries.get(name).copied()
    }

    pub fn breaks(&self, name: &str) -> bool {
        self.get(name).is_some_and(|entry| entry.breaks)
    }
}

impl Default for MacroTable {
    fn default() -> Self {
        use Handler::*;

        let entries = [
            (
                "TH",
                MacroEntry {
                    handler: Title,
                    breaks: true,
                    resets: true,
                },
            ),
            ("SH", MacroEntry::breaking(Heading(1))),
            ("SS", MacroEntry::breaking(Heading(2))),
            ("B", MacroEntry::inline(Style(Font::Bold))),
            ("I", MacroEntry::inline(Style(Font::Italic))),
            ("SM", MacroEntry::inline(Style(Font::Roman))),
            ("SB", MacroEntry::inline(Style(Font::Bold))),
            ("BR", MacroEntry::inline(Alternating(Font::Bold, Font::Roman))),
            ("RB", MacroEntry::inline(Alternating(Font::Roman, Font::Bold))),
            ("BI", MacroEntry::inline(Alternating(Font::Bold, Font::Italic))),
            ("IB", MacroEntry::inline(Alternating(Font::Italic, Font::Bold))),
            ("IR", MacroEntry::inline(Alternating(Font::Italic, Font::Roman))),
            ("RI", MacroEntry::inline(Alternating(Font::Roman, Font::Italic))),
            ("br", MacroEntry::breaking(LineBreak)),
            ("PP", MacroEntry::breaking(Paragraph)),
            ("LP", MacroEntry::breaking(Paragraph)),
            ("P", MacroEntry::breaking(Paragraph)),
            ("HP", MacroEntry::breaking(HangingParagraph)),
            ("TP", MacroEntry::breaking(TaggedParagraph)),
            ("IP", MacroEntry::breaking(IndentedParagraph)),
            ("PD", MacroEntry::inline(ParagraphSpacing)),
            ("RS", MacroEntry::breaking(IndentPush)),
            ("RE", MacroEntry::breaking(IndentPop)),
            ("nr", MacroEntry::inline(SetRegister)),
            ("sp", MacroEntry::inline(VerticalSpace)),
            ("nf", MacroEntry::breaking(Fill(false))),
            ("fi", MacroEntry::breaking(Fill(true))),
            ("ft", MacroEntry::inline(SetFont)),
            ("if", MacroEntry::inline(If)),
            ("ie", MacroEntry::inline(IfElse)),
            ("el", MacroEntry::inline(Else)),
            ("de", MacroEntry::inline(Define)),
            ("\\\"", MacroEntry::inline(Comment)),
            ("\\}", MacroEntry::inline(Ignore)),
            ("pc", MacroEntry::inline(Ignore)),
            ("ad", MacroEntry::inline(Ignore)),
            ("na", MacroEntry::inline(Ignore)),
            ("hy", MacroEntry::inline(Ignore)),
            ("nh", MacroEntry::inline(Ignore)),
            ("ne", MacroEntry::inline(Ignore)),
            ("ta", MacroEntry::inline(Ignore)),
            ("ll", MacroEntry::inline(Ignore)),
            ("ns", MacroEntry::inline(Ignore)),
            ("rs", MacroEntry::inline(Ignore)),
            ("UC", MacroEntry::inline(Ignore)),
            ("DT", MacroEntry::inline(Ignore)),
        ];

        Self {
            entries: entries.into_iter().collect(),
        }
    }
}
