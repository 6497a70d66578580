//! # Escape Expansion
//!
//! Rewrites troff escape sequences inside a token or text line. Font escapes
//! split the output into [`Run`]s; everything else becomes plain characters.
//!
//! ```
//! use mantree_engine::parsing::escape::expand;
//! use mantree_engine::parsing::registers::Registers;
//! use mantree_engine::{Font, FontState};
//!
//! let mut fonts = FontState::default();
//! let runs = expand(r"see \fBls\fP\-1", &Registers::default(), &mut fonts);
//!
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].font, Font::Bold);
//! assert_eq!(runs[2].text, "\u{2212}1");
//! ```
//!
//! Unknown escapes are copied through unchanged, backslash included.

pub mod cursor;
pub mod output;
pub mod rules;
pub mod specials;

use cursor::Cursor;
use rules::{Expansion, RULES};

use crate::models::{Font, FontState};
use crate::parsing::registers::Registers;

pub use output::escape_output;

/// Expanded text in a single font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub font: Font,
    pub text: String,
}

struct RunBuilder {
    runs: Vec<Run>,
    font: Font,
}

impl RunBuilder {
    fn new(font: Font) -> Self {
        Self {
            runs: Vec::new(),
            font,
        }
    }

    fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(run) if run.font == self.font => run.text.push_str(s),
            _ => self.runs.push(Run {
                font: self.font,
                text: s.to_string(),
            }),
        }
    }

    fn finish(self) -> Vec<Run> {
        self.runs
    }
}

/// Expands every escape in `text`, updating `fonts` as font escapes are seen.
pub fn expand(text: &str, registers: &Registers, fonts: &mut FontState) -> Vec<Run> {
    let mut out = RunBuilder::new(fonts.current());
    let mut cur = Cursor::new(text);

    while !cur.eof() {
        let plain = cur.take_until('\\');
        out.push_str(plain);
        if cur.eof() {
            break;
        }

        let rest = cur.rest();
        let hit = RULES
            .iter()
            .find_map(|rule| rule.pattern.captures(rest).map(|caps| (rule.expansion, caps)));

        let Some((expansion, caps)) = hit else {
            // not an escape we know: keep the backslash, the next char follows as text
            cur.bump();
            out.push_str("\\");
            if let Some(c) = cur.bump() {
                out.push_str(c.encode_utf8(&mut [0; 4]));
            }
            continue;
        };

        let matched = caps.get(0).map_or("", |m| m.as_str());
        let arg = caps.get(1).map_or("", |m| m.as_str());
        match expansion {
            Expansion::Literal(s) => out.push_str(s),
            Expansion::Comment => break,
            Expansion::Register => out.push_str(&registers.interpolate(arg)),
            Expansion::Font => {
                fonts.select_named(arg);
                out.font = fonts.current();
            }
            Expansion::Special => match specials::special(arg) {
                Some(glyph) => out.push_str(&glyph),
                None => out.push_str(matched),
            },
            Expansion::Dropped => {}
        }
        cur.bump_n(matched.len());
    }

    out.finish()
}

/// Expands `text` ignoring fonts.
pub fn expand_text(text: &str, registers: &Registers, fonts: &mut FontState) -> String {
    expand(text, registers, fonts)
        .into_iter()
        .map(|run| run.text)
        .collect()
}

/// Splits a line into argument tokens and expands each one without state:
/// no registers are set and fonts start at roman.
///
/// ```
/// use mantree_engine::parsing::escape::tokenize;
///
/// assert_eq!(tokenize(r"word1\e"), vec![r"word1\"]);
/// assert_eq!(tokenize(r#"word1 "" word2"#), vec!["word1", "", "word2"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let registers = Registers::default();
    mantree_syntax::split_args(line)
        .iter()
        .map(|token| expand_text(token, &registers, &mut FontState::default()))
        .collect()
}
