//! # Man Page Interpretation
//!
//! ```text
//! lines → join_continuations → LineCursor
//!       → Interpreter::dispatch_line
//!           text line    → escape::expand → ParagraphBuilder
//!           request line → split_args → MacroTable → handler → TranslationState
//!       → Translation { metadata, nodes, diagnostics }
//! ```
//!
//! Only strict mode can fail, on a request the interpreter does not know.
//! Everything else is recovered from and reported as a [`Diagnostic`].
//!
//! [`Diagnostic`]: crate::models::Diagnostic

pub mod condition;
pub mod escape;
pub mod interpreter;
mod macros;
pub mod paragraph;
pub mod registers;
pub mod snapshot;
pub mod source;
pub mod state;
pub mod table;
pub mod units;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::models::Translation;
use interpreter::Interpreter;
use state::TranslationMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Fail on unknown requests instead of keeping them as raw text.
    pub strict: bool,
    pub mode: TranslationMode,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Not implemented: line {line}: {text}")]
    UnimplementedMacro { line: usize, text: String },
}

/// Translates a page into a document tree.
///
/// ```
/// use mantree_engine::{Node, TranslateOptions, translate};
///
/// let page = [".TH T 1 DATE SRC MAN", ".SH NAME", "foo bar"];
/// let translation = translate(page, &TranslateOptions::default()).unwrap();
///
/// assert_eq!(translation.metadata.title, "T");
/// assert!(matches!(&translation.nodes[0], Node::Heading { level: 1, text } if text == "NAME"));
/// ```
pub fn translate<I, S>(lines: I, options: &TranslateOptions) -> Result<Translation, TranslateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Interpreter::new(*options).translate(lines)
}
