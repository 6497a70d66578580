//! # Lexer - Raw Pieces of a Markup Line
//!
//! The first stage of reading a line: break it into raw pieces using the
//! [Logos] lexer generator. Pieces carry no troff meaning beyond what is
//! needed to find argument boundaries.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one piece, so concatenating the
//! piece texts gives back the line:
//!
//! ```
//! use mantree_syntax::lexer::lex;
//!
//! let input = r#".B "bold text" \fIword"#;
//! let pieces = lex(input);
//!
//! let reconstructed: String = pieces.iter().map(|p| p.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Piece Design
//!
//! - whitespace runs → [`PieceKind::Whitespace`]
//! - `"` → [`PieceKind::Quote`]
//! - backslash plus the following character → [`PieceKind::Escape`]
//! - everything else, grouped into runs → [`PieceKind::Text`]
//!
//! Whether a quote opens an argument, or an escape is a comment marker, is
//! decided by the tokenizer in [`crate::args`].

use logos::Logos;

/// Piece kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// Horizontal whitespace (spaces, tabs, stray carriage returns)
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,

    /// A double quote
    #[token("\"")]
    Quote,

    /// Backslash followed by exactly one character
    #[regex(r"\\.")]
    Escape,

    /// Plain text - anything not matched by other rules
    #[regex(r#"[^ \t\r\x0B\x0C"\\]+"#)]
    Text,
}

/// A lexed piece with its kind and text slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    pub kind: PieceKind,
    pub text: &'a str,
}

impl<'a> Piece<'a> {
    /// The character following the backslash of an escape piece.
    pub fn escaped_char(&self) -> Option<char> {
        match self.kind {
            PieceKind::Escape => self.text[1..].chars().next(),
            _ => None,
        }
    }
}

/// Lex a single line into raw pieces.
///
/// A lone backslash at the end of the line matches no rule; it comes back as a
/// `Text` piece so that no byte is ever dropped.
pub fn lex(line: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut lexer = PieceKind::lexer(line);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = result.unwrap_or(PieceKind::Text);
        pieces.push(Piece { kind, text });
    }

    pieces
}
