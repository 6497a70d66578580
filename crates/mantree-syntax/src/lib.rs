//! # mantree-syntax
//!
//! Line-level reading of man page markup (the troff `man` macro dialect).
//!
//! ## Pipeline
//!
//! ```text
//! physical lines → join_continuations → logical lines
//! logical line   → lexer::lex         → raw pieces (logos)
//! raw pieces     → args::split_args   → argument tokens
//! ```
//!
//! Nothing in this crate can fail: malformed quoting degrades to literal text.
//! Escape sequences are preserved verbatim for the engine's expander.
//!
//! ## Quick Start
//!
//! ```
//! use mantree_syntax::{join_continuations, split_args};
//!
//! let lines = join_continuations([".TH LS 1 \\", "2024-01-01"]);
//! assert_eq!(lines.len(), 1);
//! assert_eq!(split_args(&lines[0].text), vec![".TH", "LS", "1", "2024-01-01"]);
//! ```

pub mod args;
pub mod lexer;

pub use args::{
    LogicalLine, is_control_line, join_continuations, normalize_text, request_name, split_args,
};
pub use lexer::{Piece, PieceKind, lex};
