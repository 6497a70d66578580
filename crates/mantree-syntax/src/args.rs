//! # Argument Tokenizing
//!
//! Turns one logical markup line into ordered argument tokens.
//!
//! - Unquoted whitespace separates tokens; runs collapse.
//! - A `"` opens a quoted argument only at the start of the line or right after
//!   whitespace. Anywhere else it is a literal character.
//! - A closing `"` ends the quoted span. Characters right after it continue
//!   the same argument, and the argument is kept even when it is empty.
//! - An unterminated quoted argument keeps its leading quote.
//! - Escapes are kept verbatim (`\fB` stays `\fB`); expanding them is the
//!   engine's job. The one exception is `\"`, which ends the line as a comment
//!   unless it forms the `.\"` comment request itself.
//!
//! ```
//! use mantree_syntax::args::split_args;
//!
//! assert_eq!(split_args(r#".SH "SEE ALSO""#), vec![".SH", "SEE ALSO"]);
//! assert_eq!(split_args(r#"word1" word2""#), vec!["word1\"", "word2\""]);
//! ```

use crate::lexer::{PieceKind, lex};

/// Characters that introduce a request line.
pub const CONTROL_CHARS: [char; 2] = ['.', '\''];

/// A line after continuation joining, with the physical line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the first physical line.
    pub number: usize,
    pub text: String,
}

/// Splits a line into argument tokens.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut can_open = true;
    // a closed quote keeps the token alive even when it is empty
    let mut closed_quote = false;

    for piece in lex(line) {
        match piece.kind {
            PieceKind::Escape => {
                if piece.escaped_char() == Some('"')
                    && !(args.is_empty() && is_control_prefix(&current))
                {
                    // comment: the rest of the line is ignored
                    break;
                }
                current.push_str(piece.text);
                can_open = false;
            }
            PieceKind::Quote => {
                if quoted {
                    quoted = false;
                    closed_quote = true;
                } else if can_open {
                    quoted = true;
                } else {
                    current.push('"');
                }
            }
            PieceKind::Whitespace if !quoted => {
                if !current.is_empty() || closed_quote {
                    args.push(std::mem::take(&mut current));
                }
                closed_quote = false;
                can_open = true;
            }
            PieceKind::Whitespace | PieceKind::Text => {
                current.push_str(piece.text);
                can_open = false;
            }
        }
    }

    if quoted {
        current.insert(0, '"');
    }
    if !current.is_empty() || closed_quote {
        args.push(current);
    }

    args
}

fn is_control_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if CONTROL_CHARS.contains(&c))
}

/// Returns true if the line is a request (starts with `.` or `'`).
pub fn is_control_line(line: &str) -> bool {
    line.starts_with(CONTROL_CHARS)
}

/// Strips the control character from a request token: `.TH` → `TH`.
pub fn request_name(token: &str) -> Option<&str> {
    token.strip_prefix(CONTROL_CHARS)
}

/// Collapses unescaped whitespace in a text line to single spaces.
///
/// Quotes are literal in text lines, and escapes are kept verbatim, so an
/// escaped space (`\ `) survives as its own unit.
pub fn normalize_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;

    for piece in lex(line) {
        if piece.kind == PieceKind::Whitespace {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push_str(piece.text);
    }

    out
}

/// Joins lines ending in an unescaped backslash with the line that follows.
///
/// The backslash-newline pair is consumed. Carriage returns left over from
/// CRLF input are stripped.
pub fn join_continuations<I, S>(lines: I) -> Vec<LogicalLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<LogicalLine> = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (index, raw) in lines.into_iter().enumerate() {
        let raw = raw.as_ref().trim_end_matches(['\r', '\n']);
        let mut line = match pending.take() {
            Some(mut open) => {
                open.text.push_str(raw);
                open
            }
            None => LogicalLine {
                number: index + 1,
                text: raw.to_string(),
            },
        };

        if ends_with_continuation(&line.text) {
            line.text.pop();
            pending = Some(line);
        } else {
            out.push(line);
        }
    }

    if let Some(line) = pending {
        out.push(line);
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}
