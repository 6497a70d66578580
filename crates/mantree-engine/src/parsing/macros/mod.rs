//! Request handlers, grouped by what they act on.

pub mod conditional;
pub mod define;
pub mod layout;
pub mod page;
pub mod paragraphs;
pub mod style;
pub mod text;

use mantree_syntax::{is_control_line, normalize_text};

use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

/// Consumes the next line as a single argument when it is a plain text line.
///
/// Used by requests that take their content from the following line when
/// given no arguments (`.SH`, `.B`).
pub(crate) fn take_next_text_line(
    state: &mut TranslationState,
    cursor: &mut LineCursor,
) -> Vec<String> {
    let takes = cursor
        .peek()
        .is_some_and(|next| !next.text.trim().is_empty() && !is_control_line(&next.text));
    if !takes {
        return Vec::new();
    }
    match cursor.pop() {
        Some(line) => {
            state.set_line(line.number);
            vec![normalize_text(&line.text)]
        }
        None => Vec::new(),
    }
}
