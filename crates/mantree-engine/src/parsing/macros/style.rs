use crate::models::Font;
use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

use super::take_next_text_line;

/// `.B`, `.I`, `.SM`, `.SB`: one span from the joined arguments.
pub fn styled(state: &mut TranslationState, cursor: &mut LineCursor, font: Font, args: &[String]) {
    let args = if args.is_empty() {
        take_next_text_line(state, cursor)
    } else {
        args.to_vec()
    };
    let Some(lead) = args.first() else {
        return;
    };
    let text = state.expand_text_detached(&args.join(" "));
    if text.is_empty() {
        return;
    }
    state.paragraph.word_break(lead);
    state.paragraph.push_styled(font, &text);
}

/// `.BR`, `.IR` and friends: arguments alternate between two fonts, unspaced.
pub fn alternating(state: &mut TranslationState, fonts: (Font, Font), args: &[String]) {
    let Some(lead) = args.first() else {
        return;
    };
    state.paragraph.word_break(lead);
    for (index, arg) in args.iter().enumerate() {
        let font = if index % 2 == 0 { fonts.0 } else { fonts.1 };
        let text = state.expand_text_detached(arg);
        state.paragraph.push_styled(font, &text);
    }
}
