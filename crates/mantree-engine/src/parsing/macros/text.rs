use mantree_syntax::normalize_text;

use crate::parsing::state::TranslationState;

/// Appends a text line to the paragraph being built.
///
/// Filled text is expanded in the running font and joined to what came before
/// with the word-break rule. In no-fill mode each line is kept as raw text
/// followed by a break.
pub fn append_text(state: &mut TranslationState, line: &str) {
    let normalized = normalize_text(line);
    let runs = state.expand(&normalized);

    if !state.fill_mode() {
        let text = runs.into_iter().map(|run| run.text).collect();
        state.paragraph.push_raw(text);
        state.paragraph.push_break();
        return;
    }

    if runs.is_empty() {
        return;
    }
    state.paragraph.word_break(&normalized);
    state.paragraph.push_runs(runs);
}
