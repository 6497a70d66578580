use crate::models::{Metadata, Node};
use crate::parsing::escape::escape_output;
use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

use super::take_next_text_line;

/// `.TH title section date source manual`
pub fn title(state: &mut TranslationState, args: &[String]) {
    let field = |index: usize| {
        args.get(index)
            .map(|arg| state.expand_text_detached(arg))
            .unwrap_or_default()
    };
    let metadata = Metadata {
        title: field(0),
        section: field(1),
        date: field(2),
        source: field(3),
        manual: field(4),
    };
    log::debug!("title {:?} section {:?}", metadata.title, metadata.section);
    state.metadata = metadata;
}

/// `.SH` / `.SS`
pub fn heading(state: &mut TranslationState, cursor: &mut LineCursor, level: u8, args: &[String]) {
    let args = if args.is_empty() {
        take_next_text_line(state, cursor)
    } else {
        args.to_vec()
    };
    let text = escape_output(&state.expand_text_detached(&args.join(" ")));
    state.push_node(Node::Heading { level, text });
}
