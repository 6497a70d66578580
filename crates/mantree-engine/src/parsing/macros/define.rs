use mantree_syntax::{request_name, split_args};

use crate::models::DiagnosticKind;
use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

/// `.de name [end]`: captures lines up to `..` (or `.end`) as the body of a
/// user macro. Bodies are stored but never run.
pub fn define(state: &mut TranslationState, cursor: &mut LineCursor, args: &[String]) {
    let Some(name) = args.first() else {
        state.diagnose(DiagnosticKind::MalformedArgument, ".de without a macro name");
        return;
    };
    let terminator = args.get(1).map_or(".", String::as_str);

    let mut body = Vec::new();
    let mut closed = false;
    while let Some(line) = cursor.pop() {
        let tokens = split_args(&line.text);
        if tokens.first().and_then(|token| request_name(token)) == Some(terminator) {
            closed = true;
            break;
        }
        body.push(line.text);
    }

    if !closed {
        state.diagnose(
            DiagnosticKind::StructuralInconsistency,
            format!("definition of {name} is never terminated"),
        );
    }
    log::debug!("captured macro {name} ({} lines)", body.len());
    state.define_macro(name, body);
}
