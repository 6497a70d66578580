use crate::models::DiagnosticKind;
use crate::parsing::TranslateError;
use crate::parsing::condition::evaluate;
use crate::parsing::interpreter::Interpreter;
use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

/// `.if cond rest...` and `.ie cond rest...`
///
/// When the condition holds, the remaining tokens are dispatched as a line of
/// their own. An opening `\{` on the first of them is dropped so a block whose
/// first line was joined on (`.if n \{\`) runs as written.
pub fn if_request(
    interpreter: &Interpreter,
    state: &mut TranslationState,
    cursor: &mut LineCursor,
    args: &[String],
) -> Result<(), TranslateError> {
    let Some((condition, rest)) = args.split_first() else {
        return Ok(());
    };
    let condition = state.expand_text_detached(condition);
    let holds = evaluate(&condition, state.mode(), &state.registers);
    log::debug!("condition {condition:?} is {holds}");
    if !holds {
        return Ok(());
    }

    let mut rest = rest.to_vec();
    if let Some(first) = rest.first_mut()
        && let Some(stripped) = first.strip_prefix("\\{")
    {
        *first = stripped.to_string();
        if first.is_empty() {
            rest.remove(0);
        }
    }
    if rest.is_empty() {
        return Ok(());
    }
    interpreter.dispatch_tokens(state, cursor, &rest)
}

/// `.el`: else branches are never taken.
pub fn else_request(state: &mut TranslationState) {
    state.diagnose(
        DiagnosticKind::UnsupportedFeature,
        ".el branch is not evaluated",
    );
}
