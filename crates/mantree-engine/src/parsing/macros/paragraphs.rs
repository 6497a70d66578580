//! Paragraph requests: plain, hanging, tagged and indented.
//!
//! Tagged and indented paragraphs read ahead on the shared line cursor. The
//! term is built from the lines after the request until one of them produces
//! content; the body from the lines after that until a blank line or a
//! breaking request, which is left for the main loop.

use crate::models::{Inline, Paragraph};
use crate::parsing::TranslateError;
use crate::parsing::interpreter::Interpreter;
use crate::parsing::paragraph::ParagraphBuilder;
use crate::parsing::source::LineCursor;
use crate::parsing::state::TranslationState;

use super::layout::indent_arg;

/// `.PP`, `.LP`, `.P`
pub fn paragraph(state: &mut TranslationState) {
    state.fonts.reset();
}

/// `.HP [width]`
pub fn hanging(state: &mut TranslationState, args: &[String]) {
    let width = indent_arg(state, args.first());
    state.fonts.reset();
    state.set_hanging_indent(width);
}

/// `.TP [width]`
pub fn tagged(
    interpreter: &Interpreter,
    state: &mut TranslationState,
    cursor: &mut LineCursor,
    args: &[String],
) -> Result<(), TranslateError> {
    let width = indent_arg(state, args.first());
    state.fonts.reset();
    let term = collect_term(interpreter, state, cursor)?;
    let body = collect_body(interpreter, state, cursor, width)?;
    state.push_definition(term, body);
    Ok(())
}

/// `.IP [tag [width]]`
pub fn indented(
    interpreter: &Interpreter,
    state: &mut TranslationState,
    cursor: &mut LineCursor,
    args: &[String],
) -> Result<(), TranslateError> {
    let width = indent_arg(state, args.get(1));
    state.fonts.reset();
    let term = match args.first() {
        Some(tag) => {
            let mut builder = ParagraphBuilder::default();
            builder.push_runs(state.expand_detached(tag));
            builder.take()
        }
        None => Vec::new(),
    };
    let body = collect_body(interpreter, state, cursor, width)?;
    state.push_definition(term, body);
    Ok(())
}

fn collect_term(
    interpreter: &Interpreter,
    state: &mut TranslationState,
    cursor: &mut LineCursor,
) -> Result<Vec<Inline>, TranslateError> {
    while state.paragraph.is_empty() {
        let Some(next) = cursor.peek() else {
            break;
        };
        if interpreter.ends_block(next) {
            break;
        }
        let Some(line) = cursor.pop() else {
            break;
        };
        interpreter.dispatch_line(state, cursor, &line)?;
    }
    Ok(state.paragraph.take())
}

fn collect_body(
    interpreter: &Interpreter,
    state: &mut TranslationState,
    cursor: &mut LineCursor,
    width: f32,
) -> Result<Paragraph, TranslateError> {
    while let Some(next) = cursor.peek() {
        if interpreter.ends_block(next) {
            break;
        }
        let Some(line) = cursor.pop() else {
            break;
        };
        interpreter.dispatch_line(state, cursor, &line)?;
    }

    state.set_margin_override(Some(width));
    let style = state.paragraph_style();
    state.set_margin_override(None);
    Ok(Paragraph {
        style,
        children: state.paragraph.take(),
    })
}
