use crate::models::{DiagnosticKind, Node};
use crate::parsing::registers::RegisterValue;
use crate::parsing::state::TranslationState;
use crate::parsing::units::{Length, Unit};

/// Reads an indent argument (ens by default), falling back to the mode's
/// default indent when absent or malformed.
pub(crate) fn indent_arg(state: &mut TranslationState, arg: Option<&String>) -> f32 {
    let default = state.settings().default_indent;
    let Some(arg) = arg else {
        return default;
    };
    match Length::parse(&state.expand_text_detached(arg), Unit::En) {
        Some(length) => length.to_em(),
        None => {
            state.diagnose(
                DiagnosticKind::MalformedArgument,
                format!("invalid indent {arg:?}, using {default}em"),
            );
            default
        }
    }
}

/// `.br`
pub fn line_break(state: &mut TranslationState) {
    state.push_node(Node::LineBreak);
}

/// `.PD [distance]`
pub fn paragraph_spacing(state: &mut TranslationState, args: &[String]) {
    let Some(arg) = args.first() else {
        state.set_inter_paragraph_spacing(None);
        return;
    };
    match Length::parse(&state.expand_text_detached(arg), Unit::Em) {
        Some(length) => state.set_inter_paragraph_spacing(Some(length.to_em())),
        None => {
            state.diagnose(
                DiagnosticKind::MalformedArgument,
                format!("invalid paragraph distance {arg:?}"),
            );
            state.set_inter_paragraph_spacing(None);
        }
    }
}

/// `.RS [indent]`
pub fn indent_push(state: &mut TranslationState, args: &[String]) {
    let indent = indent_arg(state, args.first());
    state.indent.push(indent);
}

/// `.RE`. Popping to an explicit level is not supported.
pub fn indent_pop(state: &mut TranslationState, args: &[String]) {
    if let Some(level) = args.first() {
        state.diagnose(
            DiagnosticKind::StructuralInconsistency,
            format!(".RE with explicit level {level:?} is not supported"),
        );
        return;
    }
    if state.indent.pop().is_none() {
        state.diagnose(
            DiagnosticKind::StructuralInconsistency,
            ".RE without a matching .RS",
        );
    }
}

/// Most breaks a single `.sp` adds.
pub const MAX_VERTICAL_SPACE: usize = 5;

/// `.sp [lines]`: forced breaks inside the current paragraph.
pub fn vertical_space(state: &mut TranslationState, args: &[String]) {
    let lines = match args.first() {
        None => 1,
        Some(arg) => match Length::parse(&state.expand_text_detached(arg), Unit::Vee) {
            Some(length) => length.in_unit(Unit::Vee).max(0.0).ceil() as usize,
            None => {
                state.diagnose(
                    DiagnosticKind::MalformedArgument,
                    format!("invalid vertical space {arg:?}, using 1"),
                );
                1
            }
        },
    };
    let lines = if lines > MAX_VERTICAL_SPACE {
        log::debug!(".sp {lines} clamped to {MAX_VERTICAL_SPACE} lines");
        MAX_VERTICAL_SPACE
    } else {
        lines
    };

    // paragraph spacing already separates blocks
    if state.paragraph.is_empty() {
        return;
    }
    for index in 0..lines {
        if index == 0 && state.paragraph.ends_with_break() {
            continue;
        }
        state.paragraph.push_break();
    }
}

/// `.nf` / `.fi`
pub fn fill(state: &mut TranslationState, on: bool) {
    state.set_fill_mode(on);
}

/// `.ft [font]`; no argument returns to the previous font.
pub fn set_font(state: &mut TranslationState, args: &[String]) {
    let name = args.first().map_or("P", String::as_str);
    state.fonts.select_named(name);
}

/// `.nr name value [increment]`
pub fn set_register(state: &mut TranslationState, args: &[String]) {
    let (Some(name), Some(value)) = (args.first(), args.get(1)) else {
        state.diagnose(
            DiagnosticKind::MalformedArgument,
            ".nr needs a register name and a value",
        );
        return;
    };
    let value = state.expand_text_detached(value);
    match value.trim().parse::<i64>() {
        Ok(number) => state.registers.set(name.as_str(), RegisterValue::Number(number)),
        Err(_) => {
            state.diagnose(
                DiagnosticKind::MalformedArgument,
                format!("register {name} value {value:?} is not an integer"),
            );
        }
    }
    if let Some(increment) = args.get(2) {
        log::debug!("ignoring auto-increment {increment:?} for register {name}");
    }
}
