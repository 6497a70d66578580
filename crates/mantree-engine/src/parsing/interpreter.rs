//! # Request Dispatch
//!
//! The interpreter walks the logical lines of a page. Text lines go to the
//! paragraph builder; request lines are looked up in the [`MacroTable`], the
//! paragraph is closed for breaking requests, and the bound handler runs with
//! the remaining tokens.
//!
//! Handlers that read ahead get the interpreter and the shared [`LineCursor`]
//! so they can dispatch the lines they consume through the same path.

use mantree_syntax::{LogicalLine, is_control_line, join_continuations, request_name, split_args};

use crate::models::{DiagnosticKind, Node, Translation};
use crate::parsing::macros::{conditional, define, layout, page, paragraphs, style, text};
use crate::parsing::source::LineCursor;
use crate::parsing::state::{TranslationMode, TranslationState};
use crate::parsing::table::{Handler, MacroTable};
use crate::parsing::{TranslateError, TranslateOptions};

/// Name of the comment request; with a `'` control character it marks the mode.
const COMMENT: &str = "\\\"";

pub struct Interpreter {
    table: MacroTable,
    options: TranslateOptions,
}

impl Interpreter {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            table: MacroTable::default(),
            options,
        }
    }

    /// Translates one page, given as physical lines without terminators.
    pub fn translate<I, S>(&self, lines: I) -> Result<Translation, TranslateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cursor = LineCursor::new(join_continuations(lines));
        let mut state = TranslationState::new(self.options.mode);

        while let Some(line) = cursor.pop() {
            self.dispatch_line(&mut state, &mut cursor, &line)?;
        }

        Ok(state.finish())
    }

    pub(crate) fn dispatch_line(
        &self,
        state: &mut TranslationState,
        cursor: &mut LineCursor,
        line: &LogicalLine,
    ) -> Result<(), TranslateError> {
        state.set_line(line.number);

        if line.text.trim().is_empty() {
            state.close_paragraph();
            return Ok(());
        }
        if !is_control_line(&line.text) {
            text::append_text(state, &line.text);
            return Ok(());
        }

        let tokens = split_args(&line.text);
        self.dispatch_request(state, cursor, &tokens, &line.text)
    }

    /// Dispatches already tokenized input, as left over from a conditional.
    pub(crate) fn dispatch_tokens(
        &self,
        state: &mut TranslationState,
        cursor: &mut LineCursor,
        tokens: &[String],
    ) -> Result<(), TranslateError> {
        let source = tokens.join(" ");
        match tokens.first() {
            Some(first) if is_control_line(first) => {
                self.dispatch_request(state, cursor, tokens, &source)
            }
            Some(_) => {
                text::append_text(state, &source);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// True for lines that end a tagged paragraph's look-ahead: blank lines
    /// and breaking requests.
    pub(crate) fn ends_block(&self, line: &LogicalLine) -> bool {
        if line.text.trim().is_empty() {
            return true;
        }
        if !is_control_line(&line.text) {
            return false;
        }
        let tokens = split_args(&line.text);
        split_request(&tokens).is_some_and(|(name, _)| self.table.breaks(name))
    }

    fn dispatch_request(
        &self,
        state: &mut TranslationState,
        cursor: &mut LineCursor,
        tokens: &[String],
        source: &str,
    ) -> Result<(), TranslateError> {
        let Some((name, args)) = split_request(tokens) else {
            return Ok(());
        };

        if name == COMMENT && tokens.first().is_some_and(|first| first.starts_with('\'')) {
            mode_marker(state, args);
            return Ok(());
        }

        let Some(entry) = self.table.get(name) else {
            return self.unknown_request(state, name, source);
        };

        log::debug!("line {}: .{name} {args:?}", state.line());
        if entry.breaks {
            state.close_paragraph();
        }
        if entry.resets {
            state.reset_page();
        }
        self.run(entry.handler, state, cursor, args)
    }

    fn run(
        &self,
        handler: Handler,
        state: &mut TranslationState,
        cursor: &mut LineCursor,
        args: &[String],
    ) -> Result<(), TranslateError> {
        match handler {
            Handler::Title => page::title(state, args),
            Handler::Heading(level) => page::heading(state, cursor, level, args),
            Handler::Style(font) => style::styled(state, cursor, font, args),
            Handler::Alternating(first, second) => {
                style::alternating(state, (first, second), args)
            }
            Handler::LineBreak => layout::line_break(state),
            Handler::Paragraph => paragraphs::paragraph(state),
            Handler::HangingParagraph => paragraphs::hanging(state, args),
            Handler::TaggedParagraph => return paragraphs::tagged(self, state, cursor, args),
            Handler::IndentedParagraph => return paragraphs::indented(self, state, cursor, args),
            Handler::ParagraphSpacing => layout::paragraph_spacing(state, args),
            Handler::IndentPush => layout::indent_push(state, args),
            Handler::IndentPop => layout::indent_pop(state, args),
            Handler::SetRegister => layout::set_register(state, args),
            Handler::VerticalSpace => layout::vertical_space(state, args),
            Handler::Fill(on) => layout::fill(state, on),
            Handler::SetFont => layout::set_font(state, args),
            Handler::If | Handler::IfElse => {
                return conditional::if_request(self, state, cursor, args);
            }
            Handler::Else => conditional::else_request(state),
            Handler::Define => define::define(state, cursor, args),
            Handler::Comment | Handler::Ignore => {}
        }
        Ok(())
    }

    fn unknown_request(
        &self,
        state: &mut TranslationState,
        name: &str,
        source: &str,
    ) -> Result<(), TranslateError> {
        if state.has_macro(name) {
            state.diagnose(
                DiagnosticKind::UnsupportedFeature,
                format!("user macro {name} is defined but not executed"),
            );
            return Ok(());
        }
        if self.options.strict {
            return Err(TranslateError::UnimplementedMacro {
                line: state.line(),
                text: source.to_string(),
            });
        }
        state.diagnose(
            DiagnosticKind::UnknownMacro,
            format!("unknown request {name}, kept as raw text"),
        );
        state.close_paragraph();
        state.push_node(Node::RawText {
            text: source.to_string(),
        });
        Ok(())
    }
}

/// Splits request tokens into the request name and its arguments.
///
/// Spaces between the control character and the name are allowed (`.  B x`).
/// Returns `None` for an empty request (a lone `.`).
fn split_request(tokens: &[String]) -> Option<(&str, &[String])> {
    let (first, rest) = tokens.split_first()?;
    match request_name(first)? {
        "" => {
            let (name, args) = rest.split_first()?;
            Some((name.as_str(), args))
        }
        name => Some((name, rest)),
    }
}

/// `'\" nroff`: picks the translation mode. Other arguments are preprocessor
/// hints and ignored.
fn mode_marker(state: &mut TranslationState, args: &[String]) {
    for arg in args {
        if let Some(mode) = TranslationMode::from_name(arg) {
            log::debug!("mode marker selects {mode:?}");
            state.set_mode(mode);
        }
    }
}
