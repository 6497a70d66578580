pub mod diagnostic;
pub mod document;
pub mod font;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use document::{
    DefinitionEntry, Inline, Metadata, Node, Paragraph, ParagraphStyle, Translation,
};
pub use font::{Font, FontState};
