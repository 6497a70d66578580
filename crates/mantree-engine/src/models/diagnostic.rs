use std::fmt;

use serde::Serialize;

/// Category of a recoverable problem found while translating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An argument could not be parsed; a default was used instead.
    MalformedArgument,
    /// Markup that does not fit the current structure, like `.RE` with nothing to close.
    StructuralInconsistency,
    /// Recognized markup whose effect is not reproduced.
    UnsupportedFeature,
    /// A request that is neither built in nor defined by the page.
    UnknownMacro,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MalformedArgument => "malformed argument",
            Self::StructuralInconsistency => "structural inconsistency",
            Self::UnsupportedFeature => "unsupported feature",
            Self::UnknownMacro => "unknown macro",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}
