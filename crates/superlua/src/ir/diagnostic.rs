//! Non-fatal findings recorded while reading a document.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Output is likely wrong (truncated or structurally broken).
    Warning,
    /// Output is as intended but something in the source was dropped.
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Document ended before the method's matching `end`.
    UnterminatedMethod { class: String, method: String },
    /// Document ended before the class's own `end`.
    UnterminatedClass { class: String },
    /// A `function` line inside a class whose signature did not parse.
    UnparsedFunction { class: String },
    /// A non-function, non-blank line inside a class body.
    DiscardedLine { class: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based source line.
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        let severity = match kind {
            DiagnosticKind::UnterminatedMethod { .. } | DiagnosticKind::UnterminatedClass { .. } => {
                Severity::Warning
            }
            DiagnosticKind::UnparsedFunction { .. } | DiagnosticKind::DiscardedLine { .. } => {
                Severity::Note
            }
        };
        Self {
            severity,
            line,
            kind,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Note => f.write_str("note"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: ", self.line, self.severity)?;
        match &self.kind {
            DiagnosticKind::UnterminatedMethod { class, method } => write!(
                f,
                "method {class}:{method} has no matching `end`; body runs to end of file"
            ),
            DiagnosticKind::UnterminatedClass { class } => {
                write!(f, "class {class} has no closing `end`")
            }
            DiagnosticKind::UnparsedFunction { class } => write!(
                f,
                "unrecognized function signature in class {class}; line dropped"
            ),
            DiagnosticKind::DiscardedLine { class } => {
                write!(f, "non-function line in class {class} dropped")
            }
        }
    }
}
