//! Intermediate representation produced by the SuperLua reader.
//!
//! A [`Document`] is the result of one forward sweep over the source lines.
//! Lines outside any class are kept verbatim; each `class ... end` region
//! becomes a [`ClassDecl`] holding the methods found in its body. Nothing in
//! here outlives a single translation.

mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};

use serde::{Deserialize, Serialize};

/// Name of the method treated as the constructor.
pub const CONSTRUCTOR: &str = "new";

/// A read SuperLua source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// One top-level element of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    /// A line outside any class, original text preserved.
    Line { text: String },
    Class(ClassDecl),
}

/// A `class <Name> ... end` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub methods: Vec<MethodDecl>,
    /// 1-based line of the `class` keyword.
    pub line: usize,
    /// False when the document ended before the class's own `end`.
    pub closed: bool,
}

/// A `function <name>(<params>) ... end` block inside a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// Parameter text as written between the parentheses, trimmed.
    pub params: String,
    /// Body lines with their original indentation. Never includes the
    /// opening `function` line or the matching `end`.
    pub body: Vec<String>,
    /// 1-based line of the `function` keyword.
    pub line: usize,
    /// False when the document ended before the matching `end`.
    pub closed: bool,
}

impl MethodDecl {
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR
    }
}

impl Document {
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Class(class) => Some(class),
            Item::Line { .. } => None,
        })
    }

    /// Diagnostics at warning severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
