//! Traits for source readers and target writers.

use crate::input::ReadOptions;
use crate::ir::Document;

/// Error that can occur when reading source code into IR.
///
/// Only produced when reading with [`ReadOptions::strict`] set; a lenient
/// read never fails.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("line {line}: {kind} `{name}` is not closed by a matching `end`")]
    Unterminated {
        kind: BlockKind,
        name: String,
        line: usize,
    },
}

/// Which block a [`ReadError::Unterminated`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Class,
    Method,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Class => f.write_str("class"),
            BlockKind::Method => f.write_str("method"),
        }
    }
}

/// A reader parses source code into the IR.
pub trait Reader: Send + Sync {
    /// Language identifier (e.g., "superlua").
    fn language(&self) -> &'static str;

    /// File extensions this reader handles (e.g., &["slua"]).
    fn extensions(&self) -> &'static [&'static str];

    /// Parse source code into the IR.
    fn read(&self, source: &str, options: &ReadOptions) -> Result<Document, ReadError>;
}

/// A writer emits the IR as source code in a target language.
pub trait Writer: Send + Sync {
    /// Language identifier (e.g., "lua").
    fn language(&self) -> &'static str;

    /// File extension for output (e.g., "lua").
    fn extension(&self) -> &'static str;

    /// Emit the IR as source code.
    fn write(&self, document: &Document) -> String;
}
