//! Translation of SuperLua class syntax into plain Lua.
//!
//! SuperLua adds one construct to Lua: a `class` block containing
//! `function` definitions. Everything else is Lua and passes through
//! untouched.
//!
//! # Architecture
//!
//! ```text
//! Source (.slua)          IR                 Target (.lua)
//! ──────────────    ──────────────────    ─────────────────
//! lines ─> classify ─> Document ─> LuaWriter ─> lines
//!          extract      (ir/)
//! ```
//!
//! The reader is a single forward sweep over the lines. It does not tokenize
//! or parse Lua; block ends are found by counting `if`/`for`/`while`/
//! `function` openers against bare `end` lines.
//!
//! # Example
//!
//! ```
//! let lua = superlua::translate("class Point\nfunction new(self, x)\nself.x = x\nend\nend");
//! assert!(lua.starts_with("Point = {}\nPoint.__index = Point\n"));
//! assert!(lua.contains("function Point:new(x)"));
//! ```
//!
//! # Malformed input
//!
//! Unbalanced blocks are not errors: the affected method runs to the end of
//! the file. [`translate_with_diagnostics`] reports where that happened, and
//! reading with [`ReadOptions::STRICT`] turns it into a [`ReadError`].

pub mod input;
pub mod ir;
pub mod output;
pub mod registry;
pub mod traits;
mod translate;

// Re-exports: IR types
pub use ir::{ClassDecl, Diagnostic, DiagnosticKind, Document, Item, MethodDecl, Severity};

// Re-exports: Traits
pub use traits::{BlockKind, ReadError, Reader, Writer};

// Re-exports: Registry
pub use registry::{reader_for_extension, register_reader, register_writer, writer_for_language};

// Re-exports: Built-in reader and writer
pub use input::{ReadOptions, SuperLuaReader, read_superlua};
pub use output::{LuaWriter, LuaWriterImpl};

pub use translate::{
    SOURCE_EXTENSION, TARGET_EXTENSION, Translation, is_source_path, target_path, translate,
    translate_with_diagnostics,
};
