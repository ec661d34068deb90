//! Lua writer for SuperLua IR.
//!
//! Classes become a table whose `__index` points at itself, methods become
//! colon-syntax functions on that table, and `new` additionally builds the
//! instance with `setmetatable` and returns it.

use crate::ir::{ClassDecl, Document, Item, MethodDecl};
use crate::traits::Writer;
use regex::Regex;
use std::sync::LazyLock;

static SELF_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bself\b").expect("self regex"));

/// Prefix added to every body line. Original indentation is kept after it.
const BODY_INDENT: &str = "  ";

/// Static instance of the Lua writer for registry.
pub static LUA_WRITER: LuaWriterImpl = LuaWriterImpl;

/// Lua writer implementing the Writer trait.
pub struct LuaWriterImpl;

impl Writer for LuaWriterImpl {
    fn language(&self) -> &'static str {
        "lua"
    }

    fn extension(&self) -> &'static str {
        "lua"
    }

    fn write(&self, document: &Document) -> String {
        LuaWriter::emit(document)
    }
}

/// Emits IR as Lua source code.
///
/// Output is a list of lines joined with `\n`, so a document read from text
/// without classes is written back byte for byte.
pub struct LuaWriter {
    lines: Vec<String>,
}

impl LuaWriter {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Emit a document to Lua source.
    pub fn emit(document: &Document) -> String {
        let mut writer = Self::new();
        writer.write_document(document);
        writer.lines.join("\n")
    }

    fn write_document(&mut self, document: &Document) {
        for item in &document.items {
            match item {
                Item::Line { text } => self.lines.push(text.clone()),
                Item::Class(class) => self.write_class(class),
            }
        }
    }

    fn write_class(&mut self, class: &ClassDecl) {
        let name = &class.name;
        self.lines.push(format!("{name} = {{}}"));
        self.lines.push(format!("{name}.__index = {name}"));
        self.lines.push(String::new());

        for method in &class.methods {
            self.write_method(name, method);
        }

        self.lines.push(String::new());
    }

    fn write_method(&mut self, class: &str, method: &MethodDecl) {
        let constructor = method.is_constructor();
        let params = clean_params(&method.params, constructor);

        self.lines.push(format!("function {class}:{}({params})", method.name));
        if constructor {
            self.lines.push(format!(
                "{BODY_INDENT}local self = setmetatable({{__class = '{class}'}}, {class})"
            ));
        }
        for line in &method.body {
            self.lines.push(format!("{BODY_INDENT}{line}"));
        }
        if constructor {
            self.lines.push(format!("{BODY_INDENT}return self"));
        }
        self.lines.push("end".to_string());
        self.lines.push(String::new());
    }
}

impl Default for LuaWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the receiver from a raw parameter list.
///
/// Every `self` identifier is deleted, then one leading comma is dropped.
/// Regular methods also lose one trailing comma; constructors keep it.
/// Text without `self` is only trimmed.
pub fn clean_params(raw: &str, constructor: bool) -> String {
    let removed = SELF_PARAM.replace_all(raw, "");
    let mut params = removed.trim();
    if let Some(rest) = params.strip_prefix(',') {
        params = rest.trim();
    }
    if !constructor {
        if let Some(rest) = params.strip_suffix(',') {
            params = rest.trim();
        }
    }
    params.to_string()
}
