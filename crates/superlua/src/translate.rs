//! Engine entry points.

use crate::input::read_superlua;
use crate::ir::Diagnostic;
use crate::output::LuaWriter;
use std::path::{Path, PathBuf};

/// Extension of SuperLua source files.
pub const SOURCE_EXTENSION: &str = "slua";

/// Extension of emitted Lua files.
pub const TARGET_EXTENSION: &str = "lua";

/// Output of a translation together with what the reader noticed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate SuperLua source to Lua.
///
/// Pure and infallible. Malformed nesting produces truncated output rather
/// than an error; use [`translate_with_diagnostics`] to find out.
pub fn translate(source: &str) -> String {
    LuaWriter::emit(&read_superlua(source))
}

/// Translate and keep the reader's diagnostics.
pub fn translate_with_diagnostics(source: &str) -> Translation {
    let document = read_superlua(source);
    Translation {
        output: LuaWriter::emit(&document),
        diagnostics: document.diagnostics,
    }
}

/// Path of the Lua file emitted for `source`: same directory and stem,
/// extension replaced.
pub fn target_path(source: &Path) -> PathBuf {
    source.with_extension(TARGET_EXTENSION)
}

/// Whether `path` has the SuperLua source extension.
pub fn is_source_path(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_path_replaces_extension() {
        assert_eq!(
            target_path(Path::new("game/player.slua")),
            PathBuf::from("game/player.lua")
        );
        assert_eq!(
            target_path(Path::new("my.slua.files/a.slua")),
            PathBuf::from("my.slua.files/a.lua")
        );
    }

    #[test]
    fn source_path_detection() {
        assert!(is_source_path(Path::new("a.slua")));
        assert!(!is_source_path(Path::new("a.lua")));
        assert!(!is_source_path(Path::new("slua")));
    }

    #[test]
    fn diagnostics_do_not_change_output() {
        let src = "class A\n-- note\nfunction f()\n  if x then\nend";
        let t = translate_with_diagnostics(src);
        assert_eq!(t.output, translate(src));
        assert_eq!(t.diagnostics.len(), 3);
    }
}
