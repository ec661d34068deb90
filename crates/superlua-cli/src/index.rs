//! Index of SuperLua source files under a project root.

use crate::config::IndexConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};
use superlua::{SOURCE_EXTENSION, is_source_path, target_path};
use walkdir::WalkDir;

/// An indexed source file and the state of its compiled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub path: PathBuf,
    pub target: PathBuf,
    pub compiled: bool,
}

/// All `.slua` files below a root directory.
///
/// The file list is a snapshot; call [`refresh`](Self::refresh) to rescan.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    root: PathBuf,
    exclude: Vec<String>,
    files: Vec<PathBuf>,
}

impl SourceIndex {
    /// Create an empty index. Nothing is scanned until `refresh`.
    pub fn new(root: impl Into<PathBuf>, config: &IndexConfig) -> Self {
        Self {
            root: root.into(),
            exclude: config.exclude.clone(),
            files: Vec::new(),
        }
    }

    /// Create and scan.
    pub fn scan(root: impl Into<PathBuf>, config: &IndexConfig) -> Self {
        let mut index = Self::new(root, config);
        index.refresh();
        index
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rescan the root. Returns the number of files found.
    pub fn refresh(&mut self) -> usize {
        let exclude = &self.exclude;
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| exclude.iter().any(|e| e == name))
            });

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_source_path(entry.path()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => tracing::debug!("skipping unreadable entry: {e}"),
            }
        }
        files.sort();

        tracing::debug!(root = %self.root.display(), count = files.len(), "indexed sources");
        self.files = files;
        self.files.len()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find a file by basename: exact match first, then with `.slua`
    /// appended when `name` does not already carry the extension.
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        if let Some(path) = self.find_by_name(name) {
            return Some(path);
        }
        let suffix = format!(".{SOURCE_EXTENSION}");
        if name.ends_with(&suffix) {
            return None;
        }
        self.find_by_name(&format!("{name}{suffix}"))
    }

    fn find_by_name(&self, name: &str) -> Option<&Path> {
        self.files
            .iter()
            .find(|path| file_name(path) == name)
            .map(PathBuf::as_path)
    }

    /// Every indexed file with its target path and compiled flag.
    pub fn entries(&self) -> Vec<IndexEntry> {
        self.files
            .iter()
            .map(|path| {
                let target = target_path(path);
                IndexEntry {
                    name: file_name(path).to_string(),
                    path: path.clone(),
                    compiled: target.exists(),
                    target,
                }
            })
            .collect()
    }

    /// Basenames of all indexed files, in index order.
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|p| file_name(p).to_string()).collect()
    }

    /// Basenames starting with `partial`, ignoring case.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        filter_prefix(&self.names(), partial)
    }
}

/// Names from `names` that start with `partial`, ignoring case.
pub fn filter_prefix(names: &[String], partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&partial))
        .cloned()
        .collect()
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.slua");
        touch(dir.path(), "game/Player.slua");
        touch(dir.path(), "game/player.lua");
        touch(dir.path(), "game/enemy.slua");
        touch(dir.path(), "game/enemy.lua");
        touch(dir.path(), "target/build.slua");
        touch(dir.path(), "notes.txt");
        dir
    }

    #[test]
    fn refresh_finds_sources_and_skips_excluded() {
        let dir = project();
        let index = SourceIndex::scan(dir.path(), &IndexConfig::default());
        assert_eq!(index.names(), ["Player.slua", "enemy.slua", "main.slua"]);
    }

    #[test]
    fn refresh_picks_up_new_files() {
        let dir = project();
        let mut index = SourceIndex::scan(dir.path(), &IndexConfig::default());
        assert_eq!(index.files().len(), 3);
        touch(dir.path(), "extra.slua");
        assert_eq!(index.files().len(), 3);
        assert_eq!(index.refresh(), 4);
    }

    #[test]
    fn resolve_exact_then_with_extension() {
        let dir = project();
        let index = SourceIndex::scan(dir.path(), &IndexConfig::default());
        assert!(index.resolve("main.slua").unwrap().ends_with("main.slua"));
        assert!(index.resolve("enemy").unwrap().ends_with("game/enemy.slua"));
        assert!(index.resolve("player").is_none());
        assert!(index.resolve("missing.slua").is_none());
        assert!(index.resolve("build").is_none());
    }

    #[test]
    fn entries_report_compiled_state() {
        let dir = project();
        let index = SourceIndex::scan(dir.path(), &IndexConfig::default());
        let state: Vec<_> = index
            .entries()
            .into_iter()
            .map(|e| (e.name, e.compiled))
            .collect();
        // Player.slua compiles to Player.lua, not player.lua
        let player_compiled = dir.path().join("game/Player.lua").exists();
        assert_eq!(
            state,
            [
                ("Player.slua".to_string(), player_compiled),
                ("enemy.slua".to_string(), true),
                ("main.slua".to_string(), false),
            ]
        );
    }

    #[test]
    fn completions_ignore_case() {
        let dir = project();
        let index = SourceIndex::scan(dir.path(), &IndexConfig::default());
        assert_eq!(index.completions("p"), ["Player.slua"]);
        assert_eq!(index.completions("MA"), ["main.slua"]);
        assert_eq!(index.completions("").len(), 3);
        assert!(index.completions("z").is_empty());
    }

    #[test]
    fn custom_exclude() {
        let dir = project();
        let config = IndexConfig {
            exclude: vec!["game".to_string()],
        };
        let index = SourceIndex::scan(dir.path(), &config);
        assert_eq!(index.names(), ["main.slua", "build.slua"]);
    }
}
