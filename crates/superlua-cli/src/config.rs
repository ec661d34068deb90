//! Configuration for the superlua CLI.
//!
//! Loads config from:
//! 1. Global: ~/.config/superlua/config.toml
//! 2. Per-project: .superlua/config.toml (overrides global key by key)
//!
//! Example config.toml:
//! ```toml
//! [shell]
//! prompt = "slua> "
//! history = false
//!
//! [index]
//! exclude = [".git", "target", "vendor"]
//!
//! [compile]
//! strict = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Interactive shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt shown before each command.
    pub prompt: String,
    /// Whether to keep command history between sessions.
    pub history: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "superlua> ".to_string(),
            history: true,
        }
    }
}

/// Source index configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory names never descended into.
    pub exclude: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            exclude: vec![
                ".git".to_string(),
                "target".to_string(),
                "node_modules".to_string(),
            ],
        }
    }
}

/// Compile configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Treat unterminated methods and classes as errors.
    pub strict: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuperluaConfig {
    pub shell: ShellConfig,
    pub index: IndexConfig,
    pub compile: CompileConfig,
}

impl SuperluaConfig {
    /// Load configuration for a project.
    ///
    /// Missing files are skipped. A file that cannot be read or parsed is
    /// reported as a warning and skipped.
    pub fn load(root: &Path) -> Self {
        let mut paths = Vec::new();
        if let Some(global) = Self::global_config_path() {
            paths.push(global);
        }
        paths.push(Self::project_config_path(root));
        Self::load_layers(&paths)
    }

    /// Per-project config path under `root`.
    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(".superlua").join("config.toml")
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("superlua").join("config.toml"))
    }

    /// Merge the given files in order, later files overriding earlier ones.
    fn load_layers(paths: &[PathBuf]) -> Self {
        let mut merged = toml::Table::new();
        for path in paths {
            match Self::load_file(path) {
                Ok(Some(table)) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    merge_tables(&mut merged, table);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("{e}"),
            }
        }
        match toml::Value::Table(merged).try_into() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("invalid config: {e}");
                Self::default()
            }
        }
    }

    /// Load one config file as a raw table. `Ok(None)` if it does not exist.
    pub fn load_file(path: &Path) -> Result<Option<toml::Table>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        content
            .parse::<toml::Table>()
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Recursively merge `other` into `base`. Nested tables merge key by key;
/// every other value in `other` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
