//! CLI command implementations - one module per top-level command.

pub mod compile;
pub mod list;

use crate::compile::CompileOptions;
use crate::config::SuperluaConfig;
use std::path::PathBuf;

/// State shared by every command: where the project is and how it is
/// configured, after command line overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub config: SuperluaConfig,
    pub options: CompileOptions,
}

impl Context {
    /// Load config for `root`; `strict` forces strict mode on.
    pub fn load(root: PathBuf, strict: bool) -> Self {
        let config = SuperluaConfig::load(&root);
        let options = CompileOptions {
            strict: strict || config.compile.strict,
        };
        Self {
            root,
            config,
            options,
        }
    }
}
