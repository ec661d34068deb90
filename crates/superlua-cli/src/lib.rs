//! Command line front end for the SuperLua translator.
//!
//! The `superlua` binary offers three ways in:
//! - `superlua compile <file>` for one-shot use and scripts,
//! - `superlua shell`, an interactive shell with completion,
//! - `superlua` alone, a menu that picks one of the above.
//!
//! Translation itself lives in the `superlua` crate; this crate only adds
//! file discovery, configuration and I/O.

pub mod commands;
pub mod compile;
pub mod config;
pub mod index;
pub mod launcher;
pub mod shell;

use compile::CompileOptions;
use config::SuperluaConfig;
use index::SourceIndex;
use shell::{ConsoleNotifier, Shell};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level
/// (0 = warn, 1 = info, 2+ = debug).
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Start the interactive shell over `root`.
pub fn run_shell(
    root: &Path,
    config: &SuperluaConfig,
    options: CompileOptions,
) -> anyhow::Result<()> {
    let index = SourceIndex::scan(root, &config.index);
    let mut shell = Shell::new(index, options, ConsoleNotifier);
    shell.run(&config.shell)
}
