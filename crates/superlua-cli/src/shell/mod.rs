//! Interactive command shell.
//!
//! Commands are executed against a [`SourceIndex`]; output goes through a
//! [`Notifier`]. [`Shell::run`] drives it from a rustyline editor with tab
//! completion for command and file names.

pub mod commands;
pub mod complete;
pub mod notifier;

pub use commands::{COMMANDS, CommandError, ShellCommand, parse_command};
pub use complete::ShellHelper;
pub use notifier::{ConsoleNotifier, Message, Notifier, RecordingNotifier};

use crate::compile::{CompileOptions, compile_file};
use crate::config::ShellConfig;
use crate::index::SourceIndex;
use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::Write;
use std::path::{Path, PathBuf};
use superlua::Severity;

pub const HELP: &str = "\
SuperLua shell

Commands:
  compile <filename>  Compile a .slua file to .lua
  list                List all .slua files in the project
  help                Show this message
  clear               Clear the screen
  quit, exit          Leave the shell

Completion:
  comp<Tab>           -> compile
  compile my<Tab>     -> completes a file name
  Greyed text shows what Tab will insert.

Examples:
  compile calculator.slua
  compile calculator   (.slua is optional)
  list

File names are case-sensitive.";

/// What the input loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Clear,
    Quit,
}

pub struct Shell<N: Notifier> {
    index: SourceIndex,
    options: CompileOptions,
    notifier: N,
}

impl<N: Notifier> Shell<N> {
    pub fn new(index: SourceIndex, options: CompileOptions, notifier: N) -> Self {
        Self {
            index,
            options,
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn index(&self) -> &SourceIndex {
        &self.index
    }

    /// Run one line of input.
    pub fn execute(&mut self, input: &str) -> Flow {
        let command = match parse_command(input) {
            Ok(Some(command)) => command,
            Ok(None) => return Flow::Continue,
            Err(e) => {
                self.notifier.on_error(&e.to_string());
                return Flow::Continue;
            }
        };

        match command {
            ShellCommand::Compile(name) => self.compile(&name),
            ShellCommand::List => self.list(),
            ShellCommand::Help => self.notifier.on_info(HELP),
            ShellCommand::Clear => return Flow::Clear,
            ShellCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn compile(&mut self, name: &str) {
        // the file may have appeared since the last scan
        if self.index.resolve(name).is_none() {
            self.index.refresh();
        }
        let Some(path) = self.index.resolve(name).map(Path::to_path_buf) else {
            self.notifier.on_error(&format!("File not found: {name}"));
            return;
        };

        match compile_file(&path, None, &self.options) {
            Ok(report) => {
                self.notifier.on_info(&format!(
                    "Compiled {} -> {}",
                    display_name(&report.source),
                    display_name(&report.output)
                ));
                for diagnostic in &report.diagnostics {
                    if diagnostic.severity != Severity::Warning {
                        continue;
                    }
                    self.notifier.on_error(&diagnostic.to_string());
                }
            }
            Err(e) => self.notifier.on_error(&format!("Compilation error: {e}")),
        }
        self.index.refresh();
    }

    fn list(&mut self) {
        self.index.refresh();
        if self.index.is_empty() {
            self.notifier.on_info("No .slua files found");
            return;
        }

        let mut text = String::from("SuperLua files:");
        for entry in self.index.entries() {
            let status = if entry.compiled {
                "compiled"
            } else {
                "not compiled"
            };
            text.push_str(&format!("\n  {} - {status}", entry.name));
        }
        self.notifier.on_info(&text);
    }

    /// Read commands from the terminal until `quit`, Ctrl-D or an error.
    pub fn run(&mut self, config: &ShellConfig) -> anyhow::Result<()> {
        let editor_config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(true)
            .build();
        let mut rl: Editor<ShellHelper, DefaultHistory> =
            Editor::with_config(editor_config).context("failed to open terminal")?;
        rl.set_helper(Some(ShellHelper::new(self.index.names())));

        let history = config.history.then(history_path).flatten();
        if let Some(path) = &history {
            if let Err(e) = rl.load_history(path) {
                tracing::debug!("no shell history loaded: {e}");
            }
        }

        self.notifier.on_info(&format!(
            "SuperLua shell: {} file(s) in {}. Type 'help' for commands.",
            self.index.files().len(),
            self.index.root().display()
        ));

        loop {
            match rl.readline(&config.prompt) {
                Ok(line) => match self.execute(&line) {
                    Flow::Continue => {}
                    Flow::Clear => clear_screen(),
                    Flow::Quit => break,
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
            if let Some(helper) = rl.helper_mut() {
                helper.set_files(self.index.names());
            }
        }

        if let Some(path) = &history {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create history directory {}", parent.display())
                })?;
            }
            if let Err(e) = rl.save_history(path) {
                tracing::warn!("failed to save shell history: {e}");
            }
        }
        Ok(())
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("superlua").join("history.txt"))
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = std::io::stdout().flush();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
