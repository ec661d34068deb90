//! Shell command parsing and definitions

/// Command words, in completion order.
pub const COMMANDS: &[&str] = &["compile", "help", "list", "clear", "quit", "exit"];

/// Available shell commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Compile a source file by name
    Compile(String),
    /// List indexed source files
    List,
    /// Show help information
    Help,
    /// Clear the screen
    Clear,
    /// Exit the shell
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Usage: compile <filename>")]
    MissingFilename,
    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// Parse one input line. `Ok(None)` for a blank line.
///
/// The command word is case-insensitive. Extra arguments after the file name
/// are ignored.
pub fn parse_command(input: &str) -> Result<Option<ShellCommand>, CommandError> {
    let mut parts = input.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };

    let command = match word.to_lowercase().as_str() {
        "compile" => {
            let name = parts.next().ok_or(CommandError::MissingFilename)?;
            ShellCommand::Compile(name.to_string())
        }
        "list" => ShellCommand::List,
        "help" => ShellCommand::Help,
        "clear" => ShellCommand::Clear,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
