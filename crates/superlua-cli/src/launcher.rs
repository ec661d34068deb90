//! Menu launcher and the prompt-driven compile flow.
//!
//! Both read from any `BufRead` and write to any `Write`, so they can be
//! driven from tests as well as from the terminal.

use crate::compile::{CompileOptions, CompileReport, compile_file};
use crate::config::SuperluaConfig;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use superlua::{is_source_path, target_path};

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Shell,
    CommandLine,
    Exit,
}

const MENU: &str = "\
SuperLua
========================================
1. Shell (interactive commands)
2. Command line (compile one file)
3. Exit
";

/// Print a prompt and read one trimmed line. `None` at end of input.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show the menu and read choices until a valid one. End of input exits.
pub fn choose<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Choice> {
    writeln!(out, "{MENU}")?;
    loop {
        let Some(answer) = ask(input, out, "Choose interface (1-3): ")? else {
            return Ok(Choice::Exit);
        };
        match answer.as_str() {
            "1" => return Ok(Choice::Shell),
            "2" => return Ok(Choice::CommandLine),
            "3" => return Ok(Choice::Exit),
            _ => writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}

/// Ask for a source path until it names an existing `.slua` file, then for
/// an output path (empty keeps the default), and compile.
///
/// Returns `None` if input ended before both answers were given.
pub fn prompt_compile<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    options: &CompileOptions,
) -> io::Result<Option<CompileReport>> {
    let source = loop {
        let Some(answer) = ask(input, out, "Enter the path to your .slua file: ")? else {
            return Ok(None);
        };
        let path = PathBuf::from(answer);
        if !path.exists() {
            writeln!(out, "Error: File does not exist.")?;
        } else if !is_source_path(&path) {
            writeln!(out, "Error: File is not a .slua file.")?;
        } else {
            break path;
        }
    };

    let default_output = target_path(&source);
    let prompt = format!(
        "Enter the output .lua file path (default: {}): ",
        default_output.display()
    );
    let Some(answer) = ask(input, out, &prompt)? else {
        return Ok(None);
    };
    let output = if answer.is_empty() {
        default_output
    } else {
        PathBuf::from(answer)
    };

    match compile_file(&source, Some(&output), options) {
        Ok(report) => {
            writeln!(
                out,
                "Successfully transpiled '{}' to '{}'",
                report.source.display(),
                report.output.display()
            )?;
            Ok(Some(report))
        }
        Err(e) => {
            writeln!(out, "An error occurred: {e}")?;
            Ok(None)
        }
    }
}

/// Run the launcher on the terminal.
pub fn run(root: &Path, config: &SuperluaConfig, options: CompileOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match choose(&mut input, &mut out)? {
        Choice::Shell => {
            drop(input);
            crate::run_shell(root, config, options)
        }
        Choice::CommandLine => {
            prompt_compile(&mut input, &mut out, &options)?;
            Ok(())
        }
        Choice::Exit => {
            writeln!(out, "Goodbye!")?;
            Ok(())
        }
    }
}
