//! Tab completion and inline hints for the shell.
//!
//! A single word completes to a command name. After `compile`, the second
//! word completes to an indexed file name.

use super::commands::COMMANDS;
use crate::index::filter_prefix;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// Replacement candidates for the text before the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Byte offset where the replaced word starts.
    pub start: usize,
    pub candidates: Vec<String>,
}

enum Target<'a> {
    Command(&'a str),
    File(&'a str),
    Nothing,
}

fn target(line: &str) -> (usize, Target<'_>) {
    let words: Vec<&str> = line.split_whitespace().collect();
    let open_word = !line.is_empty() && !line.ends_with(char::is_whitespace);
    let partial_start = |partial: &str| line.len() - partial.len();

    match (words.as_slice(), open_word) {
        (&[], _) => (line.len(), Target::Command("")),
        (&[word], true) => (partial_start(word), Target::Command(word)),
        (&[cmd], false) if cmd.eq_ignore_ascii_case("compile") => (line.len(), Target::File("")),
        (&[cmd, name], true) if cmd.eq_ignore_ascii_case("compile") => {
            (partial_start(name), Target::File(name))
        }
        _ => (line.len(), Target::Nothing),
    }
}

fn command_matches(partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    COMMANDS
        .iter()
        .filter(|c| c.starts_with(&partial))
        .map(|c| c.to_string())
        .collect()
}

/// Complete the text before the cursor. Commands get a trailing space.
pub fn complete(line: &str, files: &[String]) -> Completion {
    let (start, target) = target(line);
    let candidates = match target {
        Target::Command(partial) => command_matches(partial)
            .into_iter()
            .map(|c| format!("{c} "))
            .collect(),
        Target::File(partial) => filter_prefix(files, partial),
        Target::Nothing => Vec::new(),
    };
    Completion { start, candidates }
}

/// Remaining text of the first candidate, shown greyed after the cursor.
pub fn hint(line: &str, files: &[String]) -> Option<String> {
    let (partial, best) = match target(line).1 {
        Target::Command(partial) if !partial.is_empty() => {
            (partial, command_matches(partial).into_iter().next()?)
        }
        Target::File(partial) if !partial.is_empty() => {
            (partial, filter_prefix(files, partial).into_iter().next()?)
        }
        _ => return None,
    };
    best.get(partial.len()..)
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}

/// Rustyline helper wiring completion and hints to the shell's file list.
#[derive(Debug, Default)]
pub struct ShellHelper {
    files: Vec<String>,
}

impl ShellHelper {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    pub fn set_files(&mut self, files: Vec<String>) {
        self.files = files;
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completion = complete(&line[..pos], &self.files);
        let pairs = completion
            .candidates
            .into_iter()
            .map(|replacement| Pair {
                display: replacement.trim_end().to_string(),
                replacement,
            })
            .collect();
        Ok((completion.start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        hint(line, &self.files)
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
