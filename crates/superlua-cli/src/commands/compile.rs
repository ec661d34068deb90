//! Compile command - translate one SuperLua file.

use super::Context;
use crate::compile::{CompileError, Pipeline, compile_file, compile_source, read_file};
use crate::index::SourceIndex;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use superlua::Document;

/// Compile command arguments
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Source file path, bare file name to look up in the project, or - for stdin
    pub input: String,

    /// Output file (default: input with .lua extension; stdout for stdin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the parsed document as JSON instead of writing Lua
    #[arg(long, conflicts_with = "output")]
    pub dump_ir: bool,
}

/// Run the compile command
pub fn run(args: CompileArgs, ctx: &Context) -> i32 {
    if args.input == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Failed to read stdin: {e}");
            return 1;
        }
        if args.dump_ir {
            let document = Pipeline::superlua().and_then(|pipeline| {
                pipeline
                    .read(&buf, &ctx.options)
                    .map_err(|source| CompileError::Translate {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })
            });
            return dump(document);
        }
        return compile_stdin(&buf, args.output, ctx);
    }

    let Some(source) = locate(&args.input, ctx) else {
        eprintln!("File not found: {}", args.input);
        return 1;
    };

    if args.dump_ir {
        return dump(read_file(&source, &ctx.options));
    }

    match compile_file(&source, args.output.as_deref(), &ctx.options) {
        Ok(report) => {
            eprintln!(
                "Compiled {} -> {}",
                report.source.display(),
                report.output.display()
            );
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// An existing path as given, else a basename looked up in the project.
fn locate(input: &str, ctx: &Context) -> Option<PathBuf> {
    let path = PathBuf::from(input);
    if path.exists() {
        return Some(path);
    }
    let index = SourceIndex::scan(&ctx.root, &ctx.config.index);
    index.resolve(input).map(|found| found.to_path_buf())
}

fn dump(document: Result<Document, CompileError>) -> i32 {
    let json = match document.map(|d| d.to_json()) {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            eprintln!("error: {e}");
            return 1;
        }
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };
    println!("{json}");
    0
}

fn compile_stdin(source: &str, output: Option<PathBuf>, ctx: &Context) -> i32 {
    let translation = match compile_source(source, &ctx.options) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &translation.output) {
                eprintln!("Failed to write {}: {e}", path.display());
                return 1;
            }
            eprintln!("Compiled <stdin> -> {}", path.display());
        }
        None => print!("{}", translation.output),
    }
    0
}
