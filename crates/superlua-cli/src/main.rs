use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use superlua_cli::commands::{self, Context};

/// Translate SuperLua classes into plain Lua.
#[derive(Parser, Debug)]
#[command(name = "superlua", version, about)]
struct Cli {
    /// Project root used to find .slua files and .superlua/config.toml
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Fail on methods or classes missing their closing `end`
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a .slua file to .lua
    Compile(commands::compile::CompileArgs),
    /// List .slua files in the project
    List(commands::list::ListArgs),
    /// Start the interactive shell
    Shell,
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: resets SIGPIPE to its default disposition; no memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    superlua_cli::init_tracing(cli.verbose);

    let ctx = Context::load(cli.root, cli.strict);
    let code = match cli.command {
        Some(Command::Compile(args)) => commands::compile::run(args, &ctx),
        Some(Command::List(args)) => commands::list::run(args, &ctx),
        Some(Command::Shell) => {
            report(superlua_cli::run_shell(&ctx.root, &ctx.config, ctx.options))
        }
        None => report(superlua_cli::launcher::run(
            &ctx.root,
            &ctx.config,
            ctx.options,
        )),
    };
    std::process::exit(code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e:#}");
            1
        }
    }
}
