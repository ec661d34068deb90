//! List command - show SuperLua files and whether they are compiled.

use super::Context;
use crate::index::SourceIndex;
use clap::Args;

/// List command arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print entries as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Run the list command
pub fn run(args: ListArgs, ctx: &Context) -> i32 {
    let index = SourceIndex::scan(&ctx.root, &ctx.config.index);
    let entries = index.entries();

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
        return 0;
    }

    if entries.is_empty() {
        eprintln!("No .slua files found");
        return 0;
    }
    for entry in entries {
        let status = if entry.compiled {
            "compiled"
        } else {
            "not compiled"
        };
        println!("{} - {status}", entry.name);
    }
    0
}
