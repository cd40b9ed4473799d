//! mrlint — posts static-analysis findings as inline review comments

use anyhow::Result;
use clap::Parser;
use mrlint_cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bugscan {
            ref engine_cmd,
            ref engine_args,
            ref source_ext,
        } => commands::bugscan::run(&cli, engine_cmd, engine_args.clone(), source_ext),
        Commands::Lint {
            ref engine_cmd,
            ref engine_args,
            ref source_ext,
        } => commands::lint::run(&cli, engine_cmd, engine_args.clone(), source_ext),
    }
}
