//! Command-line interface for the `gma` crate.
//!
//! Subcommands are implemented in separate files (modules) under `src/bin/gma/`:
//! - `find_cmd.rs`: search one motif, print positions, optionally plot them
//! - `count_cmd.rs`: count several motifs into a TSV table
//!
//! Logging goes to stderr; set `RUST_LOG` (default `info`) to change the level.
use clap::{Parser, Subcommand};
use anyhow::Result;

#[derive(Debug, Parser)]
#[command(name="gma", version=env!("CARGO_PKG_VERSION"), about="Genome motif analyzer: approximate motif search in a FASTA genome", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a motif with up to N mismatches and print its positions.
    Find(find_cmd::FindCmd),
    /// Count occurrences of several motifs (TSV).
    Count(count_cmd::CountCmd),
}

#[path = "gma/find_cmd.rs"] mod find_cmd;
#[path = "gma/count_cmd.rs"] mod count_cmd;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Find(cmd) => find_cmd::run(cmd),
        Command::Count(cmd) => count_cmd::run(cmd),
    }
}
