//! lexplay CLI - Compiler Explorer playground for lexy grammars.
//!
//! Provides commands for:
//! - `productions`: list the productions a grammar snippet declares
//! - `run`: compile a grammar remotely and execute it against an input
//! - `share`: store a grammar as a shareable Compiler Explorer permalink
//! - `load`: fetch a saved session and recover the original grammar

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LoadArgs, ProductionsArgs, RunArgs, ShareArgs};
use output::Output;

/// lexplay - Compiler Explorer playground for lexy grammars.
#[derive(Parser)]
#[command(name = "lexplay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the productions a grammar snippet declares.
    Productions(ProductionsArgs),
    /// Compile a grammar remotely and execute it against an input.
    Run(RunArgs),
    /// Store a grammar as a shareable permalink.
    Share(ShareArgs),
    /// Fetch a saved session and recover the original grammar.
    Load(LoadArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Run(args) => args.api.verbose,
        Commands::Share(args) => args.api.verbose,
        Commands::Load(args) => args.api.verbose,
        Commands::Productions(_) => false,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Productions(args) => args.execute(&output),
        Commands::Run(args) => args.execute(&output),
        Commands::Share(args) => args.execute(&output),
        Commands::Load(args) => args.execute(&output),
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
