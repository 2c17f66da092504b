//! Scaffold — layered web-app source generation with incremental grafting.
//!
//! # Usage
//!
//! ```text
//! scaffold builder --module <name> --tables a,b,c [--version v1]
//!                  [--new-module] [--dry-run] [--config path]
//!                  [--template-dir dir]
//! scaffold init [--dir ./templates]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{builder::BuilderArgs, init::InitArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    version,
    about = "Generate module wiring and routes, grafting new entities into existing files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wire entities into a module: scaffold new files or graft into existing ones.
    Builder(BuilderArgs),

    /// Copy the embedded templates out for customization.
    Init(InitArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Builder(args) => args.run(),
        Commands::Init(args) => args.run(),
    }
}
