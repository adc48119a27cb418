//! Brainstorm CLI - Solver and inspector for the Vikings tile-rotation puzzle
//!
//! This CLI provides a unified interface for:
//! - Solving catalog or custom objectives with the shortest-solution search
//! - Checking board encodings for well-formedness and legality
//! - Listing the built-in objective catalog

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brainstorm")]
#[command(version, about = "Solver for the Vikings tile-rotation puzzle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an objective and print the shortest rotation sequence
    Solve(brainstorm::cli::commands::solve::SolveArgs),

    /// Decode a board encoding and report its legality
    Check(brainstorm::cli::commands::check::CheckArgs),

    /// List the objective catalog
    Catalog(brainstorm::cli::commands::catalog::CatalogArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => brainstorm::cli::commands::solve::execute(args),
        Commands::Check(args) => brainstorm::cli::commands::check::execute(args),
        Commands::Catalog(args) => brainstorm::cli::commands::catalog::execute(args),
    }
}
