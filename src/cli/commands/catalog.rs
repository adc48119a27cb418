//! List the built-in objective catalog

use anyhow::Result;
use clap::Parser;

use crate::cli::output::print_section;
use crate::objective::{Difficulty, Objective};

#[derive(Parser, Debug)]
#[command(about = "List the objective catalog")]
pub struct CatalogArgs {
    /// Limit the listing to one tier (starter, junior, expert, master)
    #[arg(long)]
    pub difficulty: Option<String>,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let filter = match &args.difficulty {
        Some(text) => Some(text.parse::<Difficulty>()?),
        None => None,
    };

    for difficulty in Difficulty::all() {
        if filter.is_some_and(|wanted| wanted != difficulty) {
            continue;
        }
        print_section(difficulty.label());
        for objective in Objective::catalog() {
            if objective.difficulty() == difficulty {
                println!(
                    "  {:2}  {:10} -> {}",
                    objective.problem_number(),
                    objective.target_placement(),
                    objective.initial_state(),
                );
            }
        }
    }
    Ok(())
}
