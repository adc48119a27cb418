//! Solve a puzzle objective and print the rotation sequence

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::cli::output::{create_spinner, format_number, print_kv, print_section};
use crate::objective::{Difficulty, Objective, TargetPlacement};
use crate::puzzle::Board;
use crate::solver::{self, DEFAULT_MAX_DEPTH, SearchReport, SolveOutcome};

#[derive(Parser, Debug)]
#[command(about = "Solve an objective with the shortest-solution search")]
pub struct SolveArgs {
    /// Catalog problem number (0-59)
    #[arg(long, conflicts_with_all = ["difficulty", "initial", "target"])]
    pub problem: Option<usize>,

    /// Difficulty tier for a random catalog pick (starter, junior, expert, master)
    #[arg(long, conflicts_with_all = ["initial", "target"])]
    pub difficulty: Option<String>,

    /// RNG seed for the random catalog pick
    #[arg(long, requires = "difficulty")]
    pub seed: Option<u64>,

    /// Initial board encoding for a custom objective
    #[arg(long, requires = "target")]
    pub initial: Option<String>,

    /// Target placement encoding for a custom objective
    #[arg(long, requires = "initial")]
    pub target: Option<String>,

    /// Maximum solution length to consider
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport<'a> {
    problem_number: Option<usize>,
    initial_state: &'a str,
    target_placement: &'a str,
    outcome: &'a str,
    solution: Option<String>,
    states_explored: usize,
    deepest_layer: usize,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let (initial_state, target_placement, problem_number) = select_objective(&args)?;

    let board = Board::decode(&initial_state)
        .with_context(|| format!("decoding initial state '{initial_state}'"))?;
    if !board.is_legal() {
        bail!("initial state '{initial_state}' is not a legal board");
    }
    let target = TargetPlacement::decode(&target_placement)
        .with_context(|| format!("decoding target placement '{target_placement}'"))?;

    let spinner = if args.json {
        None
    } else {
        let spinner = create_spinner("searching...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(spinner)
    };
    let report = solver::solve(&board, &target, args.max_depth);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        print_json(
            &report,
            problem_number,
            &initial_state,
            &target_placement,
        )?;
        return Ok(());
    }

    print_section("Solve");
    if let Some(number) = problem_number {
        print_kv("problem", &number.to_string());
    }
    print_kv("initial state", &initial_state);
    print_kv("target", &target_placement);
    println!("\n{board}\n");

    match &report.outcome {
        SolveOutcome::Solved(solution) => {
            print_kv("solution", &solution.to_string());
            print_kv("moves", &solution.len().to_string());
            let finished = solution.replay(&board)?;
            let verified = target.is_satisfied(&finished);
            print_kv("verified", if verified { "yes" } else { "NO" });
        }
        SolveOutcome::Exhausted => {
            print_kv("solution", "none (search space exhausted)");
        }
        SolveOutcome::DepthLimited => {
            print_kv(
                "solution",
                &format!("none within {} moves", args.max_depth),
            );
        }
    }
    print_kv(
        "states explored",
        &format_number(report.stats.states_explored),
    );
    print_kv("deepest layer", &report.stats.deepest_layer.to_string());
    Ok(())
}

fn select_objective(args: &SolveArgs) -> Result<(String, String, Option<usize>)> {
    if let Some(number) = args.problem {
        let objective = Objective::by_problem_number(number)?;
        return Ok((
            objective.initial_state().to_string(),
            objective.target_placement().to_string(),
            Some(number),
        ));
    }
    if let Some(difficulty) = &args.difficulty {
        let difficulty: Difficulty = difficulty.parse()?;
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        let objective = Objective::random(difficulty, &mut rng);
        return Ok((
            objective.initial_state().to_string(),
            objective.target_placement().to_string(),
            Some(objective.problem_number()),
        ));
    }
    match (&args.initial, &args.target) {
        (Some(initial), Some(target)) => Ok((initial.clone(), target.clone(), None)),
        _ => bail!("specify --problem, --difficulty, or --initial with --target"),
    }
}

fn print_json(
    report: &SearchReport,
    problem_number: Option<usize>,
    initial_state: &str,
    target_placement: &str,
) -> Result<()> {
    let outcome = match &report.outcome {
        SolveOutcome::Solved(_) => "solved",
        SolveOutcome::Exhausted => "unsolvable",
        SolveOutcome::DepthLimited => "depth-limited",
    };
    let json = SolveReport {
        problem_number,
        initial_state,
        target_placement,
        outcome,
        solution: report.outcome.solution().map(|s| s.to_string()),
        states_explored: report.stats.states_explored,
        deepest_layer: report.stats.deepest_layer,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
