//! Inspect a board encoding: legality, interlocks, available rotations

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::output::{print_kv, print_section};
use crate::puzzle::Board;

#[derive(Parser, Debug)]
#[command(about = "Decode a board encoding and report its legality")]
pub struct CheckArgs {
    /// Board encoding to inspect, e.g. N0O1N1N0O0O1N0N3N1Rt
    pub board: String,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let board = Board::decode(&args.board)
        .with_context(|| format!("decoding board '{}'", args.board))?;

    print_section("Board");
    println!("\n{board}\n");
    print_kv("encoding", &board.encode());
    print_kv("well-formed", if board.is_well_formed() { "yes" } else { "no" });
    print_kv("legal", if board.is_legal() { "yes" } else { "no" });

    let boats: Vec<String> = board
        .boats()
        .iter()
        .map(|boat| format!("{}{}", boat.colour.to_char(), boat.edge.to_char()))
        .collect();
    print_kv("boats", &boats.join(" "));

    let interlocked: Vec<String> = board
        .interlocked_pairs()
        .into_iter()
        .map(|(a, b)| format!("{a}-{b}"))
        .collect();
    let interlocked = if interlocked.is_empty() {
        "none".to_string()
    } else {
        interlocked.join(" ")
    };
    print_kv("interlocked pairs", &interlocked);

    let rotatable: Vec<String> = board
        .rotatable_positions()
        .into_iter()
        .map(|position| position.to_string())
        .collect();
    let rotatable = if rotatable.is_empty() {
        "none".to_string()
    } else {
        rotatable.join(" ")
    };
    print_kv("rotatable tiles", &rotatable);

    Ok(())
}
