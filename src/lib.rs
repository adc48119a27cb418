//! Vikings Brainstorm tile-rotation puzzle
//!
//! This crate provides:
//! - Complete board model for the 3x3 tile-rotation puzzle with validation
//! - A compact textual board codec (exact round trip for legal boards)
//! - The rotation engine: which tiles may turn, and how boats are dragged
//! - A breadth-first solver returning shortest rotation sequences
//! - The 60-objective catalog from the original game book
//!
//! The board state is a single string: nine two-character tile records
//! (shape letter 'N'/'O' plus rotation digit '0'-'3') followed by one to four
//! boat records (colour letter 'B'/'G'/'R'/'Y' plus edge letter 'a'-'x').
//! The first objective in the game book is `"N0O1N1N0O0O1N0N3N1Rt"` with
//! target `"Rv"`: get the red boat from edge 't' to edge 'v'.

pub mod cli;
pub mod error;
pub mod objective;
pub mod puzzle;
pub mod solver;

pub use error::{Error, Result};
pub use objective::{Difficulty, Objective, TargetPlacement};
pub use puzzle::{Board, Boat, BoatColour, Edge, Location, Shape, Tile, TilePosition};
pub use solver::{
    DEFAULT_MAX_DEPTH, SearchReport, SearchStats, Solution, SolveOutcome, solve, solve_objective,
};
