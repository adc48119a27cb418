//! Breadth-first solver for puzzle objectives
//!
//! The search graph has legal boards as nodes and legal rotations as edges.
//! The frontier is explored by increasing move count with successor positions
//! tried in ascending order, so the first satisfying board yields a shortest
//! solution and the same objective always produces the same output. Visited
//! boards are deduplicated by their canonical encoding.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::objective::{Objective, TargetPlacement};
use crate::puzzle::{Board, TilePosition};

/// Default rotation-count bound, comfortably above the diameter of the
/// finite state space; the default search runs to exhaustion.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// An ordered sequence of tile rotations.
///
/// Replaying the sequence from the objective's initial board reaches a board
/// satisfying the target placement. The empty sequence denotes an already
/// satisfied target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Solution(Vec<TilePosition>);

impl Solution {
    pub fn new(moves: Vec<TilePosition>) -> Self {
        Solution(moves)
    }

    /// Parse a solution from tile-position digits, e.g. `"8887"`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ParseSolution`] for any character outside
    /// '0'-'8'.
    pub fn parse(text: &str) -> Result<Self, crate::Error> {
        text.chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| TilePosition::new(d as usize).ok())
                    .ok_or_else(|| crate::Error::ParseSolution {
                        character: c,
                        input: text.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Solution)
    }

    pub fn moves(&self) -> &[TilePosition] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replay the moves from a board, returning the final board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalRotation`] if any move in the sequence
    /// is illegal for the board it is applied to.
    pub fn replay(&self, initial: &Board) -> Result<Board, crate::Error> {
        let mut board = initial.clone();
        for &pos in &self.0 {
            board = board.rotate(pos)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in &self.0 {
            write!(f, "{pos}")?;
        }
        Ok(())
    }
}

/// Result of a solve: a shortest solution, or one of two unsolvable outcomes.
///
/// `Exhausted` is a proof: the whole reachable space was explored without
/// satisfying the target. `DepthLimited` only means the bound was hit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    Solved(Solution),
    Exhausted,
    DepthLimited,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Counters from a finished search.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards expanded (dequeued) during the search.
    pub states_explored: usize,
    /// Deepest BFS layer reached.
    pub deepest_layer: usize,
}

/// Outcome plus search counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

/// Search for a shortest rotation sequence taking `initial` to a board
/// satisfying `target`.
///
/// The initial board must be legal; successors generated by the rotation
/// engine always are. `max_depth` bounds the solution length considered
/// ([`DEFAULT_MAX_DEPTH`] effectively means no bound).
pub fn solve(initial: &Board, target: &TargetPlacement, max_depth: usize) -> SearchReport {
    let mut stats = SearchStats::default();

    if target.is_satisfied(initial) {
        return SearchReport {
            outcome: SolveOutcome::Solved(Solution::default()),
            stats,
        };
    }

    let start_key = initial.encode();
    let mut visited = HashSet::from([start_key.clone()]);
    let mut parents: HashMap<String, (String, TilePosition)> = HashMap::new();
    let mut queue = VecDeque::from([(initial.clone(), start_key.clone(), 0usize)]);
    let mut depth_limited = false;

    while let Some((board, key, depth)) = queue.pop_front() {
        stats.states_explored += 1;
        stats.deepest_layer = depth;
        if depth >= max_depth {
            depth_limited = true;
            continue;
        }

        for pos in TilePosition::all() {
            let Ok(next) = board.rotate(pos) else {
                continue;
            };
            let next_key = next.encode();
            if !visited.insert(next_key.clone()) {
                continue;
            }
            parents.insert(next_key.clone(), (key.clone(), pos));
            if target.is_satisfied(&next) {
                let solution = reconstruct(&parents, &start_key, &next_key);
                stats.deepest_layer = depth + 1;
                return SearchReport {
                    outcome: SolveOutcome::Solved(solution),
                    stats,
                };
            }
            queue.push_back((next, next_key, depth + 1));
        }
    }

    let outcome = if depth_limited {
        SolveOutcome::DepthLimited
    } else {
        SolveOutcome::Exhausted
    };
    SearchReport { outcome, stats }
}

/// Solve a catalog or custom objective.
///
/// # Errors
///
/// Returns a codec error if either encoding is malformed, or
/// [`crate::Error::IllegalBoard`] if the initial board is not legal.
pub fn solve_objective(objective: &Objective, max_depth: usize) -> Result<SearchReport, crate::Error> {
    let board = objective.initial_board()?;
    if !board.is_legal() {
        return Err(crate::Error::IllegalBoard {
            reason: format!("initial state '{}' is not legal", objective.initial_state()),
        });
    }
    let target = objective.target()?;
    Ok(solve(&board, &target, max_depth))
}

fn reconstruct(
    parents: &HashMap<String, (String, TilePosition)>,
    start_key: &str,
    end_key: &str,
) -> Solution {
    let mut moves = Vec::new();
    let mut key = end_key;
    while key != start_key {
        let (previous, pos) = &parents[key];
        moves.push(*pos);
        key = previous;
    }
    moves.reverse();
    Solution(moves)
}
