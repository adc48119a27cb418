//! Puzzle objectives and the pre-authored catalog
//!
//! The game book defines 60 numbered puzzles in four difficulty tiers of 15.
//! Each objective pairs an initial board encoding with a target placement:
//! a partial colour-to-edge mapping that must hold for the puzzle to count as
//! solved (boats not named in the target are unconstrained).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::puzzle::{Board, Boat, BoatColour, Edge};

/// The four difficulty tiers, 15 catalog objectives each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Starter,
    Junior,
    Expert,
    Master,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Starter,
            Difficulty::Junior,
            Difficulty::Expert,
            Difficulty::Master,
        ]
    }

    /// Tier index 0-3.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Starter => 0,
            Difficulty::Junior => 1,
            Difficulty::Expert => 2,
            Difficulty::Master => 3,
        }
    }

    /// Lowercase tier name.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Starter => "starter",
            Difficulty::Junior => "junior",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "starter" | "0" => Ok(Difficulty::Starter),
            "junior" | "1" => Ok(Difficulty::Junior),
            "expert" | "2" => Ok(Difficulty::Expert),
            "master" | "3" => Ok(Difficulty::Master),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "starter, junior, expert, master".to_string(),
            }),
        }
    }
}

/// A partial boat-to-edge mapping a board must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPlacement(Vec<(BoatColour, Edge)>);

impl TargetPlacement {
    /// Parse a target placement from concatenated colour+edge pairs, e.g.
    /// `"GcRb"`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTargetPlacement`] for empty input, odd
    /// length, bad symbols, or a colour named twice.
    pub fn decode(text: &str) -> Result<Self, crate::Error> {
        let invalid = |reason: &str| crate::Error::InvalidTargetPlacement {
            placement: text.to_string(),
            reason: reason.to_string(),
        };
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(invalid("placement is empty"));
        }
        if !chars.len().is_multiple_of(2) {
            return Err(invalid("placement has odd length"));
        }
        let mut placements = Vec::with_capacity(chars.len() / 2);
        for pair in chars.chunks(2) {
            let colour = BoatColour::from_char(pair[0])
                .ok_or_else(|| invalid(&format!("'{}' is not a boat colour", pair[0])))?;
            let edge = Edge::from_char(pair[1])
                .ok_or_else(|| invalid(&format!("'{}' is not an edge", pair[1])))?;
            if placements.iter().any(|&(c, _)| c == colour) {
                return Err(invalid(&format!("colour '{}' named twice", pair[0])));
            }
            placements.push((colour, edge));
        }
        Ok(TargetPlacement(placements))
    }

    /// Encode as concatenated colour+edge pairs.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .flat_map(|(colour, edge)| [colour.to_char(), edge.to_char()])
            .collect()
    }

    /// The colour-to-edge requirements.
    pub fn placements(&self) -> &[(BoatColour, Edge)] {
        &self.0
    }

    /// Whether every named boat sits on its specified edge.
    pub fn is_satisfied(&self, board: &Board) -> bool {
        self.0.iter().all(|&(colour, edge)| {
            board.boat(colour) == Some(&Boat { colour, edge })
        })
    }
}

impl fmt::Display for TargetPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// The 60 catalog objectives as (target placement, initial state) encodings,
/// indexed by problem number: Starter 0-14, Junior 15-29, Expert 30-44,
/// Master 45-59.
const CATALOG: [(&str, &str); 60] = [
    // Starter
    ("Rv", "N0O1N1N0O0O1N0N3N1Rt"),
    ("Gu", "O0O1O0N3N1N2N3N2N2Gs"),
    ("Yg", "O0N1O0N2N1N2N2O0N2Ye"),
    ("Rr", "O0O0N0N3N3N0N3N3O0Ru"),
    ("Bc", "O0N1N1N2N1O0N2O0N2Be"),
    ("GcRb", "O0O0N2O1N2N2N3N2N2GdRe"),
    ("BgRcYk", "O1O0N1O1N2N2N3N2N2BhRaYo"),
    ("BdYn", "O0O1N1N3O1N2N3N3N2BbYp"),
    ("GnRgYu", "N0N3N1O0O1O0N3N3N2GtRfYn"),
    ("BaGx", "O1N1O0N3N1N2N3N3O1BlGh"),
    ("GuRaYx", "O0O1N1N3O1N1N3N3N3GiRpYb"),
    ("BxGdRbYk", "O0O1N1N3N0N1N3O0N2BtGbRmYq"),
    ("GbRaYu", "N0O1N1N0O1O0N3N2N2GpRsYo"),
    ("BkRbYx", "O0O1N2N3N3N2N3O1N2BiRwYb"),
    ("BwGkRbYn", "N3O1N1N3N3O0N3O1N2BnGaRmYb"),
    // Junior
    ("BnGdRb", "O0O0O1N2N2N2N3N3N3BjGuRc"),
    ("BnGkRb", "O1O0N1N3N3O1N2N2N2BrGaRh"),
    ("BnRaYv", "O1O0N1N0N2N1O0N2N2BfRrYq"),
    ("BdGgYu", "O1N2N1N3O1N1N2N2O0BpGaYu"),
    ("GcYa", "O1N1N1N0O1N2N0N3O1GpYx"),
    ("BwRvYx", "O0N0N3N3N0O1N3O0N3BdRsYg"),
    ("BuGbRaYn", "N0O1N1N0O0O1N0N3N2BlGtRvYb"),
    ("BxGbRaYw", "O0N0N0N3O1N1N3N0O1BdGgRiYx"),
    ("GkRbYu", "O1O0N2N3N3O1N2N2N2GrRaYh"),
    ("BwGkRbYn", "O1N1N1N0N0O0N2O0N3BaGrRoYn"),
    ("BcGx", "O1O0N2N3N3O1N2N2N2BaGq"),
    ("GnRgYu", "O0N0O1N3N3N1N3O1N1GdRcYm"),
    ("BxGvRbYw", "N1O0N1N1N2O0N3O1N2BkGfRnYw"),
    ("GrRk", "O1N1O0N0O1N2N3N3N3GpRa"),
    ("BgGkYu", "O1O0O0N3N3N3N2N2N2BaGhYr"),
    // Expert
    ("RbYr", "N0N1N1O1O0O1N3N3N2ReYt"),
    ("GrRd", "N3O1N1N3O0O1N3N3N2GbRt"),
    ("BrGgRcYk", "O0O1N2O1N2N2N1N2N2BcGvRrYi"),
    ("RgYu", "O1N1O0N0N0N2N0O1N2RmYa"),
    ("BvGdRcYn", "O0O1N1N2N2N1O1N2N2BqGiRbYv"),
    ("BkRg", "O0O1N1N3N0N0N3O0N2BdRn"),
    ("BxGgRcYu", "O0N0N3N3O0O1N2N2N2BrGgRlYd"),
    ("BnRgYv", "N1N1N1O0O1O0N3N2N2BsRdYn"),
    ("BuGkRbYn", "N0N0N3O0O0O1N2N2N2BrGgRlYk"),
    ("BxGnRdYw", "O0N1O0N3N1N2N2O0N2BdGtRgYe"),
    ("BuGgRaYk", "O0N0O0N3O0N3N2N2N2BrGdRgYl"),
    ("BxGdRaYu", "N0N0N3O1O0O1N1N2N2BrGgRcYq"),
    ("BuRb", "O1N2N1N3O1O0N2N2N2BnRa"),
    ("BxGdRcYk", "O0N0O0N3N0N3N3N0O1BdGgRfYn"),
    ("BnGv", "O0O0N1N2N2N2O1N2N2BvGj"),
    // Master
    ("BrGnRg", "O1N1O0N0O1N2N3N3N3BpGaRg"),
    ("BwGnRd", "O0O1N1N3N2N1N2N2O0BdGlRu"),
    ("BrGcRbYd", "O1O0N1N1N2O0N3N3N3BfGnRkYu"),
    ("BrGdRcYn", "O1O0O1N1N2N2N3N3N3BuGcRjYk"),
    ("BwGkRbYn", "N0N0N3O1O0O1N1N2N2BgGqRcYr"),
    ("RdYg", "N0O1N2N0N3O1N0O1N2RqYi"),
    ("BkRbGcYd", "O0O1N1N3N2N1N2N2O0BuGlRrYd"),
    ("RrYu", "O0N0N0N3N0O0N3O0N2RsYd"),
    ("GvRg", "O0O0O1N2N2N2N3N3N3GjRc"),
    ("BwGnRgYv", "N3O1N1N3N0O0N3O0N3BbGnRaYs"),
    ("BuGdRb", "O0O0N0N2N2N2N3O1N2BjGwRg"),
    ("BvGnRaYu", "O1N1N2N0O1N2N3N3O1BcGpRxYa"),
    ("BxGuRaYw", "O1O0N1N3O1N1N3N3N3BhGaRpYf"),
    ("BuGgRbYk", "O1O0O1N3N3N2N2N2N2BmGaRhYr"),
    ("BdRcYr", "O0N0N3N3O0O1N3N3N3BdRlYg"),
];

const OBJECTIVES_PER_TIER: usize = 15;

/// A puzzle instance: an initial board plus a target placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    problem_number: usize,
    target_placement: String,
    initial_state: String,
}

impl Objective {
    /// Construct an objective from its two encodings and problem number.
    pub fn new(
        target_placement: impl Into<String>,
        initial_state: impl Into<String>,
        problem_number: usize,
    ) -> Self {
        Objective {
            problem_number,
            target_placement: target_placement.into(),
            initial_state: initial_state.into(),
        }
    }

    /// The catalog objective with a given problem number (0-59).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownProblemNumber`] for numbers >= 60.
    pub fn by_problem_number(number: usize) -> Result<Objective, crate::Error> {
        let (target, initial) = CATALOG
            .get(number)
            .ok_or(crate::Error::UnknownProblemNumber { number })?;
        Ok(Objective::new(*target, *initial, number))
    }

    /// Draw a catalog objective of the given difficulty uniformly at random.
    pub fn random(difficulty: Difficulty, rng: &mut impl Rng) -> Objective {
        let base = difficulty.index() * OBJECTIVES_PER_TIER;
        let number = base + rng.random_range(0..OBJECTIVES_PER_TIER);
        Self::by_problem_number(number).expect("catalog problem numbers are always in range")
    }

    /// All 60 catalog objectives in problem-number order.
    pub fn catalog() -> impl Iterator<Item = Objective> {
        (0..CATALOG.len()).map(|number| {
            Self::by_problem_number(number).expect("catalog problem numbers are always in range")
        })
    }

    /// The problem number from the original game book (0-59).
    pub fn problem_number(&self) -> usize {
        self.problem_number
    }

    /// The difficulty tier this problem number belongs to.
    pub fn difficulty(&self) -> Difficulty {
        match self.problem_number / OBJECTIVES_PER_TIER {
            0 => Difficulty::Starter,
            1 => Difficulty::Junior,
            2 => Difficulty::Expert,
            _ => Difficulty::Master,
        }
    }

    /// The raw target placement encoding.
    pub fn target_placement(&self) -> &str {
        &self.target_placement
    }

    /// The raw initial board encoding.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// Parse the target placement.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored encoding is malformed.
    pub fn target(&self) -> Result<TargetPlacement, crate::Error> {
        TargetPlacement::decode(&self.target_placement)
    }

    /// Decode the initial board.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored encoding is malformed.
    pub fn initial_board(&self) -> Result<Board, crate::Error> {
        Board::decode(&self.initial_state)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Objective {}: {} -> {}",
            self.problem_number, self.initial_state, self.target_placement
        )
    }
}
