//! Error types for the Brainstorm crate

use thiserror::Error;

/// Main error type for the Brainstorm crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board encoding too short: expected at least {expected} characters, got {got} in '{context}'")]
    EncodingTooShort {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("board encoding has odd length {length} in '{context}'")]
    OddEncodingLength { length: usize, context: String },

    #[error("invalid shape character '{character}' at position {position} in '{context}'")]
    InvalidShapeCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid rotation character '{character}' at position {position} in '{context}' (expected '0'-'3')")]
    InvalidRotationCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid boat colour character '{character}' at position {position} in '{context}' (expected 'B', 'G', 'R' or 'Y')")]
    InvalidColourCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid edge character '{character}' at position {position} in '{context}' (expected 'a'-'x')")]
    InvalidEdgeCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("boat count {count} out of range (a board carries 1-4 boats)")]
    InvalidBoatCount { count: usize },

    #[error("duplicate boat colour '{colour}' in '{context}'")]
    DuplicateBoatColour { colour: char, context: String },

    #[error("illegal board: {reason}")]
    IllegalBoard { reason: String },

    #[error("illegal rotation at position {position}: {reason}")]
    IllegalRotation { position: usize, reason: String },

    #[error("tile position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move character '{character}' in solution '{input}' (expected digits '0'-'8')")]
    ParseSolution { character: char, input: String },

    #[error("invalid target placement '{placement}': {reason}")]
    InvalidTargetPlacement { placement: String, reason: String },

    #[error("no catalog objective with problem number {number}")]
    UnknownProblemNumber { number: usize },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
