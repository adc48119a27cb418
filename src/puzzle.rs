//! Tile-rotation puzzle mechanics
//!
//! The 3x3 grid of interlocking tiles, the 24 edge slots around them, the
//! board codec and legality rules, and the rotation transition function.

pub mod board;
pub mod geometry;
pub mod interlock;
pub mod rotation;
pub mod validation;

pub use board::{Board, Boat, BoatColour, Shape, Tile};
pub use geometry::{Edge, Location, TilePosition};
pub use interlock::{Adjacency, adjacency_between, adjacent_pairs, tiles_interlock, tiles_overlap};
