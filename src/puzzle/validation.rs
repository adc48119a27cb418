//! Board legality and well-formedness judgments

use std::collections::HashSet;

use super::board::{Board, Shape};
use super::interlock::{adjacent_pairs, tiles_overlap};

impl Board {
    /// Check the structural constraints of a board.
    ///
    /// A board is well-formed when it carries the fixed tile census (six 'N'
    /// tiles and three 'O' tiles, rotations 0-3), one to four boats unique by
    /// colour, and no two boats on the same edge. A well-formed board is not
    /// necessarily legal: tiles may still overlap.
    pub fn is_well_formed(&self) -> bool {
        let n_count = self
            .tiles()
            .iter()
            .filter(|tile| tile.shape == Shape::N)
            .count();
        if n_count != 6 || self.tiles().iter().any(|tile| tile.rotation > 3) {
            return false;
        }

        let boats = self.boats();
        if boats.is_empty() || boats.len() > 4 {
            return false;
        }
        let mut colours = HashSet::new();
        let mut edges = HashSet::new();
        boats
            .iter()
            .all(|boat| colours.insert(boat.colour) && edges.insert(boat.edge))
    }

    /// Check full legality: well-formed and no adjacent tile pair overlaps.
    ///
    /// `is_legal` implies `is_well_formed`.
    pub fn is_legal(&self) -> bool {
        self.is_well_formed()
            && adjacent_pairs()
                .all(|(lo, hi, adjacency)| !tiles_overlap(self.tile(lo), self.tile(hi), adjacency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Tile;

    #[test]
    fn first_objective_board_is_legal() {
        let board = Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap();
        assert!(board.is_well_formed());
        assert!(board.is_legal());
    }

    #[test]
    fn wrong_tile_census_is_not_well_formed() {
        // seven N tiles, two O tiles
        let board = Board::decode("N0N1N1N0O0O1N0N3N1Rt").unwrap();
        assert!(!board.is_well_formed());
        assert!(!board.is_legal());
    }

    #[test]
    fn two_boats_on_one_edge_is_not_well_formed() {
        let tiles = Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap();
        let edge = crate::puzzle::Edge::from_char('t').unwrap();
        let boats = vec![
            crate::puzzle::Boat {
                colour: crate::puzzle::BoatColour::Red,
                edge,
            },
            crate::puzzle::Boat {
                colour: crate::puzzle::BoatColour::Blue,
                edge,
            },
        ];
        let board = Board::from_parts(*tiles.tiles(), boats).unwrap();
        assert!(!board.is_well_formed());
    }

    #[test]
    fn overlapping_tiles_make_a_board_illegal() {
        // Turning tile 0 of the first objective to N1 collides with the O1
        // tile beside it (N1 facing O1 horizontally).
        let board = Board::decode("N1O1N1N0O0O1N0N3N0Rt").unwrap();
        assert!(board.is_well_formed());
        assert!(!board.is_legal());
    }

    #[test]
    fn legality_implies_well_formedness() {
        let boards = [
            "N0O1N1N0O0O1N0N3N1Rt",
            "N1O1N1N0O0O1N0N3N0Rt",
            "N0N1N1N0O0O1N0N3N1Rt",
            "O0O1O0N3N1N2N3N2N2Gs",
        ];
        for encoding in boards {
            let board = Board::decode(encoding).unwrap();
            assert!(!board.is_legal() || board.is_well_formed(), "{encoding}");
        }
    }

    #[test]
    fn rotation_field_out_of_range_is_caught() {
        let mut tiles = *Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap().tiles();
        tiles[0] = Tile {
            shape: Shape::N,
            rotation: 7,
        };
        let boats = Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap().boats().to_vec();
        let board = Board::from_parts(tiles, boats).unwrap();
        assert!(!board.is_well_formed());
    }
}
