//! Interlock and overlap predicates for adjacent tile pairs
//!
//! Two adjacent tiles interlock when their facing track waves mesh with no
//! gap; they overlap when the facing waves point into each other's space.
//! Both predicates depend only on the shape pair, the adjacency direction and
//! the two rotations, so they are enumerated as truth tables over the
//! rotation pair rather than branching logic: one 4x4 table per shape pair
//! per direction, rows indexed by the lower tile's rotation, columns by the
//! higher tile's rotation.
//!
//! Horizontal adjacency means position difference 1 within a row; the
//! grid-wrap pairs (2,3) and (5,6) are not adjacent. Vertical adjacency means
//! position difference 3.

use serde::{Deserialize, Serialize};

use super::board::{Board, Shape, Tile};
use super::geometry::TilePosition;

/// Direction of adjacency between two tiles, from the lower position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjacency {
    Horizontal,
    Vertical,
}

/// Truth table over (lower rotation, higher rotation).
type RotationTable = [[bool; 4]; 4];

const T: bool = true;
const F: bool = false;

// Interlock tables, horizontal adjacency.

const INTERLOCK_H_NN: RotationTable = [
    [T, F, F, T],
    [F, T, T, F],
    [F, T, T, F],
    [T, F, F, T],
];

const INTERLOCK_H_NO: RotationTable = [
    [F, T, F, T],
    [T, F, T, F],
    [T, F, T, F],
    [F, T, F, T],
];

const INTERLOCK_H_ON: RotationTable = [
    [T, F, F, T],
    [F, T, T, F],
    [T, F, F, T],
    [F, T, T, F],
];

const INTERLOCK_H_OO: RotationTable = [
    [F, T, F, T],
    [T, F, T, F],
    [F, T, F, T],
    [T, F, T, F],
];

// Interlock tables, vertical adjacency.

const INTERLOCK_V_NN: RotationTable = [
    [T, T, F, F],
    [T, T, F, F],
    [F, F, T, T],
    [F, F, T, T],
];

const INTERLOCK_V_NO: RotationTable = [
    [T, F, T, F],
    [T, F, T, F],
    [F, T, F, T],
    [F, T, F, T],
];

const INTERLOCK_V_ON: RotationTable = [
    [F, F, T, T],
    [T, T, F, F],
    [F, F, T, T],
    [T, T, F, F],
];

const INTERLOCK_V_OO: RotationTable = INTERLOCK_H_OO;

// Overlap tables, horizontal adjacency.

const OVERLAP_H_NN: RotationTable = [
    [F, F, F, F],
    [T, F, F, T],
    [T, F, F, T],
    [F, F, F, F],
];

const OVERLAP_H_NO: RotationTable = [
    [F, F, F, F],
    [F, T, F, T],
    [F, T, F, T],
    [F, F, F, F],
];

const OVERLAP_H_ON: RotationTable = [
    [F, F, F, F],
    [T, F, F, T],
    [F, F, F, F],
    [T, F, F, T],
];

const OVERLAP_H_OO: RotationTable = [
    [F, F, F, F],
    [F, T, F, T],
    [F, F, F, F],
    [F, T, F, T],
];

// Overlap tables, vertical adjacency.

const OVERLAP_V_NN: RotationTable = [
    [F, F, F, F],
    [F, F, F, F],
    [T, T, F, F],
    [T, T, F, F],
];

const OVERLAP_V_NO: RotationTable = [
    [F, F, F, F],
    [F, F, F, F],
    [T, F, T, F],
    [T, F, T, F],
];

const OVERLAP_V_ON: RotationTable = [
    [T, T, F, F],
    [F, F, F, F],
    [T, T, F, F],
    [F, F, F, F],
];

const OVERLAP_V_OO: RotationTable = [
    [T, F, T, F],
    [F, F, F, F],
    [T, F, T, F],
    [F, F, F, F],
];

fn interlock_table(lower: Shape, higher: Shape, adjacency: Adjacency) -> &'static RotationTable {
    match (adjacency, lower, higher) {
        (Adjacency::Horizontal, Shape::N, Shape::N) => &INTERLOCK_H_NN,
        (Adjacency::Horizontal, Shape::N, Shape::O) => &INTERLOCK_H_NO,
        (Adjacency::Horizontal, Shape::O, Shape::N) => &INTERLOCK_H_ON,
        (Adjacency::Horizontal, Shape::O, Shape::O) => &INTERLOCK_H_OO,
        (Adjacency::Vertical, Shape::N, Shape::N) => &INTERLOCK_V_NN,
        (Adjacency::Vertical, Shape::N, Shape::O) => &INTERLOCK_V_NO,
        (Adjacency::Vertical, Shape::O, Shape::N) => &INTERLOCK_V_ON,
        (Adjacency::Vertical, Shape::O, Shape::O) => &INTERLOCK_V_OO,
    }
}

fn overlap_table(lower: Shape, higher: Shape, adjacency: Adjacency) -> &'static RotationTable {
    match (adjacency, lower, higher) {
        (Adjacency::Horizontal, Shape::N, Shape::N) => &OVERLAP_H_NN,
        (Adjacency::Horizontal, Shape::N, Shape::O) => &OVERLAP_H_NO,
        (Adjacency::Horizontal, Shape::O, Shape::N) => &OVERLAP_H_ON,
        (Adjacency::Horizontal, Shape::O, Shape::O) => &OVERLAP_H_OO,
        (Adjacency::Vertical, Shape::N, Shape::N) => &OVERLAP_V_NN,
        (Adjacency::Vertical, Shape::N, Shape::O) => &OVERLAP_V_NO,
        (Adjacency::Vertical, Shape::O, Shape::N) => &OVERLAP_V_ON,
        (Adjacency::Vertical, Shape::O, Shape::O) => &OVERLAP_V_OO,
    }
}

/// Whether two adjacent tiles mesh with no gap. `lower` is the tile at the
/// lower position of the pair.
pub fn tiles_interlock(lower: Tile, higher: Tile, adjacency: Adjacency) -> bool {
    interlock_table(lower.shape, higher.shape, adjacency)[lower.rotation as usize]
        [higher.rotation as usize]
}

/// Whether two adjacent tiles collide. `lower` is the tile at the lower
/// position of the pair.
pub fn tiles_overlap(lower: Tile, higher: Tile, adjacency: Adjacency) -> bool {
    overlap_table(lower.shape, higher.shape, adjacency)[lower.rotation as usize]
        [higher.rotation as usize]
}

/// The adjacency between two positions, normalized so the first element of
/// the returned pair is the lower position. `None` when not adjacent
/// (including the grid-wrap pairs).
pub fn adjacency_between(
    a: TilePosition,
    b: TilePosition,
) -> Option<(TilePosition, TilePosition, Adjacency)> {
    let (lo, hi) = if a.value() <= b.value() { (a, b) } else { (b, a) };
    match hi.value() - lo.value() {
        1 if lo.column() < 2 => Some((lo, hi, Adjacency::Horizontal)),
        3 => Some((lo, hi, Adjacency::Vertical)),
        _ => None,
    }
}

/// All adjacent position pairs on the 3x3 grid, each as (lower, higher,
/// direction): six horizontal pairs and six vertical pairs.
pub fn adjacent_pairs() -> impl Iterator<Item = (TilePosition, TilePosition, Adjacency)> {
    TilePosition::all().flat_map(|lo| {
        [1usize, 3].into_iter().filter_map(move |step| {
            TilePosition::new(lo.value() + step)
                .ok()
                .and_then(|hi| adjacency_between(lo, hi))
        })
    })
}

impl Board {
    /// Whether the tiles at two positions interlock. False for non-adjacent
    /// positions.
    pub fn tiles_interlock(&self, a: TilePosition, b: TilePosition) -> bool {
        match adjacency_between(a, b) {
            Some((lo, hi, adjacency)) => {
                tiles_interlock(self.tile(lo), self.tile(hi), adjacency)
            }
            None => false,
        }
    }

    /// Whether the tiles at two positions overlap. False for non-adjacent
    /// positions.
    pub fn tiles_overlap(&self, a: TilePosition, b: TilePosition) -> bool {
        match adjacency_between(a, b) {
            Some((lo, hi, adjacency)) => tiles_overlap(self.tile(lo), self.tile(hi), adjacency),
            None => false,
        }
    }

    /// All interlocked adjacent pairs on this board.
    pub fn interlocked_pairs(&self) -> Vec<(TilePosition, TilePosition)> {
        adjacent_pairs()
            .filter(|&(lo, hi, adjacency)| {
                tiles_interlock(self.tile(lo), self.tile(hi), adjacency)
            })
            .map(|(lo, hi, _)| (lo, hi))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(value: usize) -> TilePosition {
        TilePosition::new(value).unwrap()
    }

    #[test]
    fn adjacency_excludes_grid_wrap_pairs() {
        assert!(adjacency_between(pos(2), pos(3)).is_none());
        assert!(adjacency_between(pos(5), pos(6)).is_none());
        assert!(adjacency_between(pos(0), pos(2)).is_none());
        assert_eq!(
            adjacency_between(pos(4), pos(3)),
            Some((pos(3), pos(4), Adjacency::Horizontal))
        );
        assert_eq!(
            adjacency_between(pos(1), pos(4)),
            Some((pos(1), pos(4), Adjacency::Vertical))
        );
    }

    #[test]
    fn twelve_adjacent_pairs() {
        let pairs: Vec<_> = adjacent_pairs().collect();
        assert_eq!(pairs.len(), 12);
        assert!(
            pairs
                .iter()
                .all(|&(lo, hi, _)| adjacency_between(lo, hi).is_some())
        );
    }

    #[test]
    fn first_objective_interlock_examples() {
        // From the game description: on "N0O1N1N0O0O1N0N3N1Rt" the O0 tile in
        // position 4 interlocks with the O1 tile beside it, but not with the
        // N0 tile in position 3.
        let board = Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap();
        assert!(board.tiles_interlock(pos(4), pos(5)));
        assert!(!board.tiles_interlock(pos(3), pos(4)));
        // symmetric in argument order
        assert!(board.tiles_interlock(pos(5), pos(4)));
    }

    #[test]
    fn interlock_and_overlap_are_mutually_exclusive() {
        let shapes = [Shape::N, Shape::O];
        let adjacencies = [Adjacency::Horizontal, Adjacency::Vertical];
        for &lower_shape in &shapes {
            for &higher_shape in &shapes {
                for &adjacency in &adjacencies {
                    for lower_rotation in 0..4 {
                        for higher_rotation in 0..4 {
                            let lower = Tile::new(lower_shape, lower_rotation);
                            let higher = Tile::new(higher_shape, higher_rotation);
                            assert!(
                                !(tiles_interlock(lower, higher, adjacency)
                                    && tiles_overlap(lower, higher, adjacency)),
                                "meshed tracks cannot also collide: {lower} {higher} {adjacency:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn non_adjacent_positions_never_interlock_or_overlap() {
        let board = Board::decode("N0O1N1N0O0O1N0N3N1Rt").unwrap();
        assert!(!board.tiles_interlock(pos(2), pos(3)));
        assert!(!board.tiles_overlap(pos(5), pos(6)));
        assert!(!board.tiles_overlap(pos(0), pos(8)));
    }
}
