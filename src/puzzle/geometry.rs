//! Edge geometry: the 24 named edge slots and their cartesian layout
//!
//! Edges live in a 7x7 coordinate system (both axes 0-6). Rows with even `y`
//! hold the three horizontal edge slots of a tile row (odd `x`), rows with odd
//! `y` hold the four vertical edge slots (even `x`). Named edges run 'a'-'x'
//! in reading order:
//!
//! ```text
//!   a   b   c
//! d 0 e 1 f 2 g
//!   h   i   j
//! k 3 l 4 m 5 n
//!   o   p   q
//! r 6 s 7 t 8 u
//!   v   w   x
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 24 named edge slots ('a'-'x') where a boat may sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge(u8);

impl Edge {
    /// Number of distinct edges on the board.
    pub const COUNT: usize = 24;

    /// Parse an edge from its name character ('a'-'x').
    pub fn from_char(c: char) -> Option<Edge> {
        if c.is_ascii_lowercase() && c <= 'x' {
            Some(Edge(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// The edge's name character ('a'-'x').
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Zero-based index of the edge in name order.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all 24 edges in name order.
    pub fn all() -> impl Iterator<Item = Edge> {
        (0..Self::COUNT as u8).map(Edge)
    }

    /// The cartesian location of this edge.
    ///
    /// Edges are numbered in reading order over the alternating 3-slot and
    /// 4-slot rows, so the name index and the coordinates are related by
    /// `index = (7y + x - 1) / 2`.
    pub fn location(self) -> Location {
        let y = (2 * self.0 + 1) / 7;
        let x = 2 * self.0 + 1 - 7 * y;
        Location { x, y }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cartesian location in the 7x7 edge coordinate space.
///
/// Not every location is a valid edge slot: (1,1) is the centre of tile 0 and
/// (6,2) is a corner between tile positions 2 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: u8,
    pub y: u8,
}

impl Location {
    /// Create a location from raw coordinates.
    pub fn new(x: u8, y: u8) -> Self {
        Location { x, y }
    }

    /// The edge at this location, or `None` if the location is not an edge slot.
    pub fn edge(self) -> Option<Edge> {
        if self.x > 6 || self.y > 6 {
            return None;
        }
        let valid = if self.y.is_multiple_of(2) {
            !self.x.is_multiple_of(2)
        } else {
            self.x.is_multiple_of(2)
        };
        if !valid {
            return None;
        }
        Some(Edge((7 * self.y + self.x - 1) / 2))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A tile position on the 3x3 grid (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePosition(usize);

impl TilePosition {
    /// Number of tile positions on the board.
    pub const COUNT: usize = 9;

    /// Create a new tile position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < Self::COUNT {
            Ok(TilePosition(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(self) -> usize {
        self.0
    }

    /// Grid row (0-2).
    pub fn row(self) -> usize {
        self.0 / 3
    }

    /// Grid column (0-2).
    pub fn column(self) -> usize {
        self.0 % 3
    }

    /// Iterate over all 9 tile positions in row-major order.
    pub fn all() -> impl Iterator<Item = TilePosition> {
        (0..Self::COUNT).map(TilePosition)
    }

    /// The four edges bordering this tile, clockwise starting from the top edge.
    ///
    /// For the tile at row `r`, column `c` these sit at (2c+1, 2r) top,
    /// (2c+2, 2r+1) right, (2c+1, 2r+2) bottom and (2c, 2r+1) left.
    pub fn border_edges(self) -> [Edge; 4] {
        let r = self.row() as u8;
        let c = self.column() as u8;
        let edge = |x, y| {
            Location::new(x, y)
                .edge()
                .expect("tile border coordinates are always valid edge slots")
        };
        [
            edge(2 * c + 1, 2 * r),
            edge(2 * c + 2, 2 * r + 1),
            edge(2 * c + 1, 2 * r + 2),
            edge(2 * c, 2 * r + 1),
        ]
    }

    /// The edge a boat at `edge` is dragged to when this tile turns one
    /// quarter clockwise, if `edge` borders this tile.
    pub fn drag_destination(self, edge: Edge) -> Option<Edge> {
        let borders = self.border_edges();
        borders
            .iter()
            .position(|&e| e == edge)
            .map(|i| borders[(i + 1) % 4])
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TilePosition> for usize {
    fn from(pos: TilePosition) -> Self {
        pos.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_name_location_bijection() {
        for edge in Edge::all() {
            assert_eq!(edge.location().edge(), Some(edge), "edge {edge}");
        }
    }

    #[test]
    fn named_edge_locations_match_layout() {
        let expect = |c, x, y| {
            let edge = Edge::from_char(c).unwrap();
            assert_eq!(edge.location(), Location::new(x, y), "edge {c}");
        };
        expect('a', 1, 0);
        expect('d', 0, 1);
        expect('g', 6, 1);
        expect('h', 1, 2);
        expect('l', 2, 3);
        expect('t', 4, 5);
        expect('x', 5, 6);
    }

    #[test]
    fn non_edge_locations_are_rejected() {
        // tile centres, corners, and out-of-range coordinates
        assert_eq!(Location::new(1, 1).edge(), None);
        assert_eq!(Location::new(6, 2).edge(), None);
        assert_eq!(Location::new(0, 0).edge(), None);
        assert_eq!(Location::new(7, 1).edge(), None);
        assert_eq!(Location::new(3, 7).edge(), None);
    }

    #[test]
    fn border_edges_run_clockwise_from_top() {
        let borders: Vec<String> = TilePosition::all()
            .map(|p| p.border_edges().iter().map(|e| e.to_char()).collect())
            .collect();
        let expected = [
            "aehd", "bfie", "cgjf", "hlok", "impl", "jnqm", "osvr", "ptws", "quxt",
        ];
        assert_eq!(borders, expected);
    }

    #[test]
    fn drag_follows_the_clockwise_cycle() {
        let pos = TilePosition::new(0).unwrap();
        let [top, right, bottom, left] = pos.border_edges();
        assert_eq!(pos.drag_destination(top), Some(right));
        assert_eq!(pos.drag_destination(right), Some(bottom));
        assert_eq!(pos.drag_destination(bottom), Some(left));
        assert_eq!(pos.drag_destination(left), Some(top));
        let elsewhere = Edge::from_char('x').unwrap();
        assert_eq!(pos.drag_destination(elsewhere), None);
    }
}
