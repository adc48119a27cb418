//! Board state representation and the textual board codec
//!
//! The board state is a single compact string. The first 18 characters are
//! nine two-character tile records (shape letter + rotation digit) in position
//! order; the remainder is one to four two-character boat records (colour
//! letter + edge letter). `"Bl"` is a blue boat at edge 'l', between tiles 3
//! and 4.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Edge, Location, TilePosition};

/// One of the two interlocking track geometries a tile may have.
///
/// The letters are the game's own encoding alphabet: every board carries six
/// 'N' tiles and three 'O' tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    N,
    O,
}

impl Shape {
    pub fn to_char(self) -> char {
        match self {
            Shape::N => 'N',
            Shape::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Shape> {
        match c {
            'N' => Some(Shape::N),
            'O' => Some(Shape::O),
            _ => None,
        }
    }
}

/// One grid cell's state: a shape and a rotation in quarter-turns clockwise
/// (0-3) from the canonical orientation.
///
/// Tiles are immutable values; turning a tile produces a new `Tile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub shape: Shape,
    pub rotation: u8,
}

impl Tile {
    pub fn new(shape: Shape, rotation: u8) -> Self {
        Tile {
            shape,
            rotation: rotation % 4,
        }
    }

    /// The tile after one quarter-turn clockwise.
    #[must_use = "turned returns a new tile; the original is unchanged"]
    pub fn turned(self) -> Tile {
        Tile {
            shape: self.shape,
            rotation: (self.rotation + 1) % 4,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.shape.to_char(), self.rotation)
    }
}

/// One of the four boat colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoatColour {
    Blue,
    Green,
    Red,
    Yellow,
}

impl BoatColour {
    pub fn to_char(self) -> char {
        match self {
            BoatColour::Blue => 'B',
            BoatColour::Green => 'G',
            BoatColour::Red => 'R',
            BoatColour::Yellow => 'Y',
        }
    }

    pub fn from_char(c: char) -> Option<BoatColour> {
        match c {
            'B' => Some(BoatColour::Blue),
            'G' => Some(BoatColour::Green),
            'R' => Some(BoatColour::Red),
            'Y' => Some(BoatColour::Yellow),
            _ => None,
        }
    }

    /// All four colours in canonical (encoding) order.
    pub fn all() -> [BoatColour; 4] {
        [
            BoatColour::Blue,
            BoatColour::Green,
            BoatColour::Red,
            BoatColour::Yellow,
        ]
    }
}

impl fmt::Display for BoatColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A boat of a given colour sitting at an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boat {
    pub colour: BoatColour,
    pub edge: Edge,
}

/// Complete board state: nine tiles indexed by [`TilePosition`] plus one to
/// four boats, unique by colour.
///
/// A `Board` is an immutable value; every transition produces a new `Board`.
/// Boats are held in canonical colour order (B, G, R, Y) so that equality,
/// hashing and [`Board::encode`] agree on one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: [Tile; 9],
    boats: Vec<Boat>,
}

impl Board {
    /// Assemble a board from parts, canonicalizing boat order.
    ///
    /// This checks the structural constraints the codec grammar would enforce
    /// (1-4 boats, no duplicate colour); geometric legality is the
    /// validator's concern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoatCount`] or
    /// [`crate::Error::DuplicateBoatColour`].
    pub fn from_parts(tiles: [Tile; 9], mut boats: Vec<Boat>) -> Result<Self, crate::Error> {
        if boats.is_empty() || boats.len() > 4 {
            return Err(crate::Error::InvalidBoatCount { count: boats.len() });
        }
        boats.sort_by_key(|boat| boat.colour);
        for pair in boats.windows(2) {
            if pair[0].colour == pair[1].colour {
                return Err(crate::Error::DuplicateBoatColour {
                    colour: pair[0].colour.to_char(),
                    context: "board parts".to_string(),
                });
            }
        }
        Ok(Board { tiles, boats })
    }

    /// Decode a board from its textual encoding.
    ///
    /// The encoding may be structurally well-typed yet geometrically illegal;
    /// use [`Board::is_legal`] afterwards when legality matters. Boat records
    /// are accepted in any order and canonicalized to colour order.
    ///
    /// # Errors
    ///
    /// Returns a codec-level error if the text violates the grammar: wrong
    /// length, bad shape/rotation/colour/edge symbol, or a duplicate boat
    /// colour.
    pub fn decode(text: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 20 {
            return Err(crate::Error::EncodingTooShort {
                expected: 20,
                got: chars.len(),
                context: text.to_string(),
            });
        }
        if !chars.len().is_multiple_of(2) {
            return Err(crate::Error::OddEncodingLength {
                length: chars.len(),
                context: text.to_string(),
            });
        }

        let mut tiles = [Tile::new(Shape::N, 0); 9];
        for (i, tile) in tiles.iter_mut().enumerate() {
            let shape_char = chars[2 * i];
            let rotation_char = chars[2 * i + 1];
            let shape = Shape::from_char(shape_char).ok_or_else(|| {
                crate::Error::InvalidShapeCharacter {
                    character: shape_char,
                    position: 2 * i,
                    context: text.to_string(),
                }
            })?;
            let rotation = match rotation_char {
                '0'..='3' => rotation_char as u8 - b'0',
                _ => {
                    return Err(crate::Error::InvalidRotationCharacter {
                        character: rotation_char,
                        position: 2 * i + 1,
                        context: text.to_string(),
                    });
                }
            };
            *tile = Tile::new(shape, rotation);
        }

        let boat_count = (chars.len() - 18) / 2;
        if boat_count > 4 {
            return Err(crate::Error::InvalidBoatCount { count: boat_count });
        }
        let mut boats = Vec::with_capacity(boat_count);
        for i in 0..boat_count {
            let colour_char = chars[18 + 2 * i];
            let edge_char = chars[19 + 2 * i];
            let colour = BoatColour::from_char(colour_char).ok_or_else(|| {
                crate::Error::InvalidColourCharacter {
                    character: colour_char,
                    position: 18 + 2 * i,
                    context: text.to_string(),
                }
            })?;
            let edge =
                Edge::from_char(edge_char).ok_or_else(|| crate::Error::InvalidEdgeCharacter {
                    character: edge_char,
                    position: 19 + 2 * i,
                    context: text.to_string(),
                })?;
            if boats.iter().any(|boat: &Boat| boat.colour == colour) {
                return Err(crate::Error::DuplicateBoatColour {
                    colour: colour_char,
                    context: text.to_string(),
                });
            }
            boats.push(Boat { colour, edge });
        }

        Self::from_parts(tiles, boats)
    }

    /// Encode the board as its canonical textual representation.
    ///
    /// `decode(encode(board)) == board` for every board.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(18 + 2 * self.boats.len());
        for tile in &self.tiles {
            out.push(tile.shape.to_char());
            out.push((b'0' + tile.rotation) as char);
        }
        for boat in &self.boats {
            out.push(boat.colour.to_char());
            out.push(boat.edge.to_char());
        }
        out
    }

    /// The nine tiles in position order.
    pub fn tiles(&self) -> &[Tile; 9] {
        &self.tiles
    }

    /// The tile at a position.
    pub fn tile(&self, pos: TilePosition) -> Tile {
        self.tiles[pos.value()]
    }

    /// The boats in canonical colour order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// The boat of a given colour, if this game uses it.
    pub fn boat(&self, colour: BoatColour) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.colour == colour)
    }

    /// The boat sitting at an edge, if any.
    pub fn boat_at(&self, edge: Edge) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.edge == edge)
    }

    /// Whether any boat sits on one of the tile's four border edges.
    pub fn tile_has_boat(&self, pos: TilePosition) -> bool {
        pos.border_edges()
            .iter()
            .any(|&edge| self.boat_at(edge).is_some())
    }

    pub(crate) fn replace(&self, tiles: [Tile; 9], boats: Vec<Boat>) -> Board {
        debug_assert!(boats.windows(2).all(|p| p[0].colour < p[1].colour));
        Board { tiles, boats }
    }

    fn edge_marker(&self, x: u8, y: u8) -> char {
        let edge = Location::new(x, y)
            .edge()
            .expect("display coordinates are always valid edge slots");
        match self.boat_at(edge) {
            Some(boat) => boat.colour.to_char(),
            None => edge.to_char(),
        }
    }
}

impl fmt::Display for Board {
    /// Render the board as the layout diagram, with boat colour letters in
    /// place of the edge names they occupy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3u8 {
            writeln!(
                f,
                "+--{}--+--{}--+--{}--+",
                self.edge_marker(1, 2 * r),
                self.edge_marker(3, 2 * r),
                self.edge_marker(5, 2 * r),
            )?;
            writeln!(
                f,
                "{}  {} {}  {} {}  {} {}",
                self.edge_marker(0, 2 * r + 1),
                self.tiles[3 * r as usize],
                self.edge_marker(2, 2 * r + 1),
                self.tiles[3 * r as usize + 1],
                self.edge_marker(4, 2 * r + 1),
                self.tiles[3 * r as usize + 2],
                self.edge_marker(6, 2 * r + 1),
            )?;
        }
        write!(
            f,
            "+--{}--+--{}--+--{}--+",
            self.edge_marker(1, 6),
            self.edge_marker(3, 6),
            self.edge_marker(5, 6),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_OBJECTIVE: &str = "N0O1N1N0O0O1N0N3N1Rt";

    #[test]
    fn decode_reads_tiles_and_boats() {
        let board = Board::decode(FIRST_OBJECTIVE).unwrap();
        assert_eq!(board.tile(TilePosition::new(0).unwrap()), Tile::new(Shape::N, 0));
        assert_eq!(board.tile(TilePosition::new(4).unwrap()), Tile::new(Shape::O, 0));
        assert_eq!(board.tile(TilePosition::new(8).unwrap()), Tile::new(Shape::N, 1));
        assert_eq!(board.boats().len(), 1);
        let boat = board.boat(BoatColour::Red).unwrap();
        assert_eq!(boat.edge, Edge::from_char('t').unwrap());
    }

    #[test]
    fn encode_round_trips() {
        let board = Board::decode(FIRST_OBJECTIVE).unwrap();
        assert_eq!(board.encode(), FIRST_OBJECTIVE);
        assert_eq!(Board::decode(&board.encode()).unwrap(), board);
    }

    #[test]
    fn decode_canonicalizes_boat_order() {
        let scrambled = Board::decode("N0O1N1N0O0O1N0N3N1YbRtBa").unwrap();
        assert_eq!(scrambled.encode(), "N0O1N1N0O0O1N0N3N1BaRtYb");
    }

    #[test]
    fn decode_rejects_malformed_encodings() {
        // too short
        assert!(matches!(
            Board::decode("N0O1N1"),
            Err(crate::Error::EncodingTooShort { .. })
        ));
        // odd length
        assert!(matches!(
            Board::decode("N0O1N1N0O0O1N0N3N1RtB"),
            Err(crate::Error::OddEncodingLength { .. })
        ));
        // bad shape letter
        assert!(matches!(
            Board::decode("X0O1N1N0O0O1N0N3N1Rt"),
            Err(crate::Error::InvalidShapeCharacter { character: 'X', .. })
        ));
        // rotation out of range
        assert!(matches!(
            Board::decode("N4O1N1N0O0O1N0N3N1Rt"),
            Err(crate::Error::InvalidRotationCharacter { character: '4', .. })
        ));
        // bad colour letter
        assert!(matches!(
            Board::decode("N0O1N1N0O0O1N0N3N1Zt"),
            Err(crate::Error::InvalidColourCharacter { character: 'Z', .. })
        ));
        // bad edge letter
        assert!(matches!(
            Board::decode("N0O1N1N0O0O1N0N3N1Rz"),
            Err(crate::Error::InvalidEdgeCharacter { character: 'z', .. })
        ));
        // duplicate colour
        assert!(matches!(
            Board::decode("N0O1N1N0O0O1N0N3N1RtRv"),
            Err(crate::Error::DuplicateBoatColour { colour: 'R', .. })
        ));
        // five boats
        assert!(matches!(
            Board::decode("N0O1N1N0O0O1N0N3N1BaGbRcYdBe"),
            Err(crate::Error::InvalidBoatCount { count: 5 })
        ));
    }

    #[test]
    fn boat_lookups() {
        let board = Board::decode("N0O1N1N0O0O1N0N3N1BaRt").unwrap();
        assert!(board.boat(BoatColour::Blue).is_some());
        assert!(board.boat(BoatColour::Green).is_none());
        assert!(board.boat_at(Edge::from_char('t').unwrap()).is_some());
        assert!(board.boat_at(Edge::from_char('v').unwrap()).is_none());
        // 't' borders tiles 7 and 8, 'a' borders tile 0
        assert!(board.tile_has_boat(TilePosition::new(7).unwrap()));
        assert!(board.tile_has_boat(TilePosition::new(8).unwrap()));
        assert!(board.tile_has_boat(TilePosition::new(0).unwrap()));
        assert!(!board.tile_has_boat(TilePosition::new(4).unwrap()));
    }
}
