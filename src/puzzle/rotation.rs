//! The rotation transition function
//!
//! A Move turns one tile a quarter clockwise and drags every boat on that
//! tile's border one step around its clockwise edge cycle. A Move is refused
//! when the tile borders no boat (it would change nothing the player can
//! see), or when the turned tile would collide with a neighbour.

use super::board::{Board, Boat};
use super::geometry::TilePosition;

impl Board {
    /// Whether the tile at `pos` may be rotated one quarter-turn clockwise.
    pub fn can_rotate(&self, pos: TilePosition) -> bool {
        self.rotate(pos).is_ok()
    }

    /// Rotate the tile at `pos` one quarter-turn clockwise, returning the
    /// resulting board.
    ///
    /// The original board is unchanged; on failure no board is produced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalRotation`] when the tile borders no
    /// boat or the rotation would leave the board illegal.
    #[must_use = "rotate returns a new board; the original is unchanged"]
    pub fn rotate(&self, pos: TilePosition) -> Result<Board, crate::Error> {
        if !self.tile_has_boat(pos) {
            return Err(crate::Error::IllegalRotation {
                position: pos.value(),
                reason: "tile borders no boat".to_string(),
            });
        }

        let mut tiles = *self.tiles();
        tiles[pos.value()] = tiles[pos.value()].turned();

        let boats: Vec<Boat> = self
            .boats()
            .iter()
            .map(|&boat| match pos.drag_destination(boat.edge) {
                Some(edge) => Boat { edge, ..boat },
                None => boat,
            })
            .collect();

        let next = self.replace(tiles, boats);
        if !next.is_legal() {
            return Err(crate::Error::IllegalRotation {
                position: pos.value(),
                reason: "rotation would make adjacent tiles overlap".to_string(),
            });
        }
        Ok(next)
    }

    /// All positions whose rotation is currently legal, in ascending order.
    pub fn rotatable_positions(&self) -> Vec<TilePosition> {
        TilePosition::all()
            .filter(|&pos| self.can_rotate(pos))
            .collect()
    }
}
