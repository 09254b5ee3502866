//! Ship placements: orientation, occupied cells, and wire shape.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Orientation of a ship on the board.
///
/// Serialized as `"H"` / `"V"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

/// A ship occupying `length` consecutive cells from `start` along
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipPlacement {
    pub start: Coord,
    pub length: i32,
    pub direction: Orientation,
}

impl ShipPlacement {
    pub const fn new(start: Coord, length: i32, direction: Orientation) -> Self {
        ShipPlacement {
            start,
            length,
            direction,
        }
    }

    /// The `i`-th cell of the ship, counting from `start`.
    pub fn cell(&self, i: i32) -> Coord {
        match self.direction {
            Orientation::Horizontal => Coord::new(self.start.x + i, self.start.y),
            Orientation::Vertical => Coord::new(self.start.x, self.start.y + i),
        }
    }

    /// The last cell of the ship.
    pub fn end(&self) -> Coord {
        self.cell(self.length - 1)
    }

    /// All cells of the ship, from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| self.cell(i))
    }
}
