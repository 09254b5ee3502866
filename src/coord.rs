//! Board coordinates and the 8-neighbourhood used by the no-touching rule.

use serde::{Deserialize, Serialize};

/// A board cell, 0-indexed from the top-left corner.
///
/// Components are signed so that neighbours of edge cells (e.g. `(-1, 0)`)
/// are representable; bounds checks reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// `true` when the cell lies on a `width`×`height` board.
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }

    /// The eight surrounding cells, in dy-then-dx order, skipping the
    /// cell itself. May yield out-of-bounds coordinates.
    pub fn neighbors8(self) -> impl Iterator<Item = Coord> {
        const OFFSETS: [(i32, i32); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Coord::new(self.x + dx, self.y + dy))
    }
}
