//! The revealed fleet: the generator's result structure.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::ship::ShipPlacement;

/// A complete set of ship placements on a board.
///
/// Ships appear in the order they were placed, which is the shuffled
/// order of the input lengths, not the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub width: i32,
    pub height: i32,
    pub ships: Vec<ShipPlacement>,
}

impl Fleet {
    /// Total number of cells occupied by the fleet's ships.
    pub fn total_segments(&self) -> i64 {
        self.ships.iter().map(|s| i64::from(s.length)).sum()
    }

    /// Every cell of every ship, in placement order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.ships.iter().flat_map(|s| s.cells())
    }
}

/// Monospace text rendering: `·` for water, `#` for ship cells.
/// Ship cells falling outside the board are skipped.
impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width.max(0) as usize;
        let height = self.height.max(0) as usize;
        let mut board = vec![vec!['\u{b7}'; width]; height];
        for cell in self.cells() {
            if cell.in_bounds(self.width, self.height) {
                board[cell.y as usize][cell.x as usize] = '#';
            }
        }
        for (y, row) in board.iter().enumerate() {
            for (x, glyph) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph)?;
            }
            if y + 1 < height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
