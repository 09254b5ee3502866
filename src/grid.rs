//! Dense occupancy tracking for one placement attempt.

use crate::coord::Coord;

/// Which cells of a `width`×`height` board are already claimed by a
/// ship. One grid lives for exactly one placement attempt: created
/// empty, grown monotonically, discarded if the attempt dead-ends.
///
/// Cells are stored as a flat `Vec<bool>` indexed `y * width + x`.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an empty grid. Zero-area boards are valid and hold no cells.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        OccupancyGrid {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` when the cell lies on this board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    /// `true` when the cell is claimed. Out-of-bounds cells are never
    /// occupied.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self.cells[self.index(coord)]
    }

    /// Claim a cell. Callers only occupy in-bounds cells they have
    /// already verified to be free.
    pub fn occupy(&mut self, coord: Coord) {
        if self.in_bounds(coord) {
            let idx = self.index(coord);
            self.cells[idx] = true;
        }
    }

    /// `true` when any of the eight cells around `coord` is occupied.
    /// Out-of-bounds neighbours are ignored.
    pub fn has_occupied_neighbor(&self, coord: Coord) -> bool {
        coord.neighbors8().any(|n| self.is_occupied(n))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.width as usize) + coord.x as usize
    }
}
