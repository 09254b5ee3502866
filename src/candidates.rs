//! Legal-placement enumeration and random selection.

use crate::config::FleetConfig;
use crate::coord::Coord;
use crate::grid::OccupancyGrid;
use crate::random::RandomSource;
use crate::ship::{Orientation, ShipPlacement};

/// Every legal placement of a ship of `length` cells on the current
/// grid, in deterministic order: row-major over start cells (`y` then
/// `x`), Horizontal before Vertical at each start.
///
/// The order is what ties a fixed random sequence to a fixed fleet,
/// so it must not change.
pub fn enumerate_candidates(
    length: i32,
    cfg: &FleetConfig,
    grid: &OccupancyGrid,
) -> Vec<ShipPlacement> {
    let mut candidates = Vec::new();
    for y in 0..cfg.height {
        for x in 0..cfg.width {
            let start = Coord::new(x, y);
            for direction in [Orientation::Horizontal, Orientation::Vertical] {
                let placement = ShipPlacement::new(start, length, direction);
                if is_legal(&placement, cfg, grid) {
                    candidates.push(placement);
                }
            }
        }
    }
    candidates
}

/// Uniformly pick one candidate: index `floor(rng() * len)`.
///
/// An empty list is a dead end, not an error; the caller aborts the
/// attempt.
pub fn select_candidate(
    candidates: &[ShipPlacement],
    rng: &mut dyn RandomSource,
) -> Option<ShipPlacement> {
    if candidates.is_empty() {
        return None;
    }
    let index = (rng.next_f64() * candidates.len() as f64) as usize;
    Some(candidates[index])
}

fn is_legal(placement: &ShipPlacement, cfg: &FleetConfig, grid: &OccupancyGrid) -> bool {
    // Start is in bounds by construction, so checking the end covers
    // the whole run.
    if !grid.in_bounds(placement.end()) {
        return false;
    }
    for cell in placement.cells() {
        if grid.is_occupied(cell) {
            return false;
        }
    }
    // Only fully free candidates are subject to the touch rule.
    if cfg.no_touching {
        for cell in placement.cells() {
            if grid.has_occupied_neighbor(cell) {
                return false;
            }
        }
    }
    true
}
