//! Fleet assembly: shuffle, place ship-by-ship, retry on dead ends.

use log::debug;
use serde_json::json;

use crate::candidates::{enumerate_candidates, select_candidate};
use crate::config::{parse_config, FleetConfig};
use crate::fleet::Fleet;
use crate::grid::OccupancyGrid;
use crate::random::RandomSource;
use crate::ship::ShipPlacement;

/// Upper bound on full placement attempts before giving up.
///
/// Greedy random placement can paint itself into a corner even when a
/// valid arrangement exists; a fresh shuffle and fresh choices resolve
/// that with high probability for reasonably loose configurations.
pub const MAX_TRIES: u32 = 100;

/// Terminal generator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested ships hold more cells than the board has.
    AreaExceeded,
    /// Every attempt dead-ended.
    RetriesExhausted,
}

impl core::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenerateError::AreaExceeded => write!(f, "Ship segments exceed board area"),
            GenerateError::RetriesExhausted => {
                write!(f, "Failed to generate fleet after max retries")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Fisher–Yates shuffle driven by the injected source:
/// `j = floor(rng() * (i + 1))` for `i` from `len - 1` down to 1.
/// Draws `len - 1` floats; none at all for lists shorter than 2.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
}

/// One full placement attempt over an already shuffled length list.
///
/// Ships are placed one at a time against the growing grid; the first
/// ship with no legal candidate aborts the whole attempt and its
/// partial placements are discarded.
fn attempt_placement(
    cfg: &FleetConfig,
    lengths: &[i32],
    rng: &mut dyn RandomSource,
) -> Option<Vec<ShipPlacement>> {
    let mut grid = OccupancyGrid::new(cfg.width, cfg.height);
    let mut placed = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let candidates = enumerate_candidates(length, cfg, &grid);
        let chosen = select_candidate(&candidates, rng)?;
        for cell in chosen.cells() {
            grid.occupy(cell);
        }
        placed.push(chosen);
    }
    Some(placed)
}

/// Generate one valid fleet for `cfg`, or a terminal error.
///
/// The area check runs before any randomness is consumed. Each retry
/// starts from a fresh shuffle and a fresh, empty grid.
pub fn generate(cfg: &FleetConfig, rng: &mut dyn RandomSource) -> Result<Fleet, GenerateError> {
    if cfg.total_segments() > i64::from(cfg.width) * i64::from(cfg.height) {
        return Err(GenerateError::AreaExceeded);
    }
    for attempt in 1..=MAX_TRIES {
        // each attempt shuffles a fresh copy of the input order
        let mut lengths = cfg.ships.clone();
        shuffle(&mut lengths, rng);
        match attempt_placement(cfg, &lengths, rng) {
            Some(ships) => {
                return Ok(Fleet {
                    width: cfg.width,
                    height: cfg.height,
                    ships,
                })
            }
            None => debug!("placement attempt {attempt} dead-ended, retrying"),
        }
    }
    Err(GenerateError::RetriesExhausted)
}

/// JSON-in/JSON-out boundary.
///
/// Malformed input degrades to the default empty 10×10 configuration
/// rather than failing; terminal errors come back as `{"error": ...}`
/// payloads. Never panics.
pub fn generate_fleet(input: &str, rng: &mut dyn RandomSource) -> String {
    let cfg = parse_config(input);
    match generate(&cfg, rng) {
        // Serializing a fleet of plain integers cannot fail; the
        // fallback keeps the documented error payloads exhaustive.
        Ok(fleet) => serde_json::to_string(&fleet)
            .unwrap_or_else(|_| error_payload(&GenerateError::RetriesExhausted.to_string())),
        Err(err) => error_payload(&err.to_string()),
    }
}

fn error_payload(message: &str) -> String {
    json!({ "error": message }).to_string()
}
