//! Row and column clue counts for a revealed fleet.

use serde::Serialize;
use serde_json::{json, Value};

use crate::fleet::Fleet;

/// Per-row and per-column occupied-cell counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clues {
    #[serde(rename = "rowClues")]
    pub row_clues: Vec<u32>,
    #[serde(rename = "colClues")]
    pub col_clues: Vec<u32>,
}

/// Failures when reading a fleet payload for clue generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CluesError {
    /// Input was not JSON at all.
    InvalidJson,
    /// JSON parsed but is not a fleet object (numeric width/height
    /// and a ships array).
    InvalidFleet,
}

impl core::fmt::Display for CluesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CluesError::InvalidJson => write!(f, "Invalid input JSON"),
            CluesError::InvalidFleet => write!(f, "Invalid fleet structure"),
        }
    }
}

impl std::error::Error for CluesError {}

/// Count ship cells per row and per column. Ship cells lying outside
/// the board are skipped rather than counted.
pub fn clues_for(fleet: &Fleet) -> Clues {
    let width = fleet.width.max(0) as usize;
    let height = fleet.height.max(0) as usize;
    let mut clues = Clues {
        row_clues: vec![0; height],
        col_clues: vec![0; width],
    };
    for cell in fleet.cells() {
        if cell.in_bounds(fleet.width, fleet.height) {
            clues.row_clues[cell.y as usize] += 1;
            clues.col_clues[cell.x as usize] += 1;
        }
    }
    clues
}

/// Parse a fleet payload, distinguishing non-JSON input from JSON
/// that is not a fleet.
pub fn parse_fleet(input: &str) -> Result<Fleet, CluesError> {
    let value: Value = serde_json::from_str(input).map_err(|_| CluesError::InvalidJson)?;
    serde_json::from_value(value).map_err(|_| CluesError::InvalidFleet)
}

/// JSON-in/JSON-out boundary: `{"rowClues":[..],"colClues":[..]}` or
/// `{"error": ...}`. Never panics.
pub fn generate_clues(input: &str) -> String {
    match parse_fleet(input) {
        Ok(fleet) => {
            let clues = clues_for(&fleet);
            serde_json::to_string(&clues)
                .unwrap_or_else(|_| json!({ "error": CluesError::InvalidFleet.to_string() }).to_string())
        }
        Err(err) => json!({ "error": err.to_string() }).to_string(),
    }
}
