//! Battleship Solitaire fleet generation.
//!
//! Given a board size and a list of ship lengths, produce one valid,
//! randomized, non-overlapping (optionally non-touching) placement of
//! every ship. The whole computation is a pure function of an
//! injected [`RandomSource`], so fixed random sequences reproduce
//! fixed fleets.

mod candidates;
mod clues;
mod config;
mod coord;
mod fleet;
mod generator;
mod grid;
mod logging;
mod random;
mod ship;

pub use candidates::{enumerate_candidates, select_candidate};
pub use clues::{clues_for, generate_clues, parse_fleet, Clues, CluesError};
pub use config::{parse_config, FleetConfig};
pub use coord::Coord;
pub use fleet::Fleet;
pub use generator::{generate, generate_fleet, shuffle, GenerateError, MAX_TRIES};
pub use grid::OccupancyGrid;
pub use logging::init_logging;
pub use random::{RandomSource, RngRandomSource, ScriptedRandom};
pub use ship::{Orientation, ShipPlacement};
