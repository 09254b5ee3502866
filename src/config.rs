//! Configuration normalization for untrusted JSON input.
//!
//! Parsing is total: any payload, however malformed, normalizes to a
//! usable [`FleetConfig`]. An unparsable payload falls back to an
//! empty 10×10 board; individually bad fields degrade field by field.

use serde_json::Value;

/// Normalized generator configuration.
///
/// `width`/`height` are never negative and every ship length is ≥ 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub width: i32,
    pub height: i32,
    pub ships: Vec<i32>,
    pub no_touching: bool,
}

impl FleetConfig {
    pub fn new(width: i32, height: i32, ships: Vec<i32>) -> Self {
        FleetConfig {
            width,
            height,
            ships,
            no_touching: false,
        }
    }

    /// Total number of cells the fleet will occupy.
    pub fn total_segments(&self) -> i64 {
        self.ships.iter().map(|&len| i64::from(len)).sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig::new(10, 10, Vec::new())
    }
}

/// Normalize a raw JSON payload into a [`FleetConfig`]. Never fails.
pub fn parse_config(input: &str) -> FleetConfig {
    let value: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => return FleetConfig::default(),
    };
    FleetConfig {
        width: parse_dimension(value.get("width")),
        height: parse_dimension(value.get("height")),
        ships: parse_ship_lengths(value.get("ships")),
        no_touching: value.get("noTouching").and_then(Value::as_bool).unwrap_or(false),
    }
}

/// A board dimension given as a number or a numeric string.
/// Anything else (missing, non-numeric, negative) normalizes to 0,
/// which makes any non-empty fleet fail the area check downstream.
fn parse_dimension(value: Option<&Value>) -> i32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => parse_leading_int(s),
        _ => None,
    };
    parsed
        .filter(|&n| n >= 0)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(0)
}

/// Ship lengths given as an array of numbers or a comma-delimited
/// string such as `"2,3,4"`. Tokens that fail to parse, and
/// non-positive lengths, are dropped; any other shape yields `[]`.
fn parse_ship_lengths(value: Option<&Value>) -> Vec<i32> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_i64)
            .filter(|&len| len >= 1)
            .filter_map(|len| i32::try_from(len).ok())
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .filter_map(|token| parse_leading_int(token.trim()))
            .filter(|&len| len >= 1)
            .filter_map(|len| i32::try_from(len).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse the leading integer of a string, `parseInt`-style: an
/// optional sign followed by decimal digits, ignoring any trailing
/// garbage. `"12abc"` parses as 12; `"abc"` does not parse.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}
