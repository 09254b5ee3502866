//! Injected randomness.
//!
//! The generator is a pure function of the sequence of floats its
//! random source produces, which makes every run reproducible: feed a
//! scripted source and the output is bit-identical.

use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
pub struct RngRandomSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngRandomSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.random()
    }
}

/// Replays a fixed sequence of floats, cycling when exhausted, and
/// counts how many draws were taken. Useful for reproducing a run or
/// asserting how much randomness an operation consumes.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
    calls: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom {
            values,
            pos: 0,
            calls: 0,
        }
    }

    /// A source that returns `value` on every draw.
    pub fn constant(value: f64) -> Self {
        ScriptedRandom::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.calls += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}
