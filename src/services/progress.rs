use std::collections::VecDeque;

use rand::Rng;

/// Source of per-tick progress increments.
///
/// The simulators never call `rand` directly so tests and demos can supply
/// deterministic sequences and assert exact end states.
pub trait ProgressSource: Send + 'static {
    /// Next increment in `[0, limit)`.
    fn next_increment(&mut self, limit: f64) -> f64;
}

/// Production source: uniform random increments.
#[derive(Debug, Default, Clone)]
pub struct RandomProgress;

impl ProgressSource for RandomProgress {
    fn next_increment(&mut self, limit: f64) -> f64 {
        rand::rng().random_range(0.0..limit)
    }
}

/// Deterministic source fed from a fixed sequence. Once the sequence is
/// exhausted it keeps returning the limit, so a driver always terminates.
#[derive(Debug, Clone)]
pub struct ScriptedProgress {
    steps: VecDeque<f64>,
}

impl ScriptedProgress {
    pub fn new(steps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl ProgressSource for ScriptedProgress {
    fn next_increment(&mut self, limit: f64) -> f64 {
        self.steps.pop_front().unwrap_or(limit)
    }
}
