use crate::metrics::{Metric, RunningAverage};

/// Tracks an externally computed average (learning rate, gradient norm, ...)
/// as a metric, with no reduction of its own.
#[derive(Debug)]
pub struct TrackedValue {
    acc: RunningAverage,
}

impl TrackedValue {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            acc: RunningAverage::new(name),
        }
    }

    /// Folds a precomputed batch average into the window with weight `num`.
    pub fn update(&mut self, avg_value: f64, num: u64) {
        self.acc.begin_update();
        self.acc.add_weighted(avg_value, num);
    }
}

impl Metric for TrackedValue {
    fn accumulator(&self) -> &RunningAverage {
        &self.acc
    }

    fn accumulator_mut(&mut self) -> &mut RunningAverage {
        &mut self.acc
    }
}
