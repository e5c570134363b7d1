use crate::error::MetricError;
use crate::metrics::mae::batch_mean;
use crate::metrics::{Metric, RunningAverage};

/// Mean squared error accumulated over batches.
///
/// Each update contributes `mean((predicted - target)^2)` weighted by the
/// batch size.
#[derive(Debug)]
pub struct MeanSquaredError {
    acc: RunningAverage,
}

impl MeanSquaredError {
    pub fn new() -> Self {
        Self {
            acc: RunningAverage::new("MSE"),
        }
    }

    /// Folds one batch of predictions and targets into the window.
    ///
    /// Same contract as [`MeanAbsoluteError::update`](crate::metrics::MeanAbsoluteError::update):
    /// mismatched slice lengths fail with [`MetricError::ShapeMismatch`], an
    /// empty batch carries no weight, and the update tally always grows.
    pub fn update(&mut self, predicted: &[f64], target: &[f64]) -> Result<(), MetricError> {
        self.acc.begin_update();
        if let Some(mean) = batch_mean(predicted, target, self.acc.name(), |diff| diff * diff)? {
            self.acc.add_weighted(mean, target.len() as u64);
        }
        Ok(())
    }
}

impl Default for MeanSquaredError {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for MeanSquaredError {
    fn accumulator(&self) -> &RunningAverage {
        &self.acc
    }

    fn accumulator_mut(&mut self) -> &mut RunningAverage {
        &mut self.acc
    }
}
