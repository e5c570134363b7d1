use crate::error::MetricError;
use crate::metrics::{Metric, RunningAverage};

/// Mean absolute error accumulated over batches.
///
/// Each update contributes `mean(|predicted - target|)` weighted by the
/// batch size, so [`compute`](Metric::compute) yields the MAE over every
/// individual example seen in the window.
#[derive(Debug)]
pub struct MeanAbsoluteError {
    acc: RunningAverage,
}

impl MeanAbsoluteError {
    pub fn new() -> Self {
        Self {
            acc: RunningAverage::new("MAE"),
        }
    }

    /// Folds one batch of predictions and targets into the window.
    ///
    /// The slices must be element-aligned; a length mismatch is a
    /// [`MetricError::ShapeMismatch`]. An empty batch carries no weight and
    /// leaves the window untouched. Either way the update tally grows.
    pub fn update(&mut self, predicted: &[f64], target: &[f64]) -> Result<(), MetricError> {
        self.acc.begin_update();
        if let Some(mean) = batch_mean(predicted, target, self.acc.name(), |diff| diff.abs())? {
            self.acc.add_weighted(mean, target.len() as u64);
        }
        Ok(())
    }
}

impl Default for MeanAbsoluteError {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for MeanAbsoluteError {
    fn accumulator(&self) -> &RunningAverage {
        &self.acc
    }

    fn accumulator_mut(&mut self) -> &mut RunningAverage {
        &mut self.acc
    }
}

/// Mean of `f(predicted - target)` over one batch, `None` for an empty batch.
pub(super) fn batch_mean<F: Fn(f64) -> f64>(
    predicted: &[f64],
    target: &[f64],
    metric: &str,
    f: F,
) -> Result<Option<f64>, MetricError> {
    if predicted.len() != target.len() {
        return Err(MetricError::ShapeMismatch(format!(
            "`{}` got {} predictions for {} targets",
            metric,
            predicted.len(),
            target.len()
        )));
    }
    if target.is_empty() {
        return Ok(None);
    }
    let sum: f64 = predicted
        .iter()
        .zip(target.iter())
        .map(|(p, t)| f(p - t))
        .sum();
    Ok(Some(sum / target.len() as f64))
}
