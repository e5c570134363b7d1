use crate::error::MetricError;
use crate::metrics::{Measurement, RunningAverage};

/// Running-average metric tracked across the batches of an epoch.
///
/// Every variant shares the same lifecycle: zero or more `update` calls per
/// epoch (each folding one batch's average into the window), then
/// [`compute`](Self::compute) at the epoch boundary — optionally saving the
/// value into the metric's history — followed by [`reset`](Self::reset)
/// before the next epoch.
///
/// `update` itself is *not* part of this trait: its signature varies per
/// variant (predictions and targets for the error metrics, a loss
/// collaborator's inputs for [`LossMetric`](crate::metrics::LossMetric), a
/// precomputed average for [`TrackedValue`](crate::metrics::TrackedValue)).
/// Variants expose it as an inherent method.
pub trait Metric {
    /// Shared accumulation state.
    fn accumulator(&self) -> &RunningAverage;

    fn accumulator_mut(&mut self) -> &mut RunningAverage;

    /// Identifying label used in rendered output.
    fn name(&self) -> &str {
        self.accumulator().name()
    }

    /// Starts a fresh averaging window. History and the lifetime update
    /// tally are preserved.
    fn reset(&mut self) {
        self.accumulator_mut().reset();
    }

    /// Returns the current weighted average over the window.
    ///
    /// Fails with [`MetricError::NoSamples`] before the first update of a
    /// window. When `save` is set the value is also appended to
    /// [`history`](Self::history).
    fn compute(&mut self, save: bool) -> Result<f64, MetricError> {
        self.accumulator_mut().compute(save)
    }

    /// Averages saved by earlier `compute(save: true)` calls, oldest first.
    fn history(&self) -> &[f64] {
        self.accumulator().history()
    }

    /// Lifetime count of `update` calls, failed ones included.
    fn update_count(&self) -> u64 {
        self.accumulator().update_count()
    }

    /// `"name: value"` form for progress logging. Fails like
    /// [`compute`](Self::compute) when the window is empty.
    fn render(&self) -> Result<String, MetricError> {
        self.accumulator().render()
    }

    /// Snapshot of the current value as a named [`Measurement`].
    fn measurement(&self) -> Result<Measurement, MetricError> {
        Ok(Measurement::new(self.name(), self.accumulator().value()?))
    }
}
