use crate::error::MetricError;

/// Shared accumulation state backing every metric variant.
///
/// Maintains an online weighted mean: each update contributes a per-batch
/// average together with its weight (the batch size), so
/// `value() == Σ(mean_i * weight_i) / Σ(weight_i)` — the true mean over all
/// individual examples even when batch sizes differ.
///
/// `history` and `update_count` outlive [`reset`](Self::reset): resetting
/// starts a fresh averaging window (conventionally, a new epoch) without
/// discarding previously saved epoch values or the lifetime update tally.
#[derive(Debug, Clone)]
pub struct RunningAverage {
    name: String,
    running_sum: f64,
    sample_count: u64,
    history: Vec<f64>,
    update_count: u64,
}

impl RunningAverage {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            running_sum: 0.0,
            sample_count: 0,
            history: Vec::new(),
            update_count: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks the start of an update. Must be the first statement of every
    /// variant's `update`, so the tally grows even when the update later
    /// fails validation.
    #[inline]
    pub fn begin_update(&mut self) {
        self.update_count += 1;
    }

    /// Folds one batch average into the running totals.
    #[inline]
    pub fn add_weighted(&mut self, batch_mean: f64, weight: u64) {
        self.running_sum += batch_mean * weight as f64;
        self.sample_count += weight;
    }

    /// Zeroes the averaging window. `history` and `update_count` are kept.
    pub fn reset(&mut self) {
        self.running_sum = 0.0;
        self.sample_count = 0;
    }

    /// Current weighted mean, without touching `history`.
    pub fn value(&self) -> Result<f64, MetricError> {
        if self.sample_count == 0 {
            return Err(MetricError::NoSamples {
                metric: self.name.clone(),
            });
        }
        Ok(self.running_sum / self.sample_count as f64)
    }

    /// Current weighted mean; appends it to `history` when `save` is set.
    pub fn compute(&mut self, save: bool) -> Result<f64, MetricError> {
        let value = self.value()?;
        if save {
            self.history.push(value);
        }
        Ok(value)
    }

    /// Previously saved averages, oldest first.
    #[inline]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Lifetime count of `update` calls, including failed ones.
    #[inline]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Log-friendly `"name: value"` form, value to 3 decimal places.
    pub fn render(&self) -> Result<String, MetricError> {
        Ok(format!("{}: {:8.3}", self.name, self.value()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn weighted_mean_over_uneven_batches() {
        let mut acc = RunningAverage::new("m");
        acc.begin_update();
        acc.add_weighted(1.0, 3);
        acc.begin_update();
        acc.add_weighted(5.0, 1);
        assert_abs_diff_eq!(acc.value().unwrap(), 2.0);
    }

    #[test]
    fn fresh_accumulator_cannot_compute_or_render() {
        let mut acc = RunningAverage::new("m");
        assert!(matches!(
            acc.compute(false),
            Err(MetricError::NoSamples { .. })
        ));
        assert!(matches!(acc.render(), Err(MetricError::NoSamples { .. })));
    }

    #[test]
    fn reset_clears_window_but_not_history_or_tally() {
        let mut acc = RunningAverage::new("m");
        acc.begin_update();
        acc.add_weighted(2.0, 4);
        acc.compute(true).unwrap();

        acc.reset();
        assert_eq!(acc.sample_count(), 0);
        assert_eq!(acc.history(), &[2.0]);
        assert_eq!(acc.update_count(), 1);
        assert!(matches!(
            acc.compute(false),
            Err(MetricError::NoSamples { .. })
        ));
    }

    #[test]
    fn save_appends_exactly_one_entry_per_call() {
        let mut acc = RunningAverage::new("m");
        acc.begin_update();
        acc.add_weighted(1.5, 2);

        acc.compute(false).unwrap();
        assert!(acc.history().is_empty());

        acc.compute(true).unwrap();
        acc.compute(true).unwrap();
        assert_eq!(acc.history(), &[1.5, 1.5]);
    }

    #[test]
    fn compute_does_not_consume_the_window() {
        let mut acc = RunningAverage::new("m");
        acc.begin_update();
        acc.add_weighted(3.0, 2);
        let first = acc.compute(false).unwrap();
        let second = acc.compute(false).unwrap();
        assert_eq!(first, second);
        assert_eq!(acc.sample_count(), 2);
    }

    #[test]
    fn render_formats_to_three_decimals() {
        let mut acc = RunningAverage::new("loss");
        acc.begin_update();
        acc.add_weighted(1.0 / 3.0, 3);
        assert_eq!(acc.render().unwrap(), format!("loss: {:8.3}", 1.0 / 3.0));
        assert!(acc.render().unwrap().ends_with("0.333"));
    }
}
