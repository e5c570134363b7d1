use crate::error::MetricError;
use crate::metrics::{Metric, RunningAverage};

/// Value returned by an injected loss function.
///
/// The loss contract requires a zero-dimensional average over the batch;
/// anything with a rank — even a single-element vector — violates it.
#[derive(Debug, Clone, PartialEq)]
pub enum LossOutput {
    /// The batch-average loss.
    Scalar(f64),
    /// A rank-1 result. Never accepted by [`LossMetric::update`].
    Vector(Vec<f64>),
}

/// Loss collaborator: `(predicted, target, extras) -> LossOutput`.
pub type LossFn<X> = Box<dyn Fn(&[f64], &[f64], &X) -> LossOutput>;

/// Running average of an injected loss function.
///
/// The extras type `X` carries whatever side inputs the loss needs beyond
/// predictions and targets (sample weights, regularization state, ...);
/// losses without extras use the `()` default and pass `&()`.
pub struct LossMetric<X = ()> {
    acc: RunningAverage,
    loss_fn: LossFn<X>,
}

impl<X> LossMetric<X> {
    /// Wraps `loss_fn` under the default `"Loss"` label.
    pub fn new<F>(loss_fn: F) -> Self
    where
        F: Fn(&[f64], &[f64], &X) -> LossOutput + 'static,
    {
        Self::with_name("Loss", loss_fn)
    }

    /// Wraps `loss_fn` under the collaborator's own name.
    pub fn with_name<N, F>(name: N, loss_fn: F) -> Self
    where
        N: Into<String>,
        F: Fn(&[f64], &[f64], &X) -> LossOutput + 'static,
    {
        Self {
            acc: RunningAverage::new(name),
            loss_fn: Box::new(loss_fn),
        }
    }

    /// Applies the loss function to one batch and folds its average into
    /// the window, weighted by `target.len()`.
    ///
    /// Fails with [`MetricError::ShapeMismatch`] when the loss function
    /// returns a non-scalar; the update tally grows before that check, so a
    /// failing call is still counted.
    pub fn update(&mut self, predicted: &[f64], target: &[f64], extra: &X) -> Result<(), MetricError> {
        self.acc.begin_update();
        let average_loss = match (self.loss_fn)(predicted, target, extra) {
            LossOutput::Scalar(v) => v,
            LossOutput::Vector(v) => {
                return Err(MetricError::ShapeMismatch(format!(
                    "loss function for `{}` returned a rank-1 value of length {} instead of the average loss",
                    self.acc.name(),
                    v.len()
                )));
            }
        };
        if !target.is_empty() {
            self.acc.add_weighted(average_loss, target.len() as u64);
        }
        Ok(())
    }
}

impl<X> Metric for LossMetric<X> {
    fn accumulator(&self) -> &RunningAverage {
        &self.acc
    }

    fn accumulator_mut(&mut self) -> &mut RunningAverage {
        &mut self.acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mean_abs(predicted: &[f64], target: &[f64], _extra: &()) -> LossOutput {
        let sum: f64 = predicted
            .iter()
            .zip(target.iter())
            .map(|(p, t)| (p - t).abs())
            .sum();
        LossOutput::Scalar(sum / target.len() as f64)
    }

    #[test]
    fn averages_the_injected_loss_across_batches() {
        let mut loss = LossMetric::with_name("L1Loss", mean_abs);
        loss.update(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], &()).unwrap();
        loss.update(&[5.0], &[0.0], &()).unwrap();
        assert_abs_diff_eq!(loss.compute(false).unwrap(), 2.0);
        assert_eq!(loss.name(), "L1Loss");
    }

    #[test]
    fn non_scalar_return_is_a_shape_error() {
        let mut loss: LossMetric = LossMetric::new(|_p, _t, _x: &()| {
            LossOutput::Vector(vec![0.5])
        });
        let err = loss.update(&[1.0], &[1.0], &()).unwrap_err();
        assert!(matches!(err, MetricError::ShapeMismatch(_)));
        assert_eq!(loss.update_count(), 1);
        assert!(matches!(
            loss.compute(false),
            Err(MetricError::NoSamples { .. })
        ));
    }

    #[test]
    fn forwards_extras_to_the_loss_function() {
        let mut loss: LossMetric<f64> =
            LossMetric::new(|_p, _t, scale: &f64| LossOutput::Scalar(2.0 * scale));
        loss.update(&[0.0, 0.0], &[0.0, 0.0], &3.0).unwrap();
        assert_abs_diff_eq!(loss.compute(false).unwrap(), 6.0);
    }

    #[test]
    fn default_label_is_loss() {
        let loss: LossMetric = LossMetric::new(|_p, _t, _x: &()| LossOutput::Scalar(0.0));
        assert_eq!(loss.name(), "Loss");
    }
}
