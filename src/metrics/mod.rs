mod accumulator;
mod loss;
mod mae;
mod measurement;
mod metric;
mod mse;
mod value;

pub use accumulator::RunningAverage;
pub use loss::{LossFn, LossMetric, LossOutput};
pub use mae::MeanAbsoluteError;
pub use measurement::Measurement;
pub use metric::Metric;
pub use mse::MeanSquaredError;
pub use value::TrackedValue;
