use thiserror::Error;

/// Failure modes of the metric accumulators.
///
/// Both variants signal caller-side contract violations; neither is a
/// transient condition worth retrying.
#[derive(Debug, Error)]
pub enum MetricError {
    /// `compute`/`render` was called before any sample was accumulated.
    #[error("metric `{metric}` must receive at least one sample before it can be computed")]
    NoSamples { metric: String },

    /// An update received inputs whose shape breaks the metric's contract
    /// (mismatched batch slices, or a loss function returning a non-scalar).
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}
