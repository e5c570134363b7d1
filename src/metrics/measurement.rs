use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Named snapshot of a metric's current value.
///
/// Produced by [`Metric::measurement`](crate::metrics::Metric::measurement)
/// for logging or progress-reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {:8.3}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_metric_render_format() {
        let m = Measurement::new("MAE", 2.0);
        assert_eq!(m.to_string(), "MAE:    2.000");
    }

    #[test]
    fn serde_round_trip() {
        let m = Measurement::new("lr", 0.15);
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
