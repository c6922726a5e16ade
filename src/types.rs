//! Metric family types.

use serde::{Deserialize, Serialize};

/// Metric family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Conversion-style metric: a proportion between 0 and 100 percent.
    Binomial,
    /// Continuous metric: an arbitrary-scale mean with a standard deviation.
    Continuous,
    /// Ratio metric: characterized by its coefficient of variation.
    Ratio,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricKind::Binomial => write!(f, "binomial"),
            MetricKind::Continuous => write!(f, "continuous"),
            MetricKind::Ratio => write!(f, "ratio"),
        }
    }
}

/// A metric under test, with its family-specific baseline parameters.
///
/// The binomial family carries only a baseline rate; the continuous and
/// ratio families additionally require a standard deviation. That
/// requirement is enforced by [`Experiment::validate`](crate::Experiment),
/// not by the estimation core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    /// Conversion rate metric.
    Binomial {
        /// Current conversion rate as a percentage (0–100).
        baseline_pct: f64,
    },
    /// Continuous (mean) metric.
    Continuous {
        /// Current mean of the metric.
        mean: f64,
        /// Standard deviation of the metric.
        std_dev: f64,
    },
    /// Ratio metric.
    Ratio {
        /// Current mean of the ratio.
        mean: f64,
        /// Standard deviation of the ratio.
        std_dev: f64,
    },
}

impl Metric {
    /// Family this metric belongs to.
    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::Binomial { .. } => MetricKind::Binomial,
            Metric::Continuous { .. } => MetricKind::Continuous,
            Metric::Ratio { .. } => MetricKind::Ratio,
        }
    }
}
