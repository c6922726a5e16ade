//! Input validation errors.
//!
//! These errors belong to the caller-facing validation layer
//! ([`Experiment::validate`](crate::Experiment::validate)). The estimation
//! core itself never validates and never fails: malformed numeric inputs fed
//! directly to the `*_sample_size` functions propagate as NaN or Infinity.

use thiserror::Error;

use crate::types::MetricKind;

/// Error rejecting an experiment definition before estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Continuous and ratio metrics need a positive standard deviation.
    #[error("standard deviation must be positive for {kind} metrics, got {value}")]
    InvalidStandardDeviation {
        /// Metric family the requirement applies to.
        kind: MetricKind,
        /// Offending value.
        value: f64,
    },

    /// Baseline rate or mean must be positive.
    #[error("baseline value must be positive for {kind} metrics, got {value}")]
    InvalidBaseline {
        /// Metric family being validated.
        kind: MetricKind,
        /// Offending value.
        value: f64,
    },

    /// Minimum detectable effect must be a positive percentage.
    #[error("minimum detectable effect must be positive, got {0}")]
    InvalidMde(f64),

    /// Confidence level must lie strictly between 0 and 1.
    #[error("significance must be in (0, 1), got {0}")]
    InvalidSignificance(f64),

    /// Power must lie strictly between 0 and 1.
    #[error("power must be in (0, 1), got {0}")]
    InvalidPower(f64),

    /// At least one treatment arm is required.
    #[error("variations must be at least 1, got {0}")]
    InvalidVariations(u32),
}
