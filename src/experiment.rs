//! Experiment definition and caller-side validation.
//!
//! [`Experiment`] is the validated front door to the estimation core. The
//! core functions in [`analysis`](crate::analysis) are total and never
//! reject their inputs; everything the core would otherwise turn into NaN or
//! Infinity (missing spread, non-positive baseline, out-of-range confidence)
//! is rejected here instead, before the core runs.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    binomial_sample_size, bonferroni_correction, continuous_sample_size, ratio_sample_size,
};
use crate::constants::{DEFAULT_CONFIDENCE, DEFAULT_POWER};
use crate::error::InputError;
use crate::result::SampleSizeReport;
use crate::types::Metric;

/// A planned A/B experiment on one metric.
///
/// Built with method chaining; unset knobs keep their defaults
/// (significance 0.95, power 0.8, one variation).
///
/// ```
/// use minsample::{Experiment, Metric};
///
/// let report = Experiment::new(Metric::Binomial { baseline_pct: 10.0 }, 10.0)
///     .power(0.8)
///     .report()
///     .unwrap();
///
/// assert_eq!(report.groups, 2);
/// assert!(report.per_group > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    metric: Metric,
    mde_pct: f64,
    significance: f64,
    power: f64,
    variations: u32,
}

impl Experiment {
    /// Create an experiment for a metric with a relative MDE (percent),
    /// using default significance, power and a single variation.
    pub fn new(metric: Metric, mde_pct: f64) -> Self {
        Self {
            metric,
            mde_pct,
            significance: DEFAULT_CONFIDENCE,
            power: DEFAULT_POWER,
            variations: 1,
        }
    }

    /// Set the nominal confidence level (default 0.95).
    pub fn significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    /// Set the statistical power (default 0.8).
    pub fn power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the number of treatment arms excluding control (default 1).
    pub fn variations(mut self, variations: u32) -> Self {
        self.variations = variations;
        self
    }

    /// Check the caller contract the estimation core relies on.
    ///
    /// The standard-deviation requirement for continuous and ratio metrics
    /// lives here: the core itself would silently produce NaN/Infinity.
    pub fn validate(&self) -> Result<(), InputError> {
        let kind = self.metric.kind();

        match self.metric {
            Metric::Binomial { baseline_pct } => {
                if !(baseline_pct > 0.0) {
                    return Err(InputError::InvalidBaseline {
                        kind,
                        value: baseline_pct,
                    });
                }
            }
            Metric::Continuous { mean, std_dev } | Metric::Ratio { mean, std_dev } => {
                if !(mean > 0.0) {
                    return Err(InputError::InvalidBaseline { kind, value: mean });
                }
                if !(std_dev > 0.0) {
                    return Err(InputError::InvalidStandardDeviation {
                        kind,
                        value: std_dev,
                    });
                }
            }
        }

        if !(self.mde_pct > 0.0) {
            return Err(InputError::InvalidMde(self.mde_pct));
        }
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(InputError::InvalidSignificance(self.significance));
        }
        if !(self.power > 0.0 && self.power < 1.0) {
            return Err(InputError::InvalidPower(self.power));
        }
        if self.variations < 1 {
            return Err(InputError::InvalidVariations(self.variations));
        }

        Ok(())
    }

    /// Validate, then compute the required per-group sample size.
    pub fn sample_size(&self) -> Result<f64, InputError> {
        self.validate()?;

        let n = match self.metric {
            Metric::Binomial { baseline_pct } => binomial_sample_size(
                baseline_pct,
                self.mde_pct,
                self.significance,
                self.power,
                self.variations,
            ),
            Metric::Continuous { mean, std_dev } => continuous_sample_size(
                mean,
                std_dev,
                self.mde_pct,
                self.significance,
                self.power,
                self.variations,
            ),
            Metric::Ratio { mean, std_dev } => ratio_sample_size(
                mean,
                std_dev,
                self.mde_pct,
                self.significance,
                self.power,
                self.variations,
            ),
        };

        Ok(n)
    }

    /// Validate, then compute a full report including the total across all
    /// groups (control plus every variation).
    pub fn report(&self) -> Result<SampleSizeReport, InputError> {
        let per_group = self.sample_size()?;
        let groups = self.variations + 1;

        Ok(SampleSizeReport {
            metric: self.metric.kind(),
            per_group,
            groups,
            total: per_group * f64::from(groups),
            corrected_significance: bonferroni_correction(self.significance, self.variations),
        })
    }
}
