//! Estimation result types.

use serde::{Deserialize, Serialize};

use crate::types::MetricKind;

/// Full result of a sample-size estimation.
///
/// `per_group` is the engine's raw output: an integral float when the inputs
/// are well-formed, NaN/Infinity otherwise. `total` spreads it across all
/// groups including the control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeReport {
    /// Metric family the estimate was computed for.
    pub metric: MetricKind,

    /// Required sample size per group (control or any variation).
    pub per_group: f64,

    /// Number of groups in the experiment (`variations + 1` for control).
    pub groups: u32,

    /// Required sample size across all groups (`per_group × groups`).
    pub total: f64,

    /// Confidence level actually used after multiple-comparison correction.
    pub corrected_significance: f64,
}
