//! # minsample
//!
//! Minimum per-group sample size estimation for A/B experiments.
//!
//! Given a metric's baseline, the relative effect worth detecting, a
//! confidence level and a power target, this crate answers: how many subjects
//! does each group need? Three metric families are supported:
//! - **Binomial** (conversion rates)
//! - **Continuous** (means with a standard deviation)
//! - **Ratio** (characterized by coefficient of variation)
//!
//! Estimates start from a normal approximation and are refined through a
//! fixed number of Student-t passes, with a multiple-comparison correction
//! when several treatment arms share one control. The quantile machinery is
//! table-driven with documented fallbacks; exact inverse-CDF evaluation is
//! out of scope.
//!
//! ## Quick Start
//!
//! ```
//! use minsample::{Experiment, Metric};
//!
//! let per_group = Experiment::new(Metric::Binomial { baseline_pct: 10.0 }, 10.0)
//!     .significance(0.95)
//!     .power(0.8)
//!     .sample_size()
//!     .unwrap();
//!
//! assert!(per_group > 0.0);
//! ```
//!
//! The raw estimators are also exposed directly. They perform no validation
//! and are total over the numeric domain: degenerate inputs yield NaN or
//! Infinity rather than an error.
//!
//! ```
//! use minsample::binomial_sample_size;
//!
//! let n = binomial_sample_size(10.0, 10.0, 0.95, 0.8, 1);
//! assert!(n.fract() == 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod error;
mod experiment;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod statistics;

// Re-exports for public API
pub use analysis::{
    binomial_sample_size, bonferroni_correction, continuous_sample_size, estimate_sample_size,
    ratio_sample_size, BinomialEffect, ContinuousEffect, EffectModel, RatioEffect,
};
pub use constants::{
    DEFAULT_CONFIDENCE, DEFAULT_POWER, NORMAL_QUANTILES, REFINEMENT_PASSES, T_REFERENCE_QUANTILES,
};
pub use error::InputError;
pub use experiment::Experiment;
pub use result::SampleSizeReport;
pub use types::{Metric, MetricKind};
