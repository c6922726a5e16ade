//! Constant quantile tables used throughout the crate.
//!
//! Both tables are keyed by confidence level and looked up by exact equality;
//! a level that is not a key resolves to the 0.95 entry. This fallback is
//! deliberate: corrected confidence levels produced by
//! [`bonferroni_correction`](crate::bonferroni_correction) rarely land on a
//! table key, and they must resolve to the default rather than interpolate.

/// Confidence level every table falls back to on a lookup miss.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default statistical power when the caller does not override it.
pub const DEFAULT_POWER: f64 = 0.8;

/// Number of t-based refinement passes in the estimation loop.
///
/// This is a behavioral contract, not a convergence tolerance: every
/// calculation performs exactly this many passes regardless of input.
pub const REFINEMENT_PASSES: usize = 4;

/// Standard normal quantiles, `(confidence level, z)`.
///
/// Values are Φ⁻¹(level) rounded to two decimals, matching the table the
/// estimator was calibrated against (0.95 → 1.65, not the two-tailed 1.96).
pub const NORMAL_QUANTILES: &[(f64, f64)] = &[
    (0.8, 0.84),
    (0.85, 1.04),
    (0.9, 1.28),
    (0.95, 1.65),
    (0.99, 2.33),
    (0.995, 2.58),
    (0.999, 3.09),
];

/// Reference Student-t quantiles at 30 degrees of freedom,
/// `(confidence level, t)`.
///
/// Only used as a seed for near-degenerate sample sizes (df < 3), never as a
/// final quantile; see [`t_value`](crate::statistics::t_value).
pub const T_REFERENCE_QUANTILES: &[(f64, f64)] = &[
    (0.8, 0.85),
    (0.85, 1.05),
    (0.9, 1.31),
    (0.95, 1.70),
    (0.99, 2.46),
    (0.995, 2.75),
    (0.999, 3.39),
];
