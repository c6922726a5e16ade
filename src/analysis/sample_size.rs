//! Per-group sample-size estimation.
//!
//! All three metric families share one iteration shape: correct the
//! confidence level for multiple comparisons, compute a normal-approximation
//! estimate, then run a fixed number of Student-t refinement passes where the
//! degrees of freedom are re-derived from the current (integer) estimate.
//! The families differ only in their variance/effect model, expressed here as
//! [`EffectModel`] implementations.
//!
//! The estimators are total over their numeric domain: degenerate inputs
//! (zero mean, zero baseline, zero standard deviation) produce NaN or
//! Infinity through ordinary float arithmetic and are returned as-is. Input
//! validation belongs to the caller; see [`Experiment`](crate::Experiment).

use crate::analysis::correction::bonferroni_correction;
use crate::constants::REFINEMENT_PASSES;
use crate::statistics::{t_value, z_score};

/// Variance/effect model of one metric family.
///
/// An implementation maps a pair of quantiles (one for the significance
/// side, one for the power side) to an unrounded per-group sample size. The
/// same formula is evaluated with normal quantiles for the initial estimate
/// and with t-quantiles in every refinement pass.
pub trait EffectModel {
    /// Unrounded per-group sample size for the given quantile pair.
    fn estimate(&self, quantile_alpha: f64, quantile_beta: f64) -> f64;
}

/// Conversion-style metric: baseline proportion with a relative lift.
#[derive(Debug, Clone, Copy)]
pub struct BinomialEffect {
    /// Baseline conversion rate as a percentage (0–100).
    pub baseline_pct: f64,
    /// Minimum detectable effect as a relative percentage.
    pub mde_pct: f64,
}

impl EffectModel for BinomialEffect {
    fn estimate(&self, quantile_alpha: f64, quantile_beta: f64) -> f64 {
        let p1 = self.baseline_pct / 100.0;
        let p2 = p1 * (1.0 + self.mde_pct / 100.0);
        let sd1 = (2.0 * p1 * (1.0 - p1)).sqrt();
        let sd2 = (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt();
        let spread = quantile_alpha * sd1 + quantile_beta * sd2;
        let effect = p2 - p1;
        (spread * spread) / (effect * effect)
    }
}

/// Mean-style metric: absolute effect derived from the relative MDE.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousEffect {
    /// Baseline mean of the metric.
    pub mean: f64,
    /// Standard deviation of the metric.
    pub std_dev: f64,
    /// Minimum detectable effect as a relative percentage.
    pub mde_pct: f64,
}

impl EffectModel for ContinuousEffect {
    fn estimate(&self, quantile_alpha: f64, quantile_beta: f64) -> f64 {
        let mde_abs = self.mde_pct / 100.0 * self.mean;
        let quantiles = quantile_alpha + quantile_beta;
        2.0 * self.std_dev * self.std_dev * quantiles * quantiles / (mde_abs * mde_abs)
    }
}

/// Ratio metric: coefficient of variation against the relative MDE.
///
/// Unlike [`ContinuousEffect`], the denominator is the relative MDE itself,
/// not an absolute effect size.
#[derive(Debug, Clone, Copy)]
pub struct RatioEffect {
    /// Baseline mean of the ratio.
    pub mean: f64,
    /// Standard deviation of the ratio.
    pub std_dev: f64,
    /// Minimum detectable effect as a relative percentage.
    pub mde_pct: f64,
}

impl EffectModel for RatioEffect {
    fn estimate(&self, quantile_alpha: f64, quantile_beta: f64) -> f64 {
        let cv = self.std_dev / self.mean;
        let quantiles = quantile_alpha + quantile_beta;
        let mde = self.mde_pct / 100.0;
        2.0 * cv * cv * quantiles * quantiles / (mde * mde)
    }
}

/// Run the shared refinement loop over an effect model.
///
/// The loop always performs exactly [`REFINEMENT_PASSES`] t-based passes; it
/// does not check convergence, and the value returned is the last pass's
/// recomputation. Each pass rounds up immediately so the next pass derives
/// its degrees of freedom (`2n − 2`, two-sample pooled) from an integer
/// estimate. NaN and Infinity flow through the loop unchanged in kind.
pub fn estimate_sample_size(
    model: &impl EffectModel,
    significance: f64,
    power: f64,
    variations: u32,
) -> f64 {
    let confidence = bonferroni_correction(significance, variations);

    let mut estimate = model.estimate(z_score(confidence), z_score(power)).ceil();

    for _ in 0..REFINEMENT_PASSES {
        let df = 2.0 * estimate - 2.0;
        let t_alpha = t_value(df, confidence);
        let t_beta = t_value(df, power);
        estimate = model.estimate(t_alpha, t_beta).ceil();
    }

    estimate
}

/// Per-group sample size for a binomial (conversion) metric.
///
/// `baseline_pct` is the current conversion rate as a percentage (0–100) and
/// `mde_pct` the relative lift to detect. Returns an integral value when the
/// inputs are well-formed, NaN/Infinity otherwise.
///
/// ```
/// use minsample::binomial_sample_size;
///
/// let n = binomial_sample_size(10.0, 10.0, 0.95, 0.8, 1);
/// assert!(n > 0.0 && n.fract() == 0.0);
/// ```
pub fn binomial_sample_size(
    baseline_pct: f64,
    mde_pct: f64,
    significance: f64,
    power: f64,
    variations: u32,
) -> f64 {
    let model = BinomialEffect {
        baseline_pct,
        mde_pct,
    };
    estimate_sample_size(&model, significance, power, variations)
}

/// Per-group sample size for a continuous (mean) metric.
///
/// The detectable effect is `mde_pct`% of `mean`, taken as an absolute
/// difference of means with common standard deviation `std_dev`.
pub fn continuous_sample_size(
    mean: f64,
    std_dev: f64,
    mde_pct: f64,
    significance: f64,
    power: f64,
    variations: u32,
) -> f64 {
    let model = ContinuousEffect {
        mean,
        std_dev,
        mde_pct,
    };
    estimate_sample_size(&model, significance, power, variations)
}

/// Per-group sample size for a ratio metric.
///
/// Works on the coefficient of variation `std_dev / mean` against the
/// relative MDE directly.
pub fn ratio_sample_size(
    mean: f64,
    std_dev: f64,
    mde_pct: f64,
    significance: f64,
    power: f64,
    variations: u32,
) -> f64 {
    let model = RatioEffect {
        mean,
        std_dev,
        mde_pct,
    };
    estimate_sample_size(&model, significance, power, variations)
}
