//! Closed-form approximation of the two-tailed Student-t quantile.
//!
//! The approximation is a fixed-coefficient asymptotic expansion of the form
//! `t ≈ z + c₁/df + c₂/df²` (Cornish–Fisher style), with dedicated
//! coefficient triples for the three confidence levels the estimator is most
//! often run at. Branch selection is exact equality on the upper-tail
//! probability, not a range check: a corrected confidence level that is
//! numerically close to (but not exactly) 0.95 takes the general branch.
//!
//! Accuracy is adequate for sample-size estimation, not for general
//! statistical use; exact evaluation of the Student-t inverse CDF is a
//! non-goal.

use super::quantile::{t_reference, z_score};

/// Widening factor applied to the reference table below 3 degrees of freedom.
const LOW_DF_WIDENING: f64 = 1.5;

/// Approximate two-tailed Student-t quantile.
///
/// For `df < 3` the expansion is unusable, so the reference table entry is
/// widened by a conservative factor of 1.5 instead. NaN degrees of freedom
/// fail the `< 3` comparison and flow through the expansion, yielding NaN.
///
/// # Arguments
///
/// * `df` - Degrees of freedom (need not be integral)
/// * `confidence` - Confidence level, e.g. 0.95
///
/// ```
/// use minsample::statistics::t_value;
///
/// // Approaches the two-tailed normal quantile for large df.
/// assert!((t_value(1000.0, 0.95) - 1.96).abs() < 0.05);
/// ```
pub fn t_value(df: f64, confidence: f64) -> f64 {
    if df < 3.0 {
        return LOW_DF_WIDENING * t_reference(confidence);
    }

    // Upper-tail probability of the two-tailed interval.
    let a = 1.0 - (1.0 - confidence) / 2.0;

    if a == 0.975 {
        1.96 + 0.958 / df + 0.25 / (df * df)
    } else if a == 0.95 {
        1.645 + 0.727 / df + 0.18 / (df * df)
    } else if a == 0.995 {
        2.576 + 1.28 / df + 0.38 / (df * df)
    } else {
        z_score(confidence) + 0.85 / df + 0.22 / (df * df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_df_widens_reference_table() {
        for level in [0.8, 0.85, 0.9, 0.95, 0.99, 0.995, 0.999] {
            assert_eq!(t_value(2.0, level), 1.5 * t_reference(level));
            assert_eq!(t_value(0.0, level), 1.5 * t_reference(level));
            assert_eq!(t_value(2.999, level), 1.5 * t_reference(level));
        }
        // Non-key level widens the table default.
        assert_eq!(t_value(1.0, 0.5), 1.5 * 1.70);
    }

    #[test]
    fn dedicated_branches_match_expansion() {
        let df = 10.0;
        assert_eq!(t_value(df, 0.95), 1.96 + 0.958 / df + 0.25 / (df * df));
        assert_eq!(t_value(df, 0.90), 1.645 + 0.727 / df + 0.18 / (df * df));
        assert_eq!(t_value(df, 0.99), 2.576 + 1.28 / df + 0.38 / (df * df));
    }

    #[test]
    fn general_branch_uses_table_z() {
        let df = 50.0;
        // 0.8 has a table entry; 0.5 and 0.9747 fall back to 1.65.
        assert_eq!(t_value(df, 0.8), 0.84 + 0.85 / df + 0.22 / (df * df));
        assert_eq!(t_value(df, 0.5), 1.65 + 0.85 / df + 0.22 / (df * df));
        assert_eq!(t_value(df, 0.9747), 1.65 + 0.85 / df + 0.22 / (df * df));
    }

    #[test]
    fn branch_selection_is_exact_not_approximate() {
        let df = 20.0;
        // A level close to 0.95 must not hit the 0.95 coefficients.
        let near = t_value(df, 0.9501);
        assert_eq!(near, 1.65 + 0.85 / df + 0.22 / (df * df));
        assert_ne!(near, t_value(df, 0.95));
    }

    #[test]
    fn approaches_normal_quantile_for_large_df() {
        assert!((t_value(1000.0, 0.95) - 1.96).abs() < 0.05);
        assert!((t_value(1000.0, 0.90) - 1.645).abs() < 0.05);
        assert!((t_value(1000.0, 0.99) - 2.576).abs() < 0.05);
        assert!((t_value(1000.0, 0.8) - 0.84).abs() < 0.05);
    }

    #[test]
    fn decreasing_in_df() {
        let levels = [0.9, 0.95, 0.99, 0.8];
        for level in levels {
            let mut prev = t_value(3.0, level);
            for df in [5.0, 10.0, 30.0, 100.0, 1000.0] {
                let cur = t_value(df, level);
                assert!(cur < prev, "t({df}, {level}) should shrink with df");
                prev = cur;
            }
        }
    }

    #[test]
    fn nan_df_propagates() {
        assert!(t_value(f64::NAN, 0.95).is_nan());
    }

    #[test]
    fn infinite_df_reduces_to_leading_constant() {
        assert_eq!(t_value(f64::INFINITY, 0.95), 1.96);
        assert_eq!(t_value(f64::INFINITY, 0.8), 0.84);
    }
}
