//! Multiple-comparison correction for experiments with several treatment
//! arms sharing one control.
//!
//! The correction operates directly on the confidence level and clamps the
//! result at 0.5, so for typical confidence levels (≥ 0.8) any experiment
//! with more than one comparison resolves to exactly 0.5. That level is not
//! a quantile-table key, so downstream lookups take the table's 0.95
//! fallback. This is a known simplification of the calibrated estimator and
//! is preserved as-is; it is not a textbook Bonferroni adjustment.

/// Adjust a confidence level for multiple comparisons against one control.
///
/// With `comparisons <= 1` the level is returned unchanged. Otherwise the
/// per-comparison level is `1 − (1 − alpha)^(1/comparisons)` for
/// `alpha = 1 − significance`, clamped to at least 0.5 to avoid degenerate
/// confidence levels below 50%.
///
/// ```
/// use minsample::bonferroni_correction;
///
/// assert_eq!(bonferroni_correction(0.95, 1), 0.95);
/// assert_eq!(bonferroni_correction(0.95, 2), 0.5);
/// ```
pub fn bonferroni_correction(significance: f64, comparisons: u32) -> f64 {
    if comparisons <= 1 {
        return significance;
    }

    let alpha = 1.0 - significance;
    let corrected = 1.0 - (1.0 - alpha).powf(1.0 / f64::from(comparisons));
    corrected.max(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_comparison_is_identity() {
        for s in [0.01, 0.5, 0.8, 0.9, 0.95, 0.99, 0.999] {
            assert_eq!(bonferroni_correction(s, 1), s);
            assert_eq!(bonferroni_correction(s, 0), s);
        }
    }

    #[test]
    fn common_levels_hit_the_floor() {
        // 1 − s^(1/m) is far below 0.5 for s ≥ 0.8, so the clamp dominates.
        for s in [0.8, 0.85, 0.9, 0.95, 0.99] {
            for m in [2, 3, 5, 10] {
                assert_eq!(bonferroni_correction(s, m), 0.5, "s={s} m={m}");
            }
        }
    }

    #[test]
    fn low_significance_escapes_the_floor() {
        // s = 0.2, m = 2: 1 − 0.2^(1/2) ≈ 0.5528 > 0.5.
        let corrected = bonferroni_correction(0.2, 2);
        assert!((corrected - (1.0 - 0.2f64.sqrt())).abs() < 1e-12);
        assert!(corrected > 0.5);
    }

    #[test]
    fn non_increasing_in_comparisons_until_floor() {
        let mut prev = bonferroni_correction(0.95, 1);
        for m in 2..=8 {
            let cur = bonferroni_correction(0.95, m);
            assert!(cur <= prev, "correction must not grow with comparisons");
            prev = cur;
        }
        // Once the floor is hit the value stays constant.
        assert_eq!(bonferroni_correction(0.95, 2), bonferroni_correction(0.95, 100));
    }

    #[test]
    fn matches_reduced_form() {
        // 1 − (1 − (1 − s))^(1/m) reduces to 1 − s^(1/m).
        for s in [0.1f64, 0.3, 0.45] {
            for m in [2u32, 4, 7] {
                let direct = 1.0 - s.powf(1.0 / f64::from(m));
                assert!(
                    (bonferroni_correction(s, m) - direct.max(0.5)).abs() < 1e-15,
                    "s={s} m={m}"
                );
            }
        }
    }
}
