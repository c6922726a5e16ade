//! Quantile table lookups.
//!
//! Lookups are exact-key: confidence levels are compared with `==` against
//! the table keys, and any level that is not a key resolves to the entry for
//! [`DEFAULT_CONFIDENCE`]. No interpolation is performed. Levels produced by
//! the multiple-comparison corrector (e.g. 0.5 after its clamp) are expected
//! to miss the table and take the fallback; that is the documented behavior,
//! not an error path.

use crate::constants::{DEFAULT_CONFIDENCE, NORMAL_QUANTILES, T_REFERENCE_QUANTILES};

/// Look up a `(level, value)` table by exact key equality.
///
/// Falls back to the [`DEFAULT_CONFIDENCE`] entry on a miss. Every table in
/// this crate carries a 0.95 key, so the expect is unreachable for them.
fn lookup(table: &[(f64, f64)], level: f64) -> f64 {
    table
        .iter()
        .find(|(key, _)| *key == level)
        .or_else(|| table.iter().find(|(key, _)| *key == DEFAULT_CONFIDENCE))
        .map(|(_, value)| *value)
        .expect("quantile table must contain the default confidence level")
}

/// Standard normal quantile for a confidence level.
///
/// Exact-key lookup against [`NORMAL_QUANTILES`]; unknown levels return the
/// 0.95 entry (1.65).
///
/// ```
/// use minsample::statistics::z_score;
///
/// assert_eq!(z_score(0.95), 1.65);
/// assert_eq!(z_score(0.97), 1.65); // not a key: default entry
/// ```
pub fn z_score(level: f64) -> f64 {
    lookup(NORMAL_QUANTILES, level)
}

/// Reference Student-t quantile (df = 30) for a confidence level.
///
/// Exact-key lookup against [`T_REFERENCE_QUANTILES`]; unknown levels return
/// the 0.95 entry.
pub fn t_reference(level: f64) -> f64 {
    lookup(T_REFERENCE_QUANTILES, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NORMAL_QUANTILES, T_REFERENCE_QUANTILES};

    #[test]
    fn z_score_returns_documented_constants() {
        for &(level, value) in NORMAL_QUANTILES {
            assert_eq!(z_score(level), value, "z table entry for {level}");
        }
        assert_eq!(z_score(0.95), 1.65);
        assert_eq!(z_score(0.8), 0.84);
        assert_eq!(z_score(0.999), 3.09);
    }

    #[test]
    fn t_reference_returns_documented_constants() {
        for &(level, value) in T_REFERENCE_QUANTILES {
            assert_eq!(t_reference(level), value, "t table entry for {level}");
        }
    }

    #[test]
    fn missing_level_falls_back_to_default_entry() {
        // Levels a corrector can produce but the table does not carry.
        assert_eq!(z_score(0.97), 1.65);
        assert_eq!(z_score(0.5), 1.65);
        assert_eq!(z_score(0.9747), 1.65);
        assert_eq!(t_reference(0.97), 1.70);
        assert_eq!(t_reference(0.5), 1.70);
    }

    #[test]
    fn near_miss_does_not_interpolate() {
        // 0.94999 is not 0.95; it must take the default, not a blend of the
        // 0.9 and 0.95 entries.
        assert_eq!(z_score(0.94999), 1.65);
        assert_eq!(z_score(0.90001), 1.65);
    }

    #[test]
    fn degenerate_levels_still_resolve() {
        assert_eq!(z_score(f64::NAN), 1.65);
        assert_eq!(z_score(0.0), 1.65);
        assert_eq!(z_score(1.5), 1.65);
    }
}
