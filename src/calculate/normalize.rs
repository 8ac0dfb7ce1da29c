//! Ratio normalizers mapping raw comparisons onto bounded scores.
//!
//! Every function returns an unrounded `f64` inside its documented range;
//! callers round through [`crate::models::Rating`].

/// Whether a larger metric is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Linear scale around a baseline: parity maps to 50.
///
/// `value == 0` is treated as an absent metric and returns the floor (1)
/// for positive metrics or the ceiling (99) for negative ones.
pub fn scale_linear(value: f64, baseline: f64, polarity: Polarity) -> f64 {
    if value == 0.0 {
        return match polarity {
            Polarity::Positive => 1.0,
            Polarity::Negative => 99.0,
        };
    }
    if baseline <= 0.0 {
        return 50.0;
    }

    let pct = value / baseline * 100.0;
    let score = match polarity {
        Polarity::Positive => 1.0 + pct * 0.49,
        Polarity::Negative => 99.0 - pct * 0.49,
    };
    score.clamp(1.0, 99.0)
}

/// Saturating curve over a ratio: 1.0 maps to 50.
pub fn scale_tanh(ratio: f64) -> f64 {
    (50.0 + 49.0 * (ratio - 1.0).tanh()).clamp(1.0, 99.0)
}

/// Percent-of-baseline scale where parity maps to 50.
pub fn normalize_value(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return (value / value.max(1.0) * 99.0).clamp(1.0, 99.0);
    }
    let pct = value / baseline * 100.0;
    (50.0 + (pct - 100.0) * 0.5).clamp(1.0, 99.0)
}

/// Steep saturating curve used by the category ratings, range 1..=100.
pub fn tanh_rating(ratio: f64, steepness: f64) -> f64 {
    (50.0 + 50.0 * ((ratio - 1.0) * steepness).tanh()).clamp(1.0, 100.0)
}

/// `value / baseline`, or `fallback` when the baseline is not positive.
pub fn ratio_or(value: f64, baseline: f64, fallback: f64) -> f64 {
    if baseline > 0.0 {
        value / baseline
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_linear_parity() {
        assert!((scale_linear(40.0, 40.0, Polarity::Positive) - 50.0).abs() < 0.01);
        assert!((scale_linear(40.0, 40.0, Polarity::Negative) - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_scale_linear_zero_value() {
        assert_eq!(scale_linear(0.0, 40.0, Polarity::Positive), 1.0);
        assert_eq!(scale_linear(0.0, 40.0, Polarity::Negative), 99.0);
    }

    #[test]
    fn test_scale_linear_missing_baseline() {
        assert_eq!(scale_linear(12.0, 0.0, Polarity::Positive), 50.0);
        assert_eq!(scale_linear(12.0, -3.0, Polarity::Negative), 50.0);
    }

    #[test]
    fn test_scale_linear_clamps() {
        assert_eq!(scale_linear(1000.0, 10.0, Polarity::Positive), 99.0);
        assert_eq!(scale_linear(1000.0, 10.0, Polarity::Negative), 1.0);
    }

    #[test]
    fn test_scale_tanh() {
        assert!((scale_tanh(1.0) - 50.0).abs() < 1e-9);
        assert!(scale_tanh(3.0) > 95.0);
        assert!(scale_tanh(0.0) < 15.0);
        assert!(scale_tanh(100.0) <= 99.0);
    }

    #[test]
    fn test_normalize_value_parity_is_fifty() {
        for baseline in [0.5, 1.0, 17.0, 250.0] {
            assert!((normalize_value(baseline, baseline) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_value_zero_baseline() {
        assert_eq!(normalize_value(0.0, 0.0), 1.0);
        assert!((normalize_value(0.5, 0.0) - 49.5).abs() < 1e-9);
        assert_eq!(normalize_value(8.0, 0.0), 99.0);
    }

    #[test]
    fn test_normalize_value_range() {
        assert_eq!(normalize_value(500.0, 10.0), 99.0);
        assert_eq!(normalize_value(0.0, 10.0), 1.0);
        assert!((normalize_value(15.0, 10.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_tanh_rating() {
        assert!((tanh_rating(1.0, 2.0) - 50.0).abs() < 1e-9);
        assert!(tanh_rating(5.0, 2.0) <= 100.0);
        assert!(tanh_rating(0.0, 2.0) >= 1.0);
        assert!(tanh_rating(1.2, 2.0) > tanh_rating(1.2, 1.5));
    }

    #[test]
    fn test_ratio_or() {
        assert_eq!(ratio_or(3.0, 2.0, 1.0), 1.5);
        assert_eq!(ratio_or(3.0, 0.0, 1.0), 1.0);
    }
}
