//! Minimum-stock threshold parsing.
//!
//! The same rule runs on both sides of the wire: the view applies it to raw
//! filter input, the data service re-applies it to the `min` query parameter.
//! Anything unparsable means "no filter", never an error.

/// Parse raw user input into an effective minimum-stock threshold.
///
/// Surrounding whitespace is trimmed. Empty, non-numeric, and non-positive
/// input (negative numbers included) collapse to 0, meaning "all records".
/// Decimal input truncates toward zero before the comparison.
pub fn effective_min(raw: &str) -> i64 {
    let Ok(parsed) = raw.trim().parse::<f64>() else {
        return 0;
    };
    if !parsed.is_finite() {
        return 0;
    }
    let truncated = parsed.trunc();
    if truncated <= 0.0 {
        0
    } else {
        // f64-to-i64 casts saturate for out-of-range magnitudes
        truncated as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integers_pass_through() {
        assert_eq!(effective_min("1"), 1);
        assert_eq!(effective_min("20"), 20);
        assert_eq!(effective_min("1000"), 1000);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(effective_min("  15  "), 15);
        assert_eq!(effective_min("\t20\n"), 20);
    }

    #[test]
    fn test_empty_and_non_numeric_mean_no_filter() {
        assert_eq!(effective_min(""), 0);
        assert_eq!(effective_min("   "), 0);
        assert_eq!(effective_min("abc"), 0);
        assert_eq!(effective_min("12abc"), 0);
        assert_eq!(effective_min("ten"), 0);
    }

    #[test]
    fn test_zero_and_negatives_mean_no_filter() {
        assert_eq!(effective_min("0"), 0);
        assert_eq!(effective_min("-10"), 0);
        assert_eq!(effective_min("-0.5"), 0);
    }

    #[test]
    fn test_decimals_truncate_toward_zero() {
        assert_eq!(effective_min("15.5"), 15);
        assert_eq!(effective_min("25.999"), 25);
        assert_eq!(effective_min("0.9"), 0);
    }

    #[test]
    fn test_huge_magnitudes_saturate_instead_of_wrapping() {
        assert_eq!(effective_min("999999999999999999999999"), i64::MAX);
        assert_eq!(effective_min("-999999999999999999999999"), 0);
    }
}
