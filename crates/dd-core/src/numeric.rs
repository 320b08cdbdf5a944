use crate::{CoreError, CoreResult};

/// Floating point type used for every charted value
pub type Real = f64;

/// Parse a CSV cell as a number.
///
/// Surrounding whitespace is ignored. Empty cells, text, `NaN` and the
/// infinities are all rejected.
pub fn parse_numeric(raw: &str) -> CoreResult<Real> {
    let trimmed = raw.trim();
    let value: Real = trimmed.parse().map_err(|_| CoreError::NotNumeric {
        raw: raw.to_string(),
    })?;
    ensure_finite(value, "cell value")
}

/// Lenient variant of [`parse_numeric`]: failures become `None` so callers
/// can drop the row instead of failing the whole render.
pub fn coerce_numeric(raw: &str) -> Option<Real> {
    parse_numeric(raw).ok()
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Truncate toward zero, saturating at the `i64` limits.
pub fn truncate_to_int(v: Real) -> i64 {
    v.trunc() as i64
}

/// Truncate toward zero when the result fits in an `i64`.
///
/// The upper limit is exclusive because `i64::MAX as f64` rounds up to 2^63.
pub fn checked_truncate(v: Real) -> Option<i64> {
    const LIMIT: Real = 9_223_372_036_854_775_808.0; // 2^63
    let t = v.trunc();
    (t >= -LIMIT && t < LIMIT).then(|| t as i64)
}

/// Inclusive on both ends. A reversed range contains nothing.
pub fn in_closed_range(v: Real, low: i64, high: i64) -> bool {
    v >= low as Real && v <= high as Real
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!(coerce_numeric("10"), Some(10.0));
        assert_eq!(coerce_numeric(" 2.5 "), Some(2.5));
        assert_eq!(coerce_numeric("-3e2"), Some(-300.0));
    }

    #[test]
    fn rejects_text_and_blank() {
        assert_eq!(coerce_numeric("x"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("   "), None);
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
        let err = parse_numeric("-infinity").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
    }

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(truncate_to_int(2.9), 2);
        assert_eq!(truncate_to_int(-2.9), -2);
    }

    #[test]
    fn checked_truncate_rejects_out_of_range() {
        assert_eq!(checked_truncate(-2.9), Some(-2));
        assert_eq!(checked_truncate(9.0e18), Some(9_000_000_000_000_000_000));
        assert_eq!(checked_truncate(1e20), None);
        assert_eq!(checked_truncate(-1e20), None);
        assert_eq!(checked_truncate(f64::NAN), None);
    }

    #[test]
    fn closed_range_is_inclusive() {
        assert!(in_closed_range(2.0, 2, 4));
        assert!(in_closed_range(4.0, 2, 4));
        assert!(!in_closed_range(4.5, 2, 4));
        assert!(!in_closed_range(3.0, 4, 2));
    }

    proptest! {
        #[test]
        fn formatted_integers_parse_back(n in any::<i32>()) {
            prop_assert_eq!(coerce_numeric(&n.to_string()), Some(n as Real));
        }
    }
}
