//! Polars `AnyValue` conversion helpers.
//!
//! Source CSVs arrive with inferred dtypes: a `Year` column may be `Int64` in
//! one file and `String` in another, measures may be `Float64` or `Int64`.
//! These helpers collapse those cases into plain Rust values.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its `String` representation.
///
/// Returns an empty string for `Null`; floats are rendered with
/// [`format_numeric`].
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use bi_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(2020)), "2020");
/// assert_eq!(any_to_string(AnyValue::Float64(50.0)), "50");
/// assert_eq!(any_to_string(AnyValue::String("Germany")), "Germany");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to trimmed text, returning `None` for null or blank cells.
///
/// Grouping keys (country, industry, tool, regulation status) are read with
/// this helper so that `"  Germany "` and `"Germany"` land in one group.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a floating-point number for CSV output.
///
/// Integral values lose their fractional part, `-0.0` prints as `0`, and
/// non-finite values print as an empty cell.
///
/// # Examples
///
/// ```
/// use bi_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(-1.0), "-1");
/// ```
pub fn format_numeric(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    // `Display` for f64 never emits an exponent or trailing zeros.
    format!("{v}")
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric, null or NaN values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let parsed = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}

/// Converts an `AnyValue` to `i64`.
///
/// Floats are accepted only when they carry no fractional part, so a year
/// read back as `2020.0` still parses while `2020.5` does not.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => integral_f64(f64::from(v)),
        AnyValue::Float64(v) => integral_f64(v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

// `i64::MIN` is exactly representable; `i64::MAX` rounds up to 2^63.
const I64_RANGE: std::ops::Range<f64> =
    -9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0;

fn integral_f64(v: f64) -> Option<i64> {
    if v.fract() == 0.0 && I64_RANGE.contains(&v) {
        Some(v as i64)
    } else {
        None
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parses a string as `i64`, accepting an integral decimal such as `"2020.0"`.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::Float64(98.25)), "98.25");
        assert_eq!(any_to_string(AnyValue::Float64(100.0)), "100");
    }

    #[test]
    fn test_any_to_text_trims_and_drops_blank() {
        assert_eq!(any_to_text(AnyValue::Null), None);
        assert_eq!(any_to_text(AnyValue::String("   ")), None);
        assert_eq!(
            any_to_text(AnyValue::String("  Germany ")),
            Some("Germany".to_string())
        );
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(-0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(0.125), "0.125");
        assert_eq!(format_numeric(f64::NAN), "");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int64(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::String("2.5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
    }

    #[test]
    fn test_any_to_i64() {
        assert_eq!(any_to_i64(AnyValue::Null), None);
        assert_eq!(any_to_i64(AnyValue::Int32(2020)), Some(2020));
        assert_eq!(any_to_i64(AnyValue::Float64(2020.0)), Some(2020));
        assert_eq!(any_to_i64(AnyValue::Float64(2020.5)), None);
        assert_eq!(any_to_i64(AnyValue::String(" 1995 ")), Some(1995));
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("2004"), Some(2004));
        assert_eq!(parse_i64("2004.0"), Some(2004));
        assert_eq!(parse_i64("twenty"), None);
    }

    #[test]
    fn test_out_of_range_floats_are_not_integers() {
        assert_eq!(any_to_i64(AnyValue::Float64(1e30)), None);
        assert_eq!(any_to_i64(AnyValue::Float64(-1e30)), None);
        assert_eq!(any_to_i64(AnyValue::Float64(f64::INFINITY)), None);
        assert_eq!(any_to_i64(AnyValue::Float64(9_223_372_036_854_775_808.0)), None);
        assert_eq!(
            any_to_i64(AnyValue::Float64(-9_223_372_036_854_775_808.0)),
            Some(i64::MIN)
        );
        assert_eq!(parse_i64("1e30"), None);
        assert_eq!(parse_i64("-1e30"), None);
    }
}
