// src/services/normalize.rs
use serde::Deserialize;
use crate::error::AppError;

/// A numeric field as clients send it: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberLike {
    /// Truncating integer view of the value, `None` when it is not a number.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            NumberLike::Int(n) => Some(*n),
            NumberLike::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            NumberLike::Float(_) => None,
            NumberLike::Text(s) => parse_leading_int(s),
        }
    }
}

impl From<i64> for NumberLike {
    fn from(n: i64) -> Self {
        NumberLike::Int(n)
    }
}

impl From<&str> for NumberLike {
    fn from(s: &str) -> Self {
        NumberLike::Text(s.to_string())
    }
}

/// Reads an optional sign and the leading run of decimal digits, ignoring the rest.
/// "12.9" -> 12, "  -7kg" -> -7, "abc" -> None. Saturates instead of overflowing.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(d);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

pub fn coerce(field: &str, value: &NumberLike) -> Result<i64, AppError> {
    value
        .to_int()
        .ok_or_else(|| AppError::validation(format!("{field} must be a number")))
}

pub fn line_total(quantity: i64, unit_price: i64) -> i64 {
    quantity.saturating_mul(unit_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_digits_only() {
        assert_eq!(parse_leading_int("5"), Some(5));
        assert_eq!(parse_leading_int("12.9"), Some(12));
        assert_eq!(parse_leading_int("  -7kg"), Some(-7));
        assert_eq!(parse_leading_int("+42"), Some(42));
        assert_eq!(parse_leading_int("007"), Some(7));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(".5"), None);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn json_numbers_and_strings_deserialize() {
        let values: Vec<NumberLike> = serde_json::from_str(r#"[5, 3.8, "10", -2.5, "x"]"#).unwrap();
        let ints: Vec<Option<i64>> = values.iter().map(NumberLike::to_int).collect();
        assert_eq!(ints, vec![Some(5), Some(3), Some(10), Some(-2), None]);
    }

    #[test]
    fn coerce_names_the_bad_field() {
        let err = coerce("quantity", &NumberLike::from("lots")).unwrap_err();
        match err {
            AppError::ValidationError(msg) => assert_eq!(msg, "quantity must be a number"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(coerce("price", &NumberLike::from(15)).unwrap(), 15);
    }

    #[test]
    fn totals_multiply_coerced_values() {
        assert_eq!(line_total(5, 10), 50);
        assert_eq!(line_total(i64::MAX, 2), i64::MAX);
    }
}
