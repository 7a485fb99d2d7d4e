//! Coercion of raw JSON values into quantities
//!
//! Data files are hand-edited often enough that values show up as strings,
//! floats or booleans. Anything that reads as an integer is accepted:
//!
//! - integers as-is
//! - floats, truncated toward zero
//! - booleans as `1` / `0`
//! - strings holding a base-10 integer, with optional surrounding whitespace,
//!   a leading sign and single `_` separators between digits
//!
//! Integers outside the `i64` range saturate to `Quantity::MIN` / `Quantity::MAX`,
//! so huge negative values still read as non-positive and huge positive values
//! are kept at the largest storable quantity.
//!
//! `null`, arrays, objects and anything else yield `None`.

use serde_json::{Number, Value};

use crate::types::Quantity;

/// Coerce a JSON value to a quantity, or `None` if it does not read as an integer
pub fn coerce_quantity(value: &Value) -> Option<Quantity> {
    match value {
        Value::Number(n) => coerce_number(n),
        Value::Bool(b) => Some(Quantity::from(*b)),
        Value::String(s) => parse_integer(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_number(n: &Number) -> Option<Quantity> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return Some(Quantity::MAX);
    }
    let f = n.as_f64()?.trunc();
    if f.is_nan() {
        return None;
    }
    // `as` saturates at the i64 bounds
    Some(f as Quantity)
}

fn parse_integer(raw: &str) -> Option<Quantity> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first().copied()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '_')
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    // Only digits remain, so a parse failure means the value overflowed
    let magnitude: i128 = cleaned.parse().unwrap_or(i128::MAX);
    let signed = if negative { -magnitude } else { magnitude };
    Some(signed.clamp(Quantity::MIN as i128, Quantity::MAX as i128) as Quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers() {
        assert_eq!(coerce_quantity(&json!(10)), Some(10));
        assert_eq!(coerce_quantity(&json!(-3)), Some(-3));
        assert_eq!(coerce_quantity(&json!(0)), Some(0));
        assert_eq!(coerce_quantity(&json!(u64::MAX)), Some(Quantity::MAX));
    }

    #[test]
    fn test_floats_truncate() {
        assert_eq!(coerce_quantity(&json!(3.9)), Some(3));
        assert_eq!(coerce_quantity(&json!(-2.5)), Some(-2));
        assert_eq!(coerce_quantity(&json!(0.4)), Some(0));
        assert_eq!(coerce_quantity(&json!(1e300)), Some(Quantity::MAX));
        assert_eq!(coerce_quantity(&json!(-1e30)), Some(Quantity::MIN));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(coerce_quantity(&json!(true)), Some(1));
        assert_eq!(coerce_quantity(&json!(false)), Some(0));
    }

    #[test]
    fn test_strings() {
        assert_eq!(coerce_quantity(&json!("12")), Some(12));
        assert_eq!(coerce_quantity(&json!("  7 \n")), Some(7));
        assert_eq!(coerce_quantity(&json!("+4")), Some(4));
        assert_eq!(coerce_quantity(&json!("-4")), Some(-4));
        assert_eq!(coerce_quantity(&json!("1_000")), Some(1000));
    }

    #[test]
    fn test_rejected_strings() {
        for raw in ["", "  ", "abc", "3.5", "1__0", "_1", "1_", "-", "5 apples"] {
            assert_eq!(coerce_quantity(&json!(raw)), None, "{:?}", raw);
        }
    }

    #[test]
    fn test_out_of_range_strings_saturate() {
        assert_eq!(
            coerce_quantity(&json!("99999999999999999999")),
            Some(Quantity::MAX)
        );
        assert_eq!(
            coerce_quantity(&json!("-99999999999999999999")),
            Some(Quantity::MIN)
        );
        let huge = format!("-{}", "9".repeat(60));
        assert_eq!(coerce_quantity(&json!(huge)), Some(Quantity::MIN));
    }

    #[test]
    fn test_non_scalars() {
        assert_eq!(coerce_quantity(&Value::Null), None);
        assert_eq!(coerce_quantity(&json!([1])), None);
        assert_eq!(coerce_quantity(&json!({"qty": 1})), None);
    }
}
