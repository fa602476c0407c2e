//! Integer coercion for loosely typed JSON operands.
//!
//! Callers send numbers, numeric strings, and occasionally booleans. All of them are
//! converted the same way before any arithmetic happens:
//!
//! | JSON value            | Result                                  |
//! |-----------------------|-----------------------------------------|
//! | integer               | itself (must fit in `i64`)              |
//! | float                 | truncated toward zero (finite, in range)|
//! | string                | trimmed, signed decimal, `_` separators |
//! | `true` / `false`      | `1` / `0`                               |
//! | `null`, array, object | error                                   |

use crate::error::{CalcError, Result};
use serde_json::{Number, Value};

// 2^63: the first f64 that no longer fits in i64.
const I64_UPPER_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// Coerce the value of `field` to an integer.
///
/// # Errors
///
/// Returns [`CalcError::TypeCoercion`] when the value has no integer reading.
pub fn coerce(field: &'static str, value: &Value) -> Result<i64> {
    let fail = |reason: String| CalcError::TypeCoercion { field, reason };

    match value {
        Value::Number(n) => from_number(n).ok_or_else(|| fail(format!("{n} is out of range"))),
        Value::String(s) => {
            parse_int_literal(s).ok_or_else(|| fail(format!("invalid integer literal {s:?}")))
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null => Err(fail("null is not a number".to_string())),
        Value::Array(_) => Err(fail("arrays are not numbers".to_string())),
        Value::Object(_) => Err(fail("objects are not numbers".to_string())),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn from_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Either a u64 above i64::MAX or a float.
    if n.is_u64() {
        return None;
    }
    let f = n.as_f64()?;
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    (t >= i64::MIN as f64 && t < I64_UPPER_EXCLUSIVE).then(|| t as i64)
}

/// Parse a decimal integer literal: surrounding whitespace, one optional sign, digits with
/// single underscores between them.
fn parse_int_literal(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let mut normalized = String::with_capacity(digits.len() + 1);
    if negative {
        normalized.push('-');
    }
    for c in digits.chars().filter(|c| *c != '_') {
        if !c.is_ascii_digit() {
            return None;
        }
        normalized.push(c);
    }
    normalized.parse().ok()
}
