//! Coercion primitives: loose `==` equality, string-to-number conversion and
//! number-to-text rendering, each following the ECMAScript abstract
//! operations closely enough for the predicates and comparator built on top.

use crate::value::Value;

/// Loose (coercive) equality, the `==` operator over [`Value`]s.
///
/// `null` and `undefined` are mutually equal; numbers and strings
/// cross-coerce (`1 == "1"`); booleans coerce to numbers first. Dates
/// compare by epoch value and functions by source text, the value-semantics
/// reading of object identity. Everything else — and any other mixed pair —
/// is not loosely equal.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Number(n), Value::Str(s)) | (Value::Str(s), Value::Number(n)) => {
            *n == to_number(s)
        }
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            let as_number = Value::Number(if *x { 1.0 } else { 0.0 });
            loose_eq(&as_number, other)
        }
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x == y,
        _ => false,
    }
}

/// String-to-number coercion (`ToNumber` on strings).
///
/// Trims whitespace, maps the empty string to `0`, recognizes
/// `Infinity`/`+Infinity`/`-Infinity` and `0x`/`0X` hex, otherwise parses a
/// decimal float. Anything unparseable yields NaN.
pub fn to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return match u64::from_str_radix(hex, 16) {
            Ok(n) => n as f64,
            Err(_) => f64::NAN,
        };
    }
    match t.parse::<f64>() {
        // reject spellings like "inf" that Rust accepts but `ToNumber`
        // does not; genuine overflow ("1e999") still maps to infinity
        Ok(n) if n.is_infinite() && !t.bytes().any(|b| b.is_ascii_digit()) => f64::NAN,
        Ok(n) => n,
        Err(_) => f64::NAN,
    }
}

/// Whether a leading-prefix float parse (`parseFloat`) would find a number:
/// after leading whitespace, an optional sign followed by a digit or by a
/// decimal point and a digit.
pub fn has_numeric_prefix(s: &str) -> bool {
    let t = s.trim_start();
    let t = t.strip_prefix(['+', '-']).unwrap_or(t);
    let mut chars = t.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
        _ => false,
    }
}

/// Number-to-text in `Number#toString` shape: `NaN`, signed `Infinity`,
/// integers without a decimal point, `0` for negative zero, shortest
/// round-trip decimal otherwise.
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n == n.trunc() && n.abs() < 1e21 {
        return format!("{n:.0}");
    }
    format!("{n}")
}
