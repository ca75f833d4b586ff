//! Array membership scans.

use jsonlike_value::Value;

use crate::deep::deep_equals;

/// Strict (non-coercive) equality between two scalar values, the `===`
/// analogue used by the fast membership pass. Distinct container values
/// never match here; the deep pass picks those up.
fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        _ => false,
    }
}

/// Whether `arr` contains `value`.
///
/// An empty array answers `false` without scanning. Otherwise a first
/// linear pass looks for a strict scalar match, and a second pass falls
/// back to [`deep_equals`] against each element, which covers RegExp-,
/// Date- and object-valued entries.
pub fn array_contains_value(arr: &[Value], value: &Value) -> bool {
    if arr.is_empty() {
        return false;
    }
    // scalar fast path
    if arr.iter().any(|item| strict_eq(item, value)) {
        return true;
    }
    // RegExp | Date | object | coercive match
    arr.iter().any(|item| deep_equals(value, item))
}
