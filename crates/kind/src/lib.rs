//! jsonlike-kind — type predicates over [`Value`].
//!
//! Every predicate is total: arbitrary input classifies to `true` or `false`,
//! nothing panics. The deep-equality and stringifier crates consult these to
//! pick their branch of logic at each nesting level.

use jsonlike_value::{canonical_json, has_numeric_prefix, to_number, Value};

/// True iff `v` is a truthy string — string-typed and non-empty.
pub fn is_string(v: &Value) -> bool {
    matches!(v, Value::Str(s) if !s.is_empty())
}

/// True iff `v` is a string with at least one non-whitespace character.
pub fn is_non_blank_string(v: &Value) -> bool {
    matches!(v, Value::Str(s) if !s.trim().is_empty())
}

/// True iff `v` is a finite number or a string that coerces to one.
///
/// String inputs must both carry a numeric prefix (a prefix float parse
/// would succeed) and coerce in full to a finite value, so `"12"` and
/// `"0x10"` pass while `""`, `"12abc"` and `"Infinity"` fail.
pub fn is_numeric(v: &Value) -> bool {
    match v {
        Value::Number(n) => n.is_finite(),
        Value::Str(s) => has_numeric_prefix(s) && to_number(s).is_finite(),
        _ => false,
    }
}

/// True iff `v` is an array with at least one element.
pub fn is_non_empty_array(v: &Value) -> bool {
    matches!(v, Value::Array(items) if !items.is_empty())
}

/// True iff `v` is a function value.
pub fn is_callable(v: &Value) -> bool {
    matches!(v, Value::Function(_))
}

/// True iff `v` is a JSON-like object: a non-array, non-string value with at
/// least one own enumerable key, or any value whose canonical JSON rendering
/// is the empty object `{}` (which admits the empty object itself, and
/// `RegExp` values, whose rendering has no enumerable properties).
///
/// With `fail_if_contains_functions` set, the direct properties are scanned
/// in insertion order: a callable property fails the check immediately, and
/// the first JSON-like property decides the outcome for the whole call — the
/// scan returns its recursive result right there, with the flag forced on,
/// and never visits the remaining siblings. Both quirks are load-bearing for
/// callers that depend on the historical behavior; do not "straighten" them.
pub fn is_json_like(v: &Value, fail_if_contains_functions: bool) -> bool {
    let map = match v {
        Value::Object(map) if !map.is_empty() => map,
        other => return canonical_json(other).as_deref() == Some("{}"),
    };
    if fail_if_contains_functions {
        for prop in map.values() {
            if is_callable(prop) {
                return false;
            }
            if is_json_like(prop, false) {
                return is_json_like(prop, true);
            }
        }
    }
    true
}
