//! Deep equality over [`Value`] trees.

use jsonlike_kind::is_json_like;
use jsonlike_value::{loose_eq, same_constructor, Value};

/// True iff both values are `RegExp`s with identical pattern source and
/// identical global/ignoreCase/multiline flags.
pub fn are_regexps_same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::RegExp(x), Value::RegExp(y)) => x.source == y.source && x.flags == y.flags,
        _ => false,
    }
}

/// True iff both values are `Date`s with the same epoch millisecond value.
pub fn are_dates_same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Date(x), Value::Date(y)) => x.epoch_ms() == y.epoch_ms(),
        _ => false,
    }
}

/// Whether two values count as "the same data type": loosely equal, or
/// sharing a `typeof` tag and — for object-typed values — both non-null
/// with matching constructors.
///
/// `typeof null` is `"object"`, so `null` against any non-null object fails
/// the constructor requirement here; `null` against `null` already passed
/// the loose check.
pub fn are_of_same_data_types(a: &Value, b: &Value) -> bool {
    if loose_eq(a, b) {
        return true;
    }
    if a.js_typeof() != b.js_typeof() {
        return false;
    }
    if a.js_typeof() != "object" {
        return true;
    }
    !a.is_null() && !b.is_null() && same_constructor(a, b)
}

/// Deep, type-sensitive equality of two values.
///
/// Reflexive and symmetric. Primitives compare coercively (`1` equals
/// `"1"`); `RegExp` and `Date` get first-class semantic comparison; objects
/// compare key-by-key after sorting key names, so object key order never
/// matters. Array index keys sort into the same positions on both sides,
/// which makes array comparison position-sensitive — element order DOES
/// matter, despite the order of object keys being ignored.
///
/// Two distinct empty containers are never deep-equal: with no own keys to
/// compare there is no structural evidence of equality, and only the
/// identity check at the top can say yes (so `deep_equals(x, x)` still
/// holds for every `x`).
///
/// # Examples
///
/// ```
/// use jsonlike_equal::deep_equals;
/// use jsonlike_value::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": 2}));
/// let b = Value::from(json!({"b": 2, "a": 1}));
/// assert!(deep_equals(&a, &b));
///
/// let x = Value::from(json!([1, 2, 3]));
/// let y = Value::from(json!([3, 2, 1]));
/// assert!(!deep_equals(&x, &y));
/// ```
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    // identity, primitives, RegExps and Dates
    if std::ptr::eq(a, b) || loose_eq(a, b) || are_regexps_same(a, b) || are_dates_same(a, b) {
        return true;
    }
    if !are_of_same_data_types(a, b) {
        return false;
    }

    let mut k1 = own_keys(a);
    let mut k2 = own_keys(b);
    k1.sort_unstable();
    k2.sort_unstable();
    if k1.is_empty() || k1.len() != k2.len() || k1 != k2 {
        return false;
    }

    for (ka, kb) in k1.iter().zip(&k2) {
        let va = property(a, ka);
        let vb = property(b, kb);
        let recurses = is_json_like(va, false) || matches!(va, Value::Array(_));
        if !are_of_same_data_types(va, vb)
            || (matches!(va, Value::RegExp(_)) && !are_regexps_same(va, vb))
            || (matches!(va, Value::Date(_)) && !are_dates_same(va, vb))
            || (recurses && !deep_equals(va, vb))
            || (!recurses && !loose_eq(va, vb))
        {
            return false;
        }
    }
    true
}

/// Own enumerable key names: object keys, or index strings for arrays.
fn own_keys(v: &Value) -> Vec<String> {
    match v {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

const UNDEFINED: Value = Value::Undefined;

fn property<'a>(v: &'a Value, key: &str) -> &'a Value {
    match v {
        Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .and_then(|i| items.get(i))
            .unwrap_or(&UNDEFINED),
        _ => &UNDEFINED,
    }
}
