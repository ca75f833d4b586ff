//! The [`Value`] enum and its `typeof`/constructor classification.

use indexmap::IndexMap;

use crate::date::Date;
use crate::function::Function;
use crate::regexp::RegExp;

/// A dynamically typed value with JavaScript runtime semantics.
///
/// Objects preserve key insertion order; the stringifier emits keys in that
/// order while deep equality sorts key names, so an order-preserving map is
/// required for both to coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    RegExp(RegExp),
    Date(Date),
    Function(Function),
}

impl Value {
    /// The `typeof` tag of this value.
    ///
    /// Follows the ECMAScript table, including `typeof null == "object"`.
    pub fn js_typeof(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::Null
            | Value::Array(_)
            | Value::Object(_)
            | Value::RegExp(_)
            | Value::Date(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Whether two object-typed values share the same constructor
/// (`Array`, `Object`, `RegExp` or `Date`).
///
/// `null` and non-object values never match anything here.
pub fn same_constructor(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_))
            | (Value::RegExp(_), Value::RegExp(_))
            | (Value::Date(_), Value::Date(_))
    )
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<RegExp> for Value {
    fn from(re: RegExp) -> Self {
        Value::RegExp(re)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typeof_table() {
        assert_eq!(Value::Undefined.js_typeof(), "undefined");
        assert_eq!(Value::Null.js_typeof(), "object");
        assert_eq!(Value::Bool(true).js_typeof(), "boolean");
        assert_eq!(Value::Number(1.0).js_typeof(), "number");
        assert_eq!(Value::Str("x".into()).js_typeof(), "string");
        assert_eq!(Value::Array(vec![]).js_typeof(), "object");
        assert_eq!(Value::from(json!({})).js_typeof(), "object");
    }

    #[test]
    fn from_json_preserves_key_order() {
        let v = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        let map = v.as_object().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn constructor_matching() {
        let arr = Value::from(json!([1]));
        let obj = Value::from(json!({"a": 1}));
        assert!(same_constructor(&arr, &Value::from(json!([]))));
        assert!(same_constructor(&obj, &Value::from(json!({}))));
        assert!(!same_constructor(&arr, &obj));
        assert!(!same_constructor(&Value::Null, &Value::Null));
    }
}
