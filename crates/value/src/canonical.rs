//! Canonical JSON rendering — what standard JSON encoding produces for a
//! [`Value`].
//!
//! `undefined` and functions have no JSON representation at all (`None`);
//! inside containers they follow the usual JSON rules (dropped from objects,
//! `null` in arrays). A `RegExp` has no enumerable properties and renders as
//! the empty object, and a `Date` renders as its quoted ISO string. The
//! classifier's empty-object fallback and the stringifier's final fallback
//! are both defined in terms of this rendering.

use crate::coerce::number_text;
use crate::value::Value;

/// JSON-quote a string, with escapes.
pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

/// The canonical JSON text of `v`, or `None` when `v` is unrepresentable
/// (`undefined` or a function).
pub fn canonical_json(v: &Value) -> Option<String> {
    match v {
        Value::Undefined | Value::Function(_) => None,
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(if n.is_finite() {
            number_text(*n)
        } else {
            // JSON has no NaN or Infinity
            "null".to_string()
        }),
        Value::Str(s) => Some(quote(s)),
        Value::Date(d) => Some(quote(&d.to_iso_string())),
        Value::RegExp(_) => Some("{}".to_string()),
        Value::Array(items) => {
            let mut out = String::from("[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match canonical_json(item) {
                    Some(text) => out.push_str(&text),
                    None => out.push_str("null"),
                }
            }
            out.push(']');
            Some(out)
        }
        Value::Object(map) => {
            let mut out = String::from("{");
            let mut first = true;
            for (key, val) in map {
                let Some(text) = canonical_json(val) else {
                    continue;
                };
                if !first {
                    out.push(',');
                }
                first = false;
                out.push_str(&quote(key));
                out.push(':');
                out.push_str(&text);
            }
            out.push('}');
            Some(out)
        }
    }
}
