//! jsonlike-text — a recursive stringifier with RegExp literals and an
//! optional beautified layout.
//!
//! Unlike standard JSON encoding, numbers render in `Number#toString` shape
//! (including `NaN` and `Infinity`), `RegExp` values render as unquoted
//! `/pattern/flags` literals, and dates and functions render as their
//! quoted string conversion. Beautify mode inserts newlines and one indent
//! level per container, but only for containers with more than one child;
//! singleton and empty containers stay compact on one line and pass the
//! parent indent through unchanged.

use jsonlike_value::{canonical_json, number_text, Value};

/// Compact rendering of `v`.
///
/// # Examples
///
/// ```
/// use jsonlike_text::stringify;
/// use jsonlike_value::Value;
/// use serde_json::json;
///
/// let v = Value::from(json!({"a": 1, "b": [1, 2]}));
/// assert_eq!(stringify(&v), r#"{"a":1,"b":[1,2]}"#);
/// ```
pub fn stringify(v: &Value) -> String {
    stringify_opts(v, false, "", "\t")
}

/// Full-control rendering: `beautify` turns on the newline/indent layout,
/// `indent` is the starting indentation, `indent_char` the unit added per
/// nesting level (one tab when unspecified via [`stringify`]).
pub fn stringify_opts(v: &Value, beautify: bool, indent: &str, indent_char: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, v, beautify, indent, indent_char);
    out
}

fn write_value(out: &mut String, v: &Value, beautify: bool, indent: &str, indent_char: &str) {
    match v {
        Value::Number(n) => out.push_str(&number_text(*n)),
        Value::RegExp(re) => out.push_str(&re.to_string()),
        Value::Array(items) => {
            let next_indent = format!("{indent}{indent_char}");
            let multi = items.len() > 1;
            out.push('[');
            if beautify && multi {
                out.push('\n');
                out.push_str(&next_indent);
            }
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    if beautify {
                        out.push('\n');
                        out.push_str(&next_indent);
                    }
                }
                // singleton containers reuse the parent's indent level
                let child_indent = if multi { next_indent.as_str() } else { indent };
                write_value(out, item, beautify, child_indent, indent_char);
            }
            if beautify && multi {
                out.push('\n');
                out.push_str(indent);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let next_indent = format!("{indent}{indent_char}");
            let multi = map.len() > 1;
            out.push('{');
            if beautify && multi {
                out.push('\n');
                out.push_str(&next_indent);
            }
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    if beautify {
                        out.push('\n');
                        out.push_str(&next_indent);
                    }
                }
                write_quoted(out, key);
                out.push_str(if beautify { ": " } else { ":" });
                let child_indent = if multi { next_indent.as_str() } else { indent };
                write_value(out, value, beautify, child_indent, indent_char);
            }
            if beautify && multi {
                out.push('\n');
                out.push_str(indent);
            }
            out.push('}');
        }
        // values with a string conversion render as that string, quoted
        Value::Date(d) => write_quoted(out, &d.to_iso_string()),
        Value::Function(f) => write_quoted(out, f.source()),
        // standard JSON encoding of whatever remains; `undefined` has no
        // JSON form and prints as its bare name
        other => match canonical_json(other) {
            Some(text) => out.push_str(&text),
            None => out.push_str("undefined"),
        },
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push_str(&serde_json::to_string(s).unwrap_or_default());
}
