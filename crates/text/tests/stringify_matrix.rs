//! Stringifier matrix: per-category rendering, compact vs beautified
//! layouts, singleton compactness and indent accumulation.

use jsonlike_text::{stringify, stringify_opts};
use jsonlike_value::{Date, Function, RegExp, Value};
use serde_json::json;

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn re(lit: &str) -> Value {
    Value::RegExp(RegExp::parse_literal(lit).unwrap())
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn numbers_render_unquoted() {
    assert_eq!(stringify(&v(json!(42))), "42");
    assert_eq!(stringify(&v(json!(-1.5))), "-1.5");
    assert_eq!(stringify(&Value::Number(f64::NAN)), "NaN");
    assert_eq!(stringify(&Value::Number(f64::INFINITY)), "Infinity");
}

#[test]
fn regexps_render_as_literals() {
    assert_eq!(stringify(&re("/ab/g")), "/ab/g");
    assert_eq!(stringify(&re("/^x+$/gim")), "/^x+$/gim");
}

#[test]
fn strings_render_json_quoted() {
    assert_eq!(stringify(&v(json!("hello"))), "\"hello\"");
    assert_eq!(stringify(&v(json!("a\"b\n"))), r#""a\"b\n""#);
    assert_eq!(stringify(&v(json!(""))), "\"\"");
}

#[test]
fn remaining_scalars_use_standard_json() {
    assert_eq!(stringify(&v(json!(true))), "true");
    assert_eq!(stringify(&v(json!(false))), "false");
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::Undefined), "undefined");
}

#[test]
fn dates_render_as_quoted_iso_strings() {
    assert_eq!(
        stringify(&Value::Date(Date::from_epoch_ms(0))),
        "\"1970-01-01T00:00:00.000Z\""
    );
}

#[test]
fn functions_render_as_quoted_source() {
    let f = Value::Function(Function::new("function () { return 1; }"));
    assert_eq!(stringify(&f), "\"function () { return 1; }\"");
}

// ---------------------------------------------------------------------------
// Compact containers
// ---------------------------------------------------------------------------

#[test]
fn compact_object_with_nested_array() {
    assert_eq!(
        stringify(&v(json!({"a": 1, "b": [1, 2]}))),
        r#"{"a":1,"b":[1,2]}"#
    );
}

#[test]
fn compact_preserves_key_insertion_order() {
    assert_eq!(
        stringify(&v(json!({"z": 1, "a": 2, "m": 3}))),
        r#"{"z":1,"a":2,"m":3}"#
    );
}

#[test]
fn compact_empty_containers() {
    assert_eq!(stringify(&v(json!([]))), "[]");
    assert_eq!(stringify(&v(json!({}))), "{}");
}

#[test]
fn regexp_inside_containers_stays_a_literal() {
    let arr = Value::Array(vec![re("/a/g"), v(json!(1))]);
    assert_eq!(stringify(&arr), "[/a/g,1]");
}

// ---------------------------------------------------------------------------
// Beautified layout
// ---------------------------------------------------------------------------

#[test]
fn beautify_two_key_object() {
    assert_eq!(
        stringify_opts(&v(json!({"a": 1, "b": 2})), true, "", "  "),
        "{\n  \"a\": 1,\n  \"b\": 2\n}"
    );
}

#[test]
fn beautify_multi_element_array() {
    assert_eq!(
        stringify_opts(&v(json!([1, 2, 3])), true, "", "\t"),
        "[\n\t1,\n\t2,\n\t3\n]"
    );
}

#[test]
fn beautify_keeps_singletons_compact() {
    assert_eq!(stringify_opts(&v(json!([1])), true, "", "\t"), "[1]");
    assert_eq!(
        stringify_opts(&v(json!({"only": 1})), true, "", "\t"),
        "{\"only\": 1}"
    );
    assert_eq!(stringify_opts(&v(json!([])), true, "", "\t"), "[]");
}

#[test]
fn beautify_indent_accumulates_per_multi_child_level() {
    let value = v(json!({"a": [1, 2], "b": 3}));
    assert_eq!(
        stringify_opts(&value, true, "", "\t"),
        "{\n\t\"a\": [\n\t\t1,\n\t\t2\n\t],\n\t\"b\": 3\n}"
    );
}

#[test]
fn beautify_singleton_wrapper_charges_no_extra_level() {
    // the singleton object passes its own indent down, so the inner array
    // indents as if it sat at the wrapper's level
    let value = v(json!({"wrap": [1, 2]}));
    assert_eq!(
        stringify_opts(&value, true, "", "\t"),
        "{\"wrap\": [\n\t1,\n\t2\n]}"
    );
}

#[test]
fn beautify_respects_starting_indent() {
    assert_eq!(
        stringify_opts(&v(json!([1, 2])), true, "    ", "  "),
        "[\n      1,\n      2\n    ]"
    );
}

#[test]
fn beautify_separator_is_colon_space() {
    let compact = stringify(&v(json!({"k": "v"})));
    let pretty = stringify_opts(&v(json!({"k": "v"})), true, "", "\t");
    assert_eq!(compact, "{\"k\":\"v\"}");
    assert_eq!(pretty, "{\"k\": \"v\"}");
}
