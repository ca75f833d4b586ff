//! jsonlike — type predicates, deep equality and a custom stringifier for
//! JavaScript-flavored dynamic values, exposed as one namespace.
//!
//! The building blocks live in focused crates ([`jsonlike_value`],
//! [`jsonlike_kind`], [`jsonlike_equal`], [`jsonlike_text`]); this crate
//! re-exports the whole surface.
//!
//! Everything is pure and synchronous: values in, booleans or strings out,
//! nothing panics on arbitrary input. Recursion is bounded only by input
//! depth; owned [`Value`] trees cannot be cyclic, so there is no cycle
//! detection anywhere.
//!
//! # Examples
//!
//! ```
//! use jsonlike::{deep_equals, is_json_like, stringify, RegExp, Value};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"a": 1, "b": 2}));
//! let b = Value::from(json!({"b": 2, "a": 1}));
//! assert!(deep_equals(&a, &b));
//! assert!(is_json_like(&a, false));
//!
//! let re = Value::RegExp(RegExp::parse_literal("/ab/g").unwrap());
//! assert_eq!(stringify(&re), "/ab/g");
//! ```

pub use jsonlike_equal::{
    are_dates_same, are_of_same_data_types, are_regexps_same, array_contains_value, deep_equals,
};
pub use jsonlike_kind::{
    is_callable, is_json_like, is_non_blank_string, is_non_empty_array, is_numeric, is_string,
};
pub use jsonlike_text::{stringify, stringify_opts};
pub use jsonlike_value::{
    canonical_json, has_numeric_prefix, loose_eq, number_text, to_number, Date, Function, RegExp,
    RegExpFlags, RegExpParseError, Value,
};
