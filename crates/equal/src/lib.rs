//! jsonlike-equal — structural, type-sensitive deep equality.
//!
//! [`deep_equals`] compares two [`Value`]s by walking their own enumerable
//! keys: loosely coercive for primitives (`1` equals `"1"`), semantic for
//! `RegExp` (pattern + flags) and `Date` (epoch value), constructor-strict
//! for object types. Object key order is irrelevant; array element order is
//! not. [`array_contains_value`] builds a membership scan on top.

mod contains;
mod deep;

pub use contains::array_contains_value;
pub use deep::{are_dates_same, are_of_same_data_types, are_regexps_same, deep_equals};
