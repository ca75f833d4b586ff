//! jsonlike-value — dynamic value model for JavaScript-flavored data.
//!
//! [`Value`] covers every runtime category the companion crates distinguish:
//! `undefined`, `null`, booleans, IEEE-754 numbers, strings, arrays,
//! insertion-ordered objects, `RegExp`, `Date` and opaque function values.
//! The coercion helpers ([`loose_eq`], [`to_number`], [`number_text`],
//! [`canonical_json`]) reproduce the relevant corners of ECMAScript abstract
//! operations so that predicates and deep equality built on top behave the
//! way a JavaScript caller would expect.

mod canonical;
mod coerce;
mod date;
mod function;
mod regexp;
mod value;

pub use canonical::canonical_json;
pub use coerce::{has_numeric_prefix, loose_eq, number_text, to_number};
pub use date::Date;
pub use function::Function;
pub use regexp::{RegExp, RegExpFlags, RegExpParseError};
pub use value::{same_constructor, Value};
