//! [`Function`] — an opaque callable embedded in data.
//!
//! Only the printable source text is carried; nothing here can be invoked.
//! Two functions are considered the same value when their source text is
//! identical, which is the closest value-semantics analogue of sharing a
//! reference.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    source: String,
}

impl Function {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
