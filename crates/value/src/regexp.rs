//! [`RegExp`] — a regular expression value compared by pattern and flags.
//!
//! Patterns are carried as text only; this crate never compiles or executes
//! them. Equality and printing need exactly the source and the
//! global/ignoreCase/multiline flag set.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegExpParseError {
    #[error("regexp literal must be delimited by `/`")]
    MissingDelimiter,
    #[error("regexp literal has an empty pattern")]
    EmptyPattern,
    #[error("unknown regexp flag `{0}`")]
    UnknownFlag(char),
    #[error("duplicate regexp flag `{0}`")]
    DuplicateFlag(char),
}

/// The flag set of a [`RegExp`]: `g`, `i` and `m`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegExpFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
}

impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        Ok(())
    }
}

/// A regular expression value: pattern source plus [`RegExpFlags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    pub source: String,
    pub flags: RegExpFlags,
}

impl RegExp {
    pub fn new(source: impl Into<String>, flags: RegExpFlags) -> Self {
        Self {
            source: source.into(),
            flags,
        }
    }

    /// Parse a literal of the form `/pattern/flags`, e.g. `/ab+c/gi`.
    ///
    /// The last `/` splits pattern from flags, so an unescaped `/` inside the
    /// pattern is accepted the way a text scanner would take it.
    pub fn parse_literal(literal: &str) -> Result<Self, RegExpParseError> {
        let body = literal
            .strip_prefix('/')
            .ok_or(RegExpParseError::MissingDelimiter)?;
        let end = body.rfind('/').ok_or(RegExpParseError::MissingDelimiter)?;
        let source = &body[..end];
        if source.is_empty() {
            return Err(RegExpParseError::EmptyPattern);
        }
        let mut flags = RegExpFlags::default();
        for ch in body[end + 1..].chars() {
            let slot = match ch {
                'g' => &mut flags.global,
                'i' => &mut flags.ignore_case,
                'm' => &mut flags.multiline,
                other => return Err(RegExpParseError::UnknownFlag(other)),
            };
            if *slot {
                return Err(RegExpParseError::DuplicateFlag(ch));
            }
            *slot = true;
        }
        Ok(Self {
            source: source.to_string(),
            flags,
        })
    }
}

impl fmt::Display for RegExp {
    /// Renders the literal text form, e.g. `/foo/gi`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
