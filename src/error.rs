//! Error types for key parsing

use std::fmt;

/// Error returned when an input string matches none of the supported key
/// notations, or matches a notation's shape but names no valid key
/// (e.g. `"13B"`).
///
/// This is the typed counterpart of the empty-string contract of the
/// `key_to_*` functions, for callers going through [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    input: String,
}

impl ParseKeyError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input string.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized key: {:?}", self.input)
    }
}

impl std::error::Error for ParseKeyError {}
