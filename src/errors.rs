//! Error types.
//!
//! `RuleParseError` is the one family of recoverable input errors in this
//! crate; it is raised only by programmatic single-rule
//! construction ([`crate::rule::Rule::parse_line`]). The full-text parser
//! ([`crate::parser`]) catches each variant locally and tallies it instead
//! of propagating it. Matching and applying rules never fail.
//!
//! `Error` is the crate-level error, covering the optional `std`-gated
//! collaborators (file loading, HTTP fetch) that sit outside the core.
//!
//! A hand-written `Display`/`std::error::Error` impl rather than a
//! `thiserror` derive: this is a small, stable enum, not worth pulling
//! in a proc-macro dependency for.

use std::fmt;

/// A specialized `Result` type for this crate's fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single PSL rule line failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleParseError {
    /// Rule text was empty after truncating at the first space.
    EmptyRule,
    /// First byte was `/` (PSL pseudo-comment syntax, not a rule).
    IllegalPrefix,
    /// Two `.`s in a row produced an empty interior label.
    AdjacentDelimiters,
    /// The final label was empty (a trailing `.`).
    TrailingDelimiter,
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RuleParseError::EmptyRule => "rule text is empty",
            RuleParseError::IllegalPrefix => "rule begins with an illegal '/' prefix",
            RuleParseError::AdjacentDelimiters => "rule contains adjacent '.' delimiters",
            RuleParseError::TrailingDelimiter => "rule ends with a trailing '.' delimiter",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for RuleParseError {}

/// Crate-level error, covering the core's `RuleParseError` plus the
/// optional `std`/`fetch`-gated collaborators (file I/O, HTTP fetch).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A single rule failed to parse (propagated from
    /// [`crate::rule::Rule::parse_line`]).
    InvalidRule(RuleParseError),
    /// An I/O error occurred while reading PSL text from disk.
    Io(std::io::Error),
    /// An error occurred while fetching PSL text over HTTP.
    #[cfg(feature = "fetch")]
    Fetch(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRule(e) => write!(f, "invalid rule: {e}"),
            Error::Io(e) => write!(f, "io error: {e}"),
            #[cfg(feature = "fetch")]
            Error::Fetch(e) => write!(f, "fetch error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidRule(e) => Some(e),
            Error::Io(e) => Some(e),
            #[cfg(feature = "fetch")]
            Error::Fetch(e) => Some(e.as_ref()),
        }
    }
}

impl From<RuleParseError> for Error {
    fn from(e: RuleParseError) -> Self {
        Error::InvalidRule(e)
    }
}
