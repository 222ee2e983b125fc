//! File-based loading of PSL text, `std`-gated and outside the core
//! dependency-free path.
//!
//! Follows the same `std::fs::read_to_string` + parse shape as the
//! file-loading helper this crate started from.

use std::path::Path;

use crate::errors::{Error, Result};
use crate::matcher::Matcher;
use crate::ruleset::RuleSet;

impl Matcher {
    /// Reads PSL text from a file path and builds a `Matcher` from it.
    ///
    /// Malformed rule lines inside the file are skipped and tallied (not
    /// propagated), matching [`Matcher::from_text`]; only the file read
    /// itself can fail.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(Error::Io)?;
        Ok(Self::from_text(&text))
    }
}

impl RuleSet {
    /// Reads PSL text from a file path and builds a `RuleSet` from it.
    ///
    /// Malformed rule lines inside the file are skipped and tallied (not
    /// propagated), matching [`RuleSet::from_text`]; only the file read
    /// itself can fail.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(Error::Io)?;
        Ok(Self::from_text(&text))
    }
}
