/// A single dot-delimited component of a domain name.
///
/// A `Label` is non-empty and never contains the `.` delimiter (those
/// invariants are enforced by [`crate::rule::Rule::parse_line`] and the
/// PSL parser; `Label` itself does not validate on construction). Labels
/// compare byte-for-byte; no case folding happens here (see `DESIGN.md`'s
/// Open Question #2).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(String);

impl Label {
    /// Wraps an owned string as a label without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The wildcard label used by wildcard PSL rules.
    pub fn wildcard() -> Self {
        Self(String::from("*"))
    }

    /// True if this label is the literal wildcard token `*`.
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }

    /// Borrows the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_label_is_recognized() {
        assert!(Label::wildcard().is_wildcard());
        assert!(Label::from("*").is_wildcard());
        assert!(!Label::from("com").is_wildcard());
    }

    #[test]
    fn equality_is_byte_exact_no_case_folding() {
        assert_ne!(Label::from("COM"), Label::from("com"));
    }

    #[test]
    fn display_roundtrips_text() {
        assert_eq!(Label::from("example").to_string(), "example");
    }
}
