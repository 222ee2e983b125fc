use crate::label::Label;

/// An ordered sequence of [`Label`]s, read left-to-right
/// (`www.example.com` → `[www, example, com]`, index 0 = leftmost).
///
/// Construction from a string is permissive: a leading, trailing, or
/// doubled `.` produces empty-label segments rather than failing. Those
/// invariants are the PSL parser's job, not `Domain`'s.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    labels: Vec<Label>,
}

impl Domain {
    /// Splits a dotted hostname into labels, preserving order.
    ///
    /// A domain with no dots becomes a single-label `Domain`. Empty
    /// segments from adjacent or leading/trailing dots are kept as empty
    /// labels (permissive; see module docs).
    pub fn new(host: &str) -> Self {
        let labels = host.split('.').map(Label::from).collect();
        Self { labels }
    }

    /// Adopts an existing label sequence directly.
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the domain has no labels (only reachable via
    /// [`Domain::from_labels`] with an empty vector).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `idx`, left-to-right.
    pub fn get(&self, idx: usize) -> &Label {
        &self.labels[idx]
    }

    /// All labels, in order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Joins labels with `.`, no leading or trailing separator.
    pub fn to_dotted_string(&self) -> String {
        self.labels
            .iter()
            .map(Label::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_dotted_string())
    }
}

impl From<&str> for Domain {
    fn from(host: &str) -> Self {
        Domain::new(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_preserving_left_to_right_order() {
        let d = Domain::new("www.example.com");
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(0).as_str(), "www");
        assert_eq!(d.get(1).as_str(), "example");
        assert_eq!(d.get(2).as_str(), "com");
    }

    #[test]
    fn single_label_with_no_dots() {
        let d = Domain::new("localhost");
        assert_eq!(d.len(), 1);
        assert_eq!(d.get(0).as_str(), "localhost");
    }

    #[test]
    fn to_dotted_string_has_no_leading_or_trailing_separator() {
        let d = Domain::new("www.example.com");
        assert_eq!(d.to_dotted_string(), "www.example.com");
    }

    #[test]
    fn permissive_about_adjacent_and_boundary_dots() {
        let d = Domain::new("a..b");
        assert_eq!(d.len(), 3);
        assert_eq!(d.get(1).as_str(), "");

        let leading = Domain::new(".a.b");
        assert_eq!(leading.len(), 3);
        assert_eq!(leading.get(0).as_str(), "");

        let trailing = Domain::new("a.b.");
        assert_eq!(trailing.len(), 3);
        assert_eq!(trailing.get(2).as_str(), "");
    }

    #[test]
    fn from_labels_adopts_sequence_directly() {
        let d = Domain::from_labels(vec![Label::from("jp")]);
        assert_eq!(d.to_dotted_string(), "jp");
    }
}
