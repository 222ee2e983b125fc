//! A single parsed PSL rule and its matching/segmentation behavior.
//!
//! [`Rule::new`] is the one canonical constructor; [`Rule::parse_line`]
//! and [`Rule::from_serialized`] are helpers layered on top of it.

use crate::domain::Domain;
use crate::domain_info::DomainInfo;
use crate::errors::RuleParseError;
use crate::label::Label;

/// One parsed PSL rule: an ordered label sequence plus the wildcard and
/// exception flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    labels: Vec<Label>,
    is_wildcard: bool,
    is_exception: bool,
}

/// The stable, persistable form of a [`Rule`], used by code generators
/// that bake a compiled rule table into a binary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializedRule {
    pub is_wildcard: bool,
    pub is_exception: bool,
    pub labels: Vec<Label>,
}

impl Rule {
    /// Canonical constructor: labels plus explicit flags. No validation —
    /// callers that need PSL-conformant labels should go through
    /// [`Rule::parse_line`] instead.
    pub fn new(labels: Vec<Label>, is_wildcard: bool, is_exception: bool) -> Self {
        Self {
            labels,
            is_wildcard,
            is_exception,
        }
    }

    /// Builds a `Rule` from its persisted/serialized form.
    pub fn from_serialized(serialized: SerializedRule) -> Self {
        Self::new(
            serialized.labels,
            serialized.is_wildcard,
            serialized.is_exception,
        )
    }

    /// Parses a single PSL rule line.
    ///
    /// The input is assumed already stripped of PSL commentary (blank and
    /// `//`-prefixed lines are the caller's concern — see
    /// [`crate::parser`]).
    pub fn parse_line(line: &str) -> Result<Self, RuleParseError> {
        let truncated = match line.find(' ') {
            Some(i) => &line[..i],
            None => line,
        };
        if truncated.is_empty() {
            return Err(RuleParseError::EmptyRule);
        }

        let first = truncated.as_bytes()[0];
        let (is_wildcard, is_exception, rest) = match first {
            b'*' => (true, false, truncated),
            b'!' => (false, true, &truncated[1..]),
            b'/' => return Err(RuleParseError::IllegalPrefix),
            _ => (false, false, truncated),
        };

        if rest.is_empty() {
            return Err(RuleParseError::EmptyRule);
        }

        let parts: Vec<&str> = rest.split('.').collect();
        if parts[..parts.len() - 1].iter().any(|p| p.is_empty()) {
            return Err(RuleParseError::AdjacentDelimiters);
        }
        if parts[parts.len() - 1].is_empty() {
            return Err(RuleParseError::TrailingDelimiter);
        }

        let labels = parts.into_iter().map(Label::from).collect();
        Ok(Self::new(labels, is_wildcard, is_exception))
    }

    /// The rule's labels, in the order parsed (a leading `*` is retained
    /// as `labels[0]` for wildcard rules).
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of labels in the rule.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True iff the rule has no labels (unreachable through
    /// [`Rule::parse_line`]; only via a programmatically empty
    /// [`Rule::new`]).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True iff the leftmost label is the literal `*`.
    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// True iff the rule's source text began with `!`.
    pub fn is_exception(&self) -> bool {
        self.is_exception
    }

    /// Structural match test: right-aligned comparison of rule labels
    /// against the tail of `domain`'s labels, where a rule label of `*`
    /// matches any single domain label.
    pub fn matches(&self, domain: &Domain) -> bool {
        let num_rule_labels = self.labels.len();
        let num_domain_labels = domain.len();
        if num_rule_labels > num_domain_labels {
            return false;
        }

        for i in 0..num_rule_labels {
            let rule_label = &self.labels[num_rule_labels - i - 1];
            let domain_label = domain.get(num_domain_labels - i - 1);
            if rule_label.is_wildcard() {
                continue;
            }
            if rule_label != domain_label {
                return false;
            }
        }

        true
    }

    /// Segments a matching `domain` into tld/domain/subdomain.
    /// Behavior is undefined (but not unsafe) if `self.matches(domain)`
    /// is false; callers should check first.
    pub fn apply(&self, domain: &Domain) -> DomainInfo {
        let domain_len = domain.len();
        let mut rule_len = self.len();
        if self.is_exception {
            rule_len -= 1;
        }

        let mut tld_len = rule_len;
        let mut domain_seg_len = if tld_len == domain_len { 0 } else { 1 };
        let mut subdomain_len = domain_len - domain_seg_len - tld_len;

        let mut subdomain_parts = Vec::new();
        let mut domain_parts = Vec::new();
        let mut tld_parts = Vec::new();

        for i in 0..domain_len {
            let label = domain.get(i);
            if subdomain_len > 0 {
                subdomain_len -= 1;
                subdomain_parts.push(label.as_str());
                continue;
            }
            if domain_seg_len > 0 {
                domain_seg_len -= 1;
                domain_parts.push(label.as_str());
                continue;
            }
            tld_len -= 1;
            tld_parts.push(label.as_str());
        }

        DomainInfo {
            subdomain: subdomain_parts.join("."),
            domain: domain_parts.join("."),
            tld: tld_parts.join("."),
        }
    }

    /// Dotted rendering of the rule's labels (e.g. `*.kobe.jp`).
    pub fn to_dotted_string(&self) -> String {
        self.labels
            .iter()
            .map(Label::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "labels: [{}] is exception: {} is wildcard: {}",
            self.to_dotted_string(),
            self.is_exception,
            self.is_wildcard
        )
    }
}
