//! An unordered collection of rules supporting longest-match lookup.
//!
//! Deliberately a flat `Vec<Rule>` with a linear scan rather than a
//! trie — see `DESIGN.md`'s `RuleSet` entry for why.

use crate::domain::Domain;
use crate::parser;
use crate::rule::Rule;

/// The outcome of [`RuleSet::find_match`]: whether any rule matched, and
/// if so, which one.
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub found: bool,
    pub rule: Option<&'a Rule>,
}

/// A multiset of [`Rule`]s. No deduplication; iteration
/// order is irrelevant to callers, who must not depend on which
/// equal-length rule wins a tie.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses PSL rule text and collects every valid rule — exception
    /// and normal alike — into a single flat set. Malformed lines are
    /// skipped and tallied, never propagated — see [`parser::parse_text`].
    ///
    /// Unlike [`crate::matcher::Matcher`], a `RuleSet` does not separate
    /// exception rules from normal ones; [`RuleSet::find_match`] only
    /// applies the longest-match rule, not the full PSL precedence
    /// algorithm. Callers that need exception precedence should build a
    /// `Matcher` instead.
    pub fn from_text(text: &str) -> Self {
        parser::parse_text(text).rules.into_iter().collect()
    }

    /// Adds a rule to the set.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules in the set, in insertion order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds the longest rule matching `domain`.
    ///
    /// Among all structurally matching rules, returns the one with the
    /// most labels; ties are broken by first encounter (insertion order)
    /// and are not meaningful to callers.
    pub fn find_match(&self, domain: &Domain) -> MatchResult<'_> {
        let mut longest: Option<&Rule> = None;
        for candidate in &self.rules {
            if !candidate.matches(domain) {
                continue;
            }
            let is_longer = match longest {
                Some(current) => candidate.len() > current.len(),
                None => true,
            };
            if is_longer {
                longest = Some(candidate);
            }
        }

        MatchResult {
            found: longest.is_some(),
            rule: longest,
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
