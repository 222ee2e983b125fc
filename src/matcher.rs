//! The PSL precedence algorithm: exception rules beat normal rules,
//! longest normal rule wins, implicit `*` fallback otherwise.
//!
//! The implicit fallback rule is synthesized on demand rather than
//! stored, so explicit rules stay distinguishable from the default and
//! the longest-match calculation over real rules is unaffected.

use crate::domain::Domain;
use crate::domain_info::DomainInfo;
use crate::errors::RuleParseError;
use crate::label::Label;
use crate::parser::{self, ParseOptions};
use crate::rule::{Rule, SerializedRule};
use crate::ruleset::RuleSet;

/// Composes an exception [`RuleSet`] and a normal [`RuleSet`] and
/// implements the three-tier PSL precedence algorithm.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    exception_rules: RuleSet,
    rules: RuleSet,
}

impl Matcher {
    /// Builds a `Matcher` from a flat list of rules, routing exception
    /// rules and normal rules into their own sets.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut matcher = Self::default();
        matcher.consume_rules(rules);
        matcher
    }

    /// Builds a `Matcher` from a compiled/persisted rule table
    /// skipping text parsing.
    pub fn from_serialized(serialized_rules: Vec<SerializedRule>) -> Self {
        let rules = serialized_rules.into_iter().map(Rule::from_serialized).collect();
        Self::new(rules)
    }

    /// Parses PSL rule text and builds a `Matcher` from the resulting
    /// rules. Malformed lines are skipped and
    /// tallied, never propagated — see [`parser::parse_text`].
    pub fn from_text(text: &str) -> Self {
        let parsed = parser::parse_text(text);
        Self::new(parsed.rules)
    }

    /// Parses PSL rule text under the given [`ParseOptions`] and builds a
    /// `Matcher` from the resulting rules.
    ///
    /// With `strict: false` this is equivalent to [`Matcher::from_text`]
    /// and never fails. With `strict: true`, the first invalid line
    /// aborts parsing and its [`RuleParseError`] is returned instead of a
    /// `Matcher`.
    pub fn from_text_with_options(text: &str, options: ParseOptions) -> Result<Self, RuleParseError> {
        let parsed = parser::parse_text_with_options(text, options)?;
        Ok(Self::new(parsed.rules))
    }

    /// Parses a single rule line and propagates the error to the caller,
    /// for callers building a rule set programmatically rather than from
    /// a whole PSL document.
    pub fn try_add_rule_line(&mut self, line: &str) -> Result<(), RuleParseError> {
        let rule = Rule::parse_line(line)?;
        self.add_rule(rule);
        Ok(())
    }

    /// Adds one already-constructed rule, routing it by its exception
    /// flag.
    pub fn add_rule(&mut self, rule: Rule) {
        if rule.is_exception() {
            self.exception_rules.add_rule(rule);
        } else {
            self.rules.add_rule(rule);
        }
    }

    fn consume_rules(&mut self, rules: Vec<Rule>) {
        for rule in rules {
            self.add_rule(rule);
        }
    }

    /// The exception rule set (rules whose source text began with `!`).
    pub fn exception_rules(&self) -> &RuleSet {
        &self.exception_rules
    }

    /// The normal (non-exception) rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Matches `domain` against the precedence algorithm: exception
    /// rules first, then the longest normal rule, then the implicit `*`
    /// fallback. Total over all inputs — never fails.
    pub fn match_domain(&self, domain: &Domain) -> DomainInfo {
        let exception_match = self.exception_rules.find_match(domain);
        if exception_match.found {
            return exception_match.rule.unwrap().apply(domain);
        }

        let rule_match = self.rules.find_match(domain);
        if rule_match.found {
            return rule_match.rule.unwrap().apply(domain);
        }

        implicit_fallback_rule().apply(domain)
    }

    /// Convenience form of [`Matcher::match_domain`] taking a dotted
    /// hostname string directly.
    pub fn match_str(&self, host: &str) -> DomainInfo {
        self.match_domain(&Domain::new(host))
    }
}

/// The synthetic fallback rule used when no explicit rule matches
/// `{labels: ["*"], is_wildcard: true, is_exception: false}`, making
/// the rightmost single label the TLD.
fn implicit_fallback_rule() -> Rule {
    Rule::new(vec![Label::wildcard()], true, false)
}
