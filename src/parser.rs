//! Line-oriented parser that turns PSL text into a [`ParseResult`].
//!
//! Unlike loaders that recognize ICANN/PRIVATE section markers, this
//! parser treats those lines as ordinary comments, and collects a flat
//! [`RuleSet`]-ready rule list rather than inserting directly into a
//! trie.

use crate::errors::RuleParseError;
use crate::rule::Rule;

/// How a single input line was classified while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or whitespace-only.
    Whitespace,
    /// A `//`-prefixed comment, anchored at column 0.
    Comment,
    /// A line that failed single-rule parsing.
    InvalidRule,
    /// A successfully parsed rule.
    Rule,
}

/// The outcome of parsing a full PSL text.
///
/// Invariant: `num_whitespace_lines + num_comment_lines +
/// num_invalid_rules + rules.len()` equals the number of lines the
/// input was split into (not guaranteed under [`ParseOptions::strict`],
/// which stops counting at the first invalid line).
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub rules: Vec<Rule>,
    pub num_whitespace_lines: usize,
    pub num_comment_lines: usize,
    pub num_invalid_rules: usize,
}

impl ParseResult {
    /// Total number of lines accounted for across all counters plus the
    /// parsed rule list.
    pub fn total_lines(&self) -> usize {
        self.num_whitespace_lines + self.num_comment_lines + self.num_invalid_rules
            + self.rules.len()
    }
}

/// Controls how [`parse_text_with_options`] treats invalid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// If `true`, parsing stops and returns the first [`RuleParseError`]
    /// encountered instead of tallying it under `num_invalid_rules` and
    /// continuing. Default `false`.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict: false }
    }
}

/// Classification outcome for a single already-split line.
enum Classified {
    Whitespace,
    Comment,
    Invalid(RuleParseError),
    Rule(Rule),
}

fn classify_line(line: &str) -> Classified {
    if line.trim().is_empty() {
        return Classified::Whitespace;
    }
    if line.starts_with("//") {
        return Classified::Comment;
    }
    match Rule::parse_line(line) {
        Ok(rule) => Classified::Rule(rule),
        Err(e) => Classified::Invalid(e),
    }
}

/// Parses a single rule line and reports which [`RuleParseError`] (if
/// any) caused it to be classified as invalid. Exposed for callers that
/// want line-by-line diagnostics; [`parse_text`] itself only tallies the
/// counters.
pub fn parse_line_diagnostic(line: &str) -> Result<Rule, RuleParseError> {
    Rule::parse_line(line)
}

/// Parses the full PSL rule text with the default [`ParseOptions`]
/// (non-strict). Never aborts on a bad line: invalid rules are tallied
/// and parsing continues.
pub fn parse_text(text: &str) -> ParseResult {
    parse_text_with_options(text, ParseOptions::default())
        .expect("non-strict parsing never fails")
}

/// Parses the full PSL rule text under the given [`ParseOptions`].
///
/// With `strict: false` (the default), invalid lines are tallied under
/// `num_invalid_rules` and parsing continues to the end; this call never
/// returns `Err`. With `strict: true`, parsing stops at the first invalid
/// line and returns that line's [`RuleParseError`] instead.
pub fn parse_text_with_options(
    text: &str,
    options: ParseOptions,
) -> Result<ParseResult, RuleParseError> {
    let mut result = ParseResult::default();

    for line in text.split('\n') {
        match classify_line(line) {
            Classified::Whitespace => result.num_whitespace_lines += 1,
            Classified::Comment => result.num_comment_lines += 1,
            Classified::Invalid(e) => {
                if options.strict {
                    return Err(e);
                }
                result.num_invalid_rules += 1;
            }
            Classified::Rule(rule) => result.rules.push(rule),
        }
    }

    Ok(result)
}
