//! Property-flavored checks for this crate's universally-quantified
//! invariants, exercised against concrete inputs rather than a random
//! generator.

use etld_engine::{parse_text, Domain, Label, Rule};

const MINI_PSL: &str = include_str!("fixtures/mini_psl.dat");

#[test]
fn parser_line_count_is_conserved() {
    let result = parse_text(MINI_PSL);
    let expected_lines = MINI_PSL.split('\n').count();
    assert_eq!(result.total_lines(), expected_lines);
}

#[test]
fn parser_never_aborts_on_a_bad_line() {
    let text = "com\n/bad\norg\nexample..org\nnet\n";
    let result = parse_text(text);
    assert_eq!(result.num_invalid_rules, 2);
    assert_eq!(result.rules.len(), 3);
    assert_eq!(result.total_lines(), text.split('\n').count());
}

#[test]
fn matching_rule_never_has_more_labels_than_the_domain() {
    let rule = Rule::parse_line("co.uk").unwrap();
    let short = Domain::new("uk");
    assert!(!rule.matches(&short));

    let long_enough = Domain::new("example.co.uk");
    assert!(rule.matches(&long_enough));
    assert!(long_enough.len() >= rule.len());
}

#[test]
fn applied_segments_rejoin_to_the_original_domain() {
    let rule = Rule::parse_line("co.uk").unwrap();
    let domain = Domain::new("www.example.co.uk");
    let info = rule.apply(&domain);
    assert_eq!(info.to_dotted_string(), domain.to_dotted_string());
}

#[test]
fn round_trip_preserves_labels_and_flags() {
    // `to_dotted_string` renders the label sequence only; the `!` prefix
    // lives in a separate flag stripped during parsing, so the canonical
    // reparseable form reattaches it.
    for line in ["com", "*.kobe.jp", "!city.kobe.jp", "co.uk"] {
        let rule = Rule::parse_line(line).unwrap();
        let canonical = if rule.is_exception() {
            format!("!{}", rule.to_dotted_string())
        } else {
            rule.to_dotted_string()
        };
        let reparsed = Rule::parse_line(&canonical).unwrap();
        assert_eq!(rule.labels(), reparsed.labels());
        assert_eq!(rule.is_wildcard(), reparsed.is_wildcard());
        assert_eq!(rule.is_exception(), reparsed.is_exception());
    }
}

#[test]
fn wildcard_matches_the_empty_label_when_constructed_programmatically() {
    // Unreachable through PSL text (the parser rejects adjacent/trailing
    // delimiters), but reachable through the labels+flags constructor.
    let rule = Rule::new(vec![Label::wildcard(), Label::new("jp")], false, false);
    let domain = Domain::from_labels(vec![Label::new(""), Label::new("jp")]);
    assert!(rule.matches(&domain));
}
