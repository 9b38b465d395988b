use chip_filters::filter::{CompiledPattern, FilterError, FilterRule};

fn rule_matches(rule: &FilterRule, line: &str) -> bool {
    CompiledPattern::for_rule(rule)
        .expect("pattern should compile")
        .is_match(line)
}

#[test]
fn test_word_boundary_only_matches_whole_words() {
    let word = FilterRule::new("cat").with_match_word(true);
    assert!(rule_matches(&word, "the cat sat"));
    assert!(!rule_matches(&word, "category"));

    let substring = FilterRule::new("cat");
    assert!(rule_matches(&substring, "the cat sat"));
    assert!(rule_matches(&substring, "category"));
}

#[test]
fn test_match_case_controls_sensitivity() {
    let sensitive = FilterRule::new("Error").with_match_case(true);
    assert!(rule_matches(&sensitive, "Error: x"));
    assert!(!rule_matches(&sensitive, "error: x"));

    let insensitive = FilterRule::new("Error");
    assert!(rule_matches(&insensitive, "Error: x"));
    assert!(rule_matches(&insensitive, "error: x"));
}

#[test]
fn test_word_and_case_combined() {
    let rule = FilterRule::new("Cat").with_match_word(true).with_match_case(true);
    assert!(rule_matches(&rule, "a Cat here"));
    assert!(!rule_matches(&rule, "a cat here"));
    assert!(!rule_matches(&rule, "Catalog"));

    let rule = FilterRule::new("Cat").with_match_word(true);
    assert!(rule_matches(&rule, "a cat here"));
    assert!(!rule_matches(&rule, "catalog"));
}

#[test]
fn test_literal_rule_does_not_interpret_metacharacters() {
    let rule = FilterRule::new("a.c");
    assert!(rule_matches(&rule, "xa.cx"));
    assert!(!rule_matches(&rule, "abc"));
}

#[test]
fn test_regex_rule_interprets_metacharacters() {
    let rule = FilterRule::new(r"a.c").with_match_regex(true);
    assert!(rule_matches(&rule, "abc"));

    let digits = FilterRule::new(r"\d+").with_match_regex(true);
    assert!(rule_matches(&digits, "retry 42"));
    assert!(!rule_matches(&digits, "no numbers"));
}

#[test]
fn test_word_bound_alternation_is_grouped() {
    let rule = FilterRule::new("warn|fail")
        .with_match_regex(true)
        .with_match_word(true);
    assert!(rule_matches(&rule, "it will fail now"));
    assert!(!rule_matches(&rule, "failure"));
    assert!(!rule_matches(&rule, "forewarned"));
}

#[test]
fn test_invalid_regex_is_reported() {
    let rule = FilterRule::new("(unbalanced").with_match_regex(true);
    match CompiledPattern::for_rule(&rule) {
        Err(FilterError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unbalanced"),
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_find_returns_first_match_offsets() {
    let pattern = CompiledPattern::compile("ab", false, false, true).expect("compiles");
    assert_eq!(pattern.find("xxABxab"), Some(2..4));
    assert_eq!(pattern.find("nothing"), None);
}
