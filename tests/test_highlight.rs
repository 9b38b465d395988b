use chip_filters::filter::{FilterRule, FilterSet, compile_checked};
use chip_filters::highlight::{
    ColoredRange, FilterColor, HighlightMap, highlight_lines, match_candidates, resolve_line,
};

fn triple(range: &ColoredRange) -> (&str, usize, usize) {
    (range.color_key.as_str(), range.start, range.end)
}

fn bold_ranges(ranges: &[ColoredRange]) -> Vec<&ColoredRange> {
    ranges
        .iter()
        .filter(|r| r.color_key.contains("Bold"))
        .collect()
}

#[test]
fn test_longer_match_at_same_start_supersedes_shorter() {
    let set = FilterSet::from_rules([
        FilterRule::new("AB").with_color(FilterColor::Red),
        FilterRule::new("ABC").with_color(FilterColor::Green),
    ]);
    let (active, _) = compile_checked(&set);
    let ranges = resolve_line(0, "xABCy", &active);

    let bold = bold_ranges(&ranges);
    assert_eq!(bold.len(), 1, "exactly one bold range expected: {:?}", ranges);
    assert_eq!(triple(bold[0]), ("greenBoldBg", 1, 4));
    assert!(ranges.iter().all(|r| !r.color_key.starts_with("red")));
}

#[test]
fn test_rule_order_does_not_change_superseding() {
    let set = FilterSet::from_rules([
        FilterRule::new("ABC").with_color(FilterColor::Green),
        FilterRule::new("AB").with_color(FilterColor::Red),
    ]);
    let (active, _) = compile_checked(&set);
    let ranges = resolve_line(0, "xABCy", &active);

    let bold = bold_ranges(&ranges);
    assert_eq!(bold.len(), 1);
    assert_eq!(triple(bold[0]), ("greenBoldBg", 1, 4));
}

#[test]
fn test_thin_range_stops_at_next_match() {
    let set = FilterSet::from_rules([
        FilterRule::new("foo").with_color(FilterColor::Yellow),
        FilterRule::new("bar").with_color(FilterColor::Purple),
    ]);
    let (active, _) = compile_checked(&set);
    let ranges = resolve_line(2, "foo and bar!", &active);

    let triples: Vec<_> = ranges.iter().map(triple).collect();
    assert_eq!(
        triples,
        vec![
            ("yellowBoldBg", 0, 3),
            ("yellowBg", 3, 8),
            ("purpleBoldBg", 8, 11),
            ("purpleBg", 11, 12),
        ]
    );
    assert!(ranges.iter().all(|r| r.line == 2));
}

#[test]
fn test_identical_matches_at_same_start_are_both_kept() {
    // Two rules hitting the same text are left overlapping on purpose
    let set = FilterSet::from_rules([
        FilterRule::new("err").with_color(FilterColor::Red),
        FilterRule::new("ERR").with_color(FilterColor::Blue),
    ]);
    let (active, _) = compile_checked(&set);
    let ranges = resolve_line(0, "err: x", &active);

    let triples: Vec<_> = ranges.iter().map(triple).collect();
    assert_eq!(
        triples,
        vec![
            ("redBoldBg", 0, 3),
            ("redBg", 3, 6),
            ("blueBoldBg", 0, 3),
            ("blueBg", 3, 6),
        ]
    );
}

#[test]
fn test_only_first_match_of_a_rule_is_used() {
    let set = FilterSet::from_rules([FilterRule::new("ab")]);
    let (active, _) = compile_checked(&set);
    let candidates = match_candidates("ab ab ab", &active);
    assert_eq!(candidates.len(), 1);
    assert_eq!((candidates[0].span.start, candidates[0].span.end), (0, 2));
    assert_eq!(candidates[0].span.rule_name, "ab");
}

#[test]
fn test_unchecked_rule_is_not_highlighted() {
    let set = FilterSet::from_rules([FilterRule::new("foo").with_checked(false)]);
    let highlights = highlight_lines(&["foo"], &set);
    assert!(highlights.map.is_empty());
}

#[test]
fn test_level_tag_without_rule_match() {
    let highlights = highlight_lines(&["2024 E something"], &FilterSet::new());
    let errors = highlights.map.get("errorBg").expect("error range expected");
    assert_eq!(errors.len(), 1);
    assert_eq!(triple(&errors[0]), ("errorBg", 4, 7));
    assert_eq!(highlights.map.range_count(), 1);
}

#[test]
fn test_level_tag_overlaps_rule_ranges() {
    let set = FilterSet::from_rules([FilterRule::new("W sync").with_color(FilterColor::Orange)]);
    let (active, _) = compile_checked(&set);
    let ranges = resolve_line(0, "12:00 W sync done", &active);

    let triples: Vec<_> = ranges.iter().map(triple).collect();
    assert_eq!(
        triples,
        vec![
            ("orangeBoldBg", 6, 12),
            ("orangeBg", 12, 17),
            ("warningBg", 5, 8),
        ]
    );
}

#[test]
fn test_invalid_rule_reported_without_hiding_others() {
    let set = FilterSet::from_rules([
        FilterRule::new("(oops").with_match_regex(true),
        FilterRule::new("fine").with_color(FilterColor::Green),
    ]);
    let highlights = highlight_lines(&["all fine"], &set);

    assert_eq!(highlights.failures.len(), 1);
    let bold = highlights.map.get("greenBoldBg").expect("valid rule highlighted");
    assert_eq!(triple(&bold[0]), ("greenBoldBg", 4, 8));
}

#[test]
fn test_groups_ordered_by_size() {
    let set = FilterSet::from_rules([
        FilterRule::new("a").with_color(FilterColor::Red),
        FilterRule::new("only").with_color(FilterColor::Blue),
    ]);
    let lines = ["a1", "a2", "a3 only here"];
    let highlights = highlight_lines(&lines, &set);

    let sizes: Vec<_> = highlights
        .map
        .groups()
        .map(|(key, ranges)| (key, ranges.len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("redBoldBg", 3),
            ("redBg", 3),
            ("blueBoldBg", 1),
            ("blueBg", 1),
        ]
    );
    assert_eq!(highlights.map.on_line(2).len(), 4);
}

#[test]
fn test_map_groups_keep_first_seen_order_on_ties() {
    let map = HighlightMap::from_ranges([
        ColoredRange {
            color_key: "b".into(),
            line: 0,
            start: 0,
            end: 1,
        },
        ColoredRange {
            color_key: "a".into(),
            line: 0,
            start: 1,
            end: 2,
        },
    ]);
    let keys: Vec<_> = map.groups().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_offsets_are_in_characters() {
    let set = FilterSet::from_rules([FilterRule::new("ok").with_color(FilterColor::Green)]);
    let highlights = highlight_lines(&["ñandú ok!"], &set);
    let bold = highlights.map.get("greenBoldBg").expect("match expected");
    assert_eq!(triple(&bold[0]), ("greenBoldBg", 6, 8));
    let thin = highlights.map.get("greenBg").expect("thin expected");
    assert_eq!(triple(&thin[0]), ("greenBg", 8, 9));
}

#[test]
fn test_line_buckets_agree_with_per_line_lookup() {
    let set = FilterSet::from_rules([
        FilterRule::new("disk").with_color(FilterColor::Red),
        FilterRule::new("W").with_match_word(true).with_color(FilterColor::Blue),
    ]);
    let lines: Vec<String> = (0..200)
        .map(|i| match i % 3 {
            0 => format!("{i} W disk full"),
            1 => format!("{i} I idle"),
            _ => format!("{i} disk ok"),
        })
        .collect();
    let highlights = highlight_lines(&lines, &set);

    let buckets = highlights.map.by_line(lines.len());
    assert_eq!(buckets.len(), lines.len());
    for (index, bucket) in buckets.iter().enumerate() {
        assert_eq!(bucket, &highlights.map.on_line(index));
    }
    assert_eq!(
        buckets.iter().map(Vec::len).sum::<usize>(),
        highlights.map.range_count()
    );
}

#[test]
fn test_line_buckets_ignore_lines_past_the_view() {
    let map = HighlightMap::from_ranges([ColoredRange {
        color_key: "redBg".into(),
        line: 5,
        start: 0,
        end: 1,
    }]);
    let buckets = map.by_line(2);
    assert_eq!(buckets.len(), 2);
    assert!(buckets.iter().all(Vec::is_empty));
}
