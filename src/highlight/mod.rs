//! Colored ranges for the derived view
//!
//! Every line is resolved on its own: each checked rule contributes its first
//! match, overlapping matches are settled by [`overlap::resolve_overlaps`],
//! and log-level tags are laid on top without taking part in that settling.
//! The ranges of a whole view are then grouped by color key.

pub mod level;
pub mod overlap;
pub mod style;

use crate::filter::{ActiveRule, FilterError, FilterSet, compile_checked};
use overlap::Candidate;

pub use level::{LogLevel, level_tag_ranges};
pub use overlap::resolve_overlaps;
pub use style::{FilterColor, HighlightStyle, Rgb, StyleSpec};

/// One match of one rule on one line, in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    pub rule_name: String,
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A styled stretch of one line, `start..end` in character offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredRange {
    pub color_key: String,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// First match of every active rule on `line`
pub fn match_candidates(line: &str, rules: &[ActiveRule<'_>]) -> Vec<Candidate> {
    rules
        .iter()
        .filter_map(|active| {
            let found = active.pattern.find(line)?;
            Some(Candidate {
                span: MatchSpan {
                    rule_name: active.rule.name().to_string(),
                    start: found.start,
                    end: found.end,
                },
                color_key: active.rule.color_key.clone(),
                color_bold_key: active.rule.color_bold_key.clone(),
            })
        })
        .collect()
}

/// All ranges for one line: resolved rule matches followed by level tags
pub fn resolve_line(line_index: usize, line: &str, rules: &[ActiveRule<'_>]) -> Vec<ColoredRange> {
    let line_len = line.chars().count();
    let mut ranges = resolve_overlaps(line_index, line_len, match_candidates(line, rules));
    ranges.extend(level_tag_ranges(line_index, line));
    ranges
}

/// Ranges of a whole view, grouped by color key.
///
/// Groups are ordered by descending number of ranges; groups of equal size
/// keep the order in which their key first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    groups: Vec<(String, Vec<ColoredRange>)>,
}

impl HighlightMap {
    pub fn from_ranges(ranges: impl IntoIterator<Item = ColoredRange>) -> Self {
        let mut groups: Vec<(String, Vec<ColoredRange>)> = Vec::new();
        for range in ranges {
            match groups.iter().position(|(key, _)| *key == range.color_key) {
                Some(pos) => groups[pos].1.push(range),
                None => groups.push((range.color_key.clone(), vec![range])),
            }
        }
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        Self { groups }
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ColoredRange])> {
        self.groups
            .iter()
            .map(|(key, ranges)| (key.as_str(), ranges.as_slice()))
    }

    pub fn get(&self, color_key: &str) -> Option<&[ColoredRange]> {
        self.groups
            .iter()
            .find(|(key, _)| key == color_key)
            .map(|(_, ranges)| ranges.as_slice())
    }

    /// Every range on `line`, in group order
    pub fn on_line(&self, line: usize) -> Vec<&ColoredRange> {
        self.groups
            .iter()
            .flat_map(|(_, ranges)| ranges.iter())
            .filter(|range| range.line == line)
            .collect()
    }

    /// Ranges bucketed by line for the first `line_count` lines, each bucket
    /// in group order. Built in one pass over the map.
    pub fn by_line(&self, line_count: usize) -> Vec<Vec<&ColoredRange>> {
        let mut buckets = vec![Vec::new(); line_count];
        for range in self.groups.iter().flat_map(|(_, ranges)| ranges.iter()) {
            if let Some(bucket) = buckets.get_mut(range.line) {
                bucket.push(range);
            }
        }
        buckets
    }

    pub fn range_count(&self) -> usize {
        self.groups.iter().map(|(_, ranges)| ranges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Result of one highlight pass
#[derive(Debug, Default)]
pub struct Highlights {
    pub map: HighlightMap,
    /// Rules skipped because their pattern did not compile
    pub failures: Vec<FilterError>,
}

/// Resolve the ranges of every line of a derived view against the checked rules
pub fn highlight_lines<S: AsRef<str>>(lines: &[S], rules: &FilterSet) -> Highlights {
    let (active, failures) = compile_checked(rules);

    let ranges = lines
        .iter()
        .enumerate()
        .flat_map(|(index, line)| resolve_line(index, line.as_ref(), &active));
    let map = HighlightMap::from_ranges(ranges);

    tracing::debug!(
        lines = lines.len(),
        ranges = map.range_count(),
        "highlight finished"
    );

    Highlights { map, failures }
}
