use super::{ColoredRange, MatchSpan};

/// One rule's first match on a line, with the style keys it is painted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub span: MatchSpan,
    pub color_key: String,
    pub color_bold_key: String,
}

/// Turn per-rule matches on one line into the ranges handed to presentation.
///
/// Each match owns a bold range over the matched text and a thin range from
/// the end of the match to the end of the line. Matches are ordered by start,
/// shorter first on equal starts, then walked pairwise:
///
/// - when the next match starts later, the current thin range is cut off
///   where the next match begins;
/// - when the next match starts at the same offset and is longer, the current
///   match is dropped entirely;
/// - otherwise both are kept as computed, even if they overlap.
///
/// Empty ranges are not emitted.
pub fn resolve_overlaps(
    line_index: usize,
    line_len: usize,
    mut candidates: Vec<Candidate>,
) -> Vec<ColoredRange> {
    candidates.sort_by_key(|c| (c.span.start, c.span.len()));

    let mut thin_end = vec![line_len; candidates.len()];
    let mut dropped = vec![false; candidates.len()];

    for i in 1..candidates.len() {
        let current = &candidates[i - 1].span;
        let next = &candidates[i].span;

        if next.start > current.start {
            thin_end[i - 1] = next.start;
        } else if next.len() > current.len() {
            dropped[i - 1] = true;
        }
    }

    let mut ranges = Vec::with_capacity(candidates.len() * 2);
    for (i, candidate) in candidates.into_iter().enumerate() {
        if dropped[i] {
            continue;
        }
        let MatchSpan { start, end, .. } = candidate.span;

        if end > start {
            ranges.push(ColoredRange {
                color_key: candidate.color_bold_key,
                line: line_index,
                start,
                end,
            });
        }
        if thin_end[i] > end {
            ranges.push(ColoredRange {
                color_key: candidate.color_key,
                line: line_index,
                start: end,
                end: thin_end[i],
            });
        }
    }

    ranges
}
