use super::ColoredRange;
use super::style::Rgb;

/// Single-letter log-level tags such as `" E "` in Android-style logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
    Warning,
    Verbose,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Verbose,
    ];

    /// The three-character token, letter padded by one space each side
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Error => " E ",
            LogLevel::Info => " I ",
            LogLevel::Debug => " D ",
            LogLevel::Warning => " W ",
            LogLevel::Verbose => " V ",
        }
    }

    pub fn color_key(&self) -> &'static str {
        match self {
            LogLevel::Error => "errorBg",
            LogLevel::Info => "infoBg",
            LogLevel::Debug => "debugBg",
            LogLevel::Warning => "warningBg",
            LogLevel::Verbose => "verboseBg",
        }
    }

    pub(crate) fn background(&self) -> Rgb {
        match self {
            LogLevel::Error => Rgb(224, 95, 95),
            LogLevel::Info => Rgb(172, 234, 114),
            LogLevel::Debug => Rgb(121, 120, 209),
            LogLevel::Warning => Rgb(202, 146, 83),
            LogLevel::Verbose => Rgb(182, 109, 216),
        }
    }
}

/// Ranges for every level tag on a line, independent of any filter rule.
///
/// Every character position is tried, so tags sharing a space such as the two
/// in `" E E "` are both reported.
pub fn level_tag_ranges(line_index: usize, line: &str) -> Vec<ColoredRange> {
    let mut ranges = Vec::new();

    for level in LogLevel::ALL {
        let tag = level.tag();
        for (start, (byte_start, _)) in line.char_indices().enumerate() {
            if line[byte_start..].starts_with(tag) {
                ranges.push(ColoredRange {
                    color_key: level.color_key().to_string(),
                    line: line_index,
                    start,
                    end: start + tag.len(),
                });
            }
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_tag_is_found() {
        let ranges = level_tag_ranges(4, "2024 E something");
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].color_key, "errorBg");
        assert_eq!((ranges[0].line, ranges[0].start, ranges[0].end), (4, 4, 7));
    }

    #[test]
    fn test_every_occurrence_is_reported() {
        let ranges = level_tag_ranges(0, "a W b W c");
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[1].start), (1, 5));
    }

    #[test]
    fn test_tags_sharing_a_space_are_both_reported() {
        let ranges = level_tag_ranges(0, "x E E y");
        let spans: Vec<_> = ranges.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(spans, vec![(1, 4), (3, 6)]);
    }

    #[test]
    fn test_tag_needs_surrounding_spaces() {
        assert!(level_tag_ranges(0, "ERROR Info D:").is_empty());
        assert!(level_tag_ranges(0, "E at start").is_empty());
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let ranges = level_tag_ranges(0, "é I x");
        assert_eq!(ranges.len(), 1);
        assert_eq!((ranges[0].start, ranges[0].end), (1, 4));
    }

    #[test]
    fn test_multiple_levels_on_one_line() {
        let keys: Vec<_> = level_tag_ranges(0, "x D y V z")
            .into_iter()
            .map(|r| r.color_key)
            .collect();
        assert_eq!(keys, vec!["debugBg", "verboseBg"]);
    }
}
