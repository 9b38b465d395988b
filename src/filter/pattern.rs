use super::error::FilterError;
use super::rule::{FilterRule, FilterSet};
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Escape every regex metacharacter so the text matches itself literally
pub fn escape_regex(text: &str) -> String {
    regex::escape(text)
}

/// An executable matcher built from a rule's pattern text and flags.
///
/// Built fresh for every scan and never persisted.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    case_sensitive: bool,
    word_bounded: bool,
}

impl CompiledPattern {
    /// Compile `pattern_text` in the mode selected by the two matching flags.
    ///
    /// With `is_literal` the text is escaped first and can never fail to
    /// compile; otherwise invalid syntax yields [`FilterError::InvalidPattern`].
    pub fn compile(
        pattern_text: &str,
        match_word: bool,
        match_case: bool,
        is_literal: bool,
    ) -> Result<Self, FilterError> {
        let body = if is_literal {
            escape_regex(pattern_text)
        } else {
            pattern_text.to_string()
        };
        let source = if match_word {
            format!(r"\b(?:{})\b", body)
        } else {
            body
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(!match_case)
            .build()
            .map_err(|source| FilterError::InvalidPattern {
                pattern: pattern_text.to_string(),
                source,
            })?;

        Ok(Self {
            regex,
            case_sensitive: match_case,
            word_bounded: match_word,
        })
    }

    /// Compile a rule, treating its name literally unless it is in regex mode
    pub fn for_rule(rule: &FilterRule) -> Result<Self, FilterError> {
        Self::compile(
            rule.name(),
            rule.match_word,
            rule.match_case,
            !rule.match_regex,
        )
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Character offsets of the first match on `line`
    pub fn find(&self, line: &str) -> Option<Range<usize>> {
        self.regex.find(line).map(|m| {
            let start = line[..m.start()].chars().count();
            start..start + m.as_str().chars().count()
        })
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_word_bounded(&self) -> bool {
        self.word_bounded
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// A checked rule paired with the matcher compiled for the current scan
#[derive(Debug)]
pub struct ActiveRule<'a> {
    pub rule: &'a FilterRule,
    pub pattern: CompiledPattern,
}

/// Compile every checked rule in insertion order.
///
/// Rules that fail to compile are left out and reported alongside, so one
/// broken regex never hides the matches of the others.
pub fn compile_checked(rules: &FilterSet) -> (Vec<ActiveRule<'_>>, Vec<FilterError>) {
    let mut active = Vec::new();
    let mut failures = Vec::new();

    for rule in rules.checked() {
        match CompiledPattern::for_rule(rule) {
            Ok(pattern) => active.push(ActiveRule { rule, pattern }),
            Err(err) => {
                tracing::warn!(filter = rule.name(), error = %err, "skipping filter");
                failures.push(err);
            }
        }
    }

    (active, failures)
}
