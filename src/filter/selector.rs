use super::error::FilterError;
use super::natural::natural_cmp;
use super::pattern::compile_checked;
use super::rule::FilterSet;
use clap::ValueEnum;
use regex::RegexBuilder;
use std::collections::HashSet;

/// How the derived view is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Numeric-aware, case-insensitive ordering of the line text
    #[default]
    Natural,
    /// Order of first appearance in the source document
    Document,
}

/// A source line kept in the derived view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLine {
    /// Index of the first source line carrying this text
    pub source_index: usize,
    pub text: String,
}

/// Result of one selection pass
#[derive(Debug, Default)]
pub struct Selection {
    pub entries: Vec<SelectedLine>,
    /// Rules skipped because their pattern did not compile
    pub failures: Vec<FilterError>,
}

impl Selection {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    pub fn into_lines(self) -> Vec<String> {
        self.entries.into_iter().map(|entry| entry.text).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What adding a brand-new rule should do to its regex flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The name occurs as plain text; keep the rule literal
    Literal,
    /// Only the regex reading of the name matches; switch the rule to regex mode
    PromoteToRegex,
}

/// Collect the deduplicated, ordered lines matched by any checked rule.
///
/// A line is kept as soon as one rule matches it. Equal lines collapse onto
/// the first occurrence, and lines that compare equal under `order` keep
/// their source order.
pub fn select_lines<S: AsRef<str>>(source: &[S], rules: &FilterSet, order: SortOrder) -> Selection {
    let (active, failures) = compile_checked(rules);

    let mut seen = HashSet::new();
    let mut entries: Vec<SelectedLine> = Vec::new();
    for (source_index, line) in source.iter().enumerate() {
        let line = line.as_ref();
        if !active.iter().any(|rule| rule.pattern.is_match(line)) {
            continue;
        }
        if seen.insert(line) {
            entries.push(SelectedLine {
                source_index,
                text: line.to_string(),
            });
        }
    }

    if order == SortOrder::Natural {
        entries.sort_by(|a, b| natural_cmp(&a.text, &b.text));
    }

    tracing::debug!(
        source_lines = source.len(),
        rules = active.len(),
        selected = entries.len(),
        "selection finished"
    );

    Selection { entries, failures }
}

/// Decide how a brand-new rule named `name` should be registered.
///
/// A case-insensitive substring hit keeps the rule literal. Without one, a
/// case-insensitive regex hit promotes it to regex mode. When neither reading
/// matches any line the rule is refused with [`FilterError::NoMatchFound`].
pub fn probe_new_filter<S: AsRef<str>>(
    source: &[S],
    name: &str,
) -> Result<ProbeOutcome, FilterError> {
    if name.is_empty() {
        return Err(FilterError::EmptyName);
    }

    let needle = name.to_lowercase();
    let plain_hit = source
        .iter()
        .any(|line| line.as_ref().to_lowercase().contains(&needle));
    if plain_hit {
        return Ok(ProbeOutcome::Literal);
    }

    let regex_hit = match RegexBuilder::new(name).case_insensitive(true).build() {
        Ok(regex) => source.iter().any(|line| regex.is_match(line.as_ref())),
        Err(err) => {
            tracing::debug!(filter = name, error = %err, "name is not a valid regex");
            false
        }
    };

    if regex_hit {
        tracing::info!(filter = name, "no literal match, switching filter to regex mode");
        Ok(ProbeOutcome::PromoteToRegex)
    } else {
        tracing::info!(filter = name, "filter matches no line");
        Err(FilterError::NoMatchFound(name.to_string()))
    }
}
