use crate::correspondence::find_line_in_document;
use crate::filter::{
    FilterError, FilterRule, FilterSet, ProbeOutcome, SortOrder, probe_new_filter, select_lines,
};
use crate::highlight::{FilterColor, HighlightMap, highlight_lines};

/// Derived view produced by one full scan
#[derive(Debug, Default)]
pub struct Scan {
    pub lines: Vec<String>,
    pub highlights: HighlightMap,
    /// Rules skipped because their pattern did not compile
    pub failures: Vec<FilterError>,
}

/// Result of registering a new filter
#[derive(Debug)]
pub struct AddOutcome {
    /// The filter was switched to regex mode because only its regex reading matched
    pub promoted: bool,
    pub scan: Scan,
}

/// The source document and filter set a host works on.
///
/// Every mutation leaves the session consistent; call [`FilterSession::refresh`]
/// afterwards to rebuild the derived view.
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    source: Vec<String>,
    rules: FilterSet,
    order: SortOrder,
}

impl FilterSession {
    pub fn new(source: Vec<String>, rules: FilterSet) -> Self {
        Self {
            source,
            rules,
            order: SortOrder::default(),
        }
    }

    pub fn from_text(text: &str, rules: FilterSet) -> Self {
        Self::new(text.lines().map(str::to_string).collect(), rules)
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn rules(&self) -> &FilterSet {
        &self.rules
    }

    pub fn into_rules(self) -> FilterSet {
        self.rules
    }

    /// Register a brand-new filter and rescan.
    ///
    /// The filter is stored only if at least one source line matches it,
    /// either as plain text or as a regex; a filter that only matches as a
    /// regex is stored with `match_regex` set. On any error the filter set is
    /// left exactly as it was.
    pub fn add_filter(&mut self, rule: FilterRule) -> Result<AddOutcome, FilterError> {
        if rule.name().is_empty() {
            return Err(FilterError::EmptyName);
        }
        if self.rules.contains(rule.name()) {
            return Err(FilterError::AlreadyExists(rule.name().to_string()));
        }

        let outcome = probe_new_filter(&self.source, rule.name())?;
        let promoted = outcome == ProbeOutcome::PromoteToRegex && !rule.match_regex;
        let rule = if outcome == ProbeOutcome::PromoteToRegex {
            rule.with_match_regex(true)
        } else {
            rule
        };
        self.rules.insert(rule)?;

        Ok(AddOutcome {
            promoted,
            scan: self.refresh(),
        })
    }

    pub fn remove_filter(&mut self, name: &str) -> Result<FilterRule, FilterError> {
        self.rules.remove(name)
    }

    pub fn set_checked(&mut self, name: &str, value: bool) -> Result<(), FilterError> {
        self.rules.get_mut(name)?.checked = value;
        Ok(())
    }

    pub fn set_match_case(&mut self, name: &str, value: bool) -> Result<(), FilterError> {
        self.rules.get_mut(name)?.match_case = value;
        Ok(())
    }

    pub fn set_match_word(&mut self, name: &str, value: bool) -> Result<(), FilterError> {
        self.rules.get_mut(name)?.match_word = value;
        Ok(())
    }

    pub fn set_match_regex(&mut self, name: &str, value: bool) -> Result<(), FilterError> {
        self.rules.get_mut(name)?.match_regex = value;
        Ok(())
    }

    pub fn set_color(&mut self, name: &str, color: FilterColor) -> Result<(), FilterError> {
        self.rules.get_mut(name)?.set_color(color);
        Ok(())
    }

    /// Select, order and highlight the derived view from scratch
    pub fn refresh(&self) -> Scan {
        let selection = select_lines(&self.source, &self.rules, self.order);
        let failures = selection.failures;
        let lines: Vec<String> = selection
            .entries
            .into_iter()
            .map(|entry| entry.text)
            .collect();
        let highlights = highlight_lines(&lines, &self.rules);

        Scan {
            lines,
            highlights: highlights.map,
            failures,
        }
    }

    /// Source line index of a line taken from the derived view
    pub fn locate(&self, derived_line: &str) -> Option<usize> {
        find_line_in_document(&self.source, derived_line)
    }
}
