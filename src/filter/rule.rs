use super::error::FilterError;
use crate::highlight::style::FilterColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One named pattern and the way its matches are presented.
///
/// The name doubles as the pattern text and as the rule's identity inside a
/// [`FilterSet`]; it cannot change once the rule exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterRule {
    name: String,
    pub checked: bool,
    pub match_case: bool,
    pub match_word: bool,
    pub match_regex: bool,
    pub color_key: String,
    pub color_bold_key: String,
    pub icon: String,
}

impl Default for FilterRule {
    fn default() -> Self {
        FilterRule::new("")
    }
}

impl FilterRule {
    /// Create an enabled, case-insensitive, literal rule painted blue
    pub fn new(name: impl Into<String>) -> Self {
        let color = FilterColor::default();
        Self {
            name: name.into(),
            checked: true,
            match_case: false,
            match_word: false,
            match_regex: false,
            color_key: color.thin_key(),
            color_bold_key: color.bold_key(),
            icon: color.icon(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_match_case(mut self, value: bool) -> Self {
        self.match_case = value;
        self
    }

    pub fn with_match_word(mut self, value: bool) -> Self {
        self.match_word = value;
        self
    }

    pub fn with_match_regex(mut self, value: bool) -> Self {
        self.match_regex = value;
        self
    }

    pub fn with_checked(mut self, value: bool) -> Self {
        self.checked = value;
        self
    }

    pub fn with_color(mut self, color: FilterColor) -> Self {
        self.set_color(color);
        self
    }

    /// Repaint the rule, updating both style keys and the icon together
    pub fn set_color(&mut self, color: FilterColor) {
        self.color_key = color.thin_key();
        self.color_bold_key = color.bold_key();
        self.icon = color.icon();
    }

    /// Palette color behind the thin key, if it is one of the built-in ones
    pub fn color(&self) -> Option<FilterColor> {
        FilterColor::ALL
            .into_iter()
            .find(|color| color.thin_key() == self.color_key)
    }

    /// Four-letter flag code: checked, case, word, regex; upper-case when on
    pub fn flag_signature(&self) -> String {
        [
            (self.checked, 'F'),
            (self.match_case, 'C'),
            (self.match_word, 'W'),
            (self.match_regex, 'R'),
        ]
        .into_iter()
        .map(|(on, c)| if on { c } else { c.to_ascii_lowercase() })
        .collect()
    }
}

/// Filter rules keyed by name, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FilterRule>", into = "Vec<FilterRule>")]
pub struct FilterSet {
    rules: Vec<FilterRule>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a set from records, keeping the first of any duplicated names.
    ///
    /// Records with an empty name are dropped: an empty pattern would match
    /// every line.
    pub fn from_rules(rules: impl IntoIterator<Item = FilterRule>) -> Self {
        let mut set = FilterSet::new();
        for rule in rules {
            if rule.name.is_empty() {
                tracing::warn!("dropping filter record without a name");
                continue;
            }
            if !set.contains(rule.name()) {
                set.rules.push(rule);
            }
        }
        set
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    pub fn insert(&mut self, rule: FilterRule) -> Result<(), FilterError> {
        if rule.name.is_empty() {
            return Err(FilterError::EmptyName);
        }
        if self.contains(&rule.name) {
            return Err(FilterError::AlreadyExists(rule.name));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&FilterRule, FilterError> {
        self.rules
            .iter()
            .find(|rule| rule.name == name)
            .ok_or_else(|| FilterError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut FilterRule, FilterError> {
        self.rules
            .iter_mut()
            .find(|rule| rule.name == name)
            .ok_or_else(|| FilterError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<FilterRule, FilterError> {
        let pos = self
            .rules
            .iter()
            .position(|rule| rule.name == name)
            .ok_or_else(|| FilterError::NotFound(name.to_string()))?;
        Ok(self.rules.remove(pos))
    }

    pub fn names(&self) -> BTreeSet<&str> {
        self.rules.iter().map(|rule| rule.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules.iter()
    }

    /// Rules currently taking part in selection and highlighting
    pub fn checked(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules.iter().filter(|rule| rule.checked)
    }
}

impl From<Vec<FilterRule>> for FilterSet {
    fn from(rules: Vec<FilterRule>) -> Self {
        FilterSet::from_rules(rules)
    }
}

impl From<FilterSet> for Vec<FilterRule> {
    fn from(set: FilterSet) -> Self {
        set.rules
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterRule;
    type IntoIter = std::slice::Iter<'a, FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
