//! Filter rules and line selection
//!
//! A filter is a named pattern: the name is the text searched for, and a set
//! of flags decides how it is matched.
//!
//! # Matching modes
//!
//! ```text
//! match_word  match_case   regex built from the name
//! false       true         name            (case-sensitive)
//! false       false        name            (case-insensitive)
//! true        false        \b(?:name)\b    (case-insensitive)
//! true        true         \b(?:name)\b    (case-sensitive)
//! ```
//!
//! Unless `match_regex` is set the name is escaped first, so `a.b` only
//! matches the three characters `a.b`.
//!
//! # Selection
//!
//! [`select_lines`] keeps every source line matched by at least one checked
//! rule, drops repeated lines and orders the rest with [`natural_cmp`].
//! [`probe_new_filter`] decides whether a freshly typed filter should be kept
//! literal, switched to regex mode, or refused because nothing matches.

pub mod error;
pub mod natural;
pub mod pattern;
pub mod rule;
pub mod selector;

pub use error::FilterError;
pub use natural::natural_cmp;
pub use pattern::{ActiveRule, CompiledPattern, compile_checked, escape_regex};
pub use rule::{FilterRule, FilterSet};
pub use selector::{
    ProbeOutcome, SelectedLine, Selection, SortOrder, probe_new_filter, select_lines,
};
