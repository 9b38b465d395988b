use thiserror::Error;

/// Errors produced while managing filter rules or matching with them
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Filter pattern is empty")]
    EmptyName,

    #[error("Filter '{0}' already exists")]
    AlreadyExists(String),

    #[error("No filter named '{0}'")]
    NotFound(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("No matching lines found for '{0}'")]
    NoMatchFound(String),
}

impl FilterError {
    /// Name of the rule this error refers to, when there is one
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            FilterError::EmptyName => None,
            FilterError::AlreadyExists(name)
            | FilterError::NotFound(name)
            | FilterError::NoMatchFound(name) => Some(name),
            FilterError::InvalidPattern { pattern, .. } => Some(pattern),
        }
    }
}
