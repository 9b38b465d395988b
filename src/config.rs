use crate::filter::FilterSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_PREFIX: &str = "config_";
const FILTERED_PREFIX: &str = "filtered_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read filter file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse filter file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: json5::Error,
    },
    #[error("Failed to serialize filters: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Sibling of `source` whose file name carries `prefix`
fn sibling_with_prefix(source: &Path, prefix: &str) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{prefix}{file_name}"))
}

/// Where the filters of `source` are kept: `config_<name>` next to it
pub fn config_path_for(source: &Path) -> PathBuf {
    sibling_with_prefix(source, CONFIG_PREFIX)
}

/// Where the derived view of `source` is written: `filtered_<name>` next to it
pub fn filtered_path_for(source: &Path) -> PathBuf {
    sibling_with_prefix(source, FILTERED_PREFIX)
}

/// Parse a JSON array of filter records.
///
/// Comments and trailing commas are accepted, unknown fields are ignored and
/// missing ones take their defaults. Records without a name are dropped.
pub fn parse_filter_set(raw: &str) -> Result<FilterSet, json5::Error> {
    json5::from_str(raw)
}

/// Load the filters stored at `path`; a missing file is an empty set
pub fn load_filter_set(path: &Path) -> Result<FilterSet, ConfigError> {
    let path_display = path.display().to_string();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path_display, "no filter file yet");
            return Ok(FilterSet::new());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path_display,
                source,
            });
        }
    };

    if raw.trim().is_empty() {
        return Ok(FilterSet::new());
    }

    let set = parse_filter_set(&raw).map_err(|source| ConfigError::Parse {
        path: path_display.clone(),
        source,
    })?;
    tracing::debug!(path = %path_display, filters = set.len(), "loaded filters");
    Ok(set)
}

pub fn save_filter_set(path: &Path, set: &FilterSet) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(set)?;
    fs::write(path, json).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), filters = set.len(), "saved filters");
    Ok(())
}

/// Write the derived view, one line per entry
pub fn write_derived_view(path: &Path, lines: &[String]) -> Result<(), ConfigError> {
    fs::write(path, lines.join("\n")).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })
}
