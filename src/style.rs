//! Style table: file extension to comment prefix
//!
//! Extensions are full multi-suffix extensions (`archive.tar.gz` has extension
//! `.tar.gz`). Lookup is exact: a `.gz` file is never matched by a `.tar.gz` key
//! and vice versa.

use crate::error::StampError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One style table row as it appears in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    /// Full extension including the leading dot, e.g. `.rs` or `.tar.gz`
    pub extension: String,
    /// Comment token written before every header line, e.g. `//`
    pub prefix: String,
}

impl StyleEntry {
    pub fn new(extension: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            prefix: prefix.into(),
        }
    }

    /// Parse a `EXT=PREFIX` pair as given on the command line
    pub fn parse(spec: &str) -> Result<Self, StampError> {
        let (extension, prefix) = spec.split_once('=').ok_or_else(|| {
            StampError::InvalidStyle(format!("'{}' is not of the form EXT=PREFIX", spec))
        })?;
        let entry = Self::new(extension.trim(), prefix.trim());
        entry.validate()?;
        Ok(entry)
    }

    fn validate(&self) -> Result<(), StampError> {
        if !is_valid_extension(&self.extension) {
            return Err(StampError::InvalidStyle(format!(
                "extension '{}' must start with '.' and name at least one suffix",
                self.extension
            )));
        }
        if self.prefix.is_empty() {
            return Err(StampError::InvalidStyle(format!(
                "prefix for '{}' cannot be empty",
                self.extension
            )));
        }
        Ok(())
    }
}

/// Built-in rows used when no configuration overrides them
pub fn default_entries() -> Vec<StyleEntry> {
    vec![
        StyleEntry::new(".rs", "//"),
        StyleEntry::new(".bash", "#"),
        StyleEntry::new(".py", "#"),
    ]
}

/// Mapping from full extension to comment prefix. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    prefixes: BTreeMap<String, String>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from configuration rows, rejecting duplicate extensions
    pub fn from_entries(entries: &[StyleEntry]) -> Result<Self, StampError> {
        let mut table = Self::new();
        for entry in entries {
            entry.validate()?;
            if table.prefixes.contains_key(&entry.extension) {
                return Err(StampError::InvalidStyle(format!(
                    "extension '{}' is listed more than once",
                    entry.extension
                )));
            }
            table
                .prefixes
                .insert(entry.extension.clone(), entry.prefix.clone());
        }
        Ok(table)
    }

    /// Insert or replace a row. Returns the previous prefix for the extension.
    pub fn insert(&mut self, entry: StyleEntry) -> Result<Option<String>, StampError> {
        entry.validate()?;
        Ok(self.prefixes.insert(entry.extension, entry.prefix))
    }

    /// Exact-match lookup
    pub fn prefix_for(&self, extension: &str) -> Option<&str> {
        self.prefixes.get(extension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Full extension of a file name: every dot-separated suffix joined together.
///
/// - `a.rs` -> `.rs`, `a.b.rs` -> `.b.rs`, `archive.tar.gz` -> `.tar.gz`
/// - leading dots do not start a suffix: `.gitignore` has none, `.hidden.rs` -> `.rs`
/// - a name ending in `.` has none
pub fn full_extension(file_name: &str) -> Option<String> {
    if file_name.ends_with('.') {
        return None;
    }
    let name = file_name.trim_start_matches('.');
    let (_, suffixes) = name.split_once('.')?;
    Some(format!(".{}", suffixes))
}

/// Full extension of the final component of `path`. Non UTF-8 names have none.
pub fn path_extension(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(full_extension)
}

fn is_valid_extension(extension: &str) -> bool {
    extension.starts_with('.')
        && full_extension(&format!("file{}", extension)).as_deref() == Some(extension)
}
