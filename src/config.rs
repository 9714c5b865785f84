//! Configuration System
//!
//! Layered configuration for stamp passes. Sources are merged lowest to highest:
//! built-in defaults, the global config file, `<root>/licensify.toml`, then
//! `LICENSIFY__*` environment variables. Command-line flags are applied on top
//! by the CLI.

use crate::error::StampError;
use crate::header::{self, HeaderBlock};
use crate::logging::LoggingConfig;
use crate::stamper::{ExistingHeaderPolicy, RunMode, StampConfig};
use crate::style::{self, StyleEntry, StyleTable};
use crate::tree::walker::default_exclusions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LicensifyConfig {
    /// Stamp pass settings
    #[serde(default)]
    pub stamp: StampSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Stamp pass settings as they appear in `[stamp]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampSettings {
    /// Traversal root (defaults to current directory)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory names never descended into
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Header lines, without comment prefixes
    #[serde(default = "header::default_lines")]
    pub header: Vec<String>,

    /// Read header lines from this file instead of `header`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_file: Option<PathBuf>,

    /// `skip` or `force`
    #[serde(default)]
    pub existing_header: ExistingHeaderPolicy,

    #[serde(default)]
    pub follow_symlinks: bool,

    /// Extension to comment prefix rows
    #[serde(default = "style::default_entries")]
    pub styles: Vec<StyleEntry>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude() -> Vec<String> {
    default_exclusions().into_iter().collect()
}

impl Default for StampSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            header: header::default_lines(),
            header_file: None,
            existing_header: ExistingHeaderPolicy::default(),
            follow_symlinks: false,
            styles: style::default_entries(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Style(String),
    Header(String),
    Exclude(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Style(msg) => write!(f, "Style: {}", msg),
            ValidationError::Header(msg) => write!(f, "Header: {}", msg),
            ValidationError::Exclude(msg) => write!(f, "Exclude: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StampSettings {
    /// Add or replace the row for `entry.extension`
    pub fn set_style(&mut self, entry: StyleEntry) {
        match self
            .styles
            .iter_mut()
            .find(|existing| existing.extension == entry.extension)
        {
            Some(existing) => existing.prefix = entry.prefix,
            None => self.styles.push(entry),
        }
    }

    /// Add a directory name to the exclusion list if not already there
    pub fn add_exclude(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.exclude.contains(&name) {
            self.exclude.push(name);
        }
    }

    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = StyleTable::from_entries(&self.styles) {
            errors.push(ValidationError::Style(e.to_string()));
        }

        if self.header_file.is_none() && self.header.is_empty() {
            errors.push(ValidationError::Header(
                "header must contain at least one line".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.exclude {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                errors.push(ValidationError::Exclude(format!(
                    "'{}' must be a single directory name",
                    name
                )));
            }
            if !seen.insert(name) {
                errors.push(ValidationError::Exclude(format!(
                    "'{}' is listed more than once",
                    name
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolve into the explicit record a stamp pass runs on
    pub fn to_stamp_config(&self, mode: RunMode) -> Result<StampConfig, StampError> {
        let header_lines = match &self.header_file {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| StampError::Read {
                    path: path.clone(),
                    source,
                })?;
                HeaderBlock::from_text(&text)
            }
            None => HeaderBlock::new(self.header.clone()),
        };

        Ok(StampConfig {
            root: self.root.clone(),
            exclusion_names: self.exclude.iter().cloned().collect(),
            extension_to_prefix: StyleTable::from_entries(&self.styles)?,
            header_lines,
            existing_header: self.existing_header,
            follow_symlinks: self.follow_symlinks,
            mode,
        })
    }

    /// TOML suitable for a `licensify.toml`, under a `[stamp]` table
    pub fn to_toml(&self) -> Result<String, StampError> {
        #[derive(Serialize)]
        struct Section<'a> {
            stamp: &'a StampSettings,
        }
        toml::to_string_pretty(&Section { stamp: self })
            .map_err(|e| StampError::Config(format!("Failed to serialize settings: {}", e)))
    }
}

impl LicensifyConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = match self.stamp.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Join validation failures into one configuration error
pub fn validation_failure(errors: &[ValidationError]) -> StampError {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    StampError::Config(format!(
        "Configuration validation failed:\n{}",
        messages.join("\n")
    ))
}
