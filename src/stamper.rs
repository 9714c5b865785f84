//! Header stamping over a directory tree
//!
//! A stamp pass walks the traversal root, and for every file whose full
//! extension has a style table entry, rewrites the file in place as
//! `<prefixed header lines>`, a blank line, then the original content.
//!
//! Files are handled strictly one at a time: read fully, then overwritten.
//! The first read, decode or write failure aborts the pass; files stamped
//! before the failure stay stamped.

use crate::error::StampError;
use crate::header::HeaderBlock;
use crate::style::{self, StyleEntry, StyleTable};
use crate::tree::path::{relative_to, resolve_root};
use crate::tree::walker::{default_exclusions, Entry, Walker, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// What to do with a file that already opens with the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingHeaderPolicy {
    /// Leave the file untouched; repeated passes are idempotent
    #[default]
    Skip,
    /// Prepend the header again
    Force,
}

/// Whether a pass writes files or only reports what it would write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Write,
    Check,
}

/// Everything a stamp pass needs. No process-wide state is consulted.
#[derive(Debug, Clone)]
pub struct StampConfig {
    pub root: PathBuf,
    pub exclusion_names: BTreeSet<String>,
    pub extension_to_prefix: StyleTable,
    pub header_lines: HeaderBlock,
    pub existing_header: ExistingHeaderPolicy,
    pub follow_symlinks: bool,
    pub mode: RunMode,
}

impl StampConfig {
    /// Built-in exclusions, style table and MPL header for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let extension_to_prefix = StyleTable::from_entries(&style::default_entries())
            .unwrap_or_default();
        Self {
            root: root.into(),
            exclusion_names: default_exclusions(),
            extension_to_prefix,
            header_lines: HeaderBlock::default(),
            existing_header: ExistingHeaderPolicy::default(),
            follow_symlinks: false,
            mode: RunMode::default(),
        }
    }

    pub fn with_styles(mut self, entries: &[StyleEntry]) -> Result<Self, StampError> {
        self.extension_to_prefix = StyleTable::from_entries(entries)?;
        Ok(self)
    }

    pub fn with_header(mut self, lines: Vec<String>) -> Self {
        self.header_lines = HeaderBlock::new(lines);
        self
    }

    pub fn with_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy(mut self, policy: ExistingHeaderPolicy) -> Self {
        self.existing_header = policy;
        self
    }

    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), StampError> {
        if self.header_lines.is_empty() {
            return Err(StampError::Config(
                "header must contain at least one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why a file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoExtension,
    UnknownExtension,
    HeaderPresent,
}

/// Result of handling one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Stamped,
    /// Check mode: the file lacks the header and would be stamped
    WouldStamp,
    Skipped(SkipReason),
}

/// Per-pass accounting
#[derive(Debug, Clone, Serialize)]
pub struct StampReport {
    pub root: PathBuf,
    pub mode: RunMode,
    /// Files stamped, or in check mode files that would be stamped; relative to `root`
    pub stamped: Vec<PathBuf>,
    pub header_present: usize,
    pub no_extension: usize,
    pub unknown_extension: usize,
    pub symlinks_skipped: usize,
    pub cycles_skipped: usize,
}

impl StampReport {
    fn new(root: PathBuf, mode: RunMode) -> Self {
        Self {
            root,
            mode,
            stamped: Vec::new(),
            header_present: 0,
            no_extension: 0,
            unknown_extension: 0,
            symlinks_skipped: 0,
            cycles_skipped: 0,
        }
    }

    fn record(&mut self, relative: PathBuf, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Stamped | FileOutcome::WouldStamp => self.stamped.push(relative),
            FileOutcome::Skipped(SkipReason::HeaderPresent) => self.header_present += 1,
            FileOutcome::Skipped(SkipReason::NoExtension) => self.no_extension += 1,
            FileOutcome::Skipped(SkipReason::UnknownExtension) => self.unknown_extension += 1,
        }
    }

    /// Files skipped for any reason
    pub fn skipped(&self) -> usize {
        self.header_present
            + self.no_extension
            + self.unknown_extension
            + self.symlinks_skipped
            + self.cycles_skipped
    }

    /// Check mode found files missing the header
    pub fn has_pending(&self) -> bool {
        self.mode == RunMode::Check && !self.stamped.is_empty()
    }
}

/// Comment prefix for `path`, or the reason it has none
pub fn style_for<'a>(path: &Path, styles: &'a StyleTable) -> Result<&'a str, SkipReason> {
    let extension = style::path_extension(path).ok_or(SkipReason::NoExtension)?;
    styles
        .prefix_for(&extension)
        .ok_or(SkipReason::UnknownExtension)
}

/// Whether an existing header stops the file from being stamped
pub fn blocks_restamp(
    policy: ExistingHeaderPolicy,
    header: &HeaderBlock,
    prefix: &str,
    content: &str,
) -> bool {
    policy == ExistingHeaderPolicy::Skip && header.is_present(prefix, content)
}

fn read_text(path: &Path) -> Result<String, StampError> {
    let bytes = fs::read(path).map_err(|source| StampError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| StampError::Decode {
        path: path.to_path_buf(),
    })
}

/// Runs stamp passes for one configuration
pub struct Stamper {
    config: StampConfig,
}

impl Stamper {
    pub fn new(config: StampConfig) -> Self {
        Self { config }
    }

    /// Walk the root and stamp every matching file
    pub fn run(&self) -> Result<StampReport, StampError> {
        self.config.validate()?;
        let root = resolve_root(&self.config.root)?;

        info!(
            root = %root.display(),
            mode = ?self.config.mode,
            styles = self.config.extension_to_prefix.len(),
            "Starting stamp pass"
        );

        let walker = Walker::with_config(
            root.clone(),
            WalkerConfig {
                follow_symlinks: self.config.follow_symlinks,
                exclusion_names: self.config.exclusion_names.clone(),
            },
        );

        let mut report = StampReport::new(root.clone(), self.config.mode);
        let result = walker.walk(|entry| {
            match entry {
                Entry::File(path) => {
                    let outcome = self.stamp_file(path)?;
                    report.record(relative_to(&root, path), outcome);
                }
                Entry::Symlink(path) => {
                    debug!(path = %path.display(), "Skipping symbolic link");
                    report.symlinks_skipped += 1;
                }
                Entry::Cycle(path) => {
                    warn!(path = %path.display(), "Skipping symbolic link cycle");
                    report.cycles_skipped += 1;
                }
            }
            Ok(())
        });

        if let Err(e) = result {
            error!(
                stamped = report.stamped.len(),
                path = ?e.path(),
                error = %e,
                "Stamp pass aborted; files already stamped were left in place"
            );
            return Err(e);
        }

        info!(
            stamped = report.stamped.len(),
            skipped = report.skipped(),
            "Stamp pass complete"
        );
        Ok(report)
    }

    /// Apply the guard clauses to one file and stamp it if none match
    pub fn stamp_file(&self, path: &Path) -> Result<FileOutcome, StampError> {
        let prefix = match style_for(path, &self.config.extension_to_prefix) {
            Ok(prefix) => prefix,
            Err(reason) => {
                debug!(path = %path.display(), reason = ?reason, "Ignoring file");
                return Ok(FileOutcome::Skipped(reason));
            }
        };

        let original = read_text(path)?;
        let header = &self.config.header_lines;

        if blocks_restamp(self.config.existing_header, header, prefix, &original) {
            debug!(path = %path.display(), "Header already present");
            return Ok(FileOutcome::Skipped(SkipReason::HeaderPresent));
        }

        if self.config.mode == RunMode::Check {
            info!(path = %path.display(), "Missing header");
            return Ok(FileOutcome::WouldStamp);
        }

        fs::write(path, header.stamp(prefix, &original)).map_err(|source| StampError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Stamped");
        Ok(FileOutcome::Stamped)
    }
}
