//! Filesystem walker for traversing directory structures

use crate::error::StampError;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Entries reported to the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// A regular file (or a followed link to one)
    File(&'a Path),
    /// A symbolic link that was not followed
    Symlink(&'a Path),
    /// A followed link pointing back at one of its ancestors; not descended
    Cycle(&'a Path),
}

/// Directory names excluded when nothing else is configured
pub fn default_exclusions() -> BTreeSet<String> {
    [".git", ".vscode", "target"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Directory names whose whole subtree is skipped
    pub exclusion_names: BTreeSet<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            exclusion_names: default_exclusions(),
        }
    }
}

/// Whether a directory called `name` is pruned from traversal
pub fn is_excluded_dir(name: &OsStr, exclusions: &BTreeSet<String>) -> bool {
    name.to_str()
        .map(|name| exclusions.contains(name))
        .unwrap_or(false)
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk depth-first in file-name order, handing each entry to `visit`.
    ///
    /// Excluded directories are filtered before descent, so nothing beneath them
    /// is opened. The first error from `visit` or from the filesystem stops the walk.
    pub fn walk<F>(&self, mut visit: F) -> Result<(), StampError>
    where
        F: FnMut(Entry<'_>) -> Result<(), StampError>,
    {
        let exclusions = &self.config.exclusion_names;
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !should_prune(entry, exclusions));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err.loop_ancestor().is_some() {
                        if let Some(path) = err.path() {
                            visit(Entry::Cycle(path))?;
                        }
                        continue;
                    }
                    if let Some(path) = err.path().filter(|_| is_not_found(&err)) {
                        if is_symlink(path) {
                            visit(Entry::Symlink(path))?;
                            continue;
                        }
                    }
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Err(StampError::Walk {
                        path,
                        message: err.to_string(),
                    });
                }
            };

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                visit(Entry::Symlink(entry.path()))?;
            } else if file_type.is_file() {
                visit(Entry::File(entry.path()))?;
            }
        }

        Ok(())
    }
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

/// A followed link whose target is gone still exists as a link
fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

fn should_prune(entry: &DirEntry, exclusions: &BTreeSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && is_excluded_dir(entry.file_name(), exclusions)
}
