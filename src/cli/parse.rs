//! CLI parse: clap types for licensify. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Licensify - stamp license headers into source files
#[derive(Parser, Debug)]
#[command(name = "licensify")]
#[command(about = "Prepend a license header comment to every matching source file under a directory")]
pub struct Cli {
    /// Traversal root (defaults to the configured root, normally the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Add or override a style table entry, e.g. `.sh=#` (repeatable)
    #[arg(long = "style", value_name = "EXT=PREFIX")]
    pub style: Vec<String>,

    /// Read header lines from this file
    #[arg(long, value_name = "FILE")]
    pub header_file: Option<PathBuf>,

    /// Stamp files even when they already carry the header
    #[arg(long)]
    pub force: bool,

    /// Report files missing the header without writing anything
    #[arg(long)]
    pub check: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Print the effective stamp configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
