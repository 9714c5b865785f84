//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources override earlier ones key by key. List-valued keys
//! (`stamp.exclude`, `stamp.header`, `stamp.styles`) are replaced whole, never
//! concatenated; their defaults come from serde so an absent key keeps them.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("stamp.root", ".")?
        .set_default("stamp.existing_header", "skip")?
        .set_default("stamp.follow_symlinks", false)
}
