//! Workspace config file source: <root>/licensify.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the traversal root.
pub const WORKSPACE_CONFIG_FILE: &str = "licensify.toml";

pub fn workspace_config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_CONFIG_FILE)
}

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_config_path(root);
    if !path.is_file() {
        return Ok(builder);
    }
    debug!(config_path = %path.display(), "Using workspace configuration");
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
