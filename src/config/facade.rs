//! Config loading facade: assembles sources in precedence order.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::{validation_failure, LicensifyConfig};
use crate::error::StampError;
use config::File;
use std::path::Path;

/// Loads [`LicensifyConfig`] from defaults, files and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a traversal root.
    ///
    /// Precedence (lowest to highest): defaults, global file,
    /// `<root>/licensify.toml`, `LICENSIFY__*` environment variables.
    pub fn load(root: &Path) -> Result<LicensifyConfig, StampError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let builder = environment::add_to_builder(builder);

        let config: LicensifyConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| validation_failure(&errors))?;
        Ok(config)
    }

    /// Load configuration from one explicit file, skipping global and workspace discovery.
    /// Environment variables still apply.
    pub fn load_from_file(path: &Path) -> Result<LicensifyConfig, StampError> {
        if !path.is_file() {
            return Err(StampError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: LicensifyConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(|errors| validation_failure(&errors))?;
        Ok(config)
    }
}
