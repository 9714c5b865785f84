//! Environment source: LICENSIFY__<SECTION>__<KEY>

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "LICENSIFY";

/// Add environment overrides, e.g. `LICENSIFY__STAMP__FOLLOW_SYMLINKS=true`.
///
/// The double underscore keeps `LICENSIFY_LOG` (the log filter) out of the
/// configuration tree.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
