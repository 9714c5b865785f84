//! CLI route: run context built from parsed flags and loaded configuration.
//! Applies flag overrides, then dispatches to the stamper and presentation.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_report_json, format_report_text};
use crate::config::{validation_failure, ConfigLoader, LicensifyConfig, StampSettings};
use crate::error::StampError;
use crate::logging::LoggingConfig;
use crate::stamper::{ExistingHeaderPolicy, RunMode, Stamper};
use crate::style::StyleEntry;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    fn parse(format: &str) -> Result<Self, StampError> {
        match format {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(StampError::Config(format!(
                "Invalid report format: {} (must be 'text' or 'json')",
                format
            ))),
        }
    }
}

/// What the binary prints and how it exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    pub exit_code: i32,
}

/// Load configuration the way the flags ask for.
/// `--config` replaces discovery; otherwise the workspace file is looked up in `--root` or `.`.
pub fn load_config(cli: &Cli) -> Result<LicensifyConfig, StampError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(cli.root.as_deref().unwrap_or_else(|| Path::new("."))),
    }
}

/// Build logging configuration from CLI args and the config file section.
/// Precedence: CLI flags override config file override defaults.
pub fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}

/// Runtime context for one CLI invocation
pub struct RunContext {
    settings: StampSettings,
    mode: RunMode,
    format: ReportFormat,
    print_config: bool,
}

impl RunContext {
    /// Apply flag overrides on top of the loaded `[stamp]` settings and validate the result.
    pub fn new(cli: &Cli, config: LicensifyConfig) -> Result<Self, StampError> {
        let mut settings = config.stamp;

        if let Some(ref root) = cli.root {
            settings.root = root.clone();
        }
        for name in &cli.exclude {
            settings.add_exclude(name.clone());
        }
        for style in &cli.style {
            settings.set_style(StyleEntry::parse(style)?);
        }
        if let Some(ref header_file) = cli.header_file {
            settings.header_file = Some(header_file.clone());
        }
        if cli.force {
            settings.existing_header = ExistingHeaderPolicy::Force;
        }
        if cli.follow_symlinks {
            settings.follow_symlinks = true;
        }
        settings
            .validate()
            .map_err(|errors| validation_failure(&errors))?;

        let mode = if cli.check {
            RunMode::Check
        } else {
            RunMode::Write
        };

        Ok(Self {
            settings,
            mode,
            format: ReportFormat::parse(&cli.format)?,
            print_config: cli.print_config,
        })
    }

    pub fn settings(&self) -> &StampSettings {
        &self.settings
    }

    pub fn execute(&self) -> Result<RunOutcome, StampError> {
        if self.print_config {
            return Ok(RunOutcome {
                output: self.settings.to_toml()?,
                exit_code: 0,
            });
        }

        let stamp_config = self.settings.to_stamp_config(self.mode)?;
        debug!(
            root = %stamp_config.root.display(),
            exclusions = ?stamp_config.exclusion_names,
            "Resolved stamp configuration"
        );
        let report = Stamper::new(stamp_config).run()?;

        let output = match self.format {
            ReportFormat::Text => format_report_text(&report),
            ReportFormat::Json => format_report_json(&report)?,
        };
        let exit_code = if report.has_pending() { 1 } else { 0 };
        Ok(RunOutcome { output, exit_code })
    }
}
