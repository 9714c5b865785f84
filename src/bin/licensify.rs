//! Licensify CLI Binary
//!
//! Stamps license headers into source files under the traversal root.

use clap::Parser;
use licensify::cli::{build_logging_config, load_config, map_error, Cli, RunContext};
use licensify::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Config is needed before logging so the [logging] section applies
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Licensify starting");

    let context = match RunContext::new(&cli, config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid invocation: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute() {
        Ok(outcome) => {
            info!(exit_code = outcome.exit_code, "Command completed");
            println!("{}", outcome.output);
            process::exit(outcome.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
