//! CLI domain: parse, route, output, and presentation only.
//! No stamping logic lives here; the route hands a resolved configuration to the stamper.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_report_json, format_report_text};
pub use route::{build_logging_config, load_config, RunContext, RunOutcome};
