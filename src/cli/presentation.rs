//! Presentation: run report formatters.

use crate::error::StampError;
use crate::stamper::{RunMode, StampReport};

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub fn format_report_text(report: &StampReport) -> String {
    let count = report.stamped.len();
    let mut s = match (report.mode, count) {
        (RunMode::Check, 0) => format!(
            "All matching files under {} carry the header.",
            report.root.display()
        ),
        (RunMode::Check, _) => format!(
            "{} file{} missing the header under {}:",
            count,
            plural(count),
            report.root.display()
        ),
        (RunMode::Write, 0) => format!("No files stamped under {}.", report.root.display()),
        (RunMode::Write, _) => format!(
            "Stamped {} file{} under {}:",
            count,
            plural(count),
            report.root.display()
        ),
    };

    for path in &report.stamped {
        s.push_str(&format!("\n  {}", path.display()));
    }

    let skipped = report.skipped();
    if skipped > 0 {
        s.push_str(&format!(
            "\nSkipped {} file{}: {} already stamped, {} without extension, {} unknown extension",
            skipped,
            plural(skipped),
            report.header_present,
            report.no_extension,
            report.unknown_extension
        ));
        if report.symlinks_skipped > 0 || report.cycles_skipped > 0 {
            s.push_str(&format!(
                ", {} symlink{}, {} cycle{}",
                report.symlinks_skipped,
                plural(report.symlinks_skipped),
                report.cycles_skipped,
                plural(report.cycles_skipped)
            ));
        }
    }

    s
}

pub fn format_report_json(report: &StampReport) -> Result<String, StampError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| StampError::Config(format!("Failed to serialize report: {}", e)))
}
