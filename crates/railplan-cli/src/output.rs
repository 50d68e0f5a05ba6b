use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;

use railplan_lib::RouteSummary;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable route description.
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

impl OutputFormat {
    /// Render a resolved route summary to stdout.
    pub fn render_summary(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => {
                render_text(summary);
                Ok(())
            }
            OutputFormat::Json => render_json(summary),
        }
    }
}

/// Render a route summary in text format.
fn render_text(summary: &RouteSummary) {
    println!(
        "The fastest route from {} to {} takes {} hours and {} minutes with {} stops:",
        summary.origin, summary.destination, summary.hours, summary.minutes, summary.stop_count
    );
    println!("{}", summary.stops.join(" >> "));
}

/// Render a route summary in JSON format.
fn render_json(summary: &RouteSummary) -> Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, summary)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
