use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use railplan_lib::{plan_trip, write_dot, Outcome, RoutePlan, RouteSummary, Timetable};

use crate::commands::route::{unknown_station_message, unreachable_message};
use crate::output::OutputFormat;

/// Handle the `plan` subcommand: an interactive query loop.
///
/// Unknown stations and unreachable pairs are reported and the loop
/// continues; only internal failures are fatal. When `--export` was given,
/// the last resolved route is written out on exit.
pub fn run(timetable: &Timetable, format: OutputFormat, export: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_plan: Option<RoutePlan> = None;

    println!(
        "Welcome to the {} trip planner. There are {} stations with {} connections.",
        timetable.title(),
        timetable.network().station_count(),
        timetable.network().connection_count()
    );

    loop {
        let Some(origin) = prompt(&mut lines, "Origin: ")? else {
            break;
        };
        let Some(destination) = prompt(&mut lines, "Destination: ")? else {
            break;
        };

        match plan_trip(timetable, &origin, &destination)? {
            Outcome::Resolved(plan) => {
                let summary = RouteSummary::from_plan(timetable, &plan);
                format.render_summary(&summary)?;
                last_plan = Some(plan);
            }
            Outcome::UnknownStation { name, suggestions } => {
                println!("{}", unknown_station_message(&name, &suggestions));
            }
            Outcome::Unreachable {
                origin,
                destination,
            } => {
                println!("{}", unreachable_message(timetable, &origin, &destination));
            }
        }

        let Some(answer) = prompt(&mut lines, "Plan another trip? (y/n) ")? else {
            break;
        };
        if !answer.trim().to_lowercase().starts_with('y') {
            break;
        }
    }

    if let (Some(path), Some(plan)) = (export, &last_plan) {
        write_dot(timetable, Some(plan), path)
            .with_context(|| format!("failed to write itinerary graph to {}", path.display()))?;
        println!("Itinerary graph written to {}.", path.display());
    }

    Ok(())
}

/// Print a prompt and read one line; `None` at end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("failed to flush prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}
