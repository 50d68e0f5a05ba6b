use std::path::Path;

use anyhow::{anyhow, Context, Result};

use railplan_lib::{display_name, plan_trip, write_dot, Outcome, RouteSummary, Timetable};

use crate::output::OutputFormat;

/// Handle the `route` subcommand: a single origin→destination query.
///
/// Unknown stations and unreachable pairs exit non-zero with a friendly
/// message; only resolved routes print a summary.
pub fn run(
    timetable: &Timetable,
    format: OutputFormat,
    from: &str,
    to: &str,
    export: Option<&Path>,
) -> Result<()> {
    match plan_trip(timetable, from, to)? {
        Outcome::Resolved(plan) => {
            let summary = RouteSummary::from_plan(timetable, &plan);
            format.render_summary(&summary)?;
            if let Some(path) = export {
                write_dot(timetable, Some(&plan), path)
                    .with_context(|| format!("failed to write route graph to {}", path.display()))?;
                println!("Route graph written to {}.", path.display());
            }
            Ok(())
        }
        Outcome::UnknownStation { name, suggestions } => {
            Err(anyhow!(unknown_station_message(&name, &suggestions)))
        }
        Outcome::Unreachable {
            origin,
            destination,
        } => Err(anyhow!(unreachable_message(timetable, &origin, &destination))),
    }
}

pub(crate) fn unknown_station_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{name}'.");
    if !suggestions.is_empty() {
        let formatted = if suggestions.len() == 1 {
            format!("Did you mean '{}'?", display_name(&suggestions[0]))
        } else {
            let joined = suggestions
                .iter()
                .map(|suggestion| format!("'{}'", display_name(suggestion)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {joined}?")
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

pub(crate) fn unreachable_message(
    timetable: &Timetable,
    origin: &str,
    destination: &str,
) -> String {
    format!(
        "No rail connection between {} and {} in {}.",
        display_name(origin),
        display_name(destination),
        timetable.title()
    )
}
