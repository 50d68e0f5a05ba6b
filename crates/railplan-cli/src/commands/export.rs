use std::path::Path;

use anyhow::{anyhow, Context, Result};

use railplan_lib::{plan_trip, write_dot, Outcome, Timetable};

use crate::commands::route::{unknown_station_message, unreachable_message};

/// Handle the `export` subcommand: write the network as a Graphviz document,
/// optionally bolding the fastest route between two stations.
pub fn run(timetable: &Timetable, out: &Path, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let plan = match (from, to) {
        (Some(from), Some(to)) => match plan_trip(timetable, from, to)? {
            Outcome::Resolved(plan) => Some(plan),
            Outcome::UnknownStation { name, suggestions } => {
                return Err(anyhow!(unknown_station_message(&name, &suggestions)));
            }
            Outcome::Unreachable {
                origin,
                destination,
            } => {
                return Err(anyhow!(unreachable_message(timetable, &origin, &destination)));
            }
        },
        _ => None,
    };

    write_dot(timetable, plan.as_ref(), out)
        .with_context(|| format!("failed to write network graph to {}", out.display()))?;
    println!("Network graph written to {}.", out.display());
    Ok(())
}
