use anyhow::Result;

use railplan_lib::Timetable;

/// Handle the `stats` subcommand.
pub fn run(timetable: &Timetable) -> Result<()> {
    println!(
        "There are {} stations with {} connections in {}.",
        timetable.network().station_count(),
        timetable.network().connection_count(),
        timetable.title()
    );
    Ok(())
}
