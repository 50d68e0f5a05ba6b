use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Network, StationId};

/// Minimum Jaro-Winkler similarity for a station name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A parsed timetable: the routing network plus the station name index.
///
/// The index maps normalized names to handles; it is what makes station
/// registration idempotent per name during parsing and what queries resolve
/// user input against.
#[derive(Debug, Clone)]
pub struct Timetable {
    network: Network,
    stations_by_name: HashMap<String, StationId>,
    title: String,
}

impl Timetable {
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Timetable name, derived from the source file stem.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolve a user-supplied station name to its handle.
    ///
    /// The name is normalized the same way parsing normalized it, so lookups
    /// are insensitive to case and surrounding whitespace.
    pub fn station_id_by_name(&self, name: &str) -> Option<StationId> {
        self.stations_by_name.get(&normalize(name)).copied()
    }

    /// Station names similar to `name`, best match first.
    pub fn suggest_stations(&self, name: &str, limit: usize) -> Vec<String> {
        let wanted = normalize(name);
        let mut scored: Vec<(f64, &str)> = self
            .network
            .station_names()
            .filter_map(|candidate| {
                let score = strsim::jaro_winkler(&wanted, candidate);
                (score >= SUGGESTION_THRESHOLD).then_some((score, candidate))
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.truncate(limit);
        scored
            .into_iter()
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// Case-fold and trim a station name for indexing.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Load a timetable file.
///
/// Each line is `origin,destination,HH:MM`, one directed connection per
/// line. Repeated lines append distinct parallel connections.
pub fn load_timetable(path: &Path) -> Result<Timetable> {
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("timetable")
        .to_string();
    let file = File::open(path)?;
    let timetable = parse_timetable(file, &title)?;
    debug!(
        stations = timetable.network.station_count(),
        connections = timetable.network.connection_count(),
        path = %path.display(),
        "timetable loaded"
    );
    Ok(timetable)
}

/// Parse timetable records from any reader.
pub fn parse_timetable(reader: impl Read, title: &str) -> Result<Timetable> {
    let mut network = Network::default();
    let mut stations_by_name: HashMap<String, StationId> = HashMap::new();
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        if record.len() != 3 {
            return Err(Error::MalformedRecord {
                line,
                fields: record.len(),
            });
        }

        let from = station_handle(&mut network, &mut stations_by_name, normalize(&record[0]));
        let to = station_handle(&mut network, &mut stations_by_name, normalize(&record[1]));
        let minutes = parse_duration(&record[2], line)?;
        network.add_connection(from, to, minutes)?;
    }

    Ok(Timetable {
        network,
        stations_by_name,
        title: title.to_string(),
    })
}

fn station_handle(
    network: &mut Network,
    index: &mut HashMap<String, StationId>,
    name: String,
) -> StationId {
    if let Some(&id) = index.get(&name) {
        return id;
    }
    let id = network.add_station(name.clone());
    index.insert(name, id);
    id
}

/// Convert an `HH:MM` travel time into total minutes.
fn parse_duration(value: &str, line: u64) -> Result<u32> {
    let invalid = || Error::InvalidDuration {
        line,
        value: value.to_string(),
    };
    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if minutes.contains(':') {
        return Err(invalid());
    }
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Timetable {
        parse_timetable(data.as_bytes(), "sample").expect("timetable parses")
    }

    #[test]
    fn travel_times_convert_to_minutes() {
        let timetable = parse("madrid,paris,02:30\n");
        let (_, connection) = timetable
            .network()
            .all_edges()
            .next()
            .expect("one connection");
        assert_eq!(connection.minutes, 150);
    }

    #[test]
    fn station_names_are_normalized_and_reused() {
        let timetable = parse("Madrid,Paris,02:30\n  PARIS , madrid ,03:00\n");
        assert_eq!(timetable.network().station_count(), 2);
        assert_eq!(timetable.network().connection_count(), 2);
        assert_eq!(
            timetable.station_id_by_name("  MaDrId  "),
            timetable.station_id_by_name("madrid")
        );
    }

    #[test]
    fn duplicate_lines_keep_distinct_connections() {
        let timetable = parse("madrid,paris,02:30\nmadrid,paris,02:30\n");
        let madrid = timetable
            .station_id_by_name("madrid")
            .expect("station exists");
        assert_eq!(timetable.network().connection_count(), 2);
        assert_eq!(timetable.network().degree(madrid).expect("valid handle"), 2);
    }

    #[test]
    fn wrong_field_count_is_rejected_with_its_line() {
        let result = parse_timetable("madrid,paris,02:30\nlyon,geneva\n".as_bytes(), "sample");
        assert!(matches!(
            result,
            Err(Error::MalformedRecord { line: 2, fields: 2 })
        ));
    }

    #[test]
    fn malformed_travel_time_is_rejected() {
        for bad in ["2h30", "02:3a", "02:30:00", "-1:30"] {
            let data = format!("madrid,paris,{bad}\n");
            let result = parse_timetable(data.as_bytes(), "sample");
            assert!(
                matches!(result, Err(Error::InvalidDuration { line: 1, .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn suggestions_rank_the_closest_names_first() {
        let timetable = parse("madrid,paris,02:30\nparis,berlin,08:00\n");
        let suggestions = timetable.suggest_stations("Pariss", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("paris"));
    }

    #[test]
    fn unrelated_names_yield_no_suggestions() {
        let timetable = parse("madrid,paris,02:30\n");
        assert!(timetable.suggest_stations("xyzzy", 3).is_empty());
    }
}
