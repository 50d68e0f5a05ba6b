use serde::Serialize;
use tracing::debug;

use crate::dijkstra;
use crate::error::Result;
use crate::network::StationId;
use crate::path;
use crate::timetable::Timetable;

/// Number of fuzzy candidates offered alongside an unknown station name.
const SUGGESTION_LIMIT: usize = 3;

/// Planned trip produced by [`plan_trip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub origin: StationId,
    pub destination: StationId,
    /// Visited stations, origin first, destination last.
    pub stops: Vec<StationId>,
    pub total_minutes: u32,
}

impl RoutePlan {
    /// Number of stations visited, endpoints included.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

/// Classified result of a single origin→destination query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both names resolved and a fastest route exists.
    Resolved(RoutePlan),
    /// A name that was never seen during timetable construction.
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },
    /// Both names resolved but no chain of connections links them.
    Unreachable { origin: String, destination: String },
}

/// Resolve two station names and compute the fastest route between them.
///
/// Names are normalized before lookup; an unresolved name short-circuits
/// without invoking the engine (origin is checked first). Unknown names and
/// unreachable pairs are ordinary [`Outcome`] variants; `Err` is reserved
/// for internal contract violations.
pub fn plan_trip(timetable: &Timetable, origin: &str, destination: &str) -> Result<Outcome> {
    let Some(origin_id) = timetable.station_id_by_name(origin) else {
        return Ok(unknown_station(timetable, origin));
    };
    let Some(destination_id) = timetable.station_id_by_name(destination) else {
        return Ok(unknown_station(timetable, destination));
    };

    let paths = dijkstra::compute(timetable.network(), origin_id)?;
    let Some(route) = path::reconstruct(timetable.network(), &paths, destination_id)? else {
        debug!(origin, destination, "destination unreachable");
        return Ok(Outcome::Unreachable {
            origin: origin.trim().to_string(),
            destination: destination.trim().to_string(),
        });
    };

    debug!(
        origin,
        destination,
        total_minutes = route.total_minutes,
        stops = route.stops.len(),
        "route resolved"
    );
    Ok(Outcome::Resolved(RoutePlan {
        origin: origin_id,
        destination: destination_id,
        stops: route.stops,
        total_minutes: route.total_minutes,
    }))
}

fn unknown_station(timetable: &Timetable, name: &str) -> Outcome {
    Outcome::UnknownStation {
        name: name.trim().to_string(),
        suggestions: timetable.suggest_stations(name, SUGGESTION_LIMIT),
    }
}
