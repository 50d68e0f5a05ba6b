use crate::dijkstra::ShortestPaths;
use crate::error::{Error, Result};
use crate::network::{Network, StationId};

/// Reconstructed route between the tree's source and one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Visited stations, source first, destination last.
    pub stops: Vec<StationId>,
    /// Sum of the traversed connections' travel times.
    pub total_minutes: u32,
}

/// Walk the predecessor tree from `destination` back to the tree's source.
///
/// Returns `Ok(None)` when the destination is unreachable; that is a normal
/// outcome, presented by the caller. A tree that cycles or never reaches the
/// source trips the step bound and reports `BrokenTree` — a bug in the
/// engine, never a consequence of user input.
pub fn reconstruct(
    network: &Network,
    paths: &ShortestPaths,
    destination: StationId,
) -> Result<Option<Route>> {
    if paths.distance(destination).is_none() {
        return Ok(None);
    }

    let source = paths.source();
    let mut stops = vec![destination];
    let mut total_minutes = 0u32;
    let mut current = destination;
    let mut steps = 0usize;

    while current != source {
        let edge = paths
            .predecessor(current)
            .ok_or(Error::BrokenTree { station: current })?;
        let connection = network
            .connection(edge)
            .ok_or(Error::BrokenTree { station: current })?;
        total_minutes += connection.minutes;
        current = connection.from;
        stops.push(current);

        steps += 1;
        if steps > network.station_count() {
            return Err(Error::BrokenTree { station: current });
        }
    }

    stops.reverse();
    Ok(Some(Route {
        stops,
        total_minutes,
    }))
}
