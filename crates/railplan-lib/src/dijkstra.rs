use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::network::{EdgeId, Network, StationId};

/// Distances and predecessor edges computed from a single source station.
///
/// `distance` is `None` for stations the source cannot reach; those stations
/// also carry no predecessor edge. Restricted to reachable stations the
/// predecessor edges form a tree rooted at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: StationId,
    distances: Vec<Option<u32>>,
    predecessors: Vec<Option<EdgeId>>,
}

impl ShortestPaths {
    /// Station the tree is rooted at.
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Minimum travel time from the source, or `None` when unreachable.
    pub fn distance(&self, station: StationId) -> Option<u32> {
        self.distances.get(station.0).copied().flatten()
    }

    /// Inbound edge on a shortest path from the source.
    ///
    /// `None` for the source itself and for unreachable stations.
    pub fn predecessor(&self, station: StationId) -> Option<EdgeId> {
        self.predecessors.get(station.0).copied().flatten()
    }

    pub fn is_reachable(&self, station: StationId) -> bool {
        self.distance(station).is_some()
    }
}

#[cfg(test)]
impl ShortestPaths {
    pub(crate) fn from_parts(
        source: StationId,
        distances: Vec<Option<u32>>,
        predecessors: Vec<Option<EdgeId>>,
    ) -> Self {
        Self {
            source,
            distances,
            predecessors,
        }
    }
}

/// Frontier entry. `seq` records the order entries were pushed so that equal
/// tentative distances pop oldest-first, which keeps extraction deterministic
/// when parallel equal-cost routes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    station: StationId,
    minutes: u32,
    seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by distance.
        other
            .minutes
            .cmp(&self.minutes)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run Dijkstra's algorithm from `source` over the whole network.
///
/// Relaxation is strict, so the first-discovered shortest path wins ties and
/// superseded heap entries are skipped lazily. Non-negative edge weights are
/// a precondition; the `u32` minutes the network stores satisfy it by
/// construction.
pub fn compute(network: &Network, source: StationId) -> Result<ShortestPaths> {
    let station_count = network.station_count();
    if source.0 >= station_count {
        return Err(Error::InvalidHandle { station: source });
    }

    let mut distances: Vec<Option<u32>> = vec![None; station_count];
    let mut predecessors: Vec<Option<EdgeId>> = vec![None; station_count];
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    distances[source.0] = Some(0);
    heap.push(QueueEntry {
        station: source,
        minutes: 0,
        seq,
    });

    while let Some(entry) = heap.pop() {
        // Skip entries made stale by a later relaxation.
        if matches!(distances[entry.station.0], Some(best) if entry.minutes > best) {
            continue;
        }

        for (neighbor, minutes, edge) in network.edges_from(entry.station)? {
            let candidate = entry.minutes + minutes;
            if distances[neighbor.0].is_none_or(|best| candidate < best) {
                distances[neighbor.0] = Some(candidate);
                predecessors[neighbor.0] = Some(edge);
                seq += 1;
                heap.push(QueueEntry {
                    station: neighbor,
                    minutes: candidate,
                    seq,
                });
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
