use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Opaque handle to a station owned by a [`Network`].
///
/// Handles are only meaningful for the network that issued them; passing a
/// handle to a different network reports `InvalidHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StationId(pub(crate) usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single connection within a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

/// Directed, weighted link between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    /// Travel time in minutes.
    pub minutes: u32,
}

/// Routing network: stations plus directed connections.
///
/// Built once by the timetable loader and read-only afterwards. Stations and
/// connections are never removed, so handles stay valid for the lifetime of
/// the network. Parallel connections between the same pair of stations are
/// kept as distinct edges.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<String>,
    connections: Vec<Connection>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl Network {
    /// Register a new station and return its handle.
    ///
    /// Always assigns a fresh handle; reuse of handles for repeated names is
    /// the responsibility of the caller's name index.
    pub fn add_station(&mut self, name: impl Into<String>) -> StationId {
        let id = StationId(self.stations.len());
        self.stations.push(name.into());
        self.adjacency.push(Vec::new());
        id
    }

    /// Append a directed connection between two known stations.
    pub fn add_connection(
        &mut self,
        from: StationId,
        to: StationId,
        minutes: u32,
    ) -> Result<EdgeId> {
        self.check(from)?;
        self.check(to)?;
        let edge = EdgeId(self.connections.len());
        self.connections.push(Connection { from, to, minutes });
        self.adjacency[from.0].push(edge);
        Ok(edge)
    }

    /// Name the station was registered under.
    pub fn station_name(&self, station: StationId) -> Option<&str> {
        self.stations.get(station.0).map(String::as_str)
    }

    /// All station names, in registration order.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(String::as_str)
    }

    /// Outgoing connections of a station, in insertion order.
    pub fn edges_from(
        &self,
        from: StationId,
    ) -> Result<impl Iterator<Item = (StationId, u32, EdgeId)> + '_> {
        let index = self.check(from)?;
        Ok(self.adjacency[index].iter().map(|&edge| {
            let connection = &self.connections[edge.0];
            (connection.to, connection.minutes, edge)
        }))
    }

    /// First connection from `from` to `to`, in insertion order.
    pub fn connection_between(&self, from: StationId, to: StationId) -> Result<(u32, EdgeId)> {
        self.check(to)?;
        for (neighbor, minutes, edge) in self.edges_from(from)? {
            if neighbor == to {
                return Ok((minutes, edge));
            }
        }
        Err(Error::NoSuchEdge { from, to })
    }

    /// Connection behind an edge handle.
    pub fn connection(&self, edge: EdgeId) -> Option<&Connection> {
        self.connections.get(edge.0)
    }

    /// Number of outgoing connections of a station, parallel edges included.
    pub fn degree(&self, station: StationId) -> Result<usize> {
        let index = self.check(station)?;
        Ok(self.adjacency[index].len())
    }

    /// Every connection with its handle, in insertion order.
    pub fn all_edges(&self) -> impl Iterator<Item = (EdgeId, &Connection)> {
        self.connections
            .iter()
            .enumerate()
            .map(|(index, connection)| (EdgeId(index), connection))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn check(&self, station: StationId) -> Result<usize> {
        if station.0 < self.stations.len() {
            Ok(station.0)
        } else {
            Err(Error::InvalidHandle { station })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_network() -> (Network, StationId, StationId, StationId) {
        let mut network = Network::default();
        let a = network.add_station("a");
        let b = network.add_station("b");
        let c = network.add_station("c");
        network.add_connection(a, b, 5).expect("valid handles");
        network.add_connection(b, c, 7).expect("valid handles");
        (network, a, b, c)
    }

    #[test]
    fn stations_keep_their_names() {
        let (network, a, _, c) = line_network();
        assert_eq!(network.station_name(a), Some("a"));
        assert_eq!(network.station_name(c), Some("c"));
        assert_eq!(network.station_count(), 3);
    }

    #[test]
    fn adjacency_preserves_insertion_order() {
        let mut network = Network::default();
        let a = network.add_station("a");
        let b = network.add_station("b");
        let c = network.add_station("c");
        network.add_connection(a, c, 9).expect("valid handles");
        network.add_connection(a, b, 1).expect("valid handles");

        let neighbors: Vec<StationId> = network
            .edges_from(a)
            .expect("valid handle")
            .map(|(neighbor, _, _)| neighbor)
            .collect();
        assert_eq!(neighbors, vec![c, b]);
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let (mut network, a, _, _) = line_network();
        let foreign = StationId(99);
        assert!(matches!(
            network.add_connection(a, foreign, 1),
            Err(Error::InvalidHandle { station }) if station == foreign
        ));
        assert!(matches!(
            network.edges_from(foreign),
            Err(Error::InvalidHandle { .. })
        ));
        assert!(matches!(
            network.degree(foreign),
            Err(Error::InvalidHandle { .. })
        ));
    }

    #[test]
    fn connection_between_returns_first_match() {
        let mut network = Network::default();
        let a = network.add_station("a");
        let b = network.add_station("b");
        let first = network.add_connection(a, b, 10).expect("valid handles");
        network.add_connection(a, b, 3).expect("valid handles");

        let (minutes, edge) = network.connection_between(a, b).expect("edge exists");
        assert_eq!(minutes, 10);
        assert_eq!(edge, first);
    }

    #[test]
    fn missing_connection_is_no_such_edge() {
        let (network, a, _, c) = line_network();
        assert!(matches!(
            network.connection_between(c, a),
            Err(Error::NoSuchEdge { .. })
        ));
    }

    #[test]
    fn parallel_connections_are_distinct() {
        let mut network = Network::default();
        let a = network.add_station("a");
        let b = network.add_station("b");
        network.add_connection(a, b, 5).expect("valid handles");
        network.add_connection(a, b, 5).expect("valid handles");

        assert_eq!(network.connection_count(), 2);
        assert_eq!(network.degree(a).expect("valid handle"), 2);
        assert_eq!(network.all_edges().count(), 2);
    }
}
