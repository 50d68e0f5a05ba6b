//! Railplan library entry points.
//!
//! This crate loads a rail timetable into an in-memory network, runs
//! single-source shortest-path queries over it, and renders the results.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dijkstra;
pub mod error;
pub mod export;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod timetable;

pub use dijkstra::{compute, ShortestPaths};
pub use error::{Error, Result};
pub use export::{render_dot, write_dot};
pub use network::{Connection, EdgeId, Network, StationId};
pub use output::{display_name, RouteSummary};
pub use path::{reconstruct, Route};
pub use routing::{plan_trip, Outcome, RoutePlan};
pub use timetable::{load_timetable, parse_timetable, Timetable};
