use thiserror::Error;

use crate::network::StationId;

/// Convenient result alias for the railplan library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Expected query outcomes (unknown station, unreachable pair) are not
/// errors; they are classified by [`crate::routing::Outcome`]. The variants
/// here cover contract violations and timetable ingestion failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A station handle that does not belong to the queried network.
    #[error("station handle {station} is not part of this network")]
    InvalidHandle { station: StationId },

    /// No connection links the two stations directly.
    #[error("no connection from station {from} to station {to}")]
    NoSuchEdge { from: StationId, to: StationId },

    /// The predecessor tree cycled or never reached its source.
    #[error("predecessor tree does not lead back to the source (stuck near station {station})")]
    BrokenTree { station: StationId },

    /// A timetable record with the wrong number of fields.
    #[error("timetable line {line} has {fields} fields, expected 3")]
    MalformedRecord { line: u64, fields: usize },

    /// A travel time that is not of the form `HH:MM`.
    #[error("timetable line {line} has invalid travel time {value:?}, expected HH:MM")]
    InvalidDuration { line: u64, value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
