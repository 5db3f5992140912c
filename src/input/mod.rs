//! Inputs wrap around a tick file providing a simple transparent interface
//! producing [Tick] records in timestamp order.
//!
//! Loading is deliberately permissive: only the `ts` column is validated up
//! front because the sort needs it. Every other field stays raw until a row
//! is consumed, so a malformed price or side surfaces at the row that
//! carries it rather than failing the whole load.

use csv::StringRecord;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::exchange::Side;

#[derive(Debug, Display, Error)]
pub enum DataError {
    #[display("could not read tick file: {_0}")]
    Unreadable(csv::Error),
    #[display("tick file has no '{_0}' column")]
    MissingColumn(#[error(not(source))] String),
    #[display("bad ts value '{_0}'")]
    BadTimestamp(#[error(not(source))] String),
    #[display("malformed tick row: {_0}")]
    Malformed(csv::Error),
}

/// One timestamped market data observation. Extra columns in the source
/// file are tolerated and dropped on deserialization.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Tick {
    pub ts: i64,
    pub symbol: String,
    pub price: f64,
    pub side: Side,
}

/// A loaded tick file: header row plus rows sorted ascending by `ts`.
/// Rows are immutable once loaded and deserialized on demand by [iter](TickSource::iter).
#[derive(Clone, Debug)]
pub struct TickSource {
    headers: StringRecord,
    rows: Vec<(i64, StringRecord)>,
}

impl TickSource {
    /// Loads a delimited tick file with at least a `ts` column. Header names
    /// are trimmed of surrounding whitespace; column order is irrelevant.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(path)
            .map_err(DataError::Unreadable)?;

        let headers = reader.headers().map_err(DataError::Unreadable)?.clone();
        let ts_pos = headers
            .iter()
            .position(|name| name == "ts")
            .ok_or_else(|| DataError::MissingColumn("ts".to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(DataError::Malformed)?;
            let raw_ts = record.get(ts_pos).unwrap_or("");
            let ts = raw_ts
                .trim()
                .parse::<i64>()
                .map_err(|_| DataError::BadTimestamp(raw_ts.to_string()))?;
            rows.push((ts, record));
        }
        rows.sort_by_key(|(ts, _)| *ts);

        Ok(Self { headers, rows })
    }

    /// Yields ticks in timestamp order, parsing each row as it is consumed.
    pub fn iter(&self) -> impl Iterator<Item = Result<Tick, DataError>> + '_ {
        self.rows.iter().map(|(_, record)| {
            record
                .deserialize::<Tick>(Some(&self.headers))
                .map_err(DataError::Malformed)
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
