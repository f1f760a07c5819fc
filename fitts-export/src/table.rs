use crate::error::{ExportError, Result};
use crate::time::{TimeFormat, format_elapsed, parse_elapsed};
use csv::{ReaderBuilder, WriterBuilder};
use fitts_core::{Direction, TrialRecord};
use serde::Deserialize;
use std::io::{Read, Write};

/// Expected headers in exported files
pub const HEADER: [&str; 6] = [
    "Distance",
    "Size",
    "Direction",
    "Time",
    "DistanceTravelled",
    "Misclicks",
];

/// One exported row as read back from text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportedRow {
    pub distance: u32,
    pub size: u32,
    pub direction: i8,
    /// Kept verbatim; decode with [`ExportedRow::elapsed_ms`]
    pub time: String,
    pub distance_travelled: f64,
    pub misclicks: u32,
}

impl ExportedRow {
    pub fn elapsed_ms(&self, format: TimeFormat) -> Result<u64> {
        parse_elapsed(&self.time, format)
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_sign(self.direction)
    }
}

/// Writes the header and one row per trial, in order
pub fn write_trials<W: Write>(trials: &[TrialRecord], format: TimeFormat, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for trial in trials {
        wtr.write_record([
            trial.distance.to_string(),
            trial.size.to_string(),
            trial.direction.to_string(),
            format_elapsed(trial.elapsed_ms, format),
            trial.distance_travelled.to_string(),
            trial.misclicks.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Parses exported text back into rows, checking the header first
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ExportedRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(ExportError::InvalidHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }

    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
