//! loader.rs
//!
//! Reads the bookings CSV from disk into typed `Booking` records.
//!
//! The schema is validated here, once: a missing column, an unknown
//! show-time label or a mis-typed value fails the whole load with
//! `ReportError::MalformedData` instead of surfacing later as an untyped
//! failure inside an aggregation.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::ReportError;
use crate::models::Booking;

/// Load every booking record from the CSV at `path`.
///
/// The file is re-read on every call; the returned table is immutable for
/// the duration of the report that consumes it.
pub fn load_bookings<P: AsRef<Path>>(path: P) -> Result<Vec<Booking>, ReportError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| ReportError::MalformedData(e.to_string()))?;

    let mut bookings = Vec::new();
    for record in reader.deserialize::<Booking>() {
        let booking = record.map_err(|e| ReportError::MalformedData(e.to_string()))?;
        bookings.push(booking);
    }

    tracing::debug!("loaded {} booking records from {}", bookings.len(), path.display());
    Ok(bookings)
}
