//! Core data types for the observation store
//!
//! This module defines the read-only records the store materializes:
//! - `Observation`: one station's readings for one calendar date
//! - `Station`: a weather station's identity

use chrono::NaiveDate;
use serde::Serialize;

/// A single daily observation
///
/// Immutable fact supplied wholesale by the store. At most one observation
/// exists per (station_id, date) pair. Either reading may be absent -
/// absence means "not measured that day", not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Station that recorded the observation
    pub station_id: String,
    /// Calendar date of the observation (no time component)
    pub date: NaiveDate,
    /// Precipitation in inches, if measured
    pub precipitation: Option<f64>,
    /// Observed temperature in the source instrument's units, if measured
    pub temperature: Option<f64>,
}

/// A weather station
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    /// Unique station identifier (e.g. "USC00519397")
    pub id: String,
    /// Display name
    pub name: String,
}
