//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use chrono::NaiveDate;
use serde::Serialize;

use crate::query::{DateWindow, FieldReading, TemperatureSummary};
use crate::store::Station;

// ============================================
// ROUTE INDEX DTOs
// ============================================

/// Route index response (GET /)
#[derive(Debug, Serialize)]
pub struct RouteIndexResponse {
    /// Available routes
    pub routes: Vec<&'static str>,
    /// Expected date format for path parameters
    pub date_format: &'static str,
}

// ============================================
// OBSERVATION LISTING DTOs
// ============================================

/// The resolved date window a listing or summary covers
#[derive(Debug, Serialize)]
pub struct WindowDto {
    /// First date inside the window
    pub from: NaiveDate,
    /// Last date inside the window
    pub to: NaiveDate,
}

impl From<DateWindow> for WindowDto {
    fn from(window: DateWindow) -> Self {
        Self {
            from: window.from,
            to: window.to,
        }
    }
}

/// One dated reading
#[derive(Debug, Serialize)]
pub struct ReadingDto {
    /// Date of the observation
    pub date: NaiveDate,
    /// The reading's value
    pub value: f64,
}

impl From<FieldReading> for ReadingDto {
    fn from(reading: FieldReading) -> Self {
        Self {
            date: reading.date,
            value: reading.value,
        }
    }
}

/// Listing of one field's readings over a window
#[derive(Debug, Serialize)]
pub struct FieldListingResponse {
    /// Window the listing covers
    pub window: WindowDto,
    /// Number of readings returned
    pub count: usize,
    /// The readings, ascending by date
    pub observations: Vec<ReadingDto>,
}

impl FieldListingResponse {
    pub fn new(window: DateWindow, readings: Vec<FieldReading>) -> Self {
        let observations: Vec<ReadingDto> = readings.into_iter().map(Into::into).collect();
        Self {
            window: window.into(),
            count: observations.len(),
            observations,
        }
    }
}

// ============================================
// STATION DTOs
// ============================================

/// Single station
#[derive(Debug, Serialize)]
pub struct StationDto {
    /// Station identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl From<Station> for StationDto {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

/// List stations response
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// List of stations, ordered by id
    pub stations: Vec<StationDto>,
    /// Total count
    pub total: usize,
}

// ============================================
// TEMPERATURE SUMMARY DTOs
// ============================================

/// Temperature summary response
///
/// All three statistics are null when no observation inside the window
/// carried a temperature - "no data" is distinct from zero, so the fields
/// are serialized explicitly rather than skipped.
#[derive(Debug, Serialize)]
pub struct TemperatureSummaryResponse {
    /// Window the summary covers
    pub window: WindowDto,
    /// Minimum temperature
    pub minimum: Option<f64>,
    /// Arithmetic mean temperature (unrounded)
    pub average: Option<f64>,
    /// Maximum temperature
    pub maximum: Option<f64>,
}

impl TemperatureSummaryResponse {
    pub fn new(window: DateWindow, summary: TemperatureSummary) -> Self {
        Self {
            window: window.into(),
            minimum: summary.minimum,
            average: summary.average,
            maximum: summary.maximum,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Latest date in the dataset, when the store is reachable
    pub latest_date: Option<NaiveDate>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
