//! Aggregation engine
//!
//! Given a resolved [`DateWindow`] and a field selector, issues the
//! projection or aggregate against the store and shapes the result. Pure,
//! stateless computation per call: nothing is retained between invocations
//! and the store data is only borrowed read-only for the duration of one
//! query, so concurrent requests need no locking here.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::query::error::QueryResult;
use crate::query::window::DateWindow;
use crate::store::{ObservationStore, Station};

/// Which observation field a listing projects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Daily precipitation reading
    Precipitation,
    /// Daily temperature observation (tobs)
    Temperature,
}

/// One projected `(date, value)` entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldReading {
    /// Date of the observation
    pub date: NaiveDate,
    /// The projected field's value
    pub value: f64,
}

/// Min/avg/max over the temperatures inside a window
///
/// All three fields are absent when no observation inside the window
/// carries a temperature. Callers must treat that as "no data", never as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    pub minimum: Option<f64>,
    pub average: Option<f64>,
    pub maximum: Option<f64>,
}

impl TemperatureSummary {
    /// Summary for a window with no qualifying observations
    pub fn empty() -> Self {
        Self {
            minimum: None,
            average: None,
            maximum: None,
        }
    }

    /// True when no qualifying observation existed
    pub fn is_empty(&self) -> bool {
        self.minimum.is_none()
    }
}

/// Read-only query engine over an injected observation store
pub struct ClimateEngine {
    store: Arc<dyn ObservationStore>,
}

impl ClimateEngine {
    /// Create an engine over a store handle
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self { store }
    }

    /// The dataset's latest observation date, fetched fresh from the store
    pub fn latest_date(&self) -> QueryResult<NaiveDate> {
        Ok(self.store.max_date()?)
    }

    /// List one `(date, value)` entry per observation inside `window` whose
    /// selected field is present
    ///
    /// Observations missing the field are silently excluded rather than
    /// returned as null. Entries arrive ascending by date, ties ordered by
    /// station id (store contract). An empty match yields an empty vec,
    /// not an error.
    pub fn list_field(&self, window: &DateWindow, field: Field) -> QueryResult<Vec<FieldReading>> {
        let observations = self.store.observations_in(window)?;

        let readings = observations
            .into_iter()
            .filter_map(|obs| {
                let value = match field {
                    Field::Precipitation => obs.precipitation,
                    Field::Temperature => obs.temperature,
                };
                value.map(|value| FieldReading {
                    date: obs.date,
                    value,
                })
            })
            .collect();

        Ok(readings)
    }

    /// List all stations, ordered by station id
    pub fn list_stations(&self) -> QueryResult<Vec<Station>> {
        Ok(self.store.stations()?)
    }

    /// Min/avg/max temperature over `window`
    ///
    /// The mean is computed over exactly the subset used for min/max:
    /// observations inside the window with a present temperature. A row
    /// with an absent temperature never counts toward the denominator,
    /// even when its precipitation is present. The mean is not rounded
    /// here; rounding is a presentation concern.
    pub fn temperature_summary(&self, window: &DateWindow) -> QueryResult<TemperatureSummary> {
        let observations = self.store.observations_in(window)?;

        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0u64;

        for obs in &observations {
            if let Some(temperature) = obs.temperature {
                minimum = minimum.min(temperature);
                maximum = maximum.max(temperature);
                sum += temperature;
                count += 1;
            }
        }

        if count == 0 {
            return Ok(TemperatureSummary::empty());
        }

        Ok(TemperatureSummary {
            minimum: Some(minimum),
            average: Some(sum / count as f64),
            maximum: Some(maximum),
        })
    }
}
