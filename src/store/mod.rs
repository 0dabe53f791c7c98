//! Observation store
//!
//! Read-only access to the historical observation snapshot:
//!
//! - **types**: `Observation` and `Station` records
//! - **sqlite**: SQLite implementation over the snapshot database
//! - **error**: Error types
//!
//! The core query logic talks to the store only through the
//! [`ObservationStore`] trait, so it places no constraint on the physical
//! format; any backend that can answer the three questions below suffices.
//! The store handle is constructed once at process start and injected into
//! the engine - never held as ambient global state.

pub mod error;
pub mod sqlite;
pub mod types;

#[cfg(test)]
pub(crate) mod testkit;

pub use error::{StoreError, StoreResult};
pub use sqlite::SqliteStore;
pub use types::{Observation, Station};

use chrono::NaiveDate;

use crate::query::DateWindow;

/// Read-only view over the observation dataset
pub trait ObservationStore: Send + Sync {
    /// The maximum date present across all observations
    ///
    /// Fails with [`StoreError::EmptyDataset`] when no observations exist.
    /// Computed fresh per call - the latest date is a property of the
    /// store, not of any resolver, and must never be cached across
    /// requests.
    fn max_date(&self) -> StoreResult<NaiveDate>;

    /// All observations whose date falls inside `window` (boundary
    /// inclusive), ordered ascending by date with ties broken by
    /// station id
    fn observations_in(&self, window: &DateWindow) -> StoreResult<Vec<Observation>>;

    /// All stations, ordered by station id ascending
    fn stations(&self) -> StoreResult<Vec<Station>>;
}
