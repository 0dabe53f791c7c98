//! SQLite-backed observation store
//!
//! Reads the historical snapshot database produced by the dataset pipeline:
//!
//! ```text
//! measurements(station TEXT, date TEXT, prcp REAL, tobs REAL)
//! stations(station TEXT, name TEXT)
//! ```
//!
//! Dates are stored as `YYYY-MM-DD` text, so lexicographic comparison is
//! chronological and `BETWEEN` / `MAX` operate directly on the column. The
//! database is opened read-only: the dataset is a fixed snapshot and the
//! service never writes.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::query::DateWindow;
use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Observation, Station};
use crate::store::ObservationStore;

/// Read-only SQLite store over the observation snapshot
pub struct SqliteStore {
    // rusqlite connections are not Sync; handlers share the store behind
    // this lock. Every query is a point lookup or short range scan, so
    // contention stays negligible.
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the snapshot database at `path` read-only
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA query_only = ON;
            PRAGMA temp_store = MEMORY;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

impl ObservationStore for SqliteStore {
    fn max_date(&self) -> StoreResult<NaiveDate> {
        let conn = self.conn()?;
        let max: Option<String> = conn
            .prepare_cached("SELECT MAX(date) FROM measurements")?
            .query_row([], |row| row.get(0))?;

        match max {
            Some(text) => parse_stored_date(&text),
            None => Err(StoreError::EmptyDataset),
        }
    }

    fn observations_in(&self, window: &DateWindow) -> StoreResult<Vec<Observation>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT station, date, prcp, tobs FROM measurements
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date, station",
        )?;

        let rows = stmt.query_map(
            params![window.from.to_string(), window.to.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<f64>>(2)?,
                    row.get::<_, Option<f64>>(3)?,
                ))
            },
        )?;

        let mut observations = Vec::new();
        for row in rows {
            let (station_id, date_text, precipitation, temperature) = row?;
            observations.push(Observation {
                station_id,
                date: parse_stored_date(&date_text)?,
                precipitation,
                temperature,
            });
        }

        Ok(observations)
    }

    fn stations(&self) -> StoreResult<Vec<Station>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare_cached("SELECT station, name FROM stations ORDER BY station")?;

        let rows = stmt.query_map([], |row| {
            Ok(Station {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }
}

/// Decode a stored date cell
///
/// The snapshot pipeline only ever writes `YYYY-MM-DD` text; anything else
/// is corruption, not user input.
fn parse_stored_date(text: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| StoreError::Corruption(format!("bad date cell '{}'", text)))
}
