//! Shared test fixtures for the observation store
//!
//! Seeds a small snapshot database with known readings so store, engine,
//! and router tests all assert against the same data. Latest date in the
//! fixture is 2017-08-23, matching the reference dataset.

use rusqlite::{params, Connection};
use std::path::Path;

/// Fixture rows: (station, date, prcp, tobs)
const MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    // Just outside the trailing-year window [2016-08-23, 2017-08-23]
    ("USC00519397", "2016-08-22", Some(0.7), Some(76.0)),
    // Exactly on the trailing-year lower boundary
    ("USC00519397", "2016-08-23", Some(0.05), Some(74.0)),
    ("USC00513117", "2017-01-01", Some(0.0), Some(58.0)),
    // Same date as the row above, nothing measured; exercises tie ordering
    // and absent-field exclusion
    ("USC00519397", "2017-01-01", None, None),
    ("USC00513117", "2017-01-02", None, Some(62.0)),
    ("USC00513117", "2017-01-03", Some(0.11), Some(60.0)),
    // Latest date in the dataset, temperature not measured
    ("USC00519397", "2017-08-23", Some(0.08), None),
];

const STATIONS: &[(&str, &str)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US"),
    ("USC00513117", "KANEOHE 838.1, HI US"),
];

/// Create and populate a snapshot database at `path`
pub(crate) fn seed_snapshot(path: &Path) {
    let conn = Connection::open(path).unwrap();

    conn.execute_batch(
        "CREATE TABLE measurements (station TEXT NOT NULL, date TEXT NOT NULL, prcp REAL, tobs REAL);
         CREATE TABLE stations (station TEXT NOT NULL, name TEXT NOT NULL);",
    )
    .unwrap();

    for (station, date, prcp, tobs) in MEASUREMENTS {
        conn.execute(
            "INSERT INTO measurements (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )
        .unwrap();
    }

    for (station, name) in STATIONS {
        conn.execute(
            "INSERT INTO stations (station, name) VALUES (?1, ?2)",
            params![station, name],
        )
        .unwrap();
    }
}
