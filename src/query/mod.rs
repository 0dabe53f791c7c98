//! Query core
//!
//! The two cooperating pieces of the service's logic, both pure
//! computation over data supplied by the store:
//!
//! - **window**: resolves a query's date parameters plus the dataset's
//!   latest known date into a concrete inclusive `[from, to]` interval
//! - **engine**: runs the projection or aggregate for a resolved window
//! - **error**: Error types
//!
//! Control flow: caller supplies raw parameters → window resolution →
//! engine queries the store for the interval → ordered records (listings)
//! or a single summary record.

pub mod engine;
pub mod error;
pub mod window;

pub use engine::{ClimateEngine, Field, FieldReading, TemperatureSummary};
pub use error::{QueryError, QueryResult};
pub use window::{parse_date, DateWindow};
