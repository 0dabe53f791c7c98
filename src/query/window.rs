//! Date window resolution
//!
//! Converts a query's date parameters (none, start only, or start+end) plus
//! the dataset's latest known date into a concrete inclusive `[from, to]`
//! interval. The dataset is a fixed historical snapshot, so trailing and
//! open-ended windows anchor on the dataset's maximum date rather than
//! wall-clock "today" - anchoring on "now" would silently produce empty
//! results once the snapshot ages.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::query::error::{QueryError, QueryResult};

/// Length of the trailing window in days
const TRAILING_WINDOW_DAYS: i64 = 365;

/// An inclusive `[from, to]` calendar-date interval
///
/// Invariant: `from <= to`. Constructed transiently per query; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    /// First date inside the window
    pub from: NaiveDate,
    /// Last date inside the window
    pub to: NaiveDate,
}

impl DateWindow {
    /// Trailing 12-month window ending at the dataset's latest date:
    /// `[latest - 365 days, latest]`
    pub fn trailing_year(latest: NaiveDate) -> Self {
        Self {
            from: latest - Duration::days(TRAILING_WINDOW_DAYS),
            to: latest,
        }
    }

    /// Open-ended window from an explicit start to the dataset's latest
    /// date: `[start, latest]`
    pub fn open_ended(start: NaiveDate, latest: NaiveDate) -> QueryResult<Self> {
        if start > latest {
            return Err(QueryError::InvalidRange {
                start,
                end: latest,
            });
        }
        Ok(Self {
            from: start,
            to: latest,
        })
    }

    /// Explicit window: `[start, end]`
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> QueryResult<Self> {
        if start > end {
            return Err(QueryError::InvalidRange { start, end });
        }
        Ok(Self {
            from: start,
            to: end,
        })
    }

    /// Check whether a date falls inside the window (boundary inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// Rejects time-of-day components, timezones, unpadded fields, and
/// out-of-range month/day values. Out-of-range values fail instead of
/// rolling over into the next month.
pub fn parse_date(input: &str) -> QueryResult<NaiveDate> {
    // `%m`/`%d` accept unpadded fields, so require the canonical 10-byte
    // form before handing off to chrono.
    if input.len() != 10 {
        return Err(QueryError::MalformedDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| QueryError::MalformedDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_explicit_window() {
        let window = DateWindow::explicit(date("2017-01-01"), date("2017-01-03")).unwrap();
        assert_eq!(window.from, date("2017-01-01"));
        assert_eq!(window.to, date("2017-01-03"));
    }

    #[test]
    fn test_explicit_single_day() {
        let window = DateWindow::explicit(date("2017-01-01"), date("2017-01-01")).unwrap();
        assert!(window.contains(date("2017-01-01")));
        assert!(!window.contains(date("2017-01-02")));
    }

    #[test]
    fn test_explicit_rejects_inverted_range() {
        let result = DateWindow::explicit(date("2020-01-01"), date("2019-01-01"));
        assert!(matches!(result, Err(QueryError::InvalidRange { .. })));
    }

    #[test]
    fn test_trailing_year() {
        // Latest date in the reference dataset
        let window = DateWindow::trailing_year(date("2017-08-23"));
        assert_eq!(window.from, date("2016-08-23"));
        assert_eq!(window.to, date("2017-08-23"));
    }

    #[test]
    fn test_trailing_year_across_leap_day() {
        let window = DateWindow::trailing_year(date("2017-02-28"));
        assert_eq!(window.from, date("2016-02-29"));
    }

    #[test]
    fn test_open_ended() {
        let window = DateWindow::open_ended(date("2017-06-01"), date("2017-08-23")).unwrap();
        assert_eq!(window.from, date("2017-06-01"));
        assert_eq!(window.to, date("2017-08-23"));
    }

    #[test]
    fn test_open_ended_start_after_latest() {
        let result = DateWindow::open_ended(date("2018-01-01"), date("2017-08-23"));
        assert!(matches!(result, Err(QueryError::InvalidRange { .. })));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let window = DateWindow::explicit(date("2017-01-01"), date("2017-01-31")).unwrap();
        assert!(window.contains(date("2017-01-01")));
        assert!(window.contains(date("2017-01-31")));
        assert!(!window.contains(date("2016-12-31")));
        assert!(!window.contains(date("2017-02-01")));
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2017-08-23").unwrap(), date("2017-08-23"));
        assert_eq!(parse_date("2016-02-29").unwrap(), date("2016-02-29"));
    }

    #[test]
    fn test_parse_date_rejects_unpadded() {
        assert!(parse_date("2017-1-1").is_err());
        assert!(parse_date("2017-01-1").is_err());
    }

    #[test]
    fn test_parse_date_rejects_time_component() {
        assert!(parse_date("2017-01-01T00:00:00").is_err());
        assert!(parse_date("2017-01-01Z").is_err());
    }

    #[test]
    fn test_parse_date_rejects_out_of_range() {
        // Must fail rather than roll over into the next month
        assert!(parse_date("2017-02-29").is_err());
        assert!(parse_date("2017-13-01").is_err());
        assert!(parse_date("2017-04-31").is_err());
        assert!(parse_date("2017-01-00").is_err());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("08-23-2017").is_err());
    }
}
