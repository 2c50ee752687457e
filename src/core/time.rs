//! Conversion between epoch milliseconds, moments, and relative hours.

use crate::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Convert an epoch-millisecond value into a UTC moment.
///
/// Millisecond precision is preserved.
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(AnalysisError::TimestampOutOfRange(millis))
}

/// Convert moments to hours relative to the earliest of them.
///
/// The anchor is recomputed on every call, so each collection is measured
/// against its own minimum. Output keeps the input length and order.
pub fn to_relative_hours(times: &[DateTime<Utc>]) -> Vec<f64> {
    let Some(anchor) = times.iter().min() else {
        return Vec::new();
    };

    times
        .iter()
        .map(|t| (*t - *anchor).num_milliseconds() as f64 / MILLIS_PER_HOUR)
        .collect()
}

/// Earliest and latest moment of a collection, or `None` when it is empty.
pub fn date_range(times: &[DateTime<Utc>]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = times.iter().min()?;
    let end = times.iter().max()?;
    Some((*start, *end))
}
