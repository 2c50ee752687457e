//! Analysis windows over a chronological event collection.
//!
//! Every window is filtered out of an ascending collection and is therefore
//! ascending itself, which is what the spectral estimator expects.

use crate::calendar::Quarter;
use crate::core::{PeriodResult, PeriodResults};
use crate::detection::PeriodDetector;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use tracing::trace;

/// Look-back of the daily window, in hours.
pub const DAILY_LOOKBACK_HOURS: i64 = 72;

/// Look-back of the weekly window, in hours.
pub const WEEKLY_LOOKBACK_HOURS: i64 = 336;

/// Look-ahead past the end moment. Nothing lies beyond the end, so only the
/// look-back bound ever filters.
const LOOKAHEAD_HOURS: i64 = 24;

/// Moments strictly after `end - lookback` and strictly before
/// `end + 24h`, in input order.
///
/// A bound that falls outside the representable calendar range does not
/// filter anything.
pub fn trailing_window(
    times: &[DateTime<Utc>],
    end: DateTime<Utc>,
    lookback: Duration,
) -> Vec<DateTime<Utc>> {
    let lower = end.checked_sub_signed(lookback);
    let upper = end.checked_add_signed(Duration::hours(LOOKAHEAD_HOURS));
    times
        .iter()
        .copied()
        .filter(|t| lower.map_or(true, |l| *t > l) && upper.map_or(true, |u| *t < u))
        .collect()
}

/// The last 72 hours before `end`.
pub fn daily_window(times: &[DateTime<Utc>], end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    trailing_window(times, end, Duration::hours(DAILY_LOOKBACK_HOURS))
}

/// The last 14 days before `end`.
pub fn weekly_window(times: &[DateTime<Utc>], end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    trailing_window(times, end, Duration::hours(WEEKLY_LOOKBACK_HOURS))
}

/// Partition moments by the calendar quarter they fall in.
pub fn group_by_quarter(times: &[DateTime<Utc>]) -> BTreeMap<Quarter, Vec<DateTime<Utc>>> {
    let mut quarters: BTreeMap<Quarter, Vec<DateTime<Utc>>> = BTreeMap::new();
    for t in times {
        quarters.entry(Quarter::of(t)).or_default().push(*t);
    }
    quarters
}

/// Detect periods independently in every quarter, keyed by quarter label.
pub fn detect_quarterly(
    times: &[DateTime<Utc>],
    detector: &PeriodDetector,
) -> BTreeMap<String, Vec<PeriodResult>> {
    group_by_quarter(times)
        .into_iter()
        .map(|(quarter, subset)| {
            let results = detector.detect(&subset);
            trace!(
                quarter = %quarter,
                points = subset.len(),
                peaks = results.len(),
                "quarter analyzed"
            );
            (quarter.label(), results)
        })
        .collect()
}

/// Run the detector over the daily, weekly, all-time, and quarterly windows.
///
/// `times` should be ascending and `end` its latest moment.
pub fn detect_windows(
    times: &[DateTime<Utc>],
    end: DateTime<Utc>,
    detector: &PeriodDetector,
) -> PeriodResults {
    let daily = daily_window(times, end);
    let weekly = weekly_window(times, end);
    trace!(
        daily = daily.len(),
        weekly = weekly.len(),
        all_time = times.len(),
        "window sizes"
    );

    PeriodResults {
        daily: detector.detect(&daily),
        weekly: detector.detect(&weekly),
        all_time: detector.detect(times),
        quarterly: detect_quarterly(times, detector),
    }
}
