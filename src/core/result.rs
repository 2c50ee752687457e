//! Result structures produced by an analysis run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A candidate period found as a peak of the power spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodResult {
    /// Period in hours (reciprocal of the peak frequency).
    pub period: f64,
    /// Raw spectral power at the peak.
    pub power: f64,
    /// Peak power as a percentage of the whole spectrum's power.
    pub significance: f64,
}

impl PeriodResult {
    /// Peak frequency in cycles per hour.
    pub fn frequency(&self) -> f64 {
        1.0 / self.period
    }
}

/// Period candidates for each analysis window.
///
/// Every sequence is ordered by descending power and never longer than
/// the configured `num_periods`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResults {
    pub daily: Vec<PeriodResult>,
    pub weekly: Vec<PeriodResult>,
    pub all_time: Vec<PeriodResult>,
    /// Keyed by quarter label, e.g. `"2023-Q1"`.
    pub quarterly: BTreeMap<String, Vec<PeriodResult>>,
}

impl PeriodResults {
    /// True when no window produced a single candidate.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
            && self.weekly.is_empty()
            && self.all_time.is_empty()
            && self.quarterly.values().all(Vec::is_empty)
    }
}

/// Event count for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    /// Midnight UTC starting the day.
    pub date: DateTime<Utc>,
    pub count: usize,
}

/// Event count for one Monday-started week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRecord {
    /// Midnight UTC of the week's Monday.
    pub week: DateTime<Utc>,
    pub count: usize,
}

/// Event count for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRecord {
    /// Midnight UTC of the month's first day.
    pub month: DateTime<Utc>,
    pub count: usize,
}

/// Spectral analysis of the whole collection and of its longest run of
/// active days.
///
/// The `daily` and `weekly` entries of both result sets are computed on the
/// same unfiltered input as `all_time`; the 72h/336h trailing windows of the
/// top-level [`PeriodResults`] are not applied here, and `quarterly` is left
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousResult {
    pub all_data: PeriodResults,
    pub longest_continuous: PeriodResults,
    /// First day of the longest run, `None` when fewer than two events exist.
    pub start: Option<DateTime<Utc>>,
    /// Last day of the longest run, `None` when fewer than two events exist.
    pub end: Option<DateTime<Utc>>,
    /// Size of the whole input collection.
    pub record_count: usize,
}

/// Complete output of [`analyze`](crate::analyze).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_records: usize,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub days: Vec<DayRecord>,
    pub weeks: Vec<WeekRecord>,
    pub months: Vec<MonthRecord>,
    pub periods: PeriodResults,
    pub continuous: ContinuousResult,
}

impl AnalysisResult {
    /// Length of the overall date range in hours.
    pub fn span_hours(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / super::MILLIS_PER_HOUR
    }
}
