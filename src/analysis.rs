//! End-to-end analysis of an event timestamp collection.

use crate::calendar::{aggregate_by_day, aggregate_by_month, aggregate_by_week};
use crate::continuity::analyze_continuous;
use crate::core::{date_range, from_epoch_millis, AnalysisResult, PeriodConfig};
use crate::detection::PeriodDetector;
use crate::error::{AnalysisError, Result};
use crate::windows::detect_windows;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Analyze epoch-millisecond timestamps.
///
/// Fails when no timestamps are given, when the configuration is invalid,
/// or when a value cannot be represented as a calendar moment. Empty input
/// is reported ahead of a bad configuration. Every other
/// degenerate case produces empty result sequences.
///
/// # Example
///
/// ```
/// use event_periods::{analyze, PeriodConfig};
///
/// let hour = 3_600_000_i64;
/// let timestamps: Vec<i64> = (0..10).map(|i| 1_700_000_000_000 + i * 24 * hour).collect();
/// let config = PeriodConfig::new(1.0, 240.0, 3, 5);
///
/// let result = analyze(&timestamps, &config).unwrap();
/// assert_eq!(result.total_records, 10);
/// assert_eq!(result.days.len(), 10);
/// assert!(result.periods.all_time.len() <= 3);
/// ```
pub fn analyze(timestamps: &[i64], config: &PeriodConfig) -> Result<AnalysisResult> {
    if timestamps.is_empty() {
        return Err(AnalysisError::EmptyData);
    }
    config.validate()?;

    let moments = timestamps
        .iter()
        .map(|&ms| from_epoch_millis(ms))
        .collect::<Result<Vec<_>>>()?;

    analyze_moments(&moments, config)
}

/// Analyze a collection of moments.
///
/// Input order does not matter and the slice is never modified.
pub fn analyze_moments(times: &[DateTime<Utc>], config: &PeriodConfig) -> Result<AnalysisResult> {
    let (start_date, end_date) = date_range(times).ok_or(AnalysisError::EmptyData)?;
    config.validate()?;

    debug!(
        records = times.len(),
        start = %start_date,
        end = %end_date,
        min_period = config.min_period,
        max_period = config.max_period,
        num_periods = config.num_periods,
        samples_per_peak = config.samples_per_peak,
        "starting analysis"
    );

    let mut ordered = times.to_vec();
    ordered.sort_unstable();

    let days = aggregate_by_day(&ordered);
    let weeks = aggregate_by_week(&ordered);
    let months = aggregate_by_month(&ordered);
    debug!(
        days = days.len(),
        weeks = weeks.len(),
        months = months.len(),
        "calendar aggregated"
    );

    let detector = PeriodDetector::new(*config);
    let periods = detect_windows(&ordered, end_date, &detector);
    let continuous = analyze_continuous(&ordered, &detector);

    debug!(
        top_period = ?periods.all_time.first().map(|p| p.period),
        quarters = periods.quarterly.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        total_records: times.len(),
        start_date,
        end_date,
        days,
        weeks,
        months,
        periods,
        continuous,
    })
}
