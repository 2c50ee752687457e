//! Day, week, and month event counts.

use super::{day_of, month_start, start_of_day, week_start};
use crate::core::{DayRecord, MonthRecord, WeekRecord};
use chrono::{DateTime, Months, NaiveDate, Utc};
use std::collections::BTreeMap;

fn count_by<F>(times: &[DateTime<Utc>], bucket: F) -> BTreeMap<NaiveDate, usize>
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut counts = BTreeMap::new();
    for t in times {
        *counts.entry(bucket(day_of(t))).or_insert(0) += 1;
    }
    counts
}

/// Count events per UTC day.
///
/// The series is dense: every day between the first and last observed day
/// is present, with a zero count where nothing happened.
pub fn aggregate_by_day(times: &[DateTime<Utc>]) -> Vec<DayRecord> {
    let counts = count_by(times, |day| day);
    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut current = Some(first);
    while let Some(day) = current.filter(|d| *d <= last) {
        records.push(DayRecord {
            date: start_of_day(day),
            count: counts.get(&day).copied().unwrap_or(0),
        });
        current = day.succ_opt();
    }
    records
}

/// Count events per Monday-started week.
///
/// The series is sparse: only weeks holding at least one event appear,
/// in ascending order of their Monday.
pub fn aggregate_by_week(times: &[DateTime<Utc>]) -> Vec<WeekRecord> {
    count_by(times, week_start)
        .into_iter()
        .map(|(monday, count)| WeekRecord {
            week: start_of_day(monday),
            count,
        })
        .collect()
}

/// Count events per calendar month.
///
/// The series is dense, like [`aggregate_by_day`].
pub fn aggregate_by_month(times: &[DateTime<Utc>]) -> Vec<MonthRecord> {
    let counts = count_by(times, month_start);
    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut current = Some(first);
    while let Some(month) = current.filter(|m| *m <= last) {
        records.push(MonthRecord {
            month: start_of_day(month),
            count: counts.get(&month).copied().unwrap_or(0),
        });
        current = month.checked_add_months(Months::new(1));
    }
    records
}
