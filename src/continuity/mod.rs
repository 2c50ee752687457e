//! Longest continuous run of active calendar days.
//!
//! A day is active when it holds at least one event. Consecutive active
//! days separated by at most [`MAX_GAP_DAYS`] belong to the same run, so
//! one or two quiet days do not break continuity.

use crate::calendar::{day_of, start_of_day};
use crate::core::{ContinuousResult, PeriodResult, PeriodResults};
use crate::detection::PeriodDetector;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Largest day-to-day gap that keeps a run going.
pub const MAX_GAP_DAYS: i64 = 2;

/// The longest run and the events inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousRun {
    /// Midnight UTC of the run's first day.
    pub start: Option<DateTime<Utc>>,
    /// Midnight UTC of the run's last day.
    pub end: Option<DateTime<Utc>>,
    /// Number of active days in the run.
    pub active_days: usize,
    /// Events from the start of the first day up to the end of the last
    /// day, ascending.
    pub timestamps: Vec<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
struct DayRun {
    first: NaiveDate,
    last: NaiveDate,
    len: usize,
}

impl DayRun {
    fn at(day: NaiveDate) -> Self {
        Self {
            first: day,
            last: day,
            len: 1,
        }
    }
}

/// Find the longest run of active days in `times`.
///
/// The input is left untouched; a sorted copy is used internally. On equal
/// length the earliest run wins. With fewer than two events the input is
/// returned as-is with no bounds.
pub fn find_longest_run(times: &[DateTime<Utc>]) -> ContinuousRun {
    if times.len() < 2 {
        return ContinuousRun {
            start: None,
            end: None,
            active_days: 0,
            timestamps: times.to_vec(),
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_unstable();

    let days: BTreeSet<NaiveDate> = sorted.iter().map(day_of).collect();
    let Some(best) = longest_day_run(&days) else {
        return ContinuousRun {
            start: None,
            end: None,
            active_days: 0,
            timestamps: sorted,
        };
    };

    let timestamps = sorted
        .into_iter()
        .filter(|t| (best.first..=best.last).contains(&day_of(t)))
        .collect();

    ContinuousRun {
        start: Some(start_of_day(best.first)),
        end: Some(start_of_day(best.last)),
        active_days: best.len,
        timestamps,
    }
}

fn longest_day_run(days: &BTreeSet<NaiveDate>) -> Option<DayRun> {
    let mut iter = days.iter().copied();
    let mut current = DayRun::at(iter.next()?);
    let mut best: Option<DayRun> = None;

    for day in iter {
        let gap = (day - current.last).num_days();
        if gap <= MAX_GAP_DAYS {
            current.last = day;
            current.len += 1;
        } else {
            best = Some(longer(best, current));
            current = DayRun::at(day);
        }
    }

    Some(longer(best, current))
}

// Replace only on strictly greater length so the earlier run keeps ties.
fn longer(best: Option<DayRun>, candidate: DayRun) -> DayRun {
    match best {
        Some(b) if b.len >= candidate.len => b,
        _ => candidate,
    }
}

/// Spectral analysis of the whole collection and of its longest run.
///
/// Within each result set the `daily`, `weekly`, and `all_time` entries all
/// come from the same unfiltered input; no trailing window is applied and
/// `quarterly` stays empty.
pub fn analyze_continuous(times: &[DateTime<Utc>], detector: &PeriodDetector) -> ContinuousResult {
    if times.is_empty() {
        return ContinuousResult::default();
    }

    let run = find_longest_run(times);
    debug!(
        start = ?run.start,
        end = ?run.end,
        active_days = run.active_days,
        events = run.timestamps.len(),
        "longest continuous run"
    );

    ContinuousResult {
        all_data: unwindowed(detector.detect(times)),
        longest_continuous: unwindowed(detector.detect(&run.timestamps)),
        start: run.start,
        end: run.end,
        record_count: times.len(),
    }
}

fn unwindowed(results: Vec<PeriodResult>) -> PeriodResults {
    PeriodResults {
        daily: results.clone(),
        weekly: results.clone(),
        all_time: results,
        quarterly: Default::default(),
    }
}
