//! Calendar bucketing of event moments.
//!
//! All truncation uses the UTC calendar: a moment at `23:59:59.999Z`
//! belongs to its day, and `00:00:00.000Z` starts the next one. Weeks
//! start on Monday and quarters are fixed three-month blocks.

mod aggregate;
mod quarter;

pub use aggregate::{aggregate_by_day, aggregate_by_month, aggregate_by_week};
pub use quarter::Quarter;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

/// UTC calendar day containing `t`.
pub fn day_of(t: &DateTime<Utc>) -> NaiveDate {
    t.date_naive()
}

/// Monday of the week containing `day`.
///
/// Clamped to [`NaiveDate::MIN`] when that Monday precedes the calendar.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(day.weekday().num_days_from_monday()));
    day.checked_sub_days(offset).unwrap_or(NaiveDate::MIN)
}

/// First day of the month containing `day`.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Midnight UTC starting `day`.
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
