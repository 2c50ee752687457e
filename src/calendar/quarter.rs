//! Calendar quarters.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

/// A fixed three-month block of a calendar year (Q1 = Jan–Mar … Q4 = Oct–Dec).
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    pub year: i32,
    /// 1 to 4.
    pub quarter: u32,
}

impl Quarter {
    /// Quarter containing the UTC moment `t`.
    pub fn of(t: &DateTime<Utc>) -> Self {
        Self {
            year: t.year(),
            quarter: t.month0() / 3 + 1,
        }
    }

    /// Label such as `"2023-Q1"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}
