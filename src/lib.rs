//! # event-periods
//!
//! Periodicity detection for irregular streams of event timestamps.
//!
//! Given epoch-millisecond timestamps (access logs, sensor pings, ...) the
//! library reports candidate periods in hours with power and significance
//! scores, calendar aggregates (daily, weekly, monthly counts), and an
//! analysis of the longest unbroken run of active days.
//!
//! Periods are found with a Schuster periodogram evaluated over a linear
//! frequency grid, applied to daily, weekly, all-time, and quarterly
//! windows of the data. All calendar arithmetic uses UTC.

pub mod analysis;
pub mod calendar;
pub mod continuity;
pub mod core;
pub mod detection;
pub mod error;
pub mod windows;

pub use analysis::{analyze, analyze_moments};
pub use crate::core::{
    AnalysisResult, ContinuousResult, DayRecord, MonthRecord, PeriodConfig, PeriodResult,
    PeriodResults, WeekRecord,
};
pub use error::{AnalysisError, Result};

pub mod prelude {
    pub use crate::analysis::{analyze, analyze_moments};
    pub use crate::core::{AnalysisResult, PeriodConfig, PeriodResult, PeriodResults};
    pub use crate::detection::{PeriodDetector, Spectrum};
    pub use crate::error::{AnalysisError, Result};
}
