//! Core data structures shared by the analysis components.

mod config;
mod result;
mod time;

pub use config::PeriodConfig;
pub use result::{
    AnalysisResult, ContinuousResult, DayRecord, MonthRecord, PeriodResult, PeriodResults,
    WeekRecord,
};
pub use time::{date_range, from_epoch_millis, to_relative_hours, MILLIS_PER_HOUR};
