//! Period search configuration.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for spectral period detection.
///
/// Periods are expressed in hours. The configuration is copied into every
/// detector and never changes once an analysis has started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeriodConfig {
    /// Shortest period to search, in hours.
    pub min_period: f64,
    /// Longest period to search, in hours.
    pub max_period: f64,
    /// Maximum number of candidate periods returned per window.
    pub num_periods: usize,
    /// Frequency-grid density per spectral peak.
    pub samples_per_peak: usize,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            min_period: 0.1, // 6 minutes
            max_period: 8760.0, // 1 year
            num_periods: 5,
            samples_per_peak: 5,
        }
    }
}

impl PeriodConfig {
    /// Create a configuration with every field given explicitly.
    pub fn new(
        min_period: f64,
        max_period: f64,
        num_periods: usize,
        samples_per_peak: usize,
    ) -> Self {
        Self {
            min_period,
            max_period,
            num_periods,
            samples_per_peak,
        }
    }

    /// Set minimum period (hours).
    pub fn with_min_period(mut self, min: f64) -> Self {
        self.min_period = min;
        self
    }

    /// Set maximum period (hours).
    pub fn with_max_period(mut self, max: f64) -> Self {
        self.max_period = max;
        self
    }

    /// Set the number of periods to return.
    pub fn with_num_periods(mut self, n: usize) -> Self {
        self.num_periods = n;
        self
    }

    /// Set frequency-grid samples per peak.
    pub fn with_samples_per_peak(mut self, n: usize) -> Self {
        self.samples_per_peak = n;
        self
    }

    /// Lowest searched frequency (cycles per hour).
    pub fn min_frequency(&self) -> f64 {
        1.0 / self.max_period
    }

    /// Highest searched frequency (cycles per hour).
    pub fn max_frequency(&self) -> f64 {
        1.0 / self.min_period
    }

    /// Check every constraint, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.min_period.is_nan() || self.min_period <= 0.0 {
            return Err(invalid("min_period must be positive"));
        }
        if self.max_period.is_nan() || self.max_period <= 0.0 {
            return Err(invalid("max_period must be positive"));
        }
        if self.min_period >= self.max_period {
            return Err(invalid("min_period must be less than max_period"));
        }
        if self.num_periods == 0 {
            return Err(invalid("num_periods must be at least 1"));
        }
        if self.samples_per_peak == 0 {
            return Err(invalid("samples_per_peak must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> AnalysisError {
    AnalysisError::InvalidConfig(message.to_string())
}
