//! Period detection over collections of event moments.

use super::peaks::significant_peaks;
use super::spectrum::{periodogram, Spectrum};
use crate::core::{to_relative_hours, PeriodConfig, PeriodResult};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use tracing::trace;

/// Spectral period detector for one configuration.
///
/// Each call measures its collection against that collection's own earliest
/// moment, so subsets (windows, quarters, runs) are analyzed independently.
#[derive(Debug, Clone)]
pub struct PeriodDetector {
    config: PeriodConfig,
}

impl PeriodDetector {
    pub fn new(config: PeriodConfig) -> Self {
        Self { config }
    }

    /// Power spectrum of `times`, or `None` when there are too few points.
    ///
    /// Out-of-order input is sorted into a private copy first, so the
    /// estimator always sees its span from the true first and last moment.
    pub fn spectrum(&self, times: &[DateTime<Utc>]) -> Option<Spectrum> {
        let ordered = chronological(times);
        let hours = to_relative_hours(&ordered);
        let spectrum = periodogram(&hours, &self.config)?;
        trace!(
            points = hours.len(),
            frequencies = spectrum.len(),
            "computed periodogram"
        );
        Some(spectrum)
    }

    /// Ranked candidate periods of `times`.
    ///
    /// Returns an empty list for fewer than four points, a zero-length span,
    /// or a spectrum with no interior local maximum.
    pub fn detect(&self, times: &[DateTime<Utc>]) -> Vec<PeriodResult> {
        match self.spectrum(times) {
            Some(spectrum) => significant_peaks(&spectrum, self.config.num_periods),
            None => Vec::new(),
        }
    }
}

fn chronological(times: &[DateTime<Utc>]) -> Cow<'_, [DateTime<Utc>]> {
    if times.windows(2).all(|w| w[0] <= w[1]) {
        Cow::Borrowed(times)
    } else {
        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        Cow::Owned(sorted)
    }
}
