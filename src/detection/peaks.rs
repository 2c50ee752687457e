//! Peak extraction and significance scoring.

use super::spectrum::Spectrum;
use crate::core::PeriodResult;
use std::cmp::Ordering;

/// Floor applied to the total spectrum power before dividing by it.
pub const TOTAL_POWER_FLOOR: f64 = 1e-10;

/// Indices of strict interior local maxima.
///
/// Endpoints are never peaks, and neither is any point of a plateau.
pub fn find_local_peaks(data: &[f64]) -> Vec<usize> {
    if data.len() < 3 {
        return Vec::new();
    }

    (1..data.len() - 1)
        .filter(|&i| data[i] > data[i - 1] && data[i] > data[i + 1])
        .collect()
}

/// Rank the spectrum's peaks and score them.
///
/// Peaks are ordered by descending power; exact ties keep grid order, so
/// the lower frequency comes first. At most `max_results` peaks are
/// returned. Significance is each peak's share of the power summed over
/// the entire grid, as a percentage.
pub fn significant_peaks(spectrum: &Spectrum, max_results: usize) -> Vec<PeriodResult> {
    let powers = &spectrum.powers;
    let mut peaks = find_local_peaks(powers);
    if peaks.is_empty() {
        return Vec::new();
    }

    // Stable sort keeps index order on ties.
    peaks.sort_by(|&a, &b| powers[b].partial_cmp(&powers[a]).unwrap_or(Ordering::Equal));
    peaks.truncate(max_results);

    let total_power = spectrum.total_power().max(TOTAL_POWER_FLOOR);

    peaks
        .into_iter()
        .map(|idx| PeriodResult {
            period: 1.0 / spectrum.frequencies[idx],
            power: powers[idx],
            significance: powers[idx] / total_power * 100.0,
        })
        .collect()
}
