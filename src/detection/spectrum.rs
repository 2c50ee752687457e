//! Power spectrum of irregularly spaced event times.
//!
//! The estimator is the classical Schuster periodogram evaluated on a
//! linear frequency grid:
//!
//! ```text
//! P(f) = ((Σ cos 2πft)² + (Σ sin 2πft)²) / N
//! ```
//!
//! Event times are treated as unit impulses, so there is no mean removal,
//! variance normalization, or windowing. Significance scores downstream are
//! defined against this exact normalization.

use crate::core::PeriodConfig;
use std::f64::consts::PI;

/// Fewest points for which a spectrum is computed.
pub const MIN_POINTS: usize = 4;

/// Lower clamp of the frequency-grid size.
pub const MIN_FREQUENCIES: usize = 100;

/// Upper clamp of the frequency-grid size.
pub const MAX_FREQUENCIES: usize = 10_000;

/// Frequencies (cycles per hour) and their spectral power.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub powers: Vec<f64>,
}

impl Spectrum {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of power over the whole grid.
    pub fn total_power(&self) -> f64 {
        self.powers.iter().sum()
    }

    /// Frequency holding the most power, first on ties.
    pub fn peak_frequency(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (&freq, &power) in self.frequencies.iter().zip(&self.powers) {
            if best.map_or(true, |(_, p)| power > p) {
                best = Some((freq, power));
            }
        }
        best.map(|(freq, _)| freq)
    }
}

/// Schuster power of `times` (hours) at frequency `freq` (cycles per hour).
pub fn schuster_power(times: &[f64], freq: f64) -> f64 {
    if times.is_empty() {
        return 0.0;
    }

    let omega = 2.0 * PI * freq;
    let mut sum_cos = 0.0;
    let mut sum_sin = 0.0;
    for &t in times {
        sum_cos += (omega * t).cos();
        sum_sin += (omega * t).sin();
    }

    (sum_cos * sum_cos + sum_sin * sum_sin) / times.len() as f64
}

/// Grid size for a series spanning `span` hours.
///
/// Scales with the number of resolvable peaks in the searched band and is
/// clamped to `[MIN_FREQUENCIES, MAX_FREQUENCIES]`.
pub fn frequency_grid_size(span: f64, config: &PeriodConfig) -> usize {
    let band = config.max_frequency() - config.min_frequency();
    let raw = (config.samples_per_peak as f64 * span * band).round();
    if raw.is_nan() {
        return MIN_FREQUENCIES;
    }
    raw.clamp(MIN_FREQUENCIES as f64, MAX_FREQUENCIES as f64) as usize
}

/// Compute the power spectrum of `times` (relative hours).
///
/// `times` must be in ascending order: the span is taken from its first and
/// last elements, so out-of-order input can shrink or negate the span.
///
/// Returns `None` when fewer than [`MIN_POINTS`] points are given, meaning
/// no periods can be detected. A non-positive span yields an empty
/// spectrum.
pub fn periodogram(times: &[f64], config: &PeriodConfig) -> Option<Spectrum> {
    if times.len() < MIN_POINTS {
        return None;
    }

    let span = times[times.len() - 1] - times[0];
    if span.is_nan() || span <= 0.0 {
        return Some(Spectrum::default());
    }

    let min_freq = config.min_frequency();
    let n_freqs = frequency_grid_size(span, config);
    let step = (config.max_frequency() - min_freq) / (n_freqs - 1) as f64;

    let frequencies: Vec<f64> = (0..n_freqs).map(|i| min_freq + i as f64 * step).collect();
    let powers = frequencies
        .iter()
        .map(|&f| schuster_power(times, f))
        .collect();

    Some(Spectrum {
        frequencies,
        powers,
    })
}
