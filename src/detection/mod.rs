//! Spectral period detection.
//!
//! This module provides:
//! - [`spectrum`]: Schuster periodogram on a linear frequency grid
//! - [`peaks`]: local-maximum extraction and significance scoring
//! - [`PeriodDetector`]: both stages applied to a collection of moments

mod detector;
pub mod peaks;
pub mod spectrum;

pub use detector::PeriodDetector;
pub use peaks::{find_local_peaks, significant_peaks, TOTAL_POWER_FLOOR};
pub use spectrum::{
    frequency_grid_size, periodogram, schuster_power, Spectrum, MAX_FREQUENCIES, MIN_FREQUENCIES,
    MIN_POINTS,
};
