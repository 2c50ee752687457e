//! Property-based tests for the analysis pipeline.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated timestamp collections.

use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc, Weekday};
use event_periods::detection::PeriodDetector;
use event_periods::{analyze, AnalysisError, AnalysisResult, PeriodConfig, PeriodResult};
use proptest::prelude::*;

const HOUR_MS: i64 = 3_600_000;

fn base_ms() -> i64 {
    Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

/// Strategy for timestamp collections spread over up to 20 days.
/// Keeps frequency grids small enough for debug-mode runs.
fn timestamps_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    let base = base_ms();
    prop::collection::vec(0..20 * 24 * HOUR_MS, min_len..max_len)
        .prop_map(move |offsets| offsets.into_iter().map(|o| base + o).collect())
}

/// Strategy for valid configurations with a bounded frequency band.
fn config_strategy() -> impl Strategy<Value = PeriodConfig> {
    (2.0..10.0_f64, 1.0..200.0_f64, 1usize..6, 1usize..4)
        .prop_map(|(min, extra, n, spp)| PeriodConfig::new(min, min + extra, n, spp))
}

/// Narrow band and sparse grid for tests that only look at calendar output.
fn cheap_config() -> PeriodConfig {
    PeriodConfig::new(5.0, 50.0, 1, 1)
}

fn all_sequences(result: &AnalysisResult) -> Vec<&Vec<PeriodResult>> {
    let mut sequences = Vec::new();
    for periods in [
        &result.periods,
        &result.continuous.all_data,
        &result.continuous.longest_continuous,
    ] {
        sequences.push(&periods.daily);
        sequences.push(&periods.weekly);
        sequences.push(&periods.all_time);
        sequences.extend(periods.quarterly.values());
    }
    sequences
}

// =============================================================================
// Property: Period sequences are bounded, ranked, and scored in [0, 100]
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn significance_is_a_percentage(
        stamps in timestamps_strategy(1, 60),
        config in config_strategy()
    ) {
        let result = analyze(&stamps, &config).unwrap();
        for sequence in all_sequences(&result) {
            for r in sequence {
                prop_assert!(
                    (0.0..=100.0).contains(&r.significance),
                    "significance out of range: {}",
                    r.significance
                );
                prop_assert!(r.power >= 0.0);
            }
        }
    }

    #[test]
    fn sequences_respect_limit_and_order(
        stamps in timestamps_strategy(1, 60),
        config in config_strategy()
    ) {
        let result = analyze(&stamps, &config).unwrap();
        for sequence in all_sequences(&result) {
            prop_assert!(sequence.len() <= config.num_periods);
            for pair in sequence.windows(2) {
                prop_assert!(pair[0].power >= pair[1].power);
            }
        }
    }

    #[test]
    fn periods_lie_within_searched_band(
        stamps in timestamps_strategy(4, 60),
        config in config_strategy()
    ) {
        let result = analyze(&stamps, &config).unwrap();
        for r in &result.periods.all_time {
            prop_assert!(r.period >= config.min_period * (1.0 - 1e-9));
            prop_assert!(r.period <= config.max_period * (1.0 + 1e-9));
        }
    }
}

// =============================================================================
// Property: Calendar series shapes
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn day_series_is_dense(stamps in timestamps_strategy(1, 100)) {
        let result = analyze(&stamps, &cheap_config()).unwrap();
        for pair in result.days.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        prop_assert_eq!(result.days.iter().map(|d| d.count).sum::<usize>(), stamps.len());
        prop_assert!(result.days.first().unwrap().count > 0);
        prop_assert!(result.days.last().unwrap().count > 0);
    }

    #[test]
    fn month_series_is_dense(stamps in timestamps_strategy(1, 100)) {
        let result = analyze(&stamps, &cheap_config()).unwrap();
        for pair in result.months.windows(2) {
            prop_assert_eq!(Some(pair[1].month), pair[0].month.checked_add_months(Months::new(1)));
        }
        for m in &result.months {
            prop_assert_eq!(m.month.day(), 1);
        }
        prop_assert_eq!(result.months.iter().map(|m| m.count).sum::<usize>(), stamps.len());
    }

    #[test]
    fn week_series_is_sparse_and_ascending(stamps in timestamps_strategy(1, 100)) {
        let result = analyze(&stamps, &cheap_config()).unwrap();
        for w in &result.weeks {
            prop_assert!(w.count > 0);
            prop_assert_eq!(w.week.weekday(), Weekday::Mon);
        }
        for pair in result.weeks.windows(2) {
            prop_assert!(pair[0].week < pair[1].week);
        }
        prop_assert_eq!(result.weeks.iter().map(|w| w.count).sum::<usize>(), stamps.len());
    }
}

// =============================================================================
// Property: Order independence and determinism
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn shuffled_subset_matches_sorted(
        (sorted, shuffled) in timestamps_strategy(4, 40).prop_flat_map(|mut v| {
            v.sort_unstable();
            (Just(v.clone()), Just(v).prop_shuffle())
        }),
        config in config_strategy()
    ) {
        let to_moments = |stamps: &[i64]| -> Vec<DateTime<Utc>> {
            stamps
                .iter()
                .map(|&ms| DateTime::from_timestamp_millis(ms).unwrap())
                .collect()
        };
        let detector = PeriodDetector::new(config);
        prop_assert_eq!(
            detector.detect(&to_moments(&shuffled)),
            detector.detect(&to_moments(&sorted))
        );
        prop_assert_eq!(analyze(&shuffled, &config), analyze(&sorted, &config));
    }

    #[test]
    fn analysis_is_idempotent(
        stamps in timestamps_strategy(1, 60),
        config in config_strategy()
    ) {
        prop_assert_eq!(analyze(&stamps, &config), analyze(&stamps, &config));
    }

    #[test]
    fn record_counts_match_input(
        stamps in timestamps_strategy(1, 60),
        config in config_strategy()
    ) {
        let result = analyze(&stamps, &config).unwrap();
        prop_assert_eq!(result.total_records, stamps.len());
        prop_assert_eq!(result.continuous.record_count, stamps.len());
        prop_assert!(result.start_date <= result.end_date);
    }
}

// =============================================================================
// Property: Invalid ranges are always rejected
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inverted_range_is_rejected(
        stamps in timestamps_strategy(1, 10),
        max in 0.1..100.0_f64,
        extra in 0.0..100.0_f64
    ) {
        let config = PeriodConfig::default().with_min_period(max + extra).with_max_period(max);
        prop_assert!(matches!(
            analyze(&stamps, &config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }
}
