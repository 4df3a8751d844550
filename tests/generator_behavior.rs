//! Behavior-driven tests for series generation and derived statistics
//!
//! These tests verify WHAT a caller observes from the generator: counts,
//! ordering, positivity and the statistics computed from a series.

use btcinr_core::{generate_price_data_for_id, BASE_PRICE};
use btcinr_tests::{current_price, generate_price_data, percentage_change, series, Period};
use fastrand::Rng;
use time::macros::datetime;
use time::OffsetDateTime;

// =============================================================================
// Generation: Shape of every period
// =============================================================================

#[test]
fn when_any_period_is_generated_it_has_the_advertised_point_count() {
    // Given: The real clock and an entropy-seeded generator
    let now = OffsetDateTime::now_utc();
    let mut rng = Rng::new();

    // When/Then: Each period produces its fixed number of points
    let expected = [
        (Period::OneDay, 24),
        (Period::OneWeek, 7),
        (Period::OneMonth, 30),
        (Period::SixMonths, 26),
        (Period::OneYear, 12),
        (Period::Max, 5),
    ];
    for (period, count) in expected {
        let points = generate_price_data(period, now, &mut rng).expect("series");
        assert_eq!(points.len(), count, "{period} point count");
    }
}

#[test]
fn when_series_are_generated_repeatedly_every_price_is_positive() {
    // Given: Many random draws across all periods
    let now = OffsetDateTime::now_utc();
    let mut rng = Rng::with_seed(2024);

    for _ in 0..200 {
        for period in Period::ALL {
            // When: A series is generated
            let points = generate_price_data(period, now, &mut rng).expect("series");

            // Then: No price is zero or negative
            assert!(points.iter().all(|point| point.price > 0), "{period}");
        }
    }
}

#[test]
fn when_series_is_generated_points_are_oldest_first() {
    // Given: A fixed clock in early spring to exercise the month wrap
    let now = datetime!(2024-02-10 18:30:00 UTC);
    let mut rng = Rng::with_seed(5);

    for period in Period::ALL {
        // When: A series is generated
        let points = generate_price_data(period, now, &mut rng).expect("series");

        // Then: Dates strictly increase and never pass `now`
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date, "{period} must be ascending");
        }
        let newest = points.last().expect("non-empty").date.into_inner();
        assert!(newest <= now, "{period} must not be in the future");
    }
}

#[test]
fn when_same_seed_and_clock_are_used_series_are_identical() {
    // Given: Two generators with the same seed
    let now = datetime!(2024-06-15 13:45:00 UTC);

    // When: Both generate every period
    for period in Period::ALL {
        let first = generate_price_data(period, now, &mut Rng::with_seed(11)).expect("series");
        let second = generate_price_data(period, now, &mut Rng::with_seed(11)).expect("series");

        // Then: The output is reproducible
        assert_eq!(first, second, "{period}");
    }
}

#[test]
fn when_different_seeds_are_used_series_differ() {
    let now = datetime!(2024-06-15 13:45:00 UTC);
    let first = generate_price_data(Period::OneMonth, now, &mut Rng::with_seed(1)).expect("series");
    let second =
        generate_price_data(Period::OneMonth, now, &mut Rng::with_seed(2)).expect("series");
    assert_ne!(first, second);
}

/// Noise-free price and volatility half-width at index `i` of `period`.
fn expected_centre_and_band(period: Period, i: usize) -> (f64, f64) {
    let base = BASE_PRICE as f64;
    let i = i as f64;
    match period {
        Period::OneDay => (base * (1.0 + (i / 4.0).sin() * 0.02), base * 0.025),
        Period::OneWeek => (base * (1.0 - 0.02 + i * 0.005), base * 0.05),
        Period::OneMonth => (base * (1.0 - 0.05 + i * 0.002), base * 0.075),
        Period::SixMonths => (base * (1.0 - 0.15 + i * 0.008), base * 0.1),
        Period::OneYear => (base * (1.0 - 0.3 + i * 0.03), base * 0.15),
        Period::Max => {
            let centre = base / 8.0 * 2f64.powf(i * 0.8);
            (centre, centre * 0.2)
        }
    }
}

#[test]
fn when_series_are_generated_every_price_stays_within_its_band() {
    // Given: A fixed clock and many seeded draws
    let now = datetime!(2024-06-15 13:45:00 UTC);
    let mut rng = Rng::with_seed(99);

    for period in Period::ALL {
        for _ in 0..300 {
            // When: A series is generated
            let points = generate_price_data(period, now, &mut rng).expect("series");

            // Then: Each price sits within centre ± band, allowing for rounding
            for (i, point) in points.iter().enumerate() {
                let (centre, band) = expected_centre_and_band(period, i);
                let price = point.price as f64;
                assert!(
                    price >= centre - band - 1.0 && price <= centre + band + 1.0,
                    "{period}[{i}]: {price} outside {centre} ± {band}"
                );
            }
        }
    }
}

#[test]
fn when_series_are_averaged_each_index_converges_on_its_trend() {
    // Given: Many seeded draws per period
    let now = datetime!(2024-06-15 13:45:00 UTC);
    let mut rng = Rng::with_seed(4242);
    let runs = 2000;

    for period in Period::ALL {
        let mut sums = vec![0f64; period.point_count()];

        // When: Prices are averaged per index
        for _ in 0..runs {
            let points = generate_price_data(period, now, &mut rng).expect("series");
            for (sum, point) in sums.iter_mut().zip(&points) {
                *sum += point.price as f64;
            }
        }

        // Then: The volatility cancels and the drift/growth term remains
        for (i, sum) in sums.iter().enumerate() {
            let (centre, _) = expected_centre_and_band(period, i);
            let mean = sum / runs as f64;
            let tolerance = match period {
                Period::Max => centre * 0.015,
                _ => BASE_PRICE as f64 * 0.01,
            };
            assert!(
                (mean - centre).abs() < tolerance,
                "{period}[{i}]: mean {mean} not near {centre}"
            );
        }
    }
}

#[test]
fn when_max_series_is_generated_it_grows_exponentially_on_average() {
    // Given: Many MAX series
    let now = datetime!(2024-06-15 13:45:00 UTC);
    let mut rng = Rng::with_seed(77);
    let runs = 500;
    let mut sums = [0f64; 5];

    // When: Prices are averaged per index
    for _ in 0..runs {
        let points = generate_price_data(Period::Max, now, &mut rng).expect("series");
        for (sum, point) in sums.iter_mut().zip(&points) {
            *sum += point.price as f64;
        }
    }

    // Then: The newest year averages well above the oldest
    let oldest = sums[0] / runs as f64;
    let newest = sums[4] / runs as f64;
    let expected_oldest = BASE_PRICE as f64 / 8.0;
    assert!((oldest - expected_oldest).abs() < expected_oldest * 0.05);
    assert!(newest > oldest * 8.0);
}

#[test]
fn when_unknown_identifier_is_generated_series_is_empty() {
    let now = datetime!(2024-06-15 13:45:00 UTC);
    let points = generate_price_data_for_id("5Y", now, &mut Rng::with_seed(1)).expect("series");
    assert!(points.is_empty());
    assert_eq!(current_price(&points), BASE_PRICE);
    assert_eq!(percentage_change(&points), 0.0);
}

// =============================================================================
// Statistics: Current price and percentage change
// =============================================================================

#[test]
fn when_series_is_empty_current_price_is_base_price() {
    assert_eq!(current_price(&[]), 4_250_000);
}

#[test]
fn when_series_has_points_current_price_is_the_newest() {
    assert_eq!(current_price(&series(&[100, 200])), 200);
}

#[test]
fn when_series_has_fewer_than_two_points_change_is_zero() {
    assert_eq!(percentage_change(&[]), 0.0);
    assert_eq!(percentage_change(&series(&[4_250_000])), 0.0);
}

#[test]
fn when_price_rises_from_100_to_150_change_is_fifty_percent() {
    assert_eq!(percentage_change(&series(&[100, 150])), 50.0);
}
