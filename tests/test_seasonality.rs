use assert_approx_eq::assert_approx_eq;
use forecast_advisor::seasonality::{
    autocorrelation, check_seasonality, is_seasonal_values, ACF_LAGS, ACF_THRESHOLD,
    MIN_OBSERVATIONS, WEEKLY_LAG,
};
use polars::prelude::{NamedFrom, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Sine wave with the given period, n points, unit amplitude
fn sine_series(period: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * i as f64 / period).sin())
        .collect()
}

/// Seeded uniform noise in [-scale, scale]
fn noise_series(n: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-scale..scale)).collect()
}

#[test]
fn test_acf_lag_zero_is_one() {
    let values = sine_series(7.0, 100);
    let acf = autocorrelation(&values, ACF_LAGS).unwrap();

    assert_eq!(acf.len(), ACF_LAGS + 1);
    assert_approx_eq!(acf[0], 1.0, 1e-9);
}

#[test]
fn test_acf_clamps_lags_to_series_length() {
    let values = sine_series(7.0, 30);
    let acf = autocorrelation(&values, ACF_LAGS).unwrap();

    // Only 29 lags are available for 30 observations
    assert_eq!(acf.len(), 30);
}

#[test]
fn test_acf_rejects_constant_series() {
    let values = vec![5.0; 100];
    assert!(autocorrelation(&values, ACF_LAGS).is_err());
}

#[test]
fn test_acf_rejects_tiny_series() {
    assert!(autocorrelation(&[1.0], ACF_LAGS).is_err());
    assert!(autocorrelation(&[], ACF_LAGS).is_err());
}

#[test]
fn test_acf_weekly_sine_peaks_at_lag_seven() {
    let values = sine_series(7.0, 200);
    let acf = autocorrelation(&values, ACF_LAGS).unwrap();

    assert!(acf[WEEKLY_LAG] > ACF_THRESHOLD);
    // Half a period out of phase, correlation flips sign
    assert!(acf[3] < 0.0);
}

#[test]
fn test_weekly_pattern_is_seasonal() {
    let values = sine_series(7.0, 200);
    assert!(is_seasonal_values(&values));
}

#[test]
fn test_weekly_pattern_survives_noise() {
    let sine = sine_series(7.0, 200);
    let noise = noise_series(200, 0.3, 42);
    let values: Vec<f64> = sine.iter().zip(noise.iter()).map(|(s, n)| s + n).collect();

    assert!(is_seasonal_values(&values));
}

#[test]
fn test_monthly_pattern_is_seasonal() {
    // Period 30 falls inside the 28..32 monthly window; its lag-7
    // correlation alone stays below the threshold
    let values = sine_series(30.0, 300);
    let acf = autocorrelation(&values, ACF_LAGS).unwrap();

    assert!(acf[WEEKLY_LAG] < ACF_THRESHOLD);
    assert!(is_seasonal_values(&values));
}

#[test]
fn test_white_noise_is_not_seasonal() {
    let values = noise_series(300, 1.0, 7);
    assert!(!is_seasonal_values(&values));
}

#[test]
fn test_minimum_observations_boundary() {
    // 49 points return false regardless of content
    let short = sine_series(7.0, MIN_OBSERVATIONS - 1);
    assert!(!is_seasonal_values(&short));

    // 50 points with a strong weekly pattern return true
    let enough = sine_series(7.0, MIN_OBSERVATIONS);
    assert!(is_seasonal_values(&enough));
}

#[test]
fn test_constant_series_is_not_seasonal() {
    let values = vec![3.0; 100];
    assert!(!is_seasonal_values(&values));
}

#[test]
fn test_check_seasonality_coerces_strings() {
    let raw: Vec<String> = sine_series(7.0, 120)
        .into_iter()
        .map(|v| format!("{:.6}", v))
        .collect();
    let series = Series::new("target", raw);

    assert!(check_seasonality(&series));
}

#[test]
fn test_check_seasonality_discards_invalid_entries() {
    // 49 numeric entries padded with garbage: below the minimum after
    // coercion, so not seasonal
    let mut raw: Vec<String> = sine_series(7.0, 49)
        .into_iter()
        .map(|v| format!("{:.6}", v))
        .collect();
    raw.extend(["n/a".to_string(), "missing".to_string(), "".to_string()]);
    let series = Series::new("target", raw);

    assert!(!check_seasonality(&series));
}

#[test]
fn test_check_seasonality_non_numeric_column() {
    let series = Series::new("target", vec![true, false, true]);
    assert!(!check_seasonality(&series));
}
