//! Seasonality detection via FFT-based autocorrelation
//!
//! Reports whether a numeric series carries a strong recurring pattern at
//! weekly or monthly lag. The check is a heuristic: it requires at least
//! 50 valid observations and treats every internal failure as "not
//! seasonal" rather than propagating it.

use crate::dataset::coerce_numeric;
use crate::error::{AdvisorError, Result};
use num_complex::Complex;
use polars::prelude::Series;
use rustfft::FftPlanner;
use statrs::statistics::Statistics;
use std::ops::Range;

/// Minimum number of valid observations required for the check
pub const MIN_OBSERVATIONS: usize = 50;

/// Number of lags computed for the autocorrelation profile
pub const ACF_LAGS: usize = 40;

/// Autocorrelation coefficient above which a lag counts as seasonal
pub const ACF_THRESHOLD: f64 = 0.3;

/// Lag inspected for weekly patterns
pub const WEEKLY_LAG: usize = 7;

/// Lag window inspected for monthly patterns (28 through 31 inclusive)
pub const MONTHLY_LAGS: Range<usize> = 28..32;

/// Check a series for weekly or monthly seasonality.
///
/// Entries are coerced to numeric with invalid and missing values
/// discarded. Returns `false` for fewer than 50 valid observations and
/// for any coercion or computation failure.
pub fn check_seasonality(series: &Series) -> bool {
    match coerce_numeric(series) {
        Ok(values) => is_seasonal_values(&values),
        Err(_) => false,
    }
}

/// Seasonality check over an already-coerced slice of values
pub fn is_seasonal_values(values: &[f64]) -> bool {
    if values.len() < MIN_OBSERVATIONS {
        return false;
    }

    match autocorrelation(values, ACF_LAGS) {
        Ok(acf) => {
            let weekly = acf.get(WEEKLY_LAG).map_or(false, |&v| v > ACF_THRESHOLD);
            let monthly = acf
                .get(MONTHLY_LAGS)
                .map_or(false, |lags| lags.iter().any(|&v| v > ACF_THRESHOLD));
            weekly || monthly
        }
        Err(_) => false,
    }
}

/// Compute the autocorrelation function up to `nlags` using the FFT.
///
/// The series is demeaned and zero-padded to a power of two, then the
/// autocovariance comes from the inverse transform of the power spectrum
/// (Wiener-Khinchin) and is normalized by the lag-0 term. `nlags` is
/// clamped to the series length minus one.
pub fn autocorrelation(values: &[f64], nlags: usize) -> Result<Vec<f64>> {
    let n = values.len();
    if n < 2 {
        return Err(AdvisorError::MathError(
            "autocorrelation requires at least 2 observations".to_string(),
        ));
    }

    let mean = values.iter().mean();
    let variance = values.iter().population_variance();
    if !variance.is_finite() || variance < 1e-12 {
        return Err(AdvisorError::MathError(
            "series is constant or degenerate".to_string(),
        ));
    }

    // Pad to at least 2n so the circular convolution becomes linear
    let padded = (2 * n).next_power_of_two();
    let mut buffer: Vec<Complex<f64>> = values
        .iter()
        .map(|&x| Complex::new(x - mean, 0.0))
        .collect();
    buffer.resize(padded, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(padded).process(&mut buffer);
    for c in buffer.iter_mut() {
        *c = Complex::new(c.norm_sqr(), 0.0);
    }
    planner.plan_fft_inverse(padded).process(&mut buffer);

    // The inverse transform is unnormalized; the factor cancels in the
    // ratio below but lag 0 must still be positive.
    let lag0 = buffer[0].re;
    if !lag0.is_finite() || lag0 <= 0.0 {
        return Err(AdvisorError::MathError(
            "autocovariance at lag 0 is not positive".to_string(),
        ));
    }

    let nlags = nlags.min(n - 1);
    Ok((0..=nlags).map(|k| buffer[k].re / lag0).collect())
}
