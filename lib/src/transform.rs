//! One-sided Fourier transform from time series to frequency series
//!
//! Uses the real-to-complex FFT from `realfft`. The forward transform is
//! unnormalized: bin 0 holds the plain sum of the samples.

use crate::axis::FrequencyAxis;
use crate::error::SeriesError;
use crate::frequency_series::FrequencySeries;
use crate::time_series::TimeSeries;
use crate::Result;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Number of non-negative frequency bins for a real signal of length `n`
pub fn rfft_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n / 2 + 1
    }
}

/// Non-negative frequency bins for a real signal of length `n` sampled every `dt` seconds.
///
/// Returns `n / 2 + 1` values `k / (n * dt)`, starting at 0.
pub fn rfft_frequencies(n: usize, dt: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * dt);
    (0..rfft_len(n)).map(|k| k as f64 * scale).collect()
}

/// One-sided discrete Fourier transform of real samples
pub fn rfft(samples: &[f64]) -> Result<Vec<Complex64>> {
    SpectrumAnalyzer::new().spectrum(samples)
}

/// Forward transform that keeps FFT plans between calls.
///
/// Repeated transforms of the same length reuse the plan built by the
/// first one.
pub struct SpectrumAnalyzer {
    planner: RealFftPlanner<f64>,
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumAnalyzer {
    /// Create an analyzer with an empty plan cache
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::<f64>::new(),
        }
    }

    /// One-sided spectrum of `samples`, `n / 2 + 1` bins with DC first
    pub fn spectrum(&mut self, samples: &[f64]) -> Result<Vec<Complex64>> {
        match samples.len() {
            0 => Err(SeriesError::EmptySeries),
            1 => Ok(vec![Complex64::new(samples[0], 0.0)]),
            n => {
                let fft: Arc<dyn RealToComplex<f64>> = self.planner.plan_fft_forward(n);

                // The FFT uses its input as scratch space
                let mut input = samples.to_vec();
                let mut output = fft.make_output_vec();
                fft.process(&mut input, &mut output)
                    .map_err(|e| SeriesError::Fft(e.to_string()))?;

                Ok(output)
            }
        }
    }

    /// Transform a time series into its one-sided frequency series.
    ///
    /// A single sample yields one DC bin at 0 Hz; longer series need a
    /// valid `dt` to place the bins.
    pub fn analyze(&mut self, time_series: &TimeSeries) -> Result<FrequencySeries> {
        let n = time_series.len();

        let freq_bins = match n {
            0 => return Err(SeriesError::EmptySeries),
            1 => vec![0.0],
            _ => {
                let dt = time_series.dt()?;
                if dt == 0.0 {
                    return Err(SeriesError::ZeroSpacing);
                }
                rfft_frequencies(n, dt)
            }
        };

        let spectrum = self.spectrum(time_series.data())?;

        if n % 2 == 1 && n > 1 {
            log::warn!(
                "Transforming odd-length series ({} samples); the bin count alone no longer identifies the original length",
                n
            );
        }

        log::debug!(
            "Transformed '{}': {} samples -> {} bins",
            time_series.name(),
            n,
            spectrum.len()
        );

        FrequencySeries::new(spectrum, Some(FrequencyAxis::new(freq_bins)))
    }
}
