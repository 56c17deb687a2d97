//! Synthetic test signals
//!
//! Generates sampled sinusoids as [`TimeSeries`] so that spectra can be
//! checked against known frequencies.

use crate::error::SeriesError;
use crate::time_series::TimeSeries;
use crate::Result;
use std::f64::consts::PI;

/// Sine signal parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalConfig {
    /// Samples per second
    pub sample_rate: f64,
    /// Number of samples to generate
    pub num_samples: usize,
    /// Tone frequency in Hz
    pub frequency: f64,
    /// Peak amplitude of the tone
    pub amplitude: f64,
    /// Constant added to every sample (shows up in the DC bin)
    pub offset: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            num_samples: 1000,
            frequency: 50.0,
            amplitude: 1.0,
            offset: 0.0,
        }
    }
}

impl SignalConfig {
    /// Create a signal configuration with validation
    pub fn new(sample_rate: f64, num_samples: usize, frequency: f64) -> Result<Self> {
        Self::with_amplitude(sample_rate, num_samples, frequency, 1.0, 0.0)
    }

    /// Create a signal configuration with explicit amplitude and offset
    pub fn with_amplitude(
        sample_rate: f64,
        num_samples: usize,
        frequency: f64,
        amplitude: f64,
        offset: f64,
    ) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SeriesError::InvalidParameter(format!(
                "Sample rate must be positive and finite, got {}",
                sample_rate
            )));
        }

        if num_samples == 0 {
            return Err(SeriesError::InvalidParameter(
                "Number of samples must be at least 1".to_string(),
            ));
        }

        if !frequency.is_finite() || frequency < 0.0 {
            return Err(SeriesError::InvalidParameter(format!(
                "Frequency must be non-negative and finite, got {}",
                frequency
            )));
        }

        if !amplitude.is_finite() || !offset.is_finite() {
            return Err(SeriesError::InvalidParameter(format!(
                "Amplitude and offset must be finite, got {} and {}",
                amplitude, offset
            )));
        }

        let config = Self {
            sample_rate,
            num_samples,
            frequency,
            amplitude,
            offset,
        };

        if frequency > config.nyquist_frequency() {
            log::warn!(
                "Tone at {} Hz is above the Nyquist frequency ({} Hz) and will alias",
                frequency,
                config.nyquist_frequency()
            );
        }

        Ok(config)
    }

    /// Sampling interval in seconds
    pub fn dt(&self) -> f64 {
        1.0 / self.sample_rate
    }

    pub fn nyquist_frequency(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Render the signal as a time series starting at t = 0
    pub fn generate(&self) -> Result<TimeSeries> {
        let data: Vec<f64> = (0..self.num_samples)
            .map(|i| {
                let t = i as f64 / self.sample_rate;
                self.offset + self.amplitude * (2.0 * PI * self.frequency * t).sin()
            })
            .collect();

        TimeSeries::from_sample_rate(data, self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency_series::FrequencySeries;

    #[test]
    fn test_signal_config() {
        let config = SignalConfig::default();
        assert_eq!(config.sample_rate, 1000.0);
        assert_eq!(config.num_samples, 1000);
        assert!((config.dt() - 0.001).abs() < 1e-15);
        assert_eq!(config.nyquist_frequency(), 500.0);
    }

    #[test]
    fn test_signal_config_validation() {
        assert!(SignalConfig::new(100.0, 64, 10.0).is_ok());

        assert!(SignalConfig::new(0.0, 64, 10.0).is_err());
        assert!(SignalConfig::new(-1.0, 64, 10.0).is_err());
        assert!(SignalConfig::new(100.0, 0, 10.0).is_err());
        assert!(SignalConfig::new(100.0, 64, -5.0).is_err());
        assert!(SignalConfig::with_amplitude(100.0, 64, 10.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_generate() {
        let config = SignalConfig::with_amplitude(100.0, 200, 10.0, 2.0, 0.5).unwrap();
        let series = config.generate().unwrap();

        assert_eq!(series.len(), 200);
        assert!((series.dt().unwrap() - 0.01).abs() < 1e-12);
        assert!((series.sample_rate().unwrap() - 100.0).abs() < 1e-9);
        assert!((series.nyquist_frequency().unwrap() - 50.0).abs() < 1e-9);
        assert!((series.value_at(0).unwrap() - 0.5).abs() < 1e-12);

        let spectrum = FrequencySeries::from_time_series(&series).unwrap();
        let (freq, mag) = spectrum.peak().unwrap();
        assert!((freq - 10.0).abs() < 1e-9);
        // amplitude * n / 2
        assert!((mag - 200.0).abs() < 1e-6);
        // offset * n
        assert!((spectrum.data()[0].re - 100.0).abs() < 1e-6);
    }
}
