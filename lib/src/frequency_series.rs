//! Complex spectra indexed along a frequency axis

use crate::axis::{Frequency, FrequencyAxis};
use crate::series::LabeledArray;
use crate::time_series::TimeSeries;
use crate::transform::SpectrumAnalyzer;
use crate::utils::format_frequency;
use crate::Result;
use num_complex::Complex64;
use std::fmt;

/// Complex spectral values indexed by frequency in hertz
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySeries {
    inner: LabeledArray<Complex64, Frequency>,
}

impl FrequencySeries {
    /// Create a frequency series; without an axis the coordinates default to zeros
    pub fn new(data: Vec<Complex64>, freq: Option<FrequencyAxis>) -> Result<Self> {
        Ok(Self {
            inner: LabeledArray::new(data, freq)?,
        })
    }

    /// One-sided spectrum of a real time series.
    ///
    /// Plans a fresh transform; use [`SpectrumAnalyzer`] directly when
    /// transforming many series of the same length.
    pub fn from_time_series(time_series: &TimeSeries) -> Result<Self> {
        SpectrumAnalyzer::new().analyze(time_series)
    }

    /// Replace the default "Frequency Series" label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.inner.set_name(name);
        self
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bin value at `index`; negative indices count from the end
    pub fn value_at(&self, index: isize) -> Result<Complex64> {
        self.inner.value_at(index)
    }

    pub fn data(&self) -> &[Complex64] {
        self.inner.data()
    }

    pub fn freq(&self) -> &FrequencyAxis {
        self.inner.axis()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn iter(&self) -> impl Iterator<Item = Complex64> + '_ {
        self.inner.iter()
    }

    /// `(frequency, value)` pairs
    pub fn coords_and_values(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.inner.coords_and_values()
    }

    /// Frequency resolution (bin spacing) in hertz
    pub fn df(&self) -> Result<f64> {
        self.inner.spacing()
    }

    /// Sample-rate estimate `df * len`.
    ///
    /// For a spectrum of `n / 2 + 1` bins taken from `n` samples at spacing
    /// `dt` this evaluates to `(n / 2 + 1) / (n * dt)`, not `1 / dt`.
    pub fn sample_rate(&self) -> Result<f64> {
        Ok(self.df()? * self.len() as f64)
    }

    /// Magnitude of each bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.iter().map(|c| c.norm()).collect()
    }

    /// Phase of each bin in radians
    pub fn phases(&self) -> Vec<f64> {
        self.iter().map(|c| c.arg()).collect()
    }

    /// Squared magnitude of each bin
    pub fn power(&self) -> Vec<f64> {
        self.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Strongest bin above DC as `(frequency, magnitude)`.
    ///
    /// Returns `None` when the series holds no bin besides DC.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.coords_and_values()
            .skip(1)
            .map(|(freq, value)| (freq, value.norm()))
            .fold(None, |best: Option<(f64, f64)>, (freq, mag)| match best {
                Some((_, best_mag)) if best_mag >= mag => best,
                _ => Some((freq, mag)),
            })
    }
}

impl fmt::Display for FrequencySeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} bins [{}]", self.name(), self.len(), self.freq().units())?;
        if let Ok(df) = self.df() {
            write!(f, ", resolution {}", format_frequency(df))?;
        }
        Ok(())
    }
}
