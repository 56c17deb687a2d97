//! Real-valued series sampled along a time axis

use crate::axis::{Time, TimeAxis};
use crate::error::SeriesError;
use crate::series::LabeledArray;
use crate::utils::{format_frequency, format_time};
use crate::Result;
use std::fmt;

/// Real samples indexed by time in seconds.
///
/// Derived properties assume a uniformly spaced axis and read the spacing
/// from its first two points.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    inner: LabeledArray<f64, Time>,
}

impl TimeSeries {
    /// Create a time series; without an axis the coordinates default to zeros
    pub fn new(data: Vec<f64>, time: Option<TimeAxis>) -> Result<Self> {
        Ok(Self {
            inner: LabeledArray::new(data, time)?,
        })
    }

    /// Create a time series starting at t = 0 with spacing `1 / sample_rate`
    pub fn from_sample_rate(data: Vec<f64>, sample_rate: f64) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SeriesError::InvalidParameter(format!(
                "Sample rate must be positive and finite, got {}",
                sample_rate
            )));
        }

        let time = TimeAxis::uniform(data.len(), 0.0, 1.0 / sample_rate);
        Self::new(data, Some(time))
    }

    /// Replace the default "Time Series" label
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

    /// Sample at `index`; negative indices count from the end
    pub fn value_at(&self, index: isize) -> Result<f64> {
        self.inner.value_at(index)
    }

    pub fn data(&self) -> &[f64] {
        self.inner.data()
    }

    pub fn time(&self) -> &TimeAxis {
        self.inner.axis()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.iter()
    }

    /// `(time, sample)` pairs
    pub fn coords_and_values(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.inner.coords_and_values()
    }

    /// Sampling interval in seconds
    pub fn dt(&self) -> Result<f64> {
        self.inner.spacing()
    }

    /// Samples per second, `1 / dt`
    pub fn sample_rate(&self) -> Result<f64> {
        Ok(1.0 / self.nonzero_dt()?)
    }

    /// Time between the first and last samples
    pub fn duration(&self) -> Result<f64> {
        self.time().extent()
    }

    /// Highest frequency representable without aliasing, `1 / (2 dt)`
    pub fn nyquist_frequency(&self) -> Result<f64> {
        Ok(1.0 / (2.0 * self.nonzero_dt()?))
    }

    fn nonzero_dt(&self) -> Result<f64> {
        let dt = self.dt()?;
        if dt == 0.0 {
            return Err(SeriesError::ZeroSpacing);
        }
        Ok(dt)
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} samples [{}]", self.name(), self.len(), self.time().units())?;
        if let (Ok(rate), Ok(duration)) = (self.sample_rate(), self.duration()) {
            write!(
                f,
                ", {} over {}",
                format_frequency(rate),
                format_time(duration)
            )?;
        }
        Ok(())
    }
}
