//! Coordinate axes for time and frequency domain series
//!
//! An axis is an immutable sequence of coordinates labelling the single
//! dimension of a series. The domain marker fixes the descriptive
//! attributes (`long_name`, `units`) so they cannot drift from the variant.

use crate::error::{resolve_index, SeriesError};
use crate::Result;
use std::fmt;
use std::marker::PhantomData;

/// Domain marker describing the labels attached to an axis
pub trait Domain: fmt::Debug + Clone + Copy + PartialEq + 'static {
    /// Dimension name
    const DIM: &'static str;
    /// Descriptive name of the coordinate
    const LONG_NAME: &'static str;
    /// Physical unit of the coordinate
    const UNITS: &'static str;
    /// Default label of a series indexed along this domain
    const SERIES_NAME: &'static str;
}

/// Time domain (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time;

/// Frequency domain (hertz)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency;

impl Domain for Time {
    const DIM: &'static str = "time";
    const LONG_NAME: &'static str = "Time";
    const UNITS: &'static str = "s";
    const SERIES_NAME: &'static str = "Time Series";
}

impl Domain for Frequency {
    const DIM: &'static str = "freq";
    const LONG_NAME: &'static str = "Frequency";
    const UNITS: &'static str = "Hz";
    const SERIES_NAME: &'static str = "Frequency Series";
}

/// Ordered coordinate values along one domain
#[derive(Debug, Clone, PartialEq)]
pub struct Axis<D: Domain> {
    values: Vec<f64>,
    domain: PhantomData<D>,
}

/// Sample times in seconds
pub type TimeAxis = Axis<Time>;

/// Frequency bins in hertz
pub type FrequencyAxis = Axis<Frequency>;

impl<D: Domain> Axis<D> {
    /// Create an axis from raw coordinate values
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            domain: PhantomData,
        }
    }

    /// Zero-filled axis of `len` points, used when a series is built without coordinates
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Evenly spaced axis: `start, start + step, ...`
    pub fn uniform(len: usize, start: f64, step: f64) -> Self {
        Self::new((0..len).map(|i| start + i as f64 * step).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coordinate at `index`; negative indices count from the end
    pub fn value_at(&self, index: isize) -> Result<f64> {
        let i = resolve_index(index, self.values.len())?;
        Ok(self.values[i])
    }

    /// Raw coordinate buffer
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn long_name(&self) -> &'static str {
        D::LONG_NAME
    }

    pub fn units(&self) -> &'static str {
        D::UNITS
    }

    pub fn dim(&self) -> &'static str {
        D::DIM
    }

    /// Distance between the first two coordinates.
    ///
    /// Only the first pair is inspected; a non-uniform axis yields the
    /// spacing of its leading interval.
    pub fn spacing(&self) -> Result<f64> {
        if self.values.len() < 2 {
            return Err(SeriesError::InsufficientSamples {
                required: 2,
                actual: self.values.len(),
            });
        }
        Ok(self.values[1] - self.values[0])
    }

    /// Distance between the last and first coordinates
    pub fn extent(&self) -> Result<f64> {
        if self.values.len() < 2 {
            return Err(SeriesError::InsufficientSamples {
                required: 2,
                actual: self.values.len(),
            });
        }
        Ok(self.value_at(-1)? - self.value_at(0)?)
    }
}

impl<D: Domain> From<Vec<f64>> for Axis<D> {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<D: Domain> fmt::Display for Axis<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} points ({})",
            D::LONG_NAME,
            D::UNITS,
            self.values.len(),
            D::DIM
        )
    }
}
