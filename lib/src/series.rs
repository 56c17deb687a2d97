//! Labelled one-dimensional arrays
//!
//! [`LabeledArray`] pairs a sample buffer with the axis that indexes it and
//! a human-readable name. It backs both [`TimeSeries`](crate::TimeSeries)
//! and [`FrequencySeries`](crate::FrequencySeries).

use crate::axis::{Axis, Domain};
use crate::error::{resolve_index, SeriesError};
use crate::Result;

/// Sample buffer indexed by an axis of the same length
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray<T, D: Domain> {
    data: Vec<T>,
    axis: Axis<D>,
    name: String,
}

impl<T: Copy, D: Domain> LabeledArray<T, D> {
    /// Create a labelled array, checking that data and axis lengths agree
    /// and that the coordinates never decrease.
    ///
    /// Without an axis the coordinates default to zeros of the data's length.
    pub fn new(data: Vec<T>, axis: Option<Axis<D>>) -> Result<Self> {
        let axis = axis.unwrap_or_else(|| Axis::zeros(data.len()));

        if data.len() != axis.len() {
            return Err(SeriesError::ShapeMismatch {
                data: data.len(),
                axis: axis.len(),
            });
        }

        if let Some(index) = axis
            .values()
            .windows(2)
            .position(|pair| pair[1] < pair[0])
        {
            return Err(SeriesError::DecreasingAxis { index: index + 1 });
        }

        log::debug!(
            "Built {} with {} samples along '{}'",
            D::SERIES_NAME,
            data.len(),
            D::DIM
        );

        Ok(Self {
            data,
            axis,
            name: D::SERIES_NAME.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `index`; negative indices count from the end
    pub fn value_at(&self, index: isize) -> Result<T> {
        let i = resolve_index(index, self.data.len())?;
        Ok(self.data[i])
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn axis(&self) -> &Axis<D> {
        &self.axis
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// `(coordinate, sample)` pairs in axis order
    pub fn coords_and_values(&self) -> impl Iterator<Item = (f64, T)> + '_ {
        self.axis.iter().zip(self.data.iter().copied())
    }

    /// Coordinate spacing taken from the first two axis points
    pub fn spacing(&self) -> Result<f64> {
        self.axis.spacing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Time, TimeAxis};

    #[test]
    fn test_shape_validation() {
        let axis = TimeAxis::new(vec![0.0, 1.0, 2.0]);
        let result = LabeledArray::<f64, Time>::new(vec![1.0, 2.0], Some(axis));
        assert_eq!(
            result,
            Err(SeriesError::ShapeMismatch { data: 2, axis: 3 })
        );
    }

    #[test]
    fn test_axis_must_not_decrease() {
        let axis = TimeAxis::new(vec![0.0, 1.0, 0.5, 2.0]);
        let result = LabeledArray::<f64, Time>::new(vec![1.0; 4], Some(axis));
        assert_eq!(result, Err(SeriesError::DecreasingAxis { index: 2 }));

        // Repeated coordinates are allowed
        let flat = TimeAxis::new(vec![0.0, 1.0, 1.0, 2.0]);
        assert!(LabeledArray::<f64, Time>::new(vec![1.0; 4], Some(flat)).is_ok());
    }

    #[test]
    fn test_default_axis() {
        let array = LabeledArray::<f64, Time>::new(vec![1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.axis().values(), &[0.0, 0.0, 0.0]);
        assert_eq!(array.name(), "Time Series");
        assert_eq!(array.spacing(), Ok(0.0));
    }

    #[test]
    fn test_indexing_and_iteration() {
        let axis = TimeAxis::uniform(3, 0.0, 0.5);
        let mut array = LabeledArray::new(vec![4.0, 5.0, 6.0], Some(axis)).unwrap();

        assert_eq!(array.value_at(1), Ok(5.0));
        assert_eq!(array.value_at(-1), Ok(6.0));
        assert!(array.value_at(3).is_err());

        let pairs: Vec<_> = array.coords_and_values().collect();
        assert_eq!(pairs, vec![(0.0, 4.0), (0.5, 5.0), (1.0, 6.0)]);
        assert_eq!(array.iter().sum::<f64>(), 15.0);

        array.set_name("sensor");
        assert_eq!(array.name(), "sensor");
    }

    #[test]
    fn test_empty_array() {
        let array = LabeledArray::<f64, Time>::new(Vec::new(), None).unwrap();
        assert!(array.is_empty());
        assert!(array.value_at(0).is_err());
        assert!(array.spacing().is_err());
    }
}
