//! Error type shared by axes, series and the forward transform

use thiserror::Error;

/// Errors raised while building or querying series
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Positional index outside `[-len, len)`
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Data and coordinate buffers disagree in length
    #[error("data has {data} samples but axis has {axis} coordinates")]
    ShapeMismatch { data: usize, axis: usize },

    /// Coordinate at `index` is smaller than the one before it
    #[error("axis decreases at index {index}")]
    DecreasingAxis { index: usize },

    /// A derived property needs more samples than the series holds
    #[error("need at least {required} samples, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("series must have at least one sample")]
    EmptySeries,

    /// Axis spacing is zero, so rates are undefined
    #[error("axis spacing is zero")]
    ZeroSpacing,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("FFT error: {0}")]
    Fft(String),
}

/// Resolve a possibly negative position against a buffer of `len` elements.
///
/// `-1` maps to the last element, `-len` to the first.
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize, SeriesError> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };

    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(SeriesError::IndexOutOfRange { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 4), Ok(0));
        assert_eq!(resolve_index(3, 4), Ok(3));
        assert_eq!(resolve_index(-1, 4), Ok(3));
        assert_eq!(resolve_index(-4, 4), Ok(0));

        assert_eq!(
            resolve_index(4, 4),
            Err(SeriesError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            resolve_index(-5, 4),
            Err(SeriesError::IndexOutOfRange { index: -5, len: 4 })
        );
        assert!(resolve_index(0, 0).is_err());
        assert!(resolve_index(-1, 0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SeriesError::ShapeMismatch { data: 3, axis: 2 };
        assert_eq!(err.to_string(), "data has 3 samples but axis has 2 coordinates");
        assert_eq!(
            SeriesError::EmptySeries.to_string(),
            "series must have at least one sample"
        );
    }
}
