//! Timefreq Library
//!
//! Time and frequency domain series for discretely sampled signals.
//! A [`TimeSeries`] holds real samples along a time axis; the one-sided
//! FFT turns it into a [`FrequencySeries`] of complex bins along a
//! frequency axis. Both expose the derived sampling quantities (spacing,
//! sample rate, duration, Nyquist frequency) used to reason about them.

pub mod axis;
pub mod error;
pub mod frequency_series;
pub mod series;
pub mod signal;
pub mod time_series;
pub mod transform;
pub mod utils;

pub use axis::{Axis, Domain, Frequency, FrequencyAxis, Time, TimeAxis};
pub use error::SeriesError;
pub use frequency_series::FrequencySeries;
pub use num_complex::Complex64;
pub use series::LabeledArray;
pub use signal::SignalConfig;
pub use time_series::TimeSeries;
pub use transform::{rfft, rfft_frequencies, SpectrumAnalyzer};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
///
/// Installs the environment logger when the `env_logger` feature is enabled.
pub fn init() {
    #[cfg(feature = "env_logger")]
    {
        let _ = env_logger::try_init();
    }
}

/// Result type for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;
