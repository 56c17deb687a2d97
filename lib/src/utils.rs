//! Formatting helpers for reporting series and spectra
//!
//! Used by the `Display` implementations and by client applications.

use crate::frequency_series::FrequencySeries;
use crate::time_series::TimeSeries;

/// Format a frequency for display, switching to mHz below 1 Hz.
///
/// Bin spacings of long or slowly sampled signals are often sub-hertz.
pub fn format_frequency(freq_hz: f64) -> String {
    let magnitude = freq_hz.abs();
    if magnitude >= 1000.0 {
        format!("{:.2} kHz", freq_hz / 1000.0)
    } else if magnitude >= 1.0 || magnitude == 0.0 {
        format!("{:.1} Hz", freq_hz)
    } else if magnitude >= 1e-3 {
        format!("{:.1} mHz", freq_hz * 1e3)
    } else {
        format!("{:.3e} Hz", freq_hz)
    }
}

/// Format a time span for display, switching to ms/µs below 1 s
pub fn format_time(time_sec: f64) -> String {
    let magnitude = time_sec.abs();
    if magnitude >= 60.0 {
        let minutes = (time_sec / 60.0).floor();
        let seconds = time_sec % 60.0;
        format!("{:.0}m {:.1}s", minutes, seconds)
    } else if magnitude >= 1.0 || magnitude == 0.0 {
        format!("{:.2}s", time_sec)
    } else if magnitude >= 1e-3 {
        format!("{:.1} ms", time_sec * 1e3)
    } else {
        format!("{:.1} µs", time_sec * 1e6)
    }
}

/// Index of the bin whose frequency is closest to `frequency`
pub fn nearest_bin(spectrum: &FrequencySeries, frequency: f64) -> Option<usize> {
    spectrum
        .freq()
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a - frequency)
                .abs()
                .total_cmp(&(b - frequency).abs())
        })
        .map(|(i, _)| i)
}

/// Multi-line report of a time series and its spectrum
pub fn series_summary(series: &TimeSeries, spectrum: &FrequencySeries) -> String {
    let mut summary = String::new();

    summary.push_str(&format!("{}:\n", series.name()));
    summary.push_str(&format!("  Samples: {}\n", series.len()));
    if let Ok(dt) = series.dt() {
        summary.push_str(&format!("  Sampling interval: {}\n", format_time(dt)));
    }
    if let Ok(rate) = series.sample_rate() {
        summary.push_str(&format!("  Sample rate: {}\n", format_frequency(rate)));
    }
    if let Ok(duration) = series.duration() {
        summary.push_str(&format!("  Duration: {}\n", format_time(duration)));
    }
    if let Ok(nyquist) = series.nyquist_frequency() {
        summary.push_str(&format!("  Nyquist frequency: {}\n", format_frequency(nyquist)));
    }

    summary.push_str(&format!("{}:\n", spectrum.name()));
    summary.push_str(&format!("  Bins: {}\n", spectrum.len()));
    if let Ok(df) = spectrum.df() {
        summary.push_str(&format!("  Frequency resolution: {}\n", format_frequency(df)));
    }
    if let Some(dc) = spectrum.data().first() {
        summary.push_str(&format!("  DC component: {:.4}\n", dc.re));
    }
    if let Some((freq, magnitude)) = spectrum.peak() {
        summary.push_str(&format!(
            "  Peak: {} (magnitude {:.4})\n",
            format_frequency(freq),
            magnitude
        ));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::TimeAxis;

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(440.0), "440.0 Hz");
        assert_eq!(format_frequency(2500.0), "2.50 kHz");
        assert_eq!(format_frequency(0.0), "0.0 Hz");
        assert_eq!(format_frequency(0.25), "250.0 mHz");
        assert_eq!(format_frequency(0.5), "500.0 mHz");
        assert_eq!(format_frequency(0.0005), "5.000e-4 Hz");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1.5), "1.50s");
        assert_eq!(format_time(90.0), "1m 30.0s");
        assert_eq!(format_time(0.0), "0.00s");
        assert_eq!(format_time(0.01), "10.0 ms");
        assert_eq!(format_time(0.000125), "125.0 µs");
    }

    #[test]
    fn test_nearest_bin() {
        let series = TimeSeries::from_sample_rate(vec![0.0; 8], 8.0).unwrap();
        let spectrum = FrequencySeries::from_time_series(&series).unwrap();

        assert_eq!(nearest_bin(&spectrum, 0.0), Some(0));
        assert_eq!(nearest_bin(&spectrum, 2.2), Some(2));
        assert_eq!(nearest_bin(&spectrum, 100.0), Some(4));
    }

    #[test]
    fn test_series_summary() {
        let series = TimeSeries::new(
            vec![0.0, 1.0, 0.0, -1.0],
            Some(TimeAxis::new(vec![0.0, 1.0, 2.0, 3.0])),
        )
        .unwrap();
        let spectrum = FrequencySeries::from_time_series(&series).unwrap();

        let summary = series_summary(&series, &spectrum);
        assert!(summary.contains("Samples: 4"));
        assert!(summary.contains("Sample rate: 1.0 Hz"));
        assert!(summary.contains("Duration: 3.00s"));
        assert!(summary.contains("Nyquist frequency: 500.0 mHz"));
        assert!(summary.contains("Bins: 3"));
        assert!(summary.contains("Frequency resolution: 250.0 mHz"));
        assert!(summary.contains("Peak: "));
    }
}
