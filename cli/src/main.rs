//! Timefreq CLI
//!
//! Generates a sampled sine, transforms it to the frequency domain and
//! prints the derived sampling quantities of both series.

use std::process;

use clap::{Arg, ArgMatches, Command};
use timefreq_lib::{utils, FrequencySeries, SignalConfig, SpectrumAnalyzer};

/// Parse an optional numeric flag, falling back to `default`
fn parse_flag<T: std::str::FromStr>(
    matches: &ArgMatches,
    name: &str,
    default: T,
) -> Result<T, String> {
    match matches.get_one::<String>(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| format!("Invalid value for --{}: {}", name, value)),
        None => Ok(default),
    }
}

fn build_config(matches: &ArgMatches) -> Result<SignalConfig, String> {
    let defaults = SignalConfig::default();

    let sample_rate = parse_flag(matches, "sample-rate", defaults.sample_rate)?;
    let num_samples = parse_flag(matches, "samples", defaults.num_samples)?;
    let frequency = parse_flag(matches, "frequency", defaults.frequency)?;
    let amplitude = parse_flag(matches, "amplitude", defaults.amplitude)?;
    let offset = parse_flag(matches, "offset", defaults.offset)?;

    SignalConfig::with_amplitude(sample_rate, num_samples, frequency, amplitude, offset)
        .map_err(|e| e.to_string())
}

fn print_bins(spectrum: &FrequencySeries, count: usize) {
    println!("First {} bins:", count.min(spectrum.len()));
    println!("  {:>12}  {:>14}  {:>10}", "freq", "magnitude", "phase");
    for (freq, value) in spectrum.coords_and_values().take(count) {
        println!(
            "  {:>12}  {:>14.6}  {:>10.4}",
            utils::format_frequency(freq),
            value.norm(),
            value.arg()
        );
    }
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let config = build_config(matches)?;
    let bins = parse_flag(matches, "bins", 8usize)?;

    log::info!(
        "Generating {} samples of a {} tone at {}",
        config.num_samples,
        utils::format_frequency(config.frequency),
        utils::format_frequency(config.sample_rate)
    );

    let series = config.generate().map_err(|e| e.to_string())?;

    let mut analyzer = SpectrumAnalyzer::new();
    let spectrum = analyzer.analyze(&series).map_err(|e| e.to_string())?;

    println!("{}", series);
    println!("{}", spectrum);
    println!();
    print!("{}", utils::series_summary(&series, &spectrum));
    if let Ok(recovered) = spectrum.sample_rate() {
        println!(
            "  Sample rate from spectrum (df x bins): {}",
            utils::format_frequency(recovered)
        );
    }
    println!();
    print_bins(&spectrum, bins);

    Ok(())
}

/// Command-line definition
fn cli() -> Command {
    Command::new("Timefreq")
        .version(timefreq_lib::VERSION)
        .about("Inspect a sampled signal and its one-sided spectrum")
        .arg(
            Arg::new("sample-rate")
                .long("sample-rate")
                .short('r')
                .help("Sample rate in Hz (default 1000)")
                .value_name("HZ"),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .short('n')
                .help("Number of samples (default 1000)")
                .value_name("N"),
        )
        .arg(
            Arg::new("frequency")
                .long("frequency")
                .short('f')
                .help("Tone frequency in Hz (default 50)")
                .value_name("HZ"),
        )
        .arg(
            Arg::new("amplitude")
                .long("amplitude")
                .short('a')
                .help("Tone amplitude (default 1)")
                .value_name("A"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .help("Constant offset added to every sample (default 0)")
                .value_name("C"),
        )
        .arg(
            Arg::new("bins")
                .long("bins")
                .short('b')
                .help("Number of spectrum bins to print (default 8)")
                .value_name("K"),
        )
}

fn main() {
    let matches = cli().get_matches();

    // Initialize the library
    timefreq_lib::init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
