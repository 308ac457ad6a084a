use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use symex::config::{DEFAULT_CSV_OUTPUT_PATH, DEFAULT_INPUT_PATH, DEFAULT_JSON_OUTPUT_PATH};
use symex::pipeline::extract_symbols;
use symex::{ExtractConfig, ExtractionStats};

#[derive(Parser)]
#[command(name = "symex")]
#[command(about = "Extract symbol records from an order book log into JSON and CSV")]
#[command(version)]
struct Args {
    /// Input log file
    #[arg(short = 'i', long = "input", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// JSON output file
    #[arg(long = "json-output", default_value = DEFAULT_JSON_OUTPUT_PATH)]
    json_output: PathBuf,

    /// CSV output file
    #[arg(long = "csv-output", default_value = DEFAULT_CSV_OUTPUT_PATH)]
    csv_output: PathBuf,

    /// Debug mode - log skipped lines and print final statistics to stderr
    #[arg(long)]
    debug: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Args {
    fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            input_path: self.input.clone(),
            json_output_path: self.json_output.clone(),
            csv_output_path: self.csv_output.clone(),
            debug: self.debug,
            quiet: self.quiet,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    let stats = extract_symbols(&config)?;

    if config.debug {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &ExtractionStats) {
    eprintln!("Final statistics:");
    eprintln!("  Lines read: {}", stats.lines_read);
    eprintln!("  Blank lines: {}", stats.blank_lines);
    eprintln!("  Envelope lines: {}", stats.envelope_lines);
    eprintln!("  Raw lines: {}", stats.raw_lines);
    eprintln!("  Lines without marker: {}", stats.lines_without_marker);
    eprintln!("  Unmatched marker lines: {}", stats.unmatched_lines);
    eprintln!("  Symbols matched: {}", stats.symbols_matched);
    eprintln!("  Duplicates discarded: {}", stats.duplicates_discarded);
    eprintln!("  Unique symbols: {}", stats.unique_symbols);
    eprintln!("  Processing time: {:?}", stats.processing_time);
}
