pub mod config;
pub mod context;
pub mod stream;

use crate::error::Result;
use crate::input_format::LineReader;
use crate::output_format::OutputFormat;
use config::ExtractConfig;
use context::ExtractionStats;
use stream::SymbolPipeline;

/// Run a full extraction: read the input log, deduplicate and sort the
/// symbols, then write both output files.
///
/// Progress goes to stdout unless `config.quiet` is set. Nothing is written
/// (not even progress) when the input cannot be opened.
pub fn extract_symbols(config: &ExtractConfig) -> Result<ExtractionStats> {
    let reader = LineReader::open(&config.input_path)?;
    if !config.quiet {
        println!("Reading log file: {}", config.input_path.display());
    }

    let mut pipeline = SymbolPipeline::new();
    pipeline.process_reader(reader)?;

    let (symbols, stats) = pipeline.finish();
    if !config.quiet {
        println!("Found {} unique symbols.", symbols.len());
    }

    let outputs = [
        (OutputFormat::Json, &config.json_output_path),
        (OutputFormat::Csv, &config.csv_output_path),
    ];
    for (format, path) in outputs {
        format.write_file(path, &symbols)?;
        if !config.quiet {
            println!("Wrote {} to {}", format.label(), path.display());
        }
    }

    Ok(stats)
}
