// src/pipeline/stream.rs
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use crate::error::{ExtractError, Result};
use crate::input_format::LineReader;
use crate::pattern_extraction::extract_line;
use crate::pipeline::context::{ExtractionStats, LineOutcome, Symbol};

/// Collects symbols from one or more log streams, then deduplicates and sorts them
#[derive(Debug, Default)]
pub struct SymbolPipeline {
    symbols: Vec<Symbol>,
    stats: ExtractionStats,
}

impl SymbolPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a log file from disk
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        let reader = LineReader::open(path)?;
        self.process_reader(reader)
    }

    /// Read a log stream line by line
    pub fn process_stream<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.process_reader(LineReader::new(input))
    }

    /// Consume an already opened reader
    pub fn process_reader<R: BufRead>(&mut self, reader: LineReader<R>) -> Result<()> {
        let start_time = Instant::now();

        for line_result in reader {
            let (line_number, line) = line_result.map_err(ExtractError::IoError)?;
            let outcome = extract_line(&line);
            self.stats.record_outcome(&outcome);

            match outcome {
                LineOutcome::Symbol(_, symbol) => self.symbols.push(symbol),
                LineOutcome::NoMatch(kind) => {
                    tracing::debug!(
                        line = line_number,
                        ?kind,
                        "marker without full match, skipping"
                    );
                }
                LineOutcome::Blank | LineOutcome::NoMarker(_) => {
                    tracing::trace!(line = line_number, "no symbol on line");
                }
            }
        }

        self.stats.processing_time += start_time.elapsed();
        Ok(())
    }

    /// Symbols collected so far, in input order, duplicates included
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Deduplicate and sort everything collected, returning final stats
    pub fn finish(mut self) -> (Vec<Symbol>, ExtractionStats) {
        let start_time = Instant::now();
        let total = self.symbols.len();
        let symbols = dedup_and_sort(self.symbols);

        self.stats.duplicates_discarded = total - symbols.len();
        self.stats.unique_symbols = symbols.len();
        self.stats.processing_time += start_time.elapsed();

        tracing::info!(
            matched = total,
            unique = symbols.len(),
            "symbol extraction complete"
        );
        (symbols, self.stats)
    }
}

/// Keep the last symbol seen for each id and order numerically by id.
///
/// The id is compared as text for equality, so `"07"` and `"7"` are distinct
/// symbols; a replaced symbol keeps the position of the id's first appearance.
pub fn dedup_and_sort(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut by_id: IndexMap<String, Symbol> = IndexMap::with_capacity(symbols.len());
    for symbol in symbols {
        if let Some(previous) = by_id.insert(symbol.id.clone(), symbol) {
            tracing::debug!(id = %previous.id, "duplicate symbol id, keeping later entry");
        }
    }

    let mut unique: Vec<Symbol> = by_id.into_values().collect();
    unique.sort_by(|a, b| compare_numeric_ids(&a.id, &b.id));
    unique
}

/// Compare two digit strings by numeric value without overflow
pub fn compare_numeric_ids(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(id: &str) -> &str {
    let stripped = id.trim_start_matches('0');
    if stripped.is_empty() && !id.is_empty() {
        "0"
    } else {
        stripped
    }
}
