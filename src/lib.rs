// src/lib.rs
pub mod error;
pub mod input_format;
pub mod output_format;
pub mod pattern_extraction;
pub mod pipeline;

pub use error::*;
pub use pipeline::*;

pub use input_format::{LineReader, LogLine};
pub use output_format::{write_csv, write_json, OutputFormat};
pub use pattern_extraction::{extract_line, extract_symbol, SYMBOL_MARKER};
pub use pipeline::config::ExtractConfig;
pub use pipeline::context::{ExtractionStats, LineKind, LineOutcome, Symbol};
pub use pipeline::stream::{dedup_and_sort, SymbolPipeline};
