use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "orderbook.log";
pub const DEFAULT_JSON_OUTPUT_PATH: &str = "symbols.json";
pub const DEFAULT_CSV_OUTPUT_PATH: &str = "symbols.csv";

/// Configuration for an extraction run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub json_output_path: PathBuf,
    pub csv_output_path: PathBuf,
    pub debug: bool,
    /// Suppress progress messages on stdout
    pub quiet: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            json_output_path: PathBuf::from(DEFAULT_JSON_OUTPUT_PATH),
            csv_output_path: PathBuf::from(DEFAULT_CSV_OUTPUT_PATH),
            debug: false,
            quiet: false,
        }
    }
}
