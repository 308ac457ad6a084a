use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Log file not found at {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to write {format} output '{}': {source}", path.display())]
    WriteFailed {
        format: &'static str,
        path: PathBuf,
        source: Box<ExtractError>,
    },
}

impl ExtractError {
    /// True when the input log could not be found
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ExtractError::MissingInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
