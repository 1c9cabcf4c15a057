//! Error types for the temperature heatmap.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for loading and rendering a heatmap.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Loading Errors ===
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    // === Data Errors ===
    #[error("Record {index} has month {month}, expected 1-12")]
    InvalidMonth { index: usize, month: u32 },

    #[error("Dataset contains no monthly variance records")]
    EmptyDataset,

    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: String, value: f64 },

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(err.to_string())
    }
}
