pub mod export;
pub mod links;
pub mod records;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Invalid record payload: {0}")]
    InvalidPayload(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No results to export")]
    EmptyExport,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
