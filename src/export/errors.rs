use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error)
}
