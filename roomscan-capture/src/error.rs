//! Error types for capture operations

use roomscan_io::ExportError;
use thiserror::Error;

/// Errors that can occur while driving a capture session
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Data error: {0}")]
    Data(#[from] roomscan_core::Error),
}

/// Result type alias for capture operations
pub type Result<T> = std::result::Result<T, CaptureError>;
