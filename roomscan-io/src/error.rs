//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while exporting a captured room
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Room is empty, nothing to export")]
    EmptyRoom,

    #[error("Geometry error: {0}")]
    Geometry(#[from] roomscan_core::Error),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
