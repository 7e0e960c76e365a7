//! Error types for the roomscan data model

use thiserror::Error;

/// Main error type for roomscan operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for roomscan operations
pub type Result<T> = std::result::Result<T, Error>;
