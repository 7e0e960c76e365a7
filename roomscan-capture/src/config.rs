//! Capture session configuration

use serde::{Deserialize, Serialize};

/// The configuration value handed to a capture session before it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Whether the pipeline should recognize furniture-like objects
    pub enable_object_detection: bool,
    /// Whether provisional estimates are streamed while scanning
    pub provisional_updates: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enable_object_detection: true,
            provisional_updates: true,
        }
    }
}
