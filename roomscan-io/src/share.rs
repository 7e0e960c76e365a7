//! Platform share affordance boundary

use crate::error::Result;
use std::path::PathBuf;

/// The platform file-sharing affordance
///
/// Accepts a list of file URLs and opens a modal chooser; no return value is
/// consumed beyond the error. Injected so capture logic stays testable
/// without a platform dependency.
pub trait ShareSheet {
    fn share(&mut self, files: &[PathBuf]) -> Result<()>;
}

/// Share affordance for headless environments: logs the request and succeeds
#[derive(Debug, Default)]
pub struct LogShareSheet;

impl ShareSheet for LogShareSheet {
    fn share(&mut self, files: &[PathBuf]) -> Result<()> {
        for file in files {
            log::info!("share requested for {}", file.display());
        }
        Ok(())
    }
}
