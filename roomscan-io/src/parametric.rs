//! Parametric JSON export
//!
//! The parametric form preserves the captured room as structured records
//! (category, extent, pose, confidence per surface; identifier, category and
//! placement per object) instead of tessellated geometry, so a consumer can
//! rebuild exact primitives from it.

use crate::error::Result;
use crate::RoomWriter;
use roomscan_core::CapturedRoom;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Version tag written into every parametric document
pub const PARAMETRIC_FORMAT_VERSION: u32 = 1;

/// The on-disk parametric document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametricDocument {
    pub format_version: u32,
    pub room: CapturedRoom,
}

/// Writes a captured room as a parametric JSON document
pub struct ParametricWriter;

impl ParametricWriter {
    /// Read a parametric document back into a room
    pub fn read_room<P: AsRef<Path>>(path: P) -> Result<CapturedRoom> {
        let file = File::open(path.as_ref())?;
        let document: ParametricDocument = serde_json::from_reader(file)?;
        Ok(document.room)
    }
}

impl RoomWriter for ParametricWriter {
    fn write_room(&self, room: &CapturedRoom, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let document = ParametricDocument {
            format_version: PARAMETRIC_FORMAT_VERSION,
            room: room.clone(),
        };
        serde_json::to_writer_pretty(BufWriter::new(file), &document)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "parametric-json"
    }
}
