//! Export dispatch and the fixed destination path

use crate::error::{ExportError, Result};
use crate::obj::ObjRoomWriter;
use crate::parametric::ParametricWriter;
use crate::RoomWriter;
use roomscan_core::CapturedRoom;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which interchange form to write
///
/// `Parametric` is the default selection; `All` writes both files next to
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportOption {
    Parametric,
    Mesh,
    All,
}

/// The well-known temporary destination stem used by repeated exports
///
/// The same filename is reused every export, so repeated exports overwrite
/// rather than version.
pub fn default_export_path() -> PathBuf {
    std::env::temp_dir().join("Room")
}

/// Export a room to files derived from the destination stem
///
/// The destination's extension is replaced per format (`.json` for the
/// parametric document, `.obj` for the mesh). Returns the written paths in
/// write order. An empty room is an error rather than a silent no-op.
pub fn export_room(
    room: &CapturedRoom,
    destination: &Path,
    option: ExportOption,
) -> Result<Vec<PathBuf>> {
    if room.is_empty() {
        return Err(ExportError::EmptyRoom);
    }

    let mut written = Vec::new();
    if matches!(option, ExportOption::Parametric | ExportOption::All) {
        let path = destination.with_extension("json");
        ParametricWriter.write_room(room, &path)?;
        log::debug!("wrote parametric export to {}", path.display());
        written.push(path);
    }
    if matches!(option, ExportOption::Mesh | ExportOption::All) {
        let path = destination.with_extension("obj");
        ObjRoomWriter.write_room(room, &path)?;
        log::debug!("wrote mesh export to {}", path.display());
        written.push(path);
    }
    Ok(written)
}
