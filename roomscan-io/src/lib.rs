//! Export of captured rooms to interchange files
//!
//! This crate writes a finished [`CapturedRoom`](roomscan_core::CapturedRoom)
//! to disk as a parametric JSON description, a tessellated OBJ mesh, or both,
//! and defines the share-affordance boundary the platform layer implements.

pub mod error;
pub mod export;
pub mod obj;
pub mod parametric;
pub mod share;

pub use error::*;
pub use export::*;
pub use obj::*;
pub use parametric::*;
pub use share::*;

use roomscan_core::CapturedRoom;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Trait for writing a captured room to a file
pub trait RoomWriter: Send + Sync {
    /// Write the room to the given path
    fn write_room(&self, room: &CapturedRoom, path: &Path) -> Result<()>;

    /// Get the format name this writer handles
    fn format_name(&self) -> &'static str;
}
