//! The captured room snapshot

use crate::object::CapturedObject;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};

/// A finished capture result
///
/// Surfaces are grouped per category in the order the pipeline reports them.
/// A room is an immutable snapshot once delivered: a new capture replaces it
/// wholesale, nothing mutates it in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapturedRoom {
    pub walls: Vec<Surface>,
    pub doors: Vec<Surface>,
    pub windows: Vec<Surface>,
    pub openings: Vec<Surface>,
    pub objects: Vec<CapturedObject>,
}

impl CapturedRoom {
    /// Create an empty room
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of surfaces across all categories
    pub fn surface_count(&self) -> usize {
        self.walls.len() + self.doors.len() + self.windows.len() + self.openings.len()
    }

    /// Check whether the room contains no surfaces and no objects
    pub fn is_empty(&self) -> bool {
        self.surface_count() == 0 && self.objects.is_empty()
    }

    /// Iterate surfaces in presentation order: walls, doors, windows, openings
    pub fn all_surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.walls
            .iter()
            .chain(self.doors.iter())
            .chain(self.windows.iter())
            .chain(self.openings.iter())
    }
}

/// A provisional in-progress room estimate
///
/// Handed to the presentation gate while scanning is still running. Nothing
/// downstream displays it, so only coarse progress information is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Surfaces detected so far
    pub surface_count: usize,
    /// Whether the pipeline considers the estimate complete enough to present
    pub complete: bool,
}
