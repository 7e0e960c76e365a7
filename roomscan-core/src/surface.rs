//! Planar surface records delivered by a capture session

use crate::error::{Error, Result};
use crate::pose::Pose;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// The structural element a surface was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceCategory {
    Wall,
    Door,
    Window,
    Opening,
}

impl SurfaceCategory {
    /// Display label for logs and export records
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceCategory::Wall => "wall",
            SurfaceCategory::Door => "door",
            SurfaceCategory::Window => "window",
            SurfaceCategory::Opening => "opening",
        }
    }
}

/// Detection confidence reported by the capture pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A planar detected element: a 2D extent plus a pose placing it in the room
///
/// The extent is width and height in meters; the pose carries position and
/// rotation in room space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub category: SurfaceCategory,
    pub dimensions: Vector2<f32>,
    pub pose: Pose,
    pub confidence: Confidence,
}

impl Surface {
    /// Create a surface, clamping negative extent components to zero
    ///
    /// NaN extents are rejected as invalid data; negative extents are clamped
    /// rather than rejected so a slightly noisy pipeline report still yields
    /// a usable (degenerate) surface.
    pub fn new(
        category: SurfaceCategory,
        dimensions: Vector2<f32>,
        pose: Pose,
        confidence: Confidence,
    ) -> Result<Self> {
        if dimensions.x.is_nan() || dimensions.y.is_nan() {
            return Err(Error::InvalidData(format!(
                "{} surface has NaN dimensions",
                category.label()
            )));
        }
        let dimensions = Vector2::new(dimensions.x.max(0.0), dimensions.y.max(0.0));
        Ok(Self {
            category,
            dimensions,
            pose,
            confidence,
        })
    }

    /// Surface width in meters
    pub fn width(&self) -> f32 {
        self.dimensions.x
    }

    /// Surface height in meters
    pub fn height(&self) -> f32 {
        self.dimensions.y
    }
}
