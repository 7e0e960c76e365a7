//! Recognized furniture-like objects

use crate::pose::Pose;
use crate::surface::Confidence;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The furniture class an object was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    Storage,
    Refrigerator,
    Stove,
    Bed,
    Sink,
    WasherDryer,
    Toilet,
    Bathtub,
    Oven,
    Dishwasher,
    Table,
    Sofa,
    Chair,
    Fireplace,
    Television,
    Stairs,
}

impl ObjectCategory {
    /// Display label for logs and export records
    pub fn label(&self) -> &'static str {
        match self {
            ObjectCategory::Storage => "storage",
            ObjectCategory::Refrigerator => "refrigerator",
            ObjectCategory::Stove => "stove",
            ObjectCategory::Bed => "bed",
            ObjectCategory::Sink => "sink",
            ObjectCategory::WasherDryer => "washer/dryer",
            ObjectCategory::Toilet => "toilet",
            ObjectCategory::Bathtub => "bathtub",
            ObjectCategory::Oven => "oven",
            ObjectCategory::Dishwasher => "dishwasher",
            ObjectCategory::Table => "table",
            ObjectCategory::Sofa => "sofa",
            ObjectCategory::Chair => "chair",
            ObjectCategory::Fireplace => "fireplace",
            ObjectCategory::Television => "television",
            ObjectCategory::Stairs => "stairs",
        }
    }
}

/// A recognized item with a bounding-box extent and a pose
///
/// Objects are reported for inventory purposes only; they are not rendered
/// as boxes the way surfaces are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapturedObject {
    pub id: Uuid,
    pub category: ObjectCategory,
    pub dimensions: Vector3<f32>,
    pub pose: Pose,
    pub confidence: Confidence,
}

impl CapturedObject {
    /// Create an object with a freshly generated identifier
    pub fn new(
        category: ObjectCategory,
        dimensions: Vector3<f32>,
        pose: Pose,
        confidence: Confidence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            dimensions,
            pose,
            confidence,
        }
    }

    /// Create an object with a caller-supplied identifier
    pub fn with_id(
        id: Uuid,
        category: ObjectCategory,
        dimensions: Vector3<f32>,
        pose: Pose,
        confidence: Confidence,
    ) -> Self {
        Self {
            id,
            category,
            dimensions,
            pose,
            confidence,
        }
    }
}
