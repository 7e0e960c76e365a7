//! Visual fills for render nodes

use serde::{Deserialize, Serialize};

/// An RGBA color with components in `[0, 1]`
pub type Rgba = [f32; 4];

/// The visual fill applied to a render node
///
/// Surfaces are drawn either with a named texture (walls, doors, windows) or
/// a flat, possibly translucent color (openings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaterialFill {
    /// Flat color with transparency
    Color(Rgba),
    /// Texture referenced by asset name
    Texture(String),
}

impl MaterialFill {
    /// A fully opaque color fill
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        MaterialFill::Color([r, g, b, 1.0])
    }

    /// A color fill with explicit alpha
    pub fn translucent(r: f32, g: f32, b: f32, a: f32) -> Self {
        MaterialFill::Color([r, g, b, a])
    }

    /// A texture fill referencing a named asset
    pub fn texture(name: impl Into<String>) -> Self {
        MaterialFill::Texture(name.into())
    }
}
