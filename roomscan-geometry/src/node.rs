//! Box-shaped render nodes

use crate::material::MaterialFill;
use crate::mesh::TriangleMesh;
use roomscan_core::{Point3, Pose};
use serde::{Deserialize, Serialize};

/// Triangle indices for a unit box, counter-clockwise seen from outside
const BOX_FACES: [[usize; 3]; 12] = [
    [0, 2, 1],
    [0, 3, 2], // -z
    [4, 5, 6],
    [4, 6, 7], // +z
    [0, 4, 7],
    [0, 7, 3], // -x
    [1, 2, 6],
    [1, 6, 5], // +x
    [0, 1, 5],
    [0, 5, 4], // -y
    [3, 7, 6],
    [3, 6, 2], // +y
];

/// A box-shaped visual element placed in room space
///
/// Width and height come from the originating surface; depth is the fixed
/// extrusion thickness chosen per surface category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub fill: MaterialFill,
    pub pose: Pose,
}

impl RenderNode {
    /// Create a node centered at its pose
    pub fn new(width: f32, height: f32, depth: f32, fill: MaterialFill, pose: Pose) -> Self {
        Self {
            width,
            height,
            depth,
            fill,
            pose,
        }
    }

    /// Tessellate the box into a triangle mesh in room space
    ///
    /// Produces the eight corners transformed by the node's pose and twelve
    /// triangles with outward winding.
    pub fn tessellate(&self) -> TriangleMesh {
        let (hx, hy, hz) = (self.width / 2.0, self.height / 2.0, self.depth / 2.0);
        let corners = [
            Point3::new(-hx, -hy, -hz),
            Point3::new(hx, -hy, -hz),
            Point3::new(hx, hy, -hz),
            Point3::new(-hx, hy, -hz),
            Point3::new(-hx, -hy, hz),
            Point3::new(hx, -hy, hz),
            Point3::new(hx, hy, hz),
            Point3::new(-hx, hy, hz),
        ];
        let vertices = corners
            .iter()
            .map(|c| self.pose.transform_point(c))
            .collect();
        TriangleMesh::from_vertices_and_faces(vertices, BOX_FACES.to_vec())
    }
}
