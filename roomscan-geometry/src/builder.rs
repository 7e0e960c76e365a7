//! Surface-to-box geometry builder

use crate::material::MaterialFill;
use crate::node::RenderNode;
use roomscan_core::{Error, Result, Surface};

/// Extrusion thickness for wall boxes, in meters
pub const WALL_THICKNESS: f32 = 0.10;

/// Extrusion thickness for door, window and opening boxes, in meters
pub const CUTOUT_THICKNESS: f32 = 0.11;

/// Build one box node per surface, preserving input order
///
/// Pure transform: each node's width and height equal the surface's extent,
/// its pose equals the surface's pose, and all nodes in the batch share the
/// given extrusion depth and fill. Surfaces are validated at construction, so
/// only the depth is checked here.
pub fn build_nodes(
    surfaces: &[Surface],
    depth: f32,
    fill: &MaterialFill,
) -> Result<Vec<RenderNode>> {
    if depth.is_nan() || depth < 0.0 {
        return Err(Error::InvalidData(format!(
            "invalid extrusion depth: {depth}"
        )));
    }
    Ok(surfaces
        .iter()
        .map(|surface| {
            RenderNode::new(
                surface.width(),
                surface.height(),
                depth,
                fill.clone(),
                surface.pose,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomscan_core::{Confidence, Pose, SurfaceCategory, Vector2, Vector3};

    fn surfaces() -> Vec<Surface> {
        (0..4)
            .map(|i| {
                Surface::new(
                    SurfaceCategory::Wall,
                    Vector2::new(1.0 + i as f32, 2.0 + i as f32),
                    Pose::from_translation(Vector3::new(i as f32, 0.0, 0.0)),
                    Confidence::High,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn one_node_per_surface_in_order() {
        let surfaces = surfaces();
        let fill = MaterialFill::texture("wallTexture");
        let nodes = build_nodes(&surfaces, WALL_THICKNESS, &fill).unwrap();

        assert_eq!(nodes.len(), surfaces.len());
        for (node, surface) in nodes.iter().zip(surfaces.iter()) {
            assert_eq!(node.width, surface.width());
            assert_eq!(node.height, surface.height());
            assert_eq!(node.depth, WALL_THICKNESS);
            assert_eq!(node.pose, surface.pose);
            assert_eq!(node.fill, fill);
        }
    }

    #[test]
    fn empty_input_builds_no_nodes() {
        let nodes = build_nodes(&[], CUTOUT_THICKNESS, &MaterialFill::opaque(0.0, 0.0, 1.0));
        assert!(nodes.unwrap().is_empty());
    }

    #[test]
    fn invalid_depth_is_rejected() {
        let surfaces = surfaces();
        let fill = MaterialFill::texture("wallTexture");
        assert!(build_nodes(&surfaces, f32::NAN, &fill).is_err());
        assert!(build_nodes(&surfaces, -0.1, &fill).is_err());
    }
}
