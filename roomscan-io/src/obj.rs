//! Wavefront OBJ mesh export
//!
//! Surfaces are extruded into boxes with the standard per-category thickness
//! and written as one `g` group per category, with per-face normals and
//! 1-based indices.

use crate::error::Result;
use crate::RoomWriter;
use roomscan_geometry::{build_nodes, MaterialFill, TriangleMesh, CUTOUT_THICKNESS, WALL_THICKNESS};
use roomscan_core::{CapturedRoom, Surface};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a captured room as a tessellated OBJ mesh
pub struct ObjRoomWriter;

impl ObjRoomWriter {
    fn write_group<W: Write>(
        writer: &mut W,
        name: &str,
        surfaces: &[Surface],
        depth: f32,
        vertex_base: &mut usize,
        normal_base: &mut usize,
    ) -> Result<()> {
        if surfaces.is_empty() {
            return Ok(());
        }
        // OBJ carries no material state here, so the fill is a placeholder
        let fill = MaterialFill::opaque(1.0, 1.0, 1.0);
        let nodes = build_nodes(surfaces, depth, &fill)?;

        let mut group = TriangleMesh::new();
        for node in &nodes {
            group.merge(&node.tessellate());
        }
        let normals = group.calculate_face_normals();

        writeln!(writer, "g {name}")?;
        for v in &group.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for n in &normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for (i, face) in group.faces.iter().enumerate() {
            let n = *normal_base + i + 1;
            writeln!(
                writer,
                "f {}//{n} {}//{n} {}//{n}",
                *vertex_base + face[0] + 1,
                *vertex_base + face[1] + 1,
                *vertex_base + face[2] + 1,
            )?;
        }
        *vertex_base += group.vertex_count();
        *normal_base += normals.len();
        Ok(())
    }
}

impl RoomWriter for ObjRoomWriter {
    fn write_room(&self, room: &CapturedRoom, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# roomscan mesh export")?;

        let mut vertex_base = 0;
        let mut normal_base = 0;
        Self::write_group(
            &mut writer,
            "walls",
            &room.walls,
            WALL_THICKNESS,
            &mut vertex_base,
            &mut normal_base,
        )?;
        Self::write_group(
            &mut writer,
            "doors",
            &room.doors,
            CUTOUT_THICKNESS,
            &mut vertex_base,
            &mut normal_base,
        )?;
        Self::write_group(
            &mut writer,
            "windows",
            &room.windows,
            CUTOUT_THICKNESS,
            &mut vertex_base,
            &mut normal_base,
        )?;
        Self::write_group(
            &mut writer,
            "openings",
            &room.openings,
            CUTOUT_THICKNESS,
            &mut vertex_base,
            &mut normal_base,
        )?;
        writer.flush()?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "obj"
    }
}
