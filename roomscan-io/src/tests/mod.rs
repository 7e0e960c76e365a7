use crate::{export_room, ExportError, ExportOption, ParametricWriter};
use approx::assert_relative_eq;
use roomscan_core::{
    CapturedObject, CapturedRoom, Confidence, ObjectCategory, Pose, Surface, SurfaceCategory,
    Vector2, Vector3,
};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

fn surface(category: SurfaceCategory, width: f32, height: f32) -> Surface {
    Surface::new(
        category,
        Vector2::new(width, height),
        Pose::from_translation(Vector3::new(0.0, height / 2.0, 0.0)),
        Confidence::High,
    )
    .unwrap()
}

fn sample_room() -> CapturedRoom {
    CapturedRoom {
        walls: vec![
            surface(SurfaceCategory::Wall, 4.0, 2.5),
            surface(SurfaceCategory::Wall, 3.0, 2.5),
        ],
        doors: vec![surface(SurfaceCategory::Door, 0.9, 2.1)],
        windows: vec![],
        openings: vec![surface(SurfaceCategory::Opening, 1.4, 2.2)],
        objects: vec![CapturedObject::with_id(
            Uuid::nil(),
            ObjectCategory::Table,
            Vector3::new(1.6, 0.75, 0.9),
            Pose::from_translation(Vector3::new(1.0, 0.375, 1.0)),
            Confidence::Medium,
        )],
    }
}

fn temp_destination(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn parametric_export_round_trips() {
    let destination = temp_destination("roomscan_test_parametric");
    let room = sample_room();

    let written = export_room(&room, &destination, ExportOption::Parametric).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].extension().and_then(|e| e.to_str()), Some("json"));

    let loaded = ParametricWriter::read_room(&written[0]).unwrap();
    assert_eq!(loaded.walls.len(), room.walls.len());
    assert_eq!(loaded.doors.len(), room.doors.len());
    assert_eq!(loaded.openings.len(), room.openings.len());
    assert_eq!(loaded.objects.len(), 1);
    assert_eq!(loaded.objects[0].id, Uuid::nil());
    assert_eq!(loaded.objects[0].category, ObjectCategory::Table);
    assert_relative_eq!(loaded.walls[0].width(), 4.0);

    let _ = fs::remove_file(&written[0]);
}

#[test]
fn obj_export_tessellates_every_surface() {
    let destination = temp_destination("roomscan_test_mesh");
    let room = sample_room();

    let written = export_room(&room, &destination, ExportOption::Mesh).unwrap();
    assert_eq!(written.len(), 1);

    let contents = fs::read_to_string(&written[0]).unwrap();
    let vertices = contents.lines().filter(|l| l.starts_with("v ")).count();
    let faces = contents.lines().filter(|l| l.starts_with("f ")).count();
    let groups: Vec<_> = contents
        .lines()
        .filter(|l| l.starts_with("g "))
        .collect();

    // 4 surfaces, 8 vertices and 12 triangles per box
    assert_eq!(vertices, 4 * 8);
    assert_eq!(faces, 4 * 12);
    // empty categories are skipped
    assert_eq!(groups, vec!["g walls", "g doors", "g openings"]);

    let _ = fs::remove_file(&written[0]);
}

#[test]
fn export_all_writes_both_files() {
    let destination = temp_destination("roomscan_test_all");
    let written = export_room(&sample_room(), &destination, ExportOption::All).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].exists());
    assert!(written[1].exists());
    for path in &written {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn empty_room_is_an_error_and_writes_nothing() {
    let destination = temp_destination("roomscan_test_empty");
    let result = export_room(&CapturedRoom::new(), &destination, ExportOption::Parametric);
    assert!(matches!(result, Err(ExportError::EmptyRoom)));
    assert!(!destination.with_extension("json").exists());
}

#[test]
fn repeated_export_overwrites_the_same_destination() {
    let destination = temp_destination("roomscan_test_overwrite");
    let room = sample_room();

    let first = export_room(&room, &destination, ExportOption::Parametric).unwrap();
    let second = export_room(&room, &destination, ExportOption::Parametric).unwrap();
    assert_eq!(first, second);
    assert!(first[0].exists());

    let _ = fs::remove_file(&first[0]);
}
