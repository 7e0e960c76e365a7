use crate::{
    CaptureConfig, CaptureSession, ChromeState, RoomCaptureController, ScriptedSession,
};
use roomscan_core::{
    CapturedObject, CapturedRoom, Confidence, ObjectCategory, Pose, RoomSnapshot, Surface,
    SurfaceCategory, Vector2, Vector3,
};
use roomscan_geometry::MaterialFill;
use roomscan_io::{ExportOption, ShareSheet};
use std::fs;
use std::path::PathBuf;

#[derive(Default)]
struct RecordingShareSheet {
    invocations: Vec<Vec<PathBuf>>,
}

impl ShareSheet for RecordingShareSheet {
    fn share(&mut self, files: &[PathBuf]) -> roomscan_io::Result<()> {
        self.invocations.push(files.to_vec());
        Ok(())
    }
}

fn surface(category: SurfaceCategory, width: f32) -> Surface {
    Surface::new(
        category,
        Vector2::new(width, 2.4),
        Pose::from_translation(Vector3::new(width, 1.2, 0.0)),
        Confidence::High,
    )
    .unwrap()
}

fn sample_room() -> CapturedRoom {
    CapturedRoom {
        walls: vec![
            surface(SurfaceCategory::Wall, 4.0),
            surface(SurfaceCategory::Wall, 3.0),
            surface(SurfaceCategory::Wall, 4.0),
        ],
        doors: vec![
            surface(SurfaceCategory::Door, 0.9),
            surface(SurfaceCategory::Door, 0.8),
        ],
        windows: vec![],
        openings: vec![surface(SurfaceCategory::Opening, 1.5)],
        objects: vec![CapturedObject::new(
            ObjectCategory::Sofa,
            Vector3::new(2.0, 0.8, 0.9),
            Pose::from_translation(Vector3::new(1.0, 0.4, 1.5)),
            Confidence::High,
        )],
    }
}

fn scripted(room: CapturedRoom) -> ScriptedSession {
    let mut session = ScriptedSession::with_final(room);
    session.push_provisional(
        RoomSnapshot {
            surface_count: 2,
            complete: false,
        },
        None,
    );
    session
}

fn temp_destination(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn a_full_session_builds_one_box_per_surface() {
    let mut controller = RoomCaptureController::new(
        scripted(sample_room()),
        RecordingShareSheet::default(),
    );
    controller.configure(CaptureConfig::default());

    controller.start_session().unwrap();
    assert!(controller.scene().is_empty());
    assert_eq!(controller.chrome().state(), ChromeState::Scanning);

    controller.stop_session().unwrap();
    assert_eq!(controller.chrome().state(), ChromeState::Done);

    // 3 walls + 2 doors + 1 opening, attached in category batches
    let scene = controller.scene();
    assert_eq!(scene.node_count(), 6);
    assert_eq!(scene.nodes()[0].fill, MaterialFill::texture("wallTexture"));
    assert_eq!(scene.nodes()[3].fill, MaterialFill::texture("doorTexture"));
    assert_eq!(
        scene.nodes()[5].fill,
        MaterialFill::translucent(0.0, 0.0, 1.0, 0.5)
    );
    assert_eq!(scene.nodes()[0].width, 4.0);

    let room = controller.final_room().expect("final result stored");
    assert_eq!(room.objects.len(), 1);
}

#[test]
fn session_start_and_stop_are_idempotent() {
    let mut session = scripted(sample_room());
    assert!(!session.is_running());
    session.start().unwrap();
    session.start().unwrap();
    assert!(session.is_running());
    session.stop().unwrap();
    session.stop().unwrap();
    assert!(!session.is_running());
}

#[test]
fn export_without_a_finished_capture_is_a_no_op() {
    let destination = temp_destination("roomscan_ctrl_noop");
    let mut controller = RoomCaptureController::new(
        ScriptedSession::new(),
        RecordingShareSheet::default(),
    );
    controller.set_export_path(destination.clone());

    let result = controller.export().unwrap();
    assert!(result.is_none());
    assert!(controller.share_sheet().invocations.is_empty());
    assert!(!destination.with_extension("json").exists());
}

#[test]
fn export_writes_the_fixed_path_and_shares_once() {
    let destination = temp_destination("roomscan_ctrl_export");
    let mut controller = RoomCaptureController::new(
        scripted(sample_room()),
        RecordingShareSheet::default(),
    );
    controller.set_export_path(destination.clone());
    controller.set_export_option(ExportOption::Parametric);

    controller.start_session().unwrap();
    controller.stop_session().unwrap();

    let files = controller.export().unwrap().expect("export produced files");
    assert_eq!(files, vec![destination.with_extension("json")]);
    assert!(files[0].exists());

    let shares = &controller.share_sheet().invocations;
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0], files);

    let _ = fs::remove_file(&files[0]);
}

#[test]
fn repeated_exports_overwrite_the_destination() {
    let destination = temp_destination("roomscan_ctrl_overwrite");
    let mut controller = RoomCaptureController::new(
        scripted(sample_room()),
        RecordingShareSheet::default(),
    );
    controller.set_export_path(destination);

    controller.start_session().unwrap();
    controller.stop_session().unwrap();

    let first = controller.export().unwrap().unwrap();
    let second = controller.export().unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(controller.share_sheet().invocations.len(), 2);

    let _ = fs::remove_file(&first[0]);
}

#[test]
fn restarting_a_session_clears_the_previous_scene() {
    let mut controller = RoomCaptureController::new(
        scripted(sample_room()),
        RecordingShareSheet::default(),
    );
    controller.start_session().unwrap();
    controller.stop_session().unwrap();
    assert_eq!(controller.scene().node_count(), 6);

    // the scripted session has nothing further to deliver, but the stale
    // boxes and result must still be gone
    controller.start_session().unwrap();
    assert!(controller.scene().is_empty());
    assert!(controller.final_room().is_none());
}

#[test]
fn chrome_settles_through_the_controller_tick() {
    let mut controller = RoomCaptureController::new(
        scripted(sample_room()),
        RecordingShareSheet::default(),
    );
    controller.start_session().unwrap();
    for _ in 0..12 {
        controller.tick(0.1);
    }
    assert!(controller.chrome().export_hidden());

    controller.stop_session().unwrap();
    assert!(!controller.chrome().export_hidden());
    for _ in 0..12 {
        controller.tick(0.1);
    }
    assert!(controller.chrome().is_settled());
    assert!((controller.chrome().export_alpha() - 1.0).abs() < 1e-6);
}
