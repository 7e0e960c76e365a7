//! Top-level capture controller

use crate::chrome::ChromeController;
use crate::config::CaptureConfig;
use crate::error::Result;
use crate::event::{CaptureEvent, ChannelDelegate};
use crate::session::CaptureSession;
use roomscan_core::CapturedRoom;
use roomscan_geometry::{
    build_nodes, MaterialFill, SceneGraph, CUTOUT_THICKNESS, WALL_THICKNESS,
};
use roomscan_io::{default_export_path, export_room, ExportOption, ShareSheet};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

fn wall_fill() -> MaterialFill {
    MaterialFill::texture("wallTexture")
}

fn door_fill() -> MaterialFill {
    MaterialFill::texture("doorTexture")
}

fn window_fill() -> MaterialFill {
    MaterialFill::texture("windowTexture")
}

fn opening_fill() -> MaterialFill {
    MaterialFill::translucent(0.0, 0.0, 1.0, 0.5)
}

/// Wires a capture session to the scene graph, chrome and export flow
///
/// Owns the single "last final result" of the current session. Events are
/// drained on the caller's thread after `start_session`/`stop_session`; the
/// session's delegate only forwards them onto the internal channel.
pub struct RoomCaptureController<S: CaptureSession, Sh: ShareSheet> {
    session: S,
    share: Sh,
    scene: SceneGraph,
    chrome: ChromeController,
    events: Receiver<CaptureEvent>,
    final_room: Option<CapturedRoom>,
    export_path: PathBuf,
    export_option: ExportOption,
}

impl<S: CaptureSession, Sh: ShareSheet> RoomCaptureController<S, Sh> {
    /// Create a controller and register its delegate with the session
    pub fn new(mut session: S, share: Sh) -> Self {
        let (tx, rx) = channel();
        session.set_delegate(Box::new(ChannelDelegate::new(tx)));
        Self {
            session,
            share,
            scene: SceneGraph::new(),
            chrome: ChromeController::new(),
            events: rx,
            final_room: None,
            export_path: default_export_path(),
            export_option: ExportOption::Parametric,
        }
    }

    /// Apply a session configuration before starting
    pub fn configure(&mut self, config: CaptureConfig) {
        self.session.configure(config);
    }

    /// Override the export destination stem
    pub fn set_export_path(&mut self, path: PathBuf) {
        self.export_path = path;
    }

    /// Override the export format selection
    pub fn set_export_option(&mut self, option: ExportOption) {
        self.export_option = option;
    }

    /// Start a scanning session
    ///
    /// Clears any boxes left from a previous capture so re-running a session
    /// does not accumulate stale geometry.
    pub fn start_session(&mut self) -> Result<()> {
        self.scene.clear();
        self.final_room = None;
        self.chrome.begin_scanning();
        self.session.start()?;
        self.pump()
    }

    /// Stop scanning and take delivery of the final result
    pub fn stop_session(&mut self) -> Result<()> {
        self.session.stop()?;
        self.chrome.finish_scanning();
        self.pump()
    }

    /// Advance chrome animations by `dt` time units
    pub fn tick(&mut self, dt: f32) {
        self.chrome.tick(dt);
    }

    /// Export the last final result and hand it to the share sheet
    ///
    /// Without a finished capture this is a no-op: nothing is written and
    /// the share sheet is not invoked. Write and share failures propagate to
    /// the caller instead of being swallowed.
    pub fn export(&mut self) -> Result<Option<Vec<PathBuf>>> {
        let Some(room) = &self.final_room else {
            log::warn!("export requested without a finished capture");
            return Ok(None);
        };
        let files = export_room(room, &self.export_path, self.export_option)?;
        self.share.share(&files)?;
        Ok(Some(files))
    }

    /// Drain pending session events on the caller's thread
    pub fn pump(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: CaptureEvent) -> Result<()> {
        match event {
            CaptureEvent::Provisional { snapshot, error } => {
                if let Some(error) = error {
                    log::warn!("capture session reported a non-fatal error: {error}");
                }
                // provisional estimates are accepted but never displayed
                log::debug!(
                    "provisional estimate with {} surfaces (complete: {})",
                    snapshot.surface_count,
                    snapshot.complete
                );
                Ok(())
            }
            CaptureEvent::Final { room, error } => {
                if let Some(error) = error {
                    log::warn!("final result carried a non-fatal error: {error}");
                }
                self.present_room(room)
            }
        }
    }

    fn present_room(&mut self, room: CapturedRoom) -> Result<()> {
        for object in &room.objects {
            let position = object.pose.translation();
            log::info!(
                "object: id: {}, category: {}, position: ({:.3}, {:.3}, {:.3}), dimensions: {:.3}x{:.3}x{:.3}",
                object.id,
                object.category.label(),
                position.x,
                position.y,
                position.z,
                object.dimensions.x,
                object.dimensions.y,
                object.dimensions.z,
            );
        }

        let walls = build_nodes(&room.walls, WALL_THICKNESS, &wall_fill())?;
        self.scene.attach(walls);
        let doors = build_nodes(&room.doors, CUTOUT_THICKNESS, &door_fill())?;
        self.scene.attach(doors);
        let windows = build_nodes(&room.windows, CUTOUT_THICKNESS, &window_fill())?;
        self.scene.attach(windows);
        let openings = build_nodes(&room.openings, CUTOUT_THICKNESS, &opening_fill())?;
        self.scene.attach(openings);

        self.final_room = Some(room);
        Ok(())
    }

    /// The scene holding the confirmation boxes
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// The chrome state machine
    pub fn chrome(&self) -> &ChromeController {
        &self.chrome
    }

    /// The last final result, if a capture has finished
    pub fn final_room(&self) -> Option<&CapturedRoom> {
        self.final_room.as_ref()
    }

    /// The injected share affordance
    pub fn share_sheet(&self) -> &Sh {
        &self.share
    }
}
