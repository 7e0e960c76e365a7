//! The capture session boundary contract

use crate::config::CaptureConfig;
use crate::error::Result;
use roomscan_core::{CapturedRoom, RoomSnapshot};

/// The two inbound callbacks a capture session invokes
///
/// Callbacks are delivered synchronously on the thread that drives the
/// session; a consumer that renders elsewhere owns the marshaling.
pub trait CaptureDelegate: Send {
    /// Decide whether an in-progress estimate should be presented
    ///
    /// The default accepts every frame, which is the behavior capture hosts
    /// are observed to use.
    fn should_present(&mut self, snapshot: &RoomSnapshot, error: Option<&str>) -> bool {
        let _ = (snapshot, error);
        true
    }

    /// Receive the fully processed final result
    fn room_ready(&mut self, room: CapturedRoom, error: Option<String>);
}

/// A room-capture session: opaque perception pipeline behind start/stop
///
/// One session is active at a time. `start` while running and `stop` while
/// stopped are idempotent no-ops.
pub trait CaptureSession {
    /// Apply a configuration; takes effect on the next `start`
    fn configure(&mut self, config: CaptureConfig);

    /// Register the delegate that receives session callbacks
    fn set_delegate(&mut self, delegate: Box<dyn CaptureDelegate>);

    /// Begin scanning
    fn start(&mut self) -> Result<()>;

    /// Stop scanning and post-process the final result
    fn stop(&mut self) -> Result<()>;

    /// Whether the session is currently scanning
    fn is_running(&self) -> bool;
}

/// A deterministic in-memory session that replays a scripted capture
///
/// Provisional estimates are delivered while "scanning" (on `start`), gated
/// through the delegate's presentation decision; the final room is delivered
/// on `stop`. Used by tests and demos in place of a hardware pipeline.
pub struct ScriptedSession {
    config: CaptureConfig,
    delegate: Option<Box<dyn CaptureDelegate>>,
    running: bool,
    provisionals: Vec<(RoomSnapshot, Option<String>)>,
    final_result: Option<(CapturedRoom, Option<String>)>,
}

impl ScriptedSession {
    /// Create a session with nothing scripted
    pub fn new() -> Self {
        Self {
            config: CaptureConfig::default(),
            delegate: None,
            running: false,
            provisionals: Vec::new(),
            final_result: None,
        }
    }

    /// Create a session that delivers the given room on stop
    pub fn with_final(room: CapturedRoom) -> Self {
        let mut session = Self::new();
        session.final_result = Some((room, None));
        session
    }

    /// Queue a provisional estimate to stream while scanning
    pub fn push_provisional(&mut self, snapshot: RoomSnapshot, error: Option<String>) {
        self.provisionals.push((snapshot, error));
    }

    /// Set the final result (and optional non-fatal error) delivered on stop
    pub fn set_final(&mut self, room: CapturedRoom, error: Option<String>) {
        self.final_result = Some((room, error));
    }
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSession for ScriptedSession {
    fn configure(&mut self, config: CaptureConfig) {
        self.config = config;
    }

    fn set_delegate(&mut self, delegate: Box<dyn CaptureDelegate>) {
        self.delegate = Some(delegate);
    }

    fn start(&mut self) -> Result<()> {
        if self.running {
            return Ok(());
        }
        self.running = true;

        if let Some(delegate) = self.delegate.as_mut() {
            if self.config.provisional_updates {
                for (snapshot, error) in self.provisionals.drain(..) {
                    let presented = delegate.should_present(&snapshot, error.as_deref());
                    if !presented {
                        log::debug!("provisional estimate rejected by presentation gate");
                    }
                }
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if !self.running {
            return Ok(());
        }
        self.running = false;

        if let Some(delegate) = self.delegate.as_mut() {
            if let Some((room, error)) = self.final_result.take() {
                delegate.room_ready(room, error);
            }
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
