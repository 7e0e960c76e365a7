//! Typed capture events and the channel-backed delegate

use crate::session::CaptureDelegate;
use roomscan_core::{CapturedRoom, RoomSnapshot};
use std::sync::mpsc::Sender;

/// A typed event emitted by a capture session
///
/// The two delegate callbacks of the session contract, in event form, so a
/// consumer can drain them on whatever thread it owns.
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// An in-progress estimate offered for presentation
    Provisional {
        snapshot: RoomSnapshot,
        error: Option<String>,
    },
    /// The fully processed final result
    Final {
        room: CapturedRoom,
        error: Option<String>,
    },
}

/// Delegate that forwards callbacks as [`CaptureEvent`]s on an mpsc channel
///
/// The presentation gate accepts every provisional frame, matching the
/// observed behavior of the capture pipeline's host.
pub struct ChannelDelegate {
    tx: Sender<CaptureEvent>,
}

impl ChannelDelegate {
    pub fn new(tx: Sender<CaptureEvent>) -> Self {
        Self { tx }
    }
}

impl CaptureDelegate for ChannelDelegate {
    fn should_present(&mut self, snapshot: &RoomSnapshot, error: Option<&str>) -> bool {
        let _ = self.tx.send(CaptureEvent::Provisional {
            snapshot: *snapshot,
            error: error.map(str::to_owned),
        });
        true
    }

    fn room_ready(&mut self, room: CapturedRoom, error: Option<String>) {
        let _ = self.tx.send(CaptureEvent::Final { room, error });
    }
}
