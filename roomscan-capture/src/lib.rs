//! Capture session wiring for roomscan
//!
//! This crate defines the boundary contract to a room-capture session
//! (configure, start, stop, plus two delegate callbacks), the two-state
//! chrome controller that animates the scanning UI, and the top-level
//! capture controller that turns a finished room into scene geometry and
//! drives export and sharing.

pub mod chrome;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod session;

pub use chrome::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use event::*;
pub use session::*;

#[cfg(test)]
mod tests;
