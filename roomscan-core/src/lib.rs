//! Core data model for roomscan
//!
//! This crate provides the types a capture session delivers: planar surfaces
//! (walls, doors, windows, openings), recognized objects, and the captured
//! room snapshot that bundles them together.

pub mod error;
pub mod object;
pub mod pose;
pub mod room;
pub mod surface;

pub use error::*;
pub use object::*;
pub use pose::*;
pub use room::*;
pub use surface::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector2, Vector3};

/// Common result type for roomscan operations
pub type Result<T> = std::result::Result<T, Error>;
