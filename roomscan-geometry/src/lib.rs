//! Box geometry and scene graph for roomscan
//!
//! This crate turns the planar surfaces of a captured room into box-shaped
//! render nodes and holds them in a simple append-only scene graph for
//! visual confirmation.

pub mod builder;
pub mod material;
pub mod mesh;
pub mod node;
pub mod scene;

pub use builder::*;
pub use material::*;
pub use mesh::*;
pub use node::*;
pub use scene::*;

pub use roomscan_core::Result;
