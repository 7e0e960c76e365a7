//! Append-only scene graph for confirmation rendering

use crate::node::RenderNode;
use serde::{Deserialize, Serialize};

/// A scene graph with a single root container
///
/// Nodes are appended in insertion order; there is no deduplication and no
/// per-node removal. Attaching the same batch twice doubles the child count.
/// `clear` exists so a controller can reset the scene before a new session
/// rather than accumulating boxes across captures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneGraph {
    children: Vec<RenderNode>,
}

impl SceneGraph {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of nodes as children of the root
    pub fn attach(&mut self, nodes: impl IntoIterator<Item = RenderNode>) {
        self.children.extend(nodes);
    }

    /// Number of attached nodes
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Attached nodes in insertion order
    pub fn nodes(&self) -> &[RenderNode] {
        &self.children
    }

    /// Check if the scene has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Remove every child from the root
    pub fn clear(&mut self) {
        self.children.clear();
    }
}
