//! Scene nodes displaying text
//!
//! A [`TextNode`] wraps a rendering surface produced by an external
//! [`TextRasterizer`]. The node keeps a small transform cache so the render
//! pipeline can skip nodes whose position did not change during a tick, and
//! it only forwards text or style changes to the surface when the value
//! actually differs.
//!
//! [`Scene`] owns nodes and groups in slot maps and drives the per-frame
//! update pass.

pub mod style;
pub mod surface;
pub mod headless;
pub mod group;
pub mod text_node;
pub mod scene_manager;

#[cfg(test)]
mod tests;

pub use style::{TextAlign, TextStyle};
pub use surface::{SurfaceBounds, TextRasterizer, TextSurface};
pub use headless::{HeadlessRasterizer, HeadlessSurface};
pub use group::{Group, GroupError, GroupMembership, GroupStorage};
pub use text_node::{TextNode, TextNodeDesc, TransformCache};
pub use scene_manager::Scene;

use thiserror::Error;

slotmap::new_key_type! {
    /// Handle to a node stored in a [`Scene`]
    pub struct NodeId;

    /// Handle to a group stored in a [`GroupStorage`]
    pub struct GroupId;
}

/// Scene errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No node is stored under this handle
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Group membership operation failed
    #[error("Group error: {0}")]
    Group(#[from] GroupError),
}
