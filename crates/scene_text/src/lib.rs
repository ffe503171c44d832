//! # Scene Text
//!
//! Text display nodes and per-object lifecycle signals for a 2D scene graph.
//!
//! ## Features
//!
//! - **Change Detection**: Text nodes flag position changes once per tick
//! - **Lazy Re-rendering**: Text and style only reach the rasterizer when they change
//! - **Lifecycle Signals**: Every node carries an event hub with optional input and animation groups
//! - **Pluggable Rendering**: Rasterization sits behind the [`scene::TextRasterizer`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_text::prelude::*;
//!
//! let mut scene = Scene::new(HeadlessRasterizer::new(), &SceneConfig::default());
//! let label = scene.add_text(TextNodeDesc::new(10.0, 20.0, "hi"));
//!
//! if let Some(node) = scene.node_mut(label) {
//!     node.position.x = 50.0;
//!     node.set_content("bye");
//! }
//! assert_eq!(scene.update(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod scene;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat, SceneConfig},
        events::{EventHub, GroupEvent, Signal, SignalError, SubscriptionId},
        foundation::math::Vec2,
        scene::{
            GroupId, HeadlessRasterizer, NodeId, Scene, SceneError, TextNode, TextNodeDesc,
            TextRasterizer, TextStyle, TextSurface,
        },
    };
}
