//! Text display node
//!
//! The node holds authoritative world coordinates in [`TextNode::position`].
//! Once per tick [`TextNode::update`] snapshots them into the
//! [`TransformCache`] and pushes them to the rendering surface only when they
//! moved, flagging the cache dirty for that tick so the render pipeline can
//! skip nodes that stayed put.

use super::{GroupId, GroupMembership, NodeId, SceneError, SurfaceBounds, TextRasterizer, TextStyle, TextSurface};
use crate::events::{EventHub, GroupEvent};
use crate::foundation::math::{deg_to_rad, rad_to_deg, Vec2};

/// Last observed transform state of a node
///
/// `dirty` means "position changed during this tick". It is cleared at the
/// start of every [`TextNode::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCache {
    /// Position changed during the current tick
    pub dirty: bool,
    /// Last observed x
    pub x: f32,
    /// Last observed y
    pub y: f32,
    /// Matrix row 0, column 0
    pub a00: f32,
    /// Matrix row 0, column 1
    pub a01: f32,
    /// Matrix row 0, column 2 (translation x)
    pub a02: f32,
    /// Matrix row 1, column 0
    pub a10: f32,
    /// Matrix row 1, column 1
    pub a11: f32,
    /// Matrix row 1, column 2 (translation y)
    pub a12: f32,
    /// Identifier of the cached transform
    pub transform_id: u32,
    /// Cached horizontal scale
    pub scale_x: f32,
    /// Cached vertical scale
    pub scale_y: f32,
}

impl TransformCache {
    /// Identity transform translated to `(x, y)`
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            dirty: false,
            x,
            y,
            a00: 1.0,
            a01: 0.0,
            a02: x,
            a10: 0.0,
            a11: 1.0,
            a12: y,
            transform_id: 1,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Construction parameters of a [`TextNode`]
///
/// Every field defaults: origin, empty text, empty style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNodeDesc {
    /// Initial x
    pub x: f32,
    /// Initial y
    pub y: f32,
    /// Initial text
    pub text: String,
    /// Initial style
    pub style: TextStyle,
}

impl TextNodeDesc {
    /// Text at a position with the empty style
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Builder pattern: Set style
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// Positionable, scalable scene node showing rendered text
#[derive(Debug)]
pub struct TextNode<S: TextSurface> {
    id: NodeId,
    /// World position, owned by gameplay code
    pub position: Vec2,
    /// Anchor within the surface (0..1 on each axis)
    pub anchor: Vec2,
    /// Render scale
    pub scale: Vec2,
    cache: TransformCache,
    text: String,
    style: TextStyle,
    exists: bool,
    alive: bool,
    group: Option<GroupId>,
    surface: Option<S>,
    events: EventHub,
}

impl<S: TextSurface> TextNode<S> {
    /// Create a node and let `rasterizer` build its surface
    ///
    /// Text and style are handed to the rasterizer unchanged.
    pub fn new<R>(id: NodeId, rasterizer: &mut R, desc: TextNodeDesc) -> Self
    where
        R: TextRasterizer<Surface = S>,
    {
        let TextNodeDesc { x, y, text, style } = desc;

        let mut surface = rasterizer.create_surface(&text, &style);
        surface.set_position(Vec2::new(x, y));

        log::debug!("Text node {id:?} created at ({x}, {y})");

        Self {
            id,
            position: Vec2::new(x, y),
            anchor: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            cache: TransformCache::at(x, y),
            text,
            style,
            exists: true,
            alive: true,
            group: None,
            surface: Some(surface),
            events: EventHub::new(id),
        }
    }

    /// Handle of this node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Whether the node takes part in updates. Cleared for good by `destroy`.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Gameplay liveness
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Group this node belongs to
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    /// Transform cache as of the last update
    pub fn cache(&self) -> &TransformCache {
        &self.cache
    }

    /// Rendering surface, `None` once released by `destroy`
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable rendering surface
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Pixel bounds of the rendered text
    pub fn bounds(&self) -> SurfaceBounds {
        self.surface.as_ref().map_or_else(SurfaceBounds::default, |surface| surface.bounds())
    }

    /// Signals of this node
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Mutable signals of this node
    pub fn events_mut(&mut self) -> &mut EventHub {
        &mut self.events
    }

    /// Per-tick change detection
    ///
    /// Does nothing when the node no longer exists. Otherwise clears the
    /// dirty flag, snapshots `position` into the cache and, if the surface
    /// sits somewhere else, moves it and marks the cache dirty. The matrix
    /// fields are left to the transform pipeline.
    ///
    /// The comparison is against the surface, not the previous cache
    /// snapshot. Both agree while only `position` drives the surface; a
    /// surface moved from outside is pulled back and the tick reported dirty.
    ///
    /// Returns the dirty flag.
    pub fn update(&mut self) -> bool {
        if !self.exists {
            return false;
        }

        self.cache.dirty = false;
        self.cache.x = self.position.x;
        self.cache.y = self.position.y;

        let snapshot = Vec2::new(self.cache.x, self.cache.y);
        if let Some(surface) = self.surface.as_mut() {
            if surface.position() != snapshot {
                surface.set_position(snapshot);
                self.cache.dirty = true;
                log::trace!("Text node {:?} moved to ({}, {})", self.id, snapshot.x, snapshot.y);
            }
        }

        self.cache.dirty
    }

    /// Rotation in degrees. 0 once the surface is released.
    pub fn angle(&self) -> f32 {
        self.surface.as_ref().map_or(0.0, |surface| rad_to_deg(surface.rotation()))
    }

    /// Set rotation in degrees
    pub fn set_angle(&mut self, degrees: f32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_rotation(deg_to_rad(degrees));
        }
    }

    /// Displayed text
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Change the displayed text
    ///
    /// Returns true if a re-render was requested. Writing the current value
    /// never re-renders.
    pub fn set_content(&mut self, text: &str) -> bool {
        if text == self.text {
            return false;
        }
        text.clone_into(&mut self.text);

        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.set_text(&self.text);
        log::trace!("Text node {:?} re-rendered text", self.id);
        true
    }

    /// Current style
    pub fn font(&self) -> &TextStyle {
        &self.style
    }

    /// Change the style
    ///
    /// Returns true if a re-render was requested. Writing an equal style
    /// never re-renders.
    pub fn set_font(&mut self, style: &TextStyle) -> bool {
        if *style == self.style {
            return false;
        }
        self.style = style.clone();

        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.set_style(&self.style);
        log::trace!("Text node {:?} re-rendered style", self.id);
        true
    }

    /// Mark the node dead and dispatch `on_killed`
    ///
    /// Returns false if it was already dead or has been destroyed.
    pub fn kill(&mut self) -> bool {
        if !self.exists || !self.alive {
            return false;
        }
        self.alive = false;
        self.events.on_killed.dispatch(&self.id);
        true
    }

    /// Mark the node alive and dispatch `on_revived`
    ///
    /// Returns false if it was already alive or has been destroyed.
    pub fn revive(&mut self) -> bool {
        if !self.exists || self.alive {
            return false;
        }
        self.alive = true;
        self.events.on_revived.dispatch(&self.id);
        true
    }

    /// Tear the node down
    ///
    /// Leaves its group, releases the surface unless it was still attached to
    /// a display tree (then only detachment is requested and the handle is
    /// kept), disposes the event hub and clears `exists` and `group`.
    ///
    /// Returns `Ok(false)` on a node that was already destroyed. A group
    /// refusing the removal is a broken invariant: the error is returned and
    /// the node is left as it was.
    pub fn destroy(&mut self, groups: &mut dyn GroupMembership) -> Result<bool, SceneError> {
        if !self.exists {
            log::trace!("Text node {:?} already destroyed", self.id);
            return Ok(false);
        }

        if let Some(group) = self.group {
            if let Err(err) = groups.remove_member(group, self.id) {
                log::error!("Text node {:?} could not leave group {group:?}: {err}", self.id);
                return Err(err.into());
            }
            self.events
                .on_removed_from_group
                .dispatch(&GroupEvent { node: self.id, group });
        }

        let still_attached = self
            .surface
            .as_mut()
            .is_some_and(|surface| surface.detach_from_parent());
        if !still_attached {
            self.surface = None;
        }

        self.events.destroy();
        self.exists = false;
        self.group = None;

        log::debug!("Text node {:?} destroyed", self.id);
        Ok(true)
    }
}
