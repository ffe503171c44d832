//! Headless rendering collaborator
//!
//! Stores what it is told and counts re-render requests instead of drawing.
//! Used by tests and by tools that run the scene without a GPU.

use super::{SurfaceBounds, TextRasterizer, TextStyle, TextSurface};
use crate::foundation::math::Vec2;

/// Approximate advance of one glyph in pixels
const GLYPH_WIDTH: f32 = 8.0;
/// Approximate height of one line in pixels
const LINE_HEIGHT: f32 = 16.0;

/// Surface that records calls instead of rasterizing
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    text: String,
    style: TextStyle,
    position: Vec2,
    rotation: f32,
    attached: bool,
    text_renders: usize,
    style_renders: usize,
    detach_requests: usize,
}

impl HeadlessSurface {
    /// Create a surface holding `text` and `style`
    pub fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_owned(),
            style: style.clone(),
            ..Default::default()
        }
    }

    /// Last text rendered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last style rendered
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Number of `set_text` calls since creation
    pub fn text_renders(&self) -> usize {
        self.text_renders
    }

    /// Number of `set_style` calls since creation
    pub fn style_renders(&self) -> usize {
        self.style_renders
    }

    /// Number of detach requests that found the surface attached
    pub fn detach_requests(&self) -> usize {
        self.detach_requests
    }

    /// Whether the surface sits in a display tree
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attach the surface to a display tree
    pub fn attach_to_parent(&mut self) {
        self.attached = true;
    }
}

impl TextSurface for HeadlessSurface {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.text_renders += 1;
    }

    fn set_style(&mut self, style: &TextStyle) {
        self.style = style.clone();
        self.style_renders += 1;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    #[allow(clippy::cast_precision_loss)]
    fn bounds(&self) -> SurfaceBounds {
        if self.text.is_empty() {
            return SurfaceBounds::default();
        }
        let columns = self.text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let rows = self.text.lines().count();
        SurfaceBounds {
            width: columns as f32 * GLYPH_WIDTH,
            height: rows as f32 * LINE_HEIGHT,
        }
    }

    fn detach_from_parent(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        self.detach_requests += 1;
        true
    }
}

/// Rasterizer producing [`HeadlessSurface`]s
#[derive(Debug, Clone, Default)]
pub struct HeadlessRasterizer {
    surfaces_created: usize,
    attach_on_create: bool,
}

impl HeadlessRasterizer {
    /// Create a rasterizer whose surfaces start detached
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: attach every created surface to a display tree
    #[must_use]
    pub fn with_attached_surfaces(mut self) -> Self {
        self.attach_on_create = true;
        self
    }

    /// Number of surfaces created so far
    pub fn surfaces_created(&self) -> usize {
        self.surfaces_created
    }
}

impl TextRasterizer for HeadlessRasterizer {
    type Surface = HeadlessSurface;

    fn create_surface(&mut self, text: &str, style: &TextStyle) -> HeadlessSurface {
        self.surfaces_created += 1;
        let mut surface = HeadlessSurface::new(text, style);
        if self.attach_on_create {
            surface.attach_to_parent();
        }
        surface
    }
}
