//! Rendering collaborator interface
//!
//! Rasterization lives outside this crate. A node only needs to hand its
//! text and style over, move and rotate the resulting surface, and detach it
//! from whatever display tree it was attached to.

use super::TextStyle;
use crate::foundation::math::Vec2;

/// Pixel size of a rendered surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// Drawable produced by rasterizing text with a style
pub trait TextSurface {
    /// Replace the text and re-render
    fn set_text(&mut self, text: &str);

    /// Replace the style and re-render
    fn set_style(&mut self, style: &TextStyle);

    /// Position of the surface in its display tree
    fn position(&self) -> Vec2;

    /// Move the surface
    fn set_position(&mut self, position: Vec2);

    /// Rotation in radians
    fn rotation(&self) -> f32;

    /// Set rotation in radians
    fn set_rotation(&mut self, radians: f32);

    /// Pixel bounds of the rendered text
    fn bounds(&self) -> SurfaceBounds;

    /// Detach from the parent display tree
    ///
    /// Returns true if the surface was attached and detachment was requested.
    fn detach_from_parent(&mut self) -> bool;
}

/// Factory turning text and style into a surface
pub trait TextRasterizer {
    /// Surface type produced by this rasterizer
    type Surface: TextSurface;

    /// Render `text` with `style` into a new surface
    fn create_surface(&mut self, text: &str, style: &TextStyle) -> Self::Surface;
}
