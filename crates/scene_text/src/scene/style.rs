//! Text style descriptor
//!
//! The style is opaque to this layer: it is stored, compared by value and
//! handed to the rasterizer. Every field is optional so the default value is
//! the empty style, leaving the rasterizer to pick its own defaults.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of multi-line text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align lines to the left edge
    Left,
    /// Center lines
    Center,
    /// Align lines to the right edge
    Right,
}

/// Style used to rasterize a text node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font description, e.g. `"bold 20pt Arial"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Fill color, e.g. `"#ffffff"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Alignment of multi-line text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Stroke color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Stroke thickness in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_thickness: Option<f32>,
    /// Whether lines wrap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<bool>,
    /// Wrap width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap_width: Option<f32>,
}

impl TextStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builder pattern: Set font
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Builder pattern: Set fill color
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Builder pattern: Set alignment
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Builder pattern: Set stroke color and thickness
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>, thickness: f32) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_thickness = Some(thickness);
        self
    }

    /// Builder pattern: Enable word wrap at `width` pixels
    #[must_use]
    pub fn with_word_wrap(mut self, width: f32) -> Self {
        self.word_wrap = Some(true);
        self.word_wrap_width = Some(width);
        self
    }
}
