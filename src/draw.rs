//! Drawing primitives and the surface boundary.
//!
//! The geometry core never talks to an output format directly. It issues
//! primitive draw requests (circles, rectangles, lines, polylines, text)
//! against a [`Surface`] and reads nothing back. [`svg::SvgSurface`] is the
//! bundled implementation; anything else that can plot these five primitives
//! can stand in for it.

mod stroke;
pub mod svg;
mod zorder;

pub use stroke::{Stroke, StrokeStyle};
pub use zorder::{LayeredOutput, RenderLayer, SvgNode};

use crate::{
    color::Color,
    geometry::{Bounds, Point},
};

/// Font settings for annotation text.
///
/// Sizes are in output pixels, not diagram units: annotations keep their
/// configured size regardless of the surface's coordinate scale.
#[derive(Debug, Clone)]
pub struct FontSpec {
    family: String,
    size: f32,
    color: Color,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, color: Color) -> Self {
        Self {
            family: family.into(),
            size,
            color,
        }
    }

    /// Returns the font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: String::from("sans-serif"),
            size: 14.0,
            color: Color::default(),
        }
    }
}

/// How text is placed relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Centered on the anchor both horizontally and vertically
    /// (node annotations).
    Centered,
    /// Anchor is the top-left corner of the text (rectangle captions).
    TopLeft,
}

/// A drawing surface accepting primitive draw requests.
///
/// Implementations decide representation, z-ordering, and styling details the
/// requests leave open; callers only hand over geometry and never observe the
/// result.
pub trait Surface {
    /// Draws a filled, outlined circle.
    fn circle(&mut self, center: Point, radius: f32, fill: &Color, stroke: &Stroke);

    /// Draws a rectangle outline, optionally filled.
    fn rect(&mut self, bounds: Bounds, fill: Option<&Color>, stroke: &Stroke);

    /// Draws a single line segment.
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draws an open polyline through the given points.
    ///
    /// Fewer than two points is a no-op.
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);

    /// Draws a text label at the anchor point.
    fn text(&mut self, anchor: Point, content: &str, font: &FontSpec, align: TextAnchor);
}
