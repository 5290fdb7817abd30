//! SVG drawing surface.
//!
//! [`SvgSurface`] is the bundled [`Surface`](super::Surface) implementation.
//! It collects primitives into a [`LayeredOutput`](super::LayeredOutput),
//! tracks the extent of everything drawn, and finally assembles an
//! [`svg::Document`] sized to the content plus a margin.
//!
//! Diagram coordinates are in layer units (a default node has radius 0.2);
//! the surface multiplies all geometry by a configurable scale factor when
//! emitting pixels, so stroke widths and font sizes stay in pixel terms.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::{FontSpec, LayeredOutput, RenderLayer, Stroke, Surface, TextAnchor},
    geometry::{Bounds, Point},
};

/// Default diagram-unit to pixel scale factor.
const DEFAULT_SCALE: f32 = 100.0;

/// Default margin around the drawn content, in pixels.
const DEFAULT_MARGIN: f32 = 20.0;

/// A [`Surface`] that renders primitives into an SVG document.
pub struct SvgSurface {
    output: LayeredOutput,
    extent: Option<Bounds>,
    scale: f32,
    margin: f32,
    background: Option<Color>,
}

impl SvgSurface {
    /// Creates an empty surface with default scale and margin and no
    /// background fill.
    pub fn new() -> Self {
        Self {
            output: LayeredOutput::new(),
            extent: None,
            scale: DEFAULT_SCALE,
            margin: DEFAULT_MARGIN,
            background: None,
        }
    }

    /// Sets the diagram-unit to pixel scale factor.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the pixel margin added around the content when the document is
    /// assembled.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets a background fill covering the whole document.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the pixel-space extent of everything drawn so far, if
    /// anything has been drawn.
    pub fn extent(&self) -> Option<Bounds> {
        self.extent
    }

    fn track(&mut self, bounds: Bounds) {
        self.extent = Some(match self.extent {
            Some(extent) => extent.merge(&bounds),
            None => bounds,
        });
    }

    /// Assembles the final SVG document, consuming the surface.
    ///
    /// The document gets a `0 0 w h` viewBox sized to the drawn extent plus
    /// the margin, with the content translated into place; layers render
    /// bottom to top (wires under shapes under labels).
    pub fn into_document(self) -> Document {
        let content = self.extent.unwrap_or_default();
        let width = content.width() + 2.0 * self.margin;
        let height = content.height() + 2.0 * self.margin;

        info!(width, height, elements = self.output.len(); "Assembling SVG document");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", background.to_string())
                .set("fill-opacity", background.alpha());
            doc = doc.add(rect);
        }

        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                self.margin - content.min_x(),
                self.margin - content.min_y()
            ),
        );

        for node in self.output.render() {
            main_group = main_group.add(node);
        }

        doc.add(main_group)
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for SvgSurface {
    fn circle(&mut self, center: Point, radius: f32, fill: &Color, stroke: &Stroke) {
        let center = center.scale(self.scale);
        let radius = radius * self.scale;

        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", fill.to_string())
            .set("fill-opacity", fill.alpha());
        let circle = apply_stroke!(circle, stroke);

        self.output
            .add_to_layer(RenderLayer::Shapes, Box::new(circle));
        self.track(Bounds::from_points(
            center.sub_point(Point::new(radius, radius)),
            center.add_point(Point::new(radius, radius)),
        ));
    }

    fn rect(&mut self, bounds: Bounds, fill: Option<&Color>, stroke: &Stroke) {
        let min = bounds.min_point().scale(self.scale);
        let width = bounds.width() * self.scale;
        let height = bounds.height() * self.scale;

        let mut rect = svg_element::Rectangle::new()
            .set("x", min.x())
            .set("y", min.y())
            .set("width", width)
            .set("height", height)
            .set("fill", "none");
        if let Some(fill) = fill {
            rect = rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha());
        }
        let rect = apply_stroke!(rect, stroke);

        self.output
            .add_to_layer(RenderLayer::Shapes, Box::new(rect));
        self.track(Bounds::from_top_left(
            min,
            crate::geometry::Size::new(width, height),
        ));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let from = from.scale(self.scale);
        let to = to.scale(self.scale);

        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        let line = apply_stroke!(line, stroke);

        self.output.add_to_layer(RenderLayer::Wires, Box::new(line));
        self.track(Bounds::from_points(from, to));
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            debug!(points = points.len(); "Skipping degenerate polyline");
            return;
        }

        let scaled: Vec<Point> = points.iter().map(|p| p.scale(self.scale)).collect();
        let attribute = scaled
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");

        let polyline = svg_element::Polyline::new()
            .set("points", attribute)
            .set("fill", "none");
        let polyline = apply_stroke!(polyline, stroke);

        self.output
            .add_to_layer(RenderLayer::Activations, Box::new(polyline));
        let mut bounds = Bounds::from_points(scaled[0], scaled[1]);
        for p in &scaled[2..] {
            bounds = bounds.merge(&Bounds::from_points(*p, *p));
        }
        self.track(bounds);
    }

    fn text(&mut self, anchor: Point, content: &str, font: &FontSpec, align: TextAnchor) {
        let anchor = anchor.scale(self.scale);

        let mut text = svg_element::Text::new(content)
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("font-family", font.family())
            .set("font-size", font.size())
            .set("fill", font.color().to_string());

        text = match align {
            TextAnchor::Centered => text
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central"),
            TextAnchor::TopLeft => text
                .set("text-anchor", "start")
                .set("dominant-baseline", "hanging"),
        };

        self.output.add_to_layer(RenderLayer::Labels, Box::new(text));
        // Text metrics are not measured; the anchor point is tracked and the
        // document margin absorbs the glyph overhang.
        self.track(Bounds::from_points(anchor, anchor));
    }
}
