//! Network layers as geometric placeholders.
//!
//! A [`Layer`] is a grid of `rows × columns` node positions (or the
//! rectangle bounding that grid) anchored at an origin point. It knows
//! nothing about weights or activations beyond the decorative curve marker;
//! it exists to be positioned by the [`align`](crate::align) helpers, wired
//! up by the [`connect`](crate::connect) functions, and drawn onto a
//! [`Surface`].
//!
//! Layers are built through [`LayerBuilder`] and their origin is fixed at
//! construction; alignment operations return repositioned copies rather
//! than mutating a placed layer.

use log::debug;

use crate::{
    activation::{self, Activation},
    config::Theme,
    connect::AnchorConfig,
    draw::{Surface, TextAnchor},
    error::SketchError,
    geometry::{Bounds, Point, Size},
};

/// Fraction of the node radius that connection anchors sit inside the node
/// edge, so wires visually attach to the circle rather than its center.
const NODE_ANCHOR_INSET: f32 = 0.2;

/// How a layer is rendered: as individual node circles or as one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every node drawn as a circle.
    Nodes,
    /// The whole grid drawn as a single bounding rectangle.
    Rect,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Nodes => "nodes",
            Self::Rect => "rect",
        })
    }
}

/// Marks a layer as a network input or output.
///
/// Special layers carry no activation function, so no curve glyph is drawn
/// in their nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialRole {
    Input,
    Output,
}

/// A single network layer: a positioned grid of nodes or a rectangle.
#[derive(Debug, Clone)]
pub struct Layer {
    rows: usize,
    columns: usize,
    mode: DisplayMode,
    activation: Option<Activation>,
    special: Option<SpecialRole>,
    origin: Point,
    radius: f32,
    vspace: f32,
    hspace: f32,
}

impl Layer {
    /// Starts building a layer with the given grid dimensions and display
    /// mode.
    pub fn builder(rows: usize, columns: usize, mode: DisplayMode) -> LayerBuilder {
        LayerBuilder {
            rows,
            columns,
            mode,
            activation: None,
            special: None,
            origin: Point::default(),
            radius: 0.2,
            vspace: 0.1,
            hspace: 0.1,
        }
    }

    /// Starts building a node-grid layer.
    pub fn nodes(rows: usize, columns: usize) -> LayerBuilder {
        Self::builder(rows, columns, DisplayMode::Nodes)
    }

    /// Starts building a rectangle layer.
    pub fn rect(rows: usize, columns: usize) -> LayerBuilder {
        Self::builder(rows, columns, DisplayMode::Rect)
    }

    /// Returns the number of node rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of node columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the activation marker, if any.
    pub fn activation(&self) -> Option<Activation> {
        self.activation
    }

    /// Returns the special role, if any.
    pub fn special(&self) -> Option<SpecialRole> {
        self.special
    }

    /// Returns the top-left corner of the layer grid.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the node radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the total number of nodes in the grid.
    pub fn node_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns a copy of this layer moved to a new origin.
    ///
    /// Crate-internal: user code repositions layers through the alignment
    /// operations only.
    pub(crate) fn with_origin(&self, origin: Point) -> Self {
        Self {
            origin,
            ..self.clone()
        }
    }

    /// Returns the unpadded extent of the layer grid.
    pub fn size(&self) -> Size {
        let diameter = 2.0 * self.radius;
        Size::new(
            diameter * self.columns as f32 + (self.columns - 1) as f32 * self.hspace,
            diameter * self.rows as f32 + (self.rows - 1) as f32 * self.vspace,
        )
    }

    /// Returns the layer's bounding rectangle, grown by `pad` on all sides.
    pub fn bounds(&self, pad: f32) -> Bounds {
        Bounds::from_top_left(self.origin, self.size()).expand(pad)
    }

    /// Centerpoints of every node in the layer.
    ///
    /// The iterator is restartable: each call recomputes the points from the
    /// current origin and spacing. Nodes are produced column-major, top to
    /// bottom within a column, matching the layer's drawing order.
    pub fn node_centers(&self) -> impl Iterator<Item = Point> {
        let origin = self.origin;
        let radius = self.radius;
        let row_step = 2.0 * self.radius + self.vspace;
        let column_step = 2.0 * self.radius + self.hspace;
        let rows = self.rows;

        (0..self.columns).flat_map(move |col| {
            (0..rows).map(move |row| {
                Point::new(
                    origin.x() + radius + col as f32 * column_step,
                    origin.y() + radius + row as f32 * row_step,
                )
            })
        })
    }

    /// Connection points for inbound wires to this layer's nodes, slightly
    /// inside the left edge of each node circle.
    pub fn inbound_node_anchors(&self) -> impl Iterator<Item = Point> {
        let offset = NODE_ANCHOR_INSET * self.radius;
        self.node_centers().map(move |c| c.offset_x(-offset))
    }

    /// Connection points for outbound wires from this layer's nodes.
    pub fn outbound_node_anchors(&self) -> impl Iterator<Item = Point> {
        let offset = NODE_ANCHOR_INSET * self.radius;
        self.node_centers().map(move |c| c.offset_x(offset))
    }

    /// The two entry points on the left edge of the layer rectangle.
    ///
    /// Points sit at `(0.5 ∓ width/2) · height` below the rectangle top,
    /// where `width` is the configured fraction of the edge used for the
    /// anchor bundle and the rectangle is padded by the configured `pad`.
    pub fn inbound_rect_anchors(&self, config: &AnchorConfig) -> [Point; 2] {
        self.rect_anchors(config, false)
    }

    /// The two exit points on the right edge of the layer rectangle.
    pub fn outbound_rect_anchors(&self, config: &AnchorConfig) -> [Point; 2] {
        self.rect_anchors(config, true)
    }

    fn rect_anchors(&self, config: &AnchorConfig, outbound: bool) -> [Point; 2] {
        let bounds = self.bounds(config.pad());
        let x = if outbound {
            bounds.max_x()
        } else {
            bounds.min_x()
        };
        let y1 = bounds.min_y() + (0.5 - config.width() / 2.0) * bounds.height();
        let y2 = bounds.min_y() + (0.5 + config.width() / 2.0) * bounds.height();
        [Point::new(x, y1), Point::new(x, y2)]
    }

    /// Draws every node as a circle, with its activation curve inside unless
    /// the layer is special.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidMode`] if the layer is in rectangle
    /// mode.
    pub fn draw_nodes(&self, surface: &mut dyn Surface, theme: &Theme) -> Result<(), SketchError> {
        self.ensure_mode("draw_nodes", DisplayMode::Nodes)?;
        debug!(rows = self.rows, columns = self.columns; "Drawing layer nodes");

        for center in self.node_centers() {
            surface.circle(center, self.radius, &theme.node_fill(), theme.node_stroke());
            if self.special.is_none() {
                if let Some(act) = self.activation {
                    let curve = activation::clip_to_circle(
                        act.curve(center, self.radius),
                        center,
                        self.radius,
                    );
                    surface.polyline(&curve, theme.activation_stroke());
                }
            }
        }
        Ok(())
    }

    /// Draws the layer as a single rectangle outline, padded by `pad`, with
    /// a centered activation curve unless the layer is special.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidMode`] if the layer is in node mode.
    pub fn draw_rect(
        &self,
        surface: &mut dyn Surface,
        theme: &Theme,
        pad: f32,
    ) -> Result<(), SketchError> {
        self.ensure_mode("draw_rect", DisplayMode::Rect)?;
        debug!(rows = self.rows, columns = self.columns; "Drawing layer rectangle");

        let bounds = self.bounds(pad);
        surface.rect(bounds, None, theme.rect_stroke());

        if self.special.is_none() {
            if let Some(act) = self.activation {
                let center = bounds.center();
                let curve = activation::clip_to_bounds(act.curve(center, self.radius), bounds);
                surface.polyline(&curve, theme.activation_stroke());
            }
        }
        Ok(())
    }

    /// Places one label at the center of each node.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::MismatchedAnnotationCount`] if the label count
    /// differs from the node count, and [`SketchError::InvalidMode`] for
    /// rectangle-mode layers.
    pub fn annotate_nodes(
        &self,
        surface: &mut dyn Surface,
        theme: &Theme,
        labels: &[&str],
    ) -> Result<(), SketchError> {
        self.ensure_mode("annotate_nodes", DisplayMode::Nodes)?;
        if labels.len() != self.node_count() {
            return Err(SketchError::MismatchedAnnotationCount {
                nodes: self.node_count(),
                labels: labels.len(),
            });
        }

        for (label, center) in labels.iter().zip(self.node_centers()) {
            surface.text(center, label, theme.font(), TextAnchor::Centered);
        }
        Ok(())
    }

    /// Places a caption below the layer rectangle, left aligned, offset by
    /// the given paddings.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidMode`] if the layer is in node mode.
    pub fn annotate_rect(
        &self,
        surface: &mut dyn Surface,
        theme: &Theme,
        label: &str,
        xpad: f32,
        ypad: f32,
    ) -> Result<(), SketchError> {
        self.ensure_mode("annotate_rect", DisplayMode::Rect)?;

        let bounds = self.bounds(0.0);
        let anchor = Point::new(bounds.min_x() - xpad, bounds.max_y() + ypad);
        surface.text(anchor, label, theme.font(), TextAnchor::TopLeft);
        Ok(())
    }

    fn ensure_mode(
        &self,
        operation: &'static str,
        expected: DisplayMode,
    ) -> Result<(), SketchError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SketchError::mode_mismatch(operation, expected, self.mode))
        }
    }
}

/// Builder for [`Layer`].
///
/// Defaults: radius 0.2, vertical and horizontal node spacing 0.1, origin at
/// (0, 0), no activation, no special role.
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    rows: usize,
    columns: usize,
    mode: DisplayMode,
    activation: Option<Activation>,
    special: Option<SpecialRole>,
    origin: Point,
    radius: f32,
    vspace: f32,
    hspace: f32,
}

impl LayerBuilder {
    /// Sets the activation curve drawn inside the layer's nodes.
    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    /// Marks the layer as a network input or output.
    pub fn special(mut self, role: SpecialRole) -> Self {
        self.special = Some(role);
        self
    }

    /// Sets the initial origin (top-left corner) of the layer.
    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the node radius in diagram units.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the vertical spacing between node circles.
    pub fn vspace(mut self, vspace: f32) -> Self {
        self.vspace = vspace;
        self
    }

    /// Sets the horizontal spacing between node circles.
    pub fn hspace(mut self, hspace: f32) -> Self {
        self.hspace = hspace;
        self
    }

    /// Validates the configuration and builds the layer.
    ///
    /// Grid dimensions are integer counts. Callers that derive a row count
    /// from a real-valued quantity (the common aesthetic trick of scaling a
    /// wide layer by the square root of its unit count) choose their own
    /// rounding before calling this; the library imposes no policy.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidDimension`] if rows or columns are zero
    /// or the radius is not positive.
    pub fn build(self) -> Result<Layer, SketchError> {
        if self.rows == 0 {
            return Err(SketchError::InvalidDimension { name: "rows" });
        }
        if self.columns == 0 {
            return Err(SketchError::InvalidDimension { name: "columns" });
        }
        if self.radius <= 0.0 {
            return Err(SketchError::InvalidDimension { name: "radius" });
        }

        Ok(Layer {
            rows: self.rows,
            columns: self.columns,
            mode: self.mode,
            activation: self.activation,
            special: self.special,
            origin: self.origin,
            radius: self.radius,
            vspace: self.vspace,
            hspace: self.hspace,
        })
    }
}
