//! Wiring between adjacent layers.
//!
//! Connections are straight line segments from the source layer's outbound
//! anchors to the destination layer's inbound anchors, one segment per pair
//! in the cartesian product. Where an anchor set comes from a layer edge
//! depends only on the layer's display mode, so a single routine handles all
//! four mode combinations; the four public functions exist to make call
//! sites read naturally and to validate that each endpoint is in the mode
//! the name promises.
//!
//! Segments are drawn straight onto the surface and never stored; the
//! z-ordering of the output keeps them underneath the shapes they join.

use log::debug;

use crate::{
    config::Theme,
    draw::Surface,
    error::SketchError,
    geometry::Point,
    layer::{DisplayMode, Layer},
};

/// Placement of connection anchors on a rectangle layer's edge.
#[derive(Debug, Clone, Copy)]
pub struct AnchorConfig {
    pad: f32,
    width: f32,
}

impl AnchorConfig {
    /// Creates an anchor configuration.
    ///
    /// `pad` grows the rectangle the anchors sit on (matching the padding
    /// the rectangle was drawn with); `width` is the fraction of the edge
    /// height the two anchors span, centered on the edge midpoint.
    pub fn new(pad: f32, width: f32) -> Self {
        Self { pad, width }
    }

    /// Returns the rectangle padding.
    pub fn pad(&self) -> f32 {
        self.pad
    }

    /// Returns the anchor band width as a fraction of the edge height.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            pad: 0.0,
            width: 0.1,
        }
    }
}

/// Computes the line segments a connection between the two layers consists
/// of, without drawing anything.
///
/// One segment per (outbound, inbound) anchor pair: nodes contribute one
/// anchor per node, rectangles contribute two per edge, so nodes→nodes
/// produces `n0 · n1` segments and rect→rect always produces four.
pub fn segments(
    source: &Layer,
    destination: &Layer,
    outbound: &AnchorConfig,
    inbound: &AnchorConfig,
) -> Vec<(Point, Point)> {
    let from = anchors(source, outbound, true);
    let to = anchors(destination, inbound, false);

    from.iter()
        .flat_map(|start| to.iter().map(move |end| (*start, *end)))
        .collect()
}

fn anchors(layer: &Layer, config: &AnchorConfig, outbound: bool) -> Vec<Point> {
    match (layer.mode(), outbound) {
        (DisplayMode::Nodes, true) => layer.outbound_node_anchors().collect(),
        (DisplayMode::Nodes, false) => layer.inbound_node_anchors().collect(),
        (DisplayMode::Rect, true) => layer.outbound_rect_anchors(config).to_vec(),
        (DisplayMode::Rect, false) => layer.inbound_rect_anchors(config).to_vec(),
    }
}

fn connect(
    surface: &mut dyn Surface,
    theme: &Theme,
    source: &Layer,
    destination: &Layer,
    outbound: &AnchorConfig,
    inbound: &AnchorConfig,
) {
    let wires = segments(source, destination, outbound, inbound);
    debug!(segments = wires.len(); "Connecting layers");
    for (from, to) in wires {
        surface.line(from, to, theme.wire_stroke());
    }
}

fn ensure_mode(
    operation: &'static str,
    layer: &Layer,
    expected: DisplayMode,
) -> Result<(), SketchError> {
    if layer.mode() == expected {
        Ok(())
    } else {
        Err(SketchError::mode_mismatch(operation, expected, layer.mode()))
    }
}

/// Draws the full bipartite wiring between two node layers.
///
/// # Errors
///
/// Returns [`SketchError::InvalidMode`] if either layer is in rectangle
/// mode.
pub fn connect_nodes_to_nodes(
    surface: &mut dyn Surface,
    theme: &Theme,
    source: &Layer,
    destination: &Layer,
) -> Result<(), SketchError> {
    ensure_mode("connect_nodes_to_nodes", source, DisplayMode::Nodes)?;
    ensure_mode("connect_nodes_to_nodes", destination, DisplayMode::Nodes)?;

    let config = AnchorConfig::default();
    connect(surface, theme, source, destination, &config, &config);
    Ok(())
}

/// Wires every node of the source layer to the destination rectangle's two
/// entry anchors.
///
/// # Errors
///
/// Returns [`SketchError::InvalidMode`] if the source is not a node layer or
/// the destination is not a rectangle layer.
pub fn connect_nodes_to_rect(
    surface: &mut dyn Surface,
    theme: &Theme,
    source: &Layer,
    destination: &Layer,
    inbound: &AnchorConfig,
) -> Result<(), SketchError> {
    ensure_mode("connect_nodes_to_rect", source, DisplayMode::Nodes)?;
    ensure_mode("connect_nodes_to_rect", destination, DisplayMode::Rect)?;

    connect(
        surface,
        theme,
        source,
        destination,
        &AnchorConfig::default(),
        inbound,
    );
    Ok(())
}

/// Fans out from the source rectangle's two exit anchors to every node of
/// the destination layer.
///
/// # Errors
///
/// Returns [`SketchError::InvalidMode`] if the source is not a rectangle
/// layer or the destination is not a node layer.
pub fn connect_rect_to_nodes(
    surface: &mut dyn Surface,
    theme: &Theme,
    source: &Layer,
    destination: &Layer,
    outbound: &AnchorConfig,
) -> Result<(), SketchError> {
    ensure_mode("connect_rect_to_nodes", source, DisplayMode::Rect)?;
    ensure_mode("connect_rect_to_nodes", destination, DisplayMode::Nodes)?;

    connect(
        surface,
        theme,
        source,
        destination,
        outbound,
        &AnchorConfig::default(),
    );
    Ok(())
}

/// Draws the fixed four-segment bundle between two rectangle layers.
///
/// # Errors
///
/// Returns [`SketchError::InvalidMode`] if either layer is in node mode.
pub fn connect_rect_to_rect(
    surface: &mut dyn Surface,
    theme: &Theme,
    source: &Layer,
    destination: &Layer,
    outbound: &AnchorConfig,
    inbound: &AnchorConfig,
) -> Result<(), SketchError> {
    ensure_mode("connect_rect_to_rect", source, DisplayMode::Rect)?;
    ensure_mode("connect_rect_to_rect", destination, DisplayMode::Rect)?;

    connect(surface, theme, source, destination, outbound, inbound);
    Ok(())
}
