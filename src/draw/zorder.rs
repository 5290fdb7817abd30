//! Layer-based z-ordering for SVG output.
//!
//! Primitives are collected per [`RenderLayer`] and emitted bottom to top, so
//! connection wires always sit underneath the node circles they join and
//! labels always sit on top, regardless of draw-call order.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order: the first variant renders first
/// (bottom), the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Document background fill - renders first
    Background,
    /// Connection segments between layers
    Wires,
    /// Node circles and layer rectangles
    Shapes,
    /// Activation curves drawn inside nodes and rectangles
    Activations,
    /// Text annotations
    Labels,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Wires => "wires",
            Self::Shapes => "shapes",
            Self::Activations => "activations",
            Self::Labels => "labels",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, each non-empty layer becomes an SVG `<g>` element tagged
/// with a `data-layer` attribute, emitted in layer order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total number of collected nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Nodes keep their insertion order within a layer; layers are ordered by
    /// the `RenderLayer` declaration order (stable sort). Empty layers
    /// produce no group.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
