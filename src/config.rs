//! Styling configuration for rendered schematics.
//!
//! [`StyleConfig`] is the deserializable form: plain color strings and
//! numbers, every field optional, suitable for loading from an external
//! source. It resolves once into a [`Theme`] of parsed colors and strokes
//! that the draw operations consume; resolution fails fast on the first
//! unparseable color.
//!
//! Defaults reproduce the classic schematic look: white nodes with black
//! edges, black connection wires, blue activation curves.

use std::str::FromStr;

use serde::Deserialize;

use crate::{
    color::Color,
    draw::{FontSpec, Stroke, StrokeStyle},
    error::SketchError,
};

/// Deserializable style settings for a schematic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Document background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Node circle fill color.
    #[serde(default)]
    node_fill_color: Option<String>,

    /// Node circle edge color.
    #[serde(default)]
    node_edge_color: Option<String>,

    /// Node circle edge width in pixels.
    #[serde(default)]
    node_edge_width: Option<f32>,

    /// Connection wire color.
    #[serde(default)]
    wire_color: Option<String>,

    /// Connection wire width in pixels.
    #[serde(default)]
    wire_width: Option<f32>,

    /// Activation curve color.
    #[serde(default)]
    activation_color: Option<String>,

    /// Activation curve width in pixels.
    #[serde(default)]
    activation_width: Option<f32>,

    /// Layer rectangle outline color.
    #[serde(default)]
    rect_color: Option<String>,

    /// Layer rectangle outline width in pixels.
    #[serde(default)]
    rect_width: Option<f32>,

    /// Layer rectangle outline style: "solid", "dashed", "dotted", or a
    /// custom dasharray pattern.
    #[serde(default)]
    rect_style: Option<String>,

    /// Annotation font family.
    #[serde(default)]
    font_family: Option<String>,

    /// Annotation font size in pixels.
    #[serde(default)]
    font_size: Option<f32>,
}

impl StyleConfig {
    /// Creates a config where every field falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves this configuration into a [`Theme`].
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidColor`] if any configured color string
    /// cannot be parsed.
    pub fn theme(&self) -> Result<Theme, SketchError> {
        let parse = |value: &Option<String>, fallback: &str| -> Result<Color, SketchError> {
            let s = value.as_deref().unwrap_or(fallback);
            Color::new(s).map_err(SketchError::InvalidColor)
        };

        let background = match &self.background_color {
            Some(s) => Some(Color::new(s).map_err(SketchError::InvalidColor)?),
            None => None,
        };

        let mut rect_stroke = Stroke::new(
            parse(&self.rect_color, "black")?,
            self.rect_width.unwrap_or(1.5),
        );
        if let Some(style) = &self.rect_style {
            // StrokeStyle parsing is total: unknown names become custom patterns.
            rect_stroke.set_style(StrokeStyle::from_str(style).unwrap_or_default());
        }

        Ok(Theme {
            background,
            node_fill: parse(&self.node_fill_color, "white")?,
            node_stroke: Stroke::new(
                parse(&self.node_edge_color, "black")?,
                self.node_edge_width.unwrap_or(1.5),
            ),
            wire_stroke: Stroke::new(
                parse(&self.wire_color, "black")?,
                self.wire_width.unwrap_or(1.0),
            ),
            activation_stroke: Stroke::new(
                parse(&self.activation_color, "blue")?,
                self.activation_width.unwrap_or(2.5),
            ),
            rect_stroke,
            font: FontSpec::new(
                self.font_family.as_deref().unwrap_or("sans-serif"),
                self.font_size.unwrap_or(14.0),
                Color::default(),
            ),
        })
    }
}

/// Resolved styling used by the draw operations.
#[derive(Debug, Clone)]
pub struct Theme {
    background: Option<Color>,
    node_fill: Color,
    node_stroke: Stroke,
    wire_stroke: Stroke,
    activation_stroke: Stroke,
    rect_stroke: Stroke,
    font: FontSpec,
}

impl Theme {
    /// Returns the document background color, if one is configured.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Returns the node circle fill color.
    pub fn node_fill(&self) -> Color {
        self.node_fill
    }

    /// Returns the node circle edge stroke.
    pub fn node_stroke(&self) -> &Stroke {
        &self.node_stroke
    }

    /// Returns the connection wire stroke.
    pub fn wire_stroke(&self) -> &Stroke {
        &self.wire_stroke
    }

    /// Returns the activation curve stroke.
    pub fn activation_stroke(&self) -> &Stroke {
        &self.activation_stroke
    }

    /// Returns the layer rectangle outline stroke.
    pub fn rect_stroke(&self) -> &Stroke {
        &self.rect_stroke
    }

    /// Returns the annotation font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }
}

impl Default for Theme {
    fn default() -> Self {
        StyleConfig::default()
            .theme()
            .expect("default style strings are valid colors")
    }
}
