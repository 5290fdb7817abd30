//! Relative placement of adjacent layers.
//!
//! A schematic is laid out left to right: each layer is positioned against
//! the one before it with [`horizontal_align`], then leveled with
//! [`vertical_align`]. Both return a repositioned copy of the target layer
//! and leave the reference untouched, so layouts read as a chain of
//! rebindings:
//!
//! ```
//! use netsketch::{align, Layer};
//!
//! let input = Layer::nodes(4, 1).build()?;
//! let hidden = Layer::nodes(8, 1).build()?;
//! let hidden = align::horizontal_align(&input, &hidden, 1.5);
//! let hidden = align::vertical_align(&input, &hidden, 0.5);
//! # Ok::<(), netsketch::SketchError>(())
//! ```
//!
//! Placement is absolute: aligning twice with the same arguments yields the
//! same origin, nothing accumulates.

use log::debug;

use crate::{geometry::Point, layer::Layer};

/// Levels `target` against `reference` along the vertical axis.
///
/// The target's top edge lands at
/// `reference.y + ratio · (reference.height − target.height)`: a ratio of 0
/// aligns the top edges, 1 the bottom edges, and 0.5 the vertical centers.
/// Values outside `[0, 1]` are allowed and produce a deliberate offset. The
/// horizontal position is left unchanged.
pub fn vertical_align(reference: &Layer, target: &Layer, ratio: f32) -> Layer {
    let y = reference.origin().y()
        + ratio * (reference.size().height() - target.size().height());
    debug!(ratio, y; "Vertically aligning layer");
    target.with_origin(Point::new(target.origin().x(), y))
}

/// Places `target` at a fixed horizontal offset from `reference`.
///
/// The target's left edge lands at `reference.x + spacing`, independent of
/// either layer's width; negative spacing places the target to the left of
/// the reference origin. The vertical position is left unchanged.
pub fn horizontal_align(reference: &Layer, target: &Layer, spacing: f32) -> Layer {
    let x = reference.origin().x() + spacing;
    debug!(spacing, x; "Horizontally aligning layer");
    target.with_origin(Point::new(x, target.origin().y()))
}
