//! Error types for netsketch operations.
//!
//! Every condition here is detected at the call that triggers it and reported
//! immediately. There is no retry or degraded-mode behavior: a schematic
//! either describes a drawable diagram or it does not.

use thiserror::Error;

use crate::layer::DisplayMode;

/// The main error type for netsketch operations.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A layer dimension that must be positive was zero.
    #[error("invalid dimension: {name} must be positive")]
    InvalidDimension { name: &'static str },

    /// An operation that requires one display mode was invoked on a layer
    /// configured with the other.
    #[error("invalid mode: {operation} requires a {expected} layer, got a {actual} layer")]
    InvalidMode {
        operation: &'static str,
        expected: DisplayMode,
        actual: DisplayMode,
    },

    /// The number of node annotations did not match the node count.
    #[error("annotation count mismatch: layer has {nodes} nodes but {labels} labels were given")]
    MismatchedAnnotationCount { nodes: usize, labels: usize },

    /// A configured color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl SketchError {
    pub(crate) fn mode_mismatch(
        operation: &'static str,
        expected: DisplayMode,
        actual: DisplayMode,
    ) -> Self {
        Self::InvalidMode {
            operation,
            expected,
            actual,
        }
    }
}
