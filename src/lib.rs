//! Netsketch - schematic drawings of neural-network architectures.
//!
//! Layers are geometric placeholders (grids of node circles, or the
//! rectangle bounding such a grid) that are positioned relative to each
//! other, wired together with straight connections, and drawn onto a
//! [`Surface`](draw::Surface). The bundled [`SvgSurface`] renders the result
//! as a standalone SVG document.
//!
//! # Examples
//!
//! ```rust
//! use netsketch::{align, connect, Activation, Layer, SpecialRole, SvgSurface, Theme};
//!
//! let theme = Theme::default();
//! let mut surface = SvgSurface::new();
//!
//! // An input column feeding a relu hidden layer.
//! let state = Layer::nodes(4, 1).special(SpecialRole::Input).build()?;
//! let hidden = Layer::nodes(8, 1).activation(Activation::Relu).build()?;
//! let hidden = align::horizontal_align(&state, &hidden, 1.5);
//! let hidden = align::vertical_align(&state, &hidden, 0.5);
//!
//! connect::connect_nodes_to_nodes(&mut surface, &theme, &state, &hidden)?;
//! state.draw_nodes(&mut surface, &theme)?;
//! hidden.draw_nodes(&mut surface, &theme)?;
//!
//! let svg = surface.into_document().to_string();
//! assert!(svg.contains("<svg"));
//! # Ok::<(), netsketch::SketchError>(())
//! ```

pub mod activation;
pub mod align;
pub mod color;
pub mod config;
pub mod connect;
pub mod draw;
pub mod geometry;
pub mod layer;

mod error;

pub use activation::Activation;
pub use color::Color;
pub use config::{StyleConfig, Theme};
pub use connect::AnchorConfig;
pub use draw::svg::SvgSurface;
pub use error::SketchError;
pub use layer::{DisplayMode, Layer, LayerBuilder, SpecialRole};
