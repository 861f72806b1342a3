//! Guillochage Core
//!
//! Data model shared by the engine, the exporters and the project files:
//! - [`ShapeDescriptor`]: the workpiece outline patterns are clipped to
//! - [`ParameterSet`] / [`LineParams`]: loosely typed parameters and their resolved form
//! - [`Layer`] / [`LineSlot`] / [`LayerStack`]: layer and line editing
//! - [`RenderSegment`]: the output of a calculation pass

pub mod error;
pub mod geometry;
pub mod layer;
pub mod layer_stack;
pub mod params;
pub mod render;
pub mod shape;

pub use error::{LayerError, LayerResult};
pub use geometry::Point;
pub use layer::{Layer, LineSlot, LineStatus};
pub use layer_stack::{LayerStack, MirrorAxis, LAYER_PALETTE};
pub use params::{keys, LineParams, ParamValue, ParameterSet, Resolution, MAX_LINES};
pub use render::RenderSegment;
pub use shape::{ShapeDescriptor, ShapeKind};
