//! Guillochage Engine
//!
//! Turns layers of parametrized lines into clipped polylines:
//! - [`trajectory`]: base paths (straight, radial, spiral, rosette...)
//! - [`wave`]: offsets applied along the trajectory normal
//! - [`registry`]: name lookup, aliases, fallbacks and the curve catalogue
//! - [`sampler`]: composes trajectory, wave and transforms into a raw polyline
//! - [`clipper`]: keeps the parts inside the workpiece
//! - [`engine`]: the per-pass orchestration producing [`RenderSegment`]s
//!
//! [`RenderSegment`]: guillochage_core::RenderSegment

pub mod clipper;
pub mod engine;
pub mod registry;
pub mod sampler;
pub mod trajectory;
pub mod wave;

pub use clipper::{Boundary, Clipper, DEFAULT_BISECTION_STEPS};
pub use engine::{line_y_base, EngineOptions, GeometryEngine};
pub use registry::{normalize_key, CurveCategory, CurveInfo, CurveRegistry};
pub use sampler::{
    GenerationFrame, LinePlacement, LineSampler, DEFAULT_GENERATION_PADDING,
    MIN_GENERATION_PADDING,
};
pub use trajectory::{NormalKind, Trajectory, TrajectoryContext, TrajectorySample};
pub use wave::Wave;
