//! # Guillochage
//!
//! Generates decorative guilloché line patterns: layers of parametrized
//! lines (a wave offset along a trajectory) clipped to a workpiece outline,
//! exported as SVG or DXF.
//!
//! ## Architecture
//!
//! Guillochage is organized as a workspace with multiple crates:
//!
//! 1. **guillochage-core** - Shapes, parameter sets, layers and render segments
//! 2. **guillochage-engine** - Trajectories, waves, sampling and clipping
//! 3. **guillochage-io** - Project files, undo history, SVG and DXF export
//! 4. **guillochage-settings** - Configuration in JSON or TOML
//! 5. **guillochage** - Command line front-end tying them together

pub mod cli;

pub use guillochage_core::{
    keys, Layer, LayerStack, LineParams, ParameterSet, RenderSegment, Resolution,
    ShapeDescriptor, ShapeKind,
};
pub use guillochage_engine::{CurveRegistry, EngineOptions, GeometryEngine};
pub use guillochage_io::{DxfExporter, ProjectFile, SvgExporter};
pub use guillochage_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr
/// - RUST_LOG environment variable support
/// - INFO by default, DEBUG when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
