//! Guillochage IO
//!
//! Everything that touches files:
//! - [`project`]: the JSON project format
//! - [`history`]: bounded undo/redo over project snapshots
//! - [`svg`] and [`dxf`]: vector exporters for rendered segments

pub mod dxf;
pub mod error;
pub mod history;
pub mod project;
pub mod svg;

pub use dxf::{hex_to_aci, DxfExporter, DxfOptions, OUTLINE_LAYER, PATTERN_LAYER};
pub use error::{
    ExportError, ExportResult, IoError, IoResult, ProjectError, ProjectResult,
};
pub use history::{ProjectHistory, MAX_HISTORY_DEPTH};
pub use project::{ProjectFile, PROJECT_EXTENSION, PROJECT_FORMAT_VERSION};
pub use svg::{SvgExporter, SvgOptions};
