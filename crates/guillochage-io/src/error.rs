//! Error types for project files and exporters.

use thiserror::Error;

/// Errors raised while reading or writing project files.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The file was written by an incompatible format version.
    #[error("Unsupported project version: {0}")]
    UnsupportedVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the SVG and DXF exporters.
#[derive(Error, Debug)]
pub enum ExportError {
    /// An export option is out of range.
    #[error("Invalid export option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error of this crate.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
pub type ExportResult<T> = Result<T, ExportError>;
pub type IoResult<T> = Result<T, IoError>;
