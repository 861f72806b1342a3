//! Error types for the core crate.
//!
//! Layer and line editing is the only fallible surface here: the geometry
//! types themselves never fail.

use thiserror::Error;

/// Errors raised by layer and line editing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayerError {
    /// The layer is locked and refuses edits.
    #[error("Layer '{0}' is locked")]
    Locked(String),

    /// A line index does not exist in the layer.
    #[error("Line index {index} out of range (layer has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// A layer index does not exist in the stack.
    #[error("Layer index {index} out of range (stack has {len} layers)")]
    LayerOutOfRange { index: usize, len: usize },

    /// There is nothing in the clipboard to paste.
    #[error("Clipboard is empty")]
    EmptyClipboard,
}

/// Result type alias for layer operations.
pub type LayerResult<T> = Result<T, LayerError>;
