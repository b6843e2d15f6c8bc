//! Error types for dispatch and selection operations.

use thiserror::Error;

/// Errors raised by signals, canvases and selection tools.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Disconnecting a slot that was never connected (or already removed)
    #[error("slot {0} is not connected")]
    SlotNotFound(u64),

    /// A tool was configured with a button that cannot start a drag
    #[error("invalid button for a drag gesture: {0}")]
    InvalidButton(String),

    /// Unknown modifier key name
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),

    /// Unknown line style
    #[error("invalid line style: {0}")]
    InvalidLineStyle(String),

    /// Unparsable color
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The canvas (or another weakly held object) no longer exists
    #[error("reference to {what} has been deleted")]
    ReferenceDeleted { what: &'static str },

    /// A synthesized gesture needs at least one position
    #[error("gesture needs at least one position")]
    EmptyGesture,

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

impl CanvasError {
    /// Shorthand for a deleted canvas reference.
    pub(crate) fn canvas_deleted() -> Self {
        CanvasError::ReferenceDeleted { what: "canvas" }
    }

    /// Returns true if this error signals a deleted reference
    pub fn is_reference_deleted(&self) -> bool {
        matches!(self, CanvasError::ReferenceDeleted { .. })
    }
}
