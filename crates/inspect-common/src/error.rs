//! Error types for the inspection-overlay workspace.

use thiserror::Error;

/// Result type alias using InspectError.
pub type InspectResult<T> = Result<T, InspectError>;

/// Primary error type for inspection and overlay operations.
#[derive(Debug, Error)]
pub enum InspectError {
    // === Renderer precondition errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    // === Image I/O errors ===
    #[error("Image I/O failed: {0}")]
    ImageIo(String),

    // === Engine boundary errors ===
    #[error("Stream not found: {0}")]
    StreamNotFound(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Workspace error: {0}")]
    WorkspaceError(String),
}

// Conversion from common error types
impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> Self {
        InspectError::ImageIo(err.to_string())
    }
}

impl From<serde_json::Error> for InspectError {
    fn from(err: serde_json::Error) -> Self {
        InspectError::WorkspaceError(format!("JSON error: {}", err))
    }
}
