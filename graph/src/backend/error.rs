//! Backend error types.

use thiserror::Error;

/// Errors that can occur in backend operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Failed to create a texture.
    #[error("failed to create texture '{name}': {reason}")]
    TextureCreationFailed { name: String, reason: String },
    /// Failed to create renderer lists.
    #[error("failed to create renderer lists: {0}")]
    RendererListCreationFailed(String),
    /// Out of GPU memory.
    #[error("out of GPU memory")]
    OutOfMemory,
}
