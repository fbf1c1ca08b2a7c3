//! Render graph error types.

use thiserror::Error;

use crate::backend::BackendError;
use crate::graph::GraphState;

/// Error type returned by pass render functions.
pub type PassError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by pass render functions.
pub type PassResult = Result<(), PassError>;

/// Errors that can occur while declaring or executing a render graph.
///
/// Every error raised during `execute` aborts the frame: remaining pass
/// callbacks are skipped and full teardown runs before the error is returned.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A handle from another frame, or one that was never issued, was dereferenced.
    #[error("invalid {kind} handle (index {index}, generation {generation})")]
    InvalidHandle {
        kind: &'static str,
        index: u32,
        generation: u32,
    },
    /// A transient resource was accessed outside its lifetime window.
    #[error("{kind} '{name}' has no backing allocation at this point of the frame")]
    ResourceNotAllocated { kind: &'static str, name: String },
    /// A pass was declared without a render function.
    #[error("pass '{pass}' has no render function")]
    MissingRenderFunc { pass: String },
    /// The color/depth attachments of a pass cannot be bound.
    #[error("invalid MRT setup in pass '{pass}': {reason}")]
    InvalidMrtSetup { pass: String, reason: &'static str },
    /// A color attachment index exceeds the supported maximum.
    #[error("color attachment index {index} out of range (max {max})")]
    ColorAttachmentOutOfRange { index: usize, max: usize },
    /// An operation was called in the wrong phase of the frame.
    #[error("cannot {operation} while the render graph is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: GraphState,
    },
    /// An invalid parameter was provided.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A pass render function returned an error.
    #[error("pass '{pass}' failed: {source}")]
    PassFailed {
        pass: String,
        #[source]
        source: PassError,
    },
    /// The backend failed to create a resource.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::MissingRenderFunc {
            pass: "gbuffer".to_string(),
        };
        assert_eq!(err.to_string(), "pass 'gbuffer' has no render function");

        let err = GraphError::InvalidMrtSetup {
            pass: "lighting".to_string(),
            reason: "color attachment indices have gaps",
        };
        assert_eq!(
            err.to_string(),
            "invalid MRT setup in pass 'lighting': color attachment indices have gaps"
        );
    }

    #[test]
    fn test_backend_error_converts() {
        let err: GraphError = BackendError::OutOfMemory.into();
        assert!(matches!(err, GraphError::Backend(BackendError::OutOfMemory)));
        assert_eq!(err.to_string(), "out of GPU memory");
    }

    #[test]
    fn test_pass_failed_keeps_source() {
        use std::error::Error as _;

        let err = GraphError::PassFailed {
            pass: "post".to_string(),
            source: "shader missing".into(),
        };
        assert_eq!(err.to_string(), "pass 'post' failed: shader missing");
        assert_eq!(err.source().unwrap().to_string(), "shader missing");
    }
}
