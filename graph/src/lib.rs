//! # framegraph
//!
//! Render graph execution engine.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`RenderGraph`] - Declares a frame of render passes and executes them in order
//! - [`ResourceRegistry`] - Transient texture and buffer lifetimes with in-frame reuse
//! - [`GraphBackend`] - Trait for the GPU backend that allocates resources and records commands
//! - [`DummyBackend`] - Recording backend for tests and development
//!
//! Pass records, pass data and scratch arrays come from the
//! [`ObjectPool`](framegraph_core::pool::ObjectPool) of `framegraph-core`, so a
//! steady-state frame does not allocate them anew.
//!
//! ## Example
//!
//! ```ignore
//! use framegraph::{RenderGraph, RenderGraphConfig, RenderGraphExecuteParams};
//!
//! let mut graph = RenderGraph::new(backend, RenderGraphConfig::default())?;
//! let mut pass = graph.add_render_pass::<MyData>("opaque")?;
//! pass.use_color_buffer(color, 0)?;
//! pass.set_render_func(|data, ctx| draw(data, ctx.cmd));
//! drop(pass);
//! graph.execute(&mut cmd, &RenderGraphExecuteParams::new(1920, 1080))?;
//! ```

pub mod backend;
pub mod error;
pub mod graph;
pub mod profiling;
pub mod types;

// Re-export main types for convenience
pub use backend::{BackendError, DummyBackend, GraphBackend};
pub use error::{GraphError, PassError, PassResult};
pub use graph::{
    BufferAccess, BufferHandle, DefaultResources, DepthAccess, GraphState, RenderGraph,
    RenderGraphBuilder, RenderGraphConfig, RenderGraphContext, RenderGraphDebugParams,
    RenderGraphExecuteParams, RenderGraphLogger, RendererListHandle, ResourceRegistry,
    TextureHandle, TextureUsage,
};
pub use types::{
    BufferDesc, BufferUsage, ClearValue, ShaderSlot, TextureDesc, TextureFormat, TextureSize,
};

/// Render graph library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, framegraph_core::VERSION);
    }

    #[test]
    fn test_graph_starts_idle() {
        let graph = RenderGraph::new(DummyBackend::new(), RenderGraphConfig::default()).unwrap();
        assert_eq!(graph.state(), GraphState::Idle);
        assert_eq!(graph.pass_count(), 0);
        assert_eq!(graph.backend().name(), "Dummy Backend");
    }
}
