//! Profiling support via Tracy.
//!
//! Re-exports the CPU profiling macros of [`framegraph_core::profiling`].
//! Enable them with the `profiling` feature:
//!
//! ```toml
//! [dependencies]
//! framegraph = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! The render graph opens these scopes on its own:
//!
//! - `RenderGraph::execute` around a whole frame
//! - `RenderGraph::compile` around lifetime computation and renderer list creation
//! - one scope per pass, named after its profiling tag or, without one, the pass name
//!
//! A `RenderGraph passes` plot tracks the pass count of each frame, and an
//! aborted frame leaves a message in Tracy's log.

pub use framegraph_core::profiling::*;
