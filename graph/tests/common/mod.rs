//! Shared helpers for the render graph integration tests.
//!
//! Every test drives a [`RenderGraph`] on top of the recording
//! [`DummyBackend`] and asserts on the backend's event log.

#![allow(dead_code)]

use framegraph::backend::{BackendEvent, DummyBackend, DummyCommandBuffer};
use framegraph::graph::{
    RenderGraph, RenderGraphBuilder, RenderGraphConfig, RenderGraphExecuteParams,
};
use framegraph::{GraphError, TextureDesc, TextureFormat};

/// Rendering size used by [`TestContext::execute`].
pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 240;

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Data payload of the test passes: the label a pass records when it runs.
#[derive(Debug, Default)]
pub struct PassData {
    pub label: String,
}

/// A render graph, its command buffer and helpers to declare labeled passes.
pub struct TestContext {
    pub graph: RenderGraph<DummyBackend>,
    pub cmd: DummyCommandBuffer,
}

impl TestContext {
    /// Graph with the default configuration and an empty event log.
    pub fn new() -> Self {
        Self::with_backend(DummyBackend::new())
    }

    /// Graph on top of a prepared backend.
    pub fn with_backend(backend: DummyBackend) -> Self {
        init_logging();
        let cmd = backend.command_buffer();
        let graph = RenderGraph::new(backend, RenderGraphConfig::default())
            .expect("dummy backend creates default textures");
        graph.backend().clear_events();
        Self { graph, cmd }
    }

    /// Execute the declared frame at the default rendering size.
    pub fn execute(&mut self) -> Result<(), GraphError> {
        self.graph
            .execute(&mut self.cmd, &RenderGraphExecuteParams::new(WIDTH, HEIGHT))
    }

    /// Declare a pass whose render function records its name as a command.
    ///
    /// Returns the pass index.
    pub fn add_pass<F>(&mut self, name: &str, declare: F) -> Result<usize, GraphError>
    where
        F: FnOnce(&mut RenderGraphBuilder<'_, PassData, DummyBackend>) -> Result<(), GraphError>,
    {
        let mut pass = self.graph.add_render_pass::<PassData>(name)?;
        let data = pass.data();
        data.label.clear();
        data.label.push_str(name);
        declare(&mut pass)?;
        pass.set_render_func(|data, ctx| {
            ctx.cmd.record(data.label.clone());
            Ok(())
        });
        Ok(pass.pass_index())
    }

    /// Snapshot of the backend event log.
    pub fn events(&self) -> Vec<BackendEvent> {
        self.graph.backend().events()
    }

    /// Commands recorded by render functions, in order.
    pub fn commands(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                BackendEvent::Command(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    /// Number of `CreateTexture` events.
    pub fn textures_created(&self) -> usize {
        self.graph.backend().textures_created()
    }
}

/// Full-resolution color target descriptor.
pub fn color_desc(name: &str) -> TextureDesc {
    TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba8Unorm).with_name(name)
}

/// Full-resolution depth target descriptor.
pub fn depth_desc(name: &str) -> TextureDesc {
    TextureDesc::scaled(1.0, 1.0, TextureFormat::Depth32Float).with_name(name)
}

/// Id of the texture the backend created for `name`.
pub fn created_texture_id(events: &[BackendEvent], name: &str) -> u64 {
    events
        .iter()
        .find_map(|event| match event {
            BackendEvent::CreateTexture { id, name: created, .. } if created == name => Some(*id),
            _ => None,
        })
        .unwrap_or_else(|| panic!("texture '{name}' was never created"))
}
