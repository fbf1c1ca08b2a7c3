//! Render graph infrastructure.
//!
//! A frame is built in two phases:
//!
//! 1. **Declaration.** Passes are added with
//!    [`RenderGraph::add_render_pass`]. Each pass declares the textures,
//!    buffers and renderer lists it uses through a [`RenderGraphBuilder`] and
//!    installs a render function.
//! 2. **Execution.** [`RenderGraph::execute`] computes resource lifetimes,
//!    creates all renderer lists in one batch, then runs the passes strictly
//!    in declaration order. Around every render function the graph allocates
//!    the resources whose lifetime starts at that pass, binds render targets
//!    and global textures, and releases the resources whose lifetime ends.
//!
//! Every frame ends with a teardown that returns pass records to the pool,
//! destroys transient backings and invalidates the frame's handles, whether
//! execution succeeded or not.
//!
//! # Example
//!
//! ```
//! use framegraph::backend::DummyBackend;
//! use framegraph::graph::{RenderGraph, RenderGraphConfig, RenderGraphExecuteParams};
//! use framegraph::types::{TextureDesc, TextureFormat};
//!
//! let backend = DummyBackend::new();
//! let mut cmd = backend.command_buffer();
//! let mut graph = RenderGraph::new(backend, RenderGraphConfig::default()).unwrap();
//!
//! let color = graph
//!     .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba8Unorm).with_name("color"))
//!     .unwrap();
//! {
//!     let mut pass = graph.add_render_pass::<()>("opaque").unwrap();
//!     pass.use_color_buffer(color, 0).unwrap();
//!     pass.set_render_func(|_, ctx| {
//!         ctx.cmd.record("draw opaque");
//!         Ok(())
//!     });
//! }
//!
//! graph
//!     .execute(&mut cmd, &RenderGraphExecuteParams::new(1280, 720))
//!     .unwrap();
//! ```

mod builder;
mod context;
mod debug;
mod pass;
mod registry;
mod resource;

pub use builder::RenderGraphBuilder;
pub use context::{DefaultResources, RenderGraphContext};
pub use debug::{RenderGraphDebugParams, RenderGraphLogger};
pub use pass::{
    BufferAccess, DepthAccess, MAX_COLOR_ATTACHMENTS, PassInfo, PassRecord, RenderFunc,
    RenderGraphPass, TextureUsage,
};
pub use registry::{LifetimeWindow, RegistryStats, ResourceRegistry};
pub use resource::{BufferHandle, RendererListHandle, ResourceHandle, ResourceKind, TextureHandle};

use framegraph_core::pool::{ObjectPool, Poolable, Pooled};
use framegraph_core::profiling::{
    profile_message, profile_plot, profile_scope, profile_scope_dynamic,
};

use crate::backend::GraphBackend;
use crate::error::GraphError;
use crate::types::{BufferDesc, ClearValue, TextureDesc};

/// Phase of the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphState {
    /// No frame in progress.
    #[default]
    Idle,
    /// Passes and resources are being declared.
    Declaring,
    /// Passes are running.
    Executing,
}

/// Construction-time settings of a render graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderGraphConfig {
    /// Whether MSAA-enabled textures may use more than one sample.
    pub supports_msaa: bool,
    /// Sample count used when a frame does not override it.
    pub initial_msaa_samples: u32,
}

impl Default for RenderGraphConfig {
    fn default() -> Self {
        Self {
            supports_msaa: true,
            initial_msaa_samples: 1,
        }
    }
}

impl RenderGraphConfig {
    /// Enable or disable multisampling support.
    pub fn with_msaa_support(mut self, supported: bool) -> Self {
        self.supports_msaa = supported;
        self
    }

    /// Set the default sample count.
    pub fn with_initial_msaa_samples(mut self, samples: u32) -> Self {
        self.initial_msaa_samples = samples;
        self
    }
}

/// Per-frame execution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderGraphExecuteParams {
    /// Width that relative texture sizes resolve against.
    pub rendering_width: u32,
    /// Height that relative texture sizes resolve against.
    pub rendering_height: u32,
    /// Sample count override for this frame.
    pub msaa_samples: Option<u32>,
}

impl RenderGraphExecuteParams {
    /// Create parameters for the given rendering size.
    pub fn new(rendering_width: u32, rendering_height: u32) -> Self {
        Self {
            rendering_width,
            rendering_height,
            msaa_samples: None,
        }
    }

    /// Override the sample count for this frame.
    pub fn with_msaa_samples(mut self, samples: u32) -> Self {
        self.msaa_samples = Some(samples);
        self
    }
}

/// Scratch storage reused by every execute.
#[derive(Debug, Default)]
struct FrameScratch {
    renderer_lists: Vec<RendererListHandle>,
}

impl Poolable for FrameScratch {
    fn new_empty() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.renderer_lists.clear();
    }
}

const DEFAULT_TEXTURES: [(&str, ClearValue); 4] = [
    ("DefaultBlack", ClearValue::BLACK),
    ("DefaultWhite", ClearValue::WHITE),
    ("DefaultClear", ClearValue::TRANSPARENT),
    ("DefaultMagenta", ClearValue::MAGENTA),
];

/// Backing objects of the constant textures, alive for the graph's lifetime.
struct DefaultTextures<B: GraphBackend> {
    black: B::Texture,
    white: B::Texture,
    clear: B::Texture,
    magenta: B::Texture,
}

impl<B: GraphBackend> DefaultTextures<B> {
    /// Create all four textures, or none: on failure the ones already
    /// created are destroyed before the error is returned.
    fn create(backend: &mut B) -> Result<Self, GraphError> {
        let mut created = Vec::with_capacity(DEFAULT_TEXTURES.len());
        for (name, value) in DEFAULT_TEXTURES {
            match backend.create_constant_texture(name, value) {
                Ok(texture) => created.push(texture),
                Err(err) => {
                    log::error!("Failed to create default texture '{}': {}", name, err);
                    for texture in created {
                        backend.destroy_texture(texture);
                    }
                    return Err(err.into());
                }
            }
        }
        let Ok([black, white, clear, magenta]) = <[B::Texture; 4]>::try_from(created) else {
            unreachable!("one backing per default texture");
        };
        Ok(Self {
            black,
            white,
            clear,
            magenta,
        })
    }

    fn import(&self, registry: &mut ResourceRegistry<B>) -> DefaultResources {
        DefaultResources {
            black_texture: registry
                .import_texture(self.black.clone(), TextureDesc::default().with_name("DefaultBlack")),
            white_texture: registry
                .import_texture(self.white.clone(), TextureDesc::default().with_name("DefaultWhite")),
            clear_texture: registry
                .import_texture(self.clear.clone(), TextureDesc::default().with_name("DefaultClear")),
            magenta_texture: registry.import_texture(
                self.magenta.clone(),
                TextureDesc::default().with_name("DefaultMagenta"),
            ),
        }
    }

    fn destroy(self, backend: &mut B) {
        backend.destroy_texture(self.black);
        backend.destroy_texture(self.white);
        backend.destroy_texture(self.clear);
        backend.destroy_texture(self.magenta);
    }
}

/// Render graph: declares a frame of passes and executes it.
///
/// The graph owns the backend (through its [`ResourceRegistry`]), an
/// [`ObjectPool`] for pass records and scratch arrays, and the debug
/// parameters. It is single-threaded and executes passes strictly in
/// declaration order.
pub struct RenderGraph<B: GraphBackend> {
    state: GraphState,
    config: RenderGraphConfig,
    debug: RenderGraphDebugParams,
    logger: RenderGraphLogger,
    registry: ResourceRegistry<B>,
    pool: ObjectPool,
    passes: Vec<Box<dyn PassRecord<B>>>,
    frame_scratch: Pooled<FrameScratch>,
    default_textures: Option<DefaultTextures<B>>,
    default_resources: DefaultResources,
    frame_index: u64,
}

impl<B: GraphBackend> RenderGraph<B> {
    /// Create a render graph on top of a backend.
    ///
    /// Creates the constant default textures through the backend.
    pub fn new(mut backend: B, config: RenderGraphConfig) -> Result<Self, GraphError> {
        if config.initial_msaa_samples == 0 {
            return Err(GraphError::InvalidParameter(
                "initial MSAA sample count must be at least 1".to_string(),
            ));
        }
        let default_textures = DefaultTextures::create(&mut backend)?;
        log::debug!("Render graph created on {}", backend.name());

        Ok(Self {
            state: GraphState::Idle,
            config,
            debug: RenderGraphDebugParams::default(),
            logger: RenderGraphLogger::new(),
            registry: ResourceRegistry::new(backend),
            pool: ObjectPool::new(),
            passes: Vec::new(),
            frame_scratch: Pooled::default(),
            default_textures: Some(default_textures),
            default_resources: DefaultResources::default(),
            frame_index: 0,
        })
    }

    /// Phase of the current frame.
    pub fn state(&self) -> GraphState {
        self.state
    }

    /// Construction settings.
    pub fn config(&self) -> &RenderGraphConfig {
        &self.config
    }

    /// Debug switches.
    pub fn debug_params(&self) -> &RenderGraphDebugParams {
        &self.debug
    }

    /// Debug switches, for changing them between frames.
    pub fn debug_params_mut(&mut self) -> &mut RenderGraphDebugParams {
        &mut self.debug
    }

    /// Get the backend.
    pub fn backend(&self) -> &B {
        self.registry.backend()
    }

    /// Get the backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        self.registry.backend_mut()
    }

    /// Resources of the current frame.
    pub fn resources(&self) -> &ResourceRegistry<B> {
        &self.registry
    }

    /// Object pool used for pass records, pass data and scratch arrays.
    pub fn pool(&self) -> &ObjectPool {
        &self.pool
    }

    /// Number of passes declared in the current frame.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Declared usage of the passes of the current frame.
    pub fn passes(&self) -> impl Iterator<Item = &PassInfo> + '_ {
        self.passes.iter().map(|pass| pass.info())
    }

    /// Number of frames executed so far, failed ones included.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    fn begin_declaring(&mut self, operation: &'static str) -> Result<(), GraphError> {
        match self.state {
            GraphState::Declaring => Ok(()),
            GraphState::Executing => Err(GraphError::InvalidState {
                operation,
                state: self.state,
            }),
            GraphState::Idle => {
                let Some(default_textures) = self.default_textures.as_ref() else {
                    return Err(GraphError::InvalidState {
                        operation,
                        state: self.state,
                    });
                };
                self.default_resources = default_textures.import(&mut self.registry);
                self.state = GraphState::Declaring;
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Declaration
    // ------------------------------------------------------------------

    /// Declare a pass with a data payload of type `D`.
    ///
    /// The returned builder appends the pass when dropped.
    pub fn add_render_pass<D: Default + 'static>(
        &mut self,
        name: &str,
    ) -> Result<RenderGraphBuilder<'_, D, B>, GraphError> {
        self.begin_declaring("add a render pass")?;
        let index = self.passes.len();
        let mut pass = self.pool.checkout::<RenderGraphPass<D, B>>();
        let data = self.pool.checkout::<D>();
        pass.begin(name, index, data);
        Ok(RenderGraphBuilder::new(
            pass,
            &mut self.passes,
            &mut self.registry,
        ))
    }

    /// Declare a transient texture.
    pub fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle, GraphError> {
        self.begin_declaring("create a texture")?;
        Ok(self.registry.create_texture(desc))
    }

    /// Declare a transient buffer.
    pub fn create_buffer(&mut self, desc: BufferDesc) -> Result<BufferHandle, GraphError> {
        self.begin_declaring("create a buffer")?;
        Ok(self.registry.create_buffer(desc))
    }

    /// Declare a renderer list.
    pub fn create_renderer_list(
        &mut self,
        desc: B::RendererListDesc,
    ) -> Result<RendererListHandle, GraphError> {
        self.begin_declaring("create a renderer list")?;
        Ok(self.registry.create_renderer_list(desc))
    }

    /// Import a caller-owned texture for this frame.
    pub fn import_texture(
        &mut self,
        texture: B::Texture,
        desc: TextureDesc,
    ) -> Result<TextureHandle, GraphError> {
        self.begin_declaring("import a texture")?;
        Ok(self.registry.import_texture(texture, desc))
    }

    /// Import the swapchain image for this frame.
    pub fn import_backbuffer(&mut self, texture: B::Texture) -> Result<TextureHandle, GraphError> {
        self.begin_declaring("import the backbuffer")?;
        Ok(self.registry.import_backbuffer(texture))
    }

    /// Import a caller-owned buffer for this frame.
    pub fn import_buffer(
        &mut self,
        buffer: B::Buffer,
        desc: BufferDesc,
    ) -> Result<BufferHandle, GraphError> {
        self.begin_declaring("import a buffer")?;
        Ok(self.registry.import_buffer(buffer, desc))
    }

    /// Constant textures imported into the current frame.
    pub fn default_resources(&mut self) -> Result<DefaultResources, GraphError> {
        self.begin_declaring("access default resources")?;
        Ok(self.default_resources)
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Execute the declared passes and end the frame.
    ///
    /// On the first error the remaining render functions are skipped, the
    /// frame is torn down and the error is returned. The graph is `Idle`
    /// afterwards in both cases and ready for the next frame.
    pub fn execute(
        &mut self,
        cmd: &mut B::CommandBuffer,
        params: &RenderGraphExecuteParams,
    ) -> Result<(), GraphError> {
        profile_scope!("RenderGraph::execute");

        self.begin_declaring("execute")?;
        self.state = GraphState::Executing;
        self.frame_index += 1;
        self.logger.begin(self.debug.wants_log());

        let result = self
            .begin_execute(params)
            .and_then(|()| self.compile())
            .and_then(|()| self.execute_passes(cmd));
        if let Err(err) = &result {
            log::error!("Render graph execution aborted: {}", err);
            profile_message!("RenderGraph: frame aborted");
            // Records of passes that never ran are still queued.
            for pass in self.passes.drain(..) {
                pass.release(&mut self.pool);
            }
        }

        self.end_frame();
        result
    }

    fn begin_execute(&mut self, params: &RenderGraphExecuteParams) -> Result<(), GraphError> {
        if params.rendering_width == 0 || params.rendering_height == 0 {
            return Err(GraphError::InvalidParameter(format!(
                "rendering size must be non-zero, got {}x{}",
                params.rendering_width, params.rendering_height
            )));
        }
        let msaa_samples = if self.config.supports_msaa {
            params
                .msaa_samples
                .unwrap_or(self.config.initial_msaa_samples)
                .max(1)
        } else {
            1
        };
        self.registry
            .begin_execute(params.rendering_width, params.rendering_height, msaa_samples);
        Ok(())
    }

    fn compile(&mut self) -> Result<(), GraphError> {
        profile_scope!("RenderGraph::compile");
        profile_plot!("RenderGraph passes", self.passes.len());

        self.registry.reset_lifetimes();
        let scratch = self.frame_scratch.activate();
        for pass in &self.passes {
            let info = pass.info();
            self.registry.record_pass(info)?;
            scratch
                .renderer_lists
                .extend_from_slice(info.renderer_lists());
        }
        self.registry
            .create_renderer_lists(&scratch.renderer_lists)?;

        if self.logger.is_enabled() && self.debug.log_frame_information {
            self.logger
                .log_line(format_args!("==== Render Graph Frame Information Log ===="));
            for info in self.passes.iter().map(|pass| pass.info()) {
                self.logger.log_line(format_args!(
                    "[{}] {}{}",
                    info.index(),
                    info.name(),
                    if info.async_compute() { " (async compute)" } else { "" }
                ));
            }
        }
        Ok(())
    }

    fn execute_passes(&mut self, cmd: &mut B::CommandBuffer) -> Result<(), GraphError> {
        let mut passes = std::mem::take(&mut self.passes);
        let mut result = Ok(());
        let mut remaining = passes.drain(..);
        for pass in remaining.by_ref() {
            let outcome = self.execute_pass(pass.as_ref(), cmd);
            pass.release(&mut self.pool);
            if let Err(err) = outcome {
                result = Err(err);
                break;
            }
        }
        for pass in remaining {
            pass.release(&mut self.pool);
        }
        self.passes = passes;
        result
    }

    fn execute_pass(
        &mut self,
        pass: &dyn PassRecord<B>,
        cmd: &mut B::CommandBuffer,
    ) -> Result<(), GraphError> {
        let info = pass.info();
        profile_scope_dynamic!(info.profiling_name());
        log::debug!("Executing pass {} '{}'", info.index(), info.name());

        let log_passes = self.debug.log_frame_information;
        if log_passes {
            self.logger
                .log_line(format_args!("[{}][{}]", info.index(), info.name()));
            self.logger.inc_indent();
        }

        let result = self
            .registry
            .create_and_clear_for_pass(info, cmd, &self.debug, &mut self.logger)
            .and_then(|()| self.run_pass(pass, cmd));
        if let Err(err) = &result {
            log::error!("Pass '{}' failed: {}", info.name(), err);
        }

        if self.debug.unbind_global_textures {
            self.registry.unbind_global_textures(info, cmd);
        }
        self.pool.release_all_temp_arrays();
        self.registry
            .release_for_pass(info, cmd, &self.debug, &mut self.logger);

        if log_passes {
            self.logger.dec_indent();
        }
        result
    }

    fn run_pass(
        &mut self,
        pass: &dyn PassRecord<B>,
        cmd: &mut B::CommandBuffer,
    ) -> Result<(), GraphError> {
        let info = pass.info();
        self.bind_render_targets(info, cmd)?;
        self.registry.bind_global_textures_for_pass(info, cmd)?;

        let mut ctx = RenderGraphContext::new(
            cmd,
            &mut self.pool,
            &self.registry,
            &self.default_resources,
        );
        pass.execute(&mut ctx)
    }

    fn bind_render_targets(
        &mut self,
        info: &PassInfo,
        cmd: &mut B::CommandBuffer,
    ) -> Result<(), GraphError> {
        if !info.has_render_targets() {
            return Ok(());
        }
        info.check_render_targets()
            .map_err(|reason| GraphError::InvalidMrtSetup {
                pass: info.name().to_string(),
                reason,
            })?;

        let color_count = info.max_color_index().map_or(0, |max| max + 1);
        let colors = self.pool.temp_array::<B::Texture>(color_count);
        for index in 0..color_count {
            if let Some(handle) = info.color_attachment(index) {
                colors.push(self.registry.texture(handle)?.clone());
            }
        }
        let depth = match info.depth_attachment() {
            Some((handle, _)) => Some(self.registry.texture(handle)?.clone()),
            None => None,
        };
        self.registry.set_render_targets(cmd, colors, depth.as_ref());
        Ok(())
    }

    fn end_frame(&mut self) {
        if self.debug.log_resources {
            self.registry.log_resources(&mut self.logger);
        }
        self.passes.clear();
        self.registry.clear();
        self.default_resources = DefaultResources::default();
        self.frame_scratch.release();
        self.pool.release_all_temp_arrays();
        self.logger.flush();
        self.debug.reset_one_shot();
        self.state = GraphState::Idle;
    }

    /// Release every backend object owned by the graph.
    ///
    /// Any frame in declaration is dropped. Called automatically on drop.
    pub fn cleanup(&mut self) {
        for pass in self.passes.drain(..) {
            pass.release(&mut self.pool);
        }
        self.registry.cleanup();
        if let Some(default_textures) = self.default_textures.take() {
            default_textures.destroy(self.registry.backend_mut());
        }
        self.default_resources = DefaultResources::default();
        self.frame_scratch.release();
        self.pool.clear();
        self.state = GraphState::Idle;
    }
}

impl<B: GraphBackend> Drop for RenderGraph<B> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, BackendEvent, DummyBackend};
    use crate::types::TextureFormat;

    fn graph() -> RenderGraph<DummyBackend> {
        RenderGraph::new(DummyBackend::new(), RenderGraphConfig::default()).unwrap()
    }

    #[test]
    fn test_new_creates_default_textures() {
        let graph = graph();
        let constants = graph
            .backend()
            .events()
            .into_iter()
            .filter(|event| matches!(event, BackendEvent::CreateConstantTexture { .. }))
            .count();
        assert_eq!(constants, 4);
        assert_eq!(graph.state(), GraphState::Idle);
    }

    #[test]
    fn test_failed_new_destroys_created_default_textures() {
        let mut backend = DummyBackend::new();
        backend.set_constant_texture_limit(Some(2));
        let log = backend.command_buffer();

        let result = RenderGraph::new(backend, RenderGraphConfig::default());
        assert!(matches!(
            result,
            Err(GraphError::Backend(BackendError::TextureCreationFailed { ref name, .. }))
                if name == "DefaultClear"
        ));

        let events = log.events();
        let created: Vec<u64> = events
            .iter()
            .filter_map(|event| match event {
                BackendEvent::CreateConstantTexture { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        let destroyed: Vec<u64> = events
            .iter()
            .filter_map(|event| match event {
                BackendEvent::DestroyTexture { id } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(created.len(), 2);
        assert_eq!(created, destroyed);
    }

    #[test]
    fn test_declaration_moves_to_declaring() {
        let mut graph = graph();
        let defaults = graph.default_resources().unwrap();
        assert_eq!(graph.state(), GraphState::Declaring);
        assert!(graph.resources().is_texture_imported(defaults.black_texture).unwrap());
        assert_eq!(graph.resources().texture_count(), 4);
    }

    #[test]
    fn test_declaration_rejected_while_executing() {
        let mut graph = graph();
        graph.state = GraphState::Executing;
        let err = graph
            .create_texture(TextureDesc::new_2d(4, 4, TextureFormat::R8Unorm))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidState {
                operation: "create a texture",
                state: GraphState::Executing,
            }
        ));
        graph.state = GraphState::Idle;
    }

    #[test]
    fn test_zero_rendering_size_is_rejected() {
        let mut graph = graph();
        let mut cmd = graph.backend().command_buffer();
        let err = graph
            .execute(&mut cmd, &RenderGraphExecuteParams::new(0, 720))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidParameter(_)));
        assert_eq!(graph.state(), GraphState::Idle);
    }

    #[test]
    fn test_missing_render_func() {
        let mut graph = graph();
        let mut cmd = graph.backend().command_buffer();
        drop(graph.add_render_pass::<()>("empty").unwrap());

        let err = graph
            .execute(&mut cmd, &RenderGraphExecuteParams::new(64, 64))
            .unwrap_err();
        assert!(matches!(err, GraphError::MissingRenderFunc { ref pass } if pass == "empty"));
        assert_eq!(graph.pool().outstanding(), 0);
    }

    #[test]
    fn test_msaa_disabled_forces_single_sample() {
        let backend = DummyBackend::new();
        let mut cmd = backend.command_buffer();
        let config = RenderGraphConfig::default()
            .with_msaa_support(false)
            .with_initial_msaa_samples(4);
        let mut graph = RenderGraph::new(backend, config).unwrap();

        let color = graph
            .create_texture(TextureDesc::scaled(1.0, 1.0, TextureFormat::Rgba8Unorm).with_msaa(true))
            .unwrap();
        {
            let mut pass = graph.add_render_pass::<()>("msaa").unwrap();
            pass.use_color_buffer(color, 0).unwrap();
            pass.set_render_func(|_, _| Ok(()));
        }
        graph
            .execute(&mut cmd, &RenderGraphExecuteParams::new(32, 16).with_msaa_samples(8))
            .unwrap();

        let samples: Vec<u32> = graph
            .backend()
            .events()
            .into_iter()
            .filter_map(|event| match event {
                BackendEvent::CreateTexture { desc, .. } => Some(desc.sample_count),
                _ => None,
            })
            .collect();
        assert_eq!(samples, vec![1]);
    }

    #[test]
    fn test_one_shot_log_flags_reset_after_frame() {
        let mut graph = graph();
        let mut cmd = graph.backend().command_buffer();
        graph.debug_params_mut().log_frame_information = true;
        graph.debug_params_mut().log_resources = true;
        graph.debug_params_mut().tag_resource_names = true;

        graph
            .execute(&mut cmd, &RenderGraphExecuteParams::new(8, 8))
            .unwrap();

        assert!(!graph.debug_params().log_frame_information);
        assert!(!graph.debug_params().log_resources);
        assert!(graph.debug_params().tag_resource_names);
    }

    #[test]
    fn test_cleanup_destroys_default_textures() {
        let mut graph = graph();
        graph.cleanup();
        assert_eq!(graph.backend().live_texture_count(), 0);
        assert!(graph.create_texture(TextureDesc::default()).is_err());
    }
}
