//! Execution context handed to pass render functions.

use framegraph_core::pool::ObjectPool;

use crate::backend::GraphBackend;
use crate::error::GraphError;
use crate::types::TextureDesc;

use super::registry::ResourceRegistry;
use super::resource::{BufferHandle, RendererListHandle, TextureHandle};

/// Handles of the constant textures imported into every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultResources {
    /// Opaque black 1x1 texture.
    pub black_texture: TextureHandle,
    /// Opaque white 1x1 texture.
    pub white_texture: TextureHandle,
    /// Transparent black 1x1 texture.
    pub clear_texture: TextureHandle,
    /// Opaque magenta 1x1 texture.
    pub magenta_texture: TextureHandle,
}

impl Default for DefaultResources {
    fn default() -> Self {
        Self {
            black_texture: TextureHandle::INVALID,
            white_texture: TextureHandle::INVALID,
            clear_texture: TextureHandle::INVALID,
            magenta_texture: TextureHandle::INVALID,
        }
    }
}

/// Everything a render function may touch while its pass executes.
pub struct RenderGraphContext<'a, B: GraphBackend> {
    /// Command buffer to record into.
    pub cmd: &'a mut B::CommandBuffer,
    /// Pool for per-pass scratch arrays. Arrays are reclaimed after the pass.
    pub pool: &'a mut ObjectPool,
    resources: &'a ResourceRegistry<B>,
    default_resources: &'a DefaultResources,
}

impl<'a, B: GraphBackend> RenderGraphContext<'a, B> {
    pub(crate) fn new(
        cmd: &'a mut B::CommandBuffer,
        pool: &'a mut ObjectPool,
        resources: &'a ResourceRegistry<B>,
        default_resources: &'a DefaultResources,
    ) -> Self {
        Self {
            cmd,
            pool,
            resources,
            default_resources,
        }
    }

    /// Backing texture of a handle.
    pub fn texture(&self, handle: TextureHandle) -> Result<&B::Texture, GraphError> {
        self.resources.texture(handle)
    }

    /// Descriptor of a texture.
    pub fn texture_desc(&self, handle: TextureHandle) -> Result<&TextureDesc, GraphError> {
        self.resources.texture_desc(handle)
    }

    /// Backing buffer of a handle.
    pub fn buffer(&self, handle: BufferHandle) -> Result<&B::Buffer, GraphError> {
        self.resources.buffer(handle)
    }

    /// Renderer list created for a handle.
    pub fn renderer_list(
        &self,
        handle: RendererListHandle,
    ) -> Result<&B::RendererList, GraphError> {
        self.resources.renderer_list(handle)
    }

    /// Constant textures of the current frame.
    pub fn default_resources(&self) -> &DefaultResources {
        self.default_resources
    }

    /// Resolved rendering size of the current frame.
    pub fn rendering_size(&self) -> (u32, u32) {
        self.resources.rendering_size()
    }

    /// MSAA sample count of the current frame.
    pub fn msaa_samples(&self) -> u32 {
        self.resources.msaa_samples()
    }
}
