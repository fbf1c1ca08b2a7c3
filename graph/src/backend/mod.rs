//! GPU backend abstraction layer.
//!
//! The render graph never allocates GPU memory or encodes commands itself.
//! Everything that touches the device goes through [`GraphBackend`]:
//!
//! - Resource creation and destruction (textures, buffers, renderer lists)
//! - Clears and render-target binding, recorded into the backend's command buffer
//! - Global shader texture bindings
//!
//! # Available Backends
//!
//! - [`DummyBackend`]: in-memory backend that records every call, used for
//!   testing and development.

mod dummy;
mod error;

pub use dummy::{BackendEvent, DummyBackend, DummyBuffer, DummyCommandBuffer, DummyTexture};
pub use error::BackendError;

use std::fmt::Debug;

use crate::types::{BufferAllocDesc, ClearValue, ShaderSlot, TextureAllocDesc};

/// Interface between the render graph and a GPU backend.
///
/// Backing objects are opaque to the graph. It only clones, stores and hands
/// them back to the backend.
pub trait GraphBackend: 'static {
    /// Backing texture object.
    type Texture: Clone + Debug + 'static;
    /// Backing buffer object.
    type Buffer: Clone + Debug + 'static;
    /// Request for a batch of renderable objects.
    type RendererListDesc: Clone + Debug + 'static;
    /// Backend-created renderer list.
    type RendererList: Clone + Debug + 'static;
    /// Command recorder handed to pass render functions.
    type CommandBuffer;

    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Allocate a texture.
    fn create_texture(
        &mut self,
        desc: &TextureAllocDesc,
        name: &str,
    ) -> Result<Self::Texture, BackendError>;

    /// Allocate a 1x1 texture filled with a constant value.
    fn create_constant_texture(
        &mut self,
        name: &str,
        value: ClearValue,
    ) -> Result<Self::Texture, BackendError>;

    /// Free a texture.
    fn destroy_texture(&mut self, texture: Self::Texture);

    /// Allocate a buffer.
    fn create_buffer(
        &mut self,
        desc: &BufferAllocDesc,
        name: &str,
    ) -> Result<Self::Buffer, BackendError>;

    /// Free a buffer.
    fn destroy_buffer(&mut self, buffer: Self::Buffer);

    /// Create renderer lists for all descriptors in one call.
    ///
    /// Must return exactly one list per descriptor, in order.
    fn create_renderer_lists(
        &mut self,
        descs: &[Self::RendererListDesc],
    ) -> Result<Vec<Self::RendererList>, BackendError>;

    /// Attach a debug name to a texture.
    fn set_texture_name(&mut self, _texture: &Self::Texture, _name: &str) {}

    /// Record a clear of the whole texture.
    fn clear_texture(
        &mut self,
        cmd: &mut Self::CommandBuffer,
        texture: &Self::Texture,
        value: ClearValue,
    );

    /// Record a render-target binding.
    ///
    /// `colors` holds the color attachments in slot order; `depth` the
    /// optional depth attachment.
    fn set_render_targets(
        &mut self,
        cmd: &mut Self::CommandBuffer,
        colors: &[Self::Texture],
        depth: Option<&Self::Texture>,
    );

    /// Record a global texture binding. `None` unbinds the slot.
    fn set_global_texture(
        &mut self,
        cmd: &mut Self::CommandBuffer,
        slot: ShaderSlot,
        texture: Option<&Self::Texture>,
    );
}
