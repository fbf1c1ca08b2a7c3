//! Pass declaration.

use crate::backend::GraphBackend;
use crate::error::{GraphError, PassResult};
use crate::types::{BufferDesc, TextureDesc};

use super::context::RenderGraphContext;
use super::pass::{
    BufferAccess, DepthAccess, MAX_COLOR_ATTACHMENTS, PassRecord, RenderGraphPass, TextureUsage,
};
use super::registry::ResourceRegistry;
use super::resource::{BufferHandle, RendererListHandle, TextureHandle};

/// Declares the resource usage and render function of one pass.
///
/// Returned by [`RenderGraph::add_render_pass`](super::RenderGraph::add_render_pass).
/// The builder borrows the graph mutably, so only one pass can be declared at
/// a time. Dropping it closes the declaration and appends the pass.
///
/// ```ignore
/// let mut pass = graph.add_render_pass::<BlurData>("blur")?;
/// pass.data().radius = 4;
/// pass.read_texture(input)?;
/// pass.use_color_buffer(output, 0)?;
/// pass.set_render_func(|data, ctx| {
///     ctx.cmd.record(format!("blur r={}", data.radius));
///     Ok(())
/// });
/// ```
pub struct RenderGraphBuilder<'g, D: Default + 'static, B: GraphBackend> {
    pass: Option<Box<RenderGraphPass<D, B>>>,
    passes: &'g mut Vec<Box<dyn PassRecord<B>>>,
    resources: &'g mut ResourceRegistry<B>,
}

impl<'g, D: Default + 'static, B: GraphBackend> RenderGraphBuilder<'g, D, B> {
    pub(crate) fn new(
        pass: Box<RenderGraphPass<D, B>>,
        passes: &'g mut Vec<Box<dyn PassRecord<B>>>,
        resources: &'g mut ResourceRegistry<B>,
    ) -> Self {
        Self {
            pass: Some(pass),
            passes,
            resources,
        }
    }

    fn pass(&self) -> &RenderGraphPass<D, B> {
        match self.pass.as_deref() {
            Some(pass) => pass,
            None => unreachable!("pass record is only taken on drop"),
        }
    }

    fn pass_mut(&mut self) -> &mut RenderGraphPass<D, B> {
        match self.pass.as_deref_mut() {
            Some(pass) => pass,
            None => unreachable!("pass record is only taken on drop"),
        }
    }

    /// Pass data handed to the render function.
    ///
    /// The payload comes from the graph's object pool and may hold values
    /// from an earlier frame, so set every field the render function reads.
    pub fn data(&mut self) -> &mut D {
        let pass = self.pass_mut();
        match pass.data.as_deref_mut() {
            Some(data) => data,
            None => unreachable!("pass data is installed at declaration"),
        }
    }

    /// Declaration index of this pass.
    pub fn pass_index(&self) -> usize {
        self.pass().info.index()
    }

    /// Declare a texture use.
    pub fn use_texture(
        &mut self,
        handle: TextureHandle,
        usage: TextureUsage,
    ) -> Result<TextureHandle, GraphError> {
        self.resources.validate_texture(handle)?;
        let info = &mut self.pass_mut().info;
        match usage {
            TextureUsage::ShaderRead => info.add_texture_read(handle),
            TextureUsage::Write => info.add_texture_write(handle),
            TextureUsage::ColorAttachment(index) => {
                if index >= MAX_COLOR_ATTACHMENTS {
                    return Err(GraphError::ColorAttachmentOutOfRange {
                        index,
                        max: MAX_COLOR_ATTACHMENTS,
                    });
                }
                info.set_color_attachment(index, handle);
            }
            TextureUsage::DepthAttachment(access) => info.set_depth_attachment(handle, access),
        }
        Ok(handle)
    }

    /// Declare a shader read of a texture.
    pub fn read_texture(&mut self, handle: TextureHandle) -> Result<TextureHandle, GraphError> {
        self.use_texture(handle, TextureUsage::ShaderRead)
    }

    /// Declare a non-attachment write of a texture.
    pub fn write_texture(&mut self, handle: TextureHandle) -> Result<TextureHandle, GraphError> {
        self.use_texture(handle, TextureUsage::Write)
    }

    /// Bind a texture as the color attachment at `index`.
    pub fn use_color_buffer(
        &mut self,
        handle: TextureHandle,
        index: usize,
    ) -> Result<TextureHandle, GraphError> {
        self.use_texture(handle, TextureUsage::ColorAttachment(index))
    }

    /// Bind a texture as the depth attachment.
    pub fn use_depth_buffer(
        &mut self,
        handle: TextureHandle,
        access: DepthAccess,
    ) -> Result<TextureHandle, GraphError> {
        self.use_texture(handle, TextureUsage::DepthAttachment(access))
    }

    /// Declare a buffer use.
    pub fn use_buffer(
        &mut self,
        handle: BufferHandle,
        access: BufferAccess,
    ) -> Result<BufferHandle, GraphError> {
        self.resources.validate_buffer(handle)?;
        let info = &mut self.pass_mut().info;
        match access {
            BufferAccess::Read => info.buffer_reads.push(handle),
            BufferAccess::Write => info.buffer_writes.push(handle),
        }
        Ok(handle)
    }

    /// Declare a buffer read.
    pub fn read_buffer(&mut self, handle: BufferHandle) -> Result<BufferHandle, GraphError> {
        self.use_buffer(handle, BufferAccess::Read)
    }

    /// Declare a buffer write.
    pub fn write_buffer(&mut self, handle: BufferHandle) -> Result<BufferHandle, GraphError> {
        self.use_buffer(handle, BufferAccess::Write)
    }

    /// Declare that the pass draws a renderer list.
    pub fn use_renderer_list(
        &mut self,
        handle: RendererListHandle,
    ) -> Result<RendererListHandle, GraphError> {
        self.resources.validate_renderer_list(handle)?;
        self.pass_mut().info.renderer_lists.push(handle);
        Ok(handle)
    }

    /// Flag the pass for the async compute queue.
    ///
    /// The flag is recorded only; passes still execute in declaration order.
    pub fn enable_async_compute(&mut self, enabled: bool) {
        self.pass_mut().info.async_compute = enabled;
    }

    /// Name the pass profiling scope. Defaults to the pass name.
    pub fn set_profiling_tag(&mut self, tag: impl Into<String>) {
        self.pass_mut().info.profiling_tag = Some(tag.into());
    }

    /// Set the function that records the pass commands.
    pub fn set_render_func<F>(&mut self, render_func: F)
    where
        F: Fn(&D, &mut RenderGraphContext<'_, B>) -> PassResult + 'static,
    {
        self.pass_mut().render_func = Some(Box::new(render_func));
    }

    /// Declare a transient texture.
    pub fn create_texture(&mut self, desc: TextureDesc) -> TextureHandle {
        self.resources.create_texture(desc)
    }

    /// Declare a transient buffer.
    pub fn create_buffer(&mut self, desc: BufferDesc) -> BufferHandle {
        self.resources.create_buffer(desc)
    }

    /// Declare a renderer list.
    pub fn create_renderer_list(&mut self, desc: B::RendererListDesc) -> RendererListHandle {
        self.resources.create_renderer_list(desc)
    }
}

impl<D: Default + 'static, B: GraphBackend> Drop for RenderGraphBuilder<'_, D, B> {
    fn drop(&mut self) {
        if let Some(pass) = self.pass.take() {
            log::trace!(
                "Declared pass {} '{}'",
                pass.info.index(),
                pass.info.name()
            );
            self.passes.push(pass);
        }
    }
}
