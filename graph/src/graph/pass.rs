//! Render pass records.
//!
//! A pass is declared through a [`RenderGraphBuilder`](super::RenderGraphBuilder)
//! and stored as a type-erased [`PassRecord`] until the frame executes. The
//! concrete record, [`RenderGraphPass<D, B>`], carries the declared resource
//! usage in a [`PassInfo`], a pooled data payload `D` and the render function.

use bitflags::bitflags;
use framegraph_core::pool::{ObjectPool, Poolable};

use crate::backend::GraphBackend;
use crate::error::{GraphError, PassResult};

use super::context::RenderGraphContext;
use super::resource::{BufferHandle, RendererListHandle, TextureHandle};

/// Maximum number of simultaneously bound color attachments.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

bitflags! {
    /// How a pass accesses its depth attachment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DepthAccess: u8 {
        /// Depth is tested against.
        const READ = 1 << 0;
        /// Depth is written.
        const WRITE = 1 << 1;
        /// Depth is tested and written.
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

/// How a pass uses a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUsage {
    /// Sampled or loaded in shaders.
    ShaderRead,
    /// Written outside of the render-target binding (storage, copy).
    Write,
    /// Bound as the color attachment at the given index.
    ColorAttachment(usize),
    /// Bound as the depth attachment.
    DepthAttachment(DepthAccess),
}

/// How a pass uses a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferAccess {
    /// Read in shaders.
    Read,
    /// Written in shaders.
    Write,
}

/// Declared resource usage of a pass.
#[derive(Debug, Clone, Default)]
pub struct PassInfo {
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) profiling_tag: Option<String>,
    pub(crate) texture_reads: Vec<TextureHandle>,
    pub(crate) texture_writes: Vec<TextureHandle>,
    pub(crate) buffer_reads: Vec<BufferHandle>,
    pub(crate) buffer_writes: Vec<BufferHandle>,
    pub(crate) renderer_lists: Vec<RendererListHandle>,
    pub(crate) color_attachments: [Option<TextureHandle>; MAX_COLOR_ATTACHMENTS],
    pub(crate) max_color_index: Option<usize>,
    pub(crate) depth_attachment: Option<(TextureHandle, DepthAccess)>,
    pub(crate) async_compute: bool,
}

impl PassInfo {
    /// Get the pass name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declaration index within the frame.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the profiling tag, if one was set.
    pub fn profiling_tag(&self) -> Option<&str> {
        self.profiling_tag.as_deref()
    }

    /// Name used for the pass profiling scope.
    pub fn profiling_name(&self) -> &str {
        self.profiling_tag.as_deref().unwrap_or(&self.name)
    }

    /// Textures read by the pass, in declaration order.
    pub fn texture_reads(&self) -> &[TextureHandle] {
        &self.texture_reads
    }

    /// Textures written by the pass, in declaration order.
    pub fn texture_writes(&self) -> &[TextureHandle] {
        &self.texture_writes
    }

    /// Buffers read by the pass.
    pub fn buffer_reads(&self) -> &[BufferHandle] {
        &self.buffer_reads
    }

    /// Buffers written by the pass.
    pub fn buffer_writes(&self) -> &[BufferHandle] {
        &self.buffer_writes
    }

    /// Renderer lists used by the pass.
    pub fn renderer_lists(&self) -> &[RendererListHandle] {
        &self.renderer_lists
    }

    /// Color attachment at `index`, if bound.
    pub fn color_attachment(&self, index: usize) -> Option<TextureHandle> {
        self.color_attachments.get(index).copied().flatten()
    }

    /// Highest used color attachment index.
    pub fn max_color_index(&self) -> Option<usize> {
        self.max_color_index
    }

    /// Depth attachment and its access flags.
    pub fn depth_attachment(&self) -> Option<(TextureHandle, DepthAccess)> {
        self.depth_attachment
    }

    /// Returns true if the pass asked to run on the async compute queue.
    pub fn async_compute(&self) -> bool {
        self.async_compute
    }

    /// Returns true if the pass binds any render target.
    pub fn has_render_targets(&self) -> bool {
        self.max_color_index.is_some() || self.depth_attachment.is_some()
    }

    /// Iterate over every texture the pass reads or writes.
    pub fn textures(&self) -> impl Iterator<Item = TextureHandle> + '_ {
        self.texture_reads
            .iter()
            .chain(self.texture_writes.iter())
            .copied()
    }

    /// Iterate over every buffer the pass reads or writes.
    pub fn buffers(&self) -> impl Iterator<Item = BufferHandle> + '_ {
        self.buffer_reads
            .iter()
            .chain(self.buffer_writes.iter())
            .copied()
    }

    /// Check that the attachments can be bound as one render-target set.
    ///
    /// Color slots must be contiguous from index 0, and more than one slot
    /// requires a depth attachment.
    pub fn check_render_targets(&self) -> Result<(), &'static str> {
        let Some(max) = self.max_color_index else {
            return Ok(());
        };
        if self.color_attachments[..max].iter().any(Option::is_none) {
            return Err("color attachment indices have gaps");
        }
        if max > 0 && self.depth_attachment.is_none() {
            return Err("MRT without depth");
        }
        Ok(())
    }

    pub(crate) fn begin(&mut self, name: &str, index: usize) {
        self.reset();
        self.name.push_str(name);
        self.index = index;
    }

    pub(crate) fn add_texture_read(&mut self, handle: TextureHandle) {
        self.texture_reads.push(handle);
    }

    pub(crate) fn add_texture_write(&mut self, handle: TextureHandle) {
        self.texture_writes.push(handle);
    }

    /// Bind a color slot. Rebinding a slot drops the write of the texture
    /// previously bound there.
    pub(crate) fn set_color_attachment(&mut self, index: usize, handle: TextureHandle) {
        if let Some(previous) = self.color_attachments[index].replace(handle) {
            if let Some(position) = self.texture_writes.iter().position(|&h| h == previous) {
                self.texture_writes.remove(position);
            }
        }
        self.max_color_index = Some(self.max_color_index.map_or(index, |max| max.max(index)));
        self.texture_writes.push(handle);
    }

    pub(crate) fn set_depth_attachment(&mut self, handle: TextureHandle, access: DepthAccess) {
        self.depth_attachment = Some((handle, access));
        if access.intersects(DepthAccess::READ) {
            self.texture_reads.push(handle);
        }
        if access.intersects(DepthAccess::WRITE) {
            self.texture_writes.push(handle);
        }
    }
}

impl Poolable for PassInfo {
    fn new_empty() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.name.clear();
        self.index = 0;
        self.profiling_tag = None;
        self.texture_reads.clear();
        self.texture_writes.clear();
        self.buffer_reads.clear();
        self.buffer_writes.clear();
        self.renderer_lists.clear();
        self.color_attachments = [None; MAX_COLOR_ATTACHMENTS];
        self.max_color_index = None;
        self.depth_attachment = None;
        self.async_compute = false;
    }
}

/// Render function of a pass.
pub type RenderFunc<D, B> = dyn Fn(&D, &mut RenderGraphContext<'_, B>) -> PassResult;

/// Type-erased pass record stored by the render graph.
pub trait PassRecord<B: GraphBackend> {
    /// Declared resource usage.
    fn info(&self) -> &PassInfo;

    /// Run the render function.
    fn execute(&self, ctx: &mut RenderGraphContext<'_, B>) -> Result<(), GraphError>;

    /// Return the record and its data payload to the pool.
    fn release(self: Box<Self>, pool: &mut ObjectPool);
}

/// Concrete pass record with a data payload of type `D`.
pub struct RenderGraphPass<D: 'static, B: GraphBackend> {
    pub(crate) info: PassInfo,
    pub(crate) data: Option<Box<D>>,
    pub(crate) render_func: Option<Box<RenderFunc<D, B>>>,
}

impl<D: 'static, B: GraphBackend> Default for RenderGraphPass<D, B> {
    fn default() -> Self {
        Self {
            info: PassInfo::default(),
            data: None,
            render_func: None,
        }
    }
}

impl<D: 'static, B: GraphBackend> RenderGraphPass<D, B> {
    pub(crate) fn begin(&mut self, name: &str, index: usize, data: Box<D>) {
        self.info.begin(name, index);
        self.data = Some(data);
        self.render_func = None;
    }
}

impl<D: 'static, B: GraphBackend> Poolable for RenderGraphPass<D, B> {
    fn new_empty() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.info.reset();
        self.data = None;
        self.render_func = None;
    }
}

impl<D: 'static, B: GraphBackend> PassRecord<B> for RenderGraphPass<D, B> {
    fn info(&self) -> &PassInfo {
        &self.info
    }

    fn execute(&self, ctx: &mut RenderGraphContext<'_, B>) -> Result<(), GraphError> {
        let (Some(render_func), Some(data)) = (&self.render_func, self.data.as_deref()) else {
            return Err(GraphError::MissingRenderFunc {
                pass: self.info.name.clone(),
            });
        };
        render_func(data, ctx).map_err(|source| GraphError::PassFailed {
            pass: self.info.name.clone(),
            source,
        })
    }

    fn release(mut self: Box<Self>, pool: &mut ObjectPool) {
        if let Some(data) = self.data.take() {
            pool.release(data);
        }
        self.reset();
        pool.release(self);
    }
}
