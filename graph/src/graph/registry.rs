//! Per-frame resource registry.
//!
//! The registry owns every resource declared during a frame. Transient
//! resources only get a backing object for the span of passes that use them:
//!
//! 1. Compile records, per handle, the first and last pass declaring a use.
//! 2. Before a pass runs, resources whose window starts there are created,
//!    reusing a released backing with the same physical description if one
//!    is waiting on the free list.
//! 3. After the pass, resources whose window ends there go back to the free
//!    list for later passes of the same frame.
//!
//! Free lists do not survive the frame: [`ResourceRegistry::clear`] destroys
//! every backing the graph allocated and bumps the handle generation.
//! Imported resources are owned by the caller and are never created or
//! destroyed here.

use std::collections::HashMap;

use crate::backend::GraphBackend;
use crate::error::GraphError;
use crate::types::{
    BufferAllocDesc, BufferDesc, ClearValue, ShaderSlot, TextureAllocDesc, TextureDesc,
    TextureFormat,
};

use super::debug::{RenderGraphDebugParams, RenderGraphLogger};
use super::pass::PassInfo;
use super::resource::{
    BufferHandle, RendererListHandle, ResourceHandle, ResourceKind, TextureHandle,
};

/// Span of passes using a resource, in declaration indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifetimeWindow {
    first: Option<usize>,
    last: Option<usize>,
    first_write: Option<usize>,
}

impl LifetimeWindow {
    /// First pass declaring any use.
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    /// Last pass declaring any use.
    pub fn last(&self) -> Option<usize> {
        self.last
    }

    /// First pass declaring a write.
    pub fn first_write(&self) -> Option<usize> {
        self.first_write
    }

    /// Returns true if no pass uses the resource.
    pub fn is_unused(&self) -> bool {
        self.first.is_none()
    }

    /// Returns true if the first use happens before any write.
    pub fn is_read_before_write(&self) -> bool {
        match (self.first, self.first_write) {
            (Some(first), Some(write)) => first < write,
            (Some(_), None) => true,
            _ => false,
        }
    }

    fn record(&mut self, pass_index: usize, write: bool) {
        self.first = Some(self.first.map_or(pass_index, |f| f.min(pass_index)));
        self.last = Some(self.last.map_or(pass_index, |l| l.max(pass_index)));
        if write {
            self.first_write = Some(self.first_write.map_or(pass_index, |w| w.min(pass_index)));
        }
    }

    fn starts_at(&self, pass_index: usize) -> bool {
        self.first == Some(pass_index)
    }

    fn ends_at(&self, pass_index: usize) -> bool {
        self.last == Some(pass_index)
    }
}

/// Allocation counters of the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Textures allocated through the backend.
    pub textures_created: usize,
    /// Textures served from the free list.
    pub textures_reused: usize,
    /// Buffers allocated through the backend.
    pub buffers_created: usize,
    /// Buffers served from the free list.
    pub buffers_reused: usize,
}

struct TextureEntry<B: GraphBackend> {
    desc: TextureDesc,
    imported: bool,
    alloc: Option<TextureAllocDesc>,
    backing: Option<B::Texture>,
    window: LifetimeWindow,
}

struct BufferEntry<B: GraphBackend> {
    desc: BufferDesc,
    imported: bool,
    backing: Option<B::Buffer>,
    window: LifetimeWindow,
}

struct RendererListEntry<B: GraphBackend> {
    desc: B::RendererListDesc,
    list: Option<B::RendererList>,
}

fn lookup<'e, E>(
    entries: &'e [E],
    generation: u32,
    handle: ResourceHandle,
    kind: ResourceKind,
) -> Result<&'e E, GraphError> {
    if handle.generation() != generation {
        return Err(invalid_handle(handle, kind));
    }
    entries
        .get(handle.index() as usize)
        .ok_or_else(|| invalid_handle(handle, kind))
}

fn invalid_handle(handle: ResourceHandle, kind: ResourceKind) -> GraphError {
    GraphError::InvalidHandle {
        kind: kind.name(),
        index: handle.index(),
        generation: handle.generation(),
    }
}

/// Clear value used by the debug clears at creation and release.
fn debug_clear_value(format: TextureFormat) -> ClearValue {
    if format.has_stencil() {
        ClearValue::DepthStencil {
            depth: 1.0,
            stencil: 0,
        }
    } else if format.is_depth_stencil() {
        ClearValue::Depth(1.0)
    } else {
        ClearValue::MAGENTA
    }
}

/// Registry of the resources declared in the current frame.
pub struct ResourceRegistry<B: GraphBackend> {
    backend: B,
    generation: u32,
    rendering_width: u32,
    rendering_height: u32,
    msaa_samples: u32,
    textures: Vec<TextureEntry<B>>,
    buffers: Vec<BufferEntry<B>>,
    renderer_lists: Vec<RendererListEntry<B>>,
    free_textures: HashMap<TextureAllocDesc, Vec<B::Texture>>,
    free_buffers: HashMap<BufferAllocDesc, Vec<B::Buffer>>,
    stats: RegistryStats,
}

impl<B: GraphBackend> ResourceRegistry<B> {
    /// Create an empty registry on top of a backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            generation: 1,
            rendering_width: 1,
            rendering_height: 1,
            msaa_samples: 1,
            textures: Vec::new(),
            buffers: Vec::new(),
            renderer_lists: Vec::new(),
            free_textures: HashMap::new(),
            free_buffers: HashMap::new(),
            stats: RegistryStats::default(),
        }
    }

    /// Get the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Current handle generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Allocation counters of the current frame.
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    /// Fix the rendering size and sample count used to resolve descriptors.
    pub fn begin_execute(&mut self, rendering_width: u32, rendering_height: u32, msaa_samples: u32) {
        self.rendering_width = rendering_width;
        self.rendering_height = rendering_height;
        self.msaa_samples = msaa_samples.max(1);
    }

    /// Rendering size of the current frame.
    pub fn rendering_size(&self) -> (u32, u32) {
        (self.rendering_width, self.rendering_height)
    }

    /// MSAA sample count of the current frame.
    pub fn msaa_samples(&self) -> u32 {
        self.msaa_samples
    }

    // ------------------------------------------------------------------
    // Declaration
    // ------------------------------------------------------------------

    fn next_handle(&self, len: usize) -> ResourceHandle {
        ResourceHandle::new(len as u32, self.generation)
    }

    /// Wrap a caller-owned texture.
    pub fn import_texture(&mut self, texture: B::Texture, mut desc: TextureDesc) -> TextureHandle {
        let handle = TextureHandle(self.next_handle(self.textures.len()));
        if desc.name.is_empty() {
            desc.name = format!("ImportedTexture{}", handle.index());
        }
        log::trace!("Importing texture '{}' as {}", desc.name, handle.index());
        self.textures.push(TextureEntry {
            desc,
            imported: true,
            alloc: None,
            backing: Some(texture),
            window: LifetimeWindow::default(),
        });
        handle
    }

    /// Wrap the swapchain image of the frame.
    pub fn import_backbuffer(&mut self, texture: B::Texture) -> TextureHandle {
        self.import_texture(texture, TextureDesc::default().with_name("Backbuffer"))
    }

    /// Wrap a caller-owned buffer.
    pub fn import_buffer(&mut self, buffer: B::Buffer, mut desc: BufferDesc) -> BufferHandle {
        let handle = BufferHandle(self.next_handle(self.buffers.len()));
        if desc.name.is_empty() {
            desc.name = format!("ImportedBuffer{}", handle.index());
        }
        self.buffers.push(BufferEntry {
            desc,
            imported: true,
            backing: Some(buffer),
            window: LifetimeWindow::default(),
        });
        handle
    }

    /// Declare a transient texture. The backing is allocated on first use.
    pub fn create_texture(&mut self, mut desc: TextureDesc) -> TextureHandle {
        let handle = TextureHandle(self.next_handle(self.textures.len()));
        if desc.name.is_empty() {
            desc.name = format!("Texture{}", handle.index());
        }
        self.textures.push(TextureEntry {
            desc,
            imported: false,
            alloc: None,
            backing: None,
            window: LifetimeWindow::default(),
        });
        handle
    }

    /// Declare a transient buffer. The backing is allocated on first use.
    pub fn create_buffer(&mut self, mut desc: BufferDesc) -> BufferHandle {
        let handle = BufferHandle(self.next_handle(self.buffers.len()));
        if desc.name.is_empty() {
            desc.name = format!("Buffer{}", handle.index());
        }
        self.buffers.push(BufferEntry {
            desc,
            imported: false,
            backing: None,
            window: LifetimeWindow::default(),
        });
        handle
    }

    /// Declare a renderer list. Lists are created in one batch at execute.
    pub fn create_renderer_list(&mut self, desc: B::RendererListDesc) -> RendererListHandle {
        let handle = RendererListHandle(self.next_handle(self.renderer_lists.len()));
        self.renderer_lists.push(RendererListEntry { desc, list: None });
        handle
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    fn texture_entry(&self, handle: TextureHandle) -> Result<&TextureEntry<B>, GraphError> {
        lookup(&self.textures, self.generation, handle.0, ResourceKind::Texture)
    }

    fn buffer_entry(&self, handle: BufferHandle) -> Result<&BufferEntry<B>, GraphError> {
        lookup(&self.buffers, self.generation, handle.0, ResourceKind::Buffer)
    }

    fn renderer_list_entry(
        &self,
        handle: RendererListHandle,
    ) -> Result<&RendererListEntry<B>, GraphError> {
        lookup(
            &self.renderer_lists,
            self.generation,
            handle.0,
            ResourceKind::RendererList,
        )
    }

    /// Whether a handle of `kind` was created this frame and is in range.
    pub fn is_valid(&self, kind: ResourceKind, handle: ResourceHandle) -> bool {
        let len = match kind {
            ResourceKind::Texture => self.textures.len(),
            ResourceKind::Buffer => self.buffers.len(),
            ResourceKind::RendererList => self.renderer_lists.len(),
        };
        handle.generation() == self.generation && (handle.index() as usize) < len
    }

    /// Check that a texture handle belongs to the current frame.
    pub fn validate_texture(&self, handle: TextureHandle) -> Result<(), GraphError> {
        self.texture_entry(handle).map(|_| ())
    }

    /// Check that a buffer handle belongs to the current frame.
    pub fn validate_buffer(&self, handle: BufferHandle) -> Result<(), GraphError> {
        self.buffer_entry(handle).map(|_| ())
    }

    /// Check that a renderer list handle belongs to the current frame.
    pub fn validate_renderer_list(&self, handle: RendererListHandle) -> Result<(), GraphError> {
        self.renderer_list_entry(handle).map(|_| ())
    }

    /// Descriptor of a texture.
    pub fn texture_desc(&self, handle: TextureHandle) -> Result<&TextureDesc, GraphError> {
        self.texture_entry(handle).map(|entry| &entry.desc)
    }

    /// Descriptor of a buffer.
    pub fn buffer_desc(&self, handle: BufferHandle) -> Result<&BufferDesc, GraphError> {
        self.buffer_entry(handle).map(|entry| &entry.desc)
    }

    /// Returns true if the texture was imported.
    pub fn is_texture_imported(&self, handle: TextureHandle) -> Result<bool, GraphError> {
        self.texture_entry(handle).map(|entry| entry.imported)
    }

    /// Lifetime window computed for a texture by the last compile.
    pub fn texture_window(&self, handle: TextureHandle) -> Result<LifetimeWindow, GraphError> {
        self.texture_entry(handle).map(|entry| entry.window)
    }

    /// Lifetime window computed for a buffer by the last compile.
    pub fn buffer_window(&self, handle: BufferHandle) -> Result<LifetimeWindow, GraphError> {
        self.buffer_entry(handle).map(|entry| entry.window)
    }

    /// Backing texture of a handle.
    ///
    /// Fails with [`GraphError::ResourceNotAllocated`] outside the texture's
    /// lifetime window.
    pub fn texture(&self, handle: TextureHandle) -> Result<&B::Texture, GraphError> {
        let entry = self.texture_entry(handle)?;
        entry
            .backing
            .as_ref()
            .ok_or_else(|| GraphError::ResourceNotAllocated {
                kind: ResourceKind::Texture.name(),
                name: entry.desc.name.clone(),
            })
    }

    /// Backing buffer of a handle.
    pub fn buffer(&self, handle: BufferHandle) -> Result<&B::Buffer, GraphError> {
        let entry = self.buffer_entry(handle)?;
        entry
            .backing
            .as_ref()
            .ok_or_else(|| GraphError::ResourceNotAllocated {
                kind: ResourceKind::Buffer.name(),
                name: entry.desc.name.clone(),
            })
    }

    /// Renderer list created for a handle.
    pub fn renderer_list(&self, handle: RendererListHandle) -> Result<&B::RendererList, GraphError> {
        let entry = self.renderer_list_entry(handle)?;
        entry
            .list
            .as_ref()
            .ok_or_else(|| GraphError::ResourceNotAllocated {
                kind: ResourceKind::RendererList.name(),
                name: format!("{:?}", entry.desc),
            })
    }

    /// Number of textures declared this frame, imported ones included.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of buffers declared this frame, imported ones included.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of renderer lists declared this frame.
    pub fn renderer_list_count(&self) -> usize {
        self.renderer_lists.len()
    }

    /// Number of released texture backings waiting for reuse.
    pub fn free_texture_count(&self) -> usize {
        self.free_textures.values().map(Vec::len).sum()
    }

    /// Number of released buffer backings waiting for reuse.
    pub fn free_buffer_count(&self) -> usize {
        self.free_buffers.values().map(Vec::len).sum()
    }

    // ------------------------------------------------------------------
    // Compile
    // ------------------------------------------------------------------

    /// Forget the windows of a previous compile.
    pub fn reset_lifetimes(&mut self) {
        for entry in &mut self.textures {
            entry.window = LifetimeWindow::default();
        }
        for entry in &mut self.buffers {
            entry.window = LifetimeWindow::default();
        }
    }

    /// Extend a texture's window to cover `pass_index`.
    pub fn record_texture_use(
        &mut self,
        handle: TextureHandle,
        pass_index: usize,
        write: bool,
    ) -> Result<(), GraphError> {
        self.texture_entry(handle)?;
        self.textures[handle.slot()].window.record(pass_index, write);
        Ok(())
    }

    /// Extend a buffer's window to cover `pass_index`.
    pub fn record_buffer_use(
        &mut self,
        handle: BufferHandle,
        pass_index: usize,
        write: bool,
    ) -> Result<(), GraphError> {
        self.buffer_entry(handle)?;
        self.buffers[handle.slot()].window.record(pass_index, write);
        Ok(())
    }

    /// Record every declared use of a pass.
    pub fn record_pass(&mut self, info: &PassInfo) -> Result<(), GraphError> {
        for &handle in info.texture_reads() {
            self.record_texture_use(handle, info.index(), false)?;
        }
        for &handle in info.texture_writes() {
            self.record_texture_use(handle, info.index(), true)?;
        }
        for &handle in info.buffer_reads() {
            self.record_buffer_use(handle, info.index(), false)?;
        }
        for &handle in info.buffer_writes() {
            self.record_buffer_use(handle, info.index(), true)?;
        }
        Ok(())
    }

    /// Create the renderer lists of `handles` with one backend call.
    ///
    /// Handles whose list already exists are skipped, as are duplicates.
    pub fn create_renderer_lists(&mut self, handles: &[RendererListHandle]) -> Result<(), GraphError> {
        let mut pending: Vec<usize> = Vec::with_capacity(handles.len());
        for &handle in handles {
            let entry = self.renderer_list_entry(handle)?;
            if entry.list.is_none() && !pending.contains(&handle.slot()) {
                pending.push(handle.slot());
            }
        }
        if pending.is_empty() {
            return Ok(());
        }

        let descs: Vec<B::RendererListDesc> = pending
            .iter()
            .map(|&slot| self.renderer_lists[slot].desc.clone())
            .collect();
        let lists = self.backend.create_renderer_lists(&descs)?;
        if lists.len() != descs.len() {
            return Err(crate::backend::BackendError::RendererListCreationFailed(format!(
                "expected {} renderer lists, backend returned {}",
                descs.len(),
                lists.len()
            ))
            .into());
        }
        for (slot, list) in pending.into_iter().zip(lists) {
            self.renderer_lists[slot].list = Some(list);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Allocate (and clear) the resources whose window starts at this pass.
    pub fn create_and_clear_for_pass(
        &mut self,
        info: &PassInfo,
        cmd: &mut B::CommandBuffer,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) -> Result<(), GraphError> {
        for handle in info.textures() {
            self.texture_entry(handle)?;
            self.allocate_texture(handle.slot(), info.index(), cmd, debug, logger)?;
        }
        for handle in info.buffers() {
            self.buffer_entry(handle)?;
            self.allocate_buffer(handle.slot(), info.index(), debug, logger)?;
        }
        Ok(())
    }

    fn allocate_texture(
        &mut self,
        slot: usize,
        pass_index: usize,
        cmd: &mut B::CommandBuffer,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) -> Result<(), GraphError> {
        let entry = &self.textures[slot];
        if entry.imported || entry.backing.is_some() || !entry.window.starts_at(pass_index) {
            return Ok(());
        }
        if entry.window.is_read_before_write() {
            log::warn!(
                "Texture '{}' is read in pass {} before any pass writes it",
                entry.desc.name,
                pass_index
            );
        }

        let alloc = entry
            .desc
            .resolve(self.rendering_width, self.rendering_height, self.msaa_samples);
        let recycled = self.free_textures.get_mut(&alloc).and_then(Vec::pop);
        let reused = recycled.is_some();
        let texture = match recycled {
            Some(texture) => texture,
            None => self.backend.create_texture(&alloc, &entry.desc.name)?,
        };

        let entry = &mut self.textures[slot];
        if reused {
            self.stats.textures_reused += 1;
        } else {
            self.stats.textures_created += 1;
        }
        log::trace!(
            "Pass {}: {} texture '{}' ({}x{})",
            pass_index,
            if reused { "reusing" } else { "creating" },
            entry.desc.name,
            alloc.width,
            alloc.height
        );
        if debug.log_frame_information {
            logger.log_line(format_args!(
                "Created Texture: {}{}",
                entry.desc.name,
                if reused { " (reused)" } else { "" }
            ));
        }

        if debug.tag_resource_names {
            self.backend.set_texture_name(&texture, &entry.desc.name);
        }
        if entry.desc.clear_buffer && entry.desc.clear_value.is_clear() {
            self.backend.clear_texture(cmd, &texture, entry.desc.clear_value);
        } else if debug.clear_render_targets_at_creation {
            self.backend
                .clear_texture(cmd, &texture, debug_clear_value(alloc.format));
        }

        entry.alloc = Some(alloc);
        entry.backing = Some(texture);
        Ok(())
    }

    fn allocate_buffer(
        &mut self,
        slot: usize,
        pass_index: usize,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) -> Result<(), GraphError> {
        let entry = &self.buffers[slot];
        if entry.imported || entry.backing.is_some() || !entry.window.starts_at(pass_index) {
            return Ok(());
        }
        if entry.window.is_read_before_write() {
            log::warn!(
                "Buffer '{}' is read in pass {} before any pass writes it",
                entry.desc.name,
                pass_index
            );
        }

        let alloc = entry.desc.alloc_desc();
        let recycled = self.free_buffers.get_mut(&alloc).and_then(Vec::pop);
        let reused = recycled.is_some();
        let buffer = match recycled {
            Some(buffer) => buffer,
            None => self.backend.create_buffer(&alloc, &entry.desc.name)?,
        };

        if reused {
            self.stats.buffers_reused += 1;
        } else {
            self.stats.buffers_created += 1;
        }
        let entry = &mut self.buffers[slot];
        log::trace!(
            "Pass {}: {} buffer '{}' ({} bytes)",
            pass_index,
            if reused { "reusing" } else { "creating" },
            entry.desc.name,
            entry.desc.size()
        );
        if debug.log_frame_information {
            logger.log_line(format_args!("Created Buffer: {}", entry.desc.name));
        }
        entry.backing = Some(buffer);
        Ok(())
    }

    /// Bind the read textures that carry a shader slot.
    pub fn bind_global_textures_for_pass(
        &mut self,
        info: &PassInfo,
        cmd: &mut B::CommandBuffer,
    ) -> Result<(), GraphError> {
        for &handle in info.texture_reads() {
            let entry = lookup(&self.textures, self.generation, handle.0, ResourceKind::Texture)?;
            let Some(slot) = entry.desc.binding_slot else {
                continue;
            };
            let texture = entry
                .backing
                .as_ref()
                .ok_or_else(|| GraphError::ResourceNotAllocated {
                    kind: ResourceKind::Texture.name(),
                    name: entry.desc.name.clone(),
                })?;
            self.backend.set_global_texture(cmd, slot, Some(texture));
        }
        Ok(())
    }

    /// Unbind the shader slots bound for a pass.
    pub fn unbind_global_textures(&mut self, info: &PassInfo, cmd: &mut B::CommandBuffer) {
        let slots = info
            .texture_reads()
            .iter()
            .filter_map(|&handle| self.texture_entry(handle).ok())
            .filter_map(|entry| entry.desc.binding_slot)
            .collect::<Vec<ShaderSlot>>();
        for slot in slots {
            self.backend.set_global_texture(cmd, slot, None);
        }
    }

    /// Bind render targets through the backend.
    pub fn set_render_targets(
        &mut self,
        cmd: &mut B::CommandBuffer,
        colors: &[B::Texture],
        depth: Option<&B::Texture>,
    ) {
        self.backend.set_render_targets(cmd, colors, depth);
    }

    /// Return the resources whose window ends at this pass to the free lists.
    ///
    /// Resources that were never allocated are skipped, so this is safe to
    /// call for a pass whose creation step failed halfway.
    pub fn release_for_pass(
        &mut self,
        info: &PassInfo,
        cmd: &mut B::CommandBuffer,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) {
        for handle in info.textures() {
            if self.texture_entry(handle).is_ok() {
                self.release_texture(handle.slot(), info.index(), cmd, debug, logger);
            }
        }
        for handle in info.buffers() {
            if self.buffer_entry(handle).is_ok() {
                self.release_buffer(handle.slot(), info.index(), debug, logger);
            }
        }
    }

    fn release_texture(
        &mut self,
        slot: usize,
        pass_index: usize,
        cmd: &mut B::CommandBuffer,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) {
        let entry = &mut self.textures[slot];
        if entry.imported || !entry.window.ends_at(pass_index) {
            return;
        }
        let (Some(texture), Some(alloc)) = (entry.backing.take(), entry.alloc) else {
            return;
        };
        log::trace!("Pass {}: releasing texture '{}'", pass_index, entry.desc.name);
        if debug.log_frame_information {
            logger.log_line(format_args!("Released Texture: {}", entry.desc.name));
        }
        if debug.clear_render_targets_at_release {
            self.backend
                .clear_texture(cmd, &texture, debug_clear_value(alloc.format));
        }
        self.free_textures.entry(alloc).or_default().push(texture);
    }

    fn release_buffer(
        &mut self,
        slot: usize,
        pass_index: usize,
        debug: &RenderGraphDebugParams,
        logger: &mut RenderGraphLogger,
    ) {
        let entry = &mut self.buffers[slot];
        if entry.imported || !entry.window.ends_at(pass_index) {
            return;
        }
        let Some(buffer) = entry.backing.take() else {
            return;
        };
        log::trace!("Pass {}: releasing buffer '{}'", pass_index, entry.desc.name);
        if debug.log_frame_information {
            logger.log_line(format_args!("Released Buffer: {}", entry.desc.name));
        }
        self.free_buffers
            .entry(entry.desc.alloc_desc())
            .or_default()
            .push(buffer);
    }

    // ------------------------------------------------------------------
    // Reporting and teardown
    // ------------------------------------------------------------------

    /// Append a summary of the frame's resources to the logger.
    pub fn log_resources(&self, logger: &mut RenderGraphLogger) {
        if !logger.is_enabled() {
            return;
        }
        logger.log_line(format_args!("==== Render Graph Resources ===="));
        logger.log_line(format_args!(
            "Created textures: {}, reused textures: {}, created buffers: {}, reused buffers: {}",
            self.stats.textures_created,
            self.stats.textures_reused,
            self.stats.buffers_created,
            self.stats.buffers_reused
        ));

        logger.log_line(format_args!("Textures:"));
        logger.inc_indent();
        for (index, entry) in self.textures.iter().enumerate() {
            logger.log_line(format_args!(
                "[{}] {} {:?} passes {:?}..={:?}{}{}",
                index,
                entry.desc.name,
                entry.desc.format,
                entry.window.first(),
                entry.window.last(),
                if entry.imported { " (imported)" } else { "" },
                if entry.window.is_unused() { " (unused)" } else { "" }
            ));
        }
        logger.dec_indent();

        logger.log_line(format_args!("Buffers:"));
        logger.inc_indent();
        for (index, entry) in self.buffers.iter().enumerate() {
            logger.log_line(format_args!(
                "[{}] {} {} bytes passes {:?}..={:?}{}{}",
                index,
                entry.desc.name,
                entry.desc.size(),
                entry.window.first(),
                entry.window.last(),
                if entry.imported { " (imported)" } else { "" },
                if entry.window.is_unused() { " (unused)" } else { "" }
            ));
        }
        logger.dec_indent();

        logger.log_line(format_args!(
            "Free list: {} textures, {} buffers",
            self.free_texture_count(),
            self.free_buffer_count()
        ));
    }

    /// End the frame: destroy every backing the graph allocated, forget all
    /// declarations and invalidate outstanding handles.
    pub fn clear(&mut self) {
        for entry in self.textures.drain(..) {
            if let (false, Some(texture)) = (entry.imported, entry.backing) {
                self.backend.destroy_texture(texture);
            }
        }
        for entry in self.buffers.drain(..) {
            if let (false, Some(buffer)) = (entry.imported, entry.backing) {
                self.backend.destroy_buffer(buffer);
            }
        }
        for (_, textures) in self.free_textures.drain() {
            for texture in textures {
                self.backend.destroy_texture(texture);
            }
        }
        for (_, buffers) in self.free_buffers.drain() {
            for buffer in buffers {
                self.backend.destroy_buffer(buffer);
            }
        }
        self.renderer_lists.clear();
        self.stats = RegistryStats::default();
        self.generation = self.generation.wrapping_add(1).max(1);
    }

    /// Release everything at shutdown.
    pub fn cleanup(&mut self) {
        self.clear();
        self.textures.shrink_to_fit();
        self.buffers.shrink_to_fit();
        self.renderer_lists.shrink_to_fit();
    }
}
