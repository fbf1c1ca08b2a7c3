//! Dummy GPU backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations. It hands out numbered
//! placeholder objects and appends every call to a shared event log, so tests
//! can assert the exact order of allocations, bindings, pass commands and
//! releases.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::{BufferAllocDesc, ClearValue, ShaderSlot, TextureAllocDesc};

use super::{BackendError, GraphBackend};

/// Placeholder texture handed out by [`DummyBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DummyTexture {
    /// Unique allocation id.
    pub id: u64,
}

/// Placeholder buffer handed out by [`DummyBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DummyBuffer {
    /// Unique allocation id.
    pub id: u64,
}

/// A single recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// A transient texture was allocated.
    CreateTexture {
        id: u64,
        name: String,
        desc: TextureAllocDesc,
    },
    /// A constant 1x1 texture was allocated.
    CreateConstantTexture { id: u64, name: String },
    /// A texture was freed.
    DestroyTexture { id: u64 },
    /// A texture got a debug name.
    SetTextureName { id: u64, name: String },
    /// A clear was recorded.
    ClearTexture { id: u64, value: ClearValue },
    /// A buffer was allocated.
    CreateBuffer { id: u64, name: String },
    /// A buffer was freed.
    DestroyBuffer { id: u64 },
    /// Renderer lists were created in one batch.
    CreateRendererLists { names: Vec<String> },
    /// Render targets were bound.
    SetRenderTargets { colors: Vec<u64>, depth: Option<u64> },
    /// A global texture slot was bound or unbound.
    SetGlobalTexture { slot: ShaderSlot, texture: Option<u64> },
    /// A pass recorded a command.
    Command(String),
}

type EventLog = Arc<Mutex<Vec<BackendEvent>>>;

/// Command buffer of the [`DummyBackend`].
///
/// Shares the backend's event log so pass commands interleave with resource
/// operations in call order.
#[derive(Debug, Clone)]
pub struct DummyCommandBuffer {
    events: EventLog,
}

impl DummyCommandBuffer {
    /// Record a pass command.
    pub fn record(&mut self, command: impl Into<String>) {
        self.events.lock().push(BackendEvent::Command(command.into()));
    }

    /// Snapshot of the shared event log.
    ///
    /// Stays readable after the backend itself was moved or dropped.
    pub fn events(&self) -> Vec<BackendEvent> {
        self.events.lock().clone()
    }
}

/// Dummy GPU backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    next_id: u64,
    events: EventLog,
    live_textures: HashSet<u64>,
    live_buffers: HashSet<u64>,
    textures_created: usize,
    textures_destroyed: usize,
    buffers_created: usize,
    buffers_destroyed: usize,
    fail_texture_creation: bool,
    constant_texture_limit: Option<usize>,
    constant_textures_created: usize,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a command buffer that records into this backend's event log.
    pub fn command_buffer(&self) -> DummyCommandBuffer {
        DummyCommandBuffer {
            events: Arc::clone(&self.events),
        }
    }

    /// Allocate a texture outside of any render graph, for import.
    pub fn create_external_texture(&mut self, name: &str) -> DummyTexture {
        let id = self.allocate_id();
        self.live_textures.insert(id);
        log::trace!("DummyBackend: creating external texture '{}' ({})", name, id);
        DummyTexture { id }
    }

    /// Allocate a buffer outside of any render graph, for import.
    pub fn create_external_buffer(&mut self, name: &str) -> DummyBuffer {
        let id = self.allocate_id();
        self.live_buffers.insert(id);
        log::trace!("DummyBackend: creating external buffer '{}' ({})", name, id);
        DummyBuffer { id }
    }

    /// Make every following texture creation fail with `OutOfMemory`.
    pub fn set_fail_texture_creation(&mut self, fail: bool) {
        self.fail_texture_creation = fail;
    }

    /// Fail constant texture creation once `limit` of them exist.
    pub fn set_constant_texture_limit(&mut self, limit: Option<usize>) {
        self.constant_texture_limit = limit;
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<BackendEvent> {
        self.events.lock().clone()
    }

    /// Drop all recorded events.
    pub fn clear_events(&self) {
        self.events.lock().clear();
    }

    /// Number of textures allocated through [`GraphBackend`].
    pub fn textures_created(&self) -> usize {
        self.textures_created
    }

    /// Number of textures freed through [`GraphBackend`].
    pub fn textures_destroyed(&self) -> usize {
        self.textures_destroyed
    }

    /// Number of buffers allocated through [`GraphBackend`].
    pub fn buffers_created(&self) -> usize {
        self.buffers_created
    }

    /// Number of buffers freed through [`GraphBackend`].
    pub fn buffers_destroyed(&self) -> usize {
        self.buffers_destroyed
    }

    /// Check whether a texture is currently allocated.
    pub fn is_texture_live(&self, texture: &DummyTexture) -> bool {
        self.live_textures.contains(&texture.id)
    }

    /// Check whether a buffer is currently allocated.
    pub fn is_buffer_live(&self, buffer: &DummyBuffer) -> bool {
        self.live_buffers.contains(&buffer.id)
    }

    /// Number of textures currently allocated, including external ones.
    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }

    /// Number of buffers currently allocated, including external ones.
    pub fn live_buffer_count(&self) -> usize {
        self.live_buffers.len()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn push(&self, event: BackendEvent) {
        self.events.lock().push(event);
    }
}

impl GraphBackend for DummyBackend {
    type Texture = DummyTexture;
    type Buffer = DummyBuffer;
    type RendererListDesc = String;
    type RendererList = u64;
    type CommandBuffer = DummyCommandBuffer;

    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn create_texture(
        &mut self,
        desc: &TextureAllocDesc,
        name: &str,
    ) -> Result<DummyTexture, BackendError> {
        if self.fail_texture_creation {
            return Err(BackendError::OutOfMemory);
        }
        let id = self.allocate_id();
        log::trace!(
            "DummyBackend: creating texture '{}' ({}x{}x{}, {:?}) -> {}",
            name,
            desc.width,
            desc.height,
            desc.slices,
            desc.format,
            id
        );
        self.live_textures.insert(id);
        self.textures_created += 1;
        self.push(BackendEvent::CreateTexture {
            id,
            name: name.to_string(),
            desc: *desc,
        });
        Ok(DummyTexture { id })
    }

    fn create_constant_texture(
        &mut self,
        name: &str,
        _value: ClearValue,
    ) -> Result<DummyTexture, BackendError> {
        if self
            .constant_texture_limit
            .is_some_and(|limit| self.constant_textures_created >= limit)
        {
            return Err(BackendError::TextureCreationFailed {
                name: name.to_string(),
                reason: "constant texture limit reached".to_string(),
            });
        }
        self.constant_textures_created += 1;
        let id = self.allocate_id();
        log::trace!("DummyBackend: creating constant texture '{}' -> {}", name, id);
        self.live_textures.insert(id);
        self.push(BackendEvent::CreateConstantTexture {
            id,
            name: name.to_string(),
        });
        Ok(DummyTexture { id })
    }

    fn destroy_texture(&mut self, texture: DummyTexture) {
        if !self.live_textures.remove(&texture.id) {
            log::warn!("DummyBackend: destroying unknown texture {}", texture.id);
        }
        self.textures_destroyed += 1;
        self.push(BackendEvent::DestroyTexture { id: texture.id });
    }

    fn create_buffer(
        &mut self,
        desc: &BufferAllocDesc,
        name: &str,
    ) -> Result<DummyBuffer, BackendError> {
        let id = self.allocate_id();
        log::trace!(
            "DummyBackend: creating buffer '{}' ({} x {} bytes) -> {}",
            name,
            desc.count,
            desc.stride,
            id
        );
        self.live_buffers.insert(id);
        self.buffers_created += 1;
        self.push(BackendEvent::CreateBuffer {
            id,
            name: name.to_string(),
        });
        Ok(DummyBuffer { id })
    }

    fn destroy_buffer(&mut self, buffer: DummyBuffer) {
        if !self.live_buffers.remove(&buffer.id) {
            log::warn!("DummyBackend: destroying unknown buffer {}", buffer.id);
        }
        self.buffers_destroyed += 1;
        self.push(BackendEvent::DestroyBuffer { id: buffer.id });
    }

    fn create_renderer_lists(&mut self, descs: &[String]) -> Result<Vec<u64>, BackendError> {
        log::trace!("DummyBackend: creating {} renderer lists", descs.len());
        let lists = descs.iter().map(|_| self.allocate_id()).collect();
        self.push(BackendEvent::CreateRendererLists {
            names: descs.to_vec(),
        });
        Ok(lists)
    }

    fn set_texture_name(&mut self, texture: &DummyTexture, name: &str) {
        self.push(BackendEvent::SetTextureName {
            id: texture.id,
            name: name.to_string(),
        });
    }

    fn clear_texture(
        &mut self,
        _cmd: &mut DummyCommandBuffer,
        texture: &DummyTexture,
        value: ClearValue,
    ) {
        self.push(BackendEvent::ClearTexture {
            id: texture.id,
            value,
        });
    }

    fn set_render_targets(
        &mut self,
        _cmd: &mut DummyCommandBuffer,
        colors: &[DummyTexture],
        depth: Option<&DummyTexture>,
    ) {
        self.push(BackendEvent::SetRenderTargets {
            colors: colors.iter().map(|t| t.id).collect(),
            depth: depth.map(|t| t.id),
        });
    }

    fn set_global_texture(
        &mut self,
        _cmd: &mut DummyCommandBuffer,
        slot: ShaderSlot,
        texture: Option<&DummyTexture>,
    ) {
        self.push(BackendEvent::SetGlobalTexture {
            slot,
            texture: texture.map(|t| t.id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TextureDesc, TextureFormat};

    #[test]
    fn test_texture_lifecycle_is_counted() {
        let mut backend = DummyBackend::new();
        let desc = TextureDesc::new_2d(32, 32, TextureFormat::Rgba8Unorm).resolve(32, 32, 1);

        let texture = backend.create_texture(&desc, "color").unwrap();
        assert!(backend.is_texture_live(&texture));
        assert_eq!(backend.textures_created(), 1);

        backend.destroy_texture(texture.clone());
        assert!(!backend.is_texture_live(&texture));
        assert_eq!(backend.textures_destroyed(), 1);
        assert_eq!(backend.live_texture_count(), 0);
    }

    #[test]
    fn test_command_buffer_shares_event_log() {
        let mut backend = DummyBackend::new();
        let mut cmd = backend.command_buffer();
        let texture = backend.create_external_texture("backbuffer");

        cmd.record("draw");
        backend.clear_texture(&mut cmd, &texture, ClearValue::BLACK);

        assert_eq!(
            backend.events(),
            vec![
                BackendEvent::Command("draw".to_string()),
                BackendEvent::ClearTexture {
                    id: texture.id,
                    value: ClearValue::BLACK,
                },
            ]
        );
    }

    #[test]
    fn test_renderer_lists_match_descriptors() {
        let mut backend = DummyBackend::new();
        let lists = backend
            .create_renderer_lists(&["opaque".to_string(), "transparent".to_string()])
            .unwrap();
        assert_eq!(lists.len(), 2);
        assert_ne!(lists[0], lists[1]);
    }

    #[test]
    fn test_constant_texture_limit() {
        let mut backend = DummyBackend::new();
        backend.set_constant_texture_limit(Some(1));
        assert!(backend.create_constant_texture("first", ClearValue::BLACK).is_ok());
        assert_eq!(
            backend.create_constant_texture("second", ClearValue::WHITE),
            Err(BackendError::TextureCreationFailed {
                name: "second".to_string(),
                reason: "constant texture limit reached".to_string(),
            })
        );
        assert_eq!(backend.live_texture_count(), 1);
    }

    #[test]
    fn test_forced_texture_failure() {
        let mut backend = DummyBackend::new();
        backend.set_fail_texture_creation(true);
        let desc = TextureDesc::new_2d(8, 8, TextureFormat::R8Unorm).resolve(8, 8, 1);
        assert_eq!(
            backend.create_texture(&desc, "broken"),
            Err(BackendError::OutOfMemory)
        );
    }
}
