//! Descriptor types for render graph resources.
//!
//! This module contains format enums, usage flags, and descriptor structs
//! used by the resource registry and the backend.

mod buffer;
mod common;
mod texture;

pub use buffer::{BufferAllocDesc, BufferDesc, BufferUsage};
pub use common::{ClearValue, ShaderSlot};
pub use texture::{
    TextureAllocDesc, TextureDesc, TextureDimension, TextureFormat, TextureSize,
};
