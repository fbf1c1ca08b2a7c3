//! Buffer types and descriptors.

use bitflags::bitflags;

bitflags! {
    /// Usage flags for buffers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUsage: u32 {
        /// Buffer can be used as a vertex buffer.
        const VERTEX = 1 << 0;
        /// Buffer can be used as an index buffer.
        const INDEX = 1 << 1;
        /// Buffer can be used as a uniform buffer.
        const UNIFORM = 1 << 2;
        /// Buffer can be used as a storage buffer.
        const STORAGE = 1 << 3;
        /// Buffer can be used as an indirect buffer.
        const INDIRECT = 1 << 4;
        /// Buffer can be copied from.
        const COPY_SRC = 1 << 5;
        /// Buffer can be copied to.
        const COPY_DST = 1 << 6;
    }
}

impl Default for BufferUsage {
    fn default() -> Self {
        Self::STORAGE
    }
}

/// Descriptor for a render graph buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BufferDesc {
    /// Number of elements.
    pub count: u32,
    /// Size of one element in bytes.
    pub stride: u32,
    /// Usage flags.
    pub usage: BufferUsage,
    /// Debug name.
    pub name: String,
}

impl BufferDesc {
    /// Create a new buffer descriptor.
    pub fn new(count: u32, stride: u32, usage: BufferUsage) -> Self {
        Self {
            count,
            stride,
            usage,
            name: String::new(),
        }
    }

    /// Set the debug name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Total size in bytes.
    pub fn size(&self) -> u64 {
        self.count as u64 * self.stride as u64
    }

    /// Physical allocation parameters.
    pub fn alloc_desc(&self) -> BufferAllocDesc {
        BufferAllocDesc {
            count: self.count,
            stride: self.stride,
            usage: self.usage,
        }
    }
}

/// Physical allocation parameters of a buffer, used as the reuse key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferAllocDesc {
    /// Number of elements.
    pub count: u32,
    /// Size of one element in bytes.
    pub stride: u32,
    /// Usage flags.
    pub usage: BufferUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        let desc = BufferDesc::new(256, 16, BufferUsage::STORAGE);
        assert_eq!(desc.size(), 4096);
    }

    #[test]
    fn test_alloc_desc_ignores_name() {
        let a = BufferDesc::new(64, 4, BufferUsage::STORAGE | BufferUsage::COPY_SRC).with_name("a");
        let b = BufferDesc::new(64, 4, BufferUsage::STORAGE | BufferUsage::COPY_SRC).with_name("b");
        assert_eq!(a.alloc_desc(), b.alloc_desc());
        assert_ne!(a, b);
    }
}
