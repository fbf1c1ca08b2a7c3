//! Resource handles for the render graph.

use std::fmt;

/// Kind of resource a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Texture (render target, shader resource, storage image).
    Texture,
    /// Structured or raw buffer.
    Buffer,
    /// Backend-created list of renderable objects.
    RendererList,
}

impl ResourceKind {
    /// Lowercase name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Buffer => "buffer",
            Self::RendererList => "renderer list",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generic handle to a resource in the render graph.
///
/// Handles use a generation counter to detect stale references: the registry
/// bumps its generation at the end of every frame, so a handle kept past the
/// frame it was created in no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    /// Index into the per-kind resource array.
    index: u32,
    /// Registry generation at creation.
    generation: u32,
}

impl ResourceHandle {
    /// A handle that never resolves.
    pub const INVALID: Self = Self {
        index: u32::MAX,
        generation: 0,
    };

    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Get the index of this resource.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the generation of this handle.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

macro_rules! typed_handle {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) ResourceHandle);

        impl $name {
            /// A handle that never resolves.
            pub const INVALID: Self = Self(ResourceHandle::INVALID);

            /// Kind of resource this handle refers to.
            pub const KIND: ResourceKind = $kind;

            /// Get the untyped handle.
            pub fn handle(&self) -> ResourceHandle {
                self.0
            }

            /// Get the index of this resource.
            pub fn index(&self) -> u32 {
                self.0.index()
            }

            pub(crate) fn slot(&self) -> usize {
                self.0.index() as usize
            }
        }
    };
}

typed_handle!(
    /// Handle to a texture declared in the current frame.
    TextureHandle,
    ResourceKind::Texture
);
typed_handle!(
    /// Handle to a buffer declared in the current frame.
    BufferHandle,
    ResourceKind::Buffer
);
typed_handle!(
    /// Handle to a renderer list declared in the current frame.
    RendererListHandle,
    ResourceKind::RendererList
);

static_assertions::assert_impl_all!(ResourceHandle: Copy, Send, Sync);
static_assertions::assert_impl_all!(TextureHandle: Copy, Send, Sync);
static_assertions::assert_impl_all!(BufferHandle: Copy, Send, Sync);
static_assertions::assert_impl_all!(RendererListHandle: Copy, Send, Sync);
