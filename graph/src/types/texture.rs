//! Texture types and descriptors.

use super::{ClearValue, ShaderSlot};

/// Texture format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TextureFormat {
    // 8-bit formats
    /// 8-bit red channel, unsigned normalized.
    R8Unorm,
    /// 8-bit red channel, unsigned integer.
    R8Uint,

    // 16-bit formats
    /// 16-bit red channel, float.
    R16Float,
    /// 8-bit RG channels, unsigned normalized.
    Rg8Unorm,

    // 32-bit formats
    /// 32-bit red channel, float.
    R32Float,
    /// 32-bit red channel, unsigned integer.
    R32Uint,
    /// 16-bit RG channels, float.
    Rg16Float,
    /// 8-bit RGBA channels, unsigned normalized.
    #[default]
    Rgba8Unorm,
    /// 8-bit RGBA channels, sRGB.
    Rgba8UnormSrgb,
    /// 8-bit BGRA channels, unsigned normalized.
    Bgra8Unorm,
    /// 11/11/10-bit packed float.
    Rg11b10Float,

    // 64-bit formats
    /// 16-bit RGBA channels, float.
    Rgba16Float,

    // 128-bit formats
    /// 32-bit RGBA channels, float.
    Rgba32Float,

    // Depth/stencil formats
    /// 16-bit depth.
    Depth16Unorm,
    /// 24-bit depth with 8-bit stencil.
    Depth24PlusStencil8,
    /// 32-bit depth, float.
    Depth32Float,
}

impl TextureFormat {
    /// Returns true if this is a depth or stencil format.
    pub fn is_depth_stencil(&self) -> bool {
        matches!(
            self,
            Self::Depth16Unorm | Self::Depth24PlusStencil8 | Self::Depth32Float
        )
    }

    /// Returns true if this format has a stencil component.
    pub fn has_stencil(&self) -> bool {
        matches!(self, Self::Depth24PlusStencil8)
    }
}

/// Dimensionality of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureDimension {
    /// Plain 2D texture.
    #[default]
    D2,
    /// Array of 2D slices.
    D2Array,
    /// Volume texture.
    D3,
    /// Cube map (six faces per slice).
    Cube,
}

/// Texture dimensions, either fixed or derived from the frame's rendering size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureSize {
    /// Absolute size in pixels.
    Explicit { width: u32, height: u32 },
    /// Relative to the rendering size (1.0 = full resolution).
    Scale { x: f32, y: f32 },
    /// Computed from the rendering size by a function.
    Functor(fn(u32, u32) -> (u32, u32)),
}

impl Default for TextureSize {
    fn default() -> Self {
        TextureSize::Scale { x: 1.0, y: 1.0 }
    }
}

impl TextureSize {
    /// Resolve to pixel dimensions for the given rendering size.
    ///
    /// Scaled sizes never resolve below one pixel.
    pub fn resolve(&self, rendering_width: u32, rendering_height: u32) -> (u32, u32) {
        match *self {
            TextureSize::Explicit { width, height } => (width, height),
            TextureSize::Scale { x, y } => (
                ((rendering_width as f32 * x) as u32).max(1),
                ((rendering_height as f32 * y) as u32).max(1),
            ),
            TextureSize::Functor(size_fn) => {
                let (width, height) = size_fn(rendering_width, rendering_height);
                (width.max(1), height.max(1))
            }
        }
    }
}

/// Descriptor for a render graph texture.
///
/// Only the physical properties (see [`TextureAllocDesc`]) decide whether two
/// textures can share a backing allocation. The name and binding slot are
/// per-resource metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Size mode.
    pub size: TextureSize,
    /// Number of array slices (or depth for volume textures).
    pub slices: u32,
    /// Dimensionality.
    pub dimension: TextureDimension,
    /// Texture format.
    pub format: TextureFormat,
    /// Mip level count.
    pub mip_levels: u32,
    /// Allow unordered (storage) writes.
    pub enable_random_write: bool,
    /// Use the frame's MSAA sample count when multisampling is supported.
    pub enable_msaa: bool,
    /// Clear the texture when its backing is allocated.
    pub clear_buffer: bool,
    /// Value used for clears at allocation.
    pub clear_value: ClearValue,
    /// Debug name.
    pub name: String,
    /// Global shader slot this texture is bound to while read by a pass.
    pub binding_slot: Option<ShaderSlot>,
}

impl Default for TextureDesc {
    fn default() -> Self {
        Self {
            size: TextureSize::default(),
            slices: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::default(),
            mip_levels: 1,
            enable_random_write: false,
            enable_msaa: false,
            clear_buffer: false,
            clear_value: ClearValue::BLACK,
            name: String::new(),
            binding_slot: None,
        }
    }
}

impl TextureDesc {
    /// Create a descriptor with an explicit pixel size.
    pub fn new_2d(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            size: TextureSize::Explicit { width, height },
            format,
            ..Self::default()
        }
    }

    /// Create a descriptor sized relative to the rendering size.
    pub fn scaled(x: f32, y: f32, format: TextureFormat) -> Self {
        Self {
            size: TextureSize::Scale { x, y },
            format,
            ..Self::default()
        }
    }

    /// Set the debug name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the global shader slot used while the texture is read.
    pub fn with_binding_slot(mut self, slot: impl Into<ShaderSlot>) -> Self {
        self.binding_slot = Some(slot.into());
        self
    }

    /// Set the mip level count.
    pub fn with_mip_levels(mut self, count: u32) -> Self {
        self.mip_levels = count;
        self
    }

    /// Set the slice count and dimension.
    pub fn with_slices(mut self, slices: u32, dimension: TextureDimension) -> Self {
        self.slices = slices;
        self.dimension = dimension;
        self
    }

    /// Allow storage writes.
    pub fn with_random_write(mut self, enabled: bool) -> Self {
        self.enable_random_write = enabled;
        self
    }

    /// Opt into multisampling.
    pub fn with_msaa(mut self, enabled: bool) -> Self {
        self.enable_msaa = enabled;
        self
    }

    /// Clear the texture with `value` when it is allocated.
    pub fn with_clear(mut self, value: ClearValue) -> Self {
        self.clear_buffer = true;
        self.clear_value = value;
        self
    }

    /// Resolve the physical allocation parameters for a frame.
    pub fn resolve(
        &self,
        rendering_width: u32,
        rendering_height: u32,
        msaa_samples: u32,
    ) -> TextureAllocDesc {
        let (width, height) = self.size.resolve(rendering_width, rendering_height);
        TextureAllocDesc {
            width,
            height,
            slices: self.slices.max(1),
            dimension: self.dimension,
            format: self.format,
            mip_levels: self.mip_levels.max(1),
            sample_count: if self.enable_msaa { msaa_samples.max(1) } else { 1 },
            random_write: self.enable_random_write,
        }
    }
}

/// Physical allocation parameters of a texture.
///
/// Two textures with equal `TextureAllocDesc` can share one backing
/// allocation when their lifetime windows do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureAllocDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Array slices or depth.
    pub slices: u32,
    /// Dimensionality.
    pub dimension: TextureDimension,
    /// Texture format.
    pub format: TextureFormat,
    /// Mip level count.
    pub mip_levels: u32,
    /// Resolved sample count.
    pub sample_count: u32,
    /// Storage writes allowed.
    pub random_write: bool,
}
