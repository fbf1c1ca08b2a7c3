//! Common types shared across the render graph.

/// Clear value for render targets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClearValue {
    /// No clear operation.
    #[default]
    None,
    /// Clear color attachment with RGBA values.
    Color { r: f32, g: f32, b: f32, a: f32 },
    /// Clear depth attachment.
    Depth(f32),
    /// Clear depth and stencil attachments.
    DepthStencil { depth: f32, stencil: u32 },
}

impl ClearValue {
    /// Opaque black.
    pub const BLACK: Self = Self::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Opaque white.
    pub const WHITE: Self = Self::Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    /// Opaque magenta, used to make stale contents stand out.
    pub const MAGENTA: Self = Self::Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a color clear value.
    pub fn color(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::Color { r, g, b, a }
    }

    /// Create a depth clear value.
    pub fn depth(value: f32) -> Self {
        Self::Depth(value)
    }

    /// Returns true if this value performs a clear.
    pub fn is_clear(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Shader binding slot for global texture bindings.
///
/// Identifies the global shader property a texture is bound to while a pass
/// that reads it executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderSlot(pub u32);

impl ShaderSlot {
    /// Get the raw slot id.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for ShaderSlot {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_value_constants() {
        assert!(ClearValue::BLACK.is_clear());
        assert!(!ClearValue::None.is_clear());
        assert_eq!(ClearValue::color(1.0, 0.0, 1.0, 1.0), ClearValue::MAGENTA);
        assert_eq!(ClearValue::depth(1.0), ClearValue::Depth(1.0));
    }

    #[test]
    fn test_shader_slot_from_u32() {
        let slot: ShaderSlot = 7.into();
        assert_eq!(slot.id(), 7);
    }
}
