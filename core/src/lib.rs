//! # framegraph core
//!
//! Building blocks shared by the render graph: the [`pool`] module with
//! reusable-instance caches and the [`profiling`] macros that forward to Tracy
//! when the `profiling` feature is enabled.

pub mod pool;
pub mod profiling;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
