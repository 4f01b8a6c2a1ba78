//! Construction-time tuning for dynamic arrays.
//!
//! Options only affect how an [`ArrayBuilder`] sizes its buffer. They never
//! change the contents or order of the array it produces.
//!
//! ```
//! use plain_array_core::{ArrayOptions, ArrayOptionsOverride, GrowthPolicy};
//!
//! let base = ArrayOptions::default();
//! let options = base.override_with(&ArrayOptionsOverride {
//!     growth: Some(GrowthPolicy::Chunked(64)),
//!     ..Default::default()
//! });
//!
//! assert_eq!(options.initial_capacity, 0);
//! assert_eq!(options.growth, GrowthPolicy::Chunked(64));
//! ```
//!
//! [`ArrayBuilder`]: crate::ArrayBuilder

/// How a builder grows a full buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Geometric growth; amortized O(1) per push.
    #[default]
    Doubling,
    /// Grow by exactly one slot. Never over-allocates, O(n) per push.
    Exact,
    /// Grow by a fixed number of slots. `Chunked(0)` behaves like `Chunked(1)`.
    Chunked(usize),
}

/// Options used when building a [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOptions {
    /// Capacity reserved before the first element is written.
    pub initial_capacity: usize,
    pub growth: GrowthPolicy,
}

/// Partial [`ArrayOptions`]. `None` fields keep the base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayOptionsOverride {
    pub initial_capacity: Option<usize>,
    pub growth: Option<GrowthPolicy>,
}

impl ArrayOptions {
    /// Apply `overrides` on top of `self`.
    pub fn override_with(&self, overrides: &ArrayOptionsOverride) -> Self {
        Self {
            initial_capacity: overrides.initial_capacity.unwrap_or(self.initial_capacity),
            growth: overrides.growth.unwrap_or(self.growth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = ArrayOptions::default();
        assert_eq!(options.initial_capacity, 0);
        assert_eq!(options.growth, GrowthPolicy::Doubling);
    }

    #[test]
    fn test_empty_override_keeps_base() {
        let base = ArrayOptions {
            initial_capacity: 16,
            growth: GrowthPolicy::Exact,
        };
        assert_eq!(base.override_with(&ArrayOptionsOverride::default()), base);
    }

    #[test]
    fn test_override_replaces_set_fields() {
        let base = ArrayOptions {
            initial_capacity: 16,
            growth: GrowthPolicy::Exact,
        };
        let options = base.override_with(&ArrayOptionsOverride {
            initial_capacity: Some(4),
            growth: None,
        });
        assert_eq!(options.initial_capacity, 4);
        assert_eq!(options.growth, GrowthPolicy::Exact);
    }
}
