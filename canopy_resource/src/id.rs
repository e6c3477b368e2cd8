// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resource identification types.
//!
//! This module provides [`ResourceId`] for naming referenceable resources
//! (styles, strings, colors, ...) and [`AttributeId`] for naming attribute
//! slots within styles and themes.

use core::fmt;

/// An identifier for a referenceable resource.
///
/// This is a lightweight handle (u32) naming one resource across every loaded
/// container. The identifier space is partitioned by the tooling that assigns
/// ids (typically by container and resource kind), but this crate treats it as
/// opaque: ids are only compared and ordered, never decomposed.
///
/// # Example
///
/// ```rust
/// use canopy_resource::ResourceId;
///
/// const STYLE_BUTTON: ResourceId = ResourceId::new(0x7f02_0000);
/// assert_eq!(STYLE_BUTTON.index(), 0x7f02_0000);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(u32);

impl ResourceId {
    /// Creates a new resource ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this resource ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceId").field(&self.0).finish()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({:#010x})", self.0)
    }
}

/// An identifier for an attribute slot.
///
/// Attributes are the named, typed slots styles contribute values to (for
/// example a text color or a corner radius). Like [`ResourceId`] this is an
/// opaque, totally ordered u32 handle; the ordering is what lets attribute
/// tables store entries in a sorted vector with binary-search lookup.
///
/// # Example
///
/// ```rust
/// use canopy_resource::AttributeId;
///
/// const ATTR_TEXT_COLOR: AttributeId = AttributeId::new(0x7f01_0000);
/// assert_eq!(ATTR_TEXT_COLOR.index(), 0x7f01_0000);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeId(u32);

impl AttributeId {
    /// Creates a new attribute ID from the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this attribute ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttributeId").field(&self.0).finish()
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeId({:#010x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn resource_id_basics() {
        let id = ResourceId::new(42);
        assert_eq!(id.index(), 42);

        let id2 = ResourceId::new(42);
        assert_eq!(id, id2);

        let id3 = ResourceId::new(43);
        assert_ne!(id, id3);
        assert!(id < id3);
    }

    #[test]
    fn attribute_id_basics() {
        let id = AttributeId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, AttributeId::new(7));
        assert!(id < AttributeId::new(8));
    }

    #[test]
    fn id_debug() {
        assert_eq!(format!("{:?}", ResourceId::new(42)), "ResourceId(42)");
        assert_eq!(format!("{:?}", AttributeId::new(42)), "AttributeId(42)");
    }

    #[test]
    fn id_display() {
        assert_eq!(
            format!("{}", ResourceId::new(0x7f02_0001)),
            "ResourceId(0x7f020001)"
        );
        assert_eq!(
            format!("{}", AttributeId::new(0x7f01_0001)),
            "AttributeId(0x7f010001)"
        );
    }

    #[test]
    fn id_size() {
        use core::mem::size_of;
        assert_eq!(size_of::<ResourceId>(), 4);
        assert_eq!(size_of::<AttributeId>(), 4);
    }
}
