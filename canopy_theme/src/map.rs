// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered attribute table behind a theme.
//!
//! # Implementation
//!
//! Entries live in a vector sorted by [`AttributeId`] with binary-search
//! lookup. This provides:
//!
//! - Better cache locality than a hash map (contiguous memory)
//! - Lower memory overhead (no hash buckets)
//! - O(log n) lookup, fast for the attribute counts real themes hold
//!
//! The map also maintains an aggregate [`ConfigMask`]: the OR of the mask of
//! every entry that was ever stored since the last [`AttributeMap::clear`].

use alloc::vec::Vec;

use canopy_resource::{AttributeId, ConfigMask, Cookie, SpecFlags, Value};

/// One resolved attribute held by a theme.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttributeEntry {
    /// The container the value came from.
    pub cookie: Cookie,
    /// The stored value. May be [`Value::Attribute`], resolved lazily at
    /// lookup time.
    pub value: Value,
    /// Visibility flags for the entry.
    pub spec_flags: SpecFlags,
    /// Configuration axes whose change could invalidate the entry.
    pub config_mask: ConfigMask,
}

/// A mapping from [`AttributeId`] to [`AttributeEntry`] with an aggregate
/// configuration-sensitivity mask.
///
/// The insert policy is the heart of style overlaying: a fresh attribute is
/// always stored, an existing one is overwritten only under `force`. The
/// aggregate mask ORs in the mask of every stored entry; skipped inserts do
/// not contribute.
///
/// # Example
///
/// ```rust
/// use canopy_resource::{AttributeId, ConfigMask, Cookie, SpecFlags, Value};
/// use canopy_theme::{AttributeEntry, AttributeMap};
///
/// const ATTR_TEXT_COLOR: AttributeId = AttributeId::new(0x7f01_0000);
///
/// let entry = AttributeEntry {
///     cookie: Cookie::new(0),
///     value: Value::Color(0xff33_3333),
///     spec_flags: SpecFlags::PUBLIC,
///     config_mask: ConfigMask::UI_MODE,
/// };
///
/// let mut map = AttributeMap::new();
/// assert!(map.insert(ATTR_TEXT_COLOR, entry, false));
/// assert_eq!(map.get(ATTR_TEXT_COLOR), Some(&entry));
/// assert_eq!(map.changing_configurations(), ConfigMask::UI_MODE);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttributeMap {
    /// Sorted by [`AttributeId`] for binary search lookup.
    entries: Vec<(AttributeId, AttributeEntry)>,
    config_mask: ConfigMask,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the map.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the aggregate configuration-sensitivity mask.
    #[must_use]
    #[inline]
    pub fn changing_configurations(&self) -> ConfigMask {
        self.config_mask
    }

    #[inline]
    fn find_entry(&self, attr: AttributeId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&attr, |(id, _)| *id)
    }

    /// Inserts an entry, returning whether it was stored.
    ///
    /// An absent attribute is always stored. A present one is overwritten
    /// only when `force` is `true`. The aggregate mask ORs in the entry's
    /// mask exactly when the entry was stored.
    pub fn insert(&mut self, attr: AttributeId, entry: AttributeEntry, force: bool) -> bool {
        match self.find_entry(attr) {
            Ok(index) => {
                if !force {
                    return false;
                }
                self.entries[index].1 = entry;
            }
            Err(index) => {
                self.entries.insert(index, (attr, entry));
            }
        }
        self.config_mask |= entry.config_mask;
        true
    }

    /// Gets the entry for an attribute, if present. Exact-key lookup, no
    /// fallback.
    #[must_use]
    #[inline]
    pub fn get(&self, attr: AttributeId) -> Option<&AttributeEntry> {
        self.find_entry(attr)
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Replaces this map's entries and aggregate mask with a copy of
    /// `other`'s.
    pub fn copy_from(&mut self, other: &Self) {
        self.entries.clear();
        self.entries.extend_from_slice(&other.entries);
        self.config_mask = other.config_mask;
    }

    /// Removes every entry and resets the aggregate mask.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.config_mask = ConfigMask::empty();
    }

    /// Returns an iterator over the attribute IDs with entries, in order.
    pub fn attribute_ids(&self) -> impl Iterator<Item = AttributeId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Returns an iterator over entries, in attribute-ID order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &AttributeEntry)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }
}
