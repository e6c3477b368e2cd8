// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory resource container set.
//!
//! This module provides [`ResourceTable`], a [`ResourceProvider`] over
//! builder-declared containers. It exists for embedders that assemble
//! resources in code and for exercising the theme engine without a binary
//! container loader; a production loader would implement
//! [`ResourceProvider`] over mapped container data instead.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::cookie::Cookie;
use crate::flags::{ConfigMask, SpecFlags};
use crate::id::{AttributeId, ResourceId};
use crate::pool::StringPool;
use crate::provider::{ResolveError, ResolvedValue, ResourceProvider, StyleBag, StyleEntry};
use crate::value::Value;

/// Bound on plain-reference chases, shared by value and style resolution.
const REFERENCE_CHAIN_LIMIT: usize = 20;

#[derive(Debug, Default)]
struct Container {
    pool: StringPool,
    entries: HashMap<ResourceId, EntryData>,
    styles: HashMap<ResourceId, StyleData>,
}

#[derive(Debug)]
struct EntryData {
    value: Value,
    spec_flags: SpecFlags,
    config_mask: ConfigMask,
}

#[derive(Debug)]
struct StyleData {
    parent: Option<ResourceId>,
    entries: Vec<SpecEntry>,
}

#[derive(Debug)]
struct SpecEntry {
    attr: AttributeId,
    value: Value,
    spec_flags: SpecFlags,
    config_mask: ConfigMask,
}

/// An immutable, in-memory set of resource containers.
///
/// Containers are declared through [`ResourceTableBuilder`] and receive
/// cookies in declaration order. Lookups scan containers last-to-first, so a
/// later container shadows entries of an earlier one — the overlay stacking
/// rule a loader-backed provider would apply.
///
/// # Example
///
/// ```rust
/// use canopy_resource::{
///     ResourceId, ResourceProvider, ResourceTable, StringPool, Value,
/// };
///
/// const COLOR_ACCENT: ResourceId = ResourceId::new(0x7f03_0000);
/// const COLOR_BRAND: ResourceId = ResourceId::new(0x7f03_0001);
///
/// let table = ResourceTable::builder()
///     .container(StringPool::new())
///     .entry(COLOR_ACCENT, Value::Color(0xff00_7fd4))
///     .entry(COLOR_BRAND, Value::Reference(COLOR_ACCENT))
///     .build();
///
/// // References are chased internally.
/// let resolved = table.resolve_reference(COLOR_BRAND).unwrap();
/// assert_eq!(resolved.value, Value::Color(0xff00_7fd4));
/// ```
#[derive(Debug, Default)]
pub struct ResourceTable {
    containers: Vec<Container>,
}

impl ResourceTable {
    /// Creates a builder for declaring containers and their contents.
    #[must_use]
    pub fn builder() -> ResourceTableBuilder {
        ResourceTableBuilder::new()
    }

    /// Returns the number of containers in this table.
    #[must_use]
    #[inline]
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Finds the highest-priority entry for `id`.
    fn find_entry(&self, id: ResourceId) -> Option<(Cookie, &EntryData)> {
        self.containers
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, container)| {
                let entry = container.entries.get(&id)?;
                let cookie = Cookie::new(u32::try_from(index).ok()?);
                Some((cookie, entry))
            })
    }

    /// Finds the highest-priority style for `id`.
    fn find_style(&self, id: ResourceId) -> Option<(Cookie, &StyleData)> {
        self.containers
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, container)| {
                let style = container.styles.get(&id)?;
                let cookie = Cookie::new(u32::try_from(index).ok()?);
                Some((cookie, style))
            })
    }
}

impl ResourceProvider for ResourceTable {
    fn resolve_reference(&self, id: ResourceId) -> Option<ResolvedValue> {
        let mut id = id;
        let mut spec_flags = SpecFlags::empty();
        let mut config_mask = ConfigMask::empty();
        // Sensitivity accumulates across the chain: a change that re-selects
        // any link re-selects the result.
        for _ in 0..REFERENCE_CHAIN_LIMIT {
            let (cookie, entry) = self.find_entry(id)?;
            spec_flags |= entry.spec_flags;
            config_mask |= entry.config_mask;
            match entry.value {
                Value::Reference(next) => id = next,
                value => {
                    return Some(ResolvedValue {
                        cookie,
                        value,
                        spec_flags,
                        config_mask,
                    });
                }
            }
        }
        None
    }

    fn resolve_style(&self, id: ResourceId) -> Result<StyleBag, ResolveError> {
        let mut id = id;
        for _ in 0..REFERENCE_CHAIN_LIMIT {
            if let Some((cookie, style)) = self.find_style(id) {
                let entries = style
                    .entries
                    .iter()
                    .map(|e| StyleEntry {
                        attr: e.attr,
                        value: e.value,
                        cookie,
                        spec_flags: e.spec_flags,
                        config_mask: e.config_mask,
                    })
                    .collect();
                return Ok(StyleBag {
                    entries,
                    parent: style.parent,
                });
            }
            match self.find_entry(id) {
                Some((_, entry)) => match entry.value {
                    Value::Reference(next) => id = next,
                    _ => return Err(ResolveError::Malformed),
                },
                None => return Err(ResolveError::NotFound),
            }
        }
        Err(ResolveError::NotFound)
    }

    fn string_pool(&self, cookie: Cookie) -> Option<&StringPool> {
        let index = usize::try_from(cookie.index()).ok()?;
        self.containers.get(index).map(|container| &container.pool)
    }
}

/// The declaration of one style for [`ResourceTableBuilder::style`].
///
/// # Example
///
/// ```rust
/// use canopy_resource::{AttributeId, ResourceId, StyleSpec, Value};
///
/// const ATTR_ELEVATION: AttributeId = AttributeId::new(0x7f01_0000);
/// const STYLE_CARD: ResourceId = ResourceId::new(0x7f02_0000);
///
/// let spec = StyleSpec::new()
///     .parent(STYLE_CARD)
///     .attr(ATTR_ELEVATION, Value::IntDec(4));
/// ```
#[derive(Debug, Default)]
pub struct StyleSpec {
    parent: Option<ResourceId>,
    entries: Vec<SpecEntry>,
}

impl StyleSpec {
    /// Creates an empty style declaration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the style this one inherits from.
    #[must_use]
    pub fn parent(mut self, parent: ResourceId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Adds an attribute contribution with empty flag words.
    #[must_use]
    pub fn attr(self, attr: AttributeId, value: Value) -> Self {
        self.attr_with(attr, value, SpecFlags::empty(), ConfigMask::empty())
    }

    /// Adds an attribute contribution with explicit flag words.
    #[must_use]
    pub fn attr_with(
        mut self,
        attr: AttributeId,
        value: Value,
        spec_flags: SpecFlags,
        config_mask: ConfigMask,
    ) -> Self {
        self.entries.push(SpecEntry {
            attr,
            value,
            spec_flags,
            config_mask,
        });
        self
    }
}

/// Builder for [`ResourceTable`] instances.
///
/// [`ResourceTableBuilder::container`] starts a new container (cookies are
/// assigned in call order); subsequent [`ResourceTableBuilder::entry`] and
/// [`ResourceTableBuilder::style`] calls populate the most recent one. A
/// builder used without declaring a container first gets an implicit empty
/// container with cookie 0.
#[derive(Debug, Default)]
pub struct ResourceTableBuilder {
    containers: Vec<Container>,
}

impl ResourceTableBuilder {
    /// Creates a builder with no containers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&mut self) -> &mut Container {
        if self.containers.is_empty() {
            self.containers.push(Container::default());
        }
        self.containers
            .last_mut()
            .expect("container list is non-empty")
    }

    /// Starts a new container owning the given string pool.
    #[must_use]
    pub fn container(mut self, pool: StringPool) -> Self {
        self.containers.push(Container {
            pool,
            ..Container::default()
        });
        self
    }

    /// Adds a resource entry with empty flag words to the current container.
    #[must_use]
    pub fn entry(self, id: ResourceId, value: Value) -> Self {
        self.entry_with(id, value, SpecFlags::empty(), ConfigMask::empty())
    }

    /// Adds a resource entry with explicit flag words to the current
    /// container.
    #[must_use]
    pub fn entry_with(
        mut self,
        id: ResourceId,
        value: Value,
        spec_flags: SpecFlags,
        config_mask: ConfigMask,
    ) -> Self {
        self.current().entries.insert(
            id,
            EntryData {
                value,
                spec_flags,
                config_mask,
            },
        );
        self
    }

    /// Adds a style to the current container.
    #[must_use]
    pub fn style(mut self, id: ResourceId, spec: StyleSpec) -> Self {
        self.current().styles.insert(
            id,
            StyleData {
                parent: spec.parent,
                entries: spec.entries,
            },
        );
        self
    }

    /// Builds the immutable table.
    #[must_use]
    pub fn build(self) -> ResourceTable {
        ResourceTable {
            containers: self.containers,
        }
    }
}
