// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolver contract consumed by the theme engine.
//!
//! A [`ResourceProvider`] is the service that knows how to turn resource
//! identifiers into concrete entries: it owns the loaded containers, picks
//! the best configuration-qualified variant, and chases plain
//! resource-to-resource reference chains. The theme engine in `canopy_theme`
//! is written against this trait and never touches container data directly.

use alloc::vec::Vec;
use core::fmt;

use crate::cookie::Cookie;
use crate::flags::{ConfigMask, SpecFlags};
use crate::id::{AttributeId, ResourceId};
use crate::pool::StringPool;
use crate::value::Value;

/// A fully resolved resource entry.
///
/// The value is never [`Value::Reference`]; reference chains are followed by
/// the provider before an entry is returned. It may still be
/// [`Value::Attribute`], which only a theme can resolve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedValue {
    /// The container the value came from.
    pub cookie: Cookie,
    /// The resolved value.
    pub value: Value,
    /// Visibility flags for the resolved entry.
    pub spec_flags: SpecFlags,
    /// Configuration axes whose change could invalidate this resolution.
    pub config_mask: ConfigMask,
}

/// One attribute contribution within a style bag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleEntry {
    /// The attribute slot this entry contributes to.
    pub attr: AttributeId,
    /// The contributed value, stored raw (references are not chased here).
    pub value: Value,
    /// The container the contribution came from.
    pub cookie: Cookie,
    /// Visibility flags for the contribution.
    pub spec_flags: SpecFlags,
    /// Configuration axes whose change could invalidate the contribution.
    pub config_mask: ConfigMask,
}

/// A materialized style: its own contributions plus an optional parent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBag {
    /// The style's own attribute contributions, in declaration order.
    pub entries: Vec<StyleEntry>,
    /// The style this one inherits from, already resolved to a concrete
    /// style identifier.
    pub parent: Option<ResourceId>,
}

/// Why a style identifier failed to materialize.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The identifier does not name any known resource.
    NotFound,
    /// The identifier names a resource that is not structurally a style.
    Malformed,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("resource not found"),
            Self::Malformed => f.write_str("resource is not a well-formed style"),
        }
    }
}

impl core::error::Error for ResolveError {}

/// The resolver service the theme engine is written against.
///
/// Implementations own the loaded containers and their priority order. All
/// methods take `&self`: a provider must be safe to read from while any
/// number of themes bound to it resolve lookups.
pub trait ResourceProvider {
    /// Resolves a resource identifier to its best-matching concrete entry.
    ///
    /// Plain reference chains are followed internally; the returned value is
    /// never [`Value::Reference`]. Returns `None` for unknown identifiers
    /// and for reference chains that do not terminate.
    fn resolve_reference(&self, id: ResourceId) -> Option<ResolvedValue>;

    /// Materializes a style: its ordered contribution list and parent.
    ///
    /// An identifier that reaches a style only through plain references is
    /// resolved internally, like [`ResourceProvider::resolve_reference`]
    /// does for values.
    fn resolve_style(&self, id: ResourceId) -> Result<StyleBag, ResolveError>;

    /// Returns the string pool of the container named by `cookie`.
    ///
    /// Used by callers interpreting [`Value::String`] payloads; the theme
    /// engine itself never calls this.
    fn string_pool(&self, cookie: Cookie) -> Option<&StringPool>;
}
