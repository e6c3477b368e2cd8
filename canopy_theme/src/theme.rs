// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public theme object.
//!
//! A [`Theme`] binds an [`AttributeMap`] to one [`ResourceProvider`]
//! instance and exposes the resolution surface: style application, attribute
//! lookup with theme-local indirection, inter-theme copy, and clearing.

use core::fmt;

use canopy_resource::{
    AttributeId, ConfigMask, Cookie, ResourceId, ResourceProvider, SpecFlags, Value,
};

use crate::apply;
use crate::error::ThemeError;
use crate::map::AttributeMap;

/// Bound on theme-attribute indirection hops during lookup.
const MAX_INDIRECTION_STEPS: u32 = 20;

/// A resolved attribute as returned by [`Theme::attribute`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AttributeValue {
    /// The container the value came from.
    pub cookie: Cookie,
    /// The concrete value. Never [`Value::Attribute`]; indirection is
    /// resolved before a lookup returns.
    pub value: Value,
    /// Visibility flags, ORed across every hop of the indirection chain the
    /// lookup traversed.
    pub spec_flags: SpecFlags,
}

/// A set of resolved attributes built by applying styles, bound to one
/// resource provider for its entire lifetime.
///
/// Styles merge under the overlay policy: within one
/// [`apply_style`](Theme::apply_style) call a derived style beats its
/// ancestors, while across calls an attribute already present is only
/// replaced when the new call is forced. Lookups resolve theme-local
/// attribute indirection ([`Value::Attribute`]) against the theme itself;
/// no provider calls happen at lookup time.
///
/// # Example
///
/// ```rust
/// use canopy_resource::{
///     AttributeId, ResourceId, ResourceTable, StyleSpec, Value,
/// };
/// use canopy_theme::Theme;
///
/// const ATTR_ELEVATION: AttributeId = AttributeId::new(0x7f01_0000);
/// const STYLE_CARD: ResourceId = ResourceId::new(0x7f02_0000);
///
/// let table = ResourceTable::builder()
///     .style(STYLE_CARD, StyleSpec::new().attr(ATTR_ELEVATION, Value::IntDec(4)))
///     .build();
///
/// let mut theme = Theme::new(&table);
/// theme.apply_style(STYLE_CARD, false).unwrap();
///
/// let elevation = theme.attribute(ATTR_ELEVATION).unwrap();
/// assert_eq!(elevation.value, Value::IntDec(4));
/// ```
pub struct Theme<'a, P: ResourceProvider> {
    provider: &'a P,
    entries: AttributeMap,
}

impl<P: ResourceProvider> fmt::Debug for Theme<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("provider", &core::any::type_name::<P>())
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a, P: ResourceProvider> Theme<'a, P> {
    /// Creates an empty theme bound to `provider`.
    ///
    /// The binding is permanent: every lookup and apply resolves against
    /// this provider, and [`Theme::set_to`] only accepts themes bound to
    /// the same instance.
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            entries: AttributeMap::new(),
        }
    }

    /// Returns the bound provider.
    #[must_use]
    #[inline]
    pub fn provider(&self) -> &'a P {
        self.provider
    }

    /// Returns `true` if no attributes have been applied.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes the theme holds.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the aggregate configuration-sensitivity mask of every entry
    /// stored since the last [`Theme::clear`].
    #[must_use]
    #[inline]
    pub fn changing_configurations(&self) -> ConfigMask {
        self.entries.changing_configurations()
    }

    /// Returns an iterator over the attribute IDs the theme holds.
    pub fn attribute_ids(&self) -> impl Iterator<Item = AttributeId> + '_ {
        self.entries.attribute_ids()
    }

    /// Applies a style and its parent chain to this theme.
    ///
    /// Each call is an independent merge pass: base-style attributes merge
    /// before derived-style attributes, and `force` decides whether the
    /// pass overwrites attributes left by earlier calls. A failing apply
    /// leaves the theme exactly as it was.
    pub fn apply_style(&mut self, style: ResourceId, force: bool) -> Result<(), ThemeError> {
        apply::apply_style(self.provider, &mut self.entries, style, force)
    }

    /// Looks up an attribute, resolving theme-local indirection.
    ///
    /// While the stored value is [`Value::Attribute`], the lookup restarts
    /// at the named attribute, ORing visibility flags across hops, bounded
    /// by an iteration limit. Returns `None` for absent attributes and for
    /// indirection chains that are cyclic or too deep.
    #[must_use]
    pub fn attribute(&self, attr: AttributeId) -> Option<AttributeValue> {
        let mut attr = attr;
        let mut spec_flags = SpecFlags::empty();
        for _ in 0..MAX_INDIRECTION_STEPS {
            let entry = self.entries.get(attr)?;
            spec_flags |= entry.spec_flags;
            match entry.value {
                Value::Attribute(next) => attr = next,
                value => {
                    return Some(AttributeValue {
                        cookie: entry.cookie,
                        value,
                        spec_flags,
                    });
                }
            }
        }
        None
    }

    /// Fully resolves a value that may be an indirection or a reference.
    ///
    /// [`Value::Attribute`] resolves through this theme first; a remaining
    /// [`Value::Reference`] then resolves through the provider. Flags
    /// accumulate across both steps. This is the one lookup-side operation
    /// that consults the provider; it serves callers holding raw style
    /// values rather than theme entries.
    #[must_use]
    pub fn resolve_attribute_reference(&self, value: AttributeValue) -> Option<AttributeValue> {
        let resolved = match value.value {
            Value::Attribute(attr) => {
                let mut through_theme = self.attribute(attr)?;
                through_theme.spec_flags |= value.spec_flags;
                through_theme
            }
            _ => value,
        };
        match resolved.value {
            Value::Reference(id) => {
                let entry = self.provider.resolve_reference(id)?;
                Some(AttributeValue {
                    cookie: entry.cookie,
                    value: entry.value,
                    spec_flags: resolved.spec_flags | entry.spec_flags,
                })
            }
            _ => Some(resolved),
        }
    }

    /// Replaces this theme's attributes with a copy of `other`'s.
    ///
    /// Fails with [`ThemeError::ProviderMismatch`] — leaving `self`
    /// unmodified — unless both themes are bound to the same provider
    /// instance: cookies are only meaningful to the provider that issued
    /// them.
    pub fn set_to(&mut self, other: &Theme<'_, P>) -> Result<(), ThemeError> {
        if !core::ptr::eq(self.provider, other.provider) {
            return Err(ThemeError::ProviderMismatch);
        }
        self.entries.copy_from(&other.entries);
        Ok(())
    }

    /// Removes every applied attribute. Always succeeds.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
