// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Theme: layered style resolution over resource providers.
//!
//! This crate is the resolution engine above `canopy_resource`: it turns
//! style identifiers into a set of resolved attributes and answers attribute
//! lookups with provenance and metadata.
//!
//! ## Core Concepts
//!
//! ### Themes
//!
//! [`Theme`] is the public object. It is bound to one
//! [`ResourceProvider`](canopy_resource::ResourceProvider) instance at
//! construction and accumulates attributes as styles are applied:
//!
//! ```rust
//! use canopy_resource::{
//!     AttributeId, ResourceId, ResourceTable, StyleSpec, Value,
//! };
//! use canopy_theme::Theme;
//!
//! const ATTR_TEXT_SIZE: AttributeId = AttributeId::new(0x7f01_0000);
//! const ATTR_TEXT_COLOR: AttributeId = AttributeId::new(0x7f01_0001);
//! const STYLE_BODY: ResourceId = ResourceId::new(0x7f02_0000);
//! const STYLE_EMPHASIS: ResourceId = ResourceId::new(0x7f02_0001);
//!
//! let table = ResourceTable::builder()
//!     .style(
//!         STYLE_BODY,
//!         StyleSpec::new()
//!             .attr(ATTR_TEXT_SIZE, Value::IntDec(14))
//!             .attr(ATTR_TEXT_COLOR, Value::Color(0xff22_2222)),
//!     )
//!     .style(
//!         STYLE_EMPHASIS,
//!         StyleSpec::new()
//!             .parent(STYLE_BODY)
//!             .attr(ATTR_TEXT_COLOR, Value::Color(0xffd4_3900)),
//!     )
//!     .build();
//!
//! let mut theme = Theme::new(&table);
//! theme.apply_style(STYLE_EMPHASIS, false).unwrap();
//!
//! // The parent's size is inherited; the derived color wins.
//! assert_eq!(theme.attribute(ATTR_TEXT_SIZE).unwrap().value, Value::IntDec(14));
//! assert_eq!(theme.attribute(ATTR_TEXT_COLOR).unwrap().value, Value::Color(0xffd4_3900));
//! ```
//!
//! ### Overlaying
//!
//! Applying another style is a merge pass over the same theme. Without
//! `force`, attributes already present win; with `force`, the new pass
//! wins. Within a single pass, a style always beats the ancestors it
//! inherits from, whatever the `force` flag says — `force` is about
//! *earlier passes*, not about the parent chain.
//!
//! ### Indirection
//!
//! A stored value may be a theme-attribute indirection
//! ([`Value::Attribute`](canopy_resource::Value::Attribute)): "whatever
//! attribute X resolves to in this theme." [`Theme::attribute`] chases
//! these lazily, entirely inside the theme, with a bounded number of hops;
//! cycles report "not found" rather than looping.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod apply;
mod error;
mod map;
mod theme;

pub use error::ThemeError;
pub use map::{AttributeEntry, AttributeMap};
pub use theme::{AttributeValue, Theme};
