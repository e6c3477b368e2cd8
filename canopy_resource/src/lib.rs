// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Resource: identifiers, typed values, and the provider contract for
//! layered resource resolution.
//!
//! This crate is the vocabulary layer under `canopy_theme`. It defines the
//! handle types ([`ResourceId`], [`AttributeId`], [`Cookie`],
//! [`StringPoolRef`]), the resolved-value union ([`Value`]), the flag words
//! carried alongside values ([`SpecFlags`], [`ConfigMask`]), and
//! [`ResourceProvider`] — the trait a container loader implements and the
//! theme engine consumes.
//!
//! It also ships [`ResourceTable`], an in-memory provider assembled through
//! a builder, for embedders that declare resources in code and for tests.
//!
//! ## Core Concepts
//!
//! ### Providers
//!
//! A [`ResourceProvider`] owns loaded containers and answers two questions:
//! what does a resource identifier resolve to (with plain reference chains
//! chased internally), and what does a style contribute (its attribute
//! entries plus an optional parent style). Values resolved through a
//! provider carry provenance: a [`Cookie`] naming the source container,
//! which selects the string pool for interpreting string payloads.
//!
//! ```rust
//! use canopy_resource::{
//!     ResourceId, ResourceProvider, ResourceTable, StringPool, Value,
//! };
//!
//! const STRING_APP_NAME: ResourceId = ResourceId::new(0x7f04_0000);
//!
//! let mut pool = StringPool::new();
//! let app_name = pool.intern("Canopy Demo");
//!
//! let table = ResourceTable::builder()
//!     .container(pool)
//!     .entry(STRING_APP_NAME, Value::String(app_name))
//!     .build();
//!
//! let resolved = table.resolve_reference(STRING_APP_NAME).unwrap();
//! let Value::String(s) = resolved.value else { panic!("expected a string") };
//! let pool = table.string_pool(resolved.cookie).unwrap();
//! assert_eq!(pool.get(s), Some("Canopy Demo"));
//! ```
//!
//! ### Styles
//!
//! Styles are declared with [`StyleSpec`]: an ordered list of attribute
//! contributions and an optional parent. How style bags merge into themes —
//! parent-chain walking, override policy, attribute indirection — lives in
//! `canopy_theme`; this crate only materializes the bags.
//!
//! ```rust
//! use canopy_resource::{
//!     AttributeId, ResourceId, ResourceProvider, ResourceTable, StyleSpec, Value,
//! };
//!
//! const ATTR_CORNER_RADIUS: AttributeId = AttributeId::new(0x7f01_0000);
//! const STYLE_CARD: ResourceId = ResourceId::new(0x7f02_0000);
//! const STYLE_DIALOG: ResourceId = ResourceId::new(0x7f02_0001);
//!
//! let table = ResourceTable::builder()
//!     .style(STYLE_CARD, StyleSpec::new().attr(ATTR_CORNER_RADIUS, Value::IntDec(8)))
//!     .style(STYLE_DIALOG, StyleSpec::new().parent(STYLE_CARD))
//!     .build();
//!
//! let bag = table.resolve_style(STYLE_DIALOG).unwrap();
//! assert_eq!(bag.parent, Some(STYLE_CARD));
//! assert!(bag.entries.is_empty());
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod cookie;
mod flags;
mod id;
mod pool;
mod provider;
mod table;
mod value;

pub use cookie::Cookie;
pub use flags::{ConfigMask, SpecFlags};
pub use id::{AttributeId, ResourceId};
pub use pool::StringPool;
pub use provider::{ResolveError, ResolvedValue, ResourceProvider, StyleBag, StyleEntry};
pub use table::{ResourceTable, ResourceTableBuilder, StyleSpec};
pub use value::{StringPoolRef, Value};
