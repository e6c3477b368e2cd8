// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style application: parent-chain walking and buffered merging.
//!
//! Application runs in three steps. The parent chain is walked leaf-first
//! and every bag is collected; the collected chain is flattened base-first
//! into a scratch [`AttributeMap`] with unconditional inserts; the scratch
//! map is committed into the theme's map under the caller's `force` policy.
//! Nothing is written to the theme until the whole chain has resolved, so a
//! failing apply leaves the theme untouched.

use smallvec::SmallVec;

use canopy_resource::{ResolveError, ResourceId, ResourceProvider, StyleBag, Value};

use crate::error::ThemeError;
use crate::map::{AttributeEntry, AttributeMap};

/// Bound on parent-chain length. The visited list catches true cycles; this
/// caps degenerate provider data.
const STYLE_CHAIN_LIMIT: usize = 32;

pub(crate) fn apply_style<P: ResourceProvider>(
    provider: &P,
    entries: &mut AttributeMap,
    style: ResourceId,
    force: bool,
) -> Result<(), ThemeError> {
    // Walk the parent chain leaf-first, collecting every bag.
    let mut chain: SmallVec<[StyleBag; 4]> = SmallVec::new();
    let mut visited: SmallVec<[ResourceId; 8]> = SmallVec::new();
    let mut next = Some(style);
    while let Some(id) = next {
        if visited.contains(&id) || visited.len() >= STYLE_CHAIN_LIMIT {
            return Err(ThemeError::CyclicStyleChain(id));
        }
        visited.push(id);
        let bag = provider.resolve_style(id).map_err(|err| match err {
            ResolveError::NotFound => ThemeError::StyleNotFound(id),
            ResolveError::Malformed => ThemeError::MalformedStyle(id),
        })?;
        next = bag.parent;
        chain.push(bag);
    }

    // Flatten base-first. Unconditional inserts make the last write win, so
    // a derived style overrides its ancestors within this call and a later
    // duplicate within one bag overrides an earlier one.
    let mut scratch = AttributeMap::new();
    for bag in chain.iter().rev() {
        for contribution in &bag.entries {
            if matches!(contribution.value, Value::Null) {
                continue;
            }
            scratch.insert(
                contribution.attr,
                AttributeEntry {
                    cookie: contribution.cookie,
                    value: contribution.value,
                    spec_flags: contribution.spec_flags,
                    config_mask: contribution.config_mask,
                },
                true,
            );
        }
    }

    // Commit. `force` only matters against entries from earlier apply calls.
    for (attr, entry) in scratch.iter() {
        entries.insert(attr, *entry, force);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_resource::{
        AttributeId, ConfigMask, Cookie, ResourceTable, SpecFlags, StyleSpec,
    };

    const ATTR_A: AttributeId = AttributeId::new(0x7f01_0000);
    const ATTR_B: AttributeId = AttributeId::new(0x7f01_0001);
    const BASE: ResourceId = ResourceId::new(0x7f02_0000);
    const DERIVED: ResourceId = ResourceId::new(0x7f02_0001);
    const LOOP_A: ResourceId = ResourceId::new(0x7f02_0002);
    const LOOP_B: ResourceId = ResourceId::new(0x7f02_0003);

    #[test]
    fn derived_beats_ancestor_within_one_call() {
        let table = ResourceTable::builder()
            .style(
                BASE,
                StyleSpec::new()
                    .attr(ATTR_A, Value::IntDec(1))
                    .attr(ATTR_B, Value::IntDec(10)),
            )
            .style(
                DERIVED,
                StyleSpec::new().parent(BASE).attr(ATTR_A, Value::IntDec(2)),
            )
            .build();

        let mut entries = AttributeMap::new();
        // Not forced: intra-call ordering alone must give the derived style
        // priority over its ancestor.
        apply_style(&table, &mut entries, DERIVED, false).unwrap();
        assert_eq!(entries.get(ATTR_A).unwrap().value, Value::IntDec(2));
        assert_eq!(entries.get(ATTR_B).unwrap().value, Value::IntDec(10));
    }

    #[test]
    fn later_duplicate_in_one_bag_wins() {
        let table = ResourceTable::builder()
            .style(
                BASE,
                StyleSpec::new()
                    .attr(ATTR_A, Value::IntDec(1))
                    .attr(ATTR_A, Value::IntDec(2)),
            )
            .build();

        let mut entries = AttributeMap::new();
        apply_style(&table, &mut entries, BASE, false).unwrap();
        assert_eq!(entries.get(ATTR_A).unwrap().value, Value::IntDec(2));
    }

    #[test]
    fn null_contributions_are_dropped() {
        let table = ResourceTable::builder()
            .style(
                BASE,
                StyleSpec::new()
                    .attr(ATTR_A, Value::Null)
                    .attr(ATTR_B, Value::Empty),
            )
            .build();

        let mut entries = AttributeMap::new();
        apply_style(&table, &mut entries, BASE, false).unwrap();
        assert_eq!(entries.get(ATTR_A), None);
        assert_eq!(entries.get(ATTR_B).unwrap().value, Value::Empty);
    }

    #[test]
    fn null_does_not_overwrite_ancestor_value() {
        let table = ResourceTable::builder()
            .style(BASE, StyleSpec::new().attr(ATTR_A, Value::IntDec(1)))
            .style(
                DERIVED,
                StyleSpec::new().parent(BASE).attr(ATTR_A, Value::Null),
            )
            .build();

        let mut entries = AttributeMap::new();
        apply_style(&table, &mut entries, DERIVED, false).unwrap();
        assert_eq!(entries.get(ATTR_A).unwrap().value, Value::IntDec(1));
    }

    #[test]
    fn cyclic_parent_chain_fails_atomically() {
        let table = ResourceTable::builder()
            .style(BASE, StyleSpec::new().attr(ATTR_B, Value::IntDec(10)))
            .style(
                LOOP_A,
                StyleSpec::new()
                    .parent(LOOP_B)
                    .attr(ATTR_A, Value::IntDec(1)),
            )
            .style(LOOP_B, StyleSpec::new().parent(LOOP_A))
            .build();

        let mut entries = AttributeMap::new();
        apply_style(&table, &mut entries, BASE, false).unwrap();

        let err = apply_style(&table, &mut entries, LOOP_A, true).unwrap_err();
        assert_eq!(err, ThemeError::CyclicStyleChain(LOOP_A));

        // The failed apply wrote nothing, even with force.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get(ATTR_A), None);
        assert_eq!(entries.get(ATTR_B).unwrap().value, Value::IntDec(10));
    }

    #[test]
    fn missing_parent_fails_atomically() {
        let table = ResourceTable::builder()
            .style(
                DERIVED,
                StyleSpec::new().parent(BASE).attr(ATTR_A, Value::IntDec(1)),
            )
            .build();

        let mut entries = AttributeMap::new();
        let err = apply_style(&table, &mut entries, DERIVED, false).unwrap_err();
        assert_eq!(err, ThemeError::StyleNotFound(BASE));
        assert!(entries.is_empty());
    }

    #[test]
    fn contribution_metadata_is_preserved() {
        let table = ResourceTable::builder()
            .style(
                BASE,
                StyleSpec::new().attr_with(
                    ATTR_A,
                    Value::IntDec(1),
                    SpecFlags::PUBLIC,
                    ConfigMask::LOCALE,
                ),
            )
            .build();

        let mut entries = AttributeMap::new();
        apply_style(&table, &mut entries, BASE, false).unwrap();

        let entry = entries.get(ATTR_A).unwrap();
        assert_eq!(entry.cookie, Cookie::new(0));
        assert_eq!(entry.spec_flags, SpecFlags::PUBLIC);
        assert_eq!(entry.config_mask, ConfigMask::LOCALE);
        assert_eq!(entries.changing_configurations(), ConfigMask::LOCALE);
    }
}
