//! Structural checks a skip list must pass after every public operation.
//!
//! Each predicate covers one invariant and reports the first offending
//! level/key; [`check`] runs them all. They only read the list, so they can
//! be run between any two operations of a test or a harness.

use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use probskip_skiplist::prelude::{Key, Levels, NodeId, NodeRef, SkipList};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{height} levels exceed max level {max_level}")]
    TooManyLevels { height: usize, max_level: usize },

    #[error("level {level} is out of order at key {key}")]
    Unordered { level: usize, key: Key },

    #[error("key {key} on level {level} is missing from the level below")]
    NotNested { level: usize, key: Key },

    #[error("key {key} on level {level} has no lower node")]
    MissingLower { level: usize, key: Key },

    #[error("key {key} on level {level} links to a node outside the level below")]
    StrayLower { level: usize, key: Key },

    #[error("key {key} on level {level} links to lower key {lower}")]
    WrongLower { level: usize, key: Key, lower: Key },

    #[error("bottom key {key} has a lower node")]
    BottomLower { key: Key },

    #[error("bottom level holds {actual:?}, expected {expected:?}")]
    Contents { expected: Vec<Key>, actual: Vec<Key> },
}

fn level_nodes(levels: &Levels, level: usize) -> impl Iterator<Item = NodeRef<'_>> {
    std::iter::successors(levels.head(level).map(|id| levels.node(level, id)), |node| {
        node.next()
    })
}

pub fn level_bound<C, O>(list: &SkipList<C, O>) -> Result<(), Violation> {
    if list.height() > list.max_level() {
        return Err(Violation::TooManyLevels {
            height: list.height(),
            max_level: list.max_level(),
        });
    }
    Ok(())
}

/// Keys strictly increase along every level.
pub fn levels_ordered<C, O>(list: &SkipList<C, O>) -> Result<(), Violation> {
    let levels = list.levels();
    for level in 0..levels.height() {
        let unordered = level_nodes(levels, level)
            .map(|node| node.key())
            .tuple_windows()
            .find(|(a, b)| a >= b);
        if let Some((_, key)) = unordered {
            return Err(Violation::Unordered { level, key });
        }
    }
    Ok(())
}

/// Every level's keys are a subset of the level below.
pub fn levels_nested<C, O>(list: &SkipList<C, O>) -> Result<(), Violation> {
    let levels = list.levels();
    for level in 1..levels.height() {
        let below: HashSet<Key> = level_nodes(levels, level - 1).map(|n| n.key()).collect();
        if let Some(node) = level_nodes(levels, level).find(|n| !below.contains(&n.key())) {
            return Err(Violation::NotNested {
                level,
                key: node.key(),
            });
        }
    }
    Ok(())
}

/// Every node above the bottom links down to a node of the level directly
/// below holding the same key.
pub fn raised_nodes_have_lower<C, O>(list: &SkipList<C, O>) -> Result<(), Violation> {
    let levels = list.levels();
    for level in 1..levels.height() {
        let below: HashSet<NodeId> = level_nodes(levels, level - 1).map(|n| n.id()).collect();
        for node in level_nodes(levels, level) {
            let key = node.key();
            let lower = node
                .lower()
                .ok_or(Violation::MissingLower { level, key })?;
            if !below.contains(&lower.id()) {
                return Err(Violation::StrayLower { level, key });
            }
            if lower.key() != key {
                return Err(Violation::WrongLower {
                    level,
                    key,
                    lower: lower.key(),
                });
            }
        }
    }
    Ok(())
}

pub fn bottom_has_no_lower<C, O>(list: &SkipList<C, O>) -> Result<(), Violation> {
    match level_nodes(list.levels(), 0).find(|node| node.lower().is_some()) {
        Some(node) => Err(Violation::BottomLower { key: node.key() }),
        None => Ok(()),
    }
}

/// The bottom level holds exactly `expected`.
pub fn bottom_matches<C, O>(list: &SkipList<C, O>, expected: &BTreeSet<Key>) -> Result<(), Violation> {
    let actual = list.to_ordered_keys();
    if !actual.iter().eq(expected.iter()) {
        return Err(Violation::Contents {
            expected: expected.iter().copied().collect(),
            actual,
        });
    }
    Ok(())
}

pub fn check<C, O>(list: &SkipList<C, O>, expected: &BTreeSet<Key>) -> Result<(), Violation> {
    level_bound(list)?;
    levels_ordered(list)?;
    levels_nested(list)?;
    raised_nodes_have_lower(list)?;
    bottom_has_no_lower(list)?;
    bottom_matches(list, expected)
}
