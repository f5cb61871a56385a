use std::{fmt, marker::PhantomData};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    coin::Coin,
    error::Result,
    key::{AsKey, Key},
    levels::{LevelIter, Levels, NodeRef},
    ops::{Operations, Standard},
};

/// A randomized ordered set of integer keys.
///
/// Keys live in a stack of sorted linked levels. Level 0 holds every key;
/// each insertion raises the new key one level at a time for as long as the
/// coin lands heads with probability `p`, never past `max_level` levels.
///
/// Every read and write goes through `O`, see [`Operations`].
#[derive(Debug, Clone)]
pub struct SkipList<C = StdRng, O = Standard> {
    levels: Levels,
    coin: C,
    _ops: PhantomData<O>,
}

impl SkipList<StdRng> {
    /// A list drawing its coin flips from an OS-seeded generator.
    pub fn new(p: f64, max_level: usize) -> Result<Self> {
        Self::with_coin(p, max_level, StdRng::from_os_rng())
    }

    /// A list whose shape is reproducible from `seed`.
    pub fn seeded(p: f64, max_level: usize, seed: u64) -> Result<Self> {
        Self::with_coin(p, max_level, StdRng::seed_from_u64(seed))
    }
}

impl<C, O> SkipList<C, O>
where
    C: Coin,
    O: Operations,
{
    pub fn with_coin(p: f64, max_level: usize, coin: C) -> Result<Self> {
        Ok(Self {
            levels: Levels::new(p, max_level)?,
            coin,
            _ops: PhantomData,
        })
    }

    /// Rebinds the list to another set of operations, keeping its contents.
    pub fn with_operations<P: Operations>(self) -> SkipList<C, P> {
        SkipList {
            levels: self.levels,
            coin: self.coin,
            _ops: PhantomData,
        }
    }

    /// Inserts `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: impl AsKey) -> Result<bool> {
        let key = key.as_key()?;
        let inserted = O::insert(&mut self.levels, key, &mut self.coin);
        tracing::trace!(key, inserted, height = self.levels.height(), "insert");
        Ok(inserted)
    }

    /// Removes `key` from every level. Returns `false` if it was absent.
    pub fn delete(&mut self, key: impl AsKey) -> Result<bool> {
        let key = key.as_key()?;
        let removed = O::delete(&mut self.levels, key);
        tracing::trace!(key, removed, height = self.levels.height(), "delete");
        Ok(removed > 0)
    }

    /// The highest node holding `key`.
    pub fn search(&self, key: impl AsKey) -> Result<Option<NodeRef<'_>>> {
        let key = key.as_key()?;
        Ok(O::search(&self.levels, key))
    }

    pub fn contains(&self, key: impl AsKey) -> Result<bool> {
        let key = key.as_key()?;
        Ok(O::contains(&self.levels, key))
    }

    /// Highest level `key` occupies, `None` if absent.
    pub fn level_of(&self, key: impl AsKey) -> Result<Option<usize>> {
        let key = key.as_key()?;
        Ok(O::level_of(&self.levels, key))
    }
}

impl<C, O> SkipList<C, O> {
    pub fn probability(&self) -> f64 {
        self.levels.probability()
    }

    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }

    pub fn height(&self) -> usize {
        self.levels.height()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn coin(&self) -> &C {
        &self.coin
    }

    /// Bottom-level keys, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.levels.keys()
    }

    pub fn to_ordered_keys(&self) -> Vec<Key> {
        self.iter().collect()
    }

    pub fn nodes_at_level(&self, level: usize) -> Result<LevelIter<'_>> {
        self.levels.iter_level(level)
    }

    pub fn keys_at_level(&self, level: usize) -> Result<Vec<Key>> {
        Ok(self.nodes_at_level(level)?.map(|node| node.key()).collect())
    }

    /// Identical parameters and node graph, see [`Levels::structurally_equal`].
    pub fn structurally_equal<D, P>(&self, other: &SkipList<D, P>) -> bool {
        self.levels.structurally_equal(&other.levels)
    }

    /// Identical parameters and key set, see [`Levels::equivalent`].
    pub fn equivalent<D, P>(&self, other: &SkipList<D, P>) -> bool {
        self.levels.equivalent(&other.levels)
    }
}

impl<C, O> fmt::Display for SkipList<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.levels, f)
    }
}
