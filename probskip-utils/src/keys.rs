use std::{collections::HashSet, ops::RangeInclusive};

use rand::Rng;

/// Draws `count` distinct keys uniformly from `range`, in draw order.
///
/// # Panics
///
/// Panics if `range` holds fewer than `count` values.
pub fn distinct_keys<R>(rng: &mut R, count: usize, range: RangeInclusive<i64>) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let span = range.end().abs_diff(*range.start()).saturating_add(1);
    assert!(
        !range.is_empty() && span >= count as u64,
        "range {range:?} cannot hold {count} distinct keys"
    );

    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.random_range(range.clone());
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys
}
