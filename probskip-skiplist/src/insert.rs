use crate::{arena::NodeId, coin::Coin, key::Key, levels::Levels, search::locate};

/// Last node with a key below `key` on every existing level, indexed by
/// level. `None` means the key belongs in front of that level.
pub fn predecessors(levels: &Levels, key: Key) -> Vec<Option<NodeId>> {
    let height = levels.height();
    let mut preds = vec![None; height];
    let mut prev: Option<NodeId> = None;

    for level in (0..height).rev() {
        while let Some(next) = levels.successor(level, prev) {
            if levels.key(next) >= key {
                break;
            }
            prev = Some(next);
        }
        preds[level] = prev;
        if level > 0 {
            prev = prev.and_then(|prev| levels.lower(prev));
        }
    }
    preds
}

/// Inserts `key` at the bottom level and raises it by repeated coin flips.
///
/// After each splice at level `L` one flip is drawn; heads raises the key to
/// `L + 1`, creating that level if needed, unless `L + 1` reaches the max
/// level. Returns `false` without touching the list or the coin when the key
/// is already present.
pub fn insert(levels: &mut Levels, key: Key, coin: &mut dyn Coin) -> bool {
    if locate(levels, key).found() {
        return false;
    }

    let preds = predecessors(levels, key);
    let mut level = 0;
    let mut below = levels.link_after(0, preds.first().copied().flatten(), key, None);

    while coin.flip(levels.probability()) {
        let up = level + 1;
        if up >= levels.max_level() {
            tracing::debug!("key {} capped at max level {}", key, levels.max_level());
            break;
        }

        tracing::trace!("raise key {} to level {}", key, up);
        let prev = preds.get(up).copied().flatten();
        below = levels.link_after(up, prev, key, Some(below));
        level = up;
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::{coin::ScriptedCoin, levels::Levels};

    use super::{insert, predecessors};

    fn keys_at(levels: &Levels, level: usize) -> Vec<i64> {
        levels
            .iter_level(level)
            .unwrap()
            .map(|node| node.key())
            .collect()
    }

    #[test]
    fn first_key_without_raise() {
        let mut levels = Levels::new(0.5, 3).unwrap();
        let mut coin = ScriptedCoin::new([false]);
        assert!(insert(&mut levels, 7, &mut coin));
        assert_eq!(keys_at(&levels, 0), vec![7]);
        assert_eq!(levels.height(), 1);
        assert_eq!(coin.drawn(), 1);
    }

    #[test]
    fn raise_creates_levels_up_to_max() {
        let mut levels = Levels::new(0.5, 3).unwrap();
        let mut coin = ScriptedCoin::new([true, true, true, true]);
        insert(&mut levels, 7, &mut coin);

        assert_eq!(levels.height(), 3);
        assert_eq!(keys_at(&levels, 2), vec![7]);
        // two raises, then the capped flip
        assert_eq!(coin.drawn(), 3);

        let top = levels.head(2).unwrap();
        let mid = levels.lower(top).unwrap();
        let bottom = levels.lower(mid).unwrap();
        assert_eq!(levels.key(bottom), 7);
        assert_eq!(levels.lower(bottom), None);
    }

    #[test]
    fn raised_key_lands_in_order() {
        let mut levels = Levels::new(0.5, 4).unwrap();
        let mut coin = ScriptedCoin::default();
        coin.push(true).push(false); // 10 -> level 1
        insert(&mut levels, 10, &mut coin);
        coin.push(true).push(false); // 30 -> level 1
        insert(&mut levels, 30, &mut coin);
        coin.push(false);
        insert(&mut levels, 40, &mut coin);
        coin.push(true).push(false); // 20 -> level 1, between 10 and 30
        insert(&mut levels, 20, &mut coin);
        coin.push(true).push(false); // 5 -> level 1, new head
        insert(&mut levels, 5, &mut coin);

        assert_eq!(keys_at(&levels, 0), vec![5, 10, 20, 30, 40]);
        assert_eq!(keys_at(&levels, 1), vec![5, 10, 20, 30]);
        for node in levels.iter_level(1).unwrap() {
            assert_eq!(node.lower().map(|n| n.key()), Some(node.key()));
        }
    }

    #[test]
    fn duplicate_is_noop() {
        let mut levels = Levels::new(0.5, 3).unwrap();
        let mut coin = ScriptedCoin::new([true, false]);
        assert!(insert(&mut levels, 3, &mut coin));
        let drawn = coin.drawn();

        let mut again = ScriptedCoin::new([true, true]);
        assert!(!insert(&mut levels, 3, &mut again));
        assert_eq!(again.drawn(), 0);
        assert_eq!(coin.drawn(), drawn);
        assert_eq!(levels.node_count(), 2);
    }

    #[test]
    fn predecessors_per_level() {
        let mut levels = Levels::new(0.5, 4).unwrap();
        let mut coin = ScriptedCoin::new([true, false, false, true, false]);
        insert(&mut levels, 10, &mut coin); // levels 0..=1
        insert(&mut levels, 20, &mut coin); // level 0
        insert(&mut levels, 30, &mut coin); // levels 0..=1

        let preds = predecessors(&levels, 25);
        let keys: Vec<_> = preds
            .iter()
            .map(|p| p.map(|id| levels.key(id)))
            .collect();
        assert_eq!(keys, vec![Some(20), Some(10)]);

        let preds = predecessors(&levels, 1);
        assert_eq!(preds, vec![None, None]);
    }
}
