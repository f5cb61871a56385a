use crate::{key::Key, levels::Levels, search::locate};

/// Removes every occurrence of `key`, highest level first.
///
/// Each round unlinks the occurrence the descent stops at, dropping its level
/// if that empties it, and searches again until the key is gone. Returns the
/// number of nodes freed; zero when the key was absent.
pub fn delete(levels: &mut Levels, key: Key) -> usize {
    let mut removed = 0;
    loop {
        let pos = locate(levels, key);
        let Some(node) = pos.node else {
            break;
        };
        levels.unlink(pos.level, pos.prev, node);
        removed += 1;
    }

    if removed > 0 {
        tracing::trace!("deleted key {} from {} level(s)", key, removed);
    }
    removed
}

#[cfg(test)]
mod tests {
    use crate::{coin::ScriptedCoin, insert::insert, levels::Levels};

    use super::delete;

    fn build(keys_and_heights: &[(i64, usize)], max_level: usize) -> Levels {
        let mut levels = Levels::new(0.5, max_level).unwrap();
        for &(key, height) in keys_and_heights {
            let mut coin = ScriptedCoin::new((0..height).map(|i| i + 1 < height));
            insert(&mut levels, key, &mut coin);
        }
        levels
    }

    #[test]
    fn absent_key() {
        let mut levels = build(&[(1, 1), (2, 2)], 3);
        assert_eq!(delete(&mut levels, 9), 0);
        assert_eq!(levels.node_count(), 3);

        let mut empty = Levels::new(0.5, 3).unwrap();
        assert_eq!(delete(&mut empty, 9), 0);
    }

    #[test]
    fn removes_whole_tower() {
        let mut levels = build(&[(10, 1), (20, 3), (30, 2)], 4);
        assert_eq!(levels.height(), 3);

        assert_eq!(delete(&mut levels, 20), 3);
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec![10, 30]);
        // level 2 held only 20
        assert_eq!(levels.height(), 2);
        assert_eq!(levels.node_count(), 3);
    }

    #[test]
    fn removes_head_of_level() {
        let mut levels = build(&[(10, 2), (20, 2), (30, 1)], 3);
        assert_eq!(delete(&mut levels, 10), 2);

        let top: Vec<_> = levels.iter_level(1).unwrap().map(|n| n.key()).collect();
        assert_eq!(top, vec![20]);
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec![20, 30]);
    }

    #[test]
    fn delete_everything() {
        let mut levels = build(&[(3, 3), (1, 1), (2, 2)], 3);
        for key in [2, 3, 1] {
            assert!(delete(&mut levels, key) > 0);
        }
        assert!(levels.is_empty());
        assert_eq!(levels.height(), 0);
        assert_eq!(levels.node_count(), 0);
    }
}
