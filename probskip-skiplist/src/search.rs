use crate::{arena::NodeId, key::Key, levels::Levels};

/// Where a descent for a key ended.
///
/// On a hit `node` is the highest occurrence of the key, `level` its level and
/// `prev` its predecessor on that level (`None` for a level head). On a miss
/// `node` is `None` and `prev` is the last bottom-level node below the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub level: usize,
    pub prev: Option<NodeId>,
    pub node: Option<NodeId>,
}

impl Position {
    pub fn found(&self) -> bool {
        self.node.is_some()
    }
}

/// Descends from the top level towards `key`, stopping at its highest
/// occurrence.
///
/// Moves right while the next key is smaller, drops one level through the
/// predecessor's `lower` link (or the level head when there is no
/// predecessor) otherwise. Never mutates and never draws from a coin.
pub fn locate(levels: &Levels, key: Key) -> Position {
    let Some(mut level) = levels.height().checked_sub(1) else {
        return Position {
            level: 0,
            prev: None,
            node: None,
        };
    };
    let mut prev: Option<NodeId> = None;

    loop {
        match levels.successor(level, prev) {
            Some(cur) if levels.key(cur) == key => {
                return Position {
                    level,
                    prev,
                    node: Some(cur),
                };
            }
            Some(cur) if levels.key(cur) < key => prev = Some(cur),
            _ if level == 0 => {
                return Position {
                    level,
                    prev,
                    node: None,
                };
            }
            _ => {
                prev = prev.and_then(|prev| levels.lower(prev));
                level -= 1;
            }
        }
    }
}
