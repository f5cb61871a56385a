use std::fmt;

use crate::{
    arena::{Arena, Node, NodeId},
    error::{Error, Result},
    key::Key,
};

/// Level storage of a skip list: one head per non-empty level, index 0 at
/// the bottom, plus the arena owning every node.
///
/// The splice and unlink primitives keep the arena and the heads in sync;
/// ordering and the vertical `lower` links are the caller's business.
#[derive(Debug, Clone)]
pub struct Levels {
    heads: Vec<NodeId>,
    arena: Arena,
    len: usize,
    p: f64,
    max_level: usize,
}

impl Levels {
    pub fn new(p: f64, max_level: usize) -> Result<Self> {
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidOptions(format!(
                "raise probability must be in (0, 1), got {p}"
            )));
        }
        if max_level == 0 {
            return Err(Error::InvalidOptions(
                "max level must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            heads: Vec::new(),
            arena: Arena::default(),
            len: 0,
            p,
            max_level,
        })
    }

    pub fn probability(&self) -> f64 {
        self.p
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Number of existing levels.
    pub fn height(&self) -> usize {
        self.heads.len()
    }

    /// Number of keys on the bottom level.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Number of nodes across all levels.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    pub fn head(&self, level: usize) -> Option<NodeId> {
        self.heads.get(level).copied()
    }

    pub fn key(&self, id: NodeId) -> Key {
        self.arena[id].key
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].next
    }

    pub fn lower(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].lower
    }

    /// The node following `prev` on `level`, or the level head when `prev`
    /// is `None`.
    pub fn successor(&self, level: usize, prev: Option<NodeId>) -> Option<NodeId> {
        match prev {
            Some(prev) => self.next(prev),
            None => self.head(level),
        }
    }

    /// Splices a new node right after `prev` on `level`, or in front of the
    /// level when `prev` is `None`. Passing `level == height()` opens a new
    /// top level holding only the new node.
    ///
    /// # Panics
    ///
    /// Panics if `level > height()`, if `level >= max_level()`, or if `prev`
    /// names a released node.
    pub fn link_after(
        &mut self,
        level: usize,
        prev: Option<NodeId>,
        key: Key,
        lower: Option<NodeId>,
    ) -> NodeId {
        assert!(
            level <= self.heads.len(),
            "cannot link at level {level}, height is {}",
            self.heads.len()
        );
        assert!(
            level < self.max_level,
            "level {level} is beyond max level {}",
            self.max_level
        );

        let next = self.successor(level, prev);
        let id = self.arena.alloc(Node::new(key, next, lower));
        match prev {
            Some(prev) => self.arena[prev].next = Some(id),
            None if level == self.heads.len() => {
                tracing::debug!("open level {} with key {}", level, key);
                self.heads.push(id);
            }
            None => self.heads[level] = id,
        }

        if level == 0 {
            self.len += 1;
        }
        id
    }

    /// Removes `id` from `level`, where `prev` is its predecessor there
    /// (`None` when `id` is the head). A level left empty is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `id` or `prev` names a released node, or if `level` does
    /// not exist.
    pub fn unlink(&mut self, level: usize, prev: Option<NodeId>, id: NodeId) {
        let next = self.next(id);
        match prev {
            Some(prev) => {
                debug_assert_eq!(self.next(prev), Some(id));
                self.arena[prev].next = next;
            }
            None => {
                debug_assert_eq!(self.head(level), Some(id));
                match next {
                    Some(next) => self.heads[level] = next,
                    None => {
                        tracing::debug!("drop empty level {}", level);
                        self.heads.remove(level);
                    }
                }
            }
        }

        self.arena.release(id);
        if level == 0 {
            self.len -= 1;
        }
    }

    pub fn node(&self, level: usize, id: NodeId) -> NodeRef<'_> {
        NodeRef {
            levels: self,
            id,
            level,
        }
    }

    /// Walks `level` from its head. A level that does not exist (yet) is
    /// empty; a level that can never exist is an error.
    pub fn iter_level(&self, level: usize) -> Result<LevelIter<'_>> {
        if level >= self.max_level {
            return Err(Error::LevelOutOfRange {
                level,
                max_level: self.max_level,
            });
        }
        Ok(LevelIter {
            levels: self,
            level,
            cur: self.head(level),
        })
    }

    /// Bottom level keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        LevelIter {
            levels: self,
            level: 0,
            cur: self.head(0),
        }
        .map(|node| node.key())
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.heads.is_empty() {
            return write!(f, "None");
        }
        for level in (0..self.heads.len()).rev() {
            let mut cur = self.head(level);
            while let Some(id) = cur {
                write!(f, "{} -> ", self.key(id))?;
                cur = self.next(id);
            }
            writeln!(f, "None")?;
        }
        Ok(())
    }
}

/// Read-only view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    levels: &'a Levels,
    id: NodeId,
    level: usize,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> Key {
        self.levels.key(self.id)
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn next(&self) -> Option<NodeRef<'a>> {
        self.levels
            .next(self.id)
            .map(|id| self.levels.node(self.level, id))
    }

    pub fn lower(&self) -> Option<NodeRef<'a>> {
        let id = self.levels.lower(self.id)?;
        Some(self.levels.node(self.level.saturating_sub(1), id))
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.key())
            .field("level", &self.level)
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn link(node: Option<NodeRef<'_>>) -> String {
            node.map_or_else(|| "None".to_string(), |node| node.key().to_string())
        }

        write!(
            f,
            "{} (next: {}, lower: {})",
            self.key(),
            link(self.next()),
            link(self.lower())
        )
    }
}

pub struct LevelIter<'a> {
    levels: &'a Levels,
    level: usize,
    cur: Option<NodeId>,
}

impl<'a> Iterator for LevelIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        self.cur = self.levels.next(id);
        Some(self.levels.node(self.level, id))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::Levels;

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(Levels::new(0.0, 3), Err(Error::InvalidOptions(_))));
        assert!(matches!(Levels::new(1.0, 3), Err(Error::InvalidOptions(_))));
        assert!(matches!(Levels::new(f64::NAN, 3), Err(Error::InvalidOptions(_))));
        assert!(matches!(Levels::new(0.5, 0), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn link_and_unlink() {
        let mut levels = Levels::new(0.5, 2).unwrap();
        let b = levels.link_after(0, None, 20, None);
        let a = levels.link_after(0, None, 10, None);
        let c = levels.link_after(0, Some(b), 30, None);
        let top = levels.link_after(1, None, 20, Some(b));
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(levels.height(), 2);
        assert_eq!(levels.len(), 3);
        assert_eq!(levels.node_count(), 4);
        assert_eq!(levels.lower(top), Some(b));

        levels.unlink(1, None, top);
        assert_eq!(levels.height(), 1);
        levels.unlink(0, Some(a), b);
        levels.unlink(0, None, a);
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec![30]);
        levels.unlink(0, None, c);
        assert!(levels.is_empty());
        assert_eq!(levels.len(), 0);
        assert_eq!(levels.node_count(), 0);
    }

    #[test]
    #[should_panic(expected = "beyond max level")]
    fn link_past_max_level() {
        let mut levels = Levels::new(0.5, 1).unwrap();
        let a = levels.link_after(0, None, 1, None);
        levels.link_after(1, None, 1, Some(a));
    }

    #[test]
    fn iter_level_bounds() {
        let mut levels = Levels::new(0.5, 3).unwrap();
        levels.link_after(0, None, 1, None);
        assert_eq!(levels.iter_level(2).unwrap().count(), 0);
        assert!(matches!(
            levels.iter_level(3),
            Err(Error::LevelOutOfRange { level: 3, max_level: 3 })
        ));
    }

    #[test]
    fn display() {
        let mut levels = Levels::new(0.5, 3).unwrap();
        assert_eq!(levels.to_string(), "None");

        let a = levels.link_after(0, None, 5, None);
        let b = levels.link_after(0, Some(a), 10, None);
        levels.link_after(1, None, 10, Some(b));
        assert_eq!(levels.to_string(), "10 -> None\n5 -> 10 -> None\n");

        let top = levels.node(1, levels.head(1).unwrap());
        assert_eq!(top.to_string(), "10 (next: None, lower: 10)");
        assert_eq!(levels.node(0, a).to_string(), "5 (next: 10, lower: None)");
    }
}
