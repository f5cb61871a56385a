use std::collections::HashMap;

use crate::{arena::NodeId, key::Key, levels::Levels};

impl Levels {
    /// Same parameters and the same node graph: every level holds the same
    /// keys in the same order, and every `lower` link lands on the same
    /// position of the level below.
    pub fn structurally_equal(&self, other: &Levels) -> bool {
        self.same_parameters(other)
            && self.height() == other.height()
            && (0..self.height()).all(|level| self.shape(level) == other.shape(level))
    }

    /// Same parameters and the same bottom-level keys, whatever the shape.
    pub fn equivalent(&self, other: &Levels) -> bool {
        self.same_parameters(other) && self.len() == other.len() && self.keys().eq(other.keys())
    }

    fn same_parameters(&self, other: &Levels) -> bool {
        self.probability() == other.probability() && self.max_level() == other.max_level()
    }

    /// Keys of `level` paired with where each `lower` link points: `None` for
    /// no link, `Some(None)` for a link leaving the level below, otherwise the
    /// position of the target there.
    fn shape(&self, level: usize) -> Vec<(Key, Option<Option<usize>>)> {
        let below: HashMap<NodeId, usize> = match level.checked_sub(1) {
            Some(below) => self
                .chain(below)
                .enumerate()
                .map(|(pos, id)| (id, pos))
                .collect(),
            None => HashMap::new(),
        };

        self.chain(level)
            .map(|id| {
                let lower = self.lower(id).map(|lower| below.get(&lower).copied());
                (self.key(id), lower)
            })
            .collect()
    }

    fn chain(&self, level: usize) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head(level), |&id| self.next(id))
    }
}
