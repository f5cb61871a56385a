use std::ops::{Index, IndexMut};

use crate::key::Key;

/// Stable handle to a node slot.
///
/// A handle stays valid until the node it names is released; the slot may
/// then be handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) next: Option<NodeId>,
    pub(crate) lower: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(key: Key, next: Option<NodeId>, lower: Option<NodeId>) -> Self {
        Self { key, next, lower }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Arena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    live: usize,
}

impl Arena {
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none());
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId(
                    u32::try_from(self.slots.len()).unwrap_or_else(|_| panic!("node arena full")),
                );
                self.slots.push(Some(node));
                id
            }
        }
    }

    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        self.live -= 1;
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
            .unwrap_or_else(|| panic!("dangling node id {}", id.index()))
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("dangling node id {}", id.index()))
    }
}
