use crate::{
    coin::Coin,
    delete, insert,
    key::Key,
    levels::{Levels, NodeRef},
    search::locate,
};

/// The primitives a [`SkipList`](crate::skip_list::SkipList) dispatches to.
///
/// Every method has the standard algorithm as its default body, so an
/// implementation can swap out any single primitive and inherit the rest.
pub trait Operations {
    fn search(levels: &Levels, key: Key) -> Option<NodeRef<'_>> {
        let pos = locate(levels, key);
        pos.node.map(|id| levels.node(pos.level, id))
    }

    fn contains(levels: &Levels, key: Key) -> bool {
        locate(levels, key).found()
    }

    fn level_of(levels: &Levels, key: Key) -> Option<usize> {
        let pos = locate(levels, key);
        pos.node.map(|_| pos.level)
    }

    fn insert(levels: &mut Levels, key: Key, coin: &mut dyn Coin) -> bool {
        insert::insert(levels, key, coin)
    }

    fn delete(levels: &mut Levels, key: Key) -> usize {
        delete::delete(levels, key)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Standard;

impl Operations for Standard {}
