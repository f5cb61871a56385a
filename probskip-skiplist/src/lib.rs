mod arena;
mod coin;
mod compare;
mod delete;
mod insert;
mod key;
mod levels;
mod ops;
mod search;
mod skip_list;

pub mod error;

/// The standard algorithms, for [`Operations`](prelude::Operations)
/// implementations that replace one primitive and reuse the others.
pub mod algorithms {
    pub use crate::{delete::delete, insert::insert, insert::predecessors, search::locate};
}

pub mod prelude {
    pub use crate::{
        arena::NodeId,
        coin::{Coin, ScriptedCoin},
        error::{Error, Result},
        key::{AsKey, Key},
        levels::{LevelIter, Levels, NodeRef},
        ops::{Operations, Standard},
        search::Position,
        skip_list::SkipList,
    };
}
