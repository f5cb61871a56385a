mod options;

pub mod invariants;

pub use options::SkipListOptions;
pub use probskip_skiplist::{algorithms, error, prelude::*};
pub use probskip_utils as utils;
