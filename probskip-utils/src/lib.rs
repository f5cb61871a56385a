pub mod keys;
pub mod logging;
