#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Level {level} out of range, max level is {max_level}")]
    LevelOutOfRange { level: usize, max_level: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
