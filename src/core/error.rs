use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Character map is empty")]
    EmptyMap,

    #[error("Character map is ragged: row {row} has {got} cells, expected {expected}")]
    RaggedMap { row: usize, expected: usize, got: usize },

    #[error("Game has not been started: no capital has been founded")]
    NotStarted,

    #[error("Game has already been started")]
    AlreadyStarted,

    #[error("Cannot found a capital at ({0}, {1}): cell is missing or impassable")]
    InvalidCapital(i32, i32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
