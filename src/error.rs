use std::path::PathBuf;

/// Errors raised by the board when a move cannot be applied, undone or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of bounds (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("{color} has no {shape} pieces left")]
    NoPiecesLeft {
        color: crate::game::PColor,
        shape: crate::game::PShape,
    },

    #[error("no move to undo")]
    NothingToUndo,

    #[error("invalid move notation '{0}' (expected e.g. 'r3' or 's0')")]
    Parse(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when instantiating a thinker from its prototype.
#[derive(Debug, thiserror::Error)]
pub enum ThinkerError {
    #[error("unknown thinker '{0}' (expected 'negamax' or 'random')")]
    UnknownThinker(String),

    #[error("invalid thinker configuration: {0}")]
    Config(#[from] ConfigError),
}
