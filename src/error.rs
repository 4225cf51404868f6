use std::path::PathBuf;
use thiserror::Error;

/// Startup and runtime failures of the game binaries
///
/// Gameplay itself has no error outcomes: a missed peck or an empty
/// collision set is a `None`, not an error.
#[derive(Debug, Error)]
pub enum GameError {
    /// SDL2 reports failures as plain strings
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to load asset {path}: {message}")]
    Asset { path: PathBuf, message: String },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed, but holds values the game cannot run with
    #[error("invalid config {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}
