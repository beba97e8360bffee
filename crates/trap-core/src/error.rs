use thiserror::Error;

use crate::game::Game;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid hit count: {0} (expected 0..=5)")]
    InvalidHitCount(u8),

    #[error("Invalid shot value: {0} (expected 0 or 1)")]
    InvalidShotValue(i64),

    #[error("Invalid round: expected {expected} shots, got {actual}")]
    InvalidRoundLength { expected: usize, actual: usize },

    #[error("Invalid game: expected {expected} rounds, got {actual}")]
    InvalidGameLength { expected: usize, actual: usize },

    #[error("Game is missing its start time")]
    MissingStartTime,

    #[error("Session already finished")]
    SessionFinished,

    /// A completed game could not be written. The game travels with the
    /// error so it can be saved again.
    #[error("Game {} could not be saved: {source}", .game.start_time())]
    Unsaved {
        game: Box<Game>,
        source: Box<Error>,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
