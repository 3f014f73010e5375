use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a game: loading words, reading settings.
///
/// Once a game is running nothing can fail, so the game itself never
/// returns these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("word list `{origin}` has no words")]
    EmptyWordList { origin: String },

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
