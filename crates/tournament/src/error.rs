use std::path::PathBuf;

use roster::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tournament config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("no game number {number}; the schedule has {total} games")]
    NoSuchGame { number: usize, total: usize },
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.into(),
            source,
        }
    }
}
