use chess_core::ChessError;
use roster::SelectionError;
use thiserror::Error;

/// Everything that can go wrong while handling one command.
///
/// Only `Io` is fatal to the session; the rest abort the offending command.
#[derive(Debug, Error)]
pub enum UciError {
    #[error("malformed command: {0}")]
    Malformed(String),

    #[error(transparent)]
    Parse(#[from] ChessError),

    #[error("cannot select player: {0}")]
    Selection(#[from] SelectionError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
