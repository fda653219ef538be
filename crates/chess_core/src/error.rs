use thiserror::Error;

/// Errors raised by the rules layer when reading positions or move text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The FEN could not be parsed or describes an impossible position.
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// The text is not a long algebraic move at all.
    #[error("invalid UCI move: {0}")]
    InvalidUciMove(String),

    /// Well-formed move text that is not legal in the position.
    #[error("illegal move {uci} in {fen}")]
    IllegalMove { uci: String, fen: String },
}
