use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Move};

use crate::{board::Board, error::ChessError};

/// Long algebraic text for a move, with castling written as the king's move (`e1g1`).
pub fn move_to_uci(mv: &Move) -> String {
    UciMove::from_move(mv, CastlingMode::Standard).to_string()
}

pub fn parse_uci_move(board: &Board, txt: &str) -> Result<Move, ChessError> {
    // Parse first, then resolve against the position so castling and en passant are correct.
    let uci: UciMove = txt
        .trim()
        .parse()
        .map_err(|_| ChessError::InvalidUciMove(txt.to_string()))?;
    uci.to_move(board.position())
        .map_err(|_| ChessError::IllegalMove {
            uci: txt.to_string(),
            fen: board.fen(),
        })
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
