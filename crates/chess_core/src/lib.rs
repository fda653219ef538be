pub mod board;
pub mod error;
pub mod pgn;
pub mod types;
pub mod uci;

// Re-export the rules layer so player crates only depend on chess_core
pub use board::*;
pub use error::ChessError;
pub use pgn::GameRecord;
pub use types::*;
pub use uci::*;

pub use shakmaty::{Color, File, Move, Rank, Role, Square};


// =============================================================================
// Player trait - implemented by every move-selection strategy
// =============================================================================

/// What a player hands back when it is asked to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Play this move. The caller checks it against the legal-move set.
    Move(Move),
    /// Claim a rules-based draw (threefold repetition or the fifty-move rule).
    ClaimDraw,
}

impl Turn {
    /// The move carried by this turn, if any.
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Turn::Move(m) => Some(m),
            Turn::ClaimDraw => None,
        }
    }
}

/// Trait that all move-selection strategies must implement.
///
/// Players are never trusted to validate their own output: the game loop and
/// the UCI session check every returned move against the legal-move set.
pub trait Player: Send {
    /// Pick a move for the side to move.
    ///
    /// # Arguments
    /// * `board` - A read-only view of the position. Strategies that want to
    ///   try moves out must clone it first.
    ///
    /// # Returns
    /// A move from `board.legal_moves()` or [`Turn::ClaimDraw`]. Callers never
    /// invoke this on a finished game.
    fn take_turn(&mut self, board: &Board) -> Turn;

    /// Display name, used as the UCI option value and the tournament label.
    fn name(&self) -> &str;

    /// Reset internal state for a new game. Must be idempotent.
    fn reset(&mut self) {}
}

/// First move with the highest score, in enumeration order.
///
/// Scoring players feed `(move, score)` pairs in legal-move order; ties go to
/// the earliest move so the choice is stable.
pub fn highest_scoring<I>(scored: I) -> Option<Move>
where
    I: IntoIterator<Item = (Move, i32)>,
{
    let mut best: Option<(Move, i32)> = None;
    for (m, score) in scored {
        match &best {
            Some((_, top)) if score <= *top => {}
            _ => best = Some((m, score)),
        }
    }
    best.map(|(m, _)| m)
}
