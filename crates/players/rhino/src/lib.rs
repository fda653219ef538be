//! The Rhino
//!
//! A hyperaggressive player that grabs whatever it can. It scores every legal
//! move on how aggressive it looks and plays the best one; it does no
//! look-ahead, so it only finds mates by luck.

use chess_core::{
    destination, highest_scoring, rank_index, Board, Color, Move, Player, Role, Turn,
};


/// Bonus for a move that gives check.
const CHECK_BONUS: i32 = 5;
/// Flat bonus for capturing en passant.
const EN_PASSANT_BONUS: i32 = 1;
/// Bonus for moving towards the opponent's side of the board.
const FORWARD_BONUS: i32 = 1;

/// Value of a captured piece.
fn capture_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight | Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

/// Greedy, stateless scorer. The same board always yields the same move.
#[derive(Debug, Clone, Default)]
pub struct RhinoPlayer;

impl RhinoPlayer {
    pub const NAME: &'static str = "The Rhino";

    pub fn new() -> Self {
        Self
    }

    /// Aggression score of `m` on `board`.
    pub fn score(board: &Board, m: &Move) -> i32 {
        let mut score = 0;

        if board.gives_check(m) {
            score += CHECK_BONUS;
        }

        if board.is_en_passant(m) {
            score += EN_PASSANT_BONUS;
        } else if board.is_capture(m) {
            score += board.piece_type_at(m.to()).map(capture_value).unwrap_or(0);
        }

        if let Some(from) = m.from() {
            let advance = rank_index(destination(m)) - rank_index(from);
            let forward = match board.turn() {
                Color::White => advance > 0,
                Color::Black => advance < 0,
            };
            if forward {
                score += FORWARD_BONUS;
            }
        }

        score
    }
}

impl Player for RhinoPlayer {
    fn take_turn(&mut self, board: &Board) -> Turn {
        let scored = board.legal_moves().into_iter().map(|m| {
            let score = Self::score(board, &m);
            (m, score)
        });
        highest_scoring(scored).map(Turn::Move).unwrap_or(Turn::ClaimDraw)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
