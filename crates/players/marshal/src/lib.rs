//! Field Marshal
//!
//! Sends the pawns out to do the fighting and keeps the officers back. Every
//! legal move is first tried on a scratch board: a mate in one is played at
//! once. Otherwise moves are scored with a signed piece table that favours
//! pawn activity and penalises moving or trading the queen and king, plus a
//! small random term so the player is not fully predictable.

use chess_core::{
    destination, highest_scoring, rank_index, square_distance, Board, Color, Move, Player, Role,
    Turn,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Penalty for giving check while we still have pawns on the board.
const EARLY_CHECK_PENALTY: i32 = -10;
/// Bonus for capturing en passant.
const EN_PASSANT_BONUS: i32 = 4;
/// Reward (or penalty) for closing in on (or backing away from) the enemy king.
const KING_APPROACH: i32 = 5;
/// While the enemy has more pieces than this, advance up the board instead of
/// hunting the king.
const FULL_STRENGTH: usize = 7;

/// Signed value of moving, or capturing, a piece of this type.
fn rank_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 6,
        Role::Knight | Role::Bishop | Role::Rook => 1,
        Role::Queen => -5,
        Role::King => -6,
    }
}

#[derive(Debug, Clone)]
pub struct MarshalPlayer {
    seed: Option<u64>,
    rng: StdRng,
}

impl MarshalPlayer {
    pub const NAME: &'static str = "Field Marshal";

    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(Some(seed))
    }

    fn build(seed: Option<u64>) -> Self {
        Self {
            seed,
            rng: seeded_rng(seed),
        }
    }

    /// Heuristic score of `m` without the random term.
    pub fn score(board: &Board, m: &Move) -> i32 {
        let us = board.turn();
        let them = !us;
        let mut score = 0;

        if board.gives_check(m) && board.pawn_count(us) > 0 {
            score += EARLY_CHECK_PENALTY;
        }

        let Some(from) = m.from() else {
            return score;
        };
        score += board.piece_type_at(from).map(rank_value).unwrap_or(0);

        if board.is_en_passant(m) {
            score += EN_PASSANT_BONUS;
        } else if board.is_capture(m) {
            score += board.piece_type_at(m.to()).map(rank_value).unwrap_or(0);
        }

        let to = destination(m);
        if board.piece_count(them) > FULL_STRENGTH {
            let advance = rank_index(to) - rank_index(from);
            score += match us {
                Color::White => advance,
                Color::Black => -advance,
            };
        } else if let Some(king) = board.king(them) {
            let closer = square_distance(king, from) - square_distance(king, to);
            score += if closer > 0 { KING_APPROACH } else { -KING_APPROACH };
        }

        score
    }
}

impl Default for MarshalPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Player for MarshalPlayer {
    fn take_turn(&mut self, board: &Board) -> Turn {
        let mut scratch = board.clone();
        let mut scored = Vec::new();

        for m in scratch.legal_moves() {
            {
                let after = scratch.speculate(&m);
                if after.is_checkmate() {
                    return Turn::Move(m);
                }
            }
            let score = Self::score(&scratch, &m) + self.rng.gen_range(-1..=1);
            scored.push((m, score));
        }

        highest_scoring(scored).map(Turn::Move).unwrap_or(Turn::ClaimDraw)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn reset(&mut self) {
        self.rng = seeded_rng(self.seed);
    }
}
