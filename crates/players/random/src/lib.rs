//! Random Move Player
//!
//! "Randy Random" selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any real strategy should easily beat this)
//! - Smoke testing the game loop and the UCI session

use chess_core::{Board, Player, Turn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that picks a random legal move.
///
/// The only state is the random number generator. With a seed, every game
/// replays the same sequence after `reset`; without one, each game draws a
/// fresh seed from the OS.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomPlayer {
    pub const NAME: &'static str = "Randy Random";

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
}

impl Default for RandomPlayer {
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

impl Player for RandomPlayer {
    fn take_turn(&mut self, board: &Board) -> Turn {
        let moves = board.legal_moves();
        match moves.choose(&mut self.rng) {
            Some(m) => Turn::Move(m.clone()),
            // Only reachable on a finished board; the caller adjudicates it.
            None => Turn::ClaimDraw,
        }
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn reset(&mut self) {
        self.rng = seeded_rng(self.seed);
    }
}
