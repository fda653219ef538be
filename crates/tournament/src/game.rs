//! A single game between two players

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use chess_core::{Board, Color, GameRecord, GameResult, Player, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Checkmate, a draw by the rules, or an accepted draw claim.
    Normal,
    /// A player returned an illegal move, claimed a draw that was not
    /// available, or crashed. That player loses.
    RulesInfraction,
}

/// Two players, one board and the game record.
///
/// `play` keeps asking the side to move for a move until the board reports
/// the game is over or a player is adjudicated. Players see a read-only view
/// of the board and every answer is checked against the legal-move set.
pub struct Game {
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    board: Board,
    record: GameRecord,
    result: GameResult,
    termination: Option<Termination>,
}

impl Game {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_board(white, black, Board::startpos())
    }

    /// A game that starts from an arbitrary position.
    pub fn from_board(white: Box<dyn Player>, black: Box<dyn Player>, board: Board) -> Self {
        let mut record = GameRecord::from_position(board.position().clone());
        record.set_header("White", white.name());
        record.set_header("Black", black.name());
        Self {
            white,
            black,
            board,
            record,
            result: GameResult::Undetermined,
            termination: None,
        }
    }

    /// Play the game to its conclusion and return the result.
    ///
    /// Both players are reset once before the first move. Calling this on a
    /// finished game returns the stored result.
    pub fn play(&mut self) -> GameResult {
        if self.termination.is_some() {
            return self.result;
        }

        self.white.reset();
        self.black.reset();

        while !self.board.is_game_over() {
            let side = self.board.turn();
            let player = match side {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };

            let board = &self.board;
            let attempt = catch_unwind(AssertUnwindSafe(|| player.take_turn(board)));

            match attempt {
                Ok(Turn::Move(m)) if self.board.legal_moves().contains(&m) => {
                    debug!(player = player.name(), mv = %chess_core::move_to_uci(&m), "move");
                    self.board.push(m.clone());
                    self.record.push(m);
                }
                Ok(Turn::ClaimDraw) if self.board.can_claim_draw() => {
                    debug!(player = player.name(), "draw claimed");
                    return self.finish(GameResult::Draw, Termination::Normal);
                }
                Ok(turn) => {
                    warn!(
                        player = player.name(),
                        ?turn,
                        fen = %self.board.fen(),
                        "illegal move or invalid draw claim, forfeiting"
                    );
                    return self.finish(GameResult::win_for(!side), Termination::RulesInfraction);
                }
                Err(payload) => {
                    warn!(
                        player = player.name(),
                        fen = %self.board.fen(),
                        "player panicked ({}), forfeiting",
                        panic_message(&*payload)
                    );
                    return self.finish(GameResult::win_for(!side), Termination::RulesInfraction);
                }
            }
        }

        let result = self.board.result();
        self.finish(result, Termination::Normal)
    }

    fn finish(&mut self, result: GameResult, termination: Termination) -> GameResult {
        self.result = result;
        self.termination = Some(termination);
        self.record.set_result(result);
        if termination == Termination::RulesInfraction {
            self.record.set_header("Termination", "rules infraction");
        }
        result
    }

    pub fn set_event(&mut self, event: &str) {
        self.record.set_header("Event", event);
    }

    pub fn set_round(&mut self, round: usize) {
        self.record.set_header("Round", round.to_string());
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// `None` until the game has been played.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn white_name(&self) -> &str {
        self.white.name()
    }

    pub fn black_name(&self) -> &str {
        self.black.name()
    }

    /// The game as PGN text.
    pub fn export(&self) -> String {
        self.record.to_pgn()
    }
}

/// The message a panic was raised with, if it carried one.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

/// Report panics as `tracing` events instead of raw stderr output.
///
/// Player panics are caught by [`Game::play`] and adjudicated; with this hook
/// they show up once in the log, next to the forfeit warning.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic| {
        let location = panic
            .location()
            .map(|l| l.to_string())
            .unwrap_or_default();
        error!(location = %location, "panic: {}", panic_message(panic.payload()));
    }));
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
