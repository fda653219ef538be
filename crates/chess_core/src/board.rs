//! Board state built on `shakmaty`.
//!
//! `shakmaty::Chess` knows the rules but keeps no history. `Board` adds what
//! the game loop and the players need on top of it:
//! - the root position and the moves played since, for game records
//! - a stack of previous positions, so a move can be taken back
//! - repetition keys for threefold / fivefold detection

use std::ops::Deref;

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Role, Square};

use crate::error::ChessError;
use crate::types::GameResult;
use crate::uci::parse_uci_move;

/// Halfmove clock value at which a draw may be claimed.
pub const FIFTY_MOVE_PLIES: u32 = 100;
/// Halfmove clock value at which the game is drawn automatically.
pub const SEVENTYFIVE_MOVE_PLIES: u32 = 150;

#[derive(Clone, Debug)]
pub struct Board {
    root: Chess,
    position: Chess,
    undo: Vec<Chess>,
    moves: Vec<Move>,
    // One key per position from the root through the current one.
    keys: Vec<Zobrist64>,
}

fn repetition_key(pos: &Chess) -> Zobrist64 {
    pos.zobrist_hash(EnPassantMode::Legal)
}

fn is_zeroing(m: &Move) -> bool {
    m.is_capture() || m.role() == Role::Pawn
}

impl Board {
    pub fn startpos() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let key = repetition_key(&position);
        Self {
            root: position.clone(),
            position,
            undo: Vec::new(),
            moves: Vec::new(),
            keys: vec![key],
        }
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::startpos();
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// The position the move list starts from.
    pub fn root(&self) -> &Chess {
        &self.root
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Moves played since the root position, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    /// Legal moves in a stable enumeration order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    pub fn is_legal(&self, m: &Move) -> bool {
        self.position.is_legal(m)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Apply a move. The caller is responsible for checking legality first.
    pub fn push(&mut self, m: Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(&m);
        self.undo.push(previous);
        self.keys.push(repetition_key(&self.position));
        self.moves.push(m);
    }

    /// Take back the last move. Returns `None` at the root position.
    pub fn pop(&mut self) -> Option<Move> {
        let previous = self.undo.pop()?;
        self.position = previous;
        self.keys.pop();
        self.moves.pop()
    }

    /// Parse long algebraic move text and apply it if legal.
    pub fn push_uci(&mut self, text: &str) -> Result<Move, ChessError> {
        let m = parse_uci_move(self, text)?;
        self.push(m.clone());
        Ok(m)
    }

    /// Apply `m` until the returned guard is dropped.
    ///
    /// The guard derefs to the board in its post-move state and takes the
    /// move back on drop, including on early return out of the caller.
    pub fn speculate(&mut self, m: &Move) -> Speculation<'_> {
        self.push(m.clone());
        Speculation { board: self }
    }

    // =========================================================================
    // Game state
    // =========================================================================

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.position.halfmoves() >= SEVENTYFIVE_MOVE_PLIES
            && !self.position.legal_moves().is_empty()
    }

    /// How many times the current position has occurred, itself included.
    pub fn repetitions(&self) -> usize {
        match self.keys.last() {
            Some(current) => self.keys.iter().filter(|k| *k == current).count(),
            None => 0,
        }
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }

    /// True once the game has ended without anyone claiming anything.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Result of the game so far; `Undetermined` while it is still running.
    pub fn result(&self) -> GameResult {
        self.outcome().unwrap_or(GameResult::Undetermined)
    }

    fn outcome(&self) -> Option<GameResult> {
        if self.is_checkmate() {
            return Some(GameResult::win_for(!self.turn()));
        }
        if self.is_insufficient_material()
            || self.is_stalemate()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
        {
            return Some(GameResult::Draw);
        }
        None
    }

    pub fn can_claim_fifty_moves(&self) -> bool {
        let halfmoves = self.position.halfmoves();
        let legal = self.position.legal_moves();
        if halfmoves >= FIFTY_MOVE_PLIES && !legal.is_empty() {
            return true;
        }
        if halfmoves + 1 < FIFTY_MOVE_PLIES {
            return false;
        }
        legal.iter().filter(|m| !is_zeroing(m)).any(|m| {
            let mut child = self.position.clone();
            child.play_unchecked(m);
            child.halfmoves() >= FIFTY_MOVE_PLIES && !child.legal_moves().is_empty()
        })
    }

    /// Threefold repetition now, or reachable with one of our legal moves.
    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetitions() >= 3 {
            return true;
        }
        self.position.legal_moves().iter().any(|m| {
            let mut child = self.position.clone();
            child.play_unchecked(m);
            let key = repetition_key(&child);
            self.keys.iter().filter(|k| **k == key).count() >= 2
        })
    }

    pub fn can_claim_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    // =========================================================================
    // Move and piece queries
    // =========================================================================

    pub fn gives_check(&self, m: &Move) -> bool {
        let mut child = self.position.clone();
        child.play_unchecked(m);
        child.is_check()
    }

    pub fn is_capture(&self, m: &Move) -> bool {
        m.is_capture()
    }

    pub fn is_en_passant(&self, m: &Move) -> bool {
        m.is_en_passant()
    }

    pub fn piece_type_at(&self, square: Square) -> Option<Role> {
        self.position.board().role_at(square)
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.position.board().king_of(color)
    }

    /// Number of pieces (king included) that `color` has on the board.
    pub fn piece_count(&self, color: Color) -> usize {
        self.position.board().by_color(color).count()
    }

    pub fn pawn_count(&self, color: Color) -> usize {
        let board = self.position.board();
        (board.by_color(color) & board.pawns()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Square a move lands on, taking castling as the king's two-square step.
///
/// `shakmaty` encodes castling as king-takes-rook; heuristics that look at
/// rank progress or king distance want the king's real destination.
pub fn destination(m: &Move) -> Square {
    match *m {
        Move::Castle { king, rook } => {
            let file = if (rook.file() as u8) > (king.file() as u8) {
                File::G
            } else {
                File::C
            };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

/// A move applied for inspection, taken back when this guard is dropped.
pub struct Speculation<'a> {
    board: &'a mut Board,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.pop();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
