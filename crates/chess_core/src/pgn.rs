//! Portable game records and their PGN rendering.
//!
//! A [`GameRecord`] is the export format shared by the tournament games and
//! the UCI session: headers, a starting position, the moves and a result.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, EnPassantMode, Move, Position};

use crate::board::Board;
use crate::types::GameResult;

/// Column at which movetext is wrapped.
const LINE_WIDTH: usize = 80;

/// Seven Tag Roster, always emitted first and in this order.
const ROSTER_TAGS: [(&str, &str); 7] = [
    ("Event", "?"),
    ("Site", "?"),
    ("Date", "????.??.??"),
    ("Round", "?"),
    ("White", "?"),
    ("Black", "?"),
    ("Result", "*"),
];

#[derive(Clone, Debug)]
pub struct GameRecord {
    headers: Vec<(String, String)>,
    start: Chess,
    moves: Vec<Move>,
    result: GameResult,
}

impl GameRecord {
    /// An empty record starting from `start`.
    pub fn from_position(start: Chess) -> Self {
        let mut headers: Vec<(String, String)> = ROSTER_TAGS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        let fen = fen_of(&start);
        if fen != fen_of(&Chess::default()) {
            headers.push(("SetUp".to_string(), "1".to_string()));
            headers.push(("FEN".to_string(), fen));
        }

        Self {
            headers,
            start,
            moves: Vec::new(),
            result: GameResult::Undetermined,
        }
    }

    /// Record of everything played on `board` since its root position.
    pub fn from_board(board: &Board) -> Self {
        let mut record = Self::from_position(board.root().clone());
        for m in board.moves() {
            record.push(m.clone());
        }
        record
    }

    /// Set a header, replacing an existing one with the same name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Set the result; the `Result` header follows it.
    pub fn set_result(&mut self, result: GameResult) {
        self.result = result;
        self.set_header("Result", result.as_str());
    }

    /// Render as PGN: tag pairs, a blank line, then wrapped SAN movetext.
    pub fn to_pgn(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.headers {
            out.push_str(&format!("[{} \"{}\"]\n", name, escape(value)));
        }
        out.push('\n');
        out.push_str(&wrap(&self.movetext_tokens(), LINE_WIDTH));
        out.push('\n');
        out
    }

    fn movetext_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.moves.len() * 3 / 2 + 1);
        let mut pos = self.start.clone();
        let mut number = pos.fullmoves().get();

        for (i, m) in self.moves.iter().enumerate() {
            let turn = pos.turn();
            if turn == Color::White {
                tokens.push(format!("{number}."));
            } else if i == 0 {
                tokens.push(format!("{number}..."));
            }
            tokens.push(SanPlus::from_move_and_play_unchecked(&mut pos, m).to_string());
            if turn == Color::Black {
                number += 1;
            }
        }

        tokens.push(self.result.as_str().to_string());
        tokens
    }
}

fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string()
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn wrap(tokens: &[String], width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for token in tokens {
        if line_len > 0 && line_len + 1 + token.len() > width {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(token);
        line_len += token.len();
    }
    out
}

#[cfg(test)]
#[path = "pgn_tests.rs"]
mod pgn_tests;
