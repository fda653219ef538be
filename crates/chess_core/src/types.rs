use serde::{Deserialize, Serialize};
use shakmaty::Color;
use std::fmt;
use std::str::FromStr;

/// Final (or pending) result of a game, in PGN notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    #[serde(rename = "*")]
    Undetermined,
}

impl GameResult {
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Undetermined => "*",
        }
    }

    pub fn is_decided(self) -> bool {
        self != GameResult::Undetermined
    }

    /// Tournament points earned by `color`: 1 for a win, 0.5 for a draw.
    pub fn points(self, color: Color) -> f64 {
        match (self, color) {
            (GameResult::WhiteWins, Color::White) | (GameResult::BlackWins, Color::Black) => 1.0,
            (GameResult::Draw, _) => 0.5,
            _ => 0.0,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-0" => Ok(GameResult::WhiteWins),
            "0-1" => Ok(GameResult::BlackWins),
            "1/2-1/2" => Ok(GameResult::Draw),
            "*" => Ok(GameResult::Undetermined),
            other => Err(format!("unknown result token: {other}")),
        }
    }
}

// Helpers
pub fn rank_index(sq: shakmaty::Square) -> i32 {
    sq.rank() as i32
}
pub fn file_index(sq: shakmaty::Square) -> i32 {
    sq.file() as i32
}

/// King-move distance between two squares.
pub fn square_distance(a: shakmaty::Square, b: shakmaty::Square) -> i32 {
    let files = (file_index(a) - file_index(b)).abs();
    let ranks = (rank_index(a) - rank_index(b)).abs();
    files.max(ranks)
}
