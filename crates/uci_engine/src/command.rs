//! Commands sent from the GUI to the engine.
//!
//! Only the subset of UCI this engine acts on is recognised; every other
//! command word parses to [`Command::Unknown`] and is ignored by the session.

use crate::error::UciError;

/// Where a `position` command starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPosition {
    StartPos,
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Uci,
    SetOption { name: String, value: Option<String> },
    UciNewGame,
    IsReady,
    Position { start: StartPosition, moves: Vec<String> },
    Go { infinite: bool, ponder: bool },
    Stop,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, UciError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word {
            "uci" => Command::Uci,
            "setoption" => parse_setoption(&args)?,
            "ucinewgame" => Command::UciNewGame,
            "isready" => Command::IsReady,
            "position" => parse_position(&args)?,
            "go" => Command::Go {
                infinite: args.contains(&"infinite"),
                ponder: args.contains(&"ponder"),
            },
            "stop" => Command::Stop,
            "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Ok(Some(command))
    }
}

/// `setoption name <id> [value <x>]`; both the id and the value may contain spaces.
fn parse_setoption(args: &[&str]) -> Result<Command, UciError> {
    if args.first() != Some(&"name") {
        return Err(UciError::Malformed("setoption without `name`".to_string()));
    }

    let rest = &args[1..];
    let (name, value) = match rest.iter().position(|&w| w == "value") {
        Some(i) => (&rest[..i], Some(rest[i + 1..].join(" "))),
        None => (rest, None),
    };
    if name.is_empty() {
        return Err(UciError::Malformed("setoption with an empty name".to_string()));
    }

    Ok(Command::SetOption {
        name: name.join(" "),
        value,
    })
}

/// `position (startpos | fen <fen>) [moves <m1> <m2> ...]`
fn parse_position(args: &[&str]) -> Result<Command, UciError> {
    // A missing `moves` keyword is treated as an empty move list
    let moves_at = args.iter().position(|&w| w == "moves").unwrap_or(args.len());
    let moves = args
        .get(moves_at + 1..)
        .unwrap_or_default()
        .iter()
        .map(|m| m.to_string())
        .collect();

    let start = match args.first() {
        Some(&"startpos") => StartPosition::StartPos,
        Some(&"fen") if moves_at > 1 => StartPosition::Fen(args[1..moves_at].join(" ")),
        Some(&"fen") => return Err(UciError::Malformed("position fen without a FEN".to_string())),
        _ => {
            return Err(UciError::Malformed(
                "position needs `startpos` or `fen`".to_string(),
            ))
        }
    };

    Ok(Command::Position { start, moves })
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
