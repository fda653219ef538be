//! The UCI session state machine.

use std::io::{self, BufRead, Write};

use chess_core::{move_to_uci, Board, GameRecord, Player, Turn};
use roster::Roster;
use tracing::{debug, warn};

use crate::command::{Command, StartPosition};
use crate::error::UciError;

/// The only option this engine exposes.
pub const PERSONALITY: &str = "Personality";

/// The protocol's null move, sent when there is nothing to play.
pub const NULL_MOVE: &str = "0000";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Engine state between commands: board, selected player and the
/// buffered best move for infinite searches.
pub struct Session {
    roster: Roster,
    board: Board,
    player: Option<Box<dyn Player>>,
    infinite: bool,
    best_move: Option<String>,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            board: Board::startpos(),
            player: None,
            infinite: false,
            best_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the selected player, if one has been instantiated.
    pub fn player_name(&self) -> Option<&str> {
        self.player.as_deref().map(|p| p.name())
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// The move computed by the last `go`, until `stop` hands it out.
    pub fn best_move(&self) -> Option<&str> {
        self.best_move.as_deref()
    }

    /// The moves played into the current position, as PGN.
    pub fn export(&self) -> String {
        GameRecord::from_board(&self.board).to_pgn()
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced rather than
    /// ending the session, so a stray byte only spoils its own command.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(line.trim_end_matches(['\r', '\n']), out)? == Flow::Quit {
                return Ok(());
            }
        }
        debug!("input closed");
        Ok(())
    }

    /// Handle one input line.
    ///
    /// Bad commands are logged and dropped without touching the session;
    /// only output failures are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        debug!("client: {}", line);

        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(flow) => Ok(flow),
            Err(UciError::Io(e)) => Err(e),
            Err(e) => {
                warn!(line, "command ignored: {}", e);
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, UciError> {
        match command {
            Command::Uci => self.identify(out)?,
            Command::SetOption { name, value } => self.set_option(&name, value.as_deref())?,
            Command::UciNewGame => self.new_game(),
            Command::IsReady => send(out, "readyok")?,
            Command::Position { start, moves } => self.set_position(&start, &moves)?,
            Command::Go { infinite, ponder } => {
                if ponder {
                    debug!("pondering is not supported, searching normally");
                }
                self.go(infinite, out)?;
            }
            Command::Stop => self.stop(out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => debug!(word = %word, "unknown command"),
        }
        Ok(Flow::Continue)
    }

    fn identify<W: Write>(&self, out: &mut W) -> io::Result<()> {
        send(out, &format!("id name Elephas {}", env!("CARGO_PKG_VERSION")))?;
        send(out, "id author Elephas developers")?;

        let mut option = format!(
            "option name {} type combo default {}",
            PERSONALITY,
            self.roster.default_entry().name
        );
        for name in self.roster.names() {
            option.push_str(" var ");
            option.push_str(name);
        }
        send(out, &option)?;
        send(out, "uciok")
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), UciError> {
        if name != PERSONALITY {
            debug!(name, "ignoring unknown option");
            return Ok(());
        }

        let entry = self.roster.select(value.unwrap_or_default())?;
        debug!(player = entry.name, "player selected");
        self.player = Some(entry.instantiate());
        Ok(())
    }

    fn new_game(&mut self) {
        self.board.reset();
        if let Some(player) = self.player.as_mut() {
            player.reset();
        } else {
            self.player = Some(self.roster.default_entry().instantiate());
        }
    }

    /// Replace the board with `start` plus `moves`, or leave it untouched
    /// if any part fails to parse.
    fn set_position(&mut self, start: &StartPosition, moves: &[String]) -> Result<(), UciError> {
        let mut board = match start {
            StartPosition::StartPos => Board::startpos(),
            StartPosition::Fen(fen) => Board::from_fen(fen)?,
        };
        for text in moves {
            board.push_uci(text)?;
        }
        self.board = board;
        Ok(())
    }

    fn go<W: Write>(&mut self, infinite: bool, out: &mut W) -> io::Result<()> {
        let roster = &self.roster;
        let player = self
            .player
            .get_or_insert_with(|| roster.default_entry().instantiate());

        let best = if self.board.is_game_over() {
            NULL_MOVE.to_string()
        } else {
            match player.take_turn(&self.board) {
                Turn::Move(m) if self.board.is_legal(&m) => move_to_uci(&m),
                Turn::Move(m) => {
                    warn!(player = player.name(), mv = %move_to_uci(&m), fen = %self.board.fen(), "player returned an illegal move");
                    NULL_MOVE.to_string()
                }
                Turn::ClaimDraw => {
                    debug!(player = player.name(), "player claimed a draw");
                    NULL_MOVE.to_string()
                }
            }
        };

        self.infinite = infinite;
        if !infinite {
            send(out, &format!("bestmove {}", best))?;
        }
        self.best_move = Some(best);
        Ok(())
    }

    fn stop<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.infinite {
            self.infinite = false;
            if let Some(best) = self.best_move.take() {
                send(out, &format!("bestmove {}", best))?;
            }
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Roster::standard())
    }
}

/// Write one protocol line and flush it straight away.
fn send<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    debug!("engine: {}", line);
    writeln!(out, "{}", line)?;
    out.flush()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
