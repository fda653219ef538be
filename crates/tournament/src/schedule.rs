//! Tournament scheduling over a roster

use roster::Roster;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TournamentError;
use crate::game::Game;
use crate::results::{GameEntry, TournamentResults};

/// How the roster is paired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingMode {
    /// Every ordered pair of distinct seats plays once.
    RoundRobin,
    /// The full round-robin schedule repeated `n` times.
    MultiRobin(usize),
}

impl PairingMode {
    /// Number of games this mode schedules for `seats` entrants.
    pub fn game_count(&self, seats: usize) -> usize {
        let once = seats * seats.saturating_sub(1);
        match self {
            PairingMode::RoundRobin => once,
            PairingMode::MultiRobin(n) => once * n,
        }
    }
}

impl std::fmt::Display for PairingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairingMode::RoundRobin => write!(f, "round-robin"),
            PairingMode::MultiRobin(n) => write!(f, "multi-robin x{}", n),
        }
    }
}

/// A game together with the roster seats playing it.
pub struct ScheduledGame {
    pub white: usize,
    pub black: usize,
    pub game: Game,
}

/// A roster, a pairing mode and the games derived from them.
///
/// The schedule is built in full by [`Tournament::new`]; every game gets its
/// own freshly constructed players. Seats are indexes into the roster, so two
/// entries sharing a display name are still scored separately.
pub struct Tournament {
    name: String,
    roster: Roster,
    mode: PairingMode,
    games: Vec<ScheduledGame>,
}

impl Tournament {
    pub fn new(roster: Roster, mode: PairingMode) -> Self {
        let rounds = match mode {
            PairingMode::RoundRobin => 1,
            PairingMode::MultiRobin(n) => n,
        };

        let seats = roster.len();
        let mut games = Vec::with_capacity(mode.game_count(seats));
        for _ in 0..rounds {
            for white in 0..seats {
                for black in 0..seats {
                    if white == black {
                        continue;
                    }
                    let entries = roster.entries();
                    games.push(ScheduledGame {
                        white,
                        black,
                        game: Game::new(entries[white].instantiate(), entries[black].instantiate()),
                    });
                }
            }
        }

        Self {
            name: "Tournament".to_string(),
            roster,
            mode,
            games,
        }
    }

    /// Multi-robin with one repetition per entrant.
    pub fn multi_robin(roster: Roster) -> Self {
        let n = roster.len();
        Self::new(roster, PairingMode::MultiRobin(n))
    }

    /// Set the name used in the report and the PGN `Event` header.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        for scheduled in &mut self.games {
            scheduled.game.set_event(&self.name);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    pub fn games(&self) -> &[ScheduledGame] {
        &self.games
    }

    /// Play every game in schedule order.
    pub fn play(&mut self) {
        let total = self.games.len();
        info!(games = total, mode = %self.mode, "starting tournament");

        for (i, scheduled) in self.games.iter_mut().enumerate() {
            scheduled.game.set_round(i + 1);
            let result = scheduled.game.play();
            info!(
                "Game {}/{}: {} vs {} -> {}",
                i + 1,
                total,
                scheduled.game.white_name(),
                scheduled.game.black_name(),
                result
            );
        }
    }

    /// Per-game results and standings so far.
    pub fn report(&self) -> TournamentResults {
        let entries = self
            .games
            .iter()
            .enumerate()
            .map(|(i, scheduled)| GameEntry {
                number: i + 1,
                white: scheduled.game.white_name().to_string(),
                black: scheduled.game.black_name().to_string(),
                white_seat: scheduled.white,
                black_seat: scheduled.black,
                result: scheduled.game.result(),
                termination: scheduled.game.termination(),
            })
            .collect();

        TournamentResults::new(
            &self.name,
            self.mode,
            self.roster.names().map(str::to_string).collect(),
            entries,
        )
    }

    /// PGN of game `number` (1-based, as in the report), or every game in
    /// schedule order separated by blank lines.
    pub fn export(&self, number: Option<usize>) -> Result<String, TournamentError> {
        match number {
            Some(n) => {
                let total = self.games.len();
                if n == 0 || n > total {
                    return Err(TournamentError::NoSuchGame { number: n, total });
                }
                Ok(self.games[n - 1].game.export())
            }
            None => Ok(self
                .games
                .iter()
                .map(|scheduled| scheduled.game.export() + "\n")
                .collect()),
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
