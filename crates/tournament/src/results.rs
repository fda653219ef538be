//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use chess_core::{Color, GameResult};

use crate::error::TournamentError;
use crate::game::Termination;
use crate::schedule::PairingMode;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    pub mode: PairingMode,
    /// Roster names in seat order
    pub participants: Vec<String>,
    /// Every scheduled game, in schedule order
    pub games: Vec<GameEntry>,
    /// Ranking by points, best first
    pub standings: Vec<Standing>,
}

/// A single game in the tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    /// 1-based game number, as accepted by `Tournament::export`
    pub number: usize,
    pub white: String,
    pub black: String,
    pub white_seat: usize,
    pub black_seat: usize,
    pub result: GameResult,
    /// `None` for games that were never played
    pub termination: Option<Termination>,
}

/// One roster seat's score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: usize,
    pub name: String,
    pub points: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl TournamentResults {
    pub fn new(
        name: &str,
        mode: PairingMode,
        participants: Vec<String>,
        games: Vec<GameEntry>,
    ) -> Self {
        let standings = compute_standings(&participants, &games);
        Self {
            name: name.to_string(),
            mode,
            participants,
            games,
            standings,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        for entry in &self.games {
            report.push_str(&format!(
                "Game {} ({} vs {}): {}\n",
                entry.number, entry.white, entry.black, entry.result
            ));
        }

        report.push_str("\nOverall scores:\n");
        for standing in &self.standings {
            report.push_str(&format!("{}: {}\n", standing.name, standing.points));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }
}

/// Score every seat: a win is one point, a draw half a point each.
///
/// Undetermined games count for nobody. The ranking is by points, highest
/// first; seats on equal points keep roster order.
pub fn compute_standings(participants: &[String], games: &[GameEntry]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = participants
        .iter()
        .enumerate()
        .map(|(seat, name)| Standing {
            seat,
            name: name.clone(),
            points: 0.0,
            wins: 0,
            draws: 0,
            losses: 0,
        })
        .collect();

    for entry in games.iter().filter(|e| e.result.is_decided()) {
        for (seat, color) in [(entry.white_seat, Color::White), (entry.black_seat, Color::Black)] {
            let Some(standing) = standings.get_mut(seat) else {
                continue;
            };
            let points = entry.result.points(color);
            standing.points += points;
            if points == 1.0 {
                standing.wins += 1;
            } else if points == 0.5 {
                standing.draws += 1;
            } else {
                standing.losses += 1;
            }
        }
    }

    // sort_by is stable, so ties keep seat order
    standings.sort_by(|a, b| b.points.total_cmp(&a.points));
    standings
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
