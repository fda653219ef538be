//! Tournament configuration file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TournamentError;
use crate::schedule::PairingMode;

/// Pairing mode as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    #[default]
    RoundRobin,
    MultiRobin,
}

/// Settings for a tournament run, loaded from TOML.
///
/// ```toml
/// name = "Weekly"
/// roster = ["The Rhino", "Field Marshal"]
/// mode = "multi-robin"
/// rounds = 3
/// pgn = "games.pgn"
/// results = "results.json"
/// ```
///
/// Every field is optional. An empty roster means every known player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    pub name: Option<String>,
    pub roster: Vec<String>,
    pub mode: ModeSetting,
    /// Repetitions for multi-robin; defaults to the roster size
    pub rounds: Option<usize>,
    pub pgn: Option<PathBuf>,
    pub results: Option<PathBuf>,
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolve the pairing mode for a roster of `roster_size` entries.
    pub fn pairing_mode(&self, roster_size: usize) -> PairingMode {
        match self.mode {
            ModeSetting::RoundRobin => PairingMode::RoundRobin,
            ModeSetting::MultiRobin => PairingMode::MultiRobin(self.rounds.unwrap_or(roster_size)),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
