//! Player registry
//!
//! Maps display names to constructors. Both the UCI session and the
//! tournament runner build their players through a [`Roster`], so a new
//! strategy only has to be added to [`Roster::standard`] to show up in the
//! `Personality` option and in tournaments.

use chess_core::Player;
use marshal_player::MarshalPlayer;
use random_player::RandomPlayer;
use rhino_player::RhinoPlayer;
use thiserror::Error;


/// Builds a fresh player instance.
pub type PlayerFactory = fn() -> Box<dyn Player>;

/// A named strategy that can be instantiated on demand.
#[derive(Clone, Copy)]
pub struct PlayerEntry {
    pub name: &'static str,
    pub build: PlayerFactory,
}

impl PlayerEntry {
    pub const fn new(name: &'static str, build: PlayerFactory) -> Self {
        Self { name, build }
    }

    pub fn instantiate(&self) -> Box<dyn Player> {
        (self.build)()
    }
}

impl std::fmt::Debug for PlayerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerEntry").field("name", &self.name).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no player named `{0}`")]
    Unknown(String),
    #[error("{count} players are named `{name}`")]
    Ambiguous { name: String, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a roster needs at least one player")]
    Empty,
    #[error("invalid player name {0:?}: names must be non-empty ASCII without tabs or newlines")]
    InvalidName(String),
}

/// Player names are protocol-visible: ASCII, spaces allowed, no other whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.is_ascii()
        && !name.chars().any(|c| c.is_ascii_whitespace() && c != ' ')
}

fn build_random() -> Box<dyn Player> {
    Box::new(RandomPlayer::new())
}

fn build_rhino() -> Box<dyn Player> {
    Box::new(RhinoPlayer::new())
}

fn build_marshal() -> Box<dyn Player> {
    Box::new(MarshalPlayer::new())
}

/// An ordered list of players. The first entry is the default.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<PlayerEntry>,
}

impl Roster {
    pub fn new(entries: Vec<PlayerEntry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }
        if let Some(bad) = entries.iter().find(|e| !is_valid_name(e.name)) {
            return Err(RosterError::InvalidName(bad.name.to_string()));
        }
        Ok(Self { entries })
    }

    /// Every built-in player, default first.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                PlayerEntry::new(RandomPlayer::NAME, build_random),
                PlayerEntry::new(RhinoPlayer::NAME, build_rhino),
                PlayerEntry::new(MarshalPlayer::NAME, build_marshal),
            ],
        }
    }

    pub fn entries(&self) -> &[PlayerEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_entry(&self) -> &PlayerEntry {
        // Non-empty by construction
        &self.entries[0]
    }

    /// Find the single entry whose name matches `name` exactly.
    pub fn select(&self, name: &str) -> Result<&PlayerEntry, SelectionError> {
        let mut matches = self.entries.iter().filter(|e| e.name == name);
        let found = matches
            .next()
            .ok_or_else(|| SelectionError::Unknown(name.to_string()))?;
        let extra = matches.count();
        if extra > 0 {
            return Err(SelectionError::Ambiguous {
                name: name.to_string(),
                count: extra + 1,
            });
        }
        Ok(found)
    }

    /// A sub-roster with the named players, in the order given. An empty
    /// list selects everyone.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Result<Roster, SelectionError> {
        if names.is_empty() {
            return Ok(self.clone());
        }
        let entries = names
            .iter()
            .map(|n| self.select(n.as_ref()).copied())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}
