//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Playing single games between two players, with adjudication of illegal
//!   moves and invalid draw claims
//! - Scheduling round-robin and multi-robin tournaments over a roster
//! - Scoring standings and exporting games as PGN
//!
//! # Usage
//!
//! ```bash
//! # Round-robin between every known player
//! cargo run -p tournament
//!
//! # Multi-robin between two players, saving all games
//! cargo run -p tournament -- run --mode multi-robin --player "The Rhino" --player "Field Marshal" --pgn games.pgn
//! ```

mod config;
mod error;
mod game;
mod results;
mod schedule;

pub use config::*;
pub use error::*;
pub use game::*;
pub use results::*;
pub use schedule::*;
