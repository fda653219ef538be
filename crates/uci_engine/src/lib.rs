//! UCI engine front end
//!
//! A synchronous, line-at-a-time implementation of the parts of the
//! Universal Chess Interface a GUI needs to play against one of the
//! players in the [`roster`]. The selected player is exposed as the
//! `Personality` combo option.
//!
//! ```text
//! > uci
//! < id name Elephas 0.1.0
//! < id author Elephas developers
//! < option name Personality type combo default Randy Random var Randy Random var The Rhino var Field Marshal
//! < uciok
//! > setoption name Personality value The Rhino
//! > position startpos moves e2e4
//! > go
//! < bestmove <move>
//! ```
//!
//! There is no background search: `go infinite` computes the move
//! immediately and holds it back until `stop`.

mod command;
mod error;
mod session;

pub use command::{Command, StartPosition};
pub use error::UciError;
pub use session::{Flow, Session, NULL_MOVE, PERSONALITY};
