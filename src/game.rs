//! Game state: the board, turns and scores, and the knobs a game is set up
//! with.
mod board;
mod config;
mod player;
mod score;
mod session;

pub use board::Board;
pub use config::GameConfig;
pub use player::{Player, PlayerId, DEFAULT_PLAYERS};
pub use score::{Outcome, Scoreboard};
pub use session::{Selection, Session, Snapshot};
