//! Game orchestration.
//!
//! Owns the deck, the table and the seats, and drives the
//! `Setup -> InProgress -> Terminal` state machine:
//! - `start` deals four cards per seat and opens the table
//! - every completed move is followed by a replacement draw, an
//!   elimination sweep and a turn advance, in that order
//! - the game ends when at most one seat is still active
//!
//! Supports one human seat and 1-3 automated opponents.

mod builder;
mod snapshot;
mod state;
mod turn;

pub use builder::GameBuilder;
pub use snapshot::{GameSnapshot, SeatView};
pub use state::{Game, Phase};
pub use turn::{TurnPrompt, TurnReport};
