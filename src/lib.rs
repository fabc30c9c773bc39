//! # cincuentazo
//!
//! Engine for a fifty-ceiling elimination card game.
//!
//! Cards from a standard 52-card deck are played onto a shared table, each
//! adding its game value to a running total that must never exceed 50.
//! A seat holding no card that fits under the ceiling is eliminated and its
//! hand goes back under the deck. The last seat standing wins.
//!
//! ## Design Principles
//!
//! 1. **One writer**: `Game` is the only owner of deck, table and seats.
//!    Presentation code reads `GameSnapshot`s and drains `GameEvent`s.
//!
//! 2. **Closed actor kinds**: human and automated seats differ only in the
//!    `ActorKind` variant, which also selects the Ace valuation rule.
//!
//! 3. **Deterministic when seeded**: shuffles and automated choices come
//!    from separate `GameRng` streams derived from one seed.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `cards`: suits, ranks, cards and valuation
//! - `zones`: deck and table
//! - `players`: hands and automated move selection
//! - `events`: event log
//! - `game`: setup, turn cycle, elimination, snapshots
//! - `sim`: headless batch simulation

pub mod core;
pub mod cards;
pub mod zones;
pub mod players;
pub mod events;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, MoveError, PlayerId, PlayerMap,
    CEILING, DECK_SIZE, HAND_SIZE,
};

pub use crate::cards::{basic_value, can_be_played, game_value, legal_moves, Card, Rank, Suit};

pub use crate::zones::{Deck, Placement, Table};

pub use crate::players::{ActorKind, Hand, Player};

pub use crate::events::GameEvent;

pub use crate::game::{Game, GameBuilder, GameSnapshot, Phase, SeatView, TurnPrompt, TurnReport};

pub use crate::sim::{MoveSource, Outcome, SimConfig, SimulationSummary};
