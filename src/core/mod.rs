//! Core engine types: seats, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, Stream};
pub use config::{GameConfig, CEILING, DECK_SIZE, HAND_SIZE, MAX_CPUS, MIN_CPUS};
pub use error::{ConfigError, GameError, MoveError};
