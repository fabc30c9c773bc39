//! Error types.
//!
//! Rejected moves and configuration problems are ordinary values returned
//! to the caller. None of them leave the table, deck or hands modified.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Problems detected while building or dealing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cpu opponent count must be between 1 and 3, got {0}")]
    CpuCount(usize),

    #[error("stacked deck must hold each of the 52 cards exactly once ({0})")]
    InvalidDeck(String),

    #[error("dealing needs {needed} cards but the deck only holds {available}")]
    DeckExhausted { needed: usize, available: usize },
}

/// Reasons a proposed move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{card} would add {contribution} to {total} and exceed the ceiling")]
    IllegalMove {
        card: Card,
        total: i32,
        contribution: i32,
    },

    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },

    #[error("{0} has been eliminated")]
    PlayerEliminated(PlayerId),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} is not a seat at this table")]
    UnknownPlayer(PlayerId),

    #[error("the current turn belongs to an automated seat")]
    NotHumanTurn,

    #[error("the current turn belongs to the human seat")]
    NotAutomatedTurn,

    #[error("the game is not in progress")]
    GameNotInProgress,
}

/// Lifecycle errors from the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game has already been started")]
    AlreadyStarted,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
