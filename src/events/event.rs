//! Game events.
//!
//! The engine appends one event for every change a presentation layer may
//! want to render. Events are plain data; nothing inside the engine reacts
//! to them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::zones::Placement;

/// Something observable that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hands were dealt and the opening card placed.
    Started {
        players: usize,
        opening: Placement,
    },

    /// A card was placed on the table. `player` is `None` for the opening card.
    CardPlaced {
        player: Option<PlayerId>,
        placement: Placement,
    },

    /// A replacement card was drawn into a hand.
    CardDrawn { player: PlayerId, card: Card },

    /// The deck ran dry and a draw found nothing to recycle.
    DrawFailed { player: PlayerId },

    /// The table's discards were shuffled back into the empty deck.
    DeckRecycled { count: usize },

    /// A seat ran out of legal moves; its hand went back to the deck.
    PlayerEliminated {
        player: PlayerId,
        returned: Vec<Card>,
    },

    /// The turn passed to another seat.
    TurnAdvanced { player: PlayerId },

    /// The game finished. `winner` is `None` if no seat is left standing.
    GameOver { winner: Option<PlayerId> },
}

impl GameEvent {
    /// The seat this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::CardPlaced { player, .. } => *player,
            GameEvent::CardDrawn { player, .. }
            | GameEvent::DrawFailed { player }
            | GameEvent::PlayerEliminated { player, .. }
            | GameEvent::TurnAdvanced { player } => Some(*player),
            GameEvent::GameOver { winner } => *winner,
            GameEvent::Started { .. } | GameEvent::DeckRecycled { .. } => None,
        }
    }
}
