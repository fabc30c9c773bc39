//! Read-only views of a game for presentation code.
//!
//! A `GameSnapshot` is owned data, cheap to clone (the table history is a
//! persistent `im` vector) and `Send`, so the thread that drives the game
//! can publish one after every step while render threads read it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::players::ActorKind;

use super::state::{Game, Phase};

/// What the table shows about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub kind: ActorKind,
    pub active: bool,
    pub hand_size: usize,
    /// Card faces, only for the human seat.
    pub hand: Option<Vec<Card>>,
}

/// Point-in-time copy of the public game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub turn_number: u32,
    pub current: PlayerId,
    pub running_total: i32,
    pub last_card: Option<Card>,
    pub table_cards: Vector<Card>,
    pub deck_size: usize,
    pub seats: Vec<SeatView>,
    pub winner: Option<PlayerId>,
}

impl GameSnapshot {
    /// The human seat's view, if present.
    #[must_use]
    pub fn human(&self) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.kind == ActorKind::Human)
    }
}

impl Game {
    /// Capture the state a presentation layer needs to render.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let seats = self
            .players()
            .iter()
            .map(|(id, player)| SeatView {
                id,
                name: player.name().to_string(),
                kind: player.kind(),
                active: player.is_active(),
                hand_size: player.hand().len(),
                hand: player.kind().is_human().then(|| player.hand().to_vec()),
            })
            .collect();

        GameSnapshot {
            phase: self.phase(),
            turn_number: self.turn_number(),
            current: self.current_player_id(),
            running_total: self.table().running_total(),
            last_card: self.table().last_card(),
            table_cards: self.table().history().clone(),
            deck_size: self.deck_size(),
            seats,
            winner: self.winner(),
        }
    }
}
