//! The full turn cycle.
//!
//! A completed turn is always: place a card, draw a replacement (recycling
//! if the deck is dry), sweep eliminations, then hand the turn to the next
//! active seat. Running the sweep before advancing keeps the current seat
//! active for as long as the game is in progress.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{MoveError, PlayerId};
use crate::players::ActorKind;
use crate::zones::Placement;

use super::state::{Game, Phase};

/// Who the caller should hand control to next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPrompt {
    /// `start` has not been called yet.
    NotStarted,
    /// Wait for the human seat to pick a card.
    Human(PlayerId),
    /// Run `play_automated_turn` (after whatever pacing the caller wants).
    Automated(PlayerId),
    /// Nothing left to play.
    Finished { winner: Option<PlayerId> },
}

/// Outcome of one completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Seat that moved.
    pub player: PlayerId,
    /// The card placed, or `None` if the seat had nothing legal to play.
    pub placement: Option<Placement>,
    /// Replacement card, `None` when deck and table had nothing to give.
    pub drawn: Option<Card>,
    /// Seats eliminated by the post-move sweep.
    pub eliminated: Vec<PlayerId>,
    /// Seat to act next, `None` once the game is over.
    pub next: Option<PlayerId>,
}

impl Game {
    /// Tell the caller whose move it is.
    #[must_use]
    pub fn turn_prompt(&self) -> TurnPrompt {
        match self.phase() {
            Phase::Setup => TurnPrompt::NotStarted,
            Phase::Terminal => TurnPrompt::Finished {
                winner: self.winner(),
            },
            Phase::InProgress => {
                let id = self.current_player_id();
                match self.current_player().kind() {
                    ActorKind::Human => TurnPrompt::Human(id),
                    ActorKind::Automated => TurnPrompt::Automated(id),
                }
            }
        }
    }

    /// Play `card` for the human seat and complete the turn.
    ///
    /// A rejected card changes nothing; the human keeps the turn.
    pub fn play_human_turn(&mut self, card: Card) -> Result<TurnReport, MoveError> {
        let player = match self.turn_prompt() {
            TurnPrompt::Human(id) => id,
            TurnPrompt::Automated(_) => return Err(MoveError::NotHumanTurn),
            TurnPrompt::NotStarted | TurnPrompt::Finished { .. } => {
                return Err(MoveError::GameNotInProgress)
            }
        };

        let placement = self.attempt_move(player, card)?;
        Ok(self.complete_turn(player, Some(placement)))
    }

    /// Let the current automated seat choose and play, then complete the turn.
    ///
    /// If the seat has no legal card it plays nothing and the sweep
    /// eliminates it.
    pub fn play_automated_turn(&mut self) -> Result<TurnReport, MoveError> {
        let player = match self.turn_prompt() {
            TurnPrompt::Automated(id) => id,
            TurnPrompt::Human(_) => return Err(MoveError::NotAutomatedTurn),
            TurnPrompt::NotStarted | TurnPrompt::Finished { .. } => {
                return Err(MoveError::GameNotInProgress)
            }
        };

        let Some(card) = self.select_automated_move(player) else {
            debug!(%player, total = self.table().running_total(), "automated seat has no legal move");
            let eliminated = self.check_and_eliminate();
            self.advance_to_next_active();
            self.finish_turn();
            return Ok(TurnReport {
                player,
                placement: None,
                drawn: None,
                eliminated,
                next: self.next_to_act(),
            });
        };

        match self.table_mut().place_card(card, ActorKind::Automated) {
            Ok(placement) => {
                self.record_placement(player, placement);
                Ok(self.complete_turn(player, Some(placement)))
            }
            Err(err) => {
                self.player_mut(player).add_card(card);
                Err(err)
            }
        }
    }

    fn complete_turn(&mut self, player: PlayerId, placement: Option<Placement>) -> TurnReport {
        let drawn = self.replenish(player);
        let eliminated = self.check_and_eliminate();
        self.advance_to_next_active();
        self.finish_turn();

        TurnReport {
            player,
            placement,
            drawn,
            eliminated,
            next: self.next_to_act(),
        }
    }

    fn next_to_act(&self) -> Option<PlayerId> {
        (!self.is_terminal()).then(|| self.current_player_id())
    }
}
