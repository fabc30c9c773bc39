//! The shared table: played cards and the running total.
//!
//! The running total is a cached reduction of the history under
//! [`game_value`]. It can only change through a successful placement or
//! through [`Table::extract_all_but_last`]; there is no setter.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{basic_value, game_value, Card};
use crate::core::{MoveError, CEILING};
use crate::players::ActorKind;

/// Record of one successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub actor: ActorKind,
    pub contribution: i32,
    pub total_before: i32,
    pub total_after: i32,
}

/// Played cards, oldest first, and the running total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    history: Vector<Card>,
    running_total: i32,
}

impl Table {
    /// An empty table with a total of 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by replaying placements in order.
    ///
    /// Each placement goes through the same ceiling check as
    /// [`Table::place_card`], so the result is a table reachable by legal
    /// play. The first rejected placement is returned as the error.
    ///
    /// ```
    /// use cincuentazo::cards::{Card, Rank, Suit};
    /// use cincuentazo::players::ActorKind;
    /// use cincuentazo::zones::Table;
    ///
    /// let table = Table::with_history([
    ///     (Card::new(Rank::Ten, Suit::Hearts), ActorKind::Human),
    ///     (Card::new(Rank::Eight, Suit::Clubs), ActorKind::Automated),
    /// ])
    /// .unwrap();
    /// assert_eq!(table.running_total(), 18);
    /// ```
    pub fn with_history(
        placements: impl IntoIterator<Item = (Card, ActorKind)>,
    ) -> Result<Self, MoveError> {
        let mut table = Self::new();
        for (card, actor) in placements {
            table.place_card(card, actor)?;
        }
        Ok(table)
    }

    /// Place a card if it keeps the total at or below the ceiling.
    ///
    /// A rejected card leaves the table untouched.
    pub fn place_card(&mut self, mut card: Card, actor: ActorKind) -> Result<Placement, MoveError> {
        let total_before = self.running_total;
        let contribution = game_value(card.rank(), total_before, actor);
        let total_after = total_before + contribution;

        if total_after > CEILING {
            debug!(%card, total = total_before, contribution, "placement rejected");
            return Err(MoveError::IllegalMove {
                card,
                total: total_before,
                contribution,
            });
        }

        card.set_face_up(true);
        self.history.push_back(card);
        self.running_total = total_after;
        debug!(%card, contribution, total = total_after, "card placed");

        Ok(Placement {
            card,
            actor,
            contribution,
            total_before,
            total_after,
        })
    }

    /// Most recently placed card.
    #[must_use]
    pub fn last_card(&self) -> Option<Card> {
        self.history.last().copied()
    }

    #[must_use]
    pub fn running_total(&self) -> i32 {
        self.running_total
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.history.len()
    }

    /// Played cards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Card> {
        &self.history
    }

    /// Remove every card except the most recent one.
    ///
    /// Returns the removed cards oldest first. The total is re-derived from
    /// the retained card's context-free value. With one card or fewer on
    /// the table nothing changes and the result is empty.
    pub fn extract_all_but_last(&mut self) -> Vec<Card> {
        if self.history.len() <= 1 {
            return Vec::new();
        }

        let retained = self.history.split_off(self.history.len() - 1);
        let removed: Vec<Card> = std::mem::replace(&mut self.history, retained)
            .into_iter()
            .collect();
        self.running_total = self.last_card().map_or(0, |card| basic_value(card.rank()));

        removed
    }

    /// Clear the table for a fresh game.
    pub fn reset(&mut self) {
        self.history.clear();
        self.running_total = 0;
    }
}
