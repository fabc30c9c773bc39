//! The draw pile.
//!
//! Ordered front to back: the front is the top card and is drawn next.
//! Cards returned by eliminated seats go to the back; cards recycled from
//! the table are appended and the whole pile is reshuffled.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{ConfigError, GameRng, DECK_SIZE};

/// Ordered pool of face-down cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// A full 52-card deck in shuffled order.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut deck = Self {
            cards: Card::full_set().collect(),
        };
        deck.shuffle(rng);
        deck
    }

    /// A full deck in a caller-chosen order, top card first.
    ///
    /// Fails unless `cards` holds every (suit, rank) pair exactly once.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, ConfigError> {
        if cards.len() != DECK_SIZE {
            return Err(ConfigError::InvalidDeck(format!(
                "expected {DECK_SIZE} cards, got {}",
                cards.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(*card) {
                return Err(ConfigError::InvalidDeck(format!("duplicate {card}")));
            }
        }

        Ok(Self {
            cards: cards.into_iter().map(face_down).collect(),
        })
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the top card, or `None` when empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Put a card at the bottom of the pile.
    pub fn return_card(&mut self, card: Card) {
        self.cards.push_back(face_down(card));
    }

    /// Append a batch of cards and reshuffle the whole pile.
    ///
    /// An empty batch leaves the deck (and its order) untouched.
    pub fn reinsert_shuffled(&mut self, cards: Vec<Card>, rng: &mut GameRng) {
        if cards.is_empty() {
            return;
        }

        debug!(count = cards.len(), "reshuffling recycled cards into deck");
        self.cards.extend(cards.into_iter().map(face_down));
        self.shuffle(rng);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

fn face_down(mut card: Card) -> Card {
    card.set_face_up(false);
    card
}
