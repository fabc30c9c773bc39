//! Seated players: hand, elimination flag and move selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::actor::ActorKind;
use crate::cards::{can_be_played, legal_moves, Card};
use crate::core::GameRng;

/// Cards held by one seat. Hands hold four or five cards in play.
pub type Hand = SmallVec<[Card; 8]>;

/// A seat at the table.
///
/// An eliminated player keeps its record (name, kind) for display and
/// winner reporting, but its hand is always empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: ActorKind,
    hand: Hand,
    active: bool,
}

impl Player {
    /// Create an active player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::new(),
            active: true,
        }
    }

    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, ActorKind::Human)
    }

    #[must_use]
    pub fn automated(name: impl Into<String>) -> Self {
        Self::new(name, ActorKind::Automated)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Add a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove one copy of `card`. Returns `false` if it was not held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cards in hand that keep `total` within the ceiling for this seat.
    #[must_use]
    pub fn legal_moves(&self, total: i32) -> Vec<Card> {
        legal_moves(&self.hand, total, self.kind)
    }

    #[must_use]
    pub fn has_legal_move(&self, total: i32) -> bool {
        self.hand.iter().any(|card| can_be_played(card, total, self.kind))
    }

    /// Pick a move for this seat.
    ///
    /// Human seats always answer `None`; the caller supplies their card.
    /// Automated seats draw uniformly from their legal cards and remove the
    /// chosen card from the hand. `None` from an automated seat means it
    /// has no legal move.
    pub fn select_move(&mut self, total: i32, rng: &mut GameRng) -> Option<Card> {
        match self.kind {
            ActorKind::Human => None,
            ActorKind::Automated => {
                let legal = self.legal_moves(total);
                let card = *rng.choose(&legal)?;
                self.remove_card(&card);
                Some(card)
            }
        }
    }

    /// Mark the seat eliminated and hand back everything it held.
    pub fn eliminate(&mut self) -> Hand {
        self.active = false;
        std::mem::take(&mut self.hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn test_add_and_remove() {
        let mut player = Player::human("You");
        player.add_card(card(Rank::Two));
        player.add_card(card(Rank::Three));

        assert!(player.remove_card(&card(Rank::Two)));
        assert!(!player.remove_card(&card(Rank::Two)));
        assert_eq!(player.hand(), &[card(Rank::Three)]);
    }

    #[test]
    fn test_human_never_selects() {
        let mut player = Player::human("You");
        player.add_card(card(Rank::Two));

        assert_eq!(player.select_move(0, &mut GameRng::new(1)), None);
        assert_eq!(player.hand().len(), 1);
    }

    #[test]
    fn test_automated_selects_only_legal_cards() {
        let mut rng = GameRng::new(11);

        for _ in 0..50 {
            let mut cpu = Player::automated("CPU 1");
            cpu.add_card(card(Rank::Eight));
            cpu.add_card(card(Rank::Seven));
            cpu.add_card(card(Rank::Two));

            let chosen = cpu.select_move(48, &mut rng).unwrap();
            assert_eq!(chosen, card(Rank::Two));
            assert_eq!(cpu.hand().len(), 2);
        }
    }

    #[test]
    fn test_automated_choice_covers_all_legal_cards() {
        let mut rng = GameRng::new(5);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..200 {
            let mut cpu = Player::automated("CPU 1");
            for rank in [Rank::Two, Rank::Three, Rank::Four] {
                cpu.add_card(card(rank));
            }
            seen.insert(cpu.select_move(0, &mut rng).unwrap());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_automated_without_legal_move() {
        let mut cpu = Player::automated("CPU 1");
        cpu.add_card(card(Rank::Five));

        assert_eq!(cpu.select_move(49, &mut GameRng::new(1)), None);
        assert_eq!(cpu.hand().len(), 1);
        assert!(!cpu.has_legal_move(49));
    }

    #[test]
    fn test_eliminate_empties_hand() {
        let mut player = Player::automated("CPU 2");
        player.add_card(card(Rank::Nine));

        let returned = player.eliminate();

        assert_eq!(returned.as_slice(), &[card(Rank::Nine)]);
        assert!(!player.is_active());
        assert!(player.hand().is_empty());
    }
}
