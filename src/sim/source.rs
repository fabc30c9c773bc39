//! Move sources for the human seat.
//!
//! The engine never chooses for the human seat. A headless driver plugs a
//! `MoveSource` in its place; a UI would implement the same trait on top of
//! its input handling.

use crate::cards::Card;
use crate::core::GameRng;
use crate::game::GameSnapshot;

/// Supplies the human seat's card.
pub trait MoveSource {
    /// Pick one of `legal` (never empty). `None` abandons the game.
    fn choose(&mut self, view: &GameSnapshot, legal: &[Card]) -> Option<Card>;
}

/// Uniform choice among legal cards, the same policy automated seats use.
#[derive(Clone, Debug)]
pub struct UniformMoves {
    rng: GameRng,
}

impl UniformMoves {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSource for UniformMoves {
    fn choose(&mut self, _view: &GameSnapshot, legal: &[Card]) -> Option<Card> {
        self.rng.choose(legal).copied()
    }
}

/// Always plays the first legal card in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MoveSource for FirstLegal {
    fn choose(&mut self, _view: &GameSnapshot, legal: &[Card]) -> Option<Card> {
        legal.first().copied()
    }
}

/// Replays a fixed list of cards, then gives up.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    moves: std::collections::VecDeque<Card>,
}

impl Scripted {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = Card>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveSource for Scripted {
    fn choose(&mut self, _view: &GameSnapshot, _legal: &[Card]) -> Option<Card> {
        self.moves.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::game::GameBuilder;

    fn view() -> GameSnapshot {
        GameBuilder::new().seed(1).build().unwrap().snapshot()
    }

    #[test]
    fn test_first_legal() {
        let legal = [Card::new(Rank::Four, Suit::Clubs), Card::new(Rank::Two, Suit::Clubs)];
        assert_eq!(FirstLegal.choose(&view(), &legal), Some(legal[0]));
    }

    #[test]
    fn test_uniform_stays_in_legal_set() {
        let legal = [Card::new(Rank::Four, Suit::Clubs), Card::new(Rank::Two, Suit::Clubs)];
        let mut source = UniformMoves::new(4);
        let view = view();

        for _ in 0..20 {
            let card = source.choose(&view, &legal).unwrap();
            assert!(legal.contains(&card));
        }
    }

    #[test]
    fn test_scripted_runs_out() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        let mut source = Scripted::new([card]);

        assert_eq!(source.choose(&view(), &[card]), Some(card));
        assert_eq!(source.choose(&view(), &[card]), None);
    }
}
