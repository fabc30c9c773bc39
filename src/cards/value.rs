//! Card valuation and the legality predicate.
//!
//! Every contribution a card makes to the running total comes from
//! [`game_value`]. It is a pure function of the rank, the current total and
//! who is playing, so the same answer is produced for hand filtering,
//! elimination sweeps and table placement.
//!
//! | Rank        | Contribution                                       |
//! |-------------|----------------------------------------------------|
//! | 2-8, 10     | face value                                         |
//! | 9           | 0                                                  |
//! | J, Q, K     | -10                                                |
//! | A (human)   | 10 if `total + 10 <= 50`, else 1                   |
//! | A (machine) | 1 if `total > 40`, else 10                         |

use super::card::{Card, Rank};
use crate::core::CEILING;
use crate::players::ActorKind;

/// Running total above which an automated seat plays its ace low.
const MACHINE_ACE_THRESHOLD: i32 = 40;

/// Contribution of `rank` to a running total of `total` when played by `actor`.
///
/// ```
/// use cincuentazo::cards::{game_value, Rank};
/// use cincuentazo::players::ActorKind;
///
/// assert_eq!(game_value(Rank::Ace, 35, ActorKind::Human), 10);
/// assert_eq!(game_value(Rank::Ace, 45, ActorKind::Human), 1);
/// assert_eq!(game_value(Rank::King, 30, ActorKind::Automated), -10);
/// ```
#[must_use]
pub fn game_value(rank: Rank, total: i32, actor: ActorKind) -> i32 {
    match rank {
        Rank::Nine => 0,
        Rank::Jack | Rank::Queen | Rank::King => -10,
        Rank::Ace => ace_value(total, actor),
        other => other.pip().unwrap_or(0),
    }
}

fn ace_value(total: i32, actor: ActorKind) -> i32 {
    match actor {
        ActorKind::Human => {
            if total + 10 <= CEILING {
                10
            } else {
                1
            }
        }
        ActorKind::Automated => {
            if total > MACHINE_ACE_THRESHOLD {
                1
            } else {
                10
            }
        }
    }
}

/// Context-free value: the human valuation against an empty table.
///
/// Used to re-derive the running total from the single card left on the
/// table after recycling.
#[must_use]
pub fn basic_value(rank: Rank) -> i32 {
    game_value(rank, 0, ActorKind::Human)
}

/// Whether `card` keeps `total` at or below the ceiling for `actor`.
#[must_use]
pub fn can_be_played(card: &Card, total: i32, actor: ActorKind) -> bool {
    total + game_value(card.rank(), total, actor) <= CEILING
}

/// The subset of `hand` that may legally be played, in hand order.
#[must_use]
pub fn legal_moves(hand: &[Card], total: i32, actor: ActorKind) -> Vec<Card> {
    hand.iter()
        .filter(|card| can_be_played(card, total, actor))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_numeric_ranks() {
        for rank in [Rank::Two, Rank::Five, Rank::Eight, Rank::Ten] {
            let expected = rank.pip().unwrap();
            assert_eq!(game_value(rank, 0, ActorKind::Human), expected);
            assert_eq!(game_value(rank, 30, ActorKind::Automated), expected);
        }
        assert_eq!(game_value(Rank::Nine, 49, ActorKind::Human), 0);
    }

    #[test]
    fn test_faces_subtract_ten() {
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(game_value(rank, 5, ActorKind::Human), -10);
            assert_eq!(game_value(rank, 50, ActorKind::Automated), -10);
        }
    }

    #[test]
    fn test_human_ace_prefers_ten() {
        assert_eq!(game_value(Rank::Ace, 40, ActorKind::Human), 10);
        assert_eq!(game_value(Rank::Ace, 41, ActorKind::Human), 1);
    }

    #[test]
    fn test_machine_ace_threshold() {
        assert_eq!(game_value(Rank::Ace, 40, ActorKind::Automated), 10);
        assert_eq!(game_value(Rank::Ace, 41, ActorKind::Automated), 1);
        assert!(can_be_played(&card(Rank::Ace), 49, ActorKind::Automated));
        assert!(!can_be_played(&card(Rank::Ace), 50, ActorKind::Automated));
    }

    #[test]
    fn test_basic_value() {
        assert_eq!(basic_value(Rank::Ace), 10);
        assert_eq!(basic_value(Rank::King), -10);
        assert_eq!(basic_value(Rank::Nine), 0);
        assert_eq!(basic_value(Rank::Seven), 7);
    }

    #[test]
    fn test_legal_moves_filters_hand() {
        let hand = [card(Rank::Five), card(Rank::Nine), card(Rank::Queen), card(Rank::Ace)];

        let legal = legal_moves(&hand, 49, ActorKind::Human);
        assert_eq!(legal, vec![card(Rank::Nine), card(Rank::Queen), card(Rank::Ace)]);

        let legal = legal_moves(&hand, 50, ActorKind::Automated);
        assert_eq!(legal, vec![card(Rank::Nine), card(Rank::Queen)]);
    }

    #[test]
    fn test_faces_always_legal() {
        for total in -30..=50 {
            assert!(can_be_played(&card(Rank::King), total, ActorKind::Human));
        }
    }
}
