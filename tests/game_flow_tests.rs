//! End-to-end turn cycles on stacked and seeded decks.

use cincuentazo::cards::{Card, Rank, Suit};
use cincuentazo::events::GameEvent;
use cincuentazo::game::{GameBuilder, Phase, TurnPrompt};
use cincuentazo::players::ActorKind;
use cincuentazo::sim::{self, Outcome, Scripted};
use cincuentazo::{ConfigError, GameConfig, GameError, MoveError, PlayerId};

const CPU: PlayerId = PlayerId(1);

fn ten(suit: Suit) -> Card {
    Card::new(Rank::Ten, suit)
}

/// Human gets four tens, the CPU four eights, a nine opens the table at 0,
/// then four sevens and a nine are next to draw.
fn stacked_duel() -> Vec<Card> {
    let mut top = Vec::new();
    for suit in Suit::ALL {
        top.push(ten(suit));
    }
    for suit in Suit::ALL {
        top.push(Card::new(Rank::Eight, suit));
    }
    top.push(Card::new(Rank::Nine, Suit::Clubs));
    for suit in Suit::ALL {
        top.push(Card::new(Rank::Seven, suit));
    }
    top.push(Card::new(Rank::Nine, Suit::Hearts));

    let rest: Vec<Card> = Card::full_set().filter(|c| !top.contains(c)).collect();
    top.extend(rest);
    top
}

#[test]
fn test_stacked_deal_order() {
    let mut game = GameBuilder::new().stacked_deck(stacked_duel()).build().unwrap();
    game.start().unwrap();

    let human = &game.players()[PlayerId::HUMAN];
    assert!(human.hand().iter().all(|c| c.rank() == Rank::Ten));
    assert!(game.players()[CPU].hand().iter().all(|c| c.rank() == Rank::Eight));
    assert_eq!(game.table().last_card(), Some(Card::new(Rank::Nine, Suit::Clubs)));
    assert_eq!(game.table().running_total(), 0);
    assert_eq!(game.deck_size(), 43);
}

/// Three tens from the human push the total past anything the CPU holds.
#[test]
fn test_cpu_squeezed_out() {
    let mut game = GameBuilder::new().seed(11).stacked_deck(stacked_duel()).build().unwrap();
    game.start().unwrap();

    for (round, suit) in [Suit::Hearts, Suit::Spades, Suit::Clubs].into_iter().enumerate() {
        assert_eq!(game.turn_prompt(), TurnPrompt::Human(PlayerId::HUMAN));
        let report = game.play_human_turn(ten(suit)).unwrap();

        if round < 2 {
            assert!(report.eliminated.is_empty());
            assert_eq!(game.turn_prompt(), TurnPrompt::Automated(CPU));
            let cpu = game.play_automated_turn().unwrap();
            assert_eq!(cpu.placement.map(|p| p.actor), Some(ActorKind::Automated));
            assert!(cpu.eliminated.is_empty());
        } else {
            assert_eq!(report.eliminated, vec![CPU]);
            assert_eq!(report.next, None);
        }
    }

    assert_eq!(game.phase(), Phase::Terminal);
    assert_eq!(game.winner(), Some(PlayerId::HUMAN));
    assert!(game.table().running_total() >= 45);
    assert!(!game.players()[CPU].is_active());
    assert!(game.players()[CPU].hand().is_empty());
    assert!(game.players()[PlayerId::HUMAN].is_active());
    assert_eq!(game.table().card_count(), 6);
    assert_eq!(game.deck_size(), 42);
    assert_eq!(game.card_count(), 52);

    let events = game.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PlayerEliminated { player, returned } if *player == CPU && returned.len() == 4
    )));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            winner: Some(PlayerId::HUMAN)
        })
    );
}

#[test]
fn test_illegal_human_card_keeps_turn() {
    let mut game = GameBuilder::new().seed(12).stacked_deck(stacked_duel()).build().unwrap();
    game.start().unwrap();

    let err = game.play_human_turn(Card::new(Rank::Eight, Suit::Hearts)).unwrap_err();
    assert_eq!(
        err,
        MoveError::CardNotInHand {
            player: PlayerId::HUMAN,
            card: Card::new(Rank::Eight, Suit::Hearts),
        }
    );
    assert_eq!(game.turn_prompt(), TurnPrompt::Human(PlayerId::HUMAN));
    assert_eq!(game.table().card_count(), 1);
    assert_eq!(game.players()[PlayerId::HUMAN].hand().len(), 4);
}

#[test]
fn test_cpu_seat_cannot_move_out_of_turn() {
    let mut game = GameBuilder::new().stacked_deck(stacked_duel()).build().unwrap();
    game.start().unwrap();

    let eight = Card::new(Rank::Eight, Suit::Spades);
    assert_eq!(game.attempt_move(CPU, eight), Err(MoveError::NotYourTurn(CPU)));
    assert_eq!(
        game.attempt_move(PlayerId(5), eight),
        Err(MoveError::UnknownPlayer(PlayerId(5)))
    );
}

#[test]
fn test_builder_rejects_bad_configs() {
    assert_eq!(
        GameBuilder::new().cpu_count(0).build().err(),
        Some(ConfigError::CpuCount(0))
    );
    assert_eq!(
        GameBuilder::new().cpu_count(4).build().err(),
        Some(ConfigError::CpuCount(4))
    );

    let short: Vec<Card> = Card::full_set().take(51).collect();
    assert!(matches!(
        GameBuilder::new().stacked_deck(short).build(),
        Err(ConfigError::InvalidDeck(_))
    ));
}

#[test]
fn test_start_twice() {
    let mut game = GameBuilder::new().seed(1).build().unwrap();
    game.start().unwrap();
    assert_eq!(game.start(), Err(GameError::AlreadyStarted));
}

/// Eliminated seats never hold cards and are never prompted again.
#[test]
fn test_eliminated_seats_stay_out() {
    for seed in 0..40u64 {
        let mut game = GameBuilder::new().cpu_count(3).seed(seed).build().unwrap();
        game.start().unwrap();

        for _ in 0..300 {
            match game.turn_prompt() {
                TurnPrompt::Human(id) | TurnPrompt::Automated(id) => {
                    assert!(game.players()[id].is_active());
                }
                TurnPrompt::Finished { .. } => break,
                TurnPrompt::NotStarted => unreachable!(),
            }

            if game.current_player().kind().is_human() {
                let card = game.current_player().legal_moves(game.table().running_total())[0];
                game.play_human_turn(card).unwrap();
            } else {
                game.play_automated_turn().unwrap();
            }

            for (_, player) in game.players().iter() {
                if !player.is_active() {
                    assert!(player.hand().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_scripted_game_through_runner() {
    let config = GameConfig::new(1).with_seed(5);
    let mut game = GameBuilder::from_config(config).stacked_deck(stacked_duel()).build().unwrap();
    game.start().unwrap();

    let mut script = Scripted::new([ten(Suit::Hearts), ten(Suit::Spades), ten(Suit::Clubs)]);
    let record = sim::drive(&mut game, &mut script, 100).unwrap();

    assert_eq!(record.outcome, Outcome::Winner(PlayerId::HUMAN));
    assert_eq!(record.eliminations, vec![CPU]);
    assert_eq!(record.turns, 5);
    assert!(record.peak_total <= 50);
}
