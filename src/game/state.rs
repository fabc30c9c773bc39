//! The game state machine.
//!
//! `Setup -> InProgress -> Terminal`. A `Game` exclusively owns its deck,
//! table and seats. It has no internal locking: callers serialize every
//! mutating call, and readers on other threads consume
//! [`GameSnapshot`](super::GameSnapshot)s.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::core::{ConfigError, GameConfig, GameError, GameRng, MoveError, PlayerId, PlayerMap, HAND_SIZE};
use crate::events::GameEvent;
use crate::players::{ActorKind, Player};
use crate::zones::{Deck, Placement, Table};

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Built, nothing dealt yet.
    Setup,
    /// Hands dealt; turns are being played.
    InProgress,
    /// At most one seat remains active, or the caller ended the game.
    Terminal,
}

/// One table of the game: deck, running total and seats.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    table: Table,
    deck: Deck,
    players: PlayerMap<Player>,
    current: PlayerId,
    phase: Phase,
    turn_number: u32,
    deck_rng: GameRng,
    cpu_rng: GameRng,
    events: Vec<GameEvent>,
}

impl Game {
    /// Build a shuffled game against `cpu_count` automated opponents.
    pub fn new(cpu_count: usize) -> Result<Self, ConfigError> {
        super::GameBuilder::new().cpu_count(cpu_count).build()
    }

    pub(super) fn from_parts(
        config: GameConfig,
        deck: Deck,
        table: Table,
        players: PlayerMap<Player>,
        deck_rng: GameRng,
        cpu_rng: GameRng,
    ) -> Self {
        Self {
            config,
            table,
            deck,
            players,
            current: PlayerId::HUMAN,
            phase: Phase::Setup,
            turn_number: 0,
            deck_rng,
            cpu_rng,
            events: Vec::new(),
        }
    }

    // === Lifecycle ===

    /// Deal four cards to every seat, then open the table with one more.
    ///
    /// Fails without dealing anything if the deck cannot cover the deal.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::AlreadyStarted);
        }

        let needed = self.players.player_count() * HAND_SIZE + 1;
        if self.deck.len() < needed {
            return Err(ConfigError::DeckExhausted {
                needed,
                available: self.deck.len(),
            }
            .into());
        }

        info!(players = self.players.player_count(), "game started");

        for (_, player) in self.players.iter_mut() {
            for _ in 0..HAND_SIZE {
                if let Some(card) = self.deck.draw() {
                    player.add_card(card);
                }
            }
        }

        let opening_card = self.deck.draw().ok_or(ConfigError::DeckExhausted {
            needed,
            available: 0,
        })?;
        let opening = self.table.place_card(opening_card, ActorKind::Human)?;
        info!(card = %opening.card, total = opening.total_after, "opening card placed");

        self.phase = Phase::InProgress;
        self.events.push(GameEvent::Started {
            players: self.players.player_count(),
            opening,
        });
        self.events.push(GameEvent::CardPlaced {
            player: None,
            placement: opening,
        });

        Ok(())
    }

    /// Force the game into `Terminal`, e.g. when the player quits.
    pub fn end_game(&mut self) {
        if self.phase == Phase::Terminal {
            return;
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.phase = Phase::Terminal;
        let winner = self.winner();
        info!(?winner, active = self.active_count(), "game over");
        self.events.push(GameEvent::GameOver { winner });
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Completed turns since `start`.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Seats not yet eliminated.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.players.values().filter(|p| p.is_active()).count()
    }

    /// Cards in the deck, every hand and on the table combined.
    ///
    /// Always 52 between calls.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.table.card_count()
            + self.players.values().map(|p| p.hand().len()).sum::<usize>()
    }

    /// First active seat once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.phase != Phase::Terminal {
            return None;
        }
        self.players
            .iter()
            .find(|(_, p)| p.is_active())
            .map(|(id, _)| id)
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every recorded event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Mutations ===

    /// Play `card` from `player`'s hand onto the table.
    ///
    /// The card is valued for the seat's own actor kind. Any error leaves
    /// the table, deck and hand exactly as they were.
    pub fn attempt_move(&mut self, player: PlayerId, card: Card) -> Result<Placement, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::GameNotInProgress);
        }

        let seat = self.players.get(player).ok_or(MoveError::UnknownPlayer(player))?;
        if !seat.is_active() {
            return Err(MoveError::PlayerEliminated(player));
        }
        if player != self.current {
            return Err(MoveError::NotYourTurn(player));
        }
        if !seat.holds(&card) {
            return Err(MoveError::CardNotInHand { player, card });
        }

        let placement = self.table.place_card(card, seat.kind())?;
        self.players[player].remove_card(&card);
        self.record_placement(player, placement);

        Ok(placement)
    }

    pub(super) fn record_placement(&mut self, player: PlayerId, placement: Placement) {
        self.events.push(GameEvent::CardPlaced {
            player: Some(player),
            placement,
        });
    }

    /// Draw the top card, recycling the table into an empty deck first.
    ///
    /// `None` means the deck is empty and the table holds at most one card.
    pub fn draw_with_recycle(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            let recycled = self.table.extract_all_but_last();
            if !recycled.is_empty() {
                let count = recycled.len();
                self.deck.reinsert_shuffled(recycled, &mut self.deck_rng);
                info!(count, total = self.table.running_total(), "deck recycled from table");
                self.events.push(GameEvent::DeckRecycled { count });
            }
        }

        self.deck.draw()
    }

    /// Draw a replacement card into `player`'s hand.
    pub(super) fn replenish(&mut self, player: PlayerId) -> Option<Card> {
        match self.draw_with_recycle() {
            Some(card) => {
                self.players[player].add_card(card);
                debug!(%player, %card, "replacement drawn");
                self.events.push(GameEvent::CardDrawn { player, card });
                Some(card)
            }
            None => {
                warn!(%player, "no card available to draw");
                self.events.push(GameEvent::DrawFailed { player });
                None
            }
        }
    }

    /// Eliminate every active seat without a legal move.
    ///
    /// Eliminated hands go to the bottom of the deck. Ends the game once at
    /// most one seat is active. Returns the seats eliminated by this call;
    /// a second call with no move in between returns nothing.
    pub fn check_and_eliminate(&mut self) -> Vec<PlayerId> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }

        let total = self.table.running_total();
        let mut eliminated = Vec::new();

        for (id, player) in self.players.iter_mut() {
            if !player.is_active() || player.has_legal_move(total) {
                continue;
            }

            let returned = player.eliminate();
            info!(player = %id, name = player.name(), total, "player eliminated");
            for card in &returned {
                self.deck.return_card(*card);
            }
            self.events.push(GameEvent::PlayerEliminated {
                player: id,
                returned: returned.to_vec(),
            });
            eliminated.push(id);
        }

        if self.active_count() <= 1 {
            self.finish();
        }

        eliminated
    }

    /// Pass the turn to the next seat in order, active or not.
    pub fn advance_turn(&mut self) {
        self.step_turn();
        self.events.push(GameEvent::TurnAdvanced {
            player: self.current,
        });
    }

    /// Pass the turn to the next active seat.
    ///
    /// No-op once the game is over.
    pub fn advance_to_next_active(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }

        for _ in 0..self.players.player_count() {
            self.step_turn();
            if self.players[self.current].is_active() {
                break;
            }
        }
        self.events.push(GameEvent::TurnAdvanced {
            player: self.current,
        });
    }

    fn step_turn(&mut self) {
        self.current = self.current.next(self.players.player_count());
    }

    pub(super) fn finish_turn(&mut self) {
        self.turn_number += 1;
    }

    pub(super) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Ask an automated seat for its move, drawing from the CPU stream.
    pub(super) fn select_automated_move(&mut self, id: PlayerId) -> Option<Card> {
        let total = self.table.running_total();
        self.players[id].select_move(total, &mut self.cpu_rng)
    }

    pub(super) fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}
