//! Builder for creating a `Game`.

use crate::cards::Card;
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, Stream};
use crate::players::Player;
use crate::zones::{Deck, Table};

use super::state::Game;

/// Builder for creating a `Game` in the `Setup` phase.
///
/// ```
/// use cincuentazo::game::GameBuilder;
///
/// let game = GameBuilder::new().cpu_count(2).seed(42).build().unwrap();
/// assert_eq!(game.players().player_count(), 3);
/// assert_eq!(game.deck_size(), 52);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    stacked_deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            stacked_deck: None,
        }
    }

    pub fn cpu_count(mut self, count: usize) -> Self {
        self.config.cpu_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn human_name(mut self, name: impl Into<String>) -> Self {
        self.config.human_name = name.into();
        self
    }

    /// Use a fixed deck order instead of a shuffle, top card first.
    ///
    /// Seats are dealt in order (four cards to seat 0, then four to seat 1,
    /// ...) and the next card opens the table.
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.stacked_deck = Some(cards);
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        self.config.validate()?;

        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck_rng = rng.stream(Stream::Deck);
        let cpu_rng = rng.stream(Stream::Cpu);

        let deck = match self.stacked_deck {
            Some(cards) => Deck::stacked(cards)?,
            None => Deck::new(&mut deck_rng),
        };

        let human_name = self.config.human_name.clone();
        let players = PlayerMap::new(self.config.player_count(), |id| {
            if id == PlayerId::HUMAN {
                Player::human(human_name.clone())
            } else {
                Player::automated(format!("CPU {}", id.0))
            }
        });

        Ok(Game::from_parts(
            self.config,
            deck,
            Table::new(),
            players,
            deck_rng,
            cpu_rng,
        ))
    }
}
