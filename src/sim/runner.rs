//! Headless game loop.
//!
//! The runner is the single writer for its game: it asks the game whose
//! turn it is, feeds the human seat from a `MoveSource`, lets automated
//! seats play themselves and drains the event log after every turn. Any
//! pacing (animation delays, "thinking" time) belongs to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::events::GameEvent;
use crate::game::{Game, GameBuilder, TurnPrompt};

use super::source::MoveSource;

/// Configuration for a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Automated opponents per game (1-3).
    pub cpu_count: usize,

    /// Number of games to play.
    pub games: usize,

    /// Master seed; each game gets its own fork.
    pub seed: u64,

    /// Turns after which a game is abandoned.
    pub max_turns: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cpu_count: 1,
            games: 100,
            seed: 0,
            max_turns: 500,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cpu_count(mut self, count: usize) -> Self {
        self.cpu_count = count;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One seat outlasted the rest.
    Winner(PlayerId),
    /// The last seats were eliminated in the same sweep.
    NoSurvivor,
    /// The move source gave up.
    Abandoned,
    /// The turn cap was reached.
    TurnLimit,
}

/// Summary of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub outcome: Outcome,
    pub turns: u32,
    pub recycles: u32,
    /// Seats in the order they were eliminated.
    pub eliminations: Vec<PlayerId>,
    /// Highest running total seen after any placement.
    pub peak_total: i32,
}

/// Aggregate over a batch of games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins: PlayerMap<u32>,
    pub no_survivor: u32,
    pub abandoned: u32,
    pub turn_limit: u32,
    pub total_turns: u64,
    pub total_recycles: u64,
}

impl SimulationSummary {
    fn new(player_count: usize) -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(player_count, 0),
            no_survivor: 0,
            abandoned: 0,
            turn_limit: 0,
            total_turns: 0,
            total_recycles: 0,
        }
    }

    fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_turns += u64::from(record.turns);
        self.total_recycles += u64::from(record.recycles);
        match record.outcome {
            Outcome::Winner(id) => {
                if let Some(wins) = self.wins.get_mut(id) {
                    *wins += 1;
                }
            }
            Outcome::NoSurvivor => self.no_survivor += 1,
            Outcome::Abandoned => self.abandoned += 1,
            Outcome::TurnLimit => self.turn_limit += 1,
        }
    }

    /// Mean turns per game.
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    /// Fraction of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins.get(player).copied().unwrap_or(0)) / self.games as f64
    }
}

/// Play one game to completion.
pub fn play_game(
    config: GameConfig,
    source: &mut impl MoveSource,
    max_turns: u32,
) -> Result<GameRecord, GameError> {
    let mut game = GameBuilder::from_config(config).build()?;
    game.start()?;
    drive(&mut game, source, max_turns)
}

/// Drive an already started game until it ends or hits `max_turns`.
pub fn drive(
    game: &mut Game,
    source: &mut impl MoveSource,
    max_turns: u32,
) -> Result<GameRecord, GameError> {
    let mut record = GameRecord {
        seed: game.config().seed.unwrap_or_default(),
        outcome: Outcome::TurnLimit,
        turns: 0,
        recycles: 0,
        eliminations: Vec::new(),
        peak_total: game.table().running_total(),
    };

    loop {
        absorb_events(&mut record, game.drain_events());

        match game.turn_prompt() {
            TurnPrompt::NotStarted => game.start()?,
            TurnPrompt::Finished { winner } => {
                if record.outcome != Outcome::Abandoned {
                    record.outcome = winner.map_or(Outcome::NoSurvivor, Outcome::Winner);
                }
                break;
            }
            _ if record.turns >= max_turns => {
                debug!(turns = record.turns, "turn limit reached");
                game.end_game();
                absorb_events(&mut record, game.drain_events());
                record.outcome = Outcome::TurnLimit;
                break;
            }
            TurnPrompt::Human(id) => {
                let legal = game.current_player().legal_moves(game.table().running_total());
                match source.choose(&game.snapshot(), &legal) {
                    Some(card) => {
                        game.play_human_turn(card)?;
                        record.turns += 1;
                    }
                    None => {
                        debug!(player = %id, "move source abandoned the game");
                        record.outcome = Outcome::Abandoned;
                        game.end_game();
                    }
                }
            }
            TurnPrompt::Automated(_) => {
                game.play_automated_turn()?;
                record.turns += 1;
            }
        }
    }

    Ok(record)
}

fn absorb_events(record: &mut GameRecord, events: Vec<GameEvent>) {
    for event in events {
        match event {
            GameEvent::DeckRecycled { .. } => record.recycles += 1,
            GameEvent::PlayerEliminated { player, .. } => record.eliminations.push(player),
            GameEvent::CardPlaced { placement, .. } => {
                record.peak_total = record.peak_total.max(placement.total_after);
            }
            _ => {}
        }
    }
}

/// Play a batch of games, one forked seed each.
pub fn run(config: &SimConfig, source: &mut impl MoveSource) -> Result<SimulationSummary, GameError> {
    let mut master = GameRng::new(config.seed);
    let mut summary = SimulationSummary::new(config.cpu_count + 1);

    for _ in 0..config.games {
        let seed = master.next_game_seed();
        let game_config = GameConfig::new(config.cpu_count).with_seed(seed);
        let record = play_game(game_config, source, config.max_turns)?;
        summary.record(&record);
    }

    info!(
        games = summary.games,
        average_turns = summary.average_turns(),
        "simulation finished"
    );

    Ok(summary)
}
