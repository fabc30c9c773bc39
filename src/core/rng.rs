//! Seeded randomness for deals, recycles and automated moves.
//!
//! One game seed fans out into named streams. Shuffles and recycles draw
//! from [`Stream::Deck`], automated seats from [`Stream::Cpu`], so scripting
//! the human seat differently never changes the deck order.
//!
//! ```
//! use cincuentazo::core::{GameRng, Stream};
//!
//! let game = GameRng::new(7);
//! let mut deck = game.stream(Stream::Deck);
//! let mut again = GameRng::new(7).stream(Stream::Deck);
//!
//! let mut a: Vec<u8> = (0..52).collect();
//! let mut b = a.clone();
//! deck.shuffle(&mut a);
//! again.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Independent random sequences derived from one game seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    /// Initial shuffle and table recycling.
    Deck,
    /// Automated seat move selection.
    Cpu,
}

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy, for unseeded games.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The generator for `stream`. Depends only on the seed, not on how much
    /// of this generator has been consumed.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        stream.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Draw a fresh seed for the next game of a batch.
    pub fn next_game_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick; `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        assert_eq!(shuffled(&mut a), shuffled(&mut b));
        assert_eq!(a.next_game_seed(), b.next_game_seed());
    }

    #[test]
    fn test_streams_are_independent() {
        let rng = GameRng::new(42);
        let deck = shuffled(&mut rng.stream(Stream::Deck));
        let cpu = shuffled(&mut rng.stream(Stream::Cpu));

        assert_ne!(deck, cpu);
        assert_eq!(rng.stream(Stream::Deck).seed(), rng.stream(Stream::Deck).seed());
    }

    #[test]
    fn test_stream_ignores_consumption() {
        let mut rng = GameRng::new(9);
        let before = rng.stream(Stream::Cpu).seed();
        rng.next_game_seed();
        shuffled(&mut rng);

        assert_eq!(rng.stream(Stream::Cpu).seed(), before);
    }

    #[test]
    fn test_game_seeds_vary() {
        let mut rng = GameRng::new(1);
        let seeds: Vec<u64> = (0..8).map(|_| rng.next_game_seed()).collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();

        assert_eq!(unique.len(), seeds.len());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = shuffled(&mut rng);
        assert_ne!(data, (0..52).collect::<Vec<u32>>());

        data.sort_unstable();
        assert_eq!(data, (0..52).collect::<Vec<u32>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3];

        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
