//! Cards and their valuation.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the closed 4 x 13 identity space
//! - `Card`: immutable identity plus a display-only orientation flag
//! - `game_value` / `can_be_played`: the single legality predicate

pub mod card;
pub mod value;

pub use card::{Card, Rank, Suit};
pub use value::{basic_value, can_be_played, game_value, legal_moves};
