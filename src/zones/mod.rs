//! Shared card locations.
//!
//! ## Key Types
//!
//! - `Deck`: ordered draw pile, top first
//! - `Table`: played cards and the running total, guarded by the ceiling
//! - `Placement`: record of one successful placement

pub mod deck;
pub mod table;

pub use deck::Deck;
pub use table::{Placement, Table};
