//! Players and move selection.
//!
//! Human and automated seats share one `Player` type; the difference lives
//! in the closed `ActorKind` variant and is dispatched by `match`.

pub mod actor;
pub mod player;

pub use actor::ActorKind;
pub use player::{Hand, Player};
