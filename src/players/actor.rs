//! Actor kinds.

use serde::{Deserialize, Serialize};

/// Who decides a seat's moves.
///
/// The set is closed: a human seat defers every choice to the caller, an
/// automated seat picks uniformly among its legal cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Human,
    Automated,
}

impl ActorKind {
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, ActorKind::Human)
    }
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorKind::Human => f.write_str("human"),
            ActorKind::Automated => f.write_str("automated"),
        }
    }
}
