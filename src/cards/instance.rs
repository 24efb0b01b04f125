//! Card state - per-placement battlefield data.
//!
//! A `CardState` exists only while a card is in play. It is created when
//! the card leaves the hand and cleared when its lifetime runs out.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, Lifetime};

/// Mutable state of a card in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardState {
    /// Definition this placement was created from.
    pub card_id: CardId,

    /// Round starts left before removal.
    pub remaining: Lifetime,

    pub durability: Option<u32>,

    /// Board row, derived from the card kind. `None` for off-grid kinds.
    pub row: Option<u8>,

    /// Board column chosen by the player.
    pub column: u16,
}

impl CardState {
    /// Initialize state for a card entering play.
    #[must_use]
    pub fn enter_play(def: &CardDefinition, column: u16) -> Self {
        Self {
            card_id: def.id,
            remaining: def.lifetime,
            durability: def.durability,
            row: def.kind.board_row(),
            column,
        }
    }

    /// Advance one round start.
    ///
    /// Returns `true` when the remaining lifetime is now exactly zero.
    /// Endless cards never change.
    pub fn tick(&mut self) -> bool {
        match &mut self.remaining {
            Lifetime::Rounds(n) => {
                *n = n.saturating_sub(1);
                *n == 0
            }
            Lifetime::Endless => false,
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == Lifetime::Rounds(0)
    }
}
