//! Results reported by the round engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::EffectError;

/// A round-start effect that failed. Its changes were rolled back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectFailure {
    pub slot: usize,
    pub card: CardId,
    pub error: EffectError,
}

/// What happened during one round start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    pub round: u32,
    /// Cards whose lifetime reached zero, in slot order.
    pub expired: SmallVec<[CardId; 4]>,
    /// Cards drawn into the hand, in draw order.
    pub drawn: SmallVec<[CardId; 4]>,
    /// Health lost to drawing from an empty pile.
    pub damage_taken: u64,
    /// Draws skipped because the hand was full.
    pub skipped_draws: u32,
    /// Round-start effects that failed.
    pub effect_failures: Vec<EffectFailure>,
    /// The round ended the game.
    pub game_over: bool,
}

/// A successful play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub card: CardId,
    /// Hand slot the card left.
    pub hand_index: usize,
    /// In-play slot it now occupies.
    pub slot: usize,
    pub row: Option<u8>,
    pub column: u16,
}
