//! Zone system for card locations.
//!
//! A player has five zones: deck, draw pile, hand, discard and in-play.
//! Each is a capacity-checked slot array; in-play slots are paired 1:1
//! with `CardState` entries.
//!
//! ## Key Types
//!
//! - `ZoneKind`: Which of the five zones
//! - `SlotZone`: Capacity-checked slot array
//! - `ZoneManager`: Card movement between zones
//! - `DrawFailure`: Why a draw did not produce a card

pub mod manager;
pub mod slots;

use serde::{Deserialize, Serialize};

pub use manager::{DrawFailure, Expired, ZoneManager};
pub use slots::SlotZone;

/// The zones a card can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Pre-game pool.
    Deck,
    /// Ordered pile drawn from at round start.
    Draw,
    /// Playable cards.
    Hand,
    Discard,
    /// Active cards with a `CardState`.
    InPlay,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::Deck,
        ZoneKind::Draw,
        ZoneKind::Hand,
        ZoneKind::Discard,
        ZoneKind::InPlay,
    ];
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Draw => "draw pile",
            ZoneKind::Hand => "hand",
            ZoneKind::Discard => "discard",
            ZoneKind::InPlay => "in-play",
        };
        f.write_str(name)
    }
}
