//! Engine error types.
//!
//! Zone, mana and index problems are recoverable and go back to the caller
//! of the action API. Running out of cards to draw is not an error at this
//! level: the round engine turns it into draw damage.

use thiserror::Error;

use super::mana::ManaElement;
use crate::cards::CardId;
use crate::rules::Phase;
use crate::zones::ZoneKind;

/// Errors from engine setup and state transitions.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{zone} has no free slot")]
    ZoneFull { zone: ZoneKind },

    #[error("{zone} slot {index} is empty")]
    EmptySlot { zone: ZoneKind, index: usize },

    #[error("the game already holds {limit} cards, the most the discard pile can take")]
    CardLimit { limit: usize },

    #[error("cards enter play through a placement, not a plain move")]
    PlacementRequired,

    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("{0} is already registered")]
    DuplicateCard(CardId),

    #[error("invalid definition for {id}: {reason}")]
    InvalidCard { id: CardId, reason: String },

    #[error("the game is over")]
    GameOver,

    #[error("action not allowed during {0:?}")]
    WrongPhase(Phase),

    #[error("catalog parsing error: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("config parsing error: {0}")]
    Config(#[source] serde_json::Error),
}

/// Errors from a single play attempt.
///
/// Every variant leaves mana and zones exactly as they were before the
/// attempt, so the player may try again.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("no card at hand index {0}")]
    InvalidHandIndex(usize),

    #[error("not enough {element} mana: need {required}, have {available}")]
    InsufficientMana {
        element: ManaElement,
        required: u32,
        available: u32,
    },

    #[error("column {column} is outside the board ({columns} columns)")]
    InvalidPlacement { column: u16, columns: u16 },

    #[error("{zone} has no free slot")]
    ZoneFull { zone: ZoneKind },

    #[error("{0} in hand is not in the catalog")]
    UnknownCard(CardId),

    #[error("on-play effect failed: {0}")]
    EffectFailed(#[source] EffectError),

    #[error("cards can only be played during the action phase, not {0:?}")]
    NotPlayerPhase(Phase),

    #[error("the game is over")]
    GameOver,
}

/// Failure reported by an effect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("draw pile is empty")]
    DrawPileEmpty,

    #[error("hand is full")]
    HandFull,

    #[error("the game is over")]
    GameOver,

    #[error("effect {index} of batch failed: {source}")]
    Batch {
        index: usize,
        source: Box<EffectError>,
    },
}
