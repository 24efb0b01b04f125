//! # conduit-ccg
//!
//! A single-player, round-based card game engine.
//!
//! ## Design Principles
//!
//! 1. **Fixed slot zones**: every zone is a fixed-capacity array of slots.
//!    Cards move between slots; they are never copied or lost.
//!
//! 2. **Data-driven cards**: a card is a catalog entry with a cost, a
//!    lifetime and two declarative effects (`on_play`, `on_round_start`).
//!    Catalogs load from JSON.
//!
//! 3. **All-or-nothing actions**: a failed play or effect leaves mana and
//!    zones exactly as they were.
//!
//! ## Round cycle
//!
//! ```text
//! RoundStart -> PlayerAction -> RoundEnd -> RoundStart ...
//!                                    \-> GameOver
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use conduit_ccg::{
//!     CardCatalog, CardDefinition, CardId, CardKind, EngineConfig, GameState, ManaCost,
//!     ManaElement, RoundEngine,
//! };
//!
//! let mut catalog = CardCatalog::new();
//! let spark = catalog
//!     .register(
//!         CardDefinition::new(CardId::new(1), "Spark", CardKind::Conduit)
//!             .with_cost(ManaCost::free().with(ManaElement::Void, 1)),
//!     )
//!     .unwrap();
//!
//! let mut state = GameState::initialize(EngineConfig::default(), Arc::new(catalog), &[spark]).unwrap();
//! RoundEngine::start_round(&mut state).unwrap();
//! assert_eq!(state.hand_snapshot().len(), 1);
//!
//! // No mana yet
//! assert!(RoundEngine::attempt_play(&mut state, 0, 0).is_err());
//!
//! state.grant_mana(ManaElement::Void, 1).unwrap();
//! RoundEngine::attempt_play(&mut state, 0, 0).unwrap();
//! assert_eq!(state.board_snapshot().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: mana, player, state, RNG, configuration, errors
//! - `zones`: slot zones and the zone manager
//! - `cards`: definitions, in-play state, the catalog
//! - `effects`: the effect enum and its resolver
//! - `rules`: the round engine and phases

pub mod cards;
pub mod core;
pub mod effects;
pub mod rules;
pub mod zones;

pub use crate::core::{
    BoardEntry, EffectError, EngineConfig, EngineError, GameRng, GameState, HandEntry,
    ManaCost, ManaElement, ManaPool, PlayError, PlayerState, ShuffleMode, ZoneCapacities,
};

pub use crate::zones::{ZoneKind, ZoneManager};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardKind, CardState, Lifetime};

pub use crate::effects::{Effect, EffectResolver};

pub use crate::rules::{EffectFailure, Phase, PlayOutcome, RoundEngine, RoundSummary};
