//! Core engine types: mana, player, state, RNG, configuration, errors.
//!
//! ## Key Types
//!
//! - `GameState`: the whole game, owned by the caller and mutated in place
//! - `ManaPool` / `ManaCost`: per-element mana
//! - `EngineConfig`: tunables with serde defaults
//! - `GameRng`: seeded ChaCha8 for reproducible shuffles

pub mod config;
pub mod error;
pub mod mana;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, ShuffleMode, ZoneCapacities};
pub use error::{EffectError, EngineError, PlayError};
pub use mana::{ManaCost, ManaElement, ManaPool, ELEMENT_COUNT};
pub use player::PlayerState;
pub use rng::GameRng;
pub use state::{BoardEntry, GameState, HandEntry};
