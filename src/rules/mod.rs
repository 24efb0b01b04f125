//! Round and turn rules.
//!
//! `RoundEngine` owns the phase machine:
//! - `start_round` resets mana, runs round-start effects, ticks lifetimes
//!   and draws
//! - `attempt_play` plays one card from the hand, all-or-nothing
//! - `end_turn` and `quit` leave the action phase
//!
//! Nothing here renders or reads input; a front end drives the engine and
//! reads results back from `GameState` and the returned summaries.

pub mod engine;
pub mod outcome;
pub mod phase;

pub use engine::RoundEngine;
pub use outcome::{EffectFailure, PlayOutcome, RoundSummary};
pub use phase::Phase;
