//! Effect resolution - executing effects on game state.
//!
//! The `EffectResolver` applies one effect to the game state through a
//! single exhaustive match. Resolution is all-or-nothing: if any part of an
//! effect fails, the state is restored to what it was before the call.

use crate::cards::CardId;
use crate::core::{EffectError, GameState};
use crate::zones::DrawFailure;

use super::Effect;

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` on behalf of the card `source`.
    ///
    /// On failure nothing the effect did is kept.
    pub fn resolve(effect: &Effect, state: &mut GameState, source: CardId) -> Result<(), EffectError> {
        if state.is_game_over() {
            return Err(EffectError::GameOver);
        }
        if effect.is_noop() {
            return Ok(());
        }

        let checkpoint = state.checkpoint();
        let result = Self::apply(effect, state, source);
        if let Err(err) = &result {
            tracing::debug!(%source, %err, "effect failed, state restored");
            state.restore(checkpoint);
        }
        result
    }

    fn apply(effect: &Effect, state: &mut GameState, source: CardId) -> Result<(), EffectError> {
        match effect {
            Effect::NoOp => Ok(()),

            Effect::GainMana { element, amount } => {
                state.player.mana.add(*element, *amount);
                Ok(())
            }

            Effect::IncreaseDrawRate { amount } => {
                state.player.draw_rate = state.player.draw_rate.saturating_add(*amount);
                Ok(())
            }

            Effect::Heal { amount } => {
                state.player.health = state.player.health.saturating_add(i64::from(*amount));
                Ok(())
            }

            Effect::Damage { amount } => {
                state.player.health = state.player.health.saturating_sub(i64::from(*amount));
                Ok(())
            }

            Effect::DrawCards { count } => {
                for _ in 0..*count {
                    state.zones_mut().draw_one().map_err(|failure| match failure {
                        DrawFailure::Exhausted => EffectError::DrawPileEmpty,
                        DrawFailure::HandFull => EffectError::HandFull,
                    })?;
                }
                Ok(())
            }

            Effect::Message(text) => {
                tracing::info!(%source, message = %text, "card message");
                state.push_message(text.clone());
                Ok(())
            }

            Effect::Batch(effects) => {
                for (index, inner) in effects.iter().enumerate() {
                    Self::apply(inner, state, source).map_err(|err| EffectError::Batch {
                        index,
                        source: Box::new(err),
                    })?;
                }
                Ok(())
            }
        }
    }
}
