//! Round engine: the turn/round state machine.
//!
//! Each step takes the `GameState` by exclusive reference and runs to
//! completion before the next one is considered:
//!
//! - `start_round`: reset mana, run round-start effects, tick lifetimes,
//!   draw up to the draw rate
//! - `attempt_play`: one play attempt from the hand; failures change nothing
//! - `end_turn` / `quit`: leave the action phase through the round-end check

use crate::core::{EngineError, GameState, PlayError};
use crate::effects::EffectResolver;
use crate::zones::{DrawFailure, ZoneKind};

use super::outcome::{EffectFailure, PlayOutcome, RoundSummary};
use super::phase::Phase;

/// Drives a `GameState` through its rounds.
pub struct RoundEngine;

impl RoundEngine {
    /// Run the round-start transition.
    ///
    /// Called from the action phase, this first ends the current turn.
    /// Returns `EngineError::GameOver` if the game is over, or becomes over
    /// at the round-end check, instead of starting a round.
    pub fn start_round(state: &mut GameState) -> Result<RoundSummary, EngineError> {
        if state.phase.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if !state.phase.can_start_round() {
            return Err(EngineError::WrongPhase(state.phase));
        }
        if state.phase == Phase::PlayerAction {
            Self::finish_round(state);
        }
        if state.terminal_condition() {
            Self::enter_game_over(state);
            return Err(EngineError::GameOver);
        }

        if state.round == 0 {
            let mode = state.config.shuffle;
            state.player.zones.transfer_deck_to_draw(mode, &mut state.rng)?;
        }

        state.phase = Phase::RoundStart;
        state.round += 1;
        state.player.mana.reset();

        let mut summary = RoundSummary {
            round: state.round,
            ..RoundSummary::default()
        };

        Self::process_in_play(state, &mut summary)?;
        Self::draw_phase(state, &mut summary);

        if state.player.is_dead() {
            Self::enter_game_over(state);
            summary.game_over = true;
        } else {
            state.phase = Phase::PlayerAction;
        }

        tracing::info!(
            round = summary.round,
            drawn = summary.drawn.len(),
            expired = summary.expired.len(),
            damage = summary.damage_taken,
            health = state.player.health,
            "round started"
        );
        Ok(summary)
    }

    /// Round-start effects then lifetime ticks, lowest slot first.
    fn process_in_play(state: &mut GameState, summary: &mut RoundSummary) -> Result<(), EngineError> {
        let catalog = state.catalog_handle();

        for slot in state.player.zones.in_play_slots() {
            let Some(card) = state.player.zones.zone(ZoneKind::InPlay).get(slot) else {
                continue;
            };
            let def = catalog.lookup(card)?;

            if let Err(error) = EffectResolver::resolve(&def.on_round_start, state, card) {
                tracing::warn!(slot, %card, %error, "round-start effect failed");
                summary.effect_failures.push(EffectFailure { slot, card, error });
            }

            let expired = state
                .player
                .zones
                .card_state_mut(slot)
                .is_some_and(|card_state| card_state.tick());
            if expired {
                let removed = state.player.zones.expire(slot)?;
                tracing::debug!(slot, card = %removed.card, "card expired");
                summary.expired.push(removed.card);
            }
        }
        Ok(())
    }

    /// Draw up to the draw rate. An empty pile costs health per attempt.
    fn draw_phase(state: &mut GameState, summary: &mut RoundSummary) {
        let draws = state.player.draw_rate;
        let damage = state.config.draw_damage;

        for attempt in 0..draws {
            match state.player.zones.draw_one() {
                Ok(card) => summary.drawn.push(card),
                Err(DrawFailure::Exhausted) => {
                    state.player.health = state.player.health.saturating_sub(i64::from(damage));
                    summary.damage_taken += u64::from(damage);
                    if state.player.is_dead() {
                        break;
                    }
                }
                Err(DrawFailure::HandFull) => {
                    summary.skipped_draws = draws - attempt;
                    tracing::warn!(skipped = summary.skipped_draws, "hand full, draws skipped");
                    break;
                }
            }
        }
    }

    /// Try to play the card at `hand_index` into board column `column`.
    ///
    /// Order: validate, resolve on-play, pay, enter play. Any failure leaves
    /// mana and zones exactly as they were and keeps the action phase.
    pub fn attempt_play(state: &mut GameState, hand_index: usize, column: u16) -> Result<PlayOutcome, PlayError> {
        match state.phase {
            Phase::PlayerAction => {}
            Phase::GameOver => return Err(PlayError::GameOver),
            other => return Err(PlayError::NotPlayerPhase(other)),
        }

        let card = state
            .player
            .zones
            .zone(ZoneKind::Hand)
            .get(hand_index)
            .ok_or(PlayError::InvalidHandIndex(hand_index))?;
        let catalog = state.catalog_handle();
        let def = catalog.get(card).ok_or(PlayError::UnknownCard(card))?;

        let columns = state.config.board_columns;
        if column >= columns {
            return Err(PlayError::InvalidPlacement { column, columns });
        }
        if let Some(element) = state.player.mana.first_shortfall(&def.cost) {
            return Err(PlayError::InsufficientMana {
                element,
                required: def.cost.get(element),
                available: state.player.mana.get(element),
            });
        }
        state
            .player
            .zones
            .find_empty_slot(ZoneKind::InPlay)
            .map_err(|_| PlayError::ZoneFull { zone: ZoneKind::InPlay })?;

        let checkpoint = state.checkpoint();
        EffectResolver::resolve(&def.on_play, state, card).map_err(PlayError::EffectFailed)?;

        // Effects only add mana, so the cost checked above is still covered
        let _ = state.player.mana.pay(&def.cost);

        let slot = match state.player.zones.enter_play(hand_index, def, column) {
            Ok(slot) => slot,
            Err(err) => {
                state.restore(checkpoint);
                return Err(match err {
                    EngineError::ZoneFull { zone } => PlayError::ZoneFull { zone },
                    _ => PlayError::UnknownCard(card),
                });
            }
        };

        tracing::info!(%card, name = %def.name, slot, column, "card played");
        if state.player.is_dead() {
            Self::enter_game_over(state);
        }

        Ok(PlayOutcome {
            card,
            hand_index,
            slot,
            row: def.kind.board_row(),
            column,
        })
    }

    /// End the action phase. Returns the phase the game moved to.
    pub fn end_turn(state: &mut GameState) -> Result<Phase, EngineError> {
        match state.phase {
            Phase::PlayerAction => {}
            Phase::GameOver => return Err(EngineError::GameOver),
            other => return Err(EngineError::WrongPhase(other)),
        }
        Self::finish_round(state);
        Ok(state.phase)
    }

    /// Quit the game. Effects already applied this round stay applied.
    pub fn quit(state: &mut GameState) {
        state.quit_requested = true;
        if !state.phase.is_terminal() {
            state.phase = Phase::RoundEnd;
            Self::enter_game_over(state);
        }
    }

    /// RoundEnd: enemy hook, then the terminal check.
    fn finish_round(state: &mut GameState) {
        state.phase = Phase::RoundEnd;
        Self::enemy_round(state);
        if state.terminal_condition() {
            Self::enter_game_over(state);
        } else {
            state.phase = Phase::RoundStart;
        }
    }

    /// Opponent turn. There is no opponent yet.
    fn enemy_round(state: &mut GameState) {
        tracing::debug!(round = state.round, "enemy round skipped");
    }

    fn enter_game_over(state: &mut GameState) {
        state.phase = Phase::GameOver;
        tracing::info!(
            round = state.round,
            health = state.player.health,
            quit = state.quit_requested,
            "game over"
        );
    }
}
