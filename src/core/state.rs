//! Game state aggregate.
//!
//! `GameState` owns all mutable state of a game: the player's mana, health
//! and zones, the round counter and phase, the shuffle RNG and the message
//! log. It is passed by exclusive reference into every step of the round
//! engine and the effect resolver; there is no global state.
//!
//! The card catalog is shared read-only behind an `Arc`, so resolving a
//! card's effect never borrows the catalog from the state being mutated.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{EngineConfig, ShuffleMode};
use super::error::EngineError;
use super::mana::{ManaCost, ManaElement, ManaPool};
use super::player::PlayerState;
use super::rng::GameRng;
use crate::cards::{CardCatalog, CardId, Lifetime};
use crate::rules::Phase;
use crate::zones::{ZoneKind, ZoneManager};

/// Read-only view of one in-play slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub slot: usize,
    pub card_id: CardId,
    pub name: String,
    pub remaining: Lifetime,
    pub durability: Option<u32>,
    pub row: Option<u8>,
    pub column: u16,
}

/// Read-only view of one hand slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEntry {
    pub index: usize,
    pub card_id: CardId,
    pub name: String,
    pub cost: ManaCost,
}

/// State saved before an effect resolves, restored if it fails.
#[derive(Clone, Debug)]
pub(crate) struct Checkpoint {
    player: PlayerState,
    messages: Vector<String>,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) config: EngineConfig,
    pub(crate) catalog: Arc<CardCatalog>,
    pub(crate) player: PlayerState,
    pub(crate) phase: Phase,
    pub(crate) round: u32,
    pub(crate) quit_requested: bool,
    pub(crate) rng: GameRng,
    pub(crate) messages: Vector<String>,
}

impl GameState {
    /// Build the initial state.
    ///
    /// Mana starts empty and health at `config.starting_health`. Every card
    /// in `starting_deck` must exist in `catalog`; they are loaded into the
    /// deck zone in order. The draw pile stays empty until the first round
    /// start moves the deck onto it.
    pub fn initialize(
        config: EngineConfig,
        catalog: Arc<CardCatalog>,
        starting_deck: &[CardId],
    ) -> Result<Self, EngineError> {
        let mut player = PlayerState::new(&config);
        for &card in starting_deck {
            catalog.lookup(card)?;
            player.zones.place(ZoneKind::Deck, card)?;
        }

        let seed = match config.shuffle {
            ShuffleMode::Seeded { seed } => seed,
            ShuffleMode::Preserve => 0,
        };
        tracing::info!(deck = starting_deck.len(), health = config.starting_health, "game initialized");

        Ok(Self {
            rng: GameRng::new(seed).for_context("shuffle"),
            config,
            catalog,
            player,
            phase: Phase::RoundStart,
            round: 0,
            quit_requested: false,
            messages: Vector::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn health(&self) -> i64 {
        self.player.health
    }

    #[must_use]
    pub fn mana(&self) -> &ManaPool {
        &self.player.mana
    }

    #[must_use]
    pub fn draw_rate(&self) -> u32 {
        self.player.draw_rate
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.player.zones
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Lines emitted by `Message` effects, oldest first.
    #[must_use]
    pub fn messages(&self) -> &Vector<String> {
        &self.messages
    }

    /// Whether a health or quit condition ends the game at the next check.
    #[must_use]
    pub fn terminal_condition(&self) -> bool {
        self.quit_requested || self.player.is_dead()
    }

    /// In-play slots with name, remaining lifetime and board position.
    #[must_use]
    pub fn board_snapshot(&self) -> Vec<BoardEntry> {
        self.player
            .zones
            .in_play()
            .map(|(slot, card_id, state)| BoardEntry {
                slot,
                card_id,
                name: self.card_name(card_id),
                remaining: state.remaining,
                durability: state.durability,
                row: state.row,
                column: state.column,
            })
            .collect()
    }

    /// Hand slots with name and cost.
    #[must_use]
    pub fn hand_snapshot(&self) -> Vec<HandEntry> {
        self.player
            .zones
            .zone(ZoneKind::Hand)
            .occupied()
            .map(|(index, card_id)| HandEntry {
                index,
                card_id,
                name: self.card_name(card_id),
                cost: self.catalog.get(card_id).map(|def| def.cost).unwrap_or_default(),
            })
            .collect()
    }

    fn card_name(&self, card: CardId) -> String {
        self.catalog
            .get(card)
            .map_or_else(|| card.to_string(), |def| def.name.clone())
    }

    // === Mutation helpers for hosts ===

    /// Add mana to the pool outside of an effect.
    pub fn grant_mana(&mut self, element: ManaElement, amount: u32) -> Result<(), EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        self.player.mana.add(element, amount);
        Ok(())
    }

    /// Place a catalog card into the first free slot of `zone`.
    ///
    /// In-play placement goes through `RoundEngine::attempt_play`. Fails
    /// with `CardLimit` once the game holds as many cards as the discard
    /// pile can take.
    pub fn deal_to(&mut self, zone: ZoneKind, card: CardId) -> Result<usize, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        self.catalog.lookup(card)?;
        self.player.zones.place(zone, card)
    }

    pub(crate) fn zones_mut(&mut self) -> &mut ZoneManager {
        &mut self.player.zones
    }

    pub(crate) fn push_message(&mut self, text: String) {
        self.messages.push_back(text);
    }

    pub(crate) fn catalog_handle(&self) -> Arc<CardCatalog> {
        Arc::clone(&self.catalog)
    }

    // === Rollback ===

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            player: self.player.clone(),
            messages: self.messages.clone(),
        }
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.player = checkpoint.player;
        self.messages = checkpoint.messages;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardKind};

    fn catalog() -> Arc<CardCatalog> {
        let mut catalog = CardCatalog::new();
        catalog
            .register(
                CardDefinition::new(CardId::new(1), "Tjena", CardKind::Conduit)
                    .with_cost(ManaCost::free().with(ManaElement::Void, 1))
                    .with_lifetime(Lifetime::Rounds(5)),
            )
            .unwrap();
        catalog
            .register(CardDefinition::new(CardId::new(2), "Hejsan", CardKind::Buff))
            .unwrap();
        Arc::new(catalog)
    }

    #[test]
    fn test_initialize() {
        let deck = [CardId::new(1), CardId::new(2), CardId::new(1)];
        let state = GameState::initialize(EngineConfig::default(), catalog(), &deck).unwrap();

        assert_eq!(state.health(), 40);
        assert!(state.mana().is_empty());
        assert_eq!(state.phase(), Phase::RoundStart);
        assert_eq!(state.round(), 0);
        assert_eq!(state.zones().zone(ZoneKind::Deck).len(), 3);
        assert!(state.zones().zone(ZoneKind::Draw).is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_initialize_unknown_card() {
        let err = GameState::initialize(EngineConfig::default(), catalog(), &[CardId::new(9)])
            .err()
            .unwrap();
        assert!(matches!(err, EngineError::UnknownCard(id) if id == CardId::new(9)));
    }

    #[test]
    fn test_initialize_deck_too_large() {
        let config = EngineConfig::default().with_capacities(crate::core::ZoneCapacities {
            deck: 1,
            ..Default::default()
        });
        let err = GameState::initialize(config, catalog(), &[CardId::new(1), CardId::new(2)])
            .err()
            .unwrap();
        assert!(matches!(err, EngineError::ZoneFull { zone: ZoneKind::Deck }));
    }

    #[test]
    fn test_snapshots() {
        let mut state = GameState::initialize(EngineConfig::default(), catalog(), &[]).unwrap();
        state.deal_to(ZoneKind::Hand, CardId::new(2)).unwrap();
        state.deal_to(ZoneKind::Hand, CardId::new(1)).unwrap();

        let hand = state.hand_snapshot();
        assert_eq!(hand.len(), 2);
        assert_eq!(hand[0].name, "Hejsan");
        assert_eq!(hand[1].cost.get(ManaElement::Void), 1);

        assert!(state.board_snapshot().is_empty());
    }

    #[test]
    fn test_deal_unknown_card() {
        let mut state = GameState::initialize(EngineConfig::default(), catalog(), &[]).unwrap();
        assert!(state.deal_to(ZoneKind::Hand, CardId::new(42)).is_err());
        assert!(state.deal_to(ZoneKind::InPlay, CardId::new(1)).is_err());
        assert_eq!(state.zones().total_cards(), 0);
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut state = GameState::initialize(EngineConfig::default(), catalog(), &[]).unwrap();
        let checkpoint = state.checkpoint();

        state.grant_mana(ManaElement::Fire, 3).unwrap();
        state.push_message("hello".to_string());
        state.player.health -= 5;

        state.restore(checkpoint);
        assert!(state.mana().is_empty());
        assert!(state.messages().is_empty());
        assert_eq!(state.health(), 40);
    }
}
