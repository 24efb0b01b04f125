//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the five zones of a player and performs every
//! transition between them:
//! - Plain moves between slot zones
//! - Entering play, which creates the paired `CardState`
//! - Deck to draw pile transfer (order-preserving or seeded shuffle)
//! - Drawing from the top of the draw pile
//! - Expiry, which clears the state and discards the card
//!
//! Every transition checks the destination before touching the source, so
//! a failed move leaves all zones as they were.

use serde::{Deserialize, Serialize};

use super::slots::SlotZone;
use super::ZoneKind;
use crate::cards::{CardDefinition, CardId, CardState};
use crate::core::config::{ShuffleMode, ZoneCapacities};
use crate::core::{EngineError, GameRng};

/// Why a draw produced no card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawFailure {
    /// The draw pile is empty.
    Exhausted,
    /// The hand has no free slot. The card stays on the pile.
    HandFull,
}

/// Result of removing an expired card from play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expired {
    pub card: CardId,
    /// Discard slot the card landed in.
    pub discard_slot: usize,
}

/// Manages card locations across the five zones.
///
/// ## Usage
///
/// ```
/// use conduit_ccg::cards::CardId;
/// use conduit_ccg::core::{GameRng, ShuffleMode, ZoneCapacities};
/// use conduit_ccg::zones::{ZoneKind, ZoneManager};
///
/// let mut zones = ZoneManager::new(&ZoneCapacities::default());
/// zones.place(ZoneKind::Deck, CardId::new(1)).unwrap();
/// zones.place(ZoneKind::Deck, CardId::new(2)).unwrap();
///
/// zones.transfer_deck_to_draw(ShuffleMode::Preserve, &mut GameRng::new(0)).unwrap();
///
/// // Last deck card is on top
/// assert_eq!(zones.draw_one(), Ok(CardId::new(2)));
/// assert_eq!(zones.zone(ZoneKind::Hand).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    deck: SlotZone,
    draw: SlotZone,
    hand: SlotZone,
    discard: SlotZone,
    in_play: SlotZone,

    /// Paired with `in_play` by slot index.
    card_states: Vec<Option<CardState>>,

    /// One past the top card of the draw pile.
    draw_cursor: usize,
}

impl ZoneManager {
    /// Create empty zones with the given capacities.
    #[must_use]
    pub fn new(capacities: &ZoneCapacities) -> Self {
        Self {
            deck: SlotZone::new(ZoneKind::Deck, capacities.deck),
            draw: SlotZone::new(ZoneKind::Draw, capacities.draw),
            hand: SlotZone::new(ZoneKind::Hand, capacities.hand),
            discard: SlotZone::new(ZoneKind::Discard, capacities.discard),
            in_play: SlotZone::new(ZoneKind::InPlay, capacities.in_play),
            card_states: vec![None; capacities.in_play],
            draw_cursor: 0,
        }
    }

    /// Read access to a zone.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &SlotZone {
        match kind {
            ZoneKind::Deck => &self.deck,
            ZoneKind::Draw => &self.draw,
            ZoneKind::Hand => &self.hand,
            ZoneKind::Discard => &self.discard,
            ZoneKind::InPlay => &self.in_play,
        }
    }

    fn zone_mut(&mut self, kind: ZoneKind) -> &mut SlotZone {
        match kind {
            ZoneKind::Deck => &mut self.deck,
            ZoneKind::Draw => &mut self.draw,
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Discard => &mut self.discard,
            ZoneKind::InPlay => &mut self.in_play,
        }
    }

    /// First free slot of a zone.
    ///
    /// The draw pile only grows at its top, so for it this is the cursor.
    pub fn find_empty_slot(&self, kind: ZoneKind) -> Result<usize, EngineError> {
        match kind {
            ZoneKind::Draw if self.draw_cursor < self.draw.capacity() => Ok(self.draw_cursor),
            ZoneKind::Draw => Err(EngineError::ZoneFull { zone: ZoneKind::Draw }),
            _ => self.zone(kind).find_empty_slot(),
        }
    }

    /// Most cards the zones may hold at once.
    ///
    /// Bounded by the discard capacity, so every card can always be
    /// discarded on expiry.
    #[must_use]
    pub fn card_limit(&self) -> usize {
        self.discard.capacity()
    }

    /// Put a new card into a zone (dealing, initial deck).
    ///
    /// Cards placed on the draw pile go on top. In-play needs a placement;
    /// use `enter_play` instead. Fails with `CardLimit` once the zones
    /// hold `card_limit()` cards.
    pub fn place(&mut self, kind: ZoneKind, card: CardId) -> Result<usize, EngineError> {
        if kind == ZoneKind::InPlay {
            return Err(EngineError::PlacementRequired);
        }
        let limit = self.card_limit();
        if self.total_cards() >= limit {
            return Err(EngineError::CardLimit { limit });
        }
        self.insert_new(kind, card)
    }

    fn insert_new(&mut self, kind: ZoneKind, card: CardId) -> Result<usize, EngineError> {
        let slot = self.find_empty_slot(kind)?;
        if !self.zone_mut(kind).put(slot, card) {
            return Err(EngineError::ZoneFull { zone: kind });
        }
        if kind == ZoneKind::Draw {
            self.draw_cursor += 1;
        }
        Ok(slot)
    }

    /// Move the card at `from[slot]` into the first empty slot of `to`.
    ///
    /// Returns the destination slot. Moving out of play clears the card's
    /// state; moving into play requires `enter_play`.
    pub fn move_card(&mut self, from: ZoneKind, slot: usize, to: ZoneKind) -> Result<usize, EngineError> {
        if to == ZoneKind::InPlay {
            return Err(EngineError::PlacementRequired);
        }
        let card = self.zone(from)
            .get(slot)
            .ok_or(EngineError::EmptySlot { zone: from, index: slot })?;
        // Check before the source is cleared
        self.find_empty_slot(to)?;

        self.remove_at(from, slot);
        let new_slot = self.insert_new(to, card)?;
        tracing::debug!(%card, %from, %to, slot = new_slot, "moved card");
        Ok(new_slot)
    }

    /// Move a card from the hand into play at `column`.
    ///
    /// Initializes its `CardState` from `def` (base lifetime, row from the
    /// card kind). Returns the in-play slot.
    pub fn enter_play(
        &mut self,
        hand_slot: usize,
        def: &CardDefinition,
        column: u16,
    ) -> Result<usize, EngineError> {
        let card = self.hand
            .get(hand_slot)
            .ok_or(EngineError::EmptySlot { zone: ZoneKind::Hand, index: hand_slot })?;
        if card != def.id {
            return Err(EngineError::UnknownCard(card));
        }
        let slot = self.in_play.find_empty_slot()?;

        self.hand.take(hand_slot);
        self.in_play.put(slot, card);
        self.card_states[slot] = Some(CardState::enter_play(def, column));
        tracing::debug!(%card, slot, column, "card entered play");
        Ok(slot)
    }

    /// Remove the in-play card at `slot`, clear its state and discard it.
    ///
    /// Fails without changing anything if the discard pile is full.
    pub fn expire(&mut self, slot: usize) -> Result<Expired, EngineError> {
        let card = self.in_play
            .get(slot)
            .ok_or(EngineError::EmptySlot { zone: ZoneKind::InPlay, index: slot })?;
        let discard_slot = self.discard.find_empty_slot()?;

        self.in_play.take(slot);
        self.card_states[slot] = None;
        self.discard.put(discard_slot, card);
        Ok(Expired { card, discard_slot })
    }

    /// Move every deck card onto the draw pile.
    ///
    /// `Preserve` keeps deck order, so the last deck card ends up on top.
    /// `Seeded` permutes the cards with a stream derived from `rng`.
    /// Fails without moving anything if the pile cannot hold the deck.
    pub fn transfer_deck_to_draw(&mut self, mode: ShuffleMode, rng: &mut GameRng) -> Result<usize, EngineError> {
        let incoming = self.deck.len();
        if self.draw_cursor + incoming > self.draw.capacity() {
            return Err(EngineError::ZoneFull { zone: ZoneKind::Draw });
        }

        let mut cards = self.deck.drain();
        if let ShuffleMode::Seeded { .. } = mode {
            rng.shuffle(&mut cards);
        }
        for card in cards {
            self.draw.put(self.draw_cursor, card);
            self.draw_cursor += 1;
        }
        tracing::debug!(count = incoming, ?mode, "deck moved to draw pile");
        Ok(incoming)
    }

    /// Draw the top card of the draw pile into the hand.
    pub fn draw_one(&mut self) -> Result<CardId, DrawFailure> {
        // Skip holes left by direct removals
        while self.draw_cursor > 0 && self.draw.get(self.draw_cursor - 1).is_none() {
            self.draw_cursor -= 1;
        }
        if self.draw_cursor == 0 {
            return Err(DrawFailure::Exhausted);
        }

        let hand_slot = self.hand.find_empty_slot().map_err(|_| DrawFailure::HandFull)?;
        let top = self.draw_cursor - 1;
        let card = self.draw.take(top).ok_or(DrawFailure::Exhausted)?;
        self.draw_cursor = top;
        self.hand.put(hand_slot, card);
        tracing::debug!(%card, hand_slot, "drew card");
        Ok(card)
    }

    /// Cards left on the draw pile.
    #[must_use]
    pub fn draw_remaining(&self) -> usize {
        self.draw.len()
    }

    /// State paired with an in-play slot.
    #[must_use]
    pub fn card_state(&self, slot: usize) -> Option<&CardState> {
        self.card_states.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn card_state_mut(&mut self, slot: usize) -> Option<&mut CardState> {
        self.card_states.get_mut(slot).and_then(Option::as_mut)
    }

    /// In-play cards with their state, lowest slot first.
    pub fn in_play(&self) -> impl Iterator<Item = (usize, CardId, &CardState)> + '_ {
        self.in_play
            .occupied()
            .filter_map(move |(slot, card)| self.card_state(slot).map(|state| (slot, card, state)))
    }

    /// Occupied in-play slot indices, lowest first.
    #[must_use]
    pub fn in_play_slots(&self) -> Vec<usize> {
        self.in_play.occupied().map(|(slot, _)| slot).collect()
    }

    /// Sum of occupied slots over all five zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        ZoneKind::ALL.iter().map(|&kind| self.zone(kind).len()).sum()
    }

    fn remove_at(&mut self, kind: ZoneKind, slot: usize) -> Option<CardId> {
        let card = self.zone_mut(kind).take(slot)?;
        match kind {
            ZoneKind::InPlay => self.card_states[slot] = None,
            ZoneKind::Draw if slot + 1 == self.draw_cursor => self.draw_cursor = slot,
            _ => {}
        }
        Some(card)
    }
}
