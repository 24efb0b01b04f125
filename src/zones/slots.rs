//! Capacity-checked slot arrays.
//!
//! Each zone is an ordered row of slots that are either empty or hold one
//! card. Slot indices are stable: removing a card leaves a hole rather than
//! shifting its neighbours, so the hand index the player sees does not move.

use serde::{Deserialize, Serialize};

use super::ZoneKind;
use crate::cards::CardId;
use crate::core::EngineError;

/// A fixed-capacity zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotZone {
    kind: ZoneKind,
    slots: Vec<Option<CardId>>,
}

impl SlotZone {
    /// Create an empty zone with `capacity` slots.
    #[must_use]
    pub fn new(kind: ZoneKind, capacity: usize) -> Self {
        Self {
            kind,
            slots: vec![None; capacity],
        }
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the first unoccupied slot.
    pub fn find_empty_slot(&self) -> Result<usize, EngineError> {
        self.slots
            .iter()
            .position(Option::is_none)
            .ok_or(EngineError::ZoneFull { zone: self.kind })
    }

    /// Write a card into the first empty slot.
    pub fn insert(&mut self, card: CardId) -> Result<usize, EngineError> {
        let index = self.find_empty_slot()?;
        self.slots[index] = Some(card);
        Ok(index)
    }

    /// Card at `index`, if the slot exists and is occupied.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CardId> {
        self.slots.get(index).copied().flatten()
    }

    /// Remove and return the card at `index`.
    pub fn take(&mut self, index: usize) -> Option<CardId> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Write directly into a slot. The slot must be empty and in range.
    pub(crate) fn put(&mut self, index: usize, card: CardId) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(card);
                true
            }
            _ => false,
        }
    }

    /// Occupied slots as `(index, card)`, lowest index first.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, CardId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|card| (i, card)))
    }

    /// Empty every slot, returning the removed cards in slot order.
    pub fn drain(&mut self) -> Vec<CardId> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}
