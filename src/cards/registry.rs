//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition for a game. Games share it
//! read-only behind an `Arc` once play starts.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind, Lifetime};
use crate::core::{EngineError, ManaCost};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use conduit_ccg::cards::{CardCatalog, CardDefinition, CardId, CardKind};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Tjena", CardKind::Attack)).unwrap();
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Tjena");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let defs: Vec<CardDefinition> = serde_json::from_str(json).map_err(EngineError::Catalog)?;
        let mut catalog = Self::new();
        for def in defs {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Rejects duplicate IDs and definitions that fail validation.
    pub fn register(&mut self, card: CardDefinition) -> Result<CardId, EngineError> {
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::DuplicateCard(card.id));
        }
        card.validate()
            .map_err(|reason| EngineError::InvalidCard { id: card.id, reason })?;

        let id = card.id;
        self.next_id = self.next_id.max(id.raw().saturating_add(1));
        self.cards.insert(id, card);
        Ok(id)
    }

    /// Register a card with an auto-assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        kind: CardKind,
        cost: ManaCost,
        lifetime: Lifetime,
    ) -> Result<CardId, EngineError> {
        let card = CardDefinition::new(CardId::new(self.next_id), name, kind)
            .with_cost(cost)
            .with_lifetime(lifetime);
        self.register(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition, reporting a missing ID as an error.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition, EngineError> {
        self.cards.get(&id).ok_or(EngineError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards of one kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.kind == kind)
    }

    /// Find a card by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.name == name)
    }
}
