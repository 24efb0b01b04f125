//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, kind,
//! cost, base lifetime and its two effect bindings. Definitions are owned by
//! the `CardCatalog` and shared read-only for the whole game.
//!
//! Per-placement data (remaining lifetime, board position) is stored
//! separately in `CardState`.

use serde::{Deserialize, Serialize};

use crate::core::ManaCost;
use crate::effects::Effect;

/// Unique identifier for a card definition.
///
/// This identifies the card ("Tjena"), not a copy of it in some zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type. Determines the board row a card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Conduit,
    Attack,
    #[serde(rename = "self")]
    SelfTarget,
    Artifact,
    Buff,
}

impl CardKind {
    /// Board row for this kind.
    ///
    /// Conduits sit in row 0 and artifacts in row 1. Every other kind is
    /// not placed on the board grid.
    #[must_use]
    pub const fn board_row(self) -> Option<u8> {
        match self {
            CardKind::Conduit => Some(0),
            CardKind::Artifact => Some(1),
            CardKind::Attack | CardKind::SelfTarget | CardKind::Buff => None,
        }
    }
}

/// How long a card stays in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// Removed after this many round starts.
    Rounds(u32),
    /// Never expires.
    Endless,
}

impl Lifetime {
    #[must_use]
    pub const fn is_endless(self) -> bool {
        matches!(self, Lifetime::Endless)
    }

    /// Remaining rounds, or `None` for endless.
    #[must_use]
    pub const fn rounds(self) -> Option<u32> {
        match self {
            Lifetime::Rounds(n) => Some(n),
            Lifetime::Endless => None,
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lifetime::Rounds(n) => write!(f, "{n}"),
            Lifetime::Endless => f.write_str("endless"),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use conduit_ccg::cards::{CardDefinition, CardId, CardKind, Lifetime};
/// use conduit_ccg::core::{ManaCost, ManaElement};
/// use conduit_ccg::effects::Effect;
///
/// let spark = CardDefinition::new(CardId::new(1), "Spark", CardKind::Conduit)
///     .with_cost(ManaCost::free().with(ManaElement::Void, 1))
///     .with_lifetime(Lifetime::Rounds(3))
///     .on_round_start(Effect::gain_mana(ManaElement::Fire, 1));
///
/// assert_eq!(spark.kind.board_row(), Some(0));
/// assert!(spark.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    pub kind: CardKind,

    #[serde(default)]
    pub cost: ManaCost,

    /// Base lifetime given to each new placement.
    pub lifetime: Lifetime,

    /// Durability copied into the card state on play.
    #[serde(default)]
    pub durability: Option<u32>,

    /// Resolved when the card is played, before its cost is paid.
    #[serde(default)]
    pub on_play: Effect,

    /// Resolved at every round start while the card is in play.
    #[serde(default)]
    pub on_round_start: Effect,
}

impl CardDefinition {
    /// Create a free, endless card with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost: ManaCost::free(),
            lifetime: Lifetime::Endless,
            durability: None,
            on_play: Effect::NoOp,
            on_round_start: Effect::NoOp,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: ManaCost) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    #[must_use]
    pub fn with_durability(mut self, durability: u32) -> Self {
        self.durability = Some(durability);
        self
    }

    /// Bind the on-play effect.
    #[must_use]
    pub fn on_play(mut self, effect: Effect) -> Self {
        self.on_play = effect;
        self
    }

    /// Bind the on-round-start effect.
    #[must_use]
    pub fn on_round_start(mut self, effect: Effect) -> Self {
        self.on_round_start = effect;
        self
    }

    /// Check the definition is usable by the engine.
    ///
    /// Returns the reason it is not.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if self.lifetime == Lifetime::Rounds(0) {
            return Err("lifetime must be at least one round".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManaElement;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_board_rows() {
        assert_eq!(CardKind::Conduit.board_row(), Some(0));
        assert_eq!(CardKind::Artifact.board_row(), Some(1));
        assert_eq!(CardKind::Attack.board_row(), None);
        assert_eq!(CardKind::SelfTarget.board_row(), None);
        assert_eq!(CardKind::Buff.board_row(), None);
    }

    #[test]
    fn test_builder_defaults() {
        let card = CardDefinition::new(CardId::new(1), "Hejsan", CardKind::Buff);
        assert!(card.cost.is_free());
        assert_eq!(card.lifetime, Lifetime::Endless);
        assert_eq!(card.on_play, Effect::NoOp);
        assert_eq!(card.durability, None);
    }

    #[test]
    fn test_validate() {
        let zero = CardDefinition::new(CardId::new(1), "Blink", CardKind::Attack)
            .with_lifetime(Lifetime::Rounds(0));
        assert!(zero.validate().is_err());

        let unnamed = CardDefinition::new(CardId::new(2), "  ", CardKind::Attack);
        assert!(unnamed.validate().is_err());

        let fine = CardDefinition::new(CardId::new(3), "Tjena", CardKind::Attack)
            .with_lifetime(Lifetime::Rounds(5));
        assert!(fine.validate().is_ok());
    }

    #[test]
    fn test_lifetime_display() {
        assert_eq!(Lifetime::Rounds(3).to_string(), "3");
        assert_eq!(Lifetime::Endless.to_string(), "endless");
        assert_eq!(Lifetime::Endless.rounds(), None);
        assert!(Lifetime::Endless.is_endless());
    }

    #[test]
    fn test_serialization() {
        let card = CardDefinition::new(CardId::new(4), "Ember", CardKind::SelfTarget)
            .with_cost(ManaCost::free().with(ManaElement::Fire, 2))
            .with_lifetime(Lifetime::Rounds(2))
            .on_play(Effect::message("ember lit"));

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"kind\":\"self\""));

        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
