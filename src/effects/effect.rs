//! Effect definitions.
//!
//! Effects are the behaviour bound to a card's two hooks (on-play and
//! on-round-start). They are plain data so catalogs can be loaded from
//! JSON, and the resolver dispatches on them with one exhaustive match.

use serde::{Deserialize, Serialize};

use crate::core::ManaElement;

/// A card effect.
///
/// ## Player Effects
///
/// - `GainMana`: Add mana of one element to the pool
/// - `IncreaseDrawRate`: Draw more cards at each round start
/// - `Heal` / `Damage`: Change health
///
/// ## Zone Effects
///
/// - `DrawCards`: Draw immediately; fails on an empty pile or full hand
///
/// ## Other
///
/// - `Message`: Append a line to the game's message log
/// - `Batch`: Resolve several effects in order, stopping at the first failure
/// - `NoOp`: Do nothing
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    #[default]
    NoOp,

    GainMana {
        element: ManaElement,
        amount: u32,
    },

    IncreaseDrawRate {
        amount: u32,
    },

    Heal {
        amount: u32,
    },

    Damage {
        amount: u32,
    },

    DrawCards {
        count: u32,
    },

    Message(String),

    Batch(Vec<Effect>),
}

impl Effect {
    // === Convenience Constructors ===

    pub fn gain_mana(element: ManaElement, amount: u32) -> Self {
        Self::GainMana { element, amount }
    }

    pub fn increase_draw_rate(amount: u32) -> Self {
        Self::IncreaseDrawRate { amount }
    }

    pub fn heal(amount: u32) -> Self {
        Self::Heal { amount }
    }

    pub fn damage(amount: u32) -> Self {
        Self::Damage { amount }
    }

    pub fn draw(count: u32) -> Self {
        Self::DrawCards { count }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// True if resolving this effect cannot change anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Effect::NoOp => true,
            Effect::Batch(effects) => effects.iter().all(Effect::is_noop),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Effect::gain_mana(ManaElement::Time, 2),
            Effect::GainMana { element: ManaElement::Time, amount: 2 }
        );
        assert_eq!(Effect::draw(1), Effect::DrawCards { count: 1 });
        assert_eq!(Effect::message("hi"), Effect::Message("hi".to_string()));
    }

    #[test]
    fn test_is_noop() {
        assert!(Effect::NoOp.is_noop());
        assert!(Effect::batch([Effect::NoOp, Effect::batch([])]).is_noop());
        assert!(!Effect::batch([Effect::NoOp, Effect::heal(1)]).is_noop());
        assert!(!Effect::message("x").is_noop());
    }

    #[test]
    fn test_default_is_noop() {
        assert_eq!(Effect::default(), Effect::NoOp);
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::batch([
            Effect::gain_mana(ManaElement::Void, 1),
            Effect::message("Hejsan"),
            Effect::NoOp,
        ]);
        let json = serde_json::to_string(&effect).unwrap();
        assert_eq!(
            json,
            r#"{"batch":[{"gain_mana":{"element":"void","amount":1}},{"message":"Hejsan"},"no_op"]}"#
        );

        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(serde_json::from_str::<Effect>(r#"{"damage":{"amount":-3}}"#).is_err());
        assert!(serde_json::from_str::<Effect>(r#"{"heal":{"amount":-3}}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Effect>(r#"{"damage":{"amount":3}}"#).unwrap(),
            Effect::damage(3)
        );
    }
}
