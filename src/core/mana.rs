//! Mana elements, pools and costs.
//!
//! Every card cost and the player's pool are denominated in the same fixed
//! set of elements. Costs are compared element-wise: a pool pays a cost only
//! when every element holds at least the required amount.

use serde::{Deserialize, Serialize};

/// Number of mana elements.
pub const ELEMENT_COUNT: usize = 7;

/// A mana element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManaElement {
    Void,
    Light,
    Time,
    Fire,
    Earth,
    Lightning,
    Water,
}

impl ManaElement {
    /// All elements in pool order.
    pub const ALL: [ManaElement; ELEMENT_COUNT] = [
        ManaElement::Void,
        ManaElement::Light,
        ManaElement::Time,
        ManaElement::Fire,
        ManaElement::Earth,
        ManaElement::Lightning,
        ManaElement::Water,
    ];

    /// Position of this element in a pool or cost vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ManaElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ManaElement::Void => "VOID",
            ManaElement::Light => "LIGHT",
            ManaElement::Time => "TIME",
            ManaElement::Fire => "FIRE",
            ManaElement::Earth => "EARTH",
            ManaElement::Lightning => "LIGHTNING",
            ManaElement::Water => "WATER",
        };
        f.write_str(name)
    }
}

/// The mana cost of a card, one amount per element.
///
/// ```
/// use conduit_ccg::core::{ManaCost, ManaElement};
///
/// let cost = ManaCost::free().with(ManaElement::Void, 1).with(ManaElement::Fire, 2);
/// assert_eq!(cost.get(ManaElement::Fire), 2);
/// assert_eq!(cost.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCost([u32; ELEMENT_COUNT]);

impl ManaCost {
    /// A cost of zero in every element.
    #[must_use]
    pub const fn free() -> Self {
        Self([0; ELEMENT_COUNT])
    }

    /// Set the amount required for one element (builder pattern).
    #[must_use]
    pub fn with(mut self, element: ManaElement, amount: u32) -> Self {
        self.0[element.index()] = amount;
        self
    }

    #[must_use]
    pub fn get(&self, element: ManaElement) -> u32 {
        self.0[element.index()]
    }

    /// Sum over all elements.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.0.iter().all(|&amount| amount == 0)
    }

    /// Iterate over `(element, amount)` pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (ManaElement, u32)> + '_ {
        ManaElement::ALL.iter().map(move |&e| (e, self.0[e.index()]))
    }
}

/// The player's mana pool.
///
/// Counters are unsigned, and `pay` checks every element before it
/// subtracts anything, so a pool never goes negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaPool([u32; ELEMENT_COUNT]);

impl ManaPool {
    /// An empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ELEMENT_COUNT])
    }

    #[must_use]
    pub fn get(&self, element: ManaElement) -> u32 {
        self.0[element.index()]
    }

    /// Add mana of one element.
    pub fn add(&mut self, element: ManaElement, amount: u32) {
        let slot = &mut self.0[element.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Empty every element (round start).
    pub fn reset(&mut self) {
        self.0 = [0; ELEMENT_COUNT];
    }

    /// First element where the pool falls short of `cost`, if any.
    #[must_use]
    pub fn first_shortfall(&self, cost: &ManaCost) -> Option<ManaElement> {
        cost.iter()
            .find(|&(element, amount)| self.get(element) < amount)
            .map(|(element, _)| element)
    }

    /// Check if the pool covers `cost` in every element.
    #[must_use]
    pub fn can_pay(&self, cost: &ManaCost) -> bool {
        self.first_shortfall(cost).is_none()
    }

    /// Pay `cost` from the pool.
    ///
    /// Returns `false` and leaves the pool untouched if any element is short.
    pub fn pay(&mut self, cost: &ManaCost) -> bool {
        if !self.can_pay(cost) {
            return false;
        }
        for (element, amount) in cost.iter() {
            self.0[element.index()] -= amount;
        }
        true
    }

    /// Raw per-element counters, in pool order.
    #[must_use]
    pub fn as_array(&self) -> [u32; ELEMENT_COUNT] {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&amount| amount == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_index_matches_all() {
        for (i, element) in ManaElement::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
        assert_eq!(format!("{}", ManaElement::Lightning), "LIGHTNING");
    }

    #[test]
    fn test_pay_exact() {
        let mut pool = ManaPool::new();
        pool.add(ManaElement::Void, 1);

        let cost = ManaCost::free().with(ManaElement::Void, 1);
        assert!(pool.pay(&cost));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pay_requires_every_element() {
        let mut pool = ManaPool::new();
        pool.add(ManaElement::Void, 5);
        pool.add(ManaElement::Fire, 1);

        let cost = ManaCost::free()
            .with(ManaElement::Void, 2)
            .with(ManaElement::Fire, 2);

        assert_eq!(pool.first_shortfall(&cost), Some(ManaElement::Fire));
        assert!(!pool.pay(&cost));

        // Untouched after a rejected payment
        assert_eq!(pool.get(ManaElement::Void), 5);
        assert_eq!(pool.get(ManaElement::Fire), 1);
    }

    #[test]
    fn test_free_cost_always_payable() {
        let mut pool = ManaPool::new();
        assert!(ManaCost::free().is_free());
        assert!(pool.pay(&ManaCost::free()));
    }

    #[test]
    fn test_reset() {
        let mut pool = ManaPool::new();
        for element in ManaElement::ALL {
            pool.add(element, 3);
        }
        pool.reset();
        assert_eq!(pool.as_array(), [0; ELEMENT_COUNT]);
    }

    #[test]
    fn test_add_saturates() {
        let mut pool = ManaPool::new();
        pool.add(ManaElement::Water, u32::MAX);
        pool.add(ManaElement::Water, 10);
        assert_eq!(pool.get(ManaElement::Water), u32::MAX);
    }

    #[test]
    fn test_element_serde() {
        let json = serde_json::to_string(&ManaElement::Lightning).unwrap();
        assert_eq!(json, "\"lightning\"");
    }
}
