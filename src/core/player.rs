//! Per-player resources and zones.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::mana::ManaPool;
use crate::zones::ZoneManager;

/// Everything the single player owns.
///
/// Effects mutate mana, health and draw rate; the round engine reads them
/// back on the next tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Reset to zero at every round start.
    pub mana: ManaPool,

    /// The game ends when this drops to zero or below.
    pub health: i64,

    /// Cards drawn per round start.
    pub draw_rate: u32,

    pub zones: ZoneManager,
}

impl PlayerState {
    /// Fresh player: empty pool, starting health, empty zones.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mana: ManaPool::new(),
            health: config.starting_health,
            draw_rate: config.draw_rate,
            zones: ZoneManager::new(&config.capacities),
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
